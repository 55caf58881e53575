//! Numerical integration of solution curves through a seed point.
//!
//! From the seed, two branches are walked along screen x (one backward,
//! one forward) under either Euler or classical Runge-Kutta stepping.
//! Each branch is an ordered list of screen points for rendering as
//! connected segments. Both branches are recomputed from scratch every
//! frame; the seed follows the pointer, so nothing is worth caching.

#[cfg(test)]
#[path = "solve_test.rs"]
mod solve_test;

use crate::camera::{Camera, Point, Viewport};
use crate::consts::{STEP_SIZE, UNIT};
use crate::field::SlopeField;

/// Integration scheme for stepping a solution curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// First-order stepping: one slope evaluation per step.
    Euler,
    /// Classical fourth-order Runge-Kutta: four evaluations per step.
    Rk4,
}

/// Which way a branch walks from the seed along screen x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Sign applied to the plane-space advance per step.
    fn sign(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

/// One integrated solution curve: backward and forward branches joined at
/// the seed.
///
/// Branch points are in accumulation order, walking away from the seed, so
/// `backward[0]` and `forward[0]` are the two points nearest the seed.
/// Both branches are non-empty by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionCurve {
    pub backward: Vec<Point>,
    pub forward: Vec<Point>,
    /// The literal seed screen position, for the marker.
    pub seed: Point,
}

/// Integrate the solution through `seed` (screen space) under `method`.
///
/// Returns `None` when either branch produced no points (a degenerate
/// viewport or a seed far off-screen), so the caller draws nothing rather
/// than half a curve.
#[must_use]
pub fn solution(
    field: &dyn SlopeField,
    camera: Camera,
    viewport: Viewport,
    seed: Point,
    method: Method,
) -> Option<SolutionCurve> {
    if viewport.is_empty() {
        return None;
    }

    let backward = walk(field, camera, viewport, seed, method, Direction::Backward);
    let forward = walk(field, camera, viewport, seed, method, Direction::Forward);
    if backward.is_empty() || forward.is_empty() {
        return None;
    }
    Some(SolutionCurve { backward, forward, seed })
}

/// Walk one branch away from the seed, one [`STEP_SIZE`] screen-x step at
/// a time, until the walk cursor leaves the viewport plus one step of
/// slack.
fn walk(
    field: &dyn SlopeField,
    camera: Camera,
    viewport: Viewport,
    seed: Point,
    method: Method,
    direction: Direction,
) -> Vec<Point> {
    let h = STEP_SIZE * UNIT;
    let sign = direction.sign();
    let mut plane = camera.screen_to_plane(seed, viewport);
    let mut points = Vec::new();

    // Points land one step past the cursor, so the branches' first points
    // sit one step either side of the seed and the bridge between them
    // spans the seed column.
    let mut cursor = match direction {
        Direction::Backward => seed.x - STEP_SIZE,
        Direction::Forward => seed.x,
    };
    loop {
        let in_bounds = match direction {
            Direction::Backward => cursor > -STEP_SIZE,
            Direction::Forward => cursor < viewport.width + STEP_SIZE,
        };
        if !in_bounds {
            break;
        }
        let slope = step_slope(field, plane, h, method);
        plane.x += sign * h;
        plane.y += sign * h * slope;
        points.push(camera.plane_to_screen(plane, viewport));
        cursor += sign * STEP_SIZE;
    }
    points
}

/// Effective slope for one step starting at `plane`.
///
/// Stages are always evaluated in the forward x direction; only the
/// applied step carries the branch sign.
fn step_slope(field: &dyn SlopeField, plane: Point, h: f64, method: Method) -> f64 {
    match method {
        Method::Euler => field.slope(plane.x, plane.y),
        Method::Rk4 => {
            let k1 = field.slope(plane.x, plane.y);
            let k2 = field.slope(plane.x + C2 * h, plane.y + A21 * h * k1);
            let k3 = field.slope(plane.x + C3 * h, plane.y + A32 * h * k2);
            let k4 = field.slope(plane.x + C4 * h, plane.y + A43 * h * k3);
            B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4
        }
    }
}

// Classical RK4 coefficients.
const C2: f64 = 0.5;
const C3: f64 = 0.5;
const C4: f64 = 1.0;
const A21: f64 = 0.5;
const A32: f64 = 0.5;
const A43: f64 = 1.0;
const B1: f64 = 1.0 / 6.0;
const B2: f64 = 1.0 / 3.0;
const B3: f64 = 1.0 / 3.0;
const B4: f64 = 1.0 / 6.0;
