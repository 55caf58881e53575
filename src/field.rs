//! Field sampling: the user-supplied slope function, the direction-field
//! overlay, and the isocline scan.
//!
//! Both samplers walk the visible viewport in screen space, map each sample
//! point into the plane, and evaluate the field there. The grid is anchored
//! so a row and a column always pass through the current view center, which
//! keeps the overlay stable under panning. Non-finite slope values are not
//! guarded; they propagate into non-finite segment coordinates, which the
//! renderer tolerates.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use crate::camera::{Camera, Point, Viewport};
use crate::consts::{FIELD_HALF_LEN_PX, ISOCLINE_EPS};

/// User-supplied slope function dy/dx = f(x, y) over the plane.
///
/// The sole domain-specific input, injected once at engine construction.
/// Implemented for any `Fn(f64, f64) -> f64`, so hosts can pass a plain
/// closure.
pub trait SlopeField {
    fn slope(&self, x: f64, y: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> SlopeField for F {
    fn slope(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// A line segment between two screen-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

/// Sample the direction field at every grid point of the visible viewport.
///
/// Each sample emits a fixed-length segment oriented along the local slope,
/// centered on the grid point. Segments depict slope *direction* only; the
/// magnitude is normalized away.
#[must_use]
pub fn direction_field(
    field: &dyn SlopeField,
    camera: Camera,
    viewport: Viewport,
    step_px: i32,
) -> Vec<Segment> {
    if viewport.is_empty() {
        return Vec::new();
    }

    let center = camera.center(viewport);
    let (x_min, y_min) = grid_origin(center, step_px);
    let x_limit = viewport.width as i32 + step_px;
    let y_limit = viewport.height as i32 + step_px;

    let mut segments = Vec::new();
    let mut x = x_min;
    while x < x_limit {
        let mut y = y_min;
        while y < y_limit {
            let p = Point::new(f64::from(x), f64::from(y));
            let plane = camera.screen_to_plane(p, viewport);
            let v = slope_vector(field.slope(plane.x, plane.y));
            segments.push(Segment {
                a: Point::new(p.x - v.x, p.y - v.y),
                b: Point::new(p.x + v.x, p.y + v.y),
            });
            y += step_px;
        }
        x += step_px;
    }
    segments
}

/// Scan every pixel of the visible viewport and collect those where the
/// slope is within [`ISOCLINE_EPS`] of `k`.
///
/// Brute-force level-set approximation at full pixel resolution; the
/// tolerance band is fixed, not adaptive to the view. The scan starts from
/// the same grid-anchored minimum as the field overlay.
#[must_use]
pub fn isocline(
    field: &dyn SlopeField,
    camera: Camera,
    viewport: Viewport,
    k: f64,
    step_px: i32,
) -> Vec<Point> {
    if viewport.is_empty() {
        return Vec::new();
    }

    let center = camera.center(viewport);
    let (x_min, y_min) = grid_origin(center, step_px);
    let x_limit = viewport.width as i32 + step_px;
    let y_limit = viewport.height as i32 + step_px;

    let mut pixels = Vec::new();
    for x in x_min..x_limit {
        for y in y_min..y_limit {
            let p = Point::new(f64::from(x), f64::from(y));
            let plane = camera.screen_to_plane(p, viewport);
            if (field.slope(plane.x, plane.y) - k).abs() < ISOCLINE_EPS {
                pixels.push(p);
            }
        }
    }
    pixels
}

/// Minimum visible grid coordinates, chosen so a grid line passes through
/// the (truncated) view center.
fn grid_origin(center: Point, step_px: i32) -> (i32, i32) {
    (
        grid_min(center.x as i32, step_px),
        grid_min(center.y as i32, step_px),
    )
}

fn grid_min(center: i32, step: i32) -> i32 {
    center - (center / step + 1) * step
}

/// Unit vector along `(1, slope)`, scaled to the fixed half-length and
/// flipped into screen space.
fn slope_vector(slope: f64) -> Point {
    let len = slope.hypot(1.0);
    Point::new(
        FIELD_HALF_LEN_PX / len,
        -(FIELD_HALF_LEN_PX * slope / len),
    )
}
