//! Pan camera and screen↔plane coordinate conversions.
//!
//! The view is anchored at the viewport center: the plane origin sits at
//! `viewport/2 + pan offset` in screen space, the scale is the fixed
//! [`UNIT`] factor, and the y axis is flipped so plane-up is screen-up.
//! Forward and inverse mappings are exact inverses for the same camera
//! snapshot.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::UNIT;

/// A point in either screen or plane space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawable surface size in pixels, reported by the host on every resize.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the surface has no drawable area.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Camera state for panning the plane view.
///
/// `offset_x` / `offset_y` are accumulated pointer-drag deltas in pixels.
/// Panning is unbounded in both directions; there is no clamping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Camera {
    /// Screen position of the plane origin for the given viewport.
    #[must_use]
    pub fn center(self, viewport: Viewport) -> Point {
        Point::new(
            viewport.width / 2.0 + self.offset_x,
            viewport.height / 2.0 + self.offset_y,
        )
    }

    /// Convert a screen-space point (pixels) to plane coordinates.
    #[must_use]
    pub fn screen_to_plane(self, screen: Point, viewport: Viewport) -> Point {
        let c = self.center(viewport);
        Point::new((screen.x - c.x) * UNIT, (c.y - screen.y) * UNIT)
    }

    /// Convert a plane-space point to screen coordinates (pixels).
    ///
    /// Exact inverse of [`Camera::screen_to_plane`] for the same snapshot.
    #[must_use]
    pub fn plane_to_screen(self, plane: Point, viewport: Viewport) -> Point {
        let c = self.center(viewport);
        Point::new(c.x + plane.x / UNIT, c.y - plane.y / UNIT)
    }

    /// Accumulate a pointer-drag delta into the pan offset.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }
}
