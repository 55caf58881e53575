//! Shared numeric constants for the slope-field engine.

// ── Plane mapping ───────────────────────────────────────────────

/// Plane units per screen pixel (80 px per plane unit). Fixed; no zoom.
pub const UNIT: f64 = 1.0 / 80.0;

// ── Sampling ────────────────────────────────────────────────────

/// Screen-x advance per integration step, in pixels.
pub const STEP_SIZE: f64 = 5.0;

/// Default grid spacing for the direction-field overlay, in pixels.
pub const DEFAULT_STEP_PX: i32 = 20;

/// Half-length of a direction-field segment, in screen pixels.
pub const FIELD_HALF_LEN_PX: f64 = 6.0;

/// Isocline membership tolerance: a pixel is marked when |f(x,y) − K| < EPS.
pub const ISOCLINE_EPS: f64 = 0.02;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke width of a solution curve, in screen pixels.
pub const SOLUTION_WIDTH_PX: f64 = 2.0;

/// Radius of the seed marker circle, in screen pixels.
pub const SEED_RADIUS_PX: f64 = 3.0;
