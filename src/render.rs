//! Rendering: draws the full scene to a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`Scene`] snapshot and produces pixels; it does
//! not mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Point, Viewport};
use crate::consts::{SEED_RADIUS_PX, SOLUTION_WIDTH_PX};
use crate::engine::Scene;
use crate::field::Segment;
use crate::solve::SolutionCurve;

/// Canvas background.
const BACKGROUND: &str = "#F5F5F5";
/// Coordinate axes.
const AXIS: &str = "#000000";
/// Direction-field segments.
const FIELD: &str = "#828282";
/// Isocline pixels.
const ISOCLINE: &str = "#0079F1";
/// Euler solution curve and the seed marker.
const EULER: &str = "#00E430";
/// Runge-Kutta solution curve.
const RK4: &str = "#E62937";

/// Draw the full scene: axes, field overlay, isocline, and solution curves.
///
/// `viewport` is in CSS pixels; `dpr` is the device pixel ratio applied to
/// the base transform.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    viewport: Viewport,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear onto the background color.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    // Layer 2: axes through the plane origin.
    draw_axes(ctx, scene.center, viewport);

    // Layer 3: field overlay and isocline.
    ctx.set_stroke_style_str(FIELD);
    ctx.set_line_width(1.0);
    for segment in &scene.field {
        stroke_segment(ctx, *segment);
    }
    ctx.set_fill_style_str(ISOCLINE);
    for p in &scene.isocline {
        ctx.fill_rect(p.x, p.y, 1.0, 1.0);
    }

    // Layer 4: solution curves, Euler under Runge-Kutta.
    if let Some(curve) = &scene.euler {
        draw_solution(ctx, curve, EULER)?;
    }
    if let Some(curve) = &scene.rk4 {
        draw_solution(ctx, curve, RK4)?;
    }

    Ok(())
}

fn draw_axes(ctx: &CanvasRenderingContext2d, center: Point, viewport: Viewport) {
    ctx.set_stroke_style_str(AXIS);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(0.0, center.y);
    ctx.line_to(viewport.width, center.y);
    ctx.move_to(center.x, 0.0);
    ctx.line_to(center.x, viewport.height);
    ctx.stroke();
}

/// Stroke one curve: each branch as connected segments, a bridge across the
/// seed column, and the seed marker on top.
fn draw_solution(
    ctx: &CanvasRenderingContext2d,
    curve: &SolutionCurve,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(SOLUTION_WIDTH_PX);

    for pair in curve.backward.windows(2) {
        stroke_segment(ctx, Segment { a: pair[0], b: pair[1] });
    }
    for pair in curve.forward.windows(2) {
        stroke_segment(ctx, Segment { a: pair[0], b: pair[1] });
    }
    // Both branches are non-empty when a curve exists, so the bridge always
    // has two endpoints.
    if let (Some(a), Some(b)) = (curve.backward.first(), curve.forward.first()) {
        stroke_segment(ctx, Segment { a: *a, b: *b });
    }

    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.arc(curve.seed.x, curve.seed.y, SEED_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}

fn stroke_segment(ctx: &CanvasRenderingContext2d, segment: Segment) {
    ctx.begin_path();
    ctx.move_to(segment.a.x, segment.a.y);
    ctx.line_to(segment.b.x, segment.b.y);
    ctx.stroke();
}
