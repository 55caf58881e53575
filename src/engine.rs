//! Top-level engine: options, pointer handling, and scene assembly.
//!
//! `EngineCore` holds all state and logic that does not depend on the canvas
//! element, so it can be tested without WASM/browser dependencies. `Engine`
//! wraps it together with the [`web_sys::HtmlCanvasElement`] it draws to.
//! Input handlers return [`Action`]s for the host to process; the engine
//! never reaches into the DOM on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Viewport};
use crate::consts::DEFAULT_STEP_PX;
use crate::field::{self, Segment, SlopeField};
use crate::input::{Button, Cursor, InputState, Modifiers};
use crate::render;
use crate::solve::{self, Method, SolutionCurve};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Host-tunable knobs, hydrated from a JSON payload at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Grid spacing of the direction-field overlay, in screen pixels.
    pub step_px: i32,
    /// Slope level traced by the isocline overlay.
    pub isocline_k: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self { step_px: DEFAULT_STEP_PX, isocline_k: 0.0 }
    }
}

impl Options {
    /// Parse and validate options from a host-supplied JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`] on malformed JSON and
    /// [`OptionsError::InvalidStepPixels`] when `step_px` is not positive.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check the invariants the samplers rely on.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidStepPixels`] when `step_px` is not
    /// positive; the grid anchor divides by it.
    pub fn validate(self) -> Result<(), OptionsError> {
        if self.step_px <= 0 {
            return Err(OptionsError::InvalidStepPixels(self.step_px));
        }
        Ok(())
    }
}

/// Failures hydrating [`Options`] from the host.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// `step_px` must be positive; the sampling grid divides by it.
    #[error("step_px must be positive, got {0}")]
    InvalidStepPixels(i32),
    /// The JSON payload did not match the options shape.
    #[error("invalid options payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// The host should apply this cursor to the canvas element.
    SetCursor(Cursor),
    /// Engine state changed in a way that affects pixels; redraw.
    RenderNeeded,
}

/// Everything the renderer needs for one frame, in screen space.
///
/// Assembled fresh per frame by [`EngineCore::scene`]; holds no references
/// into the engine.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Screen position of the plane origin; the axes cross here.
    pub center: Point,
    /// Direction-field overlay segments.
    pub field: Vec<Segment>,
    /// Pixels on the isocline of the configured level.
    pub isocline: Vec<Point>,
    /// Solution through the seed under Euler stepping, if a seed is placed.
    pub euler: Option<SolutionCurve>,
    /// Solution through the same seed under Runge-Kutta stepping.
    pub rk4: Option<SolutionCurve>,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    field: Box<dyn SlopeField>,
    options: Options,
    pub camera: Camera,
    pub input: InputState,
    pub viewport: Viewport,
    pub dpr: f64,
    /// Last hover position; the seed for both solution curves.
    pointer: Option<Point>,
}

impl EngineCore {
    /// Build a core over the given slope function.
    ///
    /// `options` are taken as-is; hydrate through [`Options::from_json`] to
    /// get validation.
    #[must_use]
    pub fn new(field: Box<dyn SlopeField>, options: Options) -> Self {
        Self {
            field,
            options,
            camera: Camera::default(),
            input: InputState::default(),
            viewport: Viewport::default(),
            dpr: 1.0,
            pointer: None,
        }
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        log::debug!("viewport {width_css}x{height_css} @ dpr {dpr}");
        self.viewport = Viewport::new(width_css, height_css);
        self.dpr = dpr;
    }

    // --- Input events ---

    /// Pointer pressed: a primary-button press starts a pan gesture.
    pub fn on_pointer_down(
        &mut self,
        screen_pt: Point,
        button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor(Cursor::Grabbing)]
    }

    /// Pointer moved: advance an active pan and move the seed.
    ///
    /// The seed follows the pointer even mid-pan, matching what the view
    /// shows: the curve stays glued to the cursor.
    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        if let InputState::Panning { last_screen } = self.input {
            self.camera.pan(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
            self.input = InputState::Panning { last_screen: screen_pt };
        }
        self.pointer = Some(screen_pt);
        vec![Action::RenderNeeded]
    }

    /// Pointer released: end the pan gesture, if one is active.
    pub fn on_pointer_up(
        &mut self,
        _screen_pt: Point,
        button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != Button::Primary || self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(Cursor::Default)]
    }

    /// Pointer left the canvas: drop the seed and any active gesture.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.pointer = None;
        self.input = InputState::Idle;
        vec![Action::SetCursor(Cursor::Default), Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// The current seed position, if the pointer is over the canvas.
    #[must_use]
    pub fn seed(&self) -> Option<Point> {
        self.pointer
    }

    // --- Scene assembly ---

    /// Sample everything visible into a [`Scene`] for the renderer.
    ///
    /// Both integration methods run over the same seed so their curves can
    /// be compared on screen.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let f = &*self.field;
        let euler = self
            .pointer
            .and_then(|seed| solve::solution(f, self.camera, self.viewport, seed, Method::Euler));
        let rk4 = self
            .pointer
            .and_then(|seed| solve::solution(f, self.camera, self.viewport, seed, Method::Rk4));
        Scene {
            center: self.camera.center(self.viewport),
            field: field::direction_field(f, self.camera, self.viewport, self.options.step_px),
            isocline: field::isocline(
                f,
                self.camera,
                self.viewport,
                self.options.isocline_k,
                self.options.step_px,
            ),
            euler,
            rk4,
        }
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, field: Box<dyn SlopeField>, options: Options) -> Self {
        log::info!("engine start: step_px={}, isocline_k={}", options.step_px, options.isocline_k);
        Self { canvas, core: EngineCore::new(field, options) }
    }

    // --- Viewport ---

    /// Update viewport dimensions, resizing the canvas backing store to
    /// match the device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
        self.core.set_viewport(width_css, height_css, dpr);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D`
    /// call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core.scene(), self.core.viewport, self.core.dpr)
    }
}
