#![allow(clippy::float_cmp)]

use super::*;

fn core() -> EngineCore {
    EngineCore::new(Box::new(|x: f64, y: f64| x - y * y), Options::default())
}

fn sized_core() -> EngineCore {
    let mut core = core();
    core.set_viewport(800.0, 600.0, 1.0);
    core
}

// --- Options ---

#[test]
fn options_default_values() {
    let options = Options::default();
    assert_eq!(options.step_px, 20);
    assert_eq!(options.isocline_k, 0.0);
}

#[test]
fn options_default_validates() {
    assert!(Options::default().validate().is_ok());
}

#[test]
fn options_from_full_json() {
    let options = match Options::from_json(r#"{"step_px": 10, "isocline_k": 1.5}"#) {
        Ok(options) => options,
        Err(err) => panic!("unexpected error: {err}"),
    };
    assert_eq!(options.step_px, 10);
    assert_eq!(options.isocline_k, 1.5);
}

#[test]
fn options_from_empty_json_fills_defaults() {
    let options = match Options::from_json("{}") {
        Ok(options) => options,
        Err(err) => panic!("unexpected error: {err}"),
    };
    assert_eq!(options, Options::default());
}

#[test]
fn options_reject_zero_step() {
    match Options::from_json(r#"{"step_px": 0}"#) {
        Err(OptionsError::InvalidStepPixels(0)) => {}
        other => panic!("expected InvalidStepPixels, got {other:?}"),
    }
}

#[test]
fn options_reject_negative_step() {
    match Options::from_json(r#"{"step_px": -4}"#) {
        Err(OptionsError::InvalidStepPixels(-4)) => {}
        other => panic!("expected InvalidStepPixels, got {other:?}"),
    }
}

#[test]
fn options_reject_malformed_json() {
    match Options::from_json("not json") {
        Err(OptionsError::Parse(_)) => {}
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn options_error_messages_name_the_problem() {
    let err = OptionsError::InvalidStepPixels(-1);
    assert!(err.to_string().contains("step_px"));
}

// --- Viewport ---

#[test]
fn set_viewport_records_size_and_dpr() {
    let mut core = core();
    core.set_viewport(1024.0, 768.0, 2.0);
    assert_eq!(core.viewport.width, 1024.0);
    assert_eq!(core.viewport.height, 768.0);
    assert_eq!(core.dpr, 2.0);
}

// --- Pointer gestures ---

#[test]
fn primary_press_starts_panning() {
    let mut core = sized_core();
    let actions = core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, Modifiers::default());
    assert_eq!(core.input, InputState::Panning { last_screen: Point::new(100.0, 100.0) });
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Grabbing)]);
}

#[test]
fn secondary_press_is_ignored() {
    let mut core = sized_core();
    let actions = core.on_pointer_down(Point::new(100.0, 100.0), Button::Secondary, Modifiers::default());
    assert_eq!(core.input, InputState::Idle);
    assert!(actions.is_empty());
}

#[test]
fn move_while_panning_accumulates_the_delta() {
    let mut core = sized_core();
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, Modifiers::default());
    let actions = core.on_pointer_move(Point::new(130.0, 90.0), Modifiers::default());
    assert_eq!(core.camera.offset_x, 30.0);
    assert_eq!(core.camera.offset_y, -10.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
}

#[test]
fn pan_deltas_chain_across_moves() {
    let mut core = sized_core();
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Primary, Modifiers::default());
    core.on_pointer_move(Point::new(10.0, 5.0), Modifiers::default());
    core.on_pointer_move(Point::new(25.0, -5.0), Modifiers::default());
    assert_eq!(core.camera.offset_x, 25.0);
    assert_eq!(core.camera.offset_y, -5.0);
}

#[test]
fn move_while_idle_leaves_the_camera_alone() {
    let mut core = sized_core();
    core.on_pointer_move(Point::new(300.0, 200.0), Modifiers::default());
    assert_eq!(core.camera.offset_x, 0.0);
    assert_eq!(core.camera.offset_y, 0.0);
}

#[test]
fn every_move_updates_the_seed() {
    let mut core = sized_core();
    assert!(core.seed().is_none());
    core.on_pointer_move(Point::new(300.0, 200.0), Modifiers::default());
    assert_eq!(core.seed(), Some(Point::new(300.0, 200.0)));
    core.on_pointer_move(Point::new(310.0, 210.0), Modifiers::default());
    assert_eq!(core.seed(), Some(Point::new(310.0, 210.0)));
}

#[test]
fn primary_release_ends_the_pan() {
    let mut core = sized_core();
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, Modifiers::default());
    let actions = core.on_pointer_up(Point::new(120.0, 100.0), Button::Primary, Modifiers::default());
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Default)]);
}

#[test]
fn release_without_a_gesture_is_ignored() {
    let mut core = sized_core();
    let actions = core.on_pointer_up(Point::new(120.0, 100.0), Button::Primary, Modifiers::default());
    assert!(actions.is_empty());
}

#[test]
fn leave_clears_seed_and_gesture() {
    let mut core = sized_core();
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, Modifiers::default());
    core.on_pointer_move(Point::new(110.0, 100.0), Modifiers::default());
    let actions = core.on_pointer_leave();
    assert!(core.seed().is_none());
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Default), Action::RenderNeeded]);
}

// --- Scene assembly ---

#[test]
fn scene_before_viewport_is_empty() {
    let core = core();
    let scene = core.scene();
    assert!(scene.field.is_empty());
    assert!(scene.isocline.is_empty());
    assert!(scene.euler.is_none());
    assert!(scene.rk4.is_none());
}

#[test]
fn scene_without_a_seed_has_no_curves() {
    let core = sized_core();
    let scene = core.scene();
    assert!(!scene.field.is_empty());
    assert!(scene.euler.is_none());
    assert!(scene.rk4.is_none());
}

#[test]
fn scene_with_a_seed_carries_both_curves() {
    let mut core = sized_core();
    core.on_pointer_move(Point::new(400.0, 300.0), Modifiers::default());
    let scene = core.scene();
    let euler = match scene.euler {
        Some(curve) => curve,
        None => panic!("expected an Euler curve"),
    };
    let rk4 = match scene.rk4 {
        Some(curve) => curve,
        None => panic!("expected a Runge-Kutta curve"),
    };
    assert_eq!(euler.seed, Point::new(400.0, 300.0));
    assert_eq!(rk4.seed, Point::new(400.0, 300.0));
}

#[test]
fn scene_center_follows_the_camera() {
    let mut core = sized_core();
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Primary, Modifiers::default());
    core.on_pointer_move(Point::new(50.0, 20.0), Modifiers::default());
    let scene = core.scene();
    assert_eq!(scene.center, Point::new(450.0, 320.0));
}

#[test]
fn scene_isocline_uses_the_configured_level() {
    let options = Options { isocline_k: 1.0, ..Options::default() };
    let mut core = EngineCore::new(Box::new(|x: f64, y: f64| x - y * y), options);
    core.set_viewport(800.0, 600.0, 1.0);
    // Plane (1, 0) sits 80 px right of center and carries slope 1.
    assert!(core.scene().isocline.contains(&Point::new(480.0, 300.0)));
}

#[test]
fn options_are_exposed_to_the_host() {
    let core = core();
    assert_eq!(core.options(), Options::default());
}
