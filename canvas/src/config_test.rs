#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let cfg = CanvasConfig::default();
    assert_eq!(cfg.touch_target, 44.0);
    assert_eq!(cfg.handle_radius, 8.0);
    assert_eq!(cfg.palette_width, 44.0);
    assert_eq!(cfg.swatch_spacing, 5.0);
    assert_eq!(cfg.fade_duration, Duration::from_millis(150));
    assert_eq!(cfg.default_color, Rgba::DEFAULT_TINT);
}

#[test]
fn derived_margin_and_minimum_size() {
    let cfg = CanvasConfig::default();
    assert_eq!(cfg.handle_margin(), 22.0);
    assert_eq!(cfg.minimum_size(), 44.0);

    let big_handles = CanvasConfig { handle_radius: 30.0, ..CanvasConfig::default() };
    assert_eq!(big_handles.minimum_size(), 60.0);
}

#[test]
fn from_lookup_empty_is_default() {
    let cfg = CanvasConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, CanvasConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = CanvasConfig::from_lookup(lookup_from(&[
        ("DRAWSHAPES_TOUCH_TARGET", "48"),
        ("DRAWSHAPES_HANDLE_RADIUS", " 10.5 "),
        ("DRAWSHAPES_PALETTE_WIDTH", "60"),
        ("DRAWSHAPES_SWATCH_SPACING", "2"),
        ("DRAWSHAPES_FADE_MS", "300"),
    ]))
    .unwrap();
    assert_eq!(cfg.touch_target, 48.0);
    assert_eq!(cfg.handle_radius, 10.5);
    assert_eq!(cfg.palette_width, 60.0);
    assert_eq!(cfg.swatch_spacing, 2.0);
    assert_eq!(cfg.fade_duration, Duration::from_millis(300));
}

#[test]
fn from_lookup_rejects_garbage() {
    let err = CanvasConfig::from_lookup(lookup_from(&[("DRAWSHAPES_TOUCH_TARGET", "wide")])).unwrap_err();
    assert_eq!(err, ConfigError::Parse { var: "DRAWSHAPES_TOUCH_TARGET".into(), value: "wide".into() });
    assert!(err.to_string().contains("DRAWSHAPES_TOUCH_TARGET"));
}

#[test]
fn from_lookup_rejects_non_positive() {
    let err = CanvasConfig::from_lookup(lookup_from(&[("DRAWSHAPES_HANDLE_RADIUS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));

    let err = CanvasConfig::from_lookup(lookup_from(&[("DRAWSHAPES_FADE_MS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));

    let err = CanvasConfig::from_lookup(lookup_from(&[("DRAWSHAPES_SWATCH_SPACING", "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

#[test]
fn from_env_without_variables_is_default() {
    // Nothing in the test environment sets DRAWSHAPES_* variables.
    let cfg = CanvasConfig::from_env().unwrap();
    assert_eq!(cfg.touch_target, 44.0);
}
