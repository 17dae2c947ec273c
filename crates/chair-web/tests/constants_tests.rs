// Host-side checks that the injected stylesheet targets the DOM hooks the panel creates.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn stylesheet_targets_panel_and_idle_badge() {
    assert!(PANEL_CSS.contains(&format!("#{PANEL_ID} ")));
    assert!(PANEL_CSS.contains(&format!("#{IDLE_INDICATOR_ID} ")));
}

#[test]
fn idle_badge_explains_how_to_stop() {
    assert!(IDLE_INDICATOR_TEXT.starts_with("Auto-rotating views"));
    assert!(IDLE_INDICATOR_TEXT.ends_with("Move mouse to stop"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_colors_are_linear_unit_values() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(FLOOR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}
