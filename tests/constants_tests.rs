// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use particle_core::{
    SimConfig, AMBIENT_COUNT, AMBIENT_SPEED, BURST_COUNT, BURST_SPEED, CONNECTION_MAX_ALPHA,
    FLOOR_RESTITUTION, MAX_PARTICLES, POINTER_RADIUS, POINTER_RADIUS_PRESSED, PUSH_STRENGTH,
    PUSH_STRENGTH_STRONG,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn population_constants_are_consistent() {
    assert!(AMBIENT_COUNT <= MAX_PARTICLES);
    assert!(BURST_COUNT > 0);
    assert!(BURST_SPEED > AMBIENT_SPEED);
    assert!(SimConfig::default().validate().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_have_logical_relationships() {
    // Pressing widens the pointer's reach and strengthens the push
    assert!(POINTER_RADIUS_PRESSED > POINTER_RADIUS);
    assert!(PUSH_STRENGTH_STRONG > PUSH_STRENGTH);
    // Floor bounce under gravity loses energy
    assert!(FLOOR_RESTITUTION > 0.0 && FLOOR_RESTITUTION < 1.0);
    assert!(CONNECTION_MAX_ALPHA > 0.0 && CONNECTION_MAX_ALPHA <= 1.0);
}

#[test]
fn page_constants_are_well_formed() {
    assert_eq!(PARTY_SEQUENCE.len(), 10);
    assert!(HINT_PERIOD_MS > 0);
    // hints must not look sticky or they would never rotate out
    for hint in HINTS {
        assert!(
            !STICKY_MARKERS.iter().any(|m| hint.contains(m)),
            "hint {hint} contains a sticky marker"
        );
    }
    assert!(!STICKY_MARKERS.iter().any(|m| STATUS_INITIAL.contains(m)));
    for id in [CANVAS_ID, LOGO_ID, MATRIX_TOGGLE_ID, STATUS_ID, DEBUG_OVERLAY_ID] {
        assert!(!id.is_empty() && !id.starts_with('#'));
    }
}
