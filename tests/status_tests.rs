// Host-side tests for status line rotation and debug overlay text.

#![allow(dead_code)]
mod status {
    include!("../src/status.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use glam::DVec2;
use status::*;
use std::time::Duration;

fn make_line() -> StatusLine {
    StatusLine::new(
        STATUS_INITIAL,
        &HINTS,
        Duration::from_millis(HINT_PERIOD_MS),
        &STICKY_MARKERS,
    )
}

#[test]
fn hints_rotate_after_each_period() {
    let mut line = make_line();
    assert_eq!(line.text(), "> system_ready");
    assert_eq!(line.tick(Duration::from_millis(3999)), None);
    assert_eq!(line.tick(Duration::from_millis(1)), Some(HINTS[0]));
    for expected in [HINTS[1], HINTS[2], HINTS[3], HINTS[0]] {
        assert_eq!(line.tick(Duration::from_secs(4)), Some(expected));
    }
}

#[test]
fn sticky_status_is_not_replaced() {
    let mut line = make_line();
    for text in [
        "> gravity: ON",
        "> trails: OFF",
        "> BOOM !",
        "> time_warp: ACTIVE",
        "> system_frozen",
    ] {
        line.set(text);
        assert!(line.is_sticky(), "{text}");
        assert_eq!(line.tick(Duration::from_secs(10)), None);
        assert_eq!(line.text(), text);
    }
}

#[test]
fn non_sticky_status_yields_to_hint() {
    let mut line = make_line();
    line.set("> matrix_loaded");
    assert!(!line.is_sticky());
    assert_eq!(line.tick(Duration::from_secs(4)), Some(HINTS[0]));
}

#[test]
fn setting_status_restarts_the_timer() {
    let mut line = make_line();
    line.tick(Duration::from_millis(3500));
    line.set("> system_restored");
    assert_eq!(line.tick(Duration::from_millis(3500)), None);
    assert_eq!(line.text(), "> system_restored");
}

#[test]
fn overlay_lines_format() {
    let stats = DebugStats {
        fps: 60,
        particles: 45,
        pointer: Some(DVec2::new(12.4, 300.6)),
        gravity: true,
        trails: false,
    };
    assert_eq!(
        overlay_lines(&stats),
        [
            "FPS: 60".to_string(),
            "PARTICLES: 45".to_string(),
            "MOUSE: 12, 301".to_string(),
            "GRAVITY: ON".to_string(),
            "TRAILS: OFF".to_string(),
        ]
    );
    let idle = DebugStats::default();
    assert_eq!(overlay_lines(&idle)[2], "MOUSE: N/A, N/A");
}
