// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::PARTY_SEQUENCE;
use input::*;
use particle_core::Command;

#[test]
fn toggle_keys_map_case_insensitively() {
    for (key, cmd) in [
        ("g", Command::ToggleGravity),
        ("G", Command::ToggleGravity),
        ("f", Command::ToggleFreeze),
        ("t", Command::ToggleTrails),
        ("T", Command::ToggleTrails),
        ("e", Command::Explode),
        ("d", Command::ToggleDebug),
    ] {
        assert_eq!(command_for_keydown(key, ""), Some(cmd), "key {key}");
        assert_eq!(command_for_keyup(key, ""), None, "key {key}");
    }
}

#[test]
fn held_keys_press_and_release() {
    assert_eq!(command_for_keydown("b", "KeyB"), Some(Command::SetBinary(true)));
    assert_eq!(command_for_keyup("B", "KeyB"), Some(Command::SetBinary(false)));
    assert_eq!(command_for_keydown(" ", "Space"), Some(Command::SetTimeWarp(true)));
    assert_eq!(command_for_keyup(" ", "Space"), Some(Command::SetTimeWarp(false)));
}

#[test]
fn unbound_keys_do_nothing() {
    for key in ["a", "x", "ArrowUp", "Enter", "1"] {
        assert_eq!(command_for_keydown(key, ""), None, "key {key}");
    }
}

#[test]
fn sequence_completes_once_and_resets() {
    let mut det = SequenceDetector::new(&PARTY_SEQUENCE);
    let hits: Vec<bool> = PARTY_SEQUENCE.iter().map(|k| det.feed(k)).collect();
    assert_eq!(hits.iter().filter(|h| **h).count(), 1);
    assert_eq!(hits.last(), Some(&true));
    assert_eq!(det.progress(), 0);

    // and again
    let fired = PARTY_SEQUENCE.iter().fold(false, |acc, k| det.feed(k) || acc);
    assert!(fired);
}

#[test]
fn sequence_mismatch_restarts() {
    let mut det = SequenceDetector::new(&PARTY_SEQUENCE);
    for k in &PARTY_SEQUENCE[..5] {
        assert!(!det.feed(k));
    }
    assert_eq!(det.progress(), 5);
    assert!(!det.feed("x"));
    assert_eq!(det.progress(), 0);
    // letters are matched exactly as reported by the browser
    for k in &PARTY_SEQUENCE[..8] {
        det.feed(k);
    }
    assert!(!det.feed("B"));
    assert_eq!(det.progress(), 0);
}
