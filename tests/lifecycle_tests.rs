// Host-side tests for the page lifecycle policy.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;
use particle_core::Scheduler;
use std::time::Duration;

#[test]
fn discarded_page_stops_the_loop() {
    assert_eq!(
        loop_action(PageTransition::Hide { persisted: false }),
        Some(LoopAction::Stop)
    );
}

#[test]
fn cached_page_pauses_and_resumes() {
    assert_eq!(
        loop_action(PageTransition::Hide { persisted: true }),
        Some(LoopAction::Pause)
    );
    assert_eq!(
        loop_action(PageTransition::Show { persisted: true }),
        Some(LoopAction::Resume)
    );
}

#[test]
fn fresh_load_leaves_loop_alone() {
    assert_eq!(loop_action(PageTransition::Show { persisted: false }), None);
}

#[test]
fn restored_page_draws_on_first_callback() {
    let interval = Duration::from_millis(16);
    let mut sched = Scheduler::new(interval);
    sched.start();
    assert!(sched.advance(Duration::ZERO));

    assert_eq!(
        loop_action(PageTransition::Hide { persisted: true }),
        Some(LoopAction::Pause)
    );
    sched.stop();
    assert!(!sched.advance(Duration::from_secs(30)));

    assert_eq!(
        loop_action(PageTransition::Show { persisted: true }),
        Some(LoopAction::Resume)
    );
    sched.start();
    assert!(sched.advance(Duration::ZERO));
    assert!(!sched.advance(Duration::from_millis(1)));
}
