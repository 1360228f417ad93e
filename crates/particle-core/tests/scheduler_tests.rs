// Host-side tests for frame pacing, driven with synthetic time.

use glam::DVec2;
use particle_core::*;
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(16);

#[test]
fn stopped_scheduler_never_fires() {
    let mut s = Scheduler::new(INTERVAL);
    assert!(!s.is_running());
    for _ in 0..10 {
        assert!(!s.advance(INTERVAL * 4));
    }
}

#[test]
fn first_advance_after_start_fires() {
    let mut s = Scheduler::new(INTERVAL);
    s.start();
    assert!(s.advance(Duration::ZERO));
    assert!(!s.advance(Duration::from_millis(10)));
    assert!(s.advance(Duration::from_millis(6)));
}

#[test]
fn fires_once_per_interval_at_steady_cadence() {
    let mut s = Scheduler::new(INTERVAL);
    s.start();
    s.advance(Duration::ZERO);
    let fired = (0..100)
        .filter(|_| s.advance(Duration::from_millis(8)))
        .count();
    assert_eq!(fired, 50);
}

#[test]
fn stall_does_not_replay_missed_frames() {
    let mut s = Scheduler::new(INTERVAL);
    s.start();
    s.advance(Duration::ZERO);
    assert!(s.advance(Duration::from_secs(2)));
    // the backlog was dropped; the next frame needs a fresh interval
    assert!(!s.advance(Duration::from_millis(1)));
}

#[test]
fn stop_suppresses_until_restarted() {
    let mut s = Scheduler::new(INTERVAL);
    s.start();
    assert!(s.advance(Duration::ZERO));
    s.stop();
    assert!(!s.advance(INTERVAL * 3));
    s.start();
    assert!(s.advance(Duration::ZERO));
}

#[test]
fn fps_counter_publishes_each_second() {
    let mut fps = FpsCounter::new();
    let mut readings = Vec::new();
    for _ in 0..120 {
        if let Some(v) = fps.frame(Duration::from_millis(20)) {
            readings.push(v);
        }
    }
    assert_eq!(readings, vec![50, 50]);
    assert_eq!(fps.fps(), 50);
}

#[test]
fn scheduler_drives_simulation_headlessly() {
    let mut sim = Simulation::new(SimConfig::default(), 9).expect("valid config");
    sim.resize(300.0, 200.0);
    let mut surface = RecordingSurface::new();
    let mut sched = Scheduler::new(sim.config().frame_interval);
    sched.start();

    let start: Vec<DVec2> = sim.particles().map(|p| p.position).collect();
    let mut frames = 0;
    for _ in 0..240 {
        if sched.advance(Duration::from_millis(4)) {
            sim.frame(&mut surface);
            surface.take();
            frames += 1;
        }
    }
    // 960 ms at ~16.7 ms per frame, plus the immediate first frame
    assert!((55..=59).contains(&frames), "frames = {frames}");
    let moved = sim
        .particles()
        .zip(start)
        .filter(|(p, s)| p.position != *s)
        .count();
    assert!(moved > 0);

    sched.stop();
    for _ in 0..10 {
        assert!(!sched.advance(Duration::from_millis(50)));
    }
}
