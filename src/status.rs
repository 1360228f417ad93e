// Status line and debug overlay text. No DOM access here; `overlay` writes
// the results into the page.

use glam::DVec2;
use std::time::Duration;

pub struct StatusLine {
    text: String,
    next_hint: usize,
    since_change: Duration,
    hints: &'static [&'static str],
    period: Duration,
    sticky: &'static [&'static str],
}

impl StatusLine {
    pub fn new(
        initial: &str,
        hints: &'static [&'static str],
        period: Duration,
        sticky: &'static [&'static str],
    ) -> Self {
        Self {
            text: initial.to_owned(),
            next_hint: 0,
            since_change: Duration::ZERO,
            hints,
            period,
            sticky,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.since_change = Duration::ZERO;
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky.iter().any(|m| self.text.contains(m))
    }

    /// Advance the hint timer. Returns the new text when a hint replaced it.
    pub fn tick(&mut self, dt: Duration) -> Option<&str> {
        self.since_change += dt;
        if self.since_change < self.period {
            return None;
        }
        self.since_change = Duration::ZERO;
        if self.is_sticky() || self.hints.is_empty() {
            return None;
        }
        let hint = self.hints[self.next_hint];
        self.next_hint = (self.next_hint + 1) % self.hints.len();
        self.set(hint);
        Some(self.text.as_str())
    }
}

/// Values shown in the debug overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebugStats {
    pub fps: u32,
    pub particles: usize,
    pub pointer: Option<DVec2>,
    pub gravity: bool,
    pub trails: bool,
}

fn on_off(v: bool) -> &'static str {
    if v {
        "ON"
    } else {
        "OFF"
    }
}

pub fn overlay_lines(stats: &DebugStats) -> [String; 5] {
    let mouse = match stats.pointer {
        Some(p) => format!("MOUSE: {:.0}, {:.0}", p.x, p.y),
        None => "MOUSE: N/A, N/A".to_owned(),
    };
    [
        format!("FPS: {}", stats.fps),
        format!("PARTICLES: {}", stats.particles),
        mouse,
        format!("GRAVITY: {}", on_off(stats.gravity)),
        format!("TRAILS: {}", on_off(stats.trails)),
    ]
}
