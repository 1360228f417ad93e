use particle_core::Command;

/// Map a keydown to a simulation command. `key` is `KeyboardEvent.key`,
/// `code` is `KeyboardEvent.code`.
#[inline]
pub fn command_for_keydown(key: &str, code: &str) -> Option<Command> {
    if code == "Space" {
        return Some(Command::SetTimeWarp(true));
    }
    match key.to_ascii_lowercase().as_str() {
        "g" => Some(Command::ToggleGravity),
        "f" => Some(Command::ToggleFreeze),
        "t" => Some(Command::ToggleTrails),
        "e" => Some(Command::Explode),
        "d" => Some(Command::ToggleDebug),
        "b" => Some(Command::SetBinary(true)),
        _ => None,
    }
}

/// Release side of the held bindings.
#[inline]
pub fn command_for_keyup(key: &str, code: &str) -> Option<Command> {
    if code == "Space" {
        return Some(Command::SetTimeWarp(false));
    }
    match key.to_ascii_lowercase().as_str() {
        "b" => Some(Command::SetBinary(false)),
        _ => None,
    }
}

/// Matches a fixed key sequence. Any wrong key restarts from the beginning.
#[derive(Clone, Debug)]
pub struct SequenceDetector {
    sequence: &'static [&'static str],
    index: usize,
}

impl SequenceDetector {
    pub fn new(sequence: &'static [&'static str]) -> Self {
        Self { sequence, index: 0 }
    }

    /// Feed one key; true exactly when it completes the sequence.
    pub fn feed(&mut self, key: &str) -> bool {
        match self.sequence.get(self.index) {
            Some(expected) if *expected == key => {
                self.index += 1;
                if self.index == self.sequence.len() {
                    self.index = 0;
                    return true;
                }
            }
            _ => self.index = 0,
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.index
    }
}
