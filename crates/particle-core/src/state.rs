//! Mode flags, pointer state and the discrete commands that change them.
//!
//! Input handlers write these; the frame loop takes a copy at the start of
//! every frame and passes it down to the particles read-only.

use glam::DVec2;

/// Global visual and physics modes. Each flag is independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub gravity: bool,
    pub matrix: bool,
    pub party: bool,
    pub binary: bool,
    pub frozen: bool,
    pub trails: bool,
    pub time_warp: bool,
    /// Front-end overlay visibility; no effect on the simulation.
    pub debug_overlay: bool,
}

/// Pointer as seen by a particle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: DVec2,
    pub pressed: bool,
}

/// Live pointer state. `position` is `None` once the pointer leaves the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Option<DVec2>,
    pub pressed: bool,
}

impl PointerState {
    pub fn moved(&mut self, position: DVec2) {
        self.position = Some(position);
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn leave(&mut self) {
        self.position = None;
        self.pressed = false;
    }

    pub fn snapshot(&self) -> Option<Pointer> {
        self.position.map(|position| Pointer {
            position,
            pressed: self.pressed,
        })
    }
}

/// Discrete input commands mapped from host events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleGravity,
    ToggleFreeze,
    ToggleTrails,
    Explode,
    ToggleDebug,
    /// Held input: true on press, false on release.
    SetBinary(bool),
    /// Held input: true on press, false on release.
    SetTimeWarp(bool),
    ToggleParty,
    ToggleMatrix,
}

/// Status-line messages produced by commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Gravity(bool),
    Frozen(bool),
    Trails(bool),
    Boom,
    TimeWarp(bool),
    Party(bool),
    Matrix(bool),
}

impl Status {
    pub fn text(&self) -> &'static str {
        match *self {
            Status::Gravity(true) => "> gravity: ON",
            Status::Gravity(false) => "> gravity: OFF",
            Status::Frozen(true) => "> system_frozen",
            Status::Frozen(false) => "> system_resumed",
            Status::Trails(true) => "> trails: ON",
            Status::Trails(false) => "> trails: OFF",
            Status::Boom => "> BOOM !",
            Status::TimeWarp(true) => "> time_warp: ACTIVE",
            Status::TimeWarp(false) => "> time_warp: OFF",
            Status::Party(true) => "> PARTY_MODE !!!",
            Status::Party(false) => "> party_over",
            Status::Matrix(true) => "> matrix_loaded",
            Status::Matrix(false) => "> system_restored",
        }
    }
}

impl ModeFlags {
    /// Apply a flag command. `Explode` is not a flag change and yields
    /// `Status::Boom` without touching the flags; the simulation handles it.
    pub fn apply(&mut self, cmd: Command) -> Option<Status> {
        match cmd {
            Command::ToggleGravity => {
                self.gravity = !self.gravity;
                Some(Status::Gravity(self.gravity))
            }
            Command::ToggleFreeze => {
                self.frozen = !self.frozen;
                Some(Status::Frozen(self.frozen))
            }
            Command::ToggleTrails => {
                self.trails = !self.trails;
                Some(Status::Trails(self.trails))
            }
            Command::Explode => Some(Status::Boom),
            Command::ToggleDebug => {
                self.debug_overlay = !self.debug_overlay;
                None
            }
            Command::SetBinary(on) => {
                self.binary = on;
                None
            }
            Command::SetTimeWarp(on) => {
                self.time_warp = on;
                Some(Status::TimeWarp(on))
            }
            Command::ToggleParty => {
                self.party = !self.party;
                Some(Status::Party(self.party))
            }
            Command::ToggleMatrix => {
                self.matrix = !self.matrix;
                Some(Status::Matrix(self.matrix))
            }
        }
    }
}
