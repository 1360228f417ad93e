pub mod color;
pub mod config;
pub mod constants;
pub mod fifo;
pub mod particle;
pub mod scheduler;
pub mod simulation;
pub mod state;
pub mod surface;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use fifo::*;
pub use particle::*;
pub use scheduler::*;
pub use simulation::*;
pub use state::*;
pub use surface::*;
