use crate::color::{Color, INK, MATRIX_GREEN};
use crate::config::{ConfigError, SimConfig};
use crate::constants::*;
use crate::fifo::BoundedFifo;
use crate::particle::Particle;
use crate::state::{Command, ModeFlags, PointerState, Status};
use crate::surface::Surface;
use glam::DVec2;
use rand::prelude::*;

/// What one frame put on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
}

/// Owns the particle set, mode flags, pointer and surface bounds, and runs
/// the per-frame schedule: clear, connections, update and draw every particle.
pub struct Simulation {
    config: SimConfig,
    particles: BoundedFifo<Particle>,
    flags: ModeFlags,
    pointer: PointerState,
    bounds: DVec2,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            particles: BoundedFifo::with_capacity(config.max_particles),
            config,
            flags: ModeFlags::default(),
            pointer: PointerState::default(),
            bounds: DVec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn flags(&self) -> ModeFlags {
        self.flags
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    /// Insert an already-built particle, subject to the same cap as spawns.
    pub fn push(&mut self, particle: Particle) {
        let evicted = self.particles.push(particle);
        if evicted > 0 {
            log::debug!("evicted {evicted} oldest particle(s)");
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = DVec2::new(width, height);
        if self.particles.is_empty() {
            let count = self.config.ambient_count;
            let trail_capacity = self.config.trail_capacity;
            for _ in 0..count {
                let p = Particle::ambient(&mut self.rng, self.bounds, trail_capacity);
                self.particles.push(p);
            }
            log::debug!("seeded {count} ambient particles in {width}x{height}");
        } else {
            for p in self.particles.iter_mut() {
                p.bounds = self.bounds;
            }
            log::debug!("resized to {width}x{height}");
        }
    }

    pub fn spawn_particles(&mut self, count: usize, origin: DVec2) {
        let trail_capacity = self.config.trail_capacity;
        let mut evicted = 0;
        for _ in 0..count {
            let p = Particle::burst(&mut self.rng, origin, self.bounds, trail_capacity);
            evicted += self.particles.push(p);
        }
        log::debug!(
            "spawned {count} at ({:.0}, {:.0}); {} live, {evicted} evicted",
            origin.x,
            origin.y,
            self.particles.len()
        );
    }

    /// Spawn the configured burst count at `origin`.
    pub fn spawn_burst(&mut self, origin: DVec2) {
        self.spawn_particles(self.config.burst_count, origin);
    }

    /// Replace every velocity with a random kick. Not integrated; the next
    /// `update` moves particles with the new velocities.
    pub fn explode(&mut self) {
        let range = -EXPLOSION_HALF_RANGE..=EXPLOSION_HALF_RANGE;
        for p in self.particles.iter_mut() {
            p.velocity = DVec2::new(
                self.rng.gen_range(range.clone()) * EXPLOSION_SCALE,
                self.rng.gen_range(range.clone()) * EXPLOSION_SCALE,
            );
        }
        log::debug!("explosion over {} particles", self.particles.len());
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.moved(DVec2::new(x, y));
    }

    pub fn pointer_pressed(&mut self) {
        self.pointer.press();
    }

    pub fn pointer_released(&mut self) {
        self.pointer.release();
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    /// Apply an input command and return the status line it produces, if any.
    pub fn apply(&mut self, cmd: Command) -> Option<Status> {
        if cmd == Command::Explode {
            self.explode();
        }
        let status = self.flags.apply(cmd);
        log::debug!("command {cmd:?} -> {:?}", self.flags);
        status
    }

    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear(DVec2::ZERO, self.bounds);

        let flags = self.flags;
        let pointer = self.pointer.snapshot();

        let connections = self.draw_connections(surface, &flags);

        for p in self.particles.iter_mut() {
            p.update(&flags, pointer);
            p.draw(surface, &flags, &mut self.rng);
        }

        FrameStats {
            particles: self.particles.len(),
            connections,
        }
    }

    /// O(n^2) proximity pass; bounded by the particle cap.
    fn draw_connections<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        flags: &ModeFlags,
    ) -> usize {
        let threshold = self.config.connection_distance;
        let points = self.particles.make_contiguous();
        let mut drawn = 0;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let dist = a.position.distance(b.position);
                if dist >= threshold {
                    continue;
                }
                let alpha = (CONNECTION_MAX_ALPHA - dist / threshold).max(0.0);
                surface.set_stroke_color(&connection_color(flags, a.hue, alpha));
                surface.set_line_width(CONNECTION_LINE_WIDTH);
                surface.stroke_line(a.position, b.position);
                drawn += 1;
            }
        }
        drawn
    }
}

fn connection_color(flags: &ModeFlags, hue: f64, alpha: f64) -> Color {
    let base = if flags.party {
        Color::hue(hue)
    } else if flags.matrix {
        MATRIX_GREEN
    } else {
        INK
    };
    base.with_alpha(alpha)
}
