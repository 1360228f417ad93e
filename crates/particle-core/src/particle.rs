use crate::color::{Color, INK, MATRIX_GREEN};
use crate::constants::*;
use crate::fifo::BoundedFifo;
use crate::state::{ModeFlags, Pointer};
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;

/// Character shown for a particle in binary mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Zero,
    One,
}

impl Glyph {
    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Zero => "0",
            Glyph::One => "1",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Glyph::Zero => Glyph::One,
            Glyph::One => Glyph::Zero,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub bounds: DVec2,
    pub hue: f64,
    pub glyph: Glyph,
    trail: BoundedFifo<DVec2>,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, bounds: DVec2) -> Self {
        Self::with_trail_capacity(position, velocity, bounds, TRAIL_CAPACITY)
    }

    pub fn with_trail_capacity(
        position: DVec2,
        velocity: DVec2,
        bounds: DVec2,
        trail_capacity: usize,
    ) -> Self {
        Self {
            position,
            velocity,
            bounds,
            hue: 0.0,
            glyph: Glyph::Zero,
            trail: BoundedFifo::with_capacity(trail_capacity),
        }
    }

    /// Background particle: random position anywhere on the surface, slow drift.
    pub fn ambient<R: Rng + ?Sized>(rng: &mut R, bounds: DVec2, trail_capacity: usize) -> Self {
        let position = DVec2::new(
            rng.gen::<f64>() * bounds.x,
            rng.gen::<f64>() * bounds.y,
        );
        Self::seeded(rng, position, bounds, AMBIENT_SPEED, trail_capacity)
    }

    /// Particle spawned from a point with a faster initial kick.
    pub fn burst<R: Rng + ?Sized>(
        rng: &mut R,
        origin: DVec2,
        bounds: DVec2,
        trail_capacity: usize,
    ) -> Self {
        Self::seeded(rng, origin, bounds, BURST_SPEED, trail_capacity)
    }

    fn seeded<R: Rng + ?Sized>(
        rng: &mut R,
        position: DVec2,
        bounds: DVec2,
        speed: f64,
        trail_capacity: usize,
    ) -> Self {
        let velocity = DVec2::new(
            (rng.gen::<f64>() - 0.5) * speed,
            (rng.gen::<f64>() - 0.5) * speed,
        );
        let mut p = Self::with_trail_capacity(position, velocity, bounds, trail_capacity);
        p.hue = rng.gen::<f64>() * 360.0;
        p.glyph = if rng.gen_bool(0.5) {
            Glyph::One
        } else {
            Glyph::Zero
        };
        p
    }

    pub fn trail(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.trail.iter().copied()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn update(&mut self, flags: &ModeFlags, pointer: Option<Pointer>) {
        if flags.frozen {
            return;
        }

        if flags.trails {
            self.trail.push(self.position);
        } else if !self.trail.is_empty() {
            self.trail.clear();
        }

        let speed_mult = if flags.party { PARTY_SPEED_MULT } else { 1.0 };

        if flags.gravity && !flags.time_warp {
            self.velocity.y += GRAVITY_ACCEL * speed_mult;
            self.velocity *= AIR_DAMPING;
        }

        if flags.time_warp {
            self.position -= self.velocity * speed_mult * TIME_WARP_MULT;
        } else {
            self.position += self.velocity * speed_mult;
        }

        self.apply_bounds(flags.gravity);

        if let Some(p) = pointer {
            self.apply_pointer(p, flags);
        }
    }

    fn apply_bounds(&mut self, gravity: bool) {
        let DVec2 { x: width, y: height } = self.bounds;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
            self.position.x = self.position.x.clamp(0.0, width.max(0.0));
        }

        if self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
            self.position.y = 0.0;
        }

        // Lossy clamped floor under gravity, lossless unclamped bounce otherwise.
        if self.position.y > height {
            if gravity {
                self.position.y = height;
                self.velocity.y *= -FLOOR_RESTITUTION;
            } else {
                self.velocity.y = -self.velocity.y;
            }
        }
    }

    fn apply_pointer(&mut self, pointer: Pointer, flags: &ModeFlags) {
        let delta = pointer.position - self.position;
        let dist = delta.length();
        let radius = if pointer.pressed {
            POINTER_RADIUS_PRESSED
        } else {
            POINTER_RADIUS
        };
        if dist == 0.0 || dist >= radius {
            return;
        }
        let force = (radius - dist) / radius;
        let push = if flags.gravity || pointer.pressed {
            PUSH_STRENGTH_STRONG
        } else {
            PUSH_STRENGTH
        };
        let dir = if flags.time_warp { 1.0 } else { -1.0 };
        self.position += delta / dist * force * push * dir;
        // Displacement must not carry a particle through the side or top walls.
        self.position.x = self.position.x.clamp(0.0, self.bounds.x.max(0.0));
        self.position.y = self.position.y.max(0.0);
    }

    /// Current stroke/fill colour for the given modes, without side effects.
    pub fn color(&self, flags: &ModeFlags) -> Color {
        if flags.party {
            Color::hue(self.hue)
        } else if flags.matrix {
            MATRIX_GREEN
        } else {
            INK
        }
    }

    pub fn draw<S, R>(&mut self, surface: &mut S, flags: &ModeFlags, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let color = self.color(flags);
        if flags.party {
            self.hue += HUE_STEP_DEGREES;
        }
        surface.set_fill_color(&color);
        surface.set_stroke_color(&color);

        if flags.trails && self.trail.len() > 1 {
            let points: Vec<DVec2> = self
                .trail
                .iter()
                .copied()
                .chain(std::iter::once(self.position))
                .collect();
            surface.set_line_width(if flags.party {
                TRAIL_LINE_WIDTH_PARTY
            } else {
                TRAIL_LINE_WIDTH
            });
            surface.set_global_alpha(TRAIL_ALPHA);
            surface.stroke_polyline(&points);
            surface.set_global_alpha(1.0);
        }

        if flags.binary {
            surface.set_font(GLYPH_FONT);
            surface.fill_text(self.glyph.as_str(), self.position);
            if rng.gen_bool(GLYPH_FLIP_PROBABILITY) {
                self.glyph = self.glyph.flipped();
            }
        } else {
            let radius = if flags.party {
                DOT_RADIUS_PARTY
            } else {
                DOT_RADIUS
            };
            surface.fill_circle(self.position, radius);
        }
    }
}
