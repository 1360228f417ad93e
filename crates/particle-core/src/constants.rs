// Shared simulation tuning constants. `SimConfig::default()` is built from these.

// Population
pub const MAX_PARTICLES: usize = 200; // particle set cap, oldest evicted first
pub const AMBIENT_COUNT: usize = 45; // seeded on the first resize
pub const BURST_COUNT: usize = 10; // spawned per logo/link click
pub const TRAIL_CAPACITY: usize = 60;

// Initial speeds: each velocity component is uniform in [-speed/2, speed/2]
pub const AMBIENT_SPEED: f64 = 0.5;
pub const BURST_SPEED: f64 = 2.0;

// Integrator
pub const GRAVITY_ACCEL: f64 = 0.2;
pub const AIR_DAMPING: f64 = 0.99;
pub const FLOOR_RESTITUTION: f64 = 0.6;
pub const PARTY_SPEED_MULT: f64 = 2.0;
pub const TIME_WARP_MULT: f64 = 3.0;

// Pointer interaction
pub const POINTER_RADIUS: f64 = 200.0;
pub const POINTER_RADIUS_PRESSED: f64 = 300.0;
pub const PUSH_STRENGTH: f64 = 2.0;
pub const PUSH_STRENGTH_STRONG: f64 = 5.0; // gravity on or pointer pressed

// Explosion: per-axis uniform in [-EXPLOSION_HALF_RANGE, EXPLOSION_HALF_RANGE] * EXPLOSION_SCALE
pub const EXPLOSION_HALF_RANGE: f64 = 25.0;
pub const EXPLOSION_SCALE: f64 = 2.0;

// Connections
pub const CONNECTION_DISTANCE: f64 = 160.0;
pub const CONNECTION_MAX_ALPHA: f64 = 0.8;
pub const CONNECTION_LINE_WIDTH: f64 = 0.5;

// Drawing
pub const HUE_STEP_DEGREES: f64 = 2.0;
pub const DOT_RADIUS: f64 = 2.0;
pub const DOT_RADIUS_PARTY: f64 = 3.0;
pub const TRAIL_LINE_WIDTH: f64 = 0.5;
pub const TRAIL_LINE_WIDTH_PARTY: f64 = 2.0;
pub const TRAIL_ALPHA: f64 = 0.5;
pub const GLYPH_FLIP_PROBABILITY: f64 = 0.05;
pub const GLYPH_FONT: &str = "14px Courier New";

// Scheduling
pub const TARGET_FPS: f64 = 60.0;
pub const FPS_WINDOW_MS: u64 = 1000;
