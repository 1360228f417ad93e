use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroCapacity { field: &'static str },
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("ambient count {ambient} exceeds particle cap {max}")]
    AmbientOverCap { ambient: usize, max: usize },
}

/// Tunables for a `Simulation`. Physics coefficients live in `constants`;
/// these are the knobs a host may reasonably want to change.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub max_particles: usize,
    pub ambient_count: usize,
    pub burst_count: usize,
    pub trail_capacity: usize,
    pub connection_distance: f64,
    pub frame_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            ambient_count: AMBIENT_COUNT,
            burst_count: BURST_COUNT,
            trail_capacity: TRAIL_CAPACITY,
            connection_distance: CONNECTION_DISTANCE,
            frame_interval: Duration::from_secs_f64(1.0 / TARGET_FPS),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_particles == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "max_particles",
            });
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "trail_capacity",
            });
        }
        if self.ambient_count > self.max_particles {
            return Err(ConfigError::AmbientOverCap {
                ambient: self.ambient_count,
                max: self.max_particles,
            });
        }
        if !(self.connection_distance.is_finite() && self.connection_distance > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "connection_distance",
                value: self.connection_distance,
            });
        }
        let interval = self.frame_interval.as_secs_f64();
        if interval <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "frame_interval",
                value: interval,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = SimConfig {
            max_particles: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroCapacity { field: "max_particles" })
        ));

        let cfg = SimConfig {
            ambient_count: 500,
            ..SimConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::AmbientOverCap { .. })));

        let cfg = SimConfig {
            connection_distance: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { .. })));

        let cfg = SimConfig {
            frame_interval: Duration::ZERO,
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive { field: "frame_interval", .. })
        ));
    }
}
