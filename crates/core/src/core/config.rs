use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted interior dimension.
pub const MAX_DIMENSION: u32 = 255;

/// Largest accepted fog radius. Reveals clip to the grid, so this only
/// guards against nonsense values; any radius above `MAX_DIMENSION + 1`
/// covers every grid from every position.
pub const MAX_FOG_RADIUS: u32 = MAX_DIMENSION + 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maze width and height must be at least 1")]
    ZeroDimension,
    #[error("maze dimensions are capped at {max}")]
    DimensionTooLarge { max: u32 },
    #[error("a 1x1 maze starts on its exit")]
    EntryIsExit,
    #[error("a {width}x{height} maze has no path to its exit; make one dimension odd")]
    ExitUnreachable { width: u32, height: u32 },
    #[error("fog radius {radius} is above the limit of {max}")]
    FogRadiusTooLarge { radius: u32, max: u32 },
    #[error("leaderboard must keep at least one entry")]
    EmptyLeaderboard,
    #[error("entry cell is a wall")]
    BlockedEntry,
    #[error("exit cell is a wall")]
    BlockedExit,
    #[error("border cell ({x}, {y}) is open")]
    OpenBorder { x: u32, y: u32 },
}

/// Fixed parameters of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Interior width (border excluded).
    pub width: u32,
    /// Interior height (border excluded).
    pub height: u32,
    /// Chebyshev reveal radius around the agent.
    pub fog_radius: u32,
    /// Number of best times kept.
    pub leaderboard_size: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 38,
            height: 17,
            fog_radius: 3,
            leaderboard_size: 5,
        }
    }
}

impl MazeConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_fog_radius(mut self, radius: u32) -> Self {
        self.fog_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::DimensionTooLarge { max: MAX_DIMENSION });
        }
        if self.width == 1 && self.height == 1 {
            return Err(ConfigError::EntryIsExit);
        }
        // Rooms sit on odd coordinates. With both dimensions even the exit
        // touches neither a room nor a carved wall.
        if self.width % 2 == 0 && self.height % 2 == 0 {
            return Err(ConfigError::ExitUnreachable {
                width: self.width,
                height: self.height,
            });
        }
        if self.fog_radius > MAX_FOG_RADIUS {
            return Err(ConfigError::FogRadiusTooLarge {
                radius: self.fog_radius,
                max: MAX_FOG_RADIUS,
            });
        }
        if self.leaderboard_size == 0 {
            return Err(ConfigError::EmptyLeaderboard);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = MazeConfig::default();
        assert_eq!((cfg.width, cfg.height, cfg.fog_radius), (38, 17, 3));
        assert_eq!(cfg.leaderboard_size, 5);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn bad_configs_are_rejected() {
        assert_eq!(
            MazeConfig::with_size(0, 5).validate(),
            Err(ConfigError::ZeroDimension)
        );
        assert_eq!(
            MazeConfig::with_size(5, 1_000).validate(),
            Err(ConfigError::DimensionTooLarge { max: MAX_DIMENSION })
        );
        assert_eq!(
            MazeConfig::with_size(6, 4).validate(),
            Err(ConfigError::ExitUnreachable {
                width: 6,
                height: 4
            })
        );
        assert_eq!(
            MazeConfig::with_size(5, 5).with_fog_radius(1_000).validate(),
            Err(ConfigError::FogRadiusTooLarge {
                radius: 1_000,
                max: MAX_FOG_RADIUS
            })
        );
        assert_eq!(
            MazeConfig::with_size(1, 1).validate(),
            Err(ConfigError::EntryIsExit)
        );

        let mut cfg = MazeConfig::with_size(5, 5);
        cfg.leaderboard_size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyLeaderboard));
    }

    #[test]
    fn one_odd_dimension_is_enough() {
        assert!(MazeConfig::with_size(6, 5).validate().is_ok());
        assert!(MazeConfig::with_size(5, 6).validate().is_ok());
        assert!(MazeConfig::with_size(2, 1).validate().is_ok());
        assert!(MazeConfig::with_size(1, 2).validate().is_ok());
    }

    #[test]
    fn reference_fog_radius_fits_tiny_mazes() {
        // Reveals clip to the grid, so the radius is independent of size.
        for (w, h) in [(2, 1), (1, 2), (3, 1), (5, 5)] {
            assert_eq!(MazeConfig::with_size(w, h).validate(), Ok(()));
            assert!(MazeConfig::with_size(w, h)
                .with_fog_radius(MAX_FOG_RADIUS)
                .validate()
                .is_ok());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_json_keys_fall_back_to_defaults() {
        let cfg: MazeConfig = serde_json::from_str(r#"{ "fog_radius": 2 }"#).unwrap();
        assert_eq!(cfg.fog_radius, 2);
        assert_eq!(cfg.width, 38);
        assert_eq!(cfg.leaderboard_size, 5);
    }
}
