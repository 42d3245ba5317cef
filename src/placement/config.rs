use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Width (X) and depth (Z) of the region rooms must stay inside, centred on
/// the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaExtents {
    pub width: f64,
    pub depth: f64,
}

impl Default for AreaExtents {
    fn default() -> Self {
        Self {
            width: 40.0,
            depth: 40.0,
        }
    }
}

impl AreaExtents {
    /// Length of the area's diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.depth)
    }
}

/// Parameters of a dungeon walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Target number of rooms, including the start room.
    pub room_count: usize,
    /// Upper bound on branches attempted per consumed connector.
    pub max_branch: usize,
    /// Minimum distance between any two room origins.
    pub min_room_distance: f64,
    pub area: AreaExtents,
    pub seed: u64,
    /// Stop after this many consumed connectors even if the frontier is
    /// still open.
    pub max_iterations: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            room_count: 10,
            max_branch: 2,
            min_room_distance: 8.0,
            area: AreaExtents::default(),
            seed: 0,
            max_iterations: 10_000,
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a configuration from TOML. Missing keys take
    /// their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails
    /// [`GeneratorConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the parameters for values the walk cannot run with.
    ///
    /// A `room_count` of zero or one is valid: the start room alone is a
    /// complete layout.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_branch` is zero, `min_room_distance` is
    /// negative or not finite, or an area extent is not a positive finite
    /// number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_branch == 0 {
            return Err(ConfigError::ZeroBranch);
        }
        if !self.min_room_distance.is_finite() || self.min_room_distance < 0.0 {
            return Err(ConfigError::InvalidDistance(self.min_room_distance));
        }
        let AreaExtents { width, depth } = self.area;
        if !(width.is_finite() && depth.is_finite() && width > 0.0 && depth > 0.0) {
            return Err(ConfigError::InvalidArea { width, depth });
        }
        Ok(())
    }
}
