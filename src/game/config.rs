use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::fruit::FruitPlacement;

/// Configuration for the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between simulation steps
    pub tick_interval_ms: u64,
    /// Fruit placement policy
    pub fruit_placement: FruitPlacement,
    /// Fixed RNG seed for reproducible fruit placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            fruit_placement: FruitPlacement::Uniform,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Slowest accepted tick, in milliseconds
    pub const MAX_TICK_INTERVAL_MS: u64 = 5_000;

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Configuration with a fixed seed, for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be at least 1".to_string());
        }

        if self.tick_interval_ms > Self::MAX_TICK_INTERVAL_MS {
            return Err(format!(
                "tick_interval_ms must be at most {}, got {}",
                Self::MAX_TICK_INTERVAL_MS,
                self.tick_interval_ms
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.fruit_placement, FruitPlacement::Uniform);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_tick_interval() {
        let mut config = GameConfig::default();

        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        config.tick_interval_ms = 10_000;
        assert!(config.validate().is_err());

        config.tick_interval_ms = 250;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"fruit_placement": "avoid-snake"}"#).unwrap();
        assert_eq!(config.fruit_placement, FruitPlacement::AvoidSnake);
        assert_eq!(config.tick_interval_ms, 100);
    }
}
