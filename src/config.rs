//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::segment::Language;

/// Configuration for a playback session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Language that is audible when the session starts
    pub default_language: Language,
    /// Initial volume (0.0 - 1.0)
    pub default_volume: f32,
    /// Cadence of the position-polling tick while playing, in milliseconds
    pub poll_interval_ms: u64,
    /// Cadence of the drift-correction check while playing, in milliseconds
    pub drift_interval_ms: u64,
    /// Maximum tolerated divergence between the two tracks, in seconds
    pub drift_threshold: f64,
    /// Step used by the keyboard seek commands, in seconds
    pub seek_step: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Translated,
            default_volume: 1.0,
            poll_interval_ms: 33,
            drift_interval_ms: 5000,
            drift_threshold: 0.1,
            seek_step: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_player() {
        let config = PlayerConfig::default();
        assert_eq!(config.default_language, Language::Translated);
        assert_eq!(config.default_volume, 1.0);
        assert_eq!(config.drift_interval_ms, 5000);
        assert_eq!(config.drift_threshold, 0.1);
        assert_eq!(config.seek_step, 5.0);
    }
}
