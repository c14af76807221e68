//! Pong lobby configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings for a Pong lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongConfig {
    /// Seats in the lobby, host included.
    pub max_players: usize,

    /// First player to reach this score wins.
    pub win_score: u32,
}

impl PongConfig {
    /// Pong supports up to two paddles per side.
    pub const MAX_PLAYERS: usize = 4;
    pub const MIN_PLAYERS: usize = 2;

    /// Structural check: are the requested settings within bounds?
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players < Self::MIN_PLAYERS
            || self.max_players > Self::MAX_PLAYERS
        {
            return Err(ConfigError::PlayerLimit {
                min: Self::MIN_PLAYERS,
                max: Self::MAX_PLAYERS,
                requested: self.max_players,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_within_bounds_accepts() {
        let config = PongConfig {
            max_players: 2,
            win_score: 11,
        };
        assert!(config.validate().is_ok());

        let config = PongConfig {
            max_players: 4,
            win_score: 1,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_too_few_players_rejects() {
        let config = PongConfig {
            max_players: 1,
            win_score: 11,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PlayerLimit { requested: 1, .. })
        ));
    }

    #[test]
    fn test_validate_too_many_players_rejects() {
        let config = PongConfig {
            max_players: 5,
            win_score: 11,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PlayerLimit { requested: 5, .. })
        ));
    }

    #[test]
    fn test_validate_zero_win_score_rejects() {
        let config = PongConfig {
            max_players: 2,
            win_score: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroWinScore)
        ));
    }
}
