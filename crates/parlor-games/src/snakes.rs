//! Snakes lobby configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings for a Snakes lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakesConfig {
    /// Seats in the lobby, host included.
    pub max_players: usize,

    /// Side length of the square playing field, in cells.
    pub board_size: usize,
}

impl SnakesConfig {
    pub const MAX_PLAYERS: usize = 8;
    pub const MIN_PLAYERS: usize = 2;

    /// Below this the snakes have nowhere to go; above it the clients
    /// can't render the field.
    pub const MAX_BOARD: usize = 64;
    pub const MIN_BOARD: usize = 10;

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
        if self.board_size < Self::MIN_BOARD
            || self.board_size > Self::MAX_BOARD
        {
            return Err(ConfigError::BoardSize {
                min: Self::MIN_BOARD,
                max: Self::MAX_BOARD,
                requested: self.board_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_within_bounds_accepts() {
        let config = SnakesConfig {
            max_players: 8,
            board_size: 32,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_player_bounds() {
        let too_few = SnakesConfig {
            max_players: 1,
            board_size: 32,
        };
        assert!(too_few.validate().is_err());

        let too_many = SnakesConfig {
            max_players: 9,
            board_size: 32,
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_validate_board_bounds() {
        let too_small = SnakesConfig {
            max_players: 4,
            board_size: 9,
        };
        assert!(matches!(
            too_small.validate(),
            Err(ConfigError::BoardSize { requested: 9, .. })
        ));

        let too_big = SnakesConfig {
            max_players: 4,
            board_size: 65,
        };
        assert!(too_big.validate().is_err());
    }
}
