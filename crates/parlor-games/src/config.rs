//! The `GameConfig` sum type: one variant per hostable game.

use parlor_protocol::GameKind;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, PongConfig, SnakesConfig};

/// Configuration for one lobby, tagged by game type.
///
/// This is a sum type rather than a trait object: the set of games is
/// closed and known at compile time, and the coordinator dispatches by
/// explicit `match` — no open-ended reflection, no dynamic registration.
///
/// The enum is serde-`untagged`: payloads carry the bare config object
/// (`{"max_players":2,"win_score":11}`) with no discriminant of its own,
/// because the event record's type tag already says which game it is.
/// Decoding from an OPEN event therefore goes type-directed through
/// [`GameConfig::from_json`] rather than relying on untagged inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameConfig {
    Pong(PongConfig),
    Snakes(SnakesConfig),
}

impl GameConfig {
    /// Decodes a config payload for the given game type.
    ///
    /// # Errors
    /// Returns [`ConfigError::Decode`] if the payload is not valid JSON
    /// for that game's config shape.
    pub fn from_json(
        kind: GameKind,
        payload: &str,
    ) -> Result<Self, ConfigError> {
        match kind {
            GameKind::Pong => {
                let config: PongConfig = serde_json::from_str(payload)?;
                Ok(Self::Pong(config))
            }
            GameKind::Snakes => {
                let config: SnakesConfig = serde_json::from_str(payload)?;
                Ok(Self::Snakes(config))
            }
        }
    }

    /// Which game this config belongs to.
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Pong(_) => GameKind::Pong,
            Self::Snakes(_) => GameKind::Snakes,
        }
    }

    /// Structural validation, evaluated once when a lobby is opened.
    ///
    /// # Errors
    /// Returns the first bound the settings violate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Pong(config) => config.validate(),
            Self::Snakes(config) => config.validate(),
        }
    }

    /// Dynamic admission check, evaluated on every join against the live
    /// roster. `players` already counts the candidate being admitted.
    ///
    /// Pure and non-suspending: the registry calls this inside its
    /// critical section.
    ///
    /// # Errors
    /// Returns [`ConfigError::LobbyFull`] when the roster would exceed
    /// the configured player limit.
    pub fn admit(&self, players: usize) -> Result<(), ConfigError> {
        let max = match self {
            Self::Pong(config) => config.max_players,
            Self::Snakes(config) => config.max_players,
        };
        if players > max {
            return Err(ConfigError::LobbyFull { max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_pong_decodes_bare_object() {
        let config = GameConfig::from_json(
            GameKind::Pong,
            r#"{"max_players":2,"win_score":11}"#,
        )
        .unwrap();

        assert_eq!(config.kind(), GameKind::Pong);
        assert_eq!(
            config,
            GameConfig::Pong(PongConfig {
                max_players: 2,
                win_score: 11,
            })
        );
    }

    #[test]
    fn test_from_json_snakes_decodes_bare_object() {
        let config = GameConfig::from_json(
            GameKind::Snakes,
            r#"{"max_players":4,"board_size":32}"#,
        )
        .unwrap();

        assert_eq!(config.kind(), GameKind::Snakes);
    }

    #[test]
    fn test_from_json_malformed_payload_returns_decode_error() {
        let result =
            GameConfig::from_json(GameKind::Pong, "not json at all");
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_from_json_wrong_shape_returns_decode_error() {
        // Valid JSON, but missing the required fields for Pong.
        let result =
            GameConfig::from_json(GameKind::Pong, r#"{"speed":3}"#);
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_admit_within_capacity_accepts() {
        let config = GameConfig::Pong(PongConfig {
            max_players: 2,
            win_score: 11,
        });
        assert!(config.admit(1).is_ok());
        assert!(config.admit(2).is_ok());
    }

    #[test]
    fn test_admit_over_capacity_returns_lobby_full() {
        let config = GameConfig::Pong(PongConfig {
            max_players: 2,
            win_score: 11,
        });
        assert!(matches!(
            config.admit(3),
            Err(ConfigError::LobbyFull { max: 2 })
        ));
    }

    #[test]
    fn test_serialize_is_bare_object_without_discriminant() {
        // The event content stores the bare config object; the type tag
        // on the record itself is the discriminant.
        let config = GameConfig::Pong(PongConfig {
            max_players: 3,
            win_score: 5,
        });
        let json: serde_json::Value =
            serde_json::to_value(&config).unwrap();
        assert_eq!(json["max_players"], 3);
        assert_eq!(json["win_score"], 5);
        assert!(json.get("Pong").is_none());
    }
}
