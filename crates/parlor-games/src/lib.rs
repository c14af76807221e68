//! Game-type configuration for parlor lobbies.
//!
//! Every hostable game brings its own config shape and its own rules for
//! when a lobby is well-formed. This crate packages both behind one sum
//! type, [`GameConfig`], with the two checks the registry needs:
//!
//! 1. **Structural** ([`GameConfig::validate`]) — evaluated once at lobby
//!    creation. Are the requested settings within the game's bounds?
//! 2. **Dynamic** ([`GameConfig::admit`]) — evaluated on every join
//!    against the live roster. Is there still a seat?
//!
//! Adding a game type means a new config struct, a new [`GameConfig`]
//! variant, and an arm in the coordinator's accept dispatch — the registry
//! and coordinator code paths don't change.

mod config;
mod error;
mod pong;
mod snakes;

pub use config::GameConfig;
pub use error::ConfigError;
pub use pong::PongConfig;
pub use snakes::SnakesConfig;
