//! Error types for the registry.

use parlor_games::ConfigError;
use parlor_protocol::SessionId;

use crate::Phase;

/// Why a registry operation was refused.
///
/// Every failure is local and leaves the registry exactly as it was —
/// no partial state survives a rejected operation.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The user already belongs to an active lobby. A user can host or
    /// participate in at most one game at a time.
    #[error("{0} is already in a game")]
    AlreadyInGame(String),

    /// No live lobby with this id.
    #[error("no active game {0}")]
    UnknownSession(SessionId),

    /// The user is not a participant of the targeted lobby.
    #[error("{0} is not a participant of this game")]
    NotParticipant(String),

    /// Only the host may perform this operation.
    #[error("{0} is not the host of this game")]
    NotHost(String),

    /// The lobby is not in the phase this operation requires.
    /// For example, starting a game that is already Ongoing.
    #[error("game is {actual:?}, operation requires {expected:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    /// The game config refused the operation — structurally at open,
    /// or at admission time on join.
    #[error("config rejected: {0}")]
    ConfigRejected(#[from] ConfigError),
}
