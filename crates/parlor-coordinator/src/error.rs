//! Error types for the coordinator.

use parlor_games::ConfigError;
use parlor_protocol::{EventError, EventKind, RoomId, SessionId};
use parlor_registry::RegistryError;

use crate::StoreError;

/// Why a coordinated lobby operation failed.
///
/// Every variant is a local, non-fatal refusal surfaced to the caller.
/// The one case that leaves work behind — a persistence failure whose
/// compensation also failed — is additionally logged as a latent
/// inconsistency; it is never retried.
#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    /// The registry refused the mutation. No state changed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The persisted event's tag doesn't allow the requested transition.
    #[error(transparent)]
    Event(#[from] EventError),

    /// The OPEN event carried a config payload that doesn't decode.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No persisted event with this id — the request references a game
    /// that was never opened (or whose record is gone).
    #[error("no event record for {0}")]
    UnknownSession(SessionId),

    /// The acting user is not a member of the room the game lives in.
    #[error("{username} is not in room {room_id}")]
    NotInRoom { username: String, room_id: RoomId },

    /// `accept` saw an event type it doesn't handle — anything that is
    /// neither plain chat nor a game OPEN.
    #[error("unsupported event type {0}")]
    UnsupportedEvent(EventKind),

    /// Serializing the update snapshot failed.
    #[error("snapshot encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The downstream store rejected the write. The registry mutation was
    /// compensated where possible (see the coordinator docs).
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}
