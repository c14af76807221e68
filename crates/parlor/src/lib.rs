//! # parlor
//!
//! In-memory game-lobby coordination for chat rooms.
//!
//! parlor lets users of a chat room spin up transient multiplayer game
//! lobbies (Pong, Snakes) inside the room: one user hosts, others join,
//! the host starts and eventually submits a result — and every transition
//! is mirrored into the room's persisted event log. The lobby state
//! itself is ephemeral; the event record is the durable trace.
//!
//! The embedding chat server supplies two hooks — an
//! [`EventStore`] over its message log and a [`RoomDirectory`] over its
//! membership tables — and drives the [`NotificationRouter`], which turns
//! every lobby operation into a fan-out instruction for the server's
//! delivery channel.
//!
//! ## Layering
//!
//! ```text
//! parlor (NotificationRouter, unified error)
//!   └─ parlor-coordinator (two-phase commit with compensation)
//!        └─ parlor-registry (session map + one-game-per-user index)
//!             └─ parlor-games (per-game config validation)
//!                  └─ parlor-protocol (ids, event tags, records)
//! ```

mod error;
mod router;

pub use error::ParlorError;
pub use router::{Destination, Notification, NotificationRouter};

pub use parlor_coordinator::{
    CoordinatorError, EventStore, GameCoordinator, RoomDirectory,
    StoreError,
};
pub use parlor_games::{ConfigError, GameConfig, PongConfig, SnakesConfig};
pub use parlor_protocol::{
    BroadcastRequest, EventError, EventKind, EventRecord, GameKind,
    GameStage, ParticipationRequest, RoomId, SessionId,
};
pub use parlor_registry::{
    GameRegistry, LobbySession, Phase, RegistryError, UpdateSnapshot,
};

/// Installs a `tracing` subscriber reading the `RUST_LOG` filter,
/// defaulting to `info`. Safe to call more than once; later calls are
/// no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
