//! Lobby session registry for parlor.
//!
//! This crate owns the only genuinely shared mutable state in the lobby
//! core: the map of live sessions and the username reverse index that
//! enforces "one active game per user".
//!
//! # Key types
//!
//! - [`GameRegistry`] — the authoritative session map and its full
//!   mutation surface (open/join/leave/start/close)
//! - [`LobbySession`] — one live lobby (host, roster, config, phase)
//! - [`Phase`] — Pending | Ongoing (terminal states are the session's
//!   absence from the registry)
//! - [`UpdateSnapshot`] — the DTO broadcast on every transition
//! - [`RegistryError`] — why an operation was refused
//!
//! # Concurrency note
//!
//! `GameRegistry` is NOT thread-safe by itself — it uses plain `HashMap`s,
//! not concurrent ones. This is intentional: the cross-session invariant
//! (a user belongs to at most one session, across *all* sessions) needs
//! one registry-wide serialization domain anyway, so the coordinator owns
//! the registry behind a single `tokio::sync::Mutex` and every operation,
//! reads included, runs under it. Keeping the registry itself lock-free
//! avoids hidden double locking.

mod error;
mod registry;
mod session;
mod update;

pub use error::RegistryError;
pub use registry::GameRegistry;
pub use session::{LobbySession, Phase};
pub use update::UpdateSnapshot;
