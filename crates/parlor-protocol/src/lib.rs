//! Shared types for the parlor lobby core.
//!
//! This crate defines the vocabulary every other layer speaks:
//!
//! - **Identifiers** ([`SessionId`], [`RoomId`]) — newtype ids shared with
//!   the embedding chat/room system.
//! - **Event taxonomy** ([`EventKind`], [`GameKind`], [`GameStage`]) — the
//!   type tags carried by persisted event records, with checked stage
//!   transitions.
//! - **Records and requests** ([`EventRecord`], [`ParticipationRequest`],
//!   [`BroadcastRequest`]) — the durable projection of a lobby and the
//!   inbound request DTOs.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about registries, stores, or rooms —
//! it only defines data. Everything above depends on it; it depends on
//! nothing but serde.
//!
//! ```text
//! parlor-protocol → parlor-games → parlor-registry → parlor-coordinator
//! ```

mod error;
mod event;
mod types;

pub use error::EventError;
pub use event::{EventKind, EventRecord, GameKind, GameStage};
pub use types::{BroadcastRequest, ParticipationRequest, RoomId, SessionId};
