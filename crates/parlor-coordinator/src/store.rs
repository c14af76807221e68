//! Persistence hook for the event/message store.
//!
//! parlor doesn't persist anything itself — the chat server owns the
//! message log and its storage engine. This module defines the
//! [`EventStore`] trait: two async methods the embedding application
//! implements against its database, and the coordinator calls around
//! every lobby transition.
//!
//! In tests, an in-memory map with failure injection stands in.

use std::future::Future;

use parlor_protocol::{EventRecord, SessionId};

/// The downstream store refused or failed a request.
///
/// The coordinator doesn't interpret the reason — any store failure
/// triggers the same compensation path — so a plain message suffices.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Read and update persisted event records.
///
/// # Trait bounds
///
/// `Send + Sync + 'static` — the store handle is shared by every
/// request-handling task for the life of the server.
///
/// # Contract
///
/// - `fetch` returns the record by id, or `None` when the id was never
///   persisted. A store *failure* (connection lost, query error) is an
///   `Err`, distinct from a clean miss.
/// - `update` rewrites the record with the same id in place. The
///   coordinator only ever changes `kind` and `content`; `sender` and
///   `sent_at` keep the original event's values.
pub trait EventStore: Send + Sync + 'static {
    /// Looks up the persisted event with the given id.
    fn fetch(
        &self,
        id: SessionId,
    ) -> impl Future<Output = Result<Option<EventRecord>, StoreError>> + Send;

    /// Updates a persisted event in place, keyed by `record.id`.
    fn update(
        &self,
        record: &EventRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
