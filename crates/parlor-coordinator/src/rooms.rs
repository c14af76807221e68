//! Room membership hook.
//!
//! Rooms and their membership belong to the embedding chat server; the
//! lobby core only needs two questions answered. Authorization for
//! joining a lobby ("is this user even in the room the game was opened
//! in?") is delegated through this trait, and lobby notifications fan out
//! to the roster it reports.

use std::future::Future;

use parlor_protocol::RoomId;

/// Answers room-membership questions for the lobby core.
pub trait RoomDirectory: Send + Sync + 'static {
    /// Whether `username` is currently a member of the room.
    fn is_participant(
        &self,
        room_id: RoomId,
        username: &str,
    ) -> impl Future<Output = bool> + Send;

    /// Everyone currently in the room. Used as the target list for
    /// lobby-lifecycle notifications.
    fn participants(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Vec<String>> + Send;
}
