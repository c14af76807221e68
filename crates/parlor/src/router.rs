//! The notification router: from lobby operations to fan-out instructions.
//!
//! parlor doesn't deliver anything — the chat server owns the push
//! channel. The router's job is to answer "who needs to hear about this,
//! and on which queue" for every lobby operation, as a [`Notification`]
//! the transport layer can execute mechanically.
//!
//! The scoping rule is deliberate and worth stating once: **lobby
//! lifecycle is room news, in-game traffic is session traffic.** Everyone
//! in the room sees lobbies open, fill up, start, and finish — that's how
//! the next game finds its players. But once a game runs, broadcast and
//! unicast payloads flow only between the session's own participants.

use std::fmt;
use std::sync::Arc;

use parlor_coordinator::{EventStore, GameCoordinator, RoomDirectory};
use parlor_protocol::{BroadcastRequest, EventRecord, ParticipationRequest};

use crate::ParlorError;

/// The delivery queue a notification belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// A lobby gained a participant.
    GameJoin,
    /// A lobby lost a participant (or dissolved entirely).
    GameLeave,
    /// A game started.
    GameStart,
    /// A game finished with a result.
    GameResult,
    /// Host → participants in-game traffic.
    GuestChannel,
    /// Participant → host in-game traffic.
    HostChannel,
}

impl Destination {
    /// The per-user queue path on the delivery channel.
    pub fn queue(&self) -> &'static str {
        match self {
            Self::GameJoin => "/queue/game/join",
            Self::GameLeave => "/queue/game/leave",
            Self::GameStart => "/queue/game/start",
            Self::GameResult => "/queue/game/results",
            Self::GuestChannel => "/queue/game/guest-channel",
            Self::HostChannel => "/queue/game/host-channel",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.queue())
    }
}

/// One fan-out instruction: deliver `payload` to each of `targets` on
/// `destination`'s queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Usernames to deliver to.
    pub targets: Vec<String>,

    /// Which queue to deliver on.
    pub destination: Destination,

    /// The serialized message, ready for the wire.
    pub payload: String,
}

/// Turns coordinator outputs into [`Notification`]s.
///
/// Thin by design: every method is one coordinator call plus target
/// selection. Cloning is cheap — the coordinator is shared behind an
/// `Arc`, the same one the rest of the server holds.
pub struct NotificationRouter<S: EventStore, R: RoomDirectory> {
    coordinator: Arc<GameCoordinator<S, R>>,
}

impl<S: EventStore, R: RoomDirectory> Clone for NotificationRouter<S, R> {
    fn clone(&self) -> Self {
        Self {
            coordinator: Arc::clone(&self.coordinator),
        }
    }
}

impl<S: EventStore, R: RoomDirectory> NotificationRouter<S, R> {
    /// Creates a router over a shared coordinator.
    pub fn new(coordinator: Arc<GameCoordinator<S, R>>) -> Self {
        Self { coordinator }
    }

    /// Handles a join request: admit the user, notify the room.
    pub async fn join(
        &self,
        request: &ParticipationRequest,
        username: &str,
    ) -> Result<Notification, ParlorError> {
        let updated = self.coordinator.join(request, username).await?;
        self.room_notification(&updated, Destination::GameJoin).await
    }

    /// Handles a leave request: remove the user, notify the room.
    ///
    /// A host leave dissolves the lobby; the room still gets exactly one
    /// notification — the ABORT-tagged record.
    pub async fn leave(
        &self,
        request: &ParticipationRequest,
        username: &str,
    ) -> Result<Notification, ParlorError> {
        let updated = self.coordinator.leave(request, username).await?;
        self.room_notification(&updated, Destination::GameLeave).await
    }

    /// Handles a start request: begin the game, notify the room.
    pub async fn start(
        &self,
        request: &ParticipationRequest,
        username: &str,
    ) -> Result<Notification, ParlorError> {
        let updated = self.coordinator.start(request, username).await?;
        self.room_notification(&updated, Destination::GameStart).await
    }

    /// Handles a result submission: close the game, notify the room.
    pub async fn submit(
        &self,
        request: &BroadcastRequest,
        username: &str,
    ) -> Result<Notification, ParlorError> {
        let updated = self.coordinator.submit(request, username).await?;
        self.room_notification(&updated, Destination::GameResult).await
    }

    /// Handles a dropped connection: if the user was in a game, run the
    /// leave flow and notify the room. `None` when there was no game.
    pub async fn disconnect(
        &self,
        username: &str,
    ) -> Result<Option<Notification>, ParlorError> {
        match self.coordinator.handle_disconnect(username).await? {
            None => Ok(None),
            Some(updated) => {
                let notification = self
                    .room_notification(&updated, Destination::GameLeave)
                    .await?;
                Ok(Some(notification))
            }
        }
    }

    /// Host → participants broadcast over the *session's* roster.
    ///
    /// The sending host is excluded here — it already has the payload.
    pub async fn broadcast(
        &self,
        request: &BroadcastRequest,
        username: &str,
    ) -> Result<Notification, ParlorError> {
        let mut targets = self
            .coordinator
            .broadcast_targets(request, username)
            .await?;
        targets.retain(|target| target != username);

        tracing::debug!(
            id = %request.id,
            targets = targets.len(),
            "guest-channel fan-out"
        );
        Ok(Notification {
            targets,
            destination: Destination::GuestChannel,
            payload: request.payload.clone(),
        })
    }

    /// Participant → host unicast: a single-target notification.
    pub async fn unicast(
        &self,
        request: &BroadcastRequest,
        username: &str,
    ) -> Result<Notification, ParlorError> {
        let host = self
            .coordinator
            .unicast_target(request, username)
            .await?;

        Ok(Notification {
            targets: vec![host],
            destination: Destination::HostChannel,
            payload: request.payload.clone(),
        })
    }

    /// Builds a room-scoped notification carrying the updated record.
    async fn room_notification(
        &self,
        record: &EventRecord,
        destination: Destination,
    ) -> Result<Notification, ParlorError> {
        let targets =
            self.coordinator.room_participants(record.room_id).await;

        tracing::debug!(
            id = %record.id,
            %destination,
            targets = targets.len(),
            "room fan-out"
        );
        Ok(Notification {
            targets,
            destination,
            payload: serde_json::to_string(record)?,
        })
    }
}
