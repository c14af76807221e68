//! The game coordinator: registry mutation + persistence + compensation.

use parlor_games::GameConfig;
use parlor_protocol::{
    BroadcastRequest, EventKind, EventRecord, GameStage,
    ParticipationRequest, RoomId, SessionId,
};
use parlor_registry::{GameRegistry, RegistryError, UpdateSnapshot};
use tokio::sync::Mutex;

use crate::{CoordinatorError, EventStore, RoomDirectory};

/// Orchestrates lobby operations against the registry and the store.
///
/// One instance serves all rooms; request-handling tasks share it behind
/// an `Arc`. The registry lives behind a single mutex — one registry-wide
/// critical section, because the one-active-game-per-user invariant spans
/// *all* sessions and per-session locking couldn't see across them. Lock
/// scopes are kept tight: every `await` on the store or the room
/// directory happens with the lock released.
pub struct GameCoordinator<S: EventStore, R: RoomDirectory> {
    registry: Mutex<GameRegistry>,
    store: S,
    rooms: R,
}

impl<S: EventStore, R: RoomDirectory> GameCoordinator<S, R> {
    /// Creates a coordinator with an empty registry.
    pub fn new(store: S, rooms: R) -> Self {
        Self {
            registry: Mutex::new(GameRegistry::new()),
            store,
            rooms,
        }
    }

    /// Inspects an incoming event from the message pipeline.
    ///
    /// - Plain chat passes through untouched — accepted, no lobby made.
    /// - A game OPEN event decodes its config (type-directed by the tag's
    ///   game kind) and opens a Pending lobby under the event's own id.
    /// - Anything else is refused: lifecycle tags beyond OPEN are minted
    ///   by this coordinator, never accepted from outside.
    ///
    /// The event itself was already persisted by the pipeline; `accept`
    /// only mutates the registry.
    ///
    /// # Errors
    /// [`CoordinatorError::UnsupportedEvent`], or the registry's/config's
    /// refusal for OPEN events.
    pub async fn accept(
        &self,
        event: &EventRecord,
    ) -> Result<(), CoordinatorError> {
        match event.kind {
            EventKind::Chat => Ok(()),
            EventKind::Game(kind, GameStage::Open) => {
                let config = GameConfig::from_json(kind, &event.content)?;
                let mut registry = self.registry.lock().await;
                registry.open(
                    event.id,
                    event.room_id,
                    &event.sender,
                    config,
                )?;
                Ok(())
            }
            other => Err(CoordinatorError::UnsupportedEvent(other)),
        }
    }

    /// Admits `username` to the lobby opened by the event `request.id`.
    ///
    /// Room membership is checked first (delegated to the directory);
    /// then the registry admits the user; then the event record is
    /// rewritten with a refreshed snapshot under its unchanged tag. If
    /// the write fails, the admission is undone — `leave` is `join`'s
    /// exact inverse for a single non-host actor.
    ///
    /// Returns the updated record for fan-out.
    pub async fn join(
        &self,
        request: &ParticipationRequest,
        username: &str,
    ) -> Result<EventRecord, CoordinatorError> {
        let event = self.fetch_event(request.id).await?;
        if !self.rooms.is_participant(event.room_id, username).await {
            return Err(CoordinatorError::NotInRoom {
                username: username.to_string(),
                room_id: event.room_id,
            });
        }

        let snapshot =
            self.registry.lock().await.join(request.id, username)?;

        match self.persist(&event, event.kind, &snapshot).await {
            Ok(updated) => Ok(updated),
            Err(failure) => {
                let mut registry = self.registry.lock().await;
                match registry.leave(request.id, username) {
                    Ok(_) => {}
                    // The lobby died between unlock and relock; the join
                    // is already gone with it.
                    Err(RegistryError::UnknownSession(_)) => {}
                    Err(undo) => {
                        tracing::error!(
                            id = %request.id,
                            username,
                            %undo,
                            "compensating leave failed; registry ahead of store"
                        );
                    }
                }
                Err(failure)
            }
        }
    }

    /// Removes `username` from their lobby, dissolving it when the actor
    /// is the host.
    ///
    /// The event keeps its tag for an ordinary leave; a teardown (empty
    /// roster snapshot) remaps OPEN/ONGOING to ABORT. If persistence
    /// fails after an ordinary leave, a re-join compensates. A teardown
    /// removed several users at once and has no exact inverse — that
    /// failure is logged as a latent inconsistency and surfaced,
    /// deliberately not auto-repaired.
    pub async fn leave(
        &self,
        request: &ParticipationRequest,
        username: &str,
    ) -> Result<EventRecord, CoordinatorError> {
        let event = self.fetch_event(request.id).await?;

        let snapshot =
            self.registry.lock().await.leave(request.id, username)?;
        let kind = if snapshot.is_teardown() {
            event.kind.aborted()?
        } else {
            event.kind
        };

        match self.persist(&event, kind, &snapshot).await {
            Ok(updated) => Ok(updated),
            Err(failure) => {
                if snapshot.is_teardown() {
                    tracing::error!(
                        id = %request.id,
                        host = username,
                        "abort not persisted after teardown; \
                         store still shows a live game"
                    );
                } else {
                    let mut registry = self.registry.lock().await;
                    if let Err(undo) = registry.join(request.id, username)
                    {
                        tracing::error!(
                            id = %request.id,
                            username,
                            %undo,
                            "compensating re-join failed; registry ahead of store"
                        );
                    }
                }
                Err(failure)
            }
        }
    }

    /// Starts a Pending game. Host only.
    ///
    /// Remaps the tag OPEN → ONGOING. There is no compensation on this
    /// path: a failed write leaves the game running in memory and the
    /// failure logged and surfaced.
    pub async fn start(
        &self,
        request: &ParticipationRequest,
        username: &str,
    ) -> Result<EventRecord, CoordinatorError> {
        let event = self.fetch_event(request.id).await?;
        // Check the tag transition before touching the registry, so a
        // diverged record can't leave the phase half-moved.
        let kind = event.kind.started()?;

        let snapshot =
            self.registry.lock().await.start(request.id, username)?;

        let result = self.persist(&event, kind, &snapshot).await;
        if result.is_err() {
            tracing::error!(
                id = %request.id,
                host = username,
                "start not persisted; store still shows an open lobby"
            );
        }
        result
    }

    /// Submits the game result and closes the lobby. Host only, Ongoing
    /// only.
    ///
    /// Remaps the tag ONGOING → RESULT and persists the caller-supplied
    /// payload verbatim — the coordinator doesn't look inside results.
    /// The lobby is deleted before the write, so nothing is left to
    /// compensate if the write fails; the failure is logged and surfaced.
    pub async fn submit(
        &self,
        request: &BroadcastRequest,
        username: &str,
    ) -> Result<EventRecord, CoordinatorError> {
        let event = self.fetch_event(request.id).await?;
        let kind = event.kind.resulted()?;

        self.registry.lock().await.close(request.id, username)?;

        let updated = event.updated(kind, request.payload.clone());
        if let Err(reason) = self.store.update(&updated).await {
            tracing::error!(
                id = %request.id,
                host = username,
                "result not persisted; game already closed in memory"
            );
            return Err(reason.into());
        }

        tracing::info!(id = %request.id, kind = %updated.kind, "event persisted");
        Ok(updated)
    }

    /// Target list for a host broadcast: the session's full roster.
    ///
    /// The caller excludes the host itself at the fan-out site.
    ///
    /// # Errors
    /// [`RegistryError::NotHost`] unless `username` hosts the game.
    pub async fn broadcast_targets(
        &self,
        request: &BroadcastRequest,
        username: &str,
    ) -> Result<Vec<String>, CoordinatorError> {
        let registry = self.registry.lock().await;
        if registry.host(request.id)? != username {
            return Err(
                RegistryError::NotHost(username.to_string()).into()
            );
        }
        Ok(registry.participants(request.id)?)
    }

    /// Target for a participant-to-host unicast: the host, alone.
    ///
    /// # Errors
    /// [`RegistryError::NotParticipant`] unless `username` is in the game.
    pub async fn unicast_target(
        &self,
        request: &BroadcastRequest,
        username: &str,
    ) -> Result<String, CoordinatorError> {
        let registry = self.registry.lock().await;
        if !registry.is_participant(request.id, username)? {
            return Err(
                RegistryError::NotParticipant(username.to_string()).into()
            );
        }
        Ok(registry.host(request.id)?.to_string())
    }

    /// Runs the leave flow for a user whose connection died, if they were
    /// in a game at all.
    ///
    /// Returns the updated record for fan-out, or `None` when the user
    /// had no active game (the common case).
    pub async fn handle_disconnect(
        &self,
        username: &str,
    ) -> Result<Option<EventRecord>, CoordinatorError> {
        let id = {
            let registry = self.registry.lock().await;
            registry.session_of(username)
        };
        match id {
            None => Ok(None),
            Some(id) => {
                tracing::info!(%id, username, "disconnect, leaving game");
                let request = ParticipationRequest { id };
                self.leave(&request, username).await.map(Some)
            }
        }
    }

    /// The lobby `username` is currently in, if any.
    pub async fn session_of(&self, username: &str) -> Option<SessionId> {
        self.registry.lock().await.session_of(username)
    }

    /// The room a live lobby belongs to.
    pub async fn room_of(
        &self,
        id: SessionId,
    ) -> Result<RoomId, CoordinatorError> {
        Ok(self.registry.lock().await.room_of(id)?)
    }

    /// Everyone in the given room, per the room directory.
    ///
    /// Exposed so the notification layer can scope lobby-lifecycle
    /// fan-out to the room without holding its own directory handle.
    pub async fn room_participants(&self, room_id: RoomId) -> Vec<String> {
        self.rooms.participants(room_id).await
    }

    /// Fetches the originating event or refuses the request.
    async fn fetch_event(
        &self,
        id: SessionId,
    ) -> Result<EventRecord, CoordinatorError> {
        self.store
            .fetch(id)
            .await?
            .ok_or(CoordinatorError::UnknownSession(id))
    }

    /// Writes the updated record (new tag, snapshot payload) to the store.
    async fn persist(
        &self,
        event: &EventRecord,
        kind: EventKind,
        snapshot: &UpdateSnapshot,
    ) -> Result<EventRecord, CoordinatorError> {
        let updated =
            event.updated(kind, serde_json::to_string(snapshot)?);
        self.store.update(&updated).await?;
        tracing::info!(id = %updated.id, kind = %updated.kind, "event persisted");
        Ok(updated)
    }
}
