//! The game registry: tracks all live lobby sessions.
//!
//! This is the central piece of the lobby core. It's responsible for:
//! - Creating a Pending lobby when a host opens one
//! - Admitting and removing participants
//! - Enforcing "one active game per user" across all sessions
//! - Driving the Pending → Ongoing phase transition
//! - Deleting lobbies on close and on host teardown
//!
//! All mutation happens through the operation set below; the two maps are
//! never handed out. Each operation either commits fully or leaves the
//! registry untouched — the coordinator's compensation logic depends on
//! that, and on `join`/`leave` being each other's structural inverse for
//! a single non-host actor.

use std::collections::HashMap;

use parlor_games::GameConfig;
use parlor_protocol::{RoomId, SessionId};

use crate::{LobbySession, Phase, RegistryError, UpdateSnapshot};

/// The authoritative in-memory map of live lobbies.
///
/// ## Lifecycle
///
/// ```text
/// open() ──→ [Pending] ──start()──→ [Ongoing] ──close()──→ deleted
///                │                     │
///                └──── leave(host) ────┴──→ deleted (teardown)
/// ```
///
/// Deletion is the only way out: there is no terminal phase stored here.
#[derive(Debug, Default)]
pub struct GameRegistry {
    /// All live lobbies, keyed by session id.
    sessions: HashMap<SessionId, LobbySession>,

    /// Reverse index: which lobby each user is in.
    ///
    /// At most one entry per user — this map *is* the
    /// one-active-game-per-user invariant. Kept in sync with the roster
    /// of every session in `sessions`.
    members: HashMap<String, SessionId>,
}

impl GameRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new Pending lobby hosted by `host`.
    ///
    /// The session id comes from the originating OPEN event record — the
    /// registry never mints ids, it shares them with the store.
    ///
    /// # Errors
    /// - [`RegistryError::AlreadyInGame`] — the host is in a lobby already
    /// - [`RegistryError::ConfigRejected`] — structural validation failed
    pub fn open(
        &mut self,
        id: SessionId,
        room_id: RoomId,
        host: &str,
        config: GameConfig,
    ) -> Result<(), RegistryError> {
        if self.members.contains_key(host) {
            return Err(RegistryError::AlreadyInGame(host.to_string()));
        }
        config.validate()?;

        let kind = config.kind();
        self.sessions.insert(
            id,
            LobbySession::new(room_id, host.to_string(), kind, config),
        );
        self.members.insert(host.to_string(), id);

        tracing::info!(%id, %room_id, host, game = %kind, "lobby opened");
        Ok(())
    }

    /// Admits `username` to a Pending lobby.
    ///
    /// The candidate is added to the roster tentatively, then the config's
    /// dynamic admission check runs against the live roster; on rejection
    /// the tentative add is removed and nothing else changes.
    ///
    /// # Errors
    /// - [`RegistryError::AlreadyInGame`] — the user is in a lobby already
    /// - [`RegistryError::UnknownSession`] — no such lobby
    /// - [`RegistryError::WrongPhase`] — the game has already started
    /// - [`RegistryError::ConfigRejected`] — no seat left
    pub fn join(
        &mut self,
        id: SessionId,
        username: &str,
    ) -> Result<UpdateSnapshot, RegistryError> {
        if self.members.contains_key(username) {
            return Err(RegistryError::AlreadyInGame(username.to_string()));
        }
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        if !session.phase.is_pending() {
            return Err(RegistryError::WrongPhase {
                expected: Phase::Pending,
                actual: session.phase,
            });
        }

        session.participants.insert(username.to_string());
        if let Err(rejection) =
            session.config.admit(session.participants.len())
        {
            session.participants.remove(username);
            return Err(RegistryError::ConfigRejected(rejection));
        }

        self.members.insert(username.to_string(), id);
        let session = &self.sessions[&id];
        tracing::info!(
            %id,
            username,
            players = session.participants.len(),
            "participant joined"
        );
        Ok(UpdateSnapshot::of(session, username))
    }

    /// Removes `username` from a lobby.
    ///
    /// If the actor is the **host**, this is a teardown: every participant
    /// is removed from the reverse index, the session is deleted, and the
    /// returned snapshot carries an empty roster — the signal the
    /// coordinator turns into an ABORT tag. Otherwise only the actor is
    /// removed and the snapshot carries the post-removal roster.
    ///
    /// Works in any phase: leaving is always allowed while the lobby lives.
    ///
    /// # Errors
    /// - [`RegistryError::UnknownSession`] — no such lobby
    /// - [`RegistryError::NotParticipant`] — the user isn't in it (a
    ///   second leave after a successful first lands here, unchanged state)
    pub fn leave(
        &mut self,
        id: SessionId,
        username: &str,
    ) -> Result<UpdateSnapshot, RegistryError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        if !session.participants.contains(username) {
            return Err(RegistryError::NotParticipant(username.to_string()));
        }

        if session.host == username {
            // Host teardown: the lobby dissolves for everyone.
            for participant in &session.participants {
                self.members.remove(participant);
            }
            let session = self
                .sessions
                .remove(&id)
                .expect("session exists, checked above");
            tracing::info!(
                %id,
                host = username,
                evicted = session.participants.len(),
                "host left, lobby dissolved"
            );
            return Ok(UpdateSnapshot::teardown(&session, username));
        }

        session.participants.remove(username);
        self.members.remove(username);
        let session = &self.sessions[&id];
        tracing::info!(
            %id,
            username,
            players = session.participants.len(),
            "participant left"
        );
        Ok(UpdateSnapshot::of(session, username))
    }

    /// Starts a Pending game. Host only.
    ///
    /// # Errors
    /// - [`RegistryError::UnknownSession`] — no such lobby
    /// - [`RegistryError::WrongPhase`] — the game has already started
    /// - [`RegistryError::NotHost`] — only the host may start the game
    pub fn start(
        &mut self,
        id: SessionId,
        username: &str,
    ) -> Result<UpdateSnapshot, RegistryError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        if !session.phase.is_pending() {
            return Err(RegistryError::WrongPhase {
                expected: Phase::Pending,
                actual: session.phase,
            });
        }
        if session.host != username {
            return Err(RegistryError::NotHost(username.to_string()));
        }

        session.phase = Phase::Ongoing;
        tracing::info!(%id, host = username, "game started");
        Ok(UpdateSnapshot::of(session, username))
    }

    /// Closes an Ongoing game and deletes the lobby. Host only.
    ///
    /// Pending games cannot be closed directly — an unstarted lobby goes
    /// away through host leave, not close.
    ///
    /// # Errors
    /// - [`RegistryError::UnknownSession`] — no such lobby
    /// - [`RegistryError::NotHost`] — only the host may close the game
    /// - [`RegistryError::WrongPhase`] — the game hasn't started
    pub fn close(
        &mut self,
        id: SessionId,
        username: &str,
    ) -> Result<(), RegistryError> {
        let session = self
            .sessions
            .get(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        if session.host != username {
            return Err(RegistryError::NotHost(username.to_string()));
        }
        if session.phase.is_pending() {
            return Err(RegistryError::WrongPhase {
                expected: Phase::Ongoing,
                actual: session.phase,
            });
        }

        let session = self
            .sessions
            .remove(&id)
            .expect("session exists, checked above");
        for participant in &session.participants {
            self.members.remove(participant);
        }
        tracing::info!(
            %id,
            host = username,
            players = session.participants.len(),
            "game closed"
        );
        Ok(())
    }

    // -- Read accessors ---------------------------------------------------
    //
    // These run under the same lock as the mutations (the coordinator
    // holds the registry behind one mutex), so every read is linearized
    // with the writes. They hand out owned or borrowed *copies*, never
    // the maps themselves.

    /// The roster of a lobby, sorted.
    ///
    /// # Errors
    /// [`RegistryError::UnknownSession`] if the lobby doesn't exist.
    pub fn participants(
        &self,
        id: SessionId,
    ) -> Result<Vec<String>, RegistryError> {
        let session = self
            .sessions
            .get(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        let mut roster: Vec<String> =
            session.participants.iter().cloned().collect();
        roster.sort();
        Ok(roster)
    }

    /// Whether `username` is currently in the given lobby.
    ///
    /// # Errors
    /// [`RegistryError::UnknownSession`] if the lobby doesn't exist.
    pub fn is_participant(
        &self,
        id: SessionId,
        username: &str,
    ) -> Result<bool, RegistryError> {
        let session = self
            .sessions
            .get(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        Ok(session.participants.contains(username))
    }

    /// The host of a lobby.
    ///
    /// # Errors
    /// [`RegistryError::UnknownSession`] if the lobby doesn't exist.
    pub fn host(&self, id: SessionId) -> Result<&str, RegistryError> {
        self.sessions
            .get(&id)
            .map(|session| session.host.as_str())
            .ok_or(RegistryError::UnknownSession(id))
    }

    /// The room a lobby was opened in.
    ///
    /// # Errors
    /// [`RegistryError::UnknownSession`] if the lobby doesn't exist.
    pub fn room_of(&self, id: SessionId) -> Result<RoomId, RegistryError> {
        self.sessions
            .get(&id)
            .map(|session| session.room_id)
            .ok_or(RegistryError::UnknownSession(id))
    }

    /// The lobby `username` is currently in, if any.
    pub fn session_of(&self, username: &str) -> Option<SessionId> {
        self.members.get(username).copied()
    }

    /// Returns `true` if a lobby with this id is live.
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// The number of live lobbies.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no lobby is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
