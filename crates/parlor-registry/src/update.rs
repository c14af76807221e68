//! The update snapshot broadcast on every lobby transition.

use parlor_games::GameConfig;
use serde::{Deserialize, Serialize};

use crate::LobbySession;

/// A point-in-time view of a lobby, taken as an operation commits.
///
/// This is what room members see when someone joins, leaves, or starts a
/// game: the config, who triggered the change, and the roster after the
/// change. It is transient — serialized into the event record's content
/// and forgotten.
///
/// An **empty** `participants` list is the teardown signal: the host left
/// and the whole lobby was dissolved, which the coordinator turns into an
/// ABORT tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSnapshot {
    /// The lobby's settings, echoed so clients need no second lookup.
    pub config: GameConfig,

    /// The user whose action produced this snapshot.
    pub username: String,

    /// The roster after the action, sorted for stable payloads.
    pub participants: Vec<String>,
}

impl UpdateSnapshot {
    /// Builds a snapshot of `session` as triggered by `username`.
    pub(crate) fn of(session: &LobbySession, username: &str) -> Self {
        let mut participants: Vec<String> =
            session.participants.iter().cloned().collect();
        participants.sort();
        Self {
            config: session.config.clone(),
            username: username.to_string(),
            participants,
        }
    }

    /// A snapshot with an empty roster, marking a host teardown.
    pub(crate) fn teardown(session: &LobbySession, username: &str) -> Self {
        Self {
            config: session.config.clone(),
            username: username.to_string(),
            participants: Vec::new(),
        }
    }

    /// Returns `true` if this snapshot marks a host teardown.
    pub fn is_teardown(&self) -> bool {
        self.participants.is_empty()
    }
}
