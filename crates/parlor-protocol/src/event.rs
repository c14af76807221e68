//! The event taxonomy: type tags for persisted records.
//!
//! A lobby's phase is durable only through its event record's type tag —
//! the string form `{GAME}_{STAGE}` (e.g. `PONG_OPEN`, `SNAKES_ABORT`).
//! The tag and the in-memory phase are always updated together by the
//! coordinator; this module only defines the tags and which stage
//! transitions are legal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{EventError, RoomId, SessionId};

// ---------------------------------------------------------------------------
// GameKind
// ---------------------------------------------------------------------------

/// The game types the lobby core knows how to host.
///
/// Adding a game type means adding a variant here and a config variant in
/// the games crate — the registry and coordinator are generic over both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameKind {
    Pong,
    Snakes,
}

impl GameKind {
    /// The tag prefix used in event type tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pong => "PONG",
            Self::Snakes => "SNAKES",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GameStage
// ---------------------------------------------------------------------------

/// The lifecycle stage encoded in a game event's type tag.
///
/// ```text
/// Open ──(start, host)──→ Ongoing ──(submit, host)──→ Result
///   │                        │
///   └──(last leave)──────────┴──(last leave)────────→ Abort
/// ```
///
/// `Result` and `Abort` are terminal: no registry entry survives past the
/// transition that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStage {
    Open,
    Ongoing,
    Abort,
    Result,
}

impl GameStage {
    /// The tag suffix used in event type tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Ongoing => "ONGOING",
            Self::Abort => "ABORT",
            Self::Result => "RESULT",
        }
    }

    /// Returns `true` for stages with no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Abort | Self::Result)
    }
}

impl fmt::Display for GameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// The type tag of a persisted event record.
///
/// Plain chat messages and game lifecycle events share the same event log,
/// so the tag distinguishes them. On the wire (and in the store) this is a
/// single string: `"CHAT"`, or `"{GAME}_{STAGE}"` for game events — the
/// serde representation goes through [`Display`]/[`FromStr`] via the
/// `into`/`try_from` attributes below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    /// An ordinary chat message. The lobby core passes these through.
    Chat,

    /// A game lifecycle event: which game, and at which stage.
    Game(GameKind, GameStage),
}

impl EventKind {
    /// Convenience constructor for a fresh OPEN tag.
    pub fn open(kind: GameKind) -> Self {
        Self::Game(kind, GameStage::Open)
    }

    /// The game kind, if this is a game event.
    pub fn game_kind(&self) -> Option<GameKind> {
        match self {
            Self::Chat => None,
            Self::Game(kind, _) => Some(*kind),
        }
    }

    /// The stage, if this is a game event.
    pub fn stage(&self) -> Option<GameStage> {
        match self {
            Self::Chat => None,
            Self::Game(_, stage) => Some(*stage),
        }
    }

    /// OPEN → ONGOING: the host started the game.
    pub fn started(self) -> Result<Self, EventError> {
        self.transition(GameStage::Ongoing, |from| from == GameStage::Open)
    }

    /// {OPEN, ONGOING} → ABORT: the lobby emptied out before a result.
    pub fn aborted(self) -> Result<Self, EventError> {
        self.transition(GameStage::Abort, |from| {
            matches!(from, GameStage::Open | GameStage::Ongoing)
        })
    }

    /// ONGOING → RESULT: the host submitted the outcome.
    pub fn resulted(self) -> Result<Self, EventError> {
        self.transition(GameStage::Result, |from| from == GameStage::Ongoing)
    }

    fn transition(
        self,
        to: GameStage,
        valid: impl Fn(GameStage) -> bool,
    ) -> Result<Self, EventError> {
        match self {
            Self::Chat => Err(EventError::NotAGame),
            Self::Game(kind, from) if valid(from) => {
                Ok(Self::Game(kind, to))
            }
            Self::Game(_, from) => Err(EventError::WrongStage { from, to }),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat => f.write_str("CHAT"),
            Self::Game(kind, stage) => write!(f, "{kind}_{stage}"),
        }
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "CHAT" {
            return Ok(Self::Chat);
        }
        let (game, stage) = s
            .split_once('_')
            .ok_or_else(|| EventError::UnknownTag(s.to_string()))?;
        let kind = match game {
            "PONG" => GameKind::Pong,
            "SNAKES" => GameKind::Snakes,
            _ => return Err(EventError::UnknownTag(s.to_string())),
        };
        let stage = match stage {
            "OPEN" => GameStage::Open,
            "ONGOING" => GameStage::Ongoing,
            "ABORT" => GameStage::Abort,
            "RESULT" => GameStage::Result,
            _ => return Err(EventError::UnknownTag(s.to_string())),
        };
        Ok(Self::Game(kind, stage))
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.to_string()
    }
}

impl TryFrom<String> for EventKind {
    type Error = EventError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// EventRecord
// ---------------------------------------------------------------------------

/// One persisted event, exactly as the store keeps it.
///
/// This is the durable projection of a lobby: the session itself is
/// ephemeral in-memory state, but its phase is mirrored into this record's
/// `kind` on every transition. The record's `id` *is* the session's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique event id, shared with the lobby session it opened.
    pub id: SessionId,

    /// The room this event belongs to.
    pub room_id: RoomId,

    /// Type tag; rewritten in place as the lobby moves through stages.
    pub kind: EventKind,

    /// Username of the original sender (the lobby host for game events).
    pub sender: String,

    /// Serialized payload: the game config for OPEN events, an update
    /// snapshot after join/leave/start, the host's verbatim result payload
    /// after submit.
    pub content: String,

    /// Unix milliseconds when the event was first created. Updates keep
    /// the original value — the record's position in the room timeline
    /// never moves.
    pub sent_at: u64,
}

impl EventRecord {
    /// A copy of this record with a new tag and payload.
    ///
    /// `id`, `room_id`, `sender`, and `sent_at` are preserved — an update
    /// in place, not a new event.
    pub fn updated(&self, kind: EventKind, content: String) -> Self {
        Self {
            kind,
            content,
            ..self.clone()
        }
    }
}
