//! Session types: the in-memory record of one live lobby.

use std::collections::HashSet;

use parlor_games::GameConfig;
use parlor_protocol::{GameKind, RoomId};

/// The in-memory phase of a live lobby.
///
/// ```text
///   Pending ──(start, host)──→ Ongoing
/// ```
///
/// There are no terminal variants here on purpose: a lobby that reaches
/// ABORT or RESULT is deleted from the registry in the same operation, so
/// "the session exists iff its phase is Pending or Ongoing" holds by
/// construction. The terminal stages live only on the persisted event's
/// type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Lobby is open and accepting joins.
    Pending,

    /// The host started the game; the roster is frozen.
    Ongoing,
}

impl Phase {
    /// Returns `true` while the lobby still accepts joins.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One live lobby.
///
/// Exclusively owned by the [`GameRegistry`](crate::GameRegistry) and
/// mutated only through its operation set — no shared references to the
/// roster ever leave the registry.
///
/// Invariants maintained by the registry:
/// - `host` is a member of `participants` for the session's whole life.
///   There is no host migration; the host leaving tears the lobby down.
/// - every member of `participants` maps back to this session in the
///   registry's reverse index.
#[derive(Debug, Clone)]
pub struct LobbySession {
    /// The room this lobby was opened in.
    pub room_id: RoomId,

    /// The user with exclusive authority to start, close, and broadcast.
    pub host: String,

    /// Everyone currently admitted, host included.
    pub participants: HashSet<String>,

    /// Which game is being played.
    pub kind: GameKind,

    /// The host's chosen settings, structurally validated at open.
    pub config: GameConfig,

    /// Current phase; mirrored into the event record's type tag by the
    /// coordinator, never updated independently of it.
    pub phase: Phase,
}

impl LobbySession {
    /// A fresh Pending lobby whose only participant is the host.
    pub fn new(
        room_id: RoomId,
        host: String,
        kind: GameKind,
        config: GameConfig,
    ) -> Self {
        let participants = HashSet::from([host.clone()]);
        Self {
            room_id,
            host,
            participants,
            kind,
            config,
            phase: Phase::Pending,
        }
    }
}
