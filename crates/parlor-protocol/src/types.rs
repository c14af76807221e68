//! Identity newtypes and inbound request DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a lobby session.
///
/// This is a newtype wrapper around `u64` — you can't accidentally pass a
/// `RoomId` where a `SessionId` is expected, even though both are `u64`
/// underneath.
///
/// A `SessionId` is *shared* with the persisted event record that opened
/// the lobby: the record's id and the session's id are the same value, by
/// construction. The lobby core never mints ids — they come from the
/// event store when the originating OPEN event is created.
///
/// `#[serde(transparent)]` serializes this as the bare number, not as
/// `{ "0": 42 }`, so clients see plain ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

/// A unique identifier for a chat room.
///
/// Rooms are owned by the embedding chat system; the lobby core only
/// carries the id through so notifications can be scoped to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

/// A request to join, leave, or start a specific lobby.
///
/// The acting user is not part of the request — identity resolution
/// belongs to the embedding server's auth layer, which passes the resolved
/// username alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationRequest {
    /// The lobby session this request targets.
    pub id: SessionId,
}

/// A request carrying an opaque game payload: result submission, host
/// broadcast, or participant-to-host unicast.
///
/// The payload is relayed without interpretation — only the game clients
/// know what's inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRequest {
    /// The lobby session this request targets.
    pub id: SessionId,

    /// Opaque game data, forwarded verbatim.
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_serializes_as_plain_number() {
        // `#[serde(transparent)]` means SessionId(42) → `42`, not `{"0":42}`.
        let json = serde_json::to_string(&SessionId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_session_id_deserializes_from_plain_number() {
        let id: SessionId = serde_json::from_str("42").unwrap();
        assert_eq!(id, SessionId(42));
    }

    #[test]
    fn test_session_id_display() {
        assert_eq!(SessionId(7).to_string(), "G-7");
    }

    #[test]
    fn test_room_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&RoomId(99)).unwrap();
        assert_eq!(json, "99");
    }

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId(3).to_string(), "R-3");
    }

    #[test]
    fn test_participation_request_round_trip() {
        let req = ParticipationRequest { id: SessionId(5) };
        let bytes = serde_json::to_vec(&req).unwrap();
        let decoded: ParticipationRequest =
            serde_json::from_slice(&bytes).unwrap();
        assert_eq!(req, decoded);
    }

    #[test]
    fn test_broadcast_request_payload_is_opaque() {
        // The payload is a free-form string — whatever the game client
        // put there survives the round trip untouched.
        let req = BroadcastRequest {
            id: SessionId(5),
            payload: r#"{"ball":{"x":3,"y":9}}"#.into(),
        };
        let bytes = serde_json::to_vec(&req).unwrap();
        let decoded: BroadcastRequest =
            serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded.payload, req.payload);
    }
}
