//! End-to-end tests: router → coordinator → registry, over in-memory
//! collaborators. The focus here is target scoping — room-wide for lobby
//! lifecycle, session-only for in-game traffic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use parlor::{
    BroadcastRequest, Destination, EventKind, EventRecord, EventStore,
    GameCoordinator, GameKind, GameStage, NotificationRouter,
    ParticipationRequest, RoomDirectory, RoomId, SessionId, StoreError,
};

// =========================================================================
// In-memory collaborators
// =========================================================================

#[derive(Clone, Default)]
struct MemoryStore {
    records: Arc<Mutex<HashMap<SessionId, EventRecord>>>,
}

impl MemoryStore {
    fn seed(&self, record: EventRecord) {
        self.records.lock().unwrap().insert(record.id, record);
    }
}

impl EventStore for MemoryStore {
    async fn fetch(
        &self,
        id: SessionId,
    ) -> Result<Option<EventRecord>, StoreError> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn update(
        &self,
        record: &EventRecord,
    ) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(())
    }
}

#[derive(Clone)]
struct RoomsStub {
    members: Arc<Vec<String>>,
}

impl RoomDirectory for RoomsStub {
    async fn is_participant(
        &self,
        _room_id: RoomId,
        username: &str,
    ) -> bool {
        self.members.iter().any(|m| m == username)
    }

    async fn participants(&self, _room_id: RoomId) -> Vec<String> {
        self.members.as_ref().clone()
    }
}

// =========================================================================
// Helpers
// =========================================================================

const ROOM: RoomId = RoomId(10);

/// The whole room: three players and one bystander who never joins.
const ROOM_MEMBERS: [&str; 4] = ["alice", "bob", "carol", "edgar"];

fn open_event() -> EventRecord {
    EventRecord {
        id: SessionId(1),
        room_id: ROOM,
        kind: EventKind::Game(GameKind::Pong, GameStage::Open),
        sender: "alice".into(),
        content: r#"{"max_players":4,"win_score":11}"#.into(),
        sent_at: 1_700_000_000_000,
    }
}

fn request() -> ParticipationRequest {
    ParticipationRequest { id: SessionId(1) }
}

fn cast(payload: &str) -> BroadcastRequest {
    BroadcastRequest {
        id: SessionId(1),
        payload: payload.into(),
    }
}

async fn setup() -> NotificationRouter<MemoryStore, RoomsStub> {
    let store = MemoryStore::default();
    let rooms = RoomsStub {
        members: Arc::new(
            ROOM_MEMBERS.iter().map(|m| m.to_string()).collect(),
        ),
    };
    let coordinator = Arc::new(GameCoordinator::new(store.clone(), rooms));

    let event = open_event();
    store.seed(event.clone());
    coordinator.accept(&event).await.unwrap();

    NotificationRouter::new(coordinator)
}

fn record_in(notification: &parlor::Notification) -> EventRecord {
    serde_json::from_str(&notification.payload).unwrap()
}

// =========================================================================
// Lobby lifecycle notifications are room-scoped
// =========================================================================

#[tokio::test]
async fn test_join_notifies_whole_room_on_join_queue() {
    let router = setup().await;

    let notification = router.join(&request(), "bob").await.unwrap();

    assert_eq!(notification.destination, Destination::GameJoin);
    assert_eq!(notification.destination.queue(), "/queue/game/join");
    // Everyone in the room hears about it — including edgar, who isn't
    // in the game. Lobby membership is room news.
    assert_eq!(notification.targets, ROOM_MEMBERS);

    let record = record_in(&notification);
    assert_eq!(
        record.kind,
        EventKind::Game(GameKind::Pong, GameStage::Open)
    );
    assert!(record.content.contains("bob"));
}

#[tokio::test]
async fn test_start_and_submit_notify_room_with_moved_tags() {
    let router = setup().await;
    router.join(&request(), "bob").await.unwrap();

    let started = router.start(&request(), "alice").await.unwrap();
    assert_eq!(started.destination, Destination::GameStart);
    assert_eq!(
        record_in(&started).kind,
        EventKind::Game(GameKind::Pong, GameStage::Ongoing)
    );

    let finished = router
        .submit(&cast(r#"{"winner":"bob"}"#), "alice")
        .await
        .unwrap();
    assert_eq!(finished.destination, Destination::GameResult);
    assert_eq!(finished.destination.queue(), "/queue/game/results");
    let record = record_in(&finished);
    assert_eq!(
        record.kind,
        EventKind::Game(GameKind::Pong, GameStage::Result)
    );
    assert_eq!(record.content, r#"{"winner":"bob"}"#);
    assert_eq!(finished.targets, ROOM_MEMBERS);
}

#[tokio::test]
async fn test_host_leave_notifies_room_of_abort() {
    let router = setup().await;
    router.join(&request(), "bob").await.unwrap();

    let notification =
        router.leave(&request(), "alice").await.unwrap();

    assert_eq!(notification.destination, Destination::GameLeave);
    assert_eq!(
        record_in(&notification).kind,
        EventKind::Game(GameKind::Pong, GameStage::Abort)
    );
    assert_eq!(notification.targets, ROOM_MEMBERS);
}

#[tokio::test]
async fn test_disconnect_routes_like_a_leave() {
    let router = setup().await;
    router.join(&request(), "bob").await.unwrap();

    let notification = router
        .disconnect("bob")
        .await
        .unwrap()
        .expect("bob was in a game");

    assert_eq!(notification.destination, Destination::GameLeave);
    let record = record_in(&notification);
    assert_eq!(
        record.kind,
        EventKind::Game(GameKind::Pong, GameStage::Open)
    );

    // Nobody to leave for edgar: no notification at all.
    assert!(router.disconnect("edgar").await.unwrap().is_none());
}

// =========================================================================
// In-game traffic is session-scoped
// =========================================================================

#[tokio::test]
async fn test_broadcast_targets_session_without_sender() {
    let router = setup().await;
    router.join(&request(), "bob").await.unwrap();
    router.join(&request(), "carol").await.unwrap();
    router.start(&request(), "alice").await.unwrap();

    let notification = router
        .broadcast(&cast(r#"{"tick":1}"#), "alice")
        .await
        .unwrap();

    assert_eq!(notification.destination, Destination::GuestChannel);
    // Session roster only — no edgar — and the sending host excluded.
    assert_eq!(notification.targets, vec!["bob", "carol"]);
    // The payload is relayed untouched.
    assert_eq!(notification.payload, r#"{"tick":1}"#);
}

#[tokio::test]
async fn test_broadcast_from_guest_is_refused() {
    let router = setup().await;
    router.join(&request(), "bob").await.unwrap();

    assert!(router.broadcast(&cast("{}"), "bob").await.is_err());
}

#[tokio::test]
async fn test_unicast_targets_host_alone() {
    let router = setup().await;
    router.join(&request(), "bob").await.unwrap();

    let notification =
        router.unicast(&cast(r#"{"paddle":3}"#), "bob").await.unwrap();

    assert_eq!(notification.destination, Destination::HostChannel);
    assert_eq!(
        notification.destination.queue(),
        "/queue/game/host-channel"
    );
    assert_eq!(notification.targets, vec!["alice"]);
    assert_eq!(notification.payload, r#"{"paddle":3}"#);
}

#[tokio::test]
async fn test_unicast_from_outside_session_is_refused() {
    let router = setup().await;

    assert!(router.unicast(&cast("{}"), "edgar").await.is_err());
}
