use super::*;

// =============================================================
// Room service payloads
// =============================================================

#[test]
fn new_room_response_parses_go_field_names() {
    let raw = serde_json::json!({
        "RoomId": "lobby-7f3a",
        "Users": [
            {
                "UserName": "ann",
                "UserID": "u1",
                "RoomID": "lobby",
                "Position": { "Row": 0, "Col": 0 },
                "Direction": "down"
            },
            {
                "UserName": "ghosty",
                "UserID": "ghosty",
                "RoomID": "lobby",
                "Position": { "Row": 4, "Col": 7 }
            }
        ]
    });

    let resp: NewRoomResponse = serde_json::from_value(raw).expect("response should parse");
    assert_eq!(resp.room_id, "lobby-7f3a");
    assert_eq!(resp.users.len(), 2);
    assert_eq!(resp.users[0].user_id, "u1");
    assert_eq!(resp.users[1].position, Position { row: 4, col: 7 });
    assert!(resp.users[1].direction.is_null());
}

#[test]
fn join_room_response_tolerates_missing_users() {
    let resp: JoinRoomResponse = serde_json::from_value(serde_json::json!({})).expect("empty body should parse");
    assert!(resp.users.is_empty());
}

#[test]
fn requests_serialize_with_pascal_case_keys() {
    let new_room = NewRoomRequest { user_name: "ann".to_owned(), room_name: "lobby".to_owned() };
    assert_eq!(
        serde_json::to_value(&new_room).expect("serialize"),
        serde_json::json!({ "UserName": "ann", "RoomName": "lobby" })
    );

    let join = JoinRoomRequest { room_id: "r1".to_owned(), user_name: "bob".to_owned() };
    assert_eq!(
        serde_json::to_value(&join).expect("serialize"),
        serde_json::json!({ "RoomId": "r1", "UserName": "bob" })
    );
}

#[test]
fn room_info_uses_room_id_key() {
    let info: RoomInfo = serde_json::from_str(r#"{"RoomId":"r9"}"#).expect("parse");
    assert_eq!(info.room_id, "r9");
}

// =============================================================
// Realtime envelope
// =============================================================

#[test]
fn broadcast_envelope_matches_wire_shape() {
    let envelope = WsEnvelope::broadcast(OutboundChatEvent {
        room_id: "r1".to_owned(),
        from: "u1".to_owned(),
        msg: "hi".to_owned(),
    });

    assert_eq!(
        serde_json::to_value(&envelope).expect("serialize"),
        serde_json::json!({
            "event": "broadcastMessage",
            "data": { "roomId": "r1", "from": "u1", "msg": "hi" }
        })
    );
}
