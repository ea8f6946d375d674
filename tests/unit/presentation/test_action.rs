use assert_json_diff::assert_json_eq;
use chrono::{TimeZone, Utc};
use pocket_client::prelude::*;
use pocket_client::presentation::action::{AddAction, ItemAction};
use serde_json::json;

#[test]
fn test_item_actions_serialize_flat() {
    assert_json_eq!(
        serde_json::to_value(Action::archive("229279689")).unwrap(),
        json!({ "action": "archive", "item_id": "229279689" })
    );
    assert_json_eq!(
        serde_json::to_value(Action::tags_clear("1")).unwrap(),
        json!({ "action": "tags_clear", "item_id": "1" })
    );
}

#[test]
fn test_add_action_with_details() {
    let at = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    let action = Action::add("https://example.com")
        .with_title("Example")
        .with_tags(["a", "b"])
        .with_time(at);

    assert_json_eq!(
        serde_json::to_value(&action).unwrap(),
        json!({
            "action": "add",
            "url": "https://example.com",
            "title": "Example",
            "tags": "a,b",
            "time": 1_700_000_000
        })
    );
}

#[test]
fn test_title_and_tags_only_apply_to_add() {
    let action = Action::favorite("1").with_title("ignored").with_tags(["x"]);
    assert_eq!(
        action,
        Action::Favorite(ItemAction {
            item_id: "1".to_string(),
            time: None,
        })
    );
}

#[test]
fn test_tag_actions() {
    assert_json_eq!(
        serde_json::to_value(Action::tags_replace("1", ["x", "y"])).unwrap(),
        json!({ "action": "tags_replace", "item_id": "1", "tags": "x,y" })
    );
    assert_json_eq!(
        serde_json::to_value(Action::tag_rename("old", "new")).unwrap(),
        json!({ "action": "tag_rename", "old_tag": "old", "new_tag": "new" })
    );
    assert_json_eq!(
        serde_json::to_value(Action::tag_delete("old")).unwrap(),
        json!({ "action": "tag_delete", "tag": "old" })
    );
}

#[test]
fn test_action_deserializes_from_wire() {
    let action: Action =
        serde_json::from_str(r#"{"action":"readd","item_id":"9","time":1700000000}"#).unwrap();
    assert_eq!(action.action_type(), ActionType::Readd);
    assert_eq!(
        action,
        Action::Readd(ItemAction {
            item_id: "9".to_string(),
            time: Some(1_700_000_000),
        })
    );
}

#[test]
fn test_validation() {
    assert!(Action::archive("1").validate().is_ok());
    assert!(Action::add("https://example.com").validate().is_ok());
    assert!(
        Action::Add(AddAction {
            item_id: Some("1".to_string()),
            ..Default::default()
        })
        .validate()
        .is_ok()
    );

    assert!(matches!(
        Action::add("  ").validate(),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        Action::tag_rename("old", "").validate(),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        Action::tag_delete("").validate(),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_action_type_display() {
    assert_eq!(ActionType::TagsRemove.to_string(), "tags_remove");
    assert_eq!(Action::unfavorite("1").action_type().as_str(), "unfavorite");
    assert_eq!(Action::delete("1").action_type(), ActionType::Delete);
}
