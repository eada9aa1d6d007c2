use serde_json::{json, Value};

use crate::models::RawItem;
use crate::services::map_item;

fn raw_item(value: Value) -> RawItem {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_map_item_flattens_column_values() {
    let item = map_item(raw_item(json!({
        "id": "1",
        "name": "Task",
        "column_values": [
            { "id": "status", "text": "Done", "value": "{\"index\":1}", "type": "status", "column": { "title": "Status" } },
            { "id": "notes", "text": "", "value": null, "type": "text", "column": null },
            { "id": "weird", "text": "x", "value": "x", "type": "text" }
        ]
    })));

    assert_eq!(item.id, "1");
    assert_eq!(item.name, "Task");
    let ids: Vec<&str> = item.values.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["status", "notes", "weird"]);

    let status = item.value("status").unwrap();
    assert_eq!(status.value, json!({ "index": 1 }));
    assert_eq!(status.title.as_deref(), Some("Status"));
    assert_eq!(status.column_type.as_deref(), Some("status"));
    assert!(status.linked_items.is_none());

    let notes = item.value("notes").unwrap();
    assert_eq!(notes.value, Value::Null);
    assert!(notes.title.is_none());

    assert_eq!(item.value("weird").unwrap().value, json!("x"));
    assert!(item.value("missing").is_none());
}

#[test]
fn test_map_item_recurses_into_linked_items() {
    let item = map_item(raw_item(json!({
        "id": "1",
        "name": "Parent",
        "column_values": [{
            "id": "rel",
            "text": "Child",
            "value": "{\"linkedPulseIds\":[{\"linkedPulseId\":2}]}",
            "type": "board_relation",
            "column": { "title": "Related" },
            "linked_items": [{
                "id": "2",
                "name": "Child",
                "column_values": [{
                    "id": "rel2",
                    "text": "",
                    "value": null,
                    "type": "board_relation",
                    "column": { "title": "Deeper" },
                    "linked_items": [{ "id": "3", "name": "Grandchild", "column_values": [] }]
                }]
            }]
        }]
    })));

    let child = &item.value("rel").unwrap().linked_items.as_ref().unwrap()[0];
    assert_eq!(child.name, "Child");
    let grandchild = &child.value("rel2").unwrap().linked_items.as_ref().unwrap()[0];
    assert_eq!(grandchild.id, "3");
    assert!(grandchild.values.is_empty());
}

#[test]
fn test_item_serializes_linked_items_key() {
    let item = map_item(raw_item(json!({
        "id": "1",
        "name": "Parent",
        "column_values": [
            { "id": "rel", "text": null, "value": null, "type": "board_relation", "linked_items": [] },
            { "id": "plain", "text": "a", "value": "\"a\"", "type": "text" }
        ]
    })));

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["values"][0]["linkedItems"], json!([]));
    assert!(json["values"][1].get("linkedItems").is_none());
    assert_eq!(json["values"][1]["type"], json!("text"));
}
