//! Card Models
//!
//! Data structures matching the backend wire format and the host's
//! entity-state feed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One shopping list as summarized in the entity snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    /// Count of not-crossed-off items, maintained by the backend.
    #[serde(rename = "activeCount")]
    pub active_count: u32,
}

/// A single line entry within a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub value: String,
    #[serde(rename = "crossedOff")]
    pub crossed_off: bool,
}

/// Full detail of one list, only available through an explicit fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDetails {
    pub id: String,
    pub name: String,
    pub items: Vec<ListItem>,
}

/// Response envelope of `get_list_items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetListItemsResponse {
    pub list: ListDetails,
}

/// In-progress add-item input for one list, not yet committed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemDraft {
    pub show: bool,
    pub value: String,
}

/// One entity from the host's state feed. The attribute bag stays raw;
/// the card only ever picks `shopping_lists` out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub attributes: Value,
}

impl EntityState {
    /// The `shopping_lists` attribute in host order. Absent or
    /// malformed data renders as an empty card body.
    pub fn shopping_lists(&self) -> Vec<ShoppingList> {
        let Some(lists) = self.attributes.get("shopping_lists") else {
            return Vec::new();
        };
        serde_json::from_value(lists.clone()).unwrap_or_else(|err| {
            log::error!("[ShoppingListsCard] malformed shopping_lists attribute: {err}");
            Vec::new()
        })
    }
}

/// Split items into (active, crossed-off), each keeping its original
/// fetch order. The partition is stable; nothing is re-sorted.
pub fn partition_items(items: &[ListItem]) -> (Vec<ListItem>, Vec<ListItem>) {
    let mut active = Vec::new();
    let mut crossed_off = Vec::new();
    for item in items {
        if item.crossed_off {
            crossed_off.push(item.clone());
        } else {
            active.push(item.clone());
        }
    }
    (active, crossed_off)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_item(id: &str, value: &str, crossed_off: bool) -> ListItem {
        ListItem {
            id: id.to_string(),
            value: value.to_string(),
            crossed_off,
        }
    }

    #[test]
    fn test_partition_splits_by_crossed_off() {
        let items = vec![
            make_item("i1", "Milk", false),
            make_item("i2", "Eggs", true),
            make_item("i3", "Bread", false),
        ];

        let (active, crossed_off) = partition_items(&items);

        assert_eq!(active.len(), 2);
        assert_eq!(active[0].value, "Milk");
        assert_eq!(active[1].value, "Bread");
        assert_eq!(crossed_off.len(), 1);
        assert_eq!(crossed_off[0].value, "Eggs");
    }

    #[test]
    fn test_partition_keeps_fetch_order_within_each_half() {
        let items = vec![
            make_item("i1", "d", true),
            make_item("i2", "a", false),
            make_item("i3", "c", true),
            make_item("i4", "b", false),
        ];

        let (active, crossed_off) = partition_items(&items);

        // Interleaved input stays in fetch order, never sorted.
        let active_ids: Vec<&str> = active.iter().map(|i| i.id.as_str()).collect();
        let crossed_ids: Vec<&str> = crossed_off.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(active_ids, ["i2", "i4"]);
        assert_eq!(crossed_ids, ["i1", "i3"]);
    }

    #[test]
    fn test_partition_of_empty_list() {
        let (active, crossed_off) = partition_items(&[]);
        assert!(active.is_empty());
        assert!(crossed_off.is_empty());
    }

    #[test]
    fn test_shopping_list_reads_camel_case_wire_keys() {
        let list: ShoppingList = serde_json::from_value(json!({
            "id": "L1",
            "name": "Groceries",
            "activeCount": 7,
        }))
        .unwrap();

        assert_eq!(list.id, "L1");
        assert_eq!(list.active_count, 7);

        let item: ListItem = serde_json::from_value(json!({
            "id": "i1",
            "value": "Milk",
            "crossedOff": true,
        }))
        .unwrap();
        assert!(item.crossed_off);
    }

    #[test]
    fn test_get_list_items_response_envelope() {
        let response: GetListItemsResponse = serde_json::from_value(json!({
            "list": {
                "id": "L1",
                "name": "Groceries",
                "items": [
                    { "id": "i1", "value": "Milk", "crossedOff": false },
                ],
            },
        }))
        .unwrap();

        assert_eq!(response.list.id, "L1");
        assert_eq!(response.list.items.len(), 1);
    }

    #[test]
    fn test_entity_without_shopping_lists_is_empty() {
        let entity = EntityState {
            attributes: json!({ "friendly_name": "Our Groceries" }),
        };
        assert!(entity.shopping_lists().is_empty());
    }

    #[test]
    fn test_entity_shopping_lists_keep_host_order() {
        let entity = EntityState {
            attributes: json!({
                "shopping_lists": [
                    { "id": "L2", "name": "Hardware", "activeCount": 1 },
                    { "id": "L1", "name": "Groceries", "activeCount": 4 },
                ],
            }),
        };

        let lists = entity.shopping_lists();
        let ids: Vec<&str> = lists.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["L2", "L1"]);
    }

    #[test]
    fn test_malformed_shopping_lists_attribute_is_empty() {
        let entity = EntityState {
            attributes: json!({ "shopping_lists": "not a list" }),
        };
        assert!(entity.shopping_lists().is_empty());
    }
}
