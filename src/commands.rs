//! Backend Commands
//!
//! Typed wrappers over the backend endpoint. Every command is a POST
//! of a tagged JSON body to the same route; only the `command` field
//! and its arguments differ.

use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::hass::HassApi;
use crate::models::{GetListItemsResponse, ListDetails};

const METHOD: &str = "post";

/// Body of one backend call. The tag becomes the `command` field on
/// the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum GroceriesCommand {
    GetListItems {
        list_id: String,
    },
    AddItemToList {
        list_id: String,
        value: String,
    },
    RemoveItemFromList {
        list_id: String,
        item_id: String,
    },
    ToggleItemCrossedOff {
        list_id: String,
        item_id: String,
        cross_off: bool,
    },
}

/// Client for the shopping-lists backend, generic over the host API
/// so tests can swap in a recording fake.
#[derive(Clone)]
pub struct GroceriesClient {
    api: Rc<dyn HassApi>,
    route: String,
}

impl GroceriesClient {
    pub fn new(api: Rc<dyn HassApi>, route: &str) -> Self {
        Self {
            api,
            route: route.to_string(),
        }
    }

    async fn post(&self, command: GroceriesCommand) -> Result<Value, String> {
        let payload = serde_json::to_value(&command).map_err(|err| err.to_string())?;
        self.api.call_api(METHOD, &self.route, payload).await
    }

    /// Fetch the full item detail of one list.
    pub async fn get_list_items(&self, list_id: &str) -> Result<ListDetails, String> {
        let response = self
            .post(GroceriesCommand::GetListItems {
                list_id: list_id.to_string(),
            })
            .await?;
        let response: GetListItemsResponse =
            serde_json::from_value(response).map_err(|err| err.to_string())?;
        Ok(response.list)
    }

    /// Add one item to a list. The value is sent as typed.
    pub async fn add_item_to_list(&self, list_id: &str, value: &str) -> Result<(), String> {
        self.post(GroceriesCommand::AddItemToList {
            list_id: list_id.to_string(),
            value: value.to_string(),
        })
        .await?;
        Ok(())
    }

    /// Delete one item from a list.
    pub async fn remove_item_from_list(&self, list_id: &str, item_id: &str) -> Result<(), String> {
        self.post(GroceriesCommand::RemoveItemFromList {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
        })
        .await?;
        Ok(())
    }

    /// Set the crossed-off flag of one item.
    pub async fn toggle_item_crossed_off(
        &self,
        list_id: &str,
        item_id: &str,
        cross_off: bool,
    ) -> Result<(), String> {
        self.post(GroceriesCommand::ToggleItemCrossedOff {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
            cross_off,
        })
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_list_items_wire_body() {
        let command = GroceriesCommand::GetListItems {
            list_id: "L1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({ "command": "get_list_items", "list_id": "L1" }),
        );
    }

    #[test]
    fn test_add_item_to_list_wire_body() {
        let command = GroceriesCommand::AddItemToList {
            list_id: "L1".to_string(),
            value: "Milk".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({ "command": "add_item_to_list", "list_id": "L1", "value": "Milk" }),
        );
    }

    #[test]
    fn test_remove_item_from_list_wire_body() {
        let command = GroceriesCommand::RemoveItemFromList {
            list_id: "L1".to_string(),
            item_id: "i9".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({ "command": "remove_item_from_list", "list_id": "L1", "item_id": "i9" }),
        );
    }

    #[test]
    fn test_toggle_item_crossed_off_wire_body() {
        let command = GroceriesCommand::ToggleItemCrossedOff {
            list_id: "L1".to_string(),
            item_id: "i9".to_string(),
            cross_off: true,
        };
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({
                "command": "toggle_item_crossed_off",
                "list_id": "L1",
                "item_id": "i9",
                "cross_off": true,
            }),
        );
    }
}
