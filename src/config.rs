//! Card Configuration
//!
//! User-supplied card config merged shallowly over the defaults.
//! Keys the card does not interpret are kept so they round-trip
//! through serde untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rows the host reserves for the card in its layout grid.
pub const CARD_SIZE: u32 = 5;

/// Backend API route every command is posted to.
pub const API_ROUTE: &str = "ourgroceries";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Entity whose attributes carry the list snapshot.
    pub entity: String,
    pub title: String,
    pub show_header: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            entity: "sensor.our_groceries".to_string(),
            title: "Our Groceries".to_string(),
            show_header: true,
            extra: Map::new(),
        }
    }
}

impl CardConfig {
    /// Shallow-merge `config` over the defaults. A provided key wins
    /// whole; nothing is merged field-by-field below the top level.
    pub fn merged(config: Value) -> Result<Self, String> {
        let overrides = match config {
            Value::Object(overrides) => overrides,
            other => return Err(format!("card config must be an object, got {other}")),
        };
        let defaults = serde_json::to_value(Self::default()).map_err(|err| err.to_string())?;
        let mut merged = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in overrides {
            merged.insert(key, value);
        }
        serde_json::from_value(Value::Object(merged)).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_config_keeps_defaults() {
        let config = CardConfig::merged(json!({})).unwrap();
        assert_eq!(config.entity, "sensor.our_groceries");
        assert_eq!(config.title, "Our Groceries");
        assert!(config.show_header);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_provided_keys_override_defaults() {
        let config = CardConfig::merged(json!({
            "entity": "sensor.pantry",
            "show_header": false,
        }))
        .unwrap();

        assert_eq!(config.entity, "sensor.pantry");
        assert!(!config.show_header);
        // Untouched keys keep their default.
        assert_eq!(config.title, "Our Groceries");
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let config = CardConfig::merged(json!({
            "theme": "dark",
            "grid_options": { "columns": 6 },
        }))
        .unwrap();

        assert_eq!(config.extra["theme"], json!("dark"));
        assert_eq!(config.extra["grid_options"], json!({ "columns": 6 }));

        // Unknown keys survive reserialization at the top level.
        let round_trip = serde_json::to_value(&config).unwrap();
        assert_eq!(round_trip["theme"], json!("dark"));
    }

    #[test]
    fn test_second_config_replaces_not_accumulates() {
        let first = CardConfig::merged(json!({ "entity": "sensor.pantry" })).unwrap();
        assert_eq!(first.entity, "sensor.pantry");

        // A later config merges over the defaults, not its predecessor.
        let second = CardConfig::merged(json!({ "title": "Pantry" })).unwrap();
        assert_eq!(second.entity, "sensor.our_groceries");
        assert_eq!(second.title, "Pantry");
    }

    #[test]
    fn test_non_object_config_is_rejected() {
        assert!(CardConfig::merged(json!("sensor.our_groceries")).is_err());
        assert!(CardConfig::merged(json!(null)).is_err());
    }

    #[test]
    fn test_wrongly_typed_known_key_is_rejected() {
        assert!(CardConfig::merged(json!({ "show_header": "yes" })).is_err());
    }
}
