//! Card Context
//!
//! Shared card state provided via Leptos Context API.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::commands::GroceriesClient;
use crate::config::CardConfig;
use crate::models::EntityState;
use crate::state::CardState;

/// Card-wide signals provided via context
#[derive(Clone, Copy)]
pub struct CardContext {
    /// Merged card config, replaced whole on every setConfig
    pub config: RwSignal<CardConfig>,
    /// Host entity snapshot, replaced whole on every setHass
    pub states: RwSignal<HashMap<String, EntityState>>,
    /// Backend client; stored locally, it is not thread safe
    client: StoredValue<GroceriesClient, LocalStorage>,
    /// Per-list open flags, details and drafts
    pub state: CardState,
}

impl CardContext {
    pub fn new(
        config: RwSignal<CardConfig>,
        states: RwSignal<HashMap<String, EntityState>>,
        client: GroceriesClient,
        state: CardState,
    ) -> Self {
        Self {
            config,
            states,
            client: StoredValue::new_local(client),
            state,
        }
    }

    /// Clone of the backend client for async actions
    pub fn client(&self) -> GroceriesClient {
        self.client.get_value()
    }
}
