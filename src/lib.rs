//! Shopping Lists Card
//!
//! A dashboard card for browsing and editing shopping lists kept by a
//! backend integration. The host page creates a handle per card,
//! feeds it config and entity state, and mounts it into an element;
//! everything below that line is Leptos.

mod commands;
mod components;
mod config;
mod context;
mod diag;
mod hass;
mod models;
mod state;
mod style;

pub use commands::{GroceriesClient, GroceriesCommand};
pub use components::ShoppingListsCard;
pub use config::{CardConfig, API_ROUTE, CARD_SIZE};
pub use context::CardContext;
pub use hass::{HassApi, JsHass};
pub use models::{
    EntityState, GetListItemsResponse, ListDetails, ListItem, NewItemDraft, ShoppingList,
};
pub use state::CardState;

use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// The WASM-exposed card instance. The host page creates one of these
/// per card, pushes config and state into it, then mounts it.
#[wasm_bindgen]
pub struct ShoppingListsCardHandle {
    config: RwSignal<CardConfig>,
    states: RwSignal<HashMap<String, EntityState>>,
    state: CardState,
    hass: JsHass,
}

#[wasm_bindgen]
impl ShoppingListsCardHandle {
    /// Create a card with default config and no host state yet.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        diag::init();
        Self {
            config: RwSignal::new(CardConfig::default()),
            states: RwSignal::new(HashMap::new()),
            state: CardState::new(),
            hass: JsHass::new(),
        }
    }

    /// Merge the user's card config over the defaults. A bad config
    /// is reported and leaves the previous one in place.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: JsValue) {
        let config: serde_json::Value = match serde_wasm_bindgen::from_value(config) {
            Ok(config) => config,
            Err(err) => {
                log::error!("[ShoppingListsCard] config is not valid JSON: {err}");
                return;
            }
        };
        match CardConfig::merged(config) {
            Ok(merged) => self.config.set(merged),
            Err(err) => log::error!("[ShoppingListsCard] bad config: {err}"),
        }
    }

    /// Rows the card occupies in the host layout.
    #[wasm_bindgen(js_name = getCardSize)]
    pub fn get_card_size(&self) -> u32 {
        CARD_SIZE
    }

    /// Take the latest host object. Entity states are snapshotted for
    /// rendering; API calls go through the live object.
    #[wasm_bindgen(js_name = setHass)]
    pub fn set_hass(&self, hass: JsValue) {
        let states = js_sys::Reflect::get(&hass, &JsValue::from_str("states"))
            .unwrap_or(JsValue::UNDEFINED);
        match serde_wasm_bindgen::from_value::<HashMap<String, EntityState>>(states) {
            Ok(states) => self.states.set(states),
            Err(err) => log::error!("[ShoppingListsCard] could not read host states: {err}"),
        }
        self.hass.replace(hass);
    }

    /// Mount the card into `root`. The view stays alive for the
    /// page's lifetime.
    #[wasm_bindgen]
    pub fn mount(&self, root: web_sys::HtmlElement) {
        let client = GroceriesClient::new(Rc::new(self.hass.clone()), API_ROUTE);
        let ctx = CardContext::new(self.config, self.states, client, self.state);
        leptos::mount::mount_to(root, move || {
            provide_context(ctx);
            view! { <ShoppingListsCard/> }
        })
        .forget();
    }
}

impl Default for ShoppingListsCardHandle {
    fn default() -> Self {
        Self::new()
    }
}
