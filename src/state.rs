//! Card State
//!
//! Reactive per-list state and the call-and-refetch protocol behind
//! every user action. Views stay thin; everything observable lives in
//! the three maps here.
//!
//! A note on races: two overlapping fetches for the same list both
//! write on completion, so the later completion is what sticks. That
//! matches the backend being the single source of truth.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::commands::GroceriesClient;
use crate::models::{ListDetails, NewItemDraft};

#[derive(Clone, Copy)]
pub struct CardState {
    /// list id -> expanded flag. Collapse writes `false`; entries are
    /// never removed.
    opened: RwSignal<HashMap<String, bool>>,
    /// list id -> last fetched detail. Survives collapse.
    details: RwSignal<HashMap<String, ListDetails>>,
    /// list id -> add-item draft.
    drafts: RwSignal<HashMap<String, NewItemDraft>>,
}

impl CardState {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(HashMap::new()),
            details: RwSignal::new(HashMap::new()),
            drafts: RwSignal::new(HashMap::new()),
        }
    }

    pub fn is_open(&self, list_id: &str) -> bool {
        self.opened
            .with(|opened| opened.get(list_id).copied().unwrap_or(false))
    }

    pub fn details(&self, list_id: &str) -> Option<ListDetails> {
        self.details.with(|details| details.get(list_id).cloned())
    }

    pub fn draft(&self, list_id: &str) -> Option<NewItemDraft> {
        self.drafts.with(|drafts| drafts.get(list_id).cloned())
    }

    /// Expand or collapse one list. Collapsing is local; expanding
    /// always refetches, even when a detail is still cached.
    pub async fn toggle_list(&self, client: &GroceriesClient, list_id: &str) {
        let is_open = self
            .opened
            .with_untracked(|opened| opened.get(list_id).copied().unwrap_or(false));
        if is_open {
            self.opened.update(|opened| {
                opened.insert(list_id.to_string(), false);
            });
            return;
        }
        self.fetch_list_items(client, list_id).await;
    }

    /// Fetch one list's items and expand it. On failure the list
    /// keeps its previous detail and stays closed.
    pub async fn fetch_list_items(&self, client: &GroceriesClient, list_id: &str) {
        match client.get_list_items(list_id).await {
            Ok(list) => {
                log::debug!(
                    "[ShoppingListsCard] loaded {} items for {list_id}",
                    list.items.len()
                );
                self.details.update(|details| {
                    details.insert(list_id.to_string(), list);
                });
                self.opened.update(|opened| {
                    opened.insert(list_id.to_string(), true);
                });
            }
            Err(err) => {
                log::error!("[ShoppingListsCard] get_list_items failed for {list_id}: {err}");
            }
        }
    }

    /// Show the add-item row, or hide it and throw away its text.
    pub fn toggle_draft(&self, list_id: &str) {
        self.drafts.update(|drafts| {
            let shown = drafts.get(list_id).map(|draft| draft.show).unwrap_or(false);
            if shown {
                drafts.remove(list_id);
            } else {
                let value = drafts
                    .get(list_id)
                    .map(|draft| draft.value.clone())
                    .unwrap_or_default();
                drafts.insert(list_id.to_string(), NewItemDraft { show: true, value });
            }
        });
    }

    pub fn update_draft(&self, list_id: &str, value: &str) {
        self.drafts.update(|drafts| {
            if let Some(draft) = drafts.get_mut(list_id) {
                draft.value = value.to_string();
            }
        });
    }

    /// Send the draft as a new item. On success the draft resets and
    /// the list refreshes if it is expanded; on failure the draft
    /// stays so the user can retry.
    pub async fn submit_draft(&self, client: &GroceriesClient, list_id: &str) {
        let value = self.drafts.with_untracked(|drafts| {
            drafts
                .get(list_id)
                .map(|draft| draft.value.clone())
                .unwrap_or_default()
        });
        match client.add_item_to_list(list_id, &value).await {
            Ok(()) => {
                self.drafts.update(|drafts| {
                    drafts.insert(
                        list_id.to_string(),
                        NewItemDraft {
                            show: false,
                            value: String::new(),
                        },
                    );
                });
                let is_open = self
                    .opened
                    .with_untracked(|opened| opened.get(list_id).copied().unwrap_or(false));
                if is_open {
                    self.fetch_list_items(client, list_id).await;
                }
            }
            Err(err) => {
                log::error!("[ShoppingListsCard] add_item_to_list failed for {list_id}: {err}");
            }
        }
    }

    /// Delete one item, then refresh the list it came from.
    pub async fn remove_item(&self, client: &GroceriesClient, list_id: &str, item_id: &str) {
        match client.remove_item_from_list(list_id, item_id).await {
            Ok(()) => self.fetch_list_items(client, list_id).await,
            Err(err) => {
                log::error!("[ShoppingListsCard] remove_item_from_list failed for {list_id}: {err}");
            }
        }
    }

    /// Set one item's crossed-off flag, then refresh its list.
    pub async fn toggle_item(
        &self,
        client: &GroceriesClient,
        list_id: &str,
        item_id: &str,
        cross_off: bool,
    ) {
        match client
            .toggle_item_crossed_off(list_id, item_id, cross_off)
            .await
        {
            Ok(()) => self.fetch_list_items(client, list_id).await,
            Err(err) => {
                log::error!(
                    "[ShoppingListsCard] toggle_item_crossed_off failed for {list_id}: {err}"
                );
            }
        }
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}
