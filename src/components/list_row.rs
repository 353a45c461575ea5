//! List Row Component
//!
//! One shopping list: its name row plus the optional add-item row and
//! expanded item section below it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ItemList, NewItemRow};
use crate::context::CardContext;
use crate::models::ShoppingList;

#[component]
pub fn ListRow(list: ShoppingList) -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    let draft_id = list.id.clone();
    let toggle_id = list.id.clone();
    let new_item_id = list.id.clone();
    let items_id = list.id.clone();

    let draft_shown = {
        let list_id = list.id.clone();
        move || {
            ctx.state
                .draft(&list_id)
                .map(|draft| draft.show)
                .unwrap_or(false)
        }
    };

    // Details may be missing right after expand while the fetch is
    // still in flight; the section only renders once both are there.
    let expanded = {
        let list_id = list.id.clone();
        move || ctx.state.is_open(&list_id) && ctx.state.details(&list_id).is_some()
    };

    view! {
        <tr>
            <td class="td td-name pointer">
                <button on:click=move |_| ctx.state.toggle_draft(&draft_id)>"+"</button>
                <span on:click=move |_| {
                    let client = ctx.client();
                    let list_id = toggle_id.clone();
                    spawn_local(async move {
                        ctx.state.toggle_list(&client, &list_id).await;
                    });
                }>
                    {list.name.clone()}
                </span>
            </td>
            <td class="td td-count">{list.active_count}</td>
        </tr>
        <Show when=draft_shown>
            <NewItemRow list_id=new_item_id.clone()/>
        </Show>
        <Show when=expanded>
            <ItemList list_id=items_id.clone()/>
        </Show>
    }
}
