//! Item List Component
//!
//! Expanded item section of one list: active items first, crossed-off
//! items below, each half in fetch order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::CardContext;
use crate::models::{partition_items, ListItem};

#[component]
pub fn ItemList(list_id: String) -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    let parts_id = list_id.clone();
    let partitioned = move || {
        let items = ctx
            .state
            .details(&parts_id)
            .map(|details| details.items)
            .unwrap_or_default();
        partition_items(&items)
    };

    let active = {
        let partitioned = partitioned.clone();
        move || partitioned().0
    };
    let crossed_off = move || partitioned().1;

    let active_list_id = list_id.clone();
    let crossed_list_id = list_id.clone();

    view! {
        <tr>
            <td colspan="2">
                <ul>
                    <For
                        each=active
                        key=|item| (item.id.clone(), item.value.clone())
                        children=move |item| {
                            view! { <ItemRow list_id=active_list_id.clone() item=item/> }
                        }
                    />
                </ul>
                <ul>
                    <For
                        each=crossed_off
                        key=|item| (item.id.clone(), item.value.clone())
                        children=move |item| {
                            view! { <ItemRow list_id=crossed_list_id.clone() item=item/> }
                        }
                    />
                </ul>
            </td>
        </tr>
    }
}

/// One item line. Clicking the text flips its crossed-off state, the
/// button deletes it.
#[component]
fn ItemRow(list_id: String, item: ListItem) -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    let crossed_off = item.crossed_off;
    let toggle_list_id = list_id.clone();
    let toggle_item_id = item.id.clone();
    let remove_list_id = list_id;
    let remove_item_id = item.id.clone();

    view! {
        <li class="pointer" class:crossed-off=crossed_off>
            <div on:click=move |_| {
                let client = ctx.client();
                let list_id = toggle_list_id.clone();
                let item_id = toggle_item_id.clone();
                spawn_local(async move {
                    ctx.state
                        .toggle_item(&client, &list_id, &item_id, !crossed_off)
                        .await;
                });
            }>
                {item.value.clone()}
            </div>
            <button on:click=move |_| {
                let client = ctx.client();
                let list_id = remove_list_id.clone();
                let item_id = remove_item_id.clone();
                spawn_local(async move {
                    ctx.state.remove_item(&client, &list_id, &item_id).await;
                });
            }>"×"</button>
        </li>
    }
}
