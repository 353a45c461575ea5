//! New Item Row Component
//!
//! Inline input for adding one item to a list. Enter or the send
//! button submits; the draft text itself lives in card state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::CardContext;

#[component]
pub fn NewItemRow(list_id: String) -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    let value_id = list_id.clone();
    let value = move || {
        ctx.state
            .draft(&value_id)
            .map(|draft| draft.value)
            .unwrap_or_default()
    };

    let input_id = list_id.clone();
    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        ctx.state.update_draft(&input_id, &input.value());
    };

    let submit = {
        let list_id = list_id.clone();
        move || {
            let client = ctx.client();
            let list_id = list_id.clone();
            spawn_local(async move {
                ctx.state.submit_draft(&client, &list_id).await;
            });
        }
    };

    let submit_on_enter = {
        let submit = submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                submit();
            }
        }
    };
    let submit_on_click = move |_: web_sys::MouseEvent| submit();

    view! {
        <tr>
            <td class="td new-item">
                <input
                    type="text"
                    placeholder="New Item"
                    prop:value=value
                    on:input=on_input
                    on:keydown=submit_on_enter
                />
                <button class="add-item pointer" on:click=submit_on_click>"➤"</button>
            </td>
        </tr>
    }
}
