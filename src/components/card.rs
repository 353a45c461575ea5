//! Shopping Lists Card
//!
//! Top level view: header, list table, and the fatal check that the
//! configured entity exists at all.

use leptos::prelude::*;

use crate::components::ListRow;
use crate::context::CardContext;
use crate::style::STYLE;

#[component]
pub fn ShoppingListsCard() -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    // A missing entity is a setup error, not something to render
    // around. Raising here mirrors how the host treats broken cards.
    let lists = move || {
        let entity_id = ctx.config.with(|config| config.entity.clone());
        ctx.states.with(|states| match states.get(&entity_id) {
            Some(entity) => entity.shopping_lists(),
            None => panic!("shopping lists sensor {entity_id} not found"),
        })
    };

    view! {
        <div class="shopping-lists-card">
            <style>{STYLE}</style>
            <Show when=move || ctx.config.with(|config| config.show_header)>
                <div class="header">
                    {move || ctx.config.with(|config| config.title.clone())}
                </div>
            </Show>
            <div class="body">
                <table>
                    <thead>
                        <tr>
                            <th>"Shopping Lists"</th>
                            <th>"# Items"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=lists
                            key=|list| (list.id.clone(), list.name.clone(), list.active_count)
                            children=move |list| view! { <ListRow list=list/> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
