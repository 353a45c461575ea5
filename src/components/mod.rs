//! UI Components
//!
//! Leptos components making up the card.

mod card;
mod item_list;
mod list_row;
mod new_item_row;

pub use card::ShoppingListsCard;
pub use item_list::ItemList;
pub use list_row::ListRow;
pub use new_item_row::NewItemRow;
