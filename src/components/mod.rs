//! UI Components
//!
//! Leptos components drawing the board's view models.

mod header_bar;
mod item_media;
mod filter_bar;
mod item_grid;
mod new_item_form;
mod item_detail;

pub use header_bar::HeaderBar;
pub use item_media::{BadgeRow, ItemImage};
pub use filter_bar::FilterBar;
pub use item_grid::ItemGrid;
pub use new_item_form::NewItemForm;
pub use item_detail::ItemDetail;
