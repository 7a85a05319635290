//! Domain Layer
//!
//! The item record and the errors raised while building or storing it.

mod error;
mod item;

pub use error::{BoardError, BoardResult};
pub use item::{Category, ImageRef, Item, ItemDraft, ItemId, Kind};
