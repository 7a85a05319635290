//! Lost & Found Board Core
//!
//! Layered the same way as the UI consumes it:
//! - domain: the item record and its errors
//! - store: the owned, in-memory collection
//! - filter: criteria and the filter/sort engine
//! - view: view models for the list, report form and detail pages
//! - controller: page state machine driving all of the above

pub mod config;
pub mod controller;
pub mod domain;
pub mod filter;
pub mod seed;
pub mod store;
pub mod view;

pub use config::BoardConfig;
pub use controller::{Controller, Nav, Page, Screen, SubmitTicket};
pub use domain::{BoardError, BoardResult, Category, ImageRef, Item, ItemDraft, ItemId, Kind};
pub use filter::{filter_and_sort, CategoryFilter, Criteria, KindFilter, StatusFilter};
pub use store::ItemStore;
