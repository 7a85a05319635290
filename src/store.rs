//! Application State Store
//!
//! Uses Leptos reactive_stores so views re-render from the board controller.

use chrono::{DateTime, NaiveDate, Utc};
use leptos::prelude::*;
use reactive_stores::Store;

use lost_found_core::{
    BoardError, BoardResult, Controller, Criteria, ImageRef, ItemDraft, ItemId, Nav, Screen, SubmitTicket,
};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, criteria and active page
    pub board: Controller,
}

impl AppState {
    pub fn new(board: Controller) -> Self {
        Self { board }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Current calendar date (UTC), used as the report form default
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

// ========================
// Store Helper Functions
// ========================

/// Render the active page (tracked)
pub fn store_screen(store: &AppStore) -> Screen {
    store.board().read().screen(today())
}

/// Page entry counter (tracked)
pub fn store_visits(store: &AppStore) -> u64 {
    store.board().read().visits()
}

/// Whether an image is still being read for a submission (tracked)
pub fn store_is_submitting(store: &AppStore) -> bool {
    store.board().read().is_submitting()
}

/// Last submission error (tracked)
pub fn store_notice(store: &AppStore) -> Option<String> {
    store.board().read().notice().map(str::to_string)
}

pub fn store_navigate(store: &AppStore, nav: Nav) {
    store.board().write().navigate(nav);
}

pub fn store_apply_filter(store: &AppStore, criteria: Criteria) {
    store.board().write().apply_filter(criteria);
}

pub fn store_resolve(store: &AppStore, id: &ItemId) {
    store.board().write().resolve(id);
}

/// Submit a draft with no file to read
pub fn store_submit(store: &AppStore, draft: ItemDraft) -> BoardResult<ItemId> {
    store.board().write().submit(draft, now())
}

pub fn store_begin_submit(store: &AppStore, draft: ItemDraft) -> BoardResult<SubmitTicket> {
    store.board().write().begin_submit(draft, now())
}

pub fn store_complete_submit(store: &AppStore, ticket: SubmitTicket, data_url: String) -> Option<ItemId> {
    store.board().write().complete_submit(ticket, ImageRef::DataUrl(data_url))
}

pub fn store_fail_submit(store: &AppStore, ticket: SubmitTicket, reason: String) {
    store.board().write().fail_submit(ticket, BoardError::ImageRead(reason));
}
