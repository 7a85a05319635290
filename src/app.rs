//! Lost & Found Frontend App
//!
//! Header plus one page at a time: list, report form or item detail.

use leptos::prelude::*;
use reactive_stores::Store;

use lost_found_core::{Controller, Screen};

use crate::components::{FilterBar, HeaderBar, ItemDetail, ItemGrid, NewItemForm};
use crate::store::{store_screen, store_visits, AppState, AppStore};

#[component]
pub fn App(board: Controller) -> impl IntoView {
    // Provide the store to all children
    let store: AppStore = Store::new(AppState::new(board));
    provide_context(store);

    // Re-render when what the page shows changes, and on every page entry
    let screen = Memo::new(move |_| (store_visits(&store), store_screen(&store)));

    view! {
        <header class="topbar">
            <HeaderBar />
        </header>
        <main id="main-content" class="container">
            {move || match screen.get().1 {
                Screen::List { criteria, view: list } => view! {
                    <div id="page-list" class="page active">
                        <FilterBar criteria=criteria />
                        <ItemGrid list=list />
                    </div>
                }
                .into_any(),
                Screen::Create(form) => view! {
                    <div id="page-new" class="page active">
                        <NewItemForm form=form />
                    </div>
                }
                .into_any(),
                Screen::Detail(detail) => view! {
                    <div id="page-show" class="page active">
                        <ItemDetail detail=detail />
                    </div>
                }
                .into_any(),
            }}
        </main>
    }
}
