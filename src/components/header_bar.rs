//! Header Bar Component
//!
//! Brand link and the report buttons, available from every page.

use leptos::prelude::*;
use web_sys::MouseEvent;

use lost_found_core::{Kind, Nav};

use crate::store::{store_navigate, use_app_store};

/// Global navigation bar
#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_app_store();

    let go = move |nav: Nav| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            store_navigate(&store, nav.clone());
        }
    };

    view! {
        <div class="topbar-inner">
            <a id="brand-link" class="brand" href="#" on:click=go(Nav::Home)>
                "Lost & Found"
            </a>
            <nav class="topbar-actions">
                <a id="report-lost-btn" class="btn btn-danger" href="#" on:click=go(Nav::Report(Kind::Lost))>
                    "Report Lost"
                </a>
                <a id="report-found-btn" class="btn btn-success" href="#" on:click=go(Nav::Report(Kind::Found))>
                    "Report Found"
                </a>
            </nav>
        </div>
    }
}
