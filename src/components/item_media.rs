//! Item Media Components
//!
//! Picture (or placeholder) and badge row shared by cards and the detail page.

use leptos::prelude::*;

use lost_found_core::view::{Badges, NO_IMAGE_LABEL};

/// Item picture; `src` may be an external URL or a data URL
#[component]
pub fn ItemImage(
    src: Option<String>,
    /// CSS class, e.g. "thumb" on cards or "hero" on the detail page
    variant: &'static str,
) -> impl IntoView {
    match src {
        Some(src) => view! { <img class=variant src=src alt="Item image" /> }.into_any(),
        None => view! { <div class=format!("{} placeholder", variant)>{NO_IMAGE_LABEL}</div> }.into_any(),
    }
}

/// Kind, resolved and category badges
#[component]
pub fn BadgeRow(badges: Badges) -> impl IntoView {
    view! {
        <div class="item-meta">
            <span class=badges.kind_class()>{badges.kind.label()}</span>
            {badges.resolved.then(|| view! { <span class="badge badge-neutral">"Resolved"</span> })}
            <span class="badge badge-muted">{badges.category.label()}</span>
        </div>
    }
}
