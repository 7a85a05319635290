//! Item Grid Component
//!
//! Cards for the filtered items, or the empty placeholder.

use leptos::prelude::*;
use web_sys::MouseEvent;

use lost_found_core::view::{item_count_label, ItemCard, ListView, EMPTY_LIST_MESSAGE};
use lost_found_core::Nav;

use crate::components::{BadgeRow, ItemImage};
use crate::store::{store_navigate, use_app_store};

#[component]
pub fn ItemGrid(list: ListView) -> impl IntoView {
    match list {
        ListView::Empty => view! {
            <section class="grid" id="items-grid">
                <div class="empty">
                    <p>{EMPTY_LIST_MESSAGE}</p>
                </div>
            </section>
        }
        .into_any(),
        ListView::Cards(cards) => {
            let count = item_count_label(cards.len());
            view! {
                <p class="item-count">{count}</p>
                <section class="grid" id="items-grid">
                    {cards.into_iter().map(|card| view! { <ItemCardView card=card /> }).collect_view()}
                </section>
            }
            .into_any()
        }
    }
}

/// A single clickable card
#[component]
fn ItemCardView(card: ItemCard) -> impl IntoView {
    let store = use_app_store();
    let id = card.id.clone();

    let open = move |ev: MouseEvent| {
        ev.prevent_default();
        store_navigate(&store, Nav::Open(id.clone()));
    };

    view! {
        <article class="card item-card">
            <a class="item-link" href="#" data-id=card.id.to_string() on:click=open>
                <ItemImage src=card.image_src variant="thumb" />
                <div class="item-body">
                    <BadgeRow badges=card.badges />
                    <h3 class="item-title">{card.title}</h3>
                    <p class="item-desc">{card.excerpt}</p>
                    <div class="item-footer">
                        <span class="muted"><strong>{card.location}</strong></span>
                        <span class="muted"><strong>{card.date}</strong></span>
                    </div>
                </div>
            </a>
        </article>
    }
}
