//! Item Detail Component
//!
//! Full posting with contact link and the resolve action.

use leptos::prelude::*;
use web_sys::MouseEvent;

use lost_found_core::view::DetailView;
use lost_found_core::Nav;

use crate::components::{BadgeRow, ItemImage};
use crate::store::{store_navigate, store_resolve, use_app_store};

#[component]
pub fn ItemDetail(detail: DetailView) -> impl IntoView {
    let store = use_app_store();
    let id = detail.id.clone();
    let resolve_action = detail.resolve;

    let resolve = move |ev: MouseEvent| {
        ev.prevent_default();
        if resolve_action.is_disabled() {
            return;
        }
        store_resolve(&store, &id);
    };

    let back = move |ev: MouseEvent| {
        ev.prevent_default();
        store_navigate(&store, Nav::Back);
    };

    let description = detail
        .description_lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| view! { {(i > 0).then(|| view! { <br /> })} {line} })
        .collect_view();

    view! {
        <article class="card item-detail">
            <div class="item-detail-grid">
                <div class="media">
                    <ItemImage src=detail.image_src variant="hero" />
                </div>
                <div class="details">
                    <BadgeRow badges=detail.badges />
                    <h2>{detail.title}</h2>
                    <p class="desc">{description}</p>
                    <div class="grid-two">
                        <div>
                            <div class="muted">"Location"</div>
                            <div><strong>{detail.location}</strong></div>
                        </div>
                        <div>
                            <div class="muted">"Date"</div>
                            <div><strong>{detail.date}</strong></div>
                        </div>
                    </div>
                    <div class="grid-two">
                        <div>
                            <div class="muted">"Contact"</div>
                            <div><strong>{detail.contact_name}</strong></div>
                        </div>
                        <div>
                            <div class="muted">"Email"</div>
                            <div><a href=detail.mailto>{detail.contact_email}</a></div>
                        </div>
                    </div>
                    <div class="form-actions">
                        <button
                            class="btn btn-success"
                            id="resolve-btn"
                            disabled=resolve_action.is_disabled()
                            on:click=resolve
                        >
                            {resolve_action.label()}
                        </button>
                        <a class="btn btn-outline" id="back-to-list" href="#" on:click=back>"Back to List"</a>
                    </div>
                </div>
            </div>
        </article>
    }
}
