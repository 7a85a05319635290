//! Filter Bar Component
//!
//! Query, kind, category and status controls. Applied on submit.

use leptos::prelude::*;

use lost_found_core::filter::{KIND_OPTIONS, STATUS_OPTIONS};
use lost_found_core::{Category, CategoryFilter, Criteria};

use crate::store::{store_apply_filter, use_app_store};

/// Filter form, pre-filled from the criteria currently applied
#[component]
pub fn FilterBar(criteria: Criteria) -> impl IntoView {
    let store = use_app_store();

    let (query, set_query) = signal(criteria.query.clone());
    let (kind, set_kind) = signal(criteria.kind.as_value().to_string());
    let (category, set_category) = signal(criteria.category.as_value().to_string());
    let (status, set_status) = signal(criteria.status.as_value().to_string());

    let apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match Criteria::from_form(&query.get(), &kind.get(), &category.get(), &status.get()) {
            Ok(criteria) => store_apply_filter(&store, criteria),
            Err(e) => log::warn!("[FILTER] Ignoring filter form: {}", e),
        }
    };

    let current = criteria;

    view! {
        <section class="card">
            <form id="filter-form" class="filters" on:submit=apply>
                <input
                    type="text"
                    name="q"
                    placeholder="Search by keyword..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select name="type" on:change=move |ev| set_kind.set(event_target_value(&ev))>
                    {KIND_OPTIONS.iter().map(|(filter, label)| view! {
                        <option value=filter.as_value() selected=current.kind == *filter>{*label}</option>
                    }).collect_view()}
                </select>
                <select name="category" on:change=move |ev| set_category.set(event_target_value(&ev))>
                    <option value="all" selected=current.category == CategoryFilter::All>"All Categories"</option>
                    {Category::ALL.iter().map(|cat| view! {
                        <option value=cat.label() selected=current.category == CategoryFilter::Only(*cat)>{cat.label()}</option>
                    }).collect_view()}
                </select>
                <select name="status" on:change=move |ev| set_status.set(event_target_value(&ev))>
                    {STATUS_OPTIONS.iter().map(|(filter, label)| view! {
                        <option value=filter.as_value() selected=current.status == *filter>{*label}</option>
                    }).collect_view()}
                </select>
                <button class="btn" type="submit">"Filter"</button>
            </form>
        </section>
    }
}
