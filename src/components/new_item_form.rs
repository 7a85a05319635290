//! New Item Form Component
//!
//! Report form for a lost or found item, drawn from the form scaffold.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, MouseEvent};

use lost_found_core::view::{CreateForm, FieldInput, FormField};
use lost_found_core::{Category, ItemDraft, Nav};

use crate::commands;
use crate::store::{
    store_begin_submit, store_complete_submit, store_fail_submit, store_is_submitting, store_navigate, store_notice,
    store_submit, use_app_store,
};

/// Form for reporting a new item
#[component]
pub fn NewItemForm(form: CreateForm) -> impl IntoView {
    let store = use_app_store();

    let mut initial = ItemDraft::new(form.kind);
    initial.category = form.categories[0].label().to_string();
    initial.date_iso = form.default_date.to_string();
    let draft = RwSignal::new(initial);
    let file_input = NodeRef::<html::Input>::new();

    let submitting = move || store_is_submitting(&store);
    let notice = move || store_notice(&store);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let values = draft.get_untracked();

        match chosen_file(file_input) {
            None => {
                if let Err(e) = store_submit(&store, values) {
                    log::debug!("[FORM] Submission rejected: {}", e);
                }
            }
            Some(file) => {
                let Ok(ticket) = store_begin_submit(&store, values) else { return };
                spawn_local(async move {
                    match commands::read_as_data_url(&file).await {
                        Ok(data_url) => {
                            store_complete_submit(&store, ticket, data_url);
                        }
                        Err(e) => store_fail_submit(&store, ticket, e),
                    }
                });
            }
        }
    };

    let cancel = move |ev: MouseEvent| {
        ev.prevent_default();
        store_navigate(&store, Nav::Cancel);
    };

    let default_date = form.default_date.to_string();
    let categories = form.categories;

    view! {
        <section class="card">
            <h2>{form.heading}</h2>
            {move || notice().map(|msg| view! { <p class="notice notice-error">{msg}</p> })}
            <form class="form" id="new-item-form" on:submit=create_item>
                {form.fields.iter().map(|field| view! {
                    <div class="form-row">
                        <label>
                            {field.label}
                            {field.required.then(|| view! { " " <span class="req">"*"</span> })}
                        </label>
                        {field_control(field, draft, file_input, &categories, &default_date)}
                    </div>
                }).collect_view()}
                <div class="form-actions">
                    <button class="btn" type="submit" disabled=submitting>
                        {move || if submitting() { "Uploading..." } else { "Submit" }}
                    </button>
                    <a class="btn btn-outline" id="cancel-new-item" href="#" on:click=cancel>"Cancel"</a>
                </div>
            </form>
        </section>
    }
}

/// Input element for one form row, writing into the draft on change
fn field_control(
    field: &FormField,
    draft: RwSignal<ItemDraft>,
    file_input: NodeRef<html::Input>,
    categories: &[Category],
    default_date: &str,
) -> AnyView {
    let name = field.name;
    let required = field.required;
    let placeholder = field.placeholder;
    let store_value = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        draft.update(|d| {
            d.set_field(name, value);
        });
    };

    match field.input {
        FieldInput::Text | FieldInput::Email => {
            let input_type = if field.input == FieldInput::Email { "email" } else { "text" };
            view! {
                <input name=name type=input_type required=required placeholder=placeholder on:input=store_value />
            }
            .into_any()
        }
        FieldInput::TextArea => view! {
            <textarea name=name rows="4" required=required placeholder=placeholder on:input=store_value></textarea>
        }
        .into_any(),
        FieldInput::CategorySelect => view! {
            <select name=name required=required on:change=store_value>
                {categories.iter().map(|cat| view! { <option value=cat.label()>{cat.label()}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldInput::Date => view! {
            <input name=name type="date" required=required value=default_date.to_string() on:input=store_value />
        }
        .into_any(),
        FieldInput::ImageFile => view! {
            <input name=name type="file" accept="image/*" node_ref=file_input />
        }
        .into_any(),
    }
}

/// The selected, non-empty image file, if any
fn chosen_file(file_input: NodeRef<html::Input>) -> Option<File> {
    file_input
        .get_untracked()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .filter(|file| file.size() > 0.0)
}
