//! Search Bar Component
//!
//! Free-text search over the in-memory article list, plus the Add action.

use leptos::prelude::*;

use crate::components::FormTarget;
use crate::store::use_app_store;

/// Search input, category dropdown, and the Add button.
///
/// Searching never hits the network; it only recomputes the display list
/// from the already-fetched articles.
#[component]
pub fn SearchBar(set_form_target: WriteSignal<Option<FormTarget>>) -> impl IntoView {
    let store = use_app_store();

    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let on_search = move |_: web_sys::MouseEvent| {
        store.write().search(&category.get(), &query.get());
    };

    view! {
        <div class="search-section">
            <span>
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select
                    class="search-category"
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"Search by"</option>
                    <option value="id">"ID"</option>
                    <option value="userId">"User ID"</option>
                    <option value="title">"Title"</option>
                </select>
                <button class="primary-btn" on:click=on_search>"Search"</button>
            </span>

            <button
                class="primary-btn"
                on:click=move |_| set_form_target.set(Some(FormTarget::Create))
            >
                "Add"
            </button>
        </div>
    }
}
