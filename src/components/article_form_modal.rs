//! Article Form Modal Component
//!
//! Create/update form for a single article, shown over the list. One
//! network call per submit; the store is only touched after the server
//! responds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Article, ArticleParams, DEFAULT_USER_ID};
use crate::notify::notify;
use crate::store::use_app_store;

/// What the form is working on: a fresh article or an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormTarget {
    Create,
    Edit(Article),
}

#[component]
pub fn ArticleFormModal(
    target: FormTarget,
    set_target: WriteSignal<Option<FormTarget>>,
) -> impl IntoView {
    let store = use_app_store();

    let editing = match target {
        FormTarget::Edit(article) => Some(article),
        FormTarget::Create => None,
    };
    let is_update = editing.is_some();

    let (title, set_title) = signal(
        editing
            .as_ref()
            .map(|a| a.title.clone())
            .unwrap_or_default(),
    );
    let (body, set_body) = signal(
        editing
            .as_ref()
            .map(|a| a.body.clone())
            .unwrap_or_default(),
    );
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_submitting.set(true);

        let editing = editing.clone();
        let title = title.get();
        let body = body.get();
        spawn_local(async move {
            let outcome = match editing {
                Some(mut article) => {
                    article.title = title;
                    article.body = body;
                    api::update_article(&article)
                        .await
                        .map(|updated| (updated, "Article updated successfully"))
                }
                None => {
                    let params = ArticleParams {
                        user_id: DEFAULT_USER_ID,
                        title,
                        body,
                    };
                    api::create_article(&params)
                        .await
                        .map(|created| (created, "Article added successfully"))
                }
            };

            // The form may already be gone if it was dismissed mid-flight.
            let _ = set_submitting.try_set(false);

            match outcome {
                Ok((article, message)) => {
                    if is_update {
                        store.write().apply_update(article);
                    } else {
                        store.write().apply_create(article);
                    }
                    notify(message);
                    set_target.set(None);
                }
                Err(err) => notify(&err),
            }
        });
    };

    view! {
        <div class="modal-overlay" />
        <div class="modal">
            <form on:submit=on_submit>
                <div class="modal-header">
                    <h4>{if is_update { "Update Article" } else { "Create Article" }}</h4>
                    <span class="modal-close" on:click=move |_| set_target.set(None)>"x"</span>
                </div>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    rows="5"
                    placeholder="Body"
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                ></textarea>
                <button
                    type="submit"
                    class="primary-btn"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
