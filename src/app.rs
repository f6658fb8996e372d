//! Article Board App
//!
//! Root component: performs the one-shot list load and hosts the form modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ArticleCard, ArticleFormModal, FormTarget, SearchBar};
use crate::models::FetchStatus;
use crate::notify::notify;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // None = closed, Some(Create) = blank form, Some(Edit) = seeded form
    let (form_target, set_form_target) = signal::<Option<FormTarget>>(None);

    // Single list load at startup; no automatic retry on failure.
    Effect::new(move |_| {
        store.fetch_status().set(FetchStatus::Fetching);
        spawn_local(async move {
            match api::fetch_articles().await {
                Ok(articles) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} articles", articles.len()).into(),
                    );
                    store.write().load(articles);
                }
                Err(err) => {
                    store.fetch_status().set(FetchStatus::Failed);
                    notify(&err);
                }
            }
        });
    });

    view! {
        <div class="main-container">
            <header class="header">
                <h1>"All Articles"</h1>
                <span>"Hello, User!"</span>
            </header>

            <div class="content">
                <SearchBar set_form_target=set_form_target />

                {move || match store.fetch_status().get() {
                    FetchStatus::Idle => view! { <div /> }.into_any(),
                    FetchStatus::Fetching => {
                        view! { <div class="list-status">"Loading..."</div> }.into_any()
                    }
                    FetchStatus::Failed => {
                        view! { <div class="list-status">"Failed to fetch articles"</div> }
                            .into_any()
                    }
                    FetchStatus::Loaded => view! {
                        <div class="cards-wrapper">
                            {store
                                .display()
                                .get()
                                .into_iter()
                                .map(|article| {
                                    view! {
                                        <ArticleCard
                                            article=article
                                            set_form_target=set_form_target
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any(),
                }}
            </div>

            {move || {
                form_target
                    .get()
                    .map(|target| {
                        view! { <ArticleFormModal target=target set_target=set_form_target /> }
                    })
            }}
        </div>
    }
}
