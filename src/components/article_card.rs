//! Article Card Component

use leptos::prelude::*;

use crate::components::FormTarget;
use crate::models::Article;

/// One article rendered as a card with an Edit action.
#[component]
pub fn ArticleCard(
    article: Article,
    set_form_target: WriteSignal<Option<FormTarget>>,
) -> impl IntoView {
    let edit_target = article.clone();

    view! {
        <div class="card">
            <div class="card-header">
                <h4 class="card-title" title=article.title.clone()>{article.title.clone()}</h4>
                <span
                    class="card-action"
                    on:click=move |_| set_form_target.set(Some(FormTarget::Edit(edit_target.clone())))
                >
                    "Edit"
                </span>
            </div>
            <p>{article.body.clone()}</p>
        </div>
    }
}
