//! UI Components
//!
//! Reusable Leptos components.

mod article_card;
mod article_form_modal;
mod search_bar;

pub use article_card::ArticleCard;
pub use article_form_modal::{ArticleFormModal, FormTarget};
pub use search_bar::SearchBar;
