//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the authoritative article list plus the filtered view shown on screen;
//! the filter and merge rules live here as plain methods so they stay
//! testable without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Article, FetchStatus, SearchCategory};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative full list, in fetch/creation order
    pub articles: Vec<Article>,
    /// Filtered view of `articles` used for display
    pub display: Vec<Article>,
    /// Lifecycle of the startup list load
    pub fetch_status: FetchStatus,
    /// Most recent applied search, re-run after mutations
    pub last_search: Option<(SearchCategory, String)>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both lists with a freshly fetched sequence, in fetch order.
    /// Any previous search is forgotten.
    pub fn load(&mut self, articles: Vec<Article>) {
        self.display = articles.clone();
        self.articles = articles;
        self.last_search = None;
        self.fetch_status = FetchStatus::Loaded;
    }

    /// Recompute the display list from the full list. An empty or
    /// unrecognized category, or an empty query, leaves the display as is.
    pub fn search(&mut self, category: &str, query: &str) {
        let Some(category) = SearchCategory::parse(category) else {
            return;
        };
        if query.is_empty() {
            return;
        }
        self.display = filter_articles(&self.articles, category, query);
        self.last_search = Some((category, query.to_string()));
    }

    /// Append a server-created article to the full list.
    pub fn apply_create(&mut self, article: Article) {
        self.articles.push(article);
        self.refresh_display();
    }

    /// Replace the article with a matching id. Unknown ids are a no-op:
    /// updates are keyed by id, so a list mutated since selection can
    /// never clobber an unrelated element.
    pub fn apply_update(&mut self, updated: Article) {
        if let Some(slot) = self.articles.iter_mut().find(|a| a.id == updated.id) {
            *slot = updated;
        }
        self.refresh_display();
    }

    /// Re-run the last search so mutations show up without a manual
    /// re-search; with no search active the display mirrors the full list.
    fn refresh_display(&mut self) {
        self.display = match &self.last_search {
            Some((category, query)) => filter_articles(&self.articles, *category, query),
            None => self.articles.clone(),
        };
    }
}

/// Filter a list by one category, preserving relative order.
///
/// Numeric categories match on exact equality; a query that does not parse
/// as a number matches nothing. Title search is a case-sensitive substring
/// match.
pub fn filter_articles(articles: &[Article], category: SearchCategory, query: &str) -> Vec<Article> {
    match category {
        SearchCategory::Id | SearchCategory::UserId => {
            let Ok(wanted) = query.trim().parse::<u32>() else {
                return Vec::new();
            };
            articles
                .iter()
                .filter(|a| match category {
                    SearchCategory::Id => a.id == wanted,
                    _ => a.user_id == wanted,
                })
                .cloned()
                .collect()
        }
        SearchCategory::Title => articles
            .iter()
            .filter(|a| a.title.contains(query))
            .cloned()
            .collect(),
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn make_article(id: u32, user_id: u32, title: &str) -> Article {
        Article {
            id,
            user_id,
            title: title.to_string(),
            body: format!("Body {}", id),
        }
    }

    fn loaded_state(articles: Vec<Article>) -> AppState {
        let mut state = AppState::new();
        state.load(articles);
        state
    }

    #[test]
    fn test_load_populates_both_lists() {
        let articles = vec![make_article(1, 1, "one"), make_article(2, 2, "two")];
        let state = loaded_state(articles.clone());

        assert_eq!(state.articles, articles);
        assert_eq!(state.display, articles);
        assert_eq!(state.fetch_status, FetchStatus::Loaded);
    }

    #[test]
    fn test_search_by_user_id_matches_exactly() {
        let mut state = loaded_state(vec![make_article(1, 1, "one"), make_article(2, 2, "two")]);

        state.search("userId", "2");

        assert_eq!(state.display, vec![make_article(2, 2, "two")]);
        // Full list untouched
        assert_eq!(state.articles.len(), 2);
    }

    #[test]
    fn test_search_by_id_matches_exactly() {
        let mut state = loaded_state(vec![
            make_article(1, 1, "one"),
            make_article(2, 1, "two"),
            make_article(3, 1, "three"),
        ]);

        state.search("id", "3");

        assert_eq!(state.display, vec![make_article(3, 1, "three")]);
    }

    #[test]
    fn test_search_by_title_preserves_order() {
        let mut state = loaded_state(vec![
            make_article(1, 1, "foobar"),
            make_article(2, 1, "baz"),
            make_article(3, 1, "foo"),
        ]);

        state.search("title", "foo");

        let titles: Vec<&str> = state.display.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["foobar", "foo"]);
    }

    #[test]
    fn test_title_search_is_case_sensitive() {
        let mut state = loaded_state(vec![make_article(1, 1, "Foo"), make_article(2, 1, "foo")]);

        state.search("title", "foo");

        assert_eq!(state.display, vec![make_article(2, 1, "foo")]);
    }

    #[test]
    fn test_empty_query_or_category_is_noop() {
        let mut state = loaded_state(vec![
            make_article(1, 1, "foobar"),
            make_article(2, 1, "baz"),
        ]);
        state.search("title", "foo");
        let before = state.display.clone();

        state.search("", "foo");
        assert_eq!(state.display, before);

        state.search("title", "");
        assert_eq!(state.display, before);
    }

    #[test]
    fn test_non_numeric_query_matches_nothing() {
        let mut state = loaded_state(vec![make_article(1, 1, "one")]);

        state.search("id", "abc");

        assert!(state.display.is_empty());
    }

    #[test]
    fn test_create_appends_to_full_list() {
        let mut state = loaded_state(vec![make_article(1, 1, "one"), make_article(2, 1, "two")]);
        let created = Article {
            id: 101,
            user_id: 1,
            title: "T".to_string(),
            body: "B".to_string(),
        };

        state.apply_create(created.clone());

        assert_eq!(state.articles.len(), 3);
        assert_eq!(state.articles.last(), Some(&created));
        // No search active, so the display mirrors the full list
        assert_eq!(state.display, state.articles);
    }

    #[test]
    fn test_create_refreshes_active_search() {
        let mut state = loaded_state(vec![make_article(1, 1, "foo"), make_article(2, 1, "bar")]);
        state.search("title", "foo");

        state.apply_create(make_article(101, 1, "food"));

        let titles: Vec<&str> = state.display.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["foo", "food"]);
        assert_eq!(state.articles.len(), 3);
    }

    #[test]
    fn test_update_replaces_matching_article_only() {
        let mut state = loaded_state(vec![
            make_article(1, 1, "one"),
            make_article(2, 1, "two"),
            make_article(3, 1, "three"),
        ]);
        let updated = Article {
            id: 2,
            user_id: 1,
            title: "changed".to_string(),
            body: "changed body".to_string(),
        };

        state.apply_update(updated.clone());

        assert_eq!(state.articles[0], make_article(1, 1, "one"));
        assert_eq!(state.articles[1], updated);
        assert_eq!(state.articles[2], make_article(3, 1, "three"));
    }

    #[test]
    fn test_update_with_unknown_id_is_noop() {
        let articles = vec![make_article(1, 1, "one"), make_article(2, 1, "two")];
        let mut state = loaded_state(articles.clone());

        state.apply_update(make_article(99, 1, "ghost"));

        assert_eq!(state.articles, articles);
        assert_eq!(state.display, articles);
    }

    #[test]
    fn test_load_then_empty_search_round_trips() {
        let articles: Vec<Article> = (1..=5).map(|i| make_article(i, 1, "title")).collect();
        let mut state = loaded_state(articles.clone());

        state.search("", "");

        assert_eq!(state.display, articles);
    }

    #[test]
    fn test_reload_resets_search() {
        let mut state = loaded_state(vec![make_article(1, 1, "foo"), make_article(2, 1, "bar")]);
        state.search("title", "foo");

        let fresh = vec![make_article(3, 1, "three")];
        state.load(fresh.clone());

        assert_eq!(state.display, fresh);
        assert!(state.last_search.is_none());
    }

    #[test]
    fn test_filter_articles_does_not_mutate_input() {
        let articles = vec![make_article(1, 1, "foo"), make_article(2, 2, "bar")];

        let filtered = filter_articles(&articles, SearchCategory::UserId, "2");

        assert_eq!(filtered, vec![make_article(2, 2, "bar")]);
        assert_eq!(articles.len(), 2);
    }
}
