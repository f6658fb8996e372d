//! Frontend Models
//!
//! Data structures matching the remote article store.

use serde::{Deserialize, Serialize};

/// Owner id assigned to every locally created article.
pub const DEFAULT_USER_ID: u32 = 1;

/// One remote article record (matches the JSONPlaceholder `/posts` shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

/// Create-request body; the server assigns the id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleParams {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

/// Which article field a search applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Id,
    UserId,
    Title,
}

impl SearchCategory {
    /// Parse a category from the search dropdown's option value.
    /// The empty placeholder option (and anything unknown) yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "userId" => Some(Self::UserId),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Lifecycle of the one-shot list load at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Fetching,
    Loaded,
    Failed,
}
