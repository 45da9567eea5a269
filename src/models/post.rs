use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Post entity representing a content item written by a user.
///
/// `id`, `created_at` and `updated_at` are assigned by the database and stay
/// `None` until the post has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i64>,
    pub content: String,
    pub title: String,
    pub user_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Create an unsaved post authored by `user_id`
    pub fn new(title: String, content: String, user_id: i64, tags: Vec<String>) -> Self {
        Post {
            id: None,
            content,
            title,
            user_id,
            created_at: None,
            updated_at: None,
            tags,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
