//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::post::Post;

/// Create and edit form (`application/x-www-form-urlencoded`)
///
/// Missing fields arrive empty and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Post as handed to the templates
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            title: post.title.as_str().to_string(),
            body: post.body.as_str().to_string(),
            owner_id: post.owner_id.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
