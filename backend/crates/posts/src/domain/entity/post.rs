//! Post Entity
//!
//! ## Lifecycle
//! `NonExistent -> Existing -> (Updated)* -> Deleted`
//!
//! `owner_id` is fixed at creation. `updated_at` strictly increases on every
//! revision, at the microsecond precision the store keeps.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::{post_body::PostBody, post_title::PostTitle};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub title: PostTitle,
    pub body: PostBody,
    /// Author; never reassigned
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `owner_id`
    pub fn new(owner_id: UserId, title: PostTitle, body: PostBody) -> Self {
        let now = now_micros();

        Self {
            post_id: PostId::new(),
            title,
            body,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and body and move `updated_at` forward
    pub fn revise(&mut self, title: PostTitle, body: PostBody) {
        self.title = title;
        self.body = body;
        self.touch();
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }

    fn touch(&mut self) {
        let now = now_micros();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}

/// Current time truncated to what PostgreSQL `timestamptz` stores
fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
