//! User Entity
//!
//! A registered administrator. Created once at registration and not modified
//! afterwards.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    avatar_path::AvatarPath, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-generated identifier, the sole claim in session tokens
    pub user_id: UserId,
    /// Unique login name
    pub user_name: UserName,
    /// Argon2id hash, never the plaintext
    pub password_hash: UserPassword,
    /// Stored upload path, or the default avatar
    pub avatar: AvatarPath,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, password_hash: UserPassword, avatar: AvatarPath) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            avatar,
            created_at: now,
            updated_at: now,
        }
    }
}
