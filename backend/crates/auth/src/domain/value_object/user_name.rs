//! User Name Value Object
//!
//! ユーザー名はログインに使う一意な識別子。ストアの一意制約はこの正規形に対して掛かる。
//!
//! ## 設計方針
//! - NFKC 正規化 → 前後の空白除去 → 検証 の順で処理
//! - 大文字小文字は区別する（照合は完全一致）
//!
//! ## 不変条件
//! - 長さ: 1〜64 文字（正規化後）
//! - 制御文字を含まない

use kernel::error::app_error::AppError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username is required")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains invalid control characters")]
    InvalidCharacter,
}

impl From<UserNameError> for AppError {
    fn from(err: UserNameError) -> Self {
        let action = match err {
            UserNameError::Empty => "Please enter a username",
            UserNameError::TooLong { .. } => "Please choose a shorter username",
            UserNameError::InvalidCharacter => "Please remove any special control characters",
        };
        AppError::bad_request(err.to_string()).with_action(action)
    }
}

/// Validated, normalized user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
