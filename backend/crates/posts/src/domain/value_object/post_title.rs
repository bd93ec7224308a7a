//! Post Title Value Object
//!
//! タイトルは必須。入力はそのまま保存し、空白だけのものは拒否する。

use kernel::error::app_error::AppError;
use serde::Serialize;
use std::fmt;

/// Maximum length for a title (in characters)
pub const POST_TITLE_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::bad_request("Title is required")
                .with_action("Please enter a title"));
        }

        let char_count = raw.chars().count();
        if char_count > POST_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters (got {})",
                POST_TITLE_MAX_LENGTH, char_count
            ))
            .with_action("Please shorten the title"));
        }

        Ok(Self(raw))
    }

    /// Restore a title already validated on the way in
    pub(crate) fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
