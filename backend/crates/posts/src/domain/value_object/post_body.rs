//! Post Body Value Object

use kernel::error::app_error::AppError;
use serde::Serialize;

/// Post content, stored exactly as submitted
///
/// Only a body consisting entirely of whitespace is rejected; leading
/// indentation and trailing newlines are part of the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostBody(String);

impl PostBody {
    pub fn new(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::bad_request("Body is required")
                .with_action("Please write something"));
        }

        Ok(Self(raw))
    }

    pub(crate) fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
