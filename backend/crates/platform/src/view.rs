//! View Payloads
//!
//! Handlers do not render HTML. They return the view name, page locals and
//! data as JSON, and whatever renders templates consumes that.

use serde::Serialize;

/// Description shown on every admin page
pub const SITE_DESCRIPTION: &str = "Simple blog administration panel.";

/// Page metadata
#[derive(Debug, Clone, Serialize)]
pub struct Locals {
    pub title: &'static str,
    pub description: &'static str,
}

/// A view name plus everything the template needs
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub view: &'static str,
    pub locals: Locals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Page<T> {
    pub fn new(view: &'static str, title: &'static str) -> Self {
        Self {
            view,
            locals: Locals {
                title,
                description: SITE_DESCRIPTION,
            },
            data: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }
}
