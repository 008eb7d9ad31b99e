//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

/// Builder for creating test notes with sensible defaults.
#[derive(Debug, Clone)]
pub struct TestNote {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl TestNote {
    /// Creates a new test note with the given title.
    ///
    /// Category defaults to `General` and content to a short sentence.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: "General".to_string(),
            content: "Test content.".to_string(),
        }
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
