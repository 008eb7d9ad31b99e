//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Content file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output. Content is left out.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub created: String,
    pub path: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().get(),
            title: note.title().to_string(),
            category: note.category().to_string(),
            created: note.created_str(),
            path: note.storage_location().to_string_lossy().into_owned(),
        }
    }
}
