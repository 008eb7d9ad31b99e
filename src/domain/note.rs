//! Note struct: a single titled, categorized text note.

use crate::domain::NoteId;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Date format used wherever a note's creation date is written as text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single note held by the repository.
///
/// # Fields
/// - `id`: Repository-assigned identifier, unique and never reused
/// - `title`: Unique (exact match) among live notes
/// - `category`: Free-text grouping label
/// - `content`: Body text, stored in the note's content file
/// - `created`: Local calendar date of creation
/// - `storage_location`: Content file path relative to the notes base
///   directory, fixed at creation
///
/// # Examples
///
/// ```
/// use notekeeper::domain::{Note, NoteId};
/// use chrono::NaiveDate;
///
/// let note = Note::new(
///     NoteId::FIRST,
///     "Shopping",
///     "Personal",
///     "Buy milk",
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     "notes/1_Shopping.txt",
/// );
/// assert_eq!(note.title(), "Shopping");
/// assert_eq!(note.created_str(), "2024-03-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    category: String,
    content: String,
    created: NaiveDate,
    storage_location: PathBuf,
}

impl Note {
    /// Creates a Note from all of its fields.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
        created: NaiveDate,
        storage_location: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            content: content.into(),
            created,
            storage_location: storage_location.into(),
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the note's body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation date.
    pub fn created(&self) -> NaiveDate {
        self.created
    }

    /// Returns the creation date formatted as `YYYY-MM-DD`.
    pub fn created_str(&self) -> String {
        self.created.format(DATE_FORMAT).to_string()
    }

    /// Returns the content file location relative to the base directory.
    pub fn storage_location(&self) -> &Path {
        &self.storage_location
    }
}
