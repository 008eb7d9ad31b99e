//! Index file format: one `|`-delimited metadata record per note.
//!
//! ```text
//! id|title|category|YYYY-MM-DD|storage location
//! ```
//!
//! Fields are not escaped. The storage location takes the rest of the line,
//! but a `|` inside a title or category shifts every later field.

use crate::domain::{DATE_FORMAT, Note, NoteId, ParseNoteIdError};
use chrono::NaiveDate;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Field separator in index records.
pub const DELIMITER: char = '|';

const FIELD_COUNT: usize = 5;

/// A note's metadata as stored in the index file. Content is not indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub id: NoteId,
    pub title: String,
    pub category: String,
    pub created: NaiveDate,
    pub storage_location: PathBuf,
}

/// Why an index line could not be turned into a record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected 5 fields, found {found}")]
    MissingFields { found: usize },

    #[error(transparent)]
    InvalidId(#[from] ParseNoteIdError),

    #[error("invalid date '{value}'")]
    InvalidDate { value: String },

    #[error("storage location '{value}' escapes the notes directory")]
    UnsafeLocation { value: String },
}

/// Formats one index line for a note, without the line terminator.
pub fn format_record(note: &Note) -> String {
    format!(
        "{id}{d}{title}{d}{category}{d}{date}{d}{location}",
        id = note.id(),
        title = note.title(),
        category = note.category(),
        date = note.created_str(),
        location = note.storage_location().display(),
        d = DELIMITER,
    )
}

/// Parses one index line.
///
/// # Errors
///
/// Returns `RecordError::MissingFields` if the line has fewer than five fields
/// or an empty storage location, `RecordError::InvalidId` for a non-numeric or
/// zero id, `RecordError::InvalidDate` for a date that is not `YYYY-MM-DD`,
/// and `RecordError::UnsafeLocation` for an absolute location or one with
/// `..` components.
pub fn parse_record(line: &str) -> Result<IndexRecord, RecordError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, DELIMITER).collect();
    if fields.len() < FIELD_COUNT || fields[4].is_empty() {
        return Err(RecordError::MissingFields {
            found: fields.len(),
        });
    }

    let id: NoteId = fields[0].parse()?;
    let created = NaiveDate::parse_from_str(fields[3], DATE_FORMAT).map_err(|_| {
        RecordError::InvalidDate {
            value: fields[3].to_string(),
        }
    })?;

    let location = Path::new(fields[4]);
    if !is_contained(location) {
        return Err(RecordError::UnsafeLocation {
            value: fields[4].to_string(),
        });
    }

    Ok(IndexRecord {
        id,
        title: fields[1].to_string(),
        category: fields[2].to_string(),
        created,
        storage_location: location.to_path_buf(),
    })
}

/// True if joining `location` onto a base directory stays inside it.
fn is_contained(location: &Path) -> bool {
    location
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Renders the whole index file, one line per note in the given order.
pub fn serialize_index<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    let mut out = String::new();
    for note in notes {
        out.push_str(&format_record(note));
        out.push('\n');
    }
    out
}
