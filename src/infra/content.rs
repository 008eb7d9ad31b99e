//! Content file format: a three-line header, a blank line, then the body.
//!
//! ```text
//! Title: Shopping
//! Category: Personal
//! Date: 2024-03-01
//!
//! Buy milk
//! ```

use crate::domain::Note;

/// Number of lines before the body: three header fields and the separator.
pub const HEADER_LINES: usize = 4;

/// Renders a note's content file.
///
/// The body is written verbatim, without a trailing newline of its own.
pub fn serialize_content(note: &Note) -> String {
    format!(
        "Title: {}\nCategory: {}\nDate: {}\n\n{}",
        note.title(),
        note.category(),
        note.created_str(),
        note.content()
    )
}

/// Extracts the body from a content file.
///
/// The header block is skipped by position, not parsed. Remaining lines are
/// rejoined with `\n`, so a trailing newline is dropped and `\r\n` endings
/// come back as `\n`. A file too short to hold the header yields an empty
/// body.
pub fn parse_content(text: &str) -> String {
    text.lines()
        .skip(HEADER_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}
