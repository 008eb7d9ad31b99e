//! Command handlers for the CLI.

mod delete;
mod list;
mod new;
mod shell;
mod show;


use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::domain::{Note, NoteId};
use crate::infra::FileStore;
use crate::store::{NoteRepository, RepositoryConfig};

// Re-export public items
pub use delete::handle_delete;
pub use list::{handle_find, handle_list};
pub use new::{NewNote, handle_new, prepare_new_note};
pub use shell::{Shell, handle_shell};
pub use show::handle_show;

// Re-export for tests
#[cfg(test)]
pub(crate) use list::write_listing;
#[cfg(test)]
pub(crate) use show::write_show;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the repository described by `config` and loads it from disk.
pub(crate) fn open_repository(config: &RepositoryConfig) -> Result<NoteRepository> {
    let mut repo = NoteRepository::open(config.clone())
        .with_context(|| format!("failed to open notes in {}", config.base_dir.display()))?;
    let report = repo.load()?;
    debug!(
        loaded = report.loaded,
        skipped = report.skipped_records,
        missing_content = report.missing_content,
        "opened repository"
    );
    Ok(repo)
}

/// Parses a note id given on the command line.
pub(crate) fn parse_id(s: &str) -> Result<NoteId> {
    s.parse::<NoteId>()
        .with_context(|| format!("'{}' is not a note id", s))
}

/// Looks up a note or fails with a not-found error.
pub(crate) fn require_note<S: FileStore>(repo: &NoteRepository<S>, id: NoteId) -> Result<&Note> {
    repo.get(id)
        .with_context(|| format!("note not found: {}", id))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Writes notes as an id/title/category/date table.
pub(crate) fn write_table<'a>(
    out: &mut impl Write,
    notes: impl IntoIterator<Item = &'a Note>,
) -> io::Result<()> {
    writeln!(out, "{:<4}  {:<22}  {:<14}  {}", "ID", "Title", "Category", "Created")?;
    writeln!(
        out,
        "{:<4}  {:<22}  {:<14}  {}",
        "----", "----------------------", "--------------", "----------"
    )?;
    for note in notes {
        writeln!(
            out,
            "{:<4}  {:<22}  {:<14}  {}",
            note.id(),
            truncate_str(note.title(), 22),
            truncate_str(note.category(), 14),
            note.created_str()
        )?;
    }
    Ok(())
}

/// Writes a single note with its header fields and body.
pub(crate) fn write_note_detail(out: &mut impl Write, note: &Note) -> io::Result<()> {
    writeln!(out, "=== Note #{} ===", note.id())?;
    writeln!(out, "Title: {}", note.title())?;
    writeln!(out, "Category: {}", note.category())?;
    writeln!(out, "Date: {}", note.created_str())?;
    writeln!(out)?;
    writeln!(out, "{}", note.content())
}

/// Returns true for the answers that confirm a destructive action.
pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "д" | "Д" | "да")
}

/// Asks a yes/no question. End of input counts as no.
pub(crate) fn confirm(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<bool> {
    write!(out, "{} (y/n): ", message)?;
    out.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(is_affirmative(&answer))
}
