//! List and find command handlers.

use anyhow::Result;
use std::io::{self, Write};

use super::{open_repository, write_table};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{FindArgs, ListArgs};
use crate::domain::Note;
use crate::store::RepositoryConfig;

pub fn handle_list(args: &ListArgs, config: &RepositoryConfig) -> Result<()> {
    let repo = open_repository(config)?;
    let notes: Vec<&Note> = repo.list().iter().collect();
    write_listing(&mut io::stdout().lock(), &notes, args.format, config)
}

pub fn handle_find(args: &FindArgs, config: &RepositoryConfig) -> Result<()> {
    let repo = open_repository(config)?;
    let notes = repo.find_by_category(&args.category);
    write_listing(&mut io::stdout().lock(), &notes, args.format, config)
}

/// Renders a set of notes in the requested format.
pub(crate) fn write_listing(
    out: &mut impl Write,
    notes: &[&Note],
    format: OutputFormat,
    config: &RepositoryConfig,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "No notes found.")?;
            } else {
                write_table(out, notes.iter().copied())?;
                writeln!(out)?;
                writeln!(out, "{} note(s)", notes.len())?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(|n| NoteListing::from(*n)).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Paths => {
            for note in notes {
                writeln!(out, "{}", config.resolve(note.storage_location()).display())?;
            }
        }
    }
    Ok(())
}
