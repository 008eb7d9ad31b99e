//! Show command handler.

use anyhow::Result;
use std::io::{self, Write};

use super::{open_repository, parse_id, require_note, write_note_detail};
use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::Note;
use crate::store::RepositoryConfig;

pub fn handle_show(args: &ShowArgs, config: &RepositoryConfig) -> Result<()> {
    let id = parse_id(&args.id)?;
    let repo = open_repository(config)?;
    let note = require_note(&repo, id)?;
    write_show(&mut io::stdout().lock(), note, args.format, config)
}

/// Renders one note in the requested format.
pub(crate) fn write_show(
    out: &mut impl Write,
    note: &Note,
    format: OutputFormat,
    config: &RepositoryConfig,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_note_detail(out, note)?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(note))?)?;
        }
        OutputFormat::Paths => {
            writeln!(out, "{}", config.resolve(note.storage_location()).display())?;
        }
    }
    Ok(())
}
