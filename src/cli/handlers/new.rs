//! New note command handler.

use anyhow::{Context, Result};
use std::io::{self, Read};

use super::open_repository;
use crate::cli::NewArgs;
use crate::domain::{validate_category, validate_content, validate_title};
use crate::store::RepositoryConfig;

/// Validated input for a new note (for testability).
#[derive(Debug, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// Validates the fields of a new note (pure function, no I/O).
///
/// A single trailing line break is dropped from the content, so text piped
/// in from `echo` does not carry it into the note.
///
/// # Errors
///
/// Returns an error if any field fails validation.
pub fn prepare_new_note(title: &str, category: &str, content: &str) -> Result<NewNote> {
    let content = content
        .strip_suffix('\n')
        .map(|c| c.strip_suffix('\r').unwrap_or(c))
        .unwrap_or(content);

    validate_title(title).with_context(|| format!("invalid title '{}'", title))?;
    validate_category(category).with_context(|| format!("invalid category '{}'", category))?;
    validate_content(content).context("invalid content")?;

    Ok(NewNote {
        title: title.to_string(),
        category: category.to_string(),
        content: content.to_string(),
    })
}

pub fn handle_new(args: &NewArgs, config: &RepositoryConfig) -> Result<()> {
    let content = match &args.content {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read note content from stdin")?;
            buf
        }
    };

    let input = prepare_new_note(&args.title, &args.category, &content)?;

    let mut repo = open_repository(config)?;
    let note = repo.create(&input.title, &input.category, &input.content)?;

    println!("Created: {} [{}]", note.title(), note.id());
    println!("  {}", config.resolve(note.storage_location()).display());
    Ok(())
}
