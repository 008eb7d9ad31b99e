//! Delete command handler.

use anyhow::Result;
use std::io;

use super::{confirm, open_repository, parse_id, require_note};
use crate::cli::DeleteArgs;
use crate::store::RepositoryConfig;

pub fn handle_delete(args: &DeleteArgs, config: &RepositoryConfig) -> Result<()> {
    let id = parse_id(&args.id)?;
    let mut repo = open_repository(config)?;
    let title = require_note(&repo, id)?.title().to_string();

    if !args.yes {
        let message = format!("Delete note #{} '{}'?", id, title);
        if !confirm(&mut io::stdin().lock(), &mut io::stdout(), &message)? {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let deleted = repo.delete(id)?;
    if let Some(err) = &deleted.artifact_error {
        eprintln!("warning: note file was not removed: {}", err);
    }
    println!("Deleted: {} [{}]", deleted.note.title(), id);
    Ok(())
}
