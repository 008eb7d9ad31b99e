//! Interactive menu.

use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

use super::{confirm, open_repository, write_note_detail, write_table};
use crate::domain::{
    FieldError, NoteId, validate_category, validate_content, validate_menu_choice,
    validate_title,
};
use crate::infra::FileStore;
use crate::store::{NoteRepository, RepositoryConfig};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

const MENU: &str = "\
=== NOTES ===
1. Create a new note
2. Show all notes
3. Search by category
4. Open a note
5. Delete a note
6. Exit
";

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session over a repository.
///
/// Reads commands from `input` and writes prompts and results to `output`.
/// End of input ends the session as if "Exit" had been chosen. In
/// interactive mode the screen is cleared before each menu and the user is
/// asked to press Enter after each action.
pub struct Shell<'a, R, W, S: FileStore> {
    repo: &'a mut NoteRepository<S>,
    input: R,
    output: W,
    interactive: bool,
}

impl<'a, R: BufRead, W: Write, S: FileStore> Shell<'a, R, W, S> {
    pub fn new(repo: &'a mut NoteRepository<S>, input: R, output: W) -> Self {
        Self {
            repo,
            input,
            output,
            interactive: false,
        }
    }

    /// Enables screen clearing and the pause after each action.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns I/O errors on the console and fatal repository errors (a
    /// failed index write). Rejected operations are reported in the session
    /// and do not end it.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.interactive {
                write!(self.output, "{}", CLEAR_SCREEN)?;
            }
            writeln!(self.output, "{}", MENU)?;

            let Some(choice) = self.read_number("Select an option: ")? else {
                return Ok(());
            };
            if let Err(e) = validate_menu_choice(choice, 1, 6) {
                writeln!(self.output, "Error: {}", e)?;
                continue;
            }
            writeln!(self.output)?;

            let flow = match choice {
                1 => self.create_note()?,
                2 => self.show_all()?,
                3 => self.search_by_category()?,
                4 => self.open_note()?,
                5 => self.delete_note()?,
                _ => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Exit
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }

            if self.interactive {
                write!(self.output, "\nPress Enter to continue...")?;
                self.output.flush()?;
                if self.read_line()?.is_none() {
                    return Ok(());
                }
            }
        }
    }

    // ===========================================
    // Actions
    // ===========================================

    fn create_note(&mut self) -> Result<Flow> {
        writeln!(self.output, "=== NEW NOTE ===")?;

        let Some(title) = self.read_valid("Title: ", validate_title)? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.read_valid("Category: ", validate_category)? else {
            return Ok(Flow::Exit);
        };
        let Some(content) = self.read_valid("Text: ", validate_content)? else {
            return Ok(Flow::Exit);
        };

        match self.repo.create(&title, &category, &content) {
            Ok(note) => writeln!(self.output, "\nNote #{} created.", note.id())?,
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => writeln!(self.output, "\nCould not create note: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_all(&mut self) -> Result<Flow> {
        if self.repo.is_empty() {
            writeln!(self.output, "No notes found.")?;
        } else {
            writeln!(self.output, "=== ALL NOTES ===")?;
            write_table(&mut self.output, self.repo.list())?;
        }
        Ok(Flow::Continue)
    }

    fn search_by_category(&mut self) -> Result<Flow> {
        let Some(category) = self.prompt("Category to search: ")? else {
            return Ok(Flow::Exit);
        };

        let matches = self.repo.find_by_category(&category);
        if matches.is_empty() {
            writeln!(self.output, "No notes in category \"{}\".", category)?;
        } else {
            writeln!(self.output, "=== RESULTS: {} ===", category)?;
            write_table(&mut self.output, matches)?;
        }
        Ok(Flow::Continue)
    }

    fn open_note(&mut self) -> Result<Flow> {
        if self.repo.is_empty() {
            writeln!(self.output, "No notes to open.")?;
            return Ok(Flow::Continue);
        }
        let Some(raw) = self.read_number("Note ID: ")? else {
            return Ok(Flow::Exit);
        };

        match to_note_id(raw).and_then(|id| self.repo.get(id)) {
            Some(note) => write_note_detail(&mut self.output, note)?,
            None => writeln!(self.output, "Note #{} not found.", raw)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_note(&mut self) -> Result<Flow> {
        if self.repo.is_empty() {
            writeln!(self.output, "No notes to delete.")?;
            return Ok(Flow::Continue);
        }
        let Some(raw) = self.read_number("Note ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = to_note_id(raw).filter(|id| self.repo.exists(*id)) else {
            writeln!(self.output, "Note #{} not found.", raw)?;
            return Ok(Flow::Continue);
        };

        if !confirm(&mut self.input, &mut self.output, "Delete this note?")? {
            writeln!(self.output, "Deletion cancelled.")?;
            return Ok(Flow::Continue);
        }

        match self.repo.delete(id) {
            Ok(deleted) => {
                if let Some(err) = &deleted.artifact_error {
                    writeln!(self.output, "Warning: note file was not removed: {}", err)?;
                }
                writeln!(self.output, "Note deleted.")?;
            }
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => writeln!(self.output, "Could not delete note: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    // ===========================================
    // Input
    // ===========================================

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts until the input passes `validate`.
    fn read_valid(
        &mut self,
        message: &str,
        validate: fn(&str) -> Result<(), FieldError>,
    ) -> Result<Option<String>> {
        loop {
            let Some(value) = self.prompt(message)? else {
                return Ok(None);
            };
            match validate(&value) {
                Ok(()) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    /// Prompts until the input is an integer.
    fn read_number(&mut self, message: &str) -> Result<Option<i64>> {
        loop {
            let Some(value) = self.prompt(message)? else {
                return Ok(None);
            };
            match value.trim().parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Error: enter a number.")?,
            }
        }
    }
}

fn to_note_id(raw: i64) -> Option<NoteId> {
    u64::try_from(raw).ok().and_then(NoteId::new)
}

pub fn handle_shell(config: &RepositoryConfig) -> Result<()> {
    let mut repo = open_repository(config)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && io::stdout().is_terminal();
    debug!(interactive, "starting menu");

    Shell::new(&mut repo, stdin.lock(), io::stdout().lock())
        .interactive(interactive)
        .run()
}
