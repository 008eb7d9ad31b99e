//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{NotesCommand, TestNote};
use notekeeper::domain::Note;
use notekeeper::store::{DEFAULT_INDEX_FILE, NoteRepository, RepositoryConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Notes live in `<temp>/notes-home`; the config lookup is pointed at
/// `<temp>/config`, which stays empty.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes-home");
        std::fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        Self {
            temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path of the index file.
    pub fn index_path(&self) -> PathBuf {
        self.notes_dir.join(DEFAULT_INDEX_FILE)
    }

    /// Returns the index file contents, or an empty string if absent.
    pub fn read_index(&self) -> String {
        std::fs::read_to_string(self.index_path()).unwrap_or_default()
    }

    /// Opens and loads the repository for this environment.
    pub fn repo(&self) -> NoteRepository {
        let mut repo = NoteRepository::open(RepositoryConfig::new(&self.notes_dir))
            .expect("Failed to open repository");
        repo.load().expect("Failed to load repository");
        repo
    }

    /// Adds a test note through the repository and returns it.
    pub fn add_note(&self, test_note: &TestNote) -> Note {
        self.repo()
            .create(&test_note.title, &test_note.category, &test_note.content)
            .expect("Failed to create test note")
    }

    /// Returns the absolute path of a note's content file.
    pub fn content_path(&self, note: &Note) -> PathBuf {
        self.notes_dir.join(note.storage_location())
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .config_home(&self.temp_dir.path().join("config"))
            .dir(&self.notes_dir)
    }

    /// Writes the user config file the CLI will pick up.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let dir = self.temp_dir.path().join("config").join("notekeeper");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config");
        path
    }

    /// Writes a file inside the notes directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }

    #[test]
    fn test_env_add_note_writes_files() {
        let env = TestEnv::new();
        let note = env.add_note(&TestNote::new("Harness Note").content("body"));

        assert!(env.content_path(&note).is_file());
        assert!(env.read_index().contains("|Harness Note|General|"));
    }

    #[test]
    fn test_env_add_multiple_notes_assigns_ids() {
        let env = TestEnv::new();
        let a = env.add_note(&TestNote::new("First"));
        let b = env.add_note(&TestNote::new("Second"));
        assert_eq!(a.id().get(), 1);
        assert_eq!(b.id().get(), 2);
        assert_eq!(env.repo().count(), 2);
    }
}
