//! NoteRepository: the in-memory note collection and its on-disk mirror.

use crate::domain::{Note, NoteId};
use crate::infra::{
    FileStore, FsError, LocalFs, NOTES_SUBDIR, parse_content, parse_record, serialize_content,
    serialize_index, storage_location,
};
use chrono::{Local, NaiveDate};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default name of the index file inside the base directory.
pub const DEFAULT_INDEX_FILE: &str = "notes_metadata.dat";

/// Default upper bound on the number of live notes.
pub const DEFAULT_MAX_NOTES: usize = 1000;

// ===========================================
// Errors
// ===========================================

/// Errors returned by repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A live note already has this exact title.
    #[error("a note titled '{title}' already exists")]
    DuplicateTitle { title: String },

    /// The repository already holds its configured maximum of notes.
    #[error("note limit of {max} reached")]
    CapacityExceeded { max: usize },

    /// Every id has been handed out.
    #[error("no note ids left")]
    IdsExhausted,

    /// No live note has this id.
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    /// The content file of a new note could not be written. Nothing changed.
    #[error("failed to write content of note {id}: {source}")]
    ContentWrite {
        id: NoteId,
        #[source]
        source: FsError,
    },

    /// The index file could not be rewritten. Memory and disk now disagree.
    #[error("failed to write index {path}: {source}")]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// An existing index file could not be read.
    #[error("failed to read index {path}: {source}")]
    IndexRead {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The content directory could not be created.
    #[error("failed to prepare notes directory {path}: {source}")]
    Layout {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

impl StoreError {
    /// Returns true for expected rejections the caller can simply report.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateTitle { .. }
                | StoreError::CapacityExceeded { .. }
                | StoreError::IdsExhausted
                | StoreError::NotFound { .. }
        )
    }

    /// Returns true when the in-memory state has changed but the index on
    /// disk no longer matches it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::IndexWrite { .. })
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// Configuration and reports
// ===========================================

/// Where and how a repository stores its notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Directory holding the index file and the content subdirectory.
    pub base_dir: PathBuf,
    /// Index file name, relative to `base_dir`.
    pub index_file: PathBuf,
    /// Maximum number of live notes; `None` for no limit.
    pub max_notes: Option<usize>,
}

impl RepositoryConfig {
    /// Creates a config rooted at `base_dir` with default file name and limit.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            max_notes: Some(DEFAULT_MAX_NOTES),
        }
    }

    /// Sets the index file name.
    pub fn index_file(mut self, name: impl Into<PathBuf>) -> Self {
        self.index_file = name.into();
        self
    }

    /// Sets the note limit.
    pub fn max_notes(mut self, max: Option<usize>) -> Self {
        self.max_notes = max;
        self
    }

    /// Full path of the index file.
    pub fn index_path(&self) -> PathBuf {
        self.base_dir.join(&self.index_file)
    }

    /// Full path of the content subdirectory.
    pub fn notes_dir(&self) -> PathBuf {
        self.base_dir.join(NOTES_SUBDIR)
    }

    /// Resolves a stored location against the base directory.
    pub fn resolve(&self, location: &Path) -> PathBuf {
        self.base_dir.join(location)
    }
}

/// What [`NoteRepository::load`] found on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Notes restored into memory.
    pub loaded: usize,
    /// Index lines ignored because they could not be used.
    pub skipped_records: usize,
    /// Notes whose content file was missing or unreadable.
    pub missing_content: usize,
}

/// Outcome of a successful [`NoteRepository::delete`].
#[derive(Debug)]
pub struct Deleted {
    /// The note that was removed.
    pub note: Note,
    /// Set when the content file could not be removed and was left behind.
    pub artifact_error: Option<FsError>,
}

// ===========================================
// Repository
// ===========================================

/// Owns the live notes and keeps the index and content files in step.
///
/// Notes are kept in insertion order. Every mutation rewrites the whole index
/// file. Ids increase strictly and are never handed out twice, even after a
/// delete or a reload.
///
/// # Examples
///
/// ```no_run
/// use notekeeper::store::{NoteRepository, RepositoryConfig};
///
/// let mut repo = NoteRepository::open(RepositoryConfig::new("/tmp/notes"))?;
/// repo.load()?;
/// let note = repo.create("Shopping", "Personal", "Buy milk")?;
/// assert!(repo.exists(note.id()));
/// # Ok::<(), notekeeper::store::StoreError>(())
/// ```
#[derive(Debug)]
pub struct NoteRepository<S: FileStore = LocalFs> {
    config: RepositoryConfig,
    store: S,
    notes: Vec<Note>,
    positions: HashMap<NoteId, usize>,
    titles: HashSet<String>,
    next_id: NoteId,
}

impl NoteRepository<LocalFs> {
    /// Opens a repository on the local filesystem.
    ///
    /// Creates the content directory if needed. The repository starts empty;
    /// call [`load`](Self::load) to read existing notes.
    pub fn open(config: RepositoryConfig) -> StoreResult<Self> {
        Self::with_store(config, LocalFs)
    }
}

impl<S: FileStore> NoteRepository<S> {
    /// Opens a repository backed by the given file store.
    pub fn with_store(config: RepositoryConfig, store: S) -> StoreResult<Self> {
        let notes_dir = config.notes_dir();
        store
            .create_dir_all(&notes_dir)
            .map_err(|source| StoreError::Layout {
                path: notes_dir.clone(),
                source,
            })?;

        Ok(Self {
            config,
            store,
            notes: Vec::new(),
            positions: HashMap::new(),
            titles: HashSet::new(),
            next_id: NoteId::FIRST,
        })
    }

    /// Returns the repository configuration.
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Returns the file store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the id the next created note will receive.
    ///
    /// At `u64::MAX` ids are exhausted and `create` is rejected.
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    // ===========================================
    // Mutations
    // ===========================================

    /// Creates a note dated today.
    ///
    /// See [`create_dated`](Self::create_dated).
    pub fn create(&mut self, title: &str, category: &str, content: &str) -> StoreResult<Note> {
        self.create_dated(title, category, content, Local::now().date_naive())
    }

    /// Creates a note with an explicit creation date.
    ///
    /// The content file is written first. If that fails nothing is added, but
    /// the id is still consumed. After the note is added the index is
    /// rewritten; a failure there is returned as [`StoreError::IndexWrite`]
    /// and the note stays in memory.
    ///
    /// # Errors
    ///
    /// - `DuplicateTitle` if a live note has the same title
    /// - `CapacityExceeded` if the note limit is reached
    /// - `IdsExhausted` if the next id would have no successor
    /// - `ContentWrite` if the content file cannot be written
    /// - `IndexWrite` if the index cannot be rewritten
    pub fn create_dated(
        &mut self,
        title: &str,
        category: &str,
        content: &str,
        created: NaiveDate,
    ) -> StoreResult<Note> {
        if self.titles.contains(title) {
            return Err(StoreError::DuplicateTitle {
                title: title.to_string(),
            });
        }
        if let Some(max) = self.config.max_notes
            && self.notes.len() >= max
        {
            return Err(StoreError::CapacityExceeded { max });
        }

        let id = self.next_id;
        self.next_id = id.next().ok_or(StoreError::IdsExhausted)?;

        let location = storage_location(id, title);
        let note = Note::new(id, title, category, content, created, location);

        let path = self.config.resolve(note.storage_location());
        self.store
            .write(&path, &serialize_content(&note))
            .map_err(|source| StoreError::ContentWrite { id, source })?;

        self.insert(note.clone());
        info!(id = %id, title, "created note");

        self.persist_index()?;
        Ok(note)
    }

    /// Deletes a note by id.
    ///
    /// A content file that cannot be removed is logged and reported in
    /// [`Deleted::artifact_error`]; the note is removed regardless.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no live note has this id
    /// - `IndexWrite` if the index cannot be rewritten
    pub fn delete(&mut self, id: NoteId) -> StoreResult<Deleted> {
        let position = *self
            .positions
            .get(&id)
            .ok_or(StoreError::NotFound { id })?;

        let path = self.config.resolve(self.notes[position].storage_location());
        let artifact_error = match self.store.remove(&path) {
            Ok(()) => None,
            Err(e) => {
                warn!(id = %id, path = %path.display(), error = %e, "could not remove note file");
                Some(e)
            }
        };

        let note = self.notes.remove(position);
        self.titles.remove(note.title());
        self.reindex();
        info!(id = %id, title = note.title(), "deleted note");

        self.persist_index()?;
        Ok(Deleted {
            note,
            artifact_error,
        })
    }

    // ===========================================
    // Queries
    // ===========================================

    /// Returns all live notes, oldest first.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.positions.get(&id).map(|&i| &self.notes[i])
    }

    /// Alias of [`get`](Self::get).
    pub fn find_by_id(&self, id: NoteId) -> Option<&Note> {
        self.get(id)
    }

    /// Returns the notes whose category equals `category` exactly, in order.
    pub fn find_by_category(&self, category: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.category() == category)
            .collect()
    }

    /// Returns true if a live note has this id.
    pub fn exists(&self, id: NoteId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of live notes.
    pub fn count(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if there are no live notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    // ===========================================
    // Persistence
    // ===========================================

    /// Replaces the in-memory state with the notes on disk.
    ///
    /// A missing index file means a first run and leaves the repository
    /// empty. Unusable index lines are skipped. A note whose content file
    /// cannot be read is loaded with empty content. The next id is raised
    /// above every id seen and never lowered.
    ///
    /// # Errors
    ///
    /// Returns `IndexRead` if the index exists but cannot be read.
    pub fn load(&mut self) -> StoreResult<LoadReport> {
        self.clear();
        let mut report = LoadReport::default();

        let index_path = self.config.index_path();
        let text = match self.store.read_to_string(&index_path) {
            Ok(text) => text,
            Err(e) if e.is_not_found() => {
                debug!(path = %index_path.display(), "no index file, starting empty");
                return Ok(report);
            }
            Err(source) => {
                return Err(StoreError::IndexRead {
                    path: index_path,
                    source,
                });
            }
        };

        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = match parse_record(line) {
                Ok(record) => record,
                Err(e) => {
                    warn!(line = number + 1, error = %e, "skipping malformed index record");
                    report.skipped_records += 1;
                    continue;
                }
            };

            let Some(after) = record.id.next() else {
                warn!(line = number + 1, id = %record.id, "skipping record with largest possible id");
                report.skipped_records += 1;
                continue;
            };
            if after > self.next_id {
                self.next_id = after;
            }

            if self.positions.contains_key(&record.id) || self.titles.contains(&record.title) {
                warn!(line = number + 1, id = %record.id, "skipping duplicate index record");
                report.skipped_records += 1;
                continue;
            }

            let path = self.config.resolve(&record.storage_location);
            let content = match self.store.read_to_string(&path) {
                Ok(text) => parse_content(&text),
                Err(e) => {
                    warn!(id = %record.id, error = %e, "note file unreadable, loading empty content");
                    report.missing_content += 1;
                    String::new()
                }
            };

            self.insert(Note::new(
                record.id,
                record.title,
                record.category,
                content,
                record.created,
                record.storage_location,
            ));
            report.loaded += 1;
        }

        debug!(
            loaded = report.loaded,
            skipped = report.skipped_records,
            missing_content = report.missing_content,
            "loaded index"
        );
        Ok(report)
    }

    /// Rewrites the whole index file from the in-memory notes.
    ///
    /// # Errors
    ///
    /// Returns `IndexWrite` if the file cannot be written.
    pub fn persist_index(&self) -> StoreResult<()> {
        let path = self.config.index_path();
        self.store
            .write(&path, &serialize_index(&self.notes))
            .map_err(|source| StoreError::IndexWrite { path, source })
    }

    // ===========================================
    // Internals
    // ===========================================

    fn insert(&mut self, note: Note) {
        self.positions.insert(note.id(), self.notes.len());
        self.titles.insert(note.title().to_string());
        self.notes.push(note);
    }

    fn reindex(&mut self) {
        self.positions = self
            .notes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id(), i))
            .collect();
    }

    fn clear(&mut self) {
        self.notes.clear();
        self.positions.clear();
        self.titles.clear();
    }
}
