//! Note repository and its persistence protocol

mod repository;


pub use repository::{
    DEFAULT_INDEX_FILE, DEFAULT_MAX_NOTES, Deleted, LoadReport, NoteRepository, RepositoryConfig,
    StoreError, StoreResult,
};
