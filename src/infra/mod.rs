//! File I/O, index and content file formats, storage paths

mod content;
mod fs;
mod index_file;
mod storage_path;

pub use content::{HEADER_LINES, parse_content, serialize_content};
pub use fs::{FileStore, FsError, LocalFs, read_text, write_atomic};
pub use index_file::{
    DELIMITER, IndexRecord, RecordError, format_record, parse_record, serialize_index,
};
pub use storage_path::{CONTENT_EXTENSION, NOTES_SUBDIR, sanitize_title, storage_location};
