//! Content file locations derived from a note's id and title.

use crate::domain::NoteId;
use std::path::PathBuf;

/// Subdirectory of the base directory that holds note content files.
pub const NOTES_SUBDIR: &str = "notes";

/// Extension of note content files.
pub const CONTENT_EXTENSION: &str = "txt";

/// Characters that are replaced when a title becomes part of a file name.
const UNSAFE_CHARS: &[char] = &[' ', '/', '\\', ':', '<', '>', '|', '"', '*', '?'];

/// Replaces characters that are unsafe in file names with `_`.
///
/// Every other character, including non-ASCII letters, is kept as is.
///
/// # Examples
///
/// ```
/// use notekeeper::infra::sanitize_title;
///
/// assert_eq!(sanitize_title("a/b c"), "a_b_c");
/// assert_eq!(sanitize_title("Plans: Q3?"), "Plans__Q3_");
/// ```
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Computes the content file location for a new note.
///
/// Format: `notes/{id}_{sanitized title}.txt`, relative to the base
/// directory. The id prefix keeps locations unique even when two titles
/// sanitize to the same string. The location is computed once at creation
/// and stored in the index; it is never recomputed for an existing note.
///
/// # Examples
///
/// ```
/// use notekeeper::domain::NoteId;
/// use notekeeper::infra::storage_location;
/// use std::path::Path;
///
/// let id = NoteId::new(7).unwrap();
/// assert_eq!(storage_location(id, "a/b c"), Path::new("notes/7_a_b_c.txt"));
/// ```
pub fn storage_location(id: NoteId, title: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/{}_{}.{}",
        NOTES_SUBDIR,
        id,
        sanitize_title(title),
        CONTENT_EXTENSION
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(n: u64) -> NoteId {
        NoteId::new(n).unwrap()
    }

    #[test]
    fn sanitize_replaces_every_unsafe_character() {
        assert_eq!(sanitize_title(r#" /\:<>|"*?"#), "__________");
    }

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_title("My-Note_2.0"), "My-Note_2.0");
        assert_eq!(sanitize_title("Заметка"), "Заметка");
    }

    #[test]
    fn sanitize_does_not_collapse_or_trim() {
        assert_eq!(sanitize_title("  a  "), "__a__");
    }

    #[test]
    fn location_combines_dir_id_title_and_extension() {
        assert_eq!(
            storage_location(id(1), "Shopping"),
            PathBuf::from("notes/1_Shopping.txt")
        );
    }

    #[test]
    fn location_file_name_has_no_raw_separators() {
        let location = storage_location(id(7), "a/b c\\d");
        let text = location.to_string_lossy().into_owned();
        let file_name = text.strip_prefix("notes/").unwrap();
        assert!(!file_name.contains(' '));
        assert!(!file_name.contains('/'));
        assert!(!file_name.contains('\\'));
        assert_eq!(file_name, "7_a_b_c_d.txt");
    }

    #[test]
    fn location_is_unique_per_id_for_colliding_titles() {
        let a = storage_location(id(2), "a b");
        let b = storage_location(id(3), "a_b");
        assert_ne!(a, b);
    }

    #[test]
    fn location_is_deterministic() {
        assert_eq!(storage_location(id(9), "x?y"), storage_location(id(9), "x?y"));
    }
}
