//! Field validation for user input.
//!
//! These checks run in the CLI before anything reaches the repository. They
//! also keep the index file readable: titles and categories are stored in a
//! `|`-delimited line, so the delimiter and line breaks are refused here.

use thiserror::Error;

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 100;
/// Maximum category length, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;
/// Maximum content length, in characters.
pub const MAX_CONTENT_LEN: usize = 10_000;

/// The field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Category,
    Content,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Category => "category",
            Field::Content => "content",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A rejected input value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} must contain between 1 and {max} characters")]
    Length { field: Field, max: usize },

    #[error("{field} cannot consist only of whitespace")]
    Blank { field: Field },

    #[error("{field} cannot contain '|' or line breaks")]
    ReservedCharacter { field: Field },

    #[error("choose an item between {min} and {max}")]
    MenuChoice { min: i64, max: i64 },
}

fn check_label(value: &str, field: Field, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(FieldError::Length { field, max });
    }
    if value.trim().is_empty() {
        return Err(FieldError::Blank { field });
    }
    if value.contains(['|', '\n', '\r']) {
        return Err(FieldError::ReservedCharacter { field });
    }
    Ok(())
}

/// Validates a note title.
///
/// # Examples
///
/// ```
/// use notekeeper::domain::validate_title;
///
/// assert!(validate_title("Shopping").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<(), FieldError> {
    check_label(title, Field::Title, MAX_TITLE_LEN)
}

/// Validates a note category.
pub fn validate_category(category: &str) -> Result<(), FieldError> {
    check_label(category, Field::Category, MAX_CATEGORY_LEN)
}

/// Validates note content. Only the length is checked; whitespace and line
/// breaks are kept as typed.
pub fn validate_content(content: &str) -> Result<(), FieldError> {
    let len = content.chars().count();
    if len == 0 || len > MAX_CONTENT_LEN {
        return Err(FieldError::Length {
            field: Field::Content,
            max: MAX_CONTENT_LEN,
        });
    }
    Ok(())
}

/// Validates a numeric menu selection against an inclusive range.
pub fn validate_menu_choice(choice: i64, min: i64, max: i64) -> Result<(), FieldError> {
    if (min..=max).contains(&choice) {
        Ok(())
    } else {
        Err(FieldError::MenuChoice { min, max })
    }
}
