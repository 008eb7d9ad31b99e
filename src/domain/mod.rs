//! Core types: Note, NoteId, field validation

mod note;
mod note_id;
mod validation;

pub use note::{DATE_FORMAT, Note};
pub use note_id::{NoteId, ParseNoteIdError};
pub use validation::{
    Field, FieldError, MAX_CATEGORY_LEN, MAX_CONTENT_LEN, MAX_TITLE_LEN, validate_category,
    validate_content, validate_menu_choice, validate_title,
};
