//! Sequential numeric note identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// A positive, repository-assigned note identifier.
///
/// Ids are handed out in strictly increasing order by the note repository and
/// are never reused, even after the note they named has been deleted.
///
/// # Examples
///
/// ```
/// use notekeeper::domain::NoteId;
///
/// let id: NoteId = "7".parse().unwrap();
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.next().map(|n| n.get()), Some(8));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct NoteId(NonZeroU64);

impl NoteId {
    /// The first id handed out by an empty repository.
    pub const FIRST: NoteId = NoteId(NonZeroU64::MIN);

    /// Creates a NoteId from a raw value, returning `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Returns the raw numeric value.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Returns the id immediately after this one, or `None` at `u64::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

impl From<NoteId> for u64 {
    fn from(id: NoteId) -> Self {
        id.get()
    }
}

impl TryFrom<u64> for NoteId {
    type Error = ParseNoteIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NoteId::new(value).ok_or_else(|| ParseNoteIdError {
            value: value.to_string(),
            reason: "id must be positive".to_string(),
        })
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s.trim().parse().map_err(|e: std::num::ParseIntError| {
            ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            }
        })?;
        NoteId::try_from(value).map_err(|mut e| {
            e.value = s.to_string();
            e
        })
    }
}
