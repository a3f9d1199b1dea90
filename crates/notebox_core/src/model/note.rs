//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record persisted by the repository.
//! - Provide the text validation rule enforced on every write path.
//!
//! # Invariants
//! - `id` is storage-assigned, unique, and never reused for another note.
//! - `text` holds at most `NOTE_TEXT_MAX_CHARS` characters.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by storage on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Upper bound on note text length, counted in characters.
pub const NOTE_TEXT_MAX_CHARS: usize = 100;

/// Canonical persisted note record.
///
/// Serializes as `{"id": <int>, "text": <string>}`, the wire shape used
/// by the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Storage-assigned id, immutable after creation.
    pub id: NoteId,
    /// Note body, replaceable by update/patch operations.
    pub text: String,
}

/// Validation failure for note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Text exceeds `NOTE_TEXT_MAX_CHARS` characters.
    TextTooLong { chars: usize },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextTooLong { chars } => write!(
                f,
                "note text is {chars} characters long; maximum is {NOTE_TEXT_MAX_CHARS}"
            ),
        }
    }
}

impl Error for NoteValidationError {}

/// Checks note text against the model contract.
///
/// Counted in characters rather than bytes so multi-byte input is not
/// rejected early.
pub fn validate_text(text: &str) -> Result<(), NoteValidationError> {
    let chars = text.chars().count();
    if chars > NOTE_TEXT_MAX_CHARS {
        return Err(NoteValidationError::TextTooLong { chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_text, Note, NoteValidationError, NOTE_TEXT_MAX_CHARS};

    #[test]
    fn validate_text_accepts_boundary_length() {
        let text = "x".repeat(NOTE_TEXT_MAX_CHARS);
        assert!(validate_text(&text).is_ok());
    }

    #[test]
    fn validate_text_rejects_over_limit() {
        let text = "x".repeat(NOTE_TEXT_MAX_CHARS + 1);
        assert_eq!(
            validate_text(&text),
            Err(NoteValidationError::TextTooLong {
                chars: NOTE_TEXT_MAX_CHARS + 1
            })
        );
    }

    #[test]
    fn validate_text_counts_characters_not_bytes() {
        // 100 two-byte characters must pass.
        let text = "é".repeat(NOTE_TEXT_MAX_CHARS);
        assert!(validate_text(&text).is_ok());
    }

    #[test]
    fn note_serializes_to_id_text_object() {
        let note = Note {
            id: 7,
            text: "buy milk".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "text": "buy milk"}));
    }
}
