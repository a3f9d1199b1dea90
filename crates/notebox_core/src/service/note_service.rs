//! Note use-case service.
//!
//! # Responsibility
//! - Provide note create/get/list/update/patch/delete use-cases.
//! - Guarantee read-back consistency after every write.
//!
//! # Invariants
//! - `update_note` uses full text replacement semantics.
//! - `patch_note` without a text value leaves the note unchanged but still
//!   requires it to exist.
//! - Absence of the target id is always `NoteNotFound` at this layer.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Submitted text violates the model contract.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note from submitted text.
    pub fn create_note(&self, text: &str) -> Result<Note, NoteServiceError> {
        Ok(self.repo.insert(text)?)
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.repo
            .get(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Lists every stored note in insertion order.
    pub fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.list_all()?)
    }

    /// Replaces the full text of an existing note.
    pub fn update_note(&self, id: NoteId, text: &str) -> Result<Note, NoteServiceError> {
        self.repo.update_text(id, text)?;
        self.repo
            .get(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    /// Replaces the text only when a new value is supplied.
    ///
    /// With `None`, the stored note is returned untouched; the target id
    /// must still exist.
    pub fn patch_note(&self, id: NoteId, text: Option<&str>) -> Result<Note, NoteServiceError> {
        match text {
            Some(text) => self.update_note(id, text),
            None => self.get_note(id),
        }
    }

    /// Removes one note permanently.
    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        Ok(self.repo.delete(id)?)
    }
}
