//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `validate_text()` before SQL mutations.
//! - Mutations that match zero rows surface `RepoError::NotFound` instead of
//!   silently succeeding.
//! - `list_all` returns rows in insertion order (`id ASC`).

use crate::db::DbError;
use crate::model::note::{validate_text, Note, NoteId, NoteValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT id, text FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Stores new text under a fresh storage-assigned id and returns the
    /// persisted record.
    fn insert(&self, text: &str) -> RepoResult<Note>;
    /// Gets one note by id; absence is `Ok(None)` at this layer.
    fn get(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists every note in insertion order.
    fn list_all(&self) -> RepoResult<Vec<Note>>;
    /// Replaces the text of an existing note.
    fn update_text(&self, id: NoteId, text: &str) -> RepoResult<()>;
    /// Removes a note permanently.
    fn delete(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert(&self, text: &str) -> RepoResult<Note> {
        validate_text(text)?;

        self.conn
            .execute("INSERT INTO notes (text) VALUES (?1);", params![text])?;
        let id = self.conn.last_insert_rowid();

        Ok(Note {
            id,
            text: text.to_string(),
        })
    }

    fn get(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn update_text(&self, id: NoteId, text: &str) -> RepoResult<()> {
        validate_text(text)?;

        let changed = self.conn.execute(
            "UPDATE notes SET text = ?2 WHERE id = ?1;",
            params![id, text],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        text: row.get("text")?,
    })
}
