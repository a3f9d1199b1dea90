//! Use-case orchestration services.
//!
//! # Responsibility
//! - Compose repository operations into surface-facing use-cases.
//! - Map repository absence into semantic `NoteNotFound` errors.

pub mod note_service;
