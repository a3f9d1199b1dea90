//! Domain model types shared across storage and surface layers.
//!
//! # Responsibility
//! - Define the canonical `Note` record and its validation rules.
//!
//! # Invariants
//! - Model types carry no SQL or HTTP knowledge.

pub mod note;
