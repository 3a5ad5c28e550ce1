//! Ventureboard domain layer.
//!
//! Holds everything that needs no database or HTTP: shared id/timestamp
//! types, the domain error, status vocabularies, form-field helpers, the
//! keyword tree builder and flash message signing.

pub mod error;
pub mod form;
pub mod keyword_tree;
pub mod signing;
pub mod status;
pub mod types;
