//! Interpreter error types.
//!
//! Ambiguity and absence are ordinary values in this crate (`Intent::Unknown`,
//! unset entity fields, a non-empty `missing` list). [`NluError`] is reserved
//! for programmer-level contract violations.

use uuid::Uuid;

/// Unified error type for the command interpreter.
#[derive(Debug, thiserror::Error)]
pub enum NluError {
    /// The supplied pocket roster contains two entries with the same id,
    /// which would make alias resolution undefined.
    #[error("duplicate pocket id: {id}")]
    DuplicatePocketId { id: Uuid },

    /// A caller-supplied lexicon cannot be compiled into matching machinery.
    #[error("invalid lexicon: {reason}")]
    InvalidLexicon { reason: String },

    /// A marker word produced an uncompilable structural pattern.
    #[error("invalid marker pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NluError>;
