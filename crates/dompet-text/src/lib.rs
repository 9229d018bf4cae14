//! Text machinery for the Dompet command interpreter.
//!
//! This crate provides the two language-neutral building blocks of the
//! parsing pipeline:
//!
//! - **[`normalize`]** -- canonicalises raw chat text (lowercase, diacritic
//!   folding, punctuation stripping, whitespace collapsing) while preserving
//!   the numeric separators the amount grammar depends on.
//! - **[`amount`]** -- leftmost-match scanner for Indonesian money shorthand
//!   (`250k`, `20 ribu`, `1,25jt`, `3jt400`, ...).
//!
//! Everything here is a pure, total function: no I/O, no state, no errors.
//! Absence is reported as `None`, never as a failure.

pub mod amount;
pub mod normalize;

pub use amount::{AmountMatch, find_amount, parse_amount};
pub use normalize::normalize;
