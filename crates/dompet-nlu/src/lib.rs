//! Rule-based Indonesian command interpreter for the Dompet assistant.
//!
//! Free-form chat instructions like `"kirim 250k dari tabungan ke e money
//! buat top up"` come in; a structured [`ParseResult`] (intent, entities,
//! missing fields) comes out. The pipeline is deterministic, synchronous,
//! and stateless across calls:
//!
//! - **[`lexicon`]** -- trigger vocabulary and structural markers as data.
//! - **[`alias`]** -- fuzzy pocket-name resolution over the caller's roster.
//! - **[`classifier`]** -- priority-ordered keyword intent classification.
//! - **[`extractor`]** -- amount, pocket reference(s), and note extraction.
//! - **[`resolver`]** -- required-field bookkeeping per intent.
//! - **[`parser`]** -- the [`CommandParser`] façade tying it all together.
//!
//! Ambiguity is data, not failure: unknown commands, unmatched amounts, and
//! unresolved pockets all surface as ordinary values for the caller to act
//! on. Errors are reserved for contract violations such as duplicate pocket
//! ids in the roster.

pub mod alias;
pub mod classifier;
pub mod command;
pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod parser;
pub mod resolver;

pub use alias::{AliasIndex, PocketAlias, generate_aliases};
pub use command::{Entities, Field, Intent, ParseResult, Pocket};
pub use error::{NluError, Result};
pub use lexicon::Lexicon;
pub use parser::{CommandParser, parse_command};
pub use resolver::{missing_fields, required_fields};
