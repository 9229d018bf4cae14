//! Public data model for parsed commands.
//!
//! [`ParseResult`] is the sole output of the pipeline: the classified
//! [`Intent`], the extracted [`Entities`], and the [`Field`]s that are still
//! required before the execution layer can act. All types serialize with
//! serde for hand-off to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pocket (named sub-account) as supplied by the caller's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pocket {
    /// Stable identifier from the pocket repository.
    pub id: Uuid,
    /// Canonical display name, verbatim (e.g. `"Kebutuhan Pokok"`).
    pub name: String,
}

impl Pocket {
    /// Create a roster entry.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// The classified purpose of a command.
///
/// The set is closed and exhaustively matched at every consumption point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Money arriving into a single pocket.
    IncomeToPocket,
    /// Money leaving a single pocket.
    ExpenseFromPocket,
    /// Money moving between two pockets.
    TransferBetweenPockets,
    /// No trigger vocabulary matched; nothing is inferable.
    Unknown,
}

impl Intent {
    /// The wire name of this intent.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::IncomeToPocket => "income_to_pocket",
            Intent::ExpenseFromPocket => "expense_from_pocket",
            Intent::TransferBetweenPockets => "transfer_between_pockets",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required slot that may be reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Amount,
    Pocket,
    PocketFrom,
    PocketTo,
}

impl Field {
    /// The wire name of this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Pocket => "pocket",
            Field::PocketFrom => "pocket_from",
            Field::PocketTo => "pocket_to",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured values extracted from a command.
///
/// Only fields relevant to the classified intent are ever populated; the
/// rest stay `None`. Pocket references hold the canonical name exactly as it
/// appears in the caller's roster, not the user's spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Amount in the smallest currency unit.
    pub amount: Option<u64>,
    /// Target pocket for income, source pocket for expense.
    pub pocket: Option<String>,
    /// Source pocket of a transfer.
    pub pocket_from: Option<String>,
    /// Destination pocket of a transfer.
    pub pocket_to: Option<String>,
    /// Free-text purpose clause ("buat top up").
    pub note: Option<String>,
}

/// The result of parsing one command: produced fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// The classified intent.
    pub intent: Intent,
    /// Extracted entity values.
    pub entities: Entities,
    /// Required fields that are still absent, in reporting order.
    pub missing: Vec<Field>,
}

impl ParseResult {
    /// Whether the execution layer can act on this result without asking the
    /// user for anything further.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.intent != Intent::Unknown && self.missing.is_empty()
    }
}
