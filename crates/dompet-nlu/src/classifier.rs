//! Keyword-driven intent classification.
//!
//! Trigger words from the [`Lexicon`] are compiled into a single
//! Aho-Corasick automaton; hits are accepted only on whole-word boundaries
//! and then folded through a fixed priority order:
//!
//! 1. Transfer -- a transfer trigger plus *both* structural markers
//!    ("dari" and "ke"), checked first because transfer sentences often
//!    contain expense-like verbs too.
//! 2. Income -- any receipt trigger.
//! 3. Expense -- any outflow trigger.
//! 4. Unknown -- nothing matched.

use aho_corasick::AhoCorasick;

use dompet_text::normalize;

use crate::command::Intent;
use crate::error::{NluError, Result};
use crate::lexicon::Lexicon;

/// What a matched pattern contributes to classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerKind {
    Transfer,
    Income,
    Expense,
    FromMarker,
    ToMarker,
}

/// Which trigger kinds were seen in a sentence.
#[derive(Debug, Default, Clone, Copy)]
struct Hits {
    transfer: bool,
    income: bool,
    expense: bool,
    from: bool,
    to: bool,
}

/// Whole-word trigger matcher with the fixed intent priority.
///
/// Compiled once per parser from an immutable lexicon; classification itself
/// is `&self` and stateless.
#[derive(Debug)]
pub struct IntentClassifier {
    automaton: AhoCorasick,
    kinds: Vec<TriggerKind>,
}

impl IntentClassifier {
    /// Compile the trigger vocabulary into an automaton.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut kinds = Vec::new();

        add(&mut patterns, &mut kinds, &lexicon.transfer_triggers, TriggerKind::Transfer);
        add(&mut patterns, &mut kinds, &lexicon.income_triggers, TriggerKind::Income);
        add(&mut patterns, &mut kinds, &lexicon.expense_triggers, TriggerKind::Expense);
        add(&mut patterns, &mut kinds, &lexicon.from_markers, TriggerKind::FromMarker);
        add(&mut patterns, &mut kinds, &lexicon.to_markers, TriggerKind::ToMarker);

        if patterns.is_empty() {
            return Err(NluError::InvalidLexicon {
                reason: "lexicon contains no trigger words".to_string(),
            });
        }

        let automaton = AhoCorasick::new(&patterns).map_err(|e| NluError::InvalidLexicon {
            reason: e.to_string(),
        })?;

        Ok(Self { automaton, kinds })
    }

    /// Classify normalized text into an intent.
    pub fn classify(&self, text: &str) -> Intent {
        let hits = self.word_hits(text);

        let intent = if hits.transfer && hits.from && hits.to {
            Intent::TransferBetweenPockets
        } else if hits.income {
            Intent::IncomeToPocket
        } else if hits.expense {
            Intent::ExpenseFromPocket
        } else {
            Intent::Unknown
        };

        tracing::debug!(intent = %intent, "intent classified");
        intent
    }

    /// Collect whole-word trigger hits.
    ///
    /// The automaton reports every overlapping occurrence; a hit counts only
    /// when bounded by non-alphanumeric bytes on both sides, so "ke" never
    /// fires inside "kebutuhan".
    fn word_hits(&self, text: &str) -> Hits {
        let bytes = text.as_bytes();
        let mut hits = Hits::default();

        for mat in self.automaton.find_overlapping_iter(text) {
            let starts_word = mat.start() == 0 || !bytes[mat.start() - 1].is_ascii_alphanumeric();
            let ends_word = mat.end() == bytes.len() || !bytes[mat.end()].is_ascii_alphanumeric();
            if !starts_word || !ends_word {
                continue;
            }

            match self.kinds[mat.pattern().as_usize()] {
                TriggerKind::Transfer => hits.transfer = true,
                TriggerKind::Income => hits.income = true,
                TriggerKind::Expense => hits.expense = true,
                TriggerKind::FromMarker => hits.from = true,
                TriggerKind::ToMarker => hits.to = true,
            }
        }

        hits
    }
}

fn add(
    patterns: &mut Vec<String>,
    kinds: &mut Vec<TriggerKind>,
    words: &[String],
    kind: TriggerKind,
) {
    for word in words {
        let word = normalize(word);
        if !word.is_empty() {
            patterns.push(word);
            kinds.push(kind);
        }
    }
}
