//! Entity extraction from normalized command text.
//!
//! Extraction is anchored on three landmarks:
//!
//! - the amount span, found by the `dompet-text` scanner,
//! - the first standalone note marker, which splits the sentence into a
//!   command region and a trailing purpose clause,
//! - for transfers, the `dari ... ke ...` structural pattern, captured by a
//!   compiled regex with named groups.
//!
//! Pocket references are resolved against the per-call [`AliasIndex`]; an
//! unresolvable reference simply leaves its field unset.

use regex::Regex;

use dompet_text::{AmountMatch, find_amount, normalize};

use crate::alias::AliasIndex;
use crate::command::{Entities, Intent};
use crate::error::{NluError, Result};
use crate::lexicon::Lexicon;

/// Extracts amount, pocket reference(s), and note from normalized text.
///
/// Compiled once per parser from an immutable lexicon.
#[derive(Debug)]
pub struct EntityExtractor {
    /// `dari <from> ke <to>` pattern; `None` when the lexicon defines no
    /// from/to markers, in which case transfers can never carry pockets.
    route_re: Option<Regex>,
    /// First-note-marker pattern; `None` when the lexicon has no note markers.
    note_re: Option<Regex>,
}

impl EntityExtractor {
    /// Compile the marker vocabulary into extraction patterns.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let route_re = match (
            marker_alternation(&lexicon.from_markers),
            marker_alternation(&lexicon.to_markers),
        ) {
            (Some(from), Some(to)) => Some(compile(&format!(
                r"(?:^|\s)(?:{from})\s+(?P<from>.+?)\s+(?:{to})(?:\s+(?P<to>.+))?$"
            ))?),
            _ => None,
        };

        let note_re = match marker_alternation(&lexicon.note_markers) {
            Some(note) => Some(compile(&format!(
                r"(?:^|\s)(?:{note})(?:\s+(?P<note>.+))?$"
            ))?),
            None => None,
        };

        Ok(Self { route_re, note_re })
    }

    /// Extract the entities relevant to `intent` from normalized text.
    ///
    /// `Unknown` populates nothing; other intents fill only their own
    /// fields. Absent values stay `None`, they are never errors.
    #[must_use]
    pub fn extract(&self, intent: Intent, text: &str, index: &AliasIndex) -> Entities {
        let mut entities = Entities::default();
        if intent == Intent::Unknown {
            return entities;
        }

        let (region, note) = self.split_note(text);
        entities.note = note.map(str::to_string);

        let amount = find_amount(text);
        entities.amount = amount.map(|m| m.value);

        match intent {
            Intent::IncomeToPocket | Intent::ExpenseFromPocket => {
                let search = without_amount(region, amount);
                entities.pocket = index.find_longest(&search).map(|p| p.canonical_name.clone());
            }
            Intent::TransferBetweenPockets => {
                if let Some(re) = &self.route_re
                    && let Some(caps) = re.captures(region)
                {
                    entities.pocket_from = caps
                        .name("from")
                        .and_then(|m| resolve_span(index, m.as_str()));
                    entities.pocket_to = caps
                        .name("to")
                        .and_then(|m| resolve_span(index, m.as_str()));
                }
            }
            // Ruled out by the early return above.
            Intent::Unknown => {}
        }

        tracing::debug!(
            amount = ?entities.amount,
            pocket = ?entities.pocket,
            pocket_from = ?entities.pocket_from,
            pocket_to = ?entities.pocket_to,
            note = ?entities.note,
            "entities extracted"
        );
        entities
    }

    /// Split normalized text at the first standalone note marker.
    ///
    /// Returns the command region (text before the marker, trailing space
    /// trimmed) and the trimmed note clause, absent when no marker exists or
    /// the clause is empty.
    fn split_note<'a>(&self, text: &'a str) -> (&'a str, Option<&'a str>) {
        let Some(re) = &self.note_re else {
            return (text, None);
        };
        let Some(caps) = re.captures(text) else {
            return (text, None);
        };
        let Some(whole) = caps.get(0) else {
            return (text, None);
        };

        let region = text[..whole.start()].trim_end();
        let note = caps
            .name("note")
            .map(|m| m.as_str().trim())
            .filter(|n| !n.is_empty());
        (region, note)
    }
}

/// Resolve a candidate span: exact whole-span lookup first, then the longest
/// alias contained in the span.
fn resolve_span(index: &AliasIndex, span: &str) -> Option<String> {
    index
        .resolve(span)
        .or_else(|| index.find_longest(&normalize(span)))
        .map(|p| p.canonical_name.clone())
}

/// Remove the amount span from the command region before pocket search, so
/// digits never collide with alias windows.
fn without_amount(region: &str, amount: Option<AmountMatch>) -> String {
    match amount {
        Some(m) if m.end <= region.len() => {
            format!("{} {}", &region[..m.start], &region[m.end..])
        }
        _ => region.to_string(),
    }
}

/// Escaped, normalized alternation of marker words; `None` when empty.
fn marker_alternation(words: &[String]) -> Option<String> {
    let alts: Vec<String> = words
        .iter()
        .map(|w| normalize(w))
        .filter(|w| !w.is_empty())
        .map(|w| regex::escape(&w))
        .collect();
    if alts.is_empty() { None } else { Some(alts.join("|")) }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| NluError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
