//! Fuzzy pocket-name resolution.
//!
//! Users rarely type a pocket's full name. Each roster entry is expanded
//! into a set of alias strings (full name, individual words, first-letter
//! abbreviation, informal prefixes) and candidates are resolved by exact
//! membership after normalization. The index is built fresh for every parse
//! call from the caller-supplied roster; nothing is cached across calls.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dompet_text::normalize;

use crate::command::Pocket;
use crate::error::{NluError, Result};

/// The alias strings a user may type to refer to one pocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocketAlias {
    /// The pocket's stable id.
    pub id: Uuid,
    /// Canonical name verbatim from the roster.
    pub canonical_name: String,
    /// Normalized alias strings, including the normalized full name.
    pub aliases: BTreeSet<String>,
}

/// Derive the alias set for a canonical pocket name.
///
/// The set always contains the fully normalized name itself (round-trip
/// identity), each word of length >= 3, the abbreviation built from the
/// first letter of every word, and the 3- and 4-character prefixes of words
/// of length >= 5 ("kebutuhan" -> "keb", "kebu").
#[must_use]
pub fn generate_aliases(canonical_name: &str) -> BTreeSet<String> {
    let full = normalize(canonical_name);
    let mut aliases = BTreeSet::new();
    if full.is_empty() {
        return aliases;
    }

    aliases.insert(full.clone());

    let words: Vec<&str> = full.split_whitespace().collect();
    for word in &words {
        let len = word.chars().count();
        if len >= 3 {
            aliases.insert((*word).to_string());
        }
        if len >= 5 {
            aliases.insert(word.chars().take(3).collect());
            aliases.insert(word.chars().take(4).collect());
        }
    }

    let abbreviation: String = words.iter().filter_map(|w| w.chars().next()).collect();
    aliases.insert(abbreviation);

    aliases
}

/// Per-call lookup table over every pocket's alias set.
#[derive(Debug, Clone)]
pub struct AliasIndex {
    /// Entries in roster order; order is the documented ambiguity tie-break.
    entries: Vec<PocketAlias>,
    /// Normalized canonical name per entry, aligned with `entries`.
    normalized: Vec<String>,
}

impl AliasIndex {
    /// Build the index from the caller's roster.
    ///
    /// Fails with [`NluError::DuplicatePocketId`] when two entries share an
    /// id, since resolution would be undefined.
    pub fn build(pockets: &[Pocket]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(pockets.len());
        let mut entries = Vec::with_capacity(pockets.len());
        let mut normalized = Vec::with_capacity(pockets.len());

        for pocket in pockets {
            if !seen.insert(pocket.id) {
                return Err(NluError::DuplicatePocketId { id: pocket.id });
            }
            normalized.push(normalize(&pocket.name));
            entries.push(PocketAlias {
                id: pocket.id,
                canonical_name: pocket.name.clone(),
                aliases: generate_aliases(&pocket.name),
            });
        }

        Ok(Self { entries, normalized })
    }

    /// Resolve a candidate phrase by exact alias membership.
    ///
    /// The candidate is normalized first, so lookup is case- and
    /// punctuation-insensitive. When the candidate matches aliases of more
    /// than one pocket, the pocket whose full normalized name equals the
    /// candidate wins; otherwise the earliest roster entry does.
    #[must_use]
    pub fn resolve(&self, candidate: &str) -> Option<&PocketAlias> {
        let needle = normalize(candidate);
        if needle.is_empty() {
            return None;
        }
        self.resolve_normalized(&needle)
    }

    fn resolve_normalized(&self, needle: &str) -> Option<&PocketAlias> {
        let mut first_hit = None;
        for (entry, name) in self.entries.iter().zip(&self.normalized) {
            if !entry.aliases.contains(needle) {
                continue;
            }
            if name == needle {
                return Some(entry);
            }
            if first_hit.is_none() {
                first_hit = Some(entry);
            }
        }
        first_hit
    }

    /// Find the longest alias match among all token windows of normalized
    /// text.
    ///
    /// Used for single-pocket extraction, where the pocket reference sits
    /// somewhere inside the rest of the sentence. Longer matched aliases win
    /// over shorter ones; equal lengths fall back to the earlier window and
    /// then the [`Self::resolve`] tie-break.
    #[must_use]
    pub fn find_longest(&self, text: &str) -> Option<&PocketAlias> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut best: Option<(usize, &PocketAlias)> = None;

        for start in 0..tokens.len() {
            for end in (start + 1)..=tokens.len() {
                let window = tokens[start..end].join(" ");
                if let Some(entry) = self.resolve_normalized(&window) {
                    let len = window.chars().count();
                    if best.is_none_or(|(b, _)| len > b) {
                        best = Some((len, entry));
                    }
                }
            }
        }

        best.map(|(_, entry)| entry)
    }

    /// Number of pockets in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Pocket> {
        names.iter().map(|n| Pocket::new(Uuid::now_v7(), *n)).collect()
    }

    #[test]
    fn full_name_round_trips() {
        for name in ["Tabungan", "e-money", "Kebutuhan Pokok", "Dana Darurat!"] {
            let aliases = generate_aliases(name);
            assert!(
                aliases.contains(&normalize(name)),
                "normalized {name:?} missing from its own alias set"
            );
        }
    }

    #[test]
    fn words_and_prefixes_are_aliases() {
        let aliases = generate_aliases("Kebutuhan Pokok");
        for expected in ["kebutuhan pokok", "kebutuhan", "pokok", "keb", "kebu", "pok", "poko", "kp"] {
            assert!(aliases.contains(expected), "missing alias {expected:?}");
        }
    }

    #[test]
    fn short_words_skip_word_and_prefix_rules() {
        let aliases = generate_aliases("e-money");
        assert!(aliases.contains("e money"));
        assert!(aliases.contains("money"));
        assert!(aliases.contains("em"));
        // "e" is shorter than 3 chars and never becomes a word alias.
        assert!(!aliases.contains("e"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let id = Uuid::now_v7();
        let pockets = vec![Pocket::new(id, "Tabungan"), Pocket::new(id, "Jajan")];
        let err = AliasIndex::build(&pockets).unwrap_err();
        assert!(matches!(err, NluError::DuplicatePocketId { id: dup } if dup == id));
    }

    #[test]
    fn resolve_is_case_and_punctuation_insensitive() {
        let index = AliasIndex::build(&roster(&["e-money"])).unwrap();
        assert!(index.resolve("E Money").is_some());
        assert!(index.resolve("e-money").is_some());
        assert!(index.resolve("dompet").is_none());
    }

    #[test]
    fn full_name_owner_beats_word_alias_owner() {
        // "umum" is a word alias of "Dana Umum" but the full name of "Umum".
        let pockets = roster(&["Dana Umum", "Umum"]);
        let index = AliasIndex::build(&pockets).unwrap();
        let hit = index.resolve("umum").unwrap();
        assert_eq!(hit.canonical_name, "Umum");
    }

    #[test]
    fn ambiguous_alias_falls_back_to_roster_order() {
        // Both pockets produce the word alias "belanja".
        let pockets = roster(&["Belanja Bulanan", "Belanja Harian"]);
        let index = AliasIndex::build(&pockets).unwrap();
        let hit = index.resolve("belanja").unwrap();
        assert_eq!(hit.canonical_name, "Belanja Bulanan");
    }

    #[test]
    fn find_longest_prefers_longer_aliases() {
        let pockets = roster(&["Kebutuhan Pokok", "Tabungan"]);
        let index = AliasIndex::build(&pockets).unwrap();
        // "keb" and "pokok" both match the first pocket; "pokok" is longer
        // than "keb" and selects the same entry.
        let hit = index.find_longest("keluarkan dari keb pokok").unwrap();
        assert_eq!(hit.canonical_name, "Kebutuhan Pokok");

        let hit = index.find_longest("isi tabungan dong").unwrap();
        assert_eq!(hit.canonical_name, "Tabungan");
    }

    #[test]
    fn find_longest_matches_multi_word_window() {
        let pockets = roster(&["Kebutuhan Pokok"]);
        let index = AliasIndex::build(&pockets).unwrap();
        let hit = index.find_longest("buat kebutuhan pokok bulan ini").unwrap();
        assert_eq!(hit.canonical_name, "Kebutuhan Pokok");
    }

    #[test]
    fn empty_roster_resolves_nothing() {
        let index = AliasIndex::build(&[]).unwrap();
        assert!(index.is_empty());
        assert!(index.find_longest("tabungan").is_none());
    }
}
