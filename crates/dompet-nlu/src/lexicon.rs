//! Trigger vocabulary and structural markers.
//!
//! The lexicon is the rule-table half of the interpreter: every word the
//! classifier and extractor react to lives here as data, so the vocabulary
//! can be extended or replaced without touching control flow. The default is
//! colloquial Indonesian; a caller may deserialize its own tables and build a
//! parser from them via [`crate::CommandParser::with_lexicon`].

use serde::{Deserialize, Serialize};

/// Immutable trigger/marker vocabulary for one parser instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Verbs that move money between pockets ("kirim", "transfer").
    pub transfer_triggers: Vec<String>,
    /// Receipt verbs and income nouns ("dapat", "gaji").
    pub income_triggers: Vec<String>,
    /// Outflow verbs ("bayar", "beli").
    pub expense_triggers: Vec<String>,
    /// Source markers for the two-pocket pattern ("dari").
    pub from_markers: Vec<String>,
    /// Destination markers for the two-pocket pattern ("ke").
    pub to_markers: Vec<String>,
    /// Markers introducing a trailing purpose clause ("buat", "untuk").
    pub note_markers: Vec<String>,
}

impl Lexicon {
    /// The built-in colloquial Indonesian vocabulary.
    #[must_use]
    pub fn indonesian() -> Self {
        Self {
            transfer_triggers: words(&[
                "kirim", "kirimkan", "pindah", "pindahkan", "transfer", "tf",
            ]),
            income_triggers: words(&[
                "dapat", "dapet", "terima", "gaji", "gajian", "masuk", "bonus",
            ]),
            expense_triggers: words(&[
                "keluarkan", "keluar", "bayar", "beli", "belanja", "jajan",
            ]),
            from_markers: words(&["dari"]),
            to_markers: words(&["ke"]),
            note_markers: words(&["buat", "untuk", "utk"]),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::indonesian()
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}
