//! Command parser façade.
//!
//! [`CommandParser`] wires the pipeline together:
//! normalize → classify → extract → resolve missing fields. It is compiled
//! once from a [`Lexicon`] and is then an immutable, `Send + Sync` pure
//! function of `(text, roster)`; nothing is retained between calls.

use dompet_text::normalize;

use crate::alias::AliasIndex;
use crate::classifier::IntentClassifier;
use crate::command::{Intent, ParseResult, Pocket};
use crate::error::Result;
use crate::extractor::EntityExtractor;
use crate::lexicon::Lexicon;
use crate::resolver::missing_fields;

/// The assembled interpreter pipeline.
#[derive(Debug)]
pub struct CommandParser {
    classifier: IntentClassifier,
    extractor: EntityExtractor,
}

impl CommandParser {
    /// Parser with the built-in Indonesian lexicon.
    pub fn new() -> Result<Self> {
        Self::with_lexicon(&Lexicon::default())
    }

    /// Parser with a caller-supplied rule table.
    pub fn with_lexicon(lexicon: &Lexicon) -> Result<Self> {
        Ok(Self {
            classifier: IntentClassifier::new(lexicon)?,
            extractor: EntityExtractor::new(lexicon)?,
        })
    }

    /// Parse one command against the caller's current pocket roster.
    ///
    /// Returns an error only for contract violations (duplicate pocket ids);
    /// an unrecognizable command is the ordinary
    /// [`Intent::Unknown`] result with nothing missing.
    pub fn parse(&self, text: &str, pockets: &[Pocket]) -> Result<ParseResult> {
        let index = AliasIndex::build(pockets)?;
        let normalized = normalize(text);
        tracing::debug!(text = %normalized, pockets = index.len(), "parsing command");

        let intent = self.classifier.classify(&normalized);
        let entities = self.extractor.extract(intent, &normalized, &index);
        let missing = missing_fields(intent, &entities);

        if intent == Intent::Unknown {
            tracing::debug!("no intent matched");
        } else {
            tracing::info!(
                intent = %intent,
                missing = missing.len(),
                "command parsed"
            );
        }

        Ok(ParseResult { intent, entities, missing })
    }
}

/// One-shot convenience: parse with the built-in Indonesian lexicon.
pub fn parse_command(text: &str, pockets: &[Pocket]) -> Result<ParseResult> {
    CommandParser::new()?.parse(text, pockets)
}
