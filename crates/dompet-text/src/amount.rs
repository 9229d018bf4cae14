//! Leftmost-match scanner for Indonesian money shorthand.
//!
//! Colloquial Indonesian writes amounts in many overlapping forms:
//!
//! | Input        | Value      |
//! |--------------|------------|
//! | `1.250.000`  | 1,250,000  |
//! | `20 ribu`    | 20,000     |
//! | `50rb`       | 50,000     |
//! | `125k`       | 125,000    |
//! | `1,25jt`     | 1,250,000  |
//! | `3jt400`     | 3,400,000  |
//! | `rp250k`     | 250,000    |
//! | `sejuta`     | 1,000,000  |
//!
//! The scanner walks the text token by token and returns the first token (or
//! token pair, for detached unit words) matching the grammar. Absence of an
//! amount is an ordinary `None`, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// A matched amount inside normalized text.
///
/// `start`/`end` are byte offsets into the text handed to [`find_amount`];
/// the extractor removes that span before searching for pocket references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountMatch {
    /// The amount in the smallest currency unit.
    pub value: u64,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

/// Token-anchored amount grammar.
///
/// Groups: optional `rp` currency prefix, integer part (plain digits or
/// `.`-grouped thousands), optional `,`-decimal, optional attached unit
/// suffix, optional 1-3 digit compound remainder after the unit.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<rp>rp)?(?P<int>\d{1,3}(?:\.\d{3})+|\d+)(?:,(?P<frac>\d+))?(?:(?P<unit>ribu|rb|juta|jt|k)(?P<rem>\d{1,3})?)?",
    )
    .expect("static amount pattern must compile")
});

/// Parse the first amount found in raw text.
///
/// The input is normalized internally, so this accepts user text verbatim.
/// Returns `None` when no substring matches the grammar.
#[must_use]
pub fn parse_amount(text: &str) -> Option<u64> {
    find_amount(&crate::normalize::normalize(text)).map(|m| m.value)
}

/// Find the first amount in already-normalized text, with its span.
///
/// The leftmost matching token wins; later candidates are ignored. Offsets
/// refer to the input string, which must already be in [`crate::normalize`]
/// output form.
#[must_use]
pub fn find_amount(text: &str) -> Option<AmountMatch> {
    let toks: Vec<(usize, &str)> = tokens(text).collect();
    for (i, &(start, tok)) in toks.iter().enumerate() {
        if let Some(m) = match_token(start, tok, toks.get(i + 1).copied()) {
            tracing::debug!(value = m.value, start = m.start, end = m.end, "amount matched");
            return Some(m);
        }
    }
    None
}

/// Whitespace tokens with their byte offsets.
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.split_whitespace()
        .map(move |tok| (tok.as_ptr() as usize - text.as_ptr() as usize, tok))
}

/// The multiplier for a unit suffix.
fn unit_multiplier(unit: &str) -> u64 {
    match unit {
        "juta" | "jt" => 1_000_000,
        // "ribu" | "rb" | "k"
        _ => 1_000,
    }
}

/// Try to read an amount starting at the given token.
///
/// `next` is consulted only for a detached unit word ("20 ribu").
fn match_token(tok_start: usize, tok: &str, next: Option<(usize, &str)>) -> Option<AmountMatch> {
    // Standalone word forms.
    let word_value = match tok {
        "seribu" => Some(1_000),
        "sejuta" => Some(1_000_000),
        _ => None,
    };
    if let Some(value) = word_value {
        return Some(AmountMatch { value, start: tok_start, end: tok_start + tok.len() });
    }

    let caps = TOKEN_RE.captures(tok)?;
    let int_m = caps.name("int")?;
    let leftover = &tok[caps.get(0)?.end()..];

    let int: u64 = int_m.as_str().replace('.', "").parse().ok()?;
    let frac = caps.name("frac").map(|m| m.as_str());

    // A unit directly followed by more letters is not a unit ("125kg" is the
    // literal 125, not 125,000 grams of anything).
    if leftover.starts_with(|c: char| c.is_alphabetic()) {
        return Some(AmountMatch { value: int, start: tok_start, end: tok_start + int_m.end() });
    }

    if let Some(unit_m) = caps.name("unit") {
        let mult = unit_multiplier(unit_m.as_str());
        let base = with_decimal(int, frac, mult)?;

        if let Some(rem_m) = caps.name("rem") {
            if leftover.starts_with(|c: char| c.is_ascii_digit()) {
                // Four or more trailing digits: the remainder would be >= 1000,
                // so it stays a separate token and only the base matches.
                return Some(AmountMatch {
                    value: base,
                    start: tok_start,
                    end: tok_start + unit_m.end(),
                });
            }
            let rem: u64 = rem_m.as_str().parse().ok()?;
            let value = base.checked_add(rem.checked_mul(mult / 1_000)?)?;
            return Some(AmountMatch { value, start: tok_start, end: tok_start + rem_m.end() });
        }

        return Some(AmountMatch { value: base, start: tok_start, end: tok_start + unit_m.end() });
    }

    // No attached unit: the unit may follow as its own word ("20 ribu").
    if let Some((next_start, next_tok)) = next
        && leftover.is_empty()
        && matches!(next_tok, "ribu" | "rb" | "juta" | "jt" | "k")
    {
        let value = with_decimal(int, frac, unit_multiplier(next_tok))?;
        return Some(AmountMatch { value, start: tok_start, end: next_start + next_tok.len() });
    }

    // A bare decimal is not part of the grammar; only the integer part matches.
    Some(AmountMatch { value: int, start: tok_start, end: tok_start + int_m.end() })
}

/// Apply a unit multiplier to `int` plus an optional decimal part, rounding
/// the fractional contribution to the nearest integer.
fn with_decimal(int: u64, frac: Option<&str>, mult: u64) -> Option<u64> {
    let whole = int.checked_mul(mult)?;
    let Some(frac) = frac else {
        return Some(whole);
    };
    if frac.len() > 9 {
        return None;
    }
    let digits: u128 = frac.parse().ok()?;
    let denom = 10u128.pow(frac.len() as u32);
    let part = (digits * u128::from(mult) + denom / 2) / denom;
    whole.checked_add(u64::try_from(part).ok()?)
}
