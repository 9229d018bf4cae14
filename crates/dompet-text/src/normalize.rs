//! Canonicalisation of raw chat text.
//!
//! Every downstream component (amount scanner, alias matching, trigger
//! matching) operates on normalized text, so this function is applied exactly
//! once at the start of a parse and its output format is the contract for the
//! rest of the pipeline.

/// Normalize raw user text for rule matching.
///
/// The result is lowercase, diacritic-free, and contains single spaces
/// between words. Punctuation and hyphens become spaces, so `"e-money"`
/// compares equal to `"e money"`.
///
/// One carve-out keeps the amount grammar intact: `.` and `,` are preserved
/// when they sit directly between two digits, so `"1.250.000"` and `"1,25jt"`
/// survive normalization unchanged.
///
/// This is a pure, total function and never fails.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: Vec<char> = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect();

    let mut out = String::with_capacity(folded.len());
    for (i, &c) in folded.iter().enumerate() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if (c == '.' || c == ',')
            && i > 0
            && folded[i - 1].is_ascii_digit()
            && folded.get(i + 1).is_some_and(char::is_ascii_digit)
        {
            out.push(c);
        } else {
            out.push(' ');
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map an accented Latin letter to its ASCII base letter.
///
/// Covers the Latin-1 and common Latin Extended-A forms that show up in chat
/// text; anything else passes through untouched.
fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
