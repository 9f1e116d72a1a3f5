// Eager generation: the whole wordlist built in memory.
//
// The wordlist is built bottom-up: the suffixes for slots 1..n are
// generated first, then every character of slot 0 is prepended to each of
// them. Recursion depth equals the number of slots.

use wlgen_core::{Charset, WordlistError};

/// Build the complete wordlist for `charset` in memory.
///
/// Slots are used as given (no deduplication or sorting), so the input
/// should already be normalized. Words are ordered with slot 0 varying
/// slowest.
///
/// Fails with a precondition error for an empty charset or an empty slot.
pub fn gen_wordlist(charset: &Charset) -> Result<Vec<String>, WordlistError> {
    charset.check_generable()?;
    Ok(build(charset.slots()))
}

fn build(slots: &[Vec<char>]) -> Vec<String> {
    let Some((first, rest)) = slots.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return first.iter().map(|c| c.to_string()).collect();
    }

    let suffixes = build(rest);
    let mut words = Vec::with_capacity(first.len().saturating_mul(suffixes.len()));
    for &c in first {
        for suffix in &suffixes {
            let mut word = String::with_capacity(c.len_utf8() + suffix.len());
            word.push(c);
            word.push_str(suffix);
            words.push(word);
        }
    }
    words
}
