// Lazy Cartesian product over per-slot character lists.

use std::iter::FusedIterator;

use wlgen_core::{Charset, WordlistError, normalize_slot};

/// Lazily generate the wordlist for `charset` as a Cartesian product.
///
/// Unless `clean_input` is set, every slot is deduplicated and sorted into
/// a private working copy first. With `clean_input` the slots are used
/// exactly as given; duplicate characters then produce duplicate words.
///
/// Each call starts a fresh iteration. Fails with a precondition error for
/// an empty charset or an empty slot.
pub fn gen_wordlist_iter(
    charset: &Charset,
    clean_input: bool,
) -> Result<ProductWords, WordlistError> {
    charset.check_generable()?;
    let slots: Vec<Vec<char>> = if clean_input {
        charset.slots().to_vec()
    } else {
        charset.slots().iter().map(|s| normalize_slot(s)).collect()
    };
    log::trace!(
        "product over {} slots (clean_input={clean_input})",
        slots.len()
    );
    Ok(ProductWords::new(slots))
}

/// Iterator over the Cartesian product of its slots, last slot fastest.
///
/// Holds one index per slot; only the word being returned is allocated.
#[derive(Debug, Clone)]
pub struct ProductWords {
    slots: Vec<Vec<char>>,
    /// Current position within each slot (odometer digits).
    indices: Vec<usize>,
    /// Words left to yield, if that count fits in `usize`.
    remaining: Option<usize>,
    done: bool,
}

impl ProductWords {
    /// Slots must be non-empty, with at least one slot.
    fn new(slots: Vec<Vec<char>>) -> Self {
        let remaining = slots
            .iter()
            .try_fold(1usize, |acc, slot| acc.checked_mul(slot.len()));
        Self {
            indices: vec![0; slots.len()],
            done: slots.is_empty() || slots.iter().any(Vec::is_empty),
            slots,
            remaining,
        }
    }

    /// Step the odometer; sets `done` after the last word.
    fn advance(&mut self) {
        for depth in (0..self.slots.len()).rev() {
            self.indices[depth] += 1;
            if self.indices[depth] < self.slots[depth].len() {
                return;
            }
            self.indices[depth] = 0;
        }
        self.done = true;
    }
}

impl Iterator for ProductWords {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let word: String = self
            .indices
            .iter()
            .zip(&self.slots)
            .map(|(&i, slot)| slot[i])
            .collect();
        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for ProductWords {}
