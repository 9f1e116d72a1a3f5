// Batched generation via index arithmetic.
//
// Word k of the wordlist is k written in mixed radix, one digit per slot
// with the last slot least significant. A batch of consecutive indices is
// decomposed into slot positions first, then all of its words are
// materialized at once.

use std::iter::FusedIterator;

use wlgen_core::{Charset, WordlistError, normalize_slot};

/// Number of words materialized per batch by default.
pub const DEFAULT_BATCH_SIZE: usize = 4096;

/// Upper bound on the number of words materialized per batch.
pub const MAX_BATCH_SIZE: usize = DEFAULT_BATCH_SIZE * 64;

/// Lazily generate the wordlist for `charset` in batches of `batch_size`.
///
/// Normalization follows [`gen_wordlist_iter`](crate::gen_wordlist_iter):
/// slots are deduplicated and sorted unless `clean_input` is set.
/// `batch_size` is clamped to `1..=MAX_BATCH_SIZE`.
///
/// Word indices are `u128`, so a wordlist larger than that is rejected as
/// unavailable for this strategy.
pub fn gen_wordlist_batched(
    charset: &Charset,
    clean_input: bool,
    batch_size: usize,
) -> Result<BatchedWords, WordlistError> {
    charset.check_generable()?;
    let slots: Vec<Vec<char>> = if clean_input {
        charset.slots().to_vec()
    } else {
        charset.slots().iter().map(|s| normalize_slot(s)).collect()
    };

    let total = slots
        .iter()
        .try_fold(1u128, |acc, slot| acc.checked_mul(slot.len() as u128))
        .ok_or(WordlistError::CapabilityUnavailable {
            strategy: "batch",
            reason: "wordlist size exceeds the 128-bit index range",
        })?;

    let batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
    log::trace!(
        "batched product over {} slots: {total} words, {batch_size} per batch",
        slots.len()
    );
    Ok(BatchedWords {
        slots,
        total,
        next_index: 0,
        batch_size,
        batch: Vec::new().into_iter(),
    })
}

/// Iterator handing out words from precomputed batches.
#[derive(Debug, Clone)]
pub struct BatchedWords {
    slots: Vec<Vec<char>>,
    total: u128,
    /// Index of the first word of the next batch.
    next_index: u128,
    batch_size: usize,
    batch: std::vec::IntoIter<String>,
}

impl BatchedWords {
    /// Compute the slot positions of every word in `start..start + count`,
    /// row by row.
    fn positions(&self, start: u128, count: usize) -> Vec<usize> {
        let width = self.slots.len();
        let mut positions = vec![0; count * width];
        for (row, k) in positions.chunks_exact_mut(width).zip(start..) {
            let mut rest = k;
            for (digit, slot) in row.iter_mut().zip(&self.slots).rev() {
                let radix = slot.len() as u128;
                *digit = (rest % radix) as usize;
                rest /= radix;
            }
        }
        positions
    }

    fn refill(&mut self) -> bool {
        if self.next_index >= self.total {
            return false;
        }
        let left = self.total - self.next_index;
        let count = usize::try_from(left).map_or(self.batch_size, |l| l.min(self.batch_size));

        let width = self.slots.len();
        let positions = self.positions(self.next_index, count);
        let words: Vec<String> = positions
            .chunks_exact(width)
            .map(|row| {
                row.iter()
                    .zip(&self.slots)
                    .map(|(&i, slot)| slot[i])
                    .collect()
            })
            .collect();

        self.next_index += count as u128;
        self.batch = words.into_iter();
        true
    }
}

impl Iterator for BatchedWords {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.batch.next() {
            return Some(word);
        }
        if self.refill() {
            self.batch.next()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next_index + self.batch.len() as u128;
        match usize::try_from(left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for BatchedWords {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::gen_wordlist_iter;

    #[test]
    fn matches_product_across_batch_boundaries() {
        let charset = Charset::from_slots(["321", "CBA", " !\"$"]);
        let expected: Vec<_> = gen_wordlist_iter(&charset, false).unwrap().collect();
        for batch_size in [1, 5, 36, 100] {
            let words: Vec<_> = gen_wordlist_batched(&charset, false, batch_size)
                .unwrap()
                .collect();
            assert_eq!(words, expected, "batch_size {batch_size}");
        }
    }

    #[test]
    fn clean_input_uses_raw_order() {
        let charset = Charset::from_slots(["21", "AA"]);
        let words: Vec<_> = gen_wordlist_batched(&charset, true, 3).unwrap().collect();
        assert_eq!(words, ["2A", "2A", "1A", "1A"]);
    }

    #[test]
    fn zero_batch_size() {
        let charset = Charset::from_slots(["ab"]);
        let words: Vec<_> = gen_wordlist_batched(&charset, false, 0).unwrap().collect();
        assert_eq!(words, ["a", "b"]);
    }

    #[test]
    fn oversized_batch_is_capped() {
        let charset = Charset::from_slots(["abcdefghijklmnopqrstuvwxyz"; 12]);
        let mut words = gen_wordlist_batched(&charset, false, usize::MAX).unwrap();
        assert_eq!(words.next().as_deref(), Some("aaaaaaaaaaaa"));
        assert_eq!(words.batch.len(), MAX_BATCH_SIZE - 1);
        assert_eq!(words.next().as_deref(), Some("aaaaaaaaaaab"));
    }

    #[test]
    fn size_hint() {
        let charset = Charset::from_slots(["123", "AB"]);
        let mut words = gen_wordlist_batched(&charset, false, 4).unwrap();
        assert_eq!(words.size_hint(), (6, Some(6)));
        words.next();
        assert_eq!(words.size_hint(), (5, Some(5)));
    }

    #[test]
    fn overflow_is_unavailable() {
        let wide: String = (0..100u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let charset = Charset::from_slots(vec![wide.as_str(); 20]);
        let err = gen_wordlist_batched(&charset, false, DEFAULT_BATCH_SIZE).unwrap_err();
        assert_eq!(err.kind(), wlgen_core::ErrorKind::CapabilityUnavailable);
    }

    #[test]
    fn preconditions() {
        assert_eq!(
            gen_wordlist_batched(&Charset::new(), false, 8).unwrap_err(),
            WordlistError::EmptyCharset
        );
    }
}
