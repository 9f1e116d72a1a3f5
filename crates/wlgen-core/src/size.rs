// Wordlist size estimation: combination count without generation.

use std::fmt;

use hashbrown::HashSet;

use crate::charset::Charset;

/// Number of combinations a charset produces.
///
/// Counts are exact up to `u128::MAX`. Larger products are reported as
/// [`WordlistSize::Overflow`] instead of wrapping. `Exact(_)` always orders
/// below `Overflow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordlistSize {
    Exact(u128),
    Overflow,
}

impl WordlistSize {
    /// The exact count, or `None` if it does not fit in `u128`.
    pub fn exact(self) -> Option<u128> {
        match self {
            WordlistSize::Exact(n) => Some(n),
            WordlistSize::Overflow => None,
        }
    }

    /// Whether the count is strictly below `limit`.
    pub fn is_below(self, limit: u128) -> bool {
        matches!(self, WordlistSize::Exact(n) if n < limit)
    }
}

impl fmt::Display for WordlistSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordlistSize::Exact(n) => write!(f, "{n}"),
            WordlistSize::Overflow => write!(f, "more than {}", u128::MAX),
        }
    }
}

/// Count the combinations `charset` produces after normalization.
///
/// The count is the product of the number of unique characters in each
/// slot. An empty charset, or one with an empty slot, yields 0.
pub fn estimate_wordlist_size(charset: &Charset) -> WordlistSize {
    if charset.is_empty() {
        return WordlistSize::Exact(0);
    }

    let mut size: u128 = 1;
    let mut overflowed = false;
    for slot in charset.slots() {
        let unique = slot.iter().collect::<HashSet<_>>().len() as u128;
        if unique == 0 {
            // An empty slot empties the whole product, even past an overflow.
            return WordlistSize::Exact(0);
        }
        match size.checked_mul(unique) {
            Some(next) => size = next,
            None => overflowed = true,
        }
    }

    if overflowed {
        WordlistSize::Overflow
    } else {
        WordlistSize::Exact(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(slots: &[&str]) -> WordlistSize {
        estimate_wordlist_size(&Charset::from_slots(slots))
    }

    #[test]
    fn simple_products() {
        assert_eq!(count(&["123", "AB"]), WordlistSize::Exact(6));
        assert_eq!(count(&["abc", "xyz", "123"]), WordlistSize::Exact(27));
    }

    #[test]
    fn empty_charset_is_zero() {
        assert_eq!(estimate_wordlist_size(&Charset::new()), WordlistSize::Exact(0));
    }

    #[test]
    fn duplicates_counted_once() {
        assert_eq!(count(&["111", "AB"]), WordlistSize::Exact(2));
        assert_eq!(count(&["123", "AAA"]), WordlistSize::Exact(3));
    }

    #[test]
    fn five_decimal_digits() {
        let digits = ["0123456789"; 5];
        assert_eq!(count(&digits), WordlistSize::Exact(100_000));
    }

    #[test]
    fn empty_slot_is_zero() {
        assert_eq!(count(&["abc", "", "xy"]), WordlistSize::Exact(0));
    }

    #[test]
    fn overflow_is_reported() {
        // 100^20 = 10^40 > u128::MAX (~3.4 * 10^38)
        let wide: String = (0..100u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let slots = vec![wide.as_str(); 20];
        let size = count(&slots);
        assert_eq!(size, WordlistSize::Overflow);
        assert_eq!(size.exact(), None);
        assert!(!size.is_below(u128::MAX));
    }

    #[test]
    fn empty_slot_after_overflow_is_still_zero() {
        let wide: String = (0..100u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let mut slots = vec![wide.as_str(); 20];
        slots.push("");
        assert_eq!(count(&slots), WordlistSize::Exact(0));
    }

    #[test]
    fn ordering_and_thresholds() {
        assert!(WordlistSize::Exact(u128::MAX) < WordlistSize::Overflow);
        assert!(WordlistSize::Exact(999).is_below(1000));
        assert!(!WordlistSize::Exact(1000).is_below(1000));
    }

    #[test]
    fn display() {
        assert_eq!(WordlistSize::Exact(6).to_string(), "6");
        assert!(WordlistSize::Overflow.to_string().starts_with("more than "));
    }
}
