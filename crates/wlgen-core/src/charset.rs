// Charset: position-indexed character sets and slot normalization.

use std::collections::BTreeMap;

use crate::WordlistError;

/// Sort a slot's characters by code point and drop duplicates.
///
/// Applying this twice gives the same result as applying it once.
pub fn normalize_slot(chars: &[char]) -> Vec<char> {
    let mut slot = chars.to_vec();
    slot.sort_unstable();
    slot.dedup();
    slot
}

/// Ordered sequence of per-position character sets.
///
/// Slot 0 is the outermost position: in every generated wordlist it varies
/// slowest, and the last slot varies fastest. Slots are stored exactly as
/// given; use [`Charset::normalized`] to get a deduplicated, sorted copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(into = "BTreeMap<usize, String>")
)]
pub struct Charset {
    slots: Vec<Vec<char>>,
}

impl Charset {
    /// Create an empty charset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a charset from slot strings in position order.
    pub fn from_slots<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            slots: slots
                .into_iter()
                .map(|s| s.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Build a charset from `(position, characters)` pairs.
    ///
    /// Positions may arrive in any order but must cover `0..n` exactly once.
    pub fn from_positions<I, S>(positions: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut by_position = BTreeMap::new();
        for (position, chars) in positions {
            let slot: Vec<char> = chars.as_ref().chars().collect();
            if by_position.insert(position, slot).is_some() {
                return Err(WordlistError::DuplicatePosition(position));
            }
        }

        let mut slots = Vec::with_capacity(by_position.len());
        for (expected, (found, slot)) in by_position.into_iter().enumerate() {
            if found != expected {
                return Err(WordlistError::PositionGap { expected, found });
            }
            slots.push(slot);
        }
        Ok(Self { slots })
    }

    /// Append a slot after the current last position.
    pub fn push_slot(&mut self, chars: impl AsRef<str>) {
        self.slots.push(chars.as_ref().chars().collect());
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in position order.
    pub fn slots(&self) -> &[Vec<char>] {
        &self.slots
    }

    /// Characters at `position`, or `None` past the last position.
    pub fn slot(&self, position: usize) -> Option<&[char]> {
        self.slots.get(position).map(Vec::as_slice)
    }

    /// Copy of this charset with every slot deduplicated and sorted.
    pub fn normalized(&self) -> Self {
        Self {
            slots: self.slots.iter().map(|s| normalize_slot(s)).collect(),
        }
    }

    /// Whether every slot is already strictly ascending (unique and sorted).
    pub fn is_normalized(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.windows(2).all(|w| w[0] < w[1]))
    }

    /// Check that a wordlist can be generated: at least one position, and
    /// no position without characters.
    pub fn check_generable(&self) -> Result<(), WordlistError> {
        if self.slots.is_empty() {
            return Err(WordlistError::EmptyCharset);
        }
        match self.slots.iter().position(Vec::is_empty) {
            Some(position) => Err(WordlistError::EmptySlot(position)),
            None => Ok(()),
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Charset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_slots(iter)
    }
}

impl TryFrom<BTreeMap<usize, String>> for Charset {
    type Error = WordlistError;

    fn try_from(positions: BTreeMap<usize, String>) -> Result<Self, Self::Error> {
        Self::from_positions(positions)
    }
}

impl From<Charset> for BTreeMap<usize, String> {
    fn from(charset: Charset) -> Self {
        charset
            .slots
            .into_iter()
            .enumerate()
            .map(|(position, slot)| (position, slot.into_iter().collect()))
            .collect()
    }
}

// Entries are collected in document order so a repeated position reaches
// `from_positions` instead of being overwritten by a map.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Charset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PositionMap;

        impl<'de> serde::de::Visitor<'de> for PositionMap {
            type Value = Charset;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map from position index to characters")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Charset, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<usize, String>()? {
                    entries.push(entry);
                }
                Charset::from_positions(entries).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(PositionMap)
    }
}
