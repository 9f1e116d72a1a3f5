// Word-for-word generation by depth-first descent over the slots.
//
// Generation is an n-level nested loop collapsed into one descent: depth d
// walks slot d, writing its character into a shared scratch buffer, and the
// buffer is emitted once the last slot has been written. The buffer is
// reused for every word, so memory stays O(n) however many words there are.

use std::iter::FusedIterator;
use std::ops::ControlFlow;

use wlgen_core::{Charset, WordlistError};

/// Visit every word of `charset` with a borrowed view of the scratch buffer.
///
/// The `&str` passed to `visitor` is only valid for that call; copy it out
/// to keep it. Returning `ControlFlow::Break(())` stops the traversal.
///
/// Slots are used as given, so the input should already be normalized.
pub fn visit_words<F>(charset: &Charset, visitor: F) -> Result<(), WordlistError>
where
    F: FnMut(&str) -> ControlFlow<()>,
{
    charset.check_generable()?;
    let mut descent = Descent {
        slots: charset.slots(),
        word: String::new(),
        visitor,
    };
    if descent.descend(0).is_break() {
        log::trace!("words: visitor stopped the descent early");
    }
    Ok(())
}

struct Descent<'a, F> {
    slots: &'a [Vec<char>],
    word: String,
    visitor: F,
}

impl<F> Descent<'_, F>
where
    F: FnMut(&str) -> ControlFlow<()>,
{
    fn descend(&mut self, depth: usize) -> ControlFlow<()> {
        let slots = self.slots;
        let last = depth + 1 == slots.len();
        for &c in &slots[depth] {
            self.word.push(c);
            let flow = if last {
                (self.visitor)(&self.word)
            } else {
                self.descend(depth + 1)
            };
            self.word.pop();
            flow?;
        }
        ControlFlow::Continue(())
    }
}

/// Lazily generate the wordlist for `charset` word for word.
///
/// Each word is an owned copy of the scratch buffer. Slots are borrowed
/// from `charset` and used as given (no deduplication or sorting).
pub fn gen_words(charset: &Charset) -> Result<Words<'_>, WordlistError> {
    charset.check_generable()?;
    Ok(Words::new(charset.slots()))
}

/// Iterator form of the depth-first descent.
///
/// The recursion frames live in `positions`: `positions[d]` is the index
/// the loop at depth `d` is on. Backtracking pops characters off the
/// scratch buffer until a depth with characters left is found, then the
/// descent continues from there with index 0 in every deeper slot.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    slots: &'a [Vec<char>],
    positions: Vec<usize>,
    word: String,
    /// Words left to yield, if that count fits in `usize`.
    remaining: Option<usize>,
    started: bool,
    done: bool,
}

impl<'a> Words<'a> {
    fn new(slots: &'a [Vec<char>]) -> Self {
        Self {
            slots,
            positions: vec![0; slots.len()],
            word: String::new(),
            remaining: slots
                .iter()
                .try_fold(1usize, |acc, slot| acc.checked_mul(slot.len())),
            started: false,
            done: slots.is_empty() || slots.iter().any(Vec::is_empty),
        }
    }

    /// Write the first character of every slot from `depth` on.
    fn descend_from(&mut self, depth: usize) {
        for d in depth..self.slots.len() {
            self.positions[d] = 0;
            self.word.push(self.slots[d][0]);
        }
    }

    /// Move to the next word; returns false once every word was produced.
    fn backtrack(&mut self) -> bool {
        let mut depth = self.slots.len();
        while depth > 0 {
            depth -= 1;
            self.word.pop();
            self.positions[depth] += 1;
            if let Some(&c) = self.slots[depth].get(self.positions[depth]) {
                self.word.push(c);
                self.descend_from(depth + 1);
                return true;
            }
        }
        false
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.descend_from(0);
        } else if !self.backtrack() {
            self.done = true;
            return None;
        }
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        Some(self.word.clone())
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

impl FusedIterator for Words<'_> {}
