//! Wordlist generation.
//!
//! Computes every string formed by picking one character from each
//! position of a [`Charset`], slot 0 varying slowest. Three strategies
//! produce the same wordlist with different memory/throughput tradeoffs:
//!
//! - [`eager`] -- Builds the whole wordlist in memory by recursive reduction
//! - [`product`] -- Lazy Cartesian product over normalized slots, O(N) memory
//! - [`words`] -- Lazy depth-first descent with a reused scratch buffer
//! - [`batched`] -- Index-arithmetic batches (`batched` feature)
//! - [`dispatch`] -- Picks a strategy from the estimated size and options
//!
//! ```
//! use wlgen::{Charset, GenerateOptions, generate_wordlist};
//!
//! let charset = Charset::from_slots(["123", "AB"]);
//! let words = generate_wordlist(&charset, &GenerateOptions::default())?.into_vec();
//! assert_eq!(words, ["1A", "1B", "2A", "2B", "3A", "3B"]);
//! # Ok::<(), wlgen::WordlistError>(())
//! ```

#[cfg(feature = "batched")]
pub mod batched;
pub mod dispatch;
pub mod eager;
pub mod product;
pub mod words;

pub use wlgen_core::{
    Charset, ErrorKind, GenerateOptions, Method, WordlistError, WordlistSize,
    estimate_wordlist_size, normalize_slot,
};

pub use dispatch::{LazyWords, Wordlist, generate_wordlist, select_method};
pub use eager::gen_wordlist;
pub use product::{ProductWords, gen_wordlist_iter};
pub use words::{Words, gen_words, visit_words};
