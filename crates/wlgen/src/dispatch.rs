// Strategy selection: one entry point over all generation strategies.

use std::iter::FusedIterator;

use wlgen_core::{Charset, GenerateOptions, Method, WordlistError, estimate_wordlist_size};

#[cfg(feature = "batched")]
use crate::batched::{BatchedWords, DEFAULT_BATCH_SIZE, gen_wordlist_batched};
use crate::eager::gen_wordlist;
use crate::product::{ProductWords, gen_wordlist_iter};
use crate::words::{Words, gen_words};

/// Result of [`generate_wordlist`]: either the complete wordlist or a lazy
/// stream of words.
#[derive(Debug, Clone)]
pub enum Wordlist<'a> {
    List(Vec<String>),
    Lazy(LazyWords<'a>),
}

impl Wordlist<'_> {
    /// Whether the wordlist is already fully built in memory.
    pub fn is_materialized(&self) -> bool {
        matches!(self, Wordlist::List(_))
    }

    /// Collect the remaining words into a `Vec`.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Wordlist::List(words) => words,
            Wordlist::Lazy(words) => words.collect(),
        }
    }
}

impl<'a> IntoIterator for Wordlist<'a> {
    type Item = String;
    type IntoIter = WordlistIter<'a>;

    fn into_iter(self) -> WordlistIter<'a> {
        match self {
            Wordlist::List(words) => WordlistIter::List(words.into_iter()),
            Wordlist::Lazy(words) => WordlistIter::Lazy(words),
        }
    }
}

/// Owning iterator over a [`Wordlist`].
#[derive(Debug, Clone)]
pub enum WordlistIter<'a> {
    List(std::vec::IntoIter<String>),
    Lazy(LazyWords<'a>),
}

impl Iterator for WordlistIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            WordlistIter::List(words) => words.next(),
            WordlistIter::Lazy(words) => words.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            WordlistIter::List(words) => words.size_hint(),
            WordlistIter::Lazy(words) => words.size_hint(),
        }
    }
}

impl FusedIterator for WordlistIter<'_> {}

/// A lazy word stream from one of the non-materializing strategies.
#[derive(Debug, Clone)]
pub enum LazyWords<'a> {
    Product(ProductWords),
    Words(Words<'a>),
    #[cfg(feature = "batched")]
    Batched(BatchedWords),
}

impl Iterator for LazyWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            LazyWords::Product(words) => words.next(),
            LazyWords::Words(words) => words.next(),
            #[cfg(feature = "batched")]
            LazyWords::Batched(words) => words.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            LazyWords::Product(words) => words.size_hint(),
            LazyWords::Words(words) => words.size_hint(),
            #[cfg(feature = "batched")]
            LazyWords::Batched(words) => words.size_hint(),
        }
    }
}

impl FusedIterator for LazyWords<'_> {}

/// Resolve the method `generate_wordlist` will run for these options.
///
/// Explicit methods are returned unchanged. For [`Method::Auto`]:
/// `Iter` if memory efficiency is preferred, otherwise `List` when the
/// estimated size is below `eager_limit` and `Iter` beyond it.
pub fn select_method(charset: &Charset, options: &GenerateOptions) -> Method {
    if options.method != Method::Auto {
        return options.method;
    }
    if options.prefer_memory_efficient {
        log::debug!("auto: memory-efficient generation preferred, selecting iter");
        return Method::Iter;
    }

    let size = estimate_wordlist_size(charset);
    let method = if size.is_below(u128::from(options.eager_limit)) {
        Method::List
    } else {
        Method::Iter
    };
    log::debug!(
        "auto: {size} combinations (eager limit {}), selecting {method}",
        options.eager_limit
    );
    method
}

/// Generate the wordlist for `charset` with the strategy chosen by `options`.
///
/// `List` returns [`Wordlist::List`]; `Iter`, `Words` and `Batch` return
/// [`Wordlist::Lazy`]. `clean_input` is forwarded to `Iter` and `Batch`.
///
/// Fails before producing anything if the charset cannot be generated or
/// the batched strategy is not compiled in.
pub fn generate_wordlist<'a>(
    charset: &'a Charset,
    options: &GenerateOptions,
) -> Result<Wordlist<'a>, WordlistError> {
    let wordlist = match select_method(charset, options) {
        Method::List => Wordlist::List(gen_wordlist(charset)?),
        Method::Iter => Wordlist::Lazy(LazyWords::Product(gen_wordlist_iter(
            charset,
            options.clean_input,
        )?)),
        Method::Words => Wordlist::Lazy(LazyWords::Words(gen_words(charset)?)),
        Method::Batch => batched(charset, options)?,
        Method::Auto => unreachable!("select_method always resolves auto"),
    };
    Ok(wordlist)
}

#[cfg(feature = "batched")]
fn batched<'a>(
    charset: &'a Charset,
    options: &GenerateOptions,
) -> Result<Wordlist<'a>, WordlistError> {
    let words = gen_wordlist_batched(charset, options.clean_input, DEFAULT_BATCH_SIZE)?;
    Ok(Wordlist::Lazy(LazyWords::Batched(words)))
}

#[cfg(not(feature = "batched"))]
fn batched<'a>(
    charset: &'a Charset,
    _options: &GenerateOptions,
) -> Result<Wordlist<'a>, WordlistError> {
    charset.check_generable()?;
    Err(WordlistError::CapabilityUnavailable {
        strategy: "batch",
        reason: "built without the `batched` feature",
    })
}
