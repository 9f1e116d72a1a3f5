// Generation options: strategy selection and input handling.

use std::fmt;
use std::str::FromStr;

use crate::WordlistError;

/// Default upper bound (exclusive) on the combination count for which the
/// automatic policy builds the wordlist in memory.
pub const DEFAULT_EAGER_LIMIT: u64 = 100_000;

/// Generation strategy.
///
/// Parsed from the names `auto`, `list`, `iter`, `words` and `batch`. Any
/// other name is rejected with [`WordlistError::InvalidMethod`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Method {
    /// Pick `List` or `Iter` from the estimated size and memory preference.
    #[default]
    Auto,
    /// Build the complete wordlist in memory.
    List,
    /// Lazy Cartesian product with optional normalization.
    Iter,
    /// Lazy depth-first descent over the slots.
    Words,
    /// Lazy generation in batches via index arithmetic (`batched` feature).
    Batch,
}

impl Method {
    /// Accepted method names, formatted for error messages.
    pub const ACCEPTED: &'static str = "'auto', 'list', 'iter', 'words', 'batch'";

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Auto => "auto",
            Method::List => "list",
            Method::Iter => "iter",
            Method::Words => "words",
            Method::Batch => "batch",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Method::Auto),
            "list" => Ok(Method::List),
            "iter" => Ok(Method::Iter),
            "words" => Ok(Method::Words),
            "batch" => Ok(Method::Batch),
            other => Err(WordlistError::InvalidMethod(other.to_string())),
        }
    }
}

impl TryFrom<String> for Method {
    type Error = WordlistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.as_str().to_string()
    }
}

/// Options for the wordlist dispatcher.
///
/// `clean_input` only affects the `Iter` and `Batch` strategies: when set,
/// slots are used as given instead of being deduplicated and sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct GenerateOptions {
    pub method: Method,
    pub prefer_memory_efficient: bool,
    pub clean_input: bool,
    /// `Auto` builds in memory below this many combinations.
    pub eager_limit: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            method: Method::Auto,
            prefer_memory_efficient: false,
            clean_input: false,
            eager_limit: DEFAULT_EAGER_LIMIT,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the method from its name, validating it.
    pub fn method_name(self, name: &str) -> Result<Self, WordlistError> {
        Ok(self.method(name.parse()?))
    }

    pub fn prefer_memory_efficient(mut self, prefer: bool) -> Self {
        self.prefer_memory_efficient = prefer;
        self
    }

    pub fn clean_input(mut self, clean: bool) -> Self {
        self.clean_input = clean;
        self
    }

    pub fn eager_limit(mut self, limit: u64) -> Self {
        self.eager_limit = limit;
        self
    }
}
