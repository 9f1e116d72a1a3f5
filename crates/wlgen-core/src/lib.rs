//! Shared types for the wlgen wordlist generator.
//!
//! A wordlist is the n-ary Cartesian product of per-position character
//! sets. This crate holds everything the generation strategies agree on:
//!
//! - [`charset`] -- The position-indexed character sets and their normalization
//! - [`size`] -- Combination counting without generating anything
//! - [`config`] -- Strategy selection and generation options

pub mod charset;
pub mod config;
pub mod size;

pub use charset::{Charset, normalize_slot};
pub use config::{GenerateOptions, Method};
pub use size::{WordlistSize, estimate_wordlist_size};

/// Broad classification of a [`WordlistError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller asked for a strategy or option that does not exist.
    InvalidConfiguration,
    /// The charset cannot be generated from (empty, gapped, empty slot).
    PreconditionViolation,
    /// An optional strategy was requested but is not compiled in or cannot
    /// handle the input.
    CapabilityUnavailable,
}

/// Error type for charset construction, option parsing and generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordlistError {
    #[error("invalid method '{0}': choose from {accepted}", accepted = Method::ACCEPTED)]
    InvalidMethod(String),
    #[error("charset has no positions")]
    EmptyCharset,
    #[error("charset position {0} has no characters")]
    EmptySlot(usize),
    #[error("charset positions are not contiguous: expected position {expected}, found {found}")]
    PositionGap { expected: usize, found: usize },
    #[error("charset position {0} is defined more than once")]
    DuplicatePosition(usize),
    #[error("{strategy} generation is unavailable: {reason}")]
    CapabilityUnavailable {
        strategy: &'static str,
        reason: &'static str,
    },
}

impl WordlistError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordlistError::InvalidMethod(_) => ErrorKind::InvalidConfiguration,
            WordlistError::EmptyCharset
            | WordlistError::EmptySlot(_)
            | WordlistError::PositionGap { .. }
            | WordlistError::DuplicatePosition(_) => ErrorKind::PreconditionViolation,
            WordlistError::CapabilityUnavailable { .. } => ErrorKind::CapabilityUnavailable,
        }
    }
}
