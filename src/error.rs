//! Error handling for the Tallybar library.
//!
//! Compiling a format string never fails for valid UTF-8 input and rendering
//! never fails at all, so the error surface is small: malformed input bytes
//! and invalid builder configuration.

use std::str::Utf8Error;
use thiserror::Error;

/// Errors that can happen when using Tallybar.
///
/// Tokenizing a `&str` and rendering tokens are infallible; unmatched
/// actions become literals and unresolved custom verbs fall back to their
/// name. These variants only cover input that cannot be compiled at all and
/// configuration the builder rejects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The format string is not valid UTF-8.
    ///
    /// This variant is returned by the byte-oriented entry points
    /// ([`tokenize_bytes`](crate::format::tokenize_bytes) and
    /// [`Format::from_bytes`](crate::format::Format::from_bytes)). No token
    /// sequence is produced when this is returned.
    #[error("Invalid format encoding: {source}")]
    InvalidEncoding {
        #[from]
        source: Utf8Error,
    },

    /// A custom verb name that can never be matched.
    ///
    /// This variant is returned by [`BarBuilder::build`](crate::bar::BarBuilder::build)
    /// when an empty verb was registered. An action always carries at least
    /// one character after the `:`, so an empty name never matches.
    #[error("Invalid custom verb: {0:?}")]
    InvalidVerb(String),
}

/// Result type alias for operations that can fail with a Tallybar error.
///
/// This type alias provides a convenient way to return results from Tallybar
/// operations without spelling out `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
