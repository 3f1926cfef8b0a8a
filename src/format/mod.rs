//! Format module containing the template compiler and its tokens.
//!
//! A format string such as `":bar :percent eta :eta"` is compiled once into
//! a [`Format`], which keeps the resulting [`Tokens`] and re-renders them
//! against a [`ProgressState`] on every redraw.
//!
//! # Overview
//!
//! - `tokenizer` - Turns a template and a list of custom verbs into tokens
//! - `token` - The closed set of tokens and their render/debug output
//!
//! # Examples
//!
//! ```rust
//! use tallybar::format::Format;
//!
//! let format = Format::new(":bar :file", &["file"]);
//! assert_eq!(format.tokens().len(), 3);
//! assert_eq!(format.source(), ":bar :file");
//! ```

pub(crate) mod token;
pub(crate) mod tokenizer;

pub use token::{Token, Tokens};
pub use tokenizer::{tokenize, tokenize_bytes, ACTION_TRIGGER, STANDARD_VERBS};

use crate::bar::ProgressState;
use crate::error::Result;

use std::convert::Infallible;
use std::str::FromStr;
use tracing::debug;

/// A compiled format string.
///
/// Compiling happens once, in [`Format::new`]. Rendering only walks the
/// stored tokens, so a format can be rendered on every redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// The template the tokens were compiled from.
    source: String,
    /// Compiled tokens, in render order.
    tokens: Tokens,
}

impl Format {
    /// Compile `source` with the given custom verbs.
    ///
    /// This never fails: text that does not form a verb is kept as a literal.
    pub fn new<S: AsRef<str>>(source: &str, custom_verbs: &[S]) -> Self {
        let tokens = tokenize(source, custom_verbs);
        debug!("Compiled format {:?} into {} tokens", source, tokens.len());
        Self {
            source: source.to_string(),
            tokens,
        }
    }

    /// Compile a format given as raw bytes, rejecting invalid UTF-8.
    ///
    /// On error no tokens are produced at all.
    pub fn from_bytes<S: AsRef<str>>(source: &[u8], custom_verbs: &[S]) -> Result<Self> {
        let source = std::str::from_utf8(source)?;
        Ok(Self::new(source, custom_verbs))
    }

    /// Render the format for display.
    pub fn render<S: ProgressState + ?Sized>(&self, state: &S) -> String {
        self.tokens.render(state)
    }

    /// Render the debug view of every token.
    pub fn debug<S: ProgressState + ?Sized>(&self, state: &S) -> String {
        self.tokens.debug(state)
    }

    /// The template the format was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled tokens, in render order.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }
}

/// Compile a format with no custom verbs.
///
/// Parsing cannot fail, hence the [`Infallible`] error type. Use
/// [`Format::from_bytes`] when the input may not be valid UTF-8.
impl FromStr for Format {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Format::new(s, &[] as &[&str]))
    }
}
