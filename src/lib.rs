//! Tallybar compiles progress bar format strings into tokens and renders them
//! against live progress state.
//!
//! # Quick Start
//!
//! ```rust
//! use tallybar::{BarBuilder, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = BarBuilder::new()
//!     .total(4)
//!     .width(8)
//!     .format(":bar :percent :file")
//!     .custom_verb("file")
//!     .build()?;
//!
//! bar.set_value("file", "data.csv");
//! bar.inc(1);
//! assert_eq!(bar.render(), "[=>      ] 25.0% data.csv");
//! # Ok(())
//! # }
//! ```
//!
//! # Format Strings
//!
//! A format string is split on spaces and on the `:` action trigger. A `:`
//! followed by a verb name renders dynamic content:
//!
//! - `:bar` - the bar itself
//! - `:percent` - fraction complete, e.g. `25.7%`
//! - `:rate` - units per second, e.g. `12.5`
//! - `:eta` - estimated time remaining, e.g. `3 seconds`
//! - `:name` - the value set for a registered custom verb `name`
//!
//! Everything else, including a `:` that does not lead to a known verb, is
//! printed as is.
//!
//! # Module Organization
//!
//! - [`format`] - The tokenizer, tokens and compiled [`Format`]
//! - [`bar`] - Progress state, bar glyphs, configuration and the [`Bar`]
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod bar;
pub mod error;
pub mod format;

pub use bar::{Bar, BarBuilder, BarConfig, CustomEntry, Glyphs, ProgressState};
pub use error::{Error, Result};
pub use format::{tokenize, tokenize_bytes, Format, Token, Tokens};
