//! Builder pattern implementation for creating [`Bar`] instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use tallybar::bar::{BarBuilder, Glyphs};
//!
//! # fn main() -> tallybar::Result<()> {
//! let bar = BarBuilder::new()
//!     .total(200)
//!     .width(20)
//!     .glyphs(Glyphs::line())
//!     .format(":bar :percent eta :eta")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Verbs
//!
//! ```rust
//! use tallybar::bar::BarBuilder;
//!
//! # fn main() -> tallybar::Result<()> {
//! let mut bar = BarBuilder::new()
//!     .format(":file :bar")
//!     .custom_verb("file")
//!     .build()?;
//! bar.set_value("file", "archive.zip");
//! assert!(bar.render().starts_with("archive.zip ["));
//! # Ok(())
//! # }
//! ```

use super::{bar::Bar, config::BarConfig, style::Glyphs};
use crate::error::{Error, Result};
use crate::format::{Format, STANDARD_VERBS};

use tracing::debug;

/// A builder used to create a [`Bar`].
#[derive(Debug, Default)]
pub struct BarBuilder {
    config: BarConfig,
}

impl BarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        BarBuilder::default()
    }

    /// Set the total count.
    pub fn total(mut self, total: u64) -> Self {
        self.config.total = total;
        self
    }

    /// Set the number of cells between the caps.
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Set the bar glyphs.
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.config.glyphs = glyphs;
        self
    }

    /// Set the format string.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    /// Register a custom verb.
    ///
    /// Verbs are matched in registration order. A verb named like a standard
    /// verb is accepted but never matched.
    pub fn custom_verb(mut self, verb: impl Into<String>) -> Self {
        self.config.custom_verbs.push(verb.into());
        self
    }

    /// Register several custom verbs at once.
    pub fn custom_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .custom_verbs
            .extend(verbs.into_iter().map(Into::into));
        self
    }

    /// Validate the configuration, compile the format and create the [`Bar`].
    pub fn build(self) -> Result<Bar> {
        for verb in &self.config.custom_verbs {
            if verb.is_empty() {
                return Err(Error::InvalidVerb(verb.clone()));
            }
            if STANDARD_VERBS.contains(&verb.as_str()) {
                debug!("Custom verb {:?} is shadowed by the standard verb", verb);
            }
        }

        let format = Format::new(&self.config.format, self.config.custom_verbs.as_slice());
        Ok(Bar::new(self.config, format))
    }
}
