//! The read-only view of progress that tokens render from.

use super::style::Glyphs;

use std::fmt::Display;
use std::time::Duration;

/// Everything a [`Token`](crate::format::Token) may read while rendering.
pub trait ProgressState {
    /// Current count.
    fn progress(&self) -> u64;

    /// Total count.
    fn total(&self) -> u64;

    /// Current rate, in units per second.
    fn rate(&self) -> f64;

    /// Estimated time remaining.
    fn eta(&self) -> Duration;

    /// Number of cells the bar spans, caps excluded.
    fn width(&self) -> usize;

    /// Glyphs used to draw the bar.
    fn glyphs(&self) -> &Glyphs;

    /// Values for custom verbs. Lookups scan in order and take the first match.
    fn custom_entries(&self) -> &[CustomEntry];

    /// Progress divided by total, clamped to `[0, 1]`.
    ///
    /// A zero total counts as no progress.
    fn fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.progress() as f64 / total as f64).clamp(0.0, 1.0),
        }
    }
}

/// A value shown in place of a custom verb.
///
/// The value is stringified when the entry is created or updated, so
/// rendering only copies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEntry {
    verb: String,
    value: String,
}

impl CustomEntry {
    /// Create an entry for `verb`.
    pub fn new(verb: impl Into<String>, value: impl Display) -> Self {
        Self {
            verb: verb.into(),
            value: value.to_string(),
        }
    }

    /// Name of the verb this entry resolves.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// The rendered value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: impl Display) {
        self.value = value.to_string();
    }
}
