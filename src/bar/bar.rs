use super::config::BarConfig;
use super::state::{CustomEntry, ProgressState};
use super::style::Glyphs;
use crate::format::Format;

use std::fmt::Display;
use std::time::{Duration, Instant};

/// A progress bar: counters, timing, custom values and a compiled format.
///
/// Rate and ETA are recomputed whenever the position changes, from the time
/// elapsed since the bar was created.
#[derive(Debug, Clone)]
pub struct Bar {
    config: BarConfig,
    format: Format,
    progress: u64,
    rate: f64,
    eta: Duration,
    started: Instant,
    context: Vec<CustomEntry>,
}

impl Bar {
    /// Create a new [`Bar`] from an already compiled format.
    ///
    /// Use [`BarBuilder`](super::BarBuilder) rather than calling this directly.
    pub(crate) fn new(config: BarConfig, format: Format) -> Self {
        Self {
            config,
            format,
            progress: 0,
            rate: 0.0,
            eta: Duration::ZERO,
            started: Instant::now(),
            context: Vec::new(),
        }
    }

    /// Move to `progress`.
    pub fn set_position(&mut self, progress: u64) {
        self.update_at(progress, Instant::now());
    }

    /// Advance by `delta`.
    pub fn inc(&mut self, delta: u64) {
        self.set_position(self.progress.saturating_add(delta));
    }

    /// Move to `progress` as observed at `now`, recomputing rate and ETA.
    pub fn update_at(&mut self, progress: u64, now: Instant) {
        self.progress = progress;

        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        self.rate = if elapsed > 0.0 {
            progress as f64 / elapsed
        } else {
            0.0
        };

        self.update_eta();
    }

    /// Change the total count.
    ///
    /// The ETA is re-estimated from the current rate straight away.
    pub fn set_total(&mut self, total: u64) {
        self.config.total = total;
        self.update_eta();
    }

    // Estimates too large for a `Duration` saturate at `Duration::MAX`.
    fn update_eta(&mut self) {
        let remaining = self.config.total.saturating_sub(self.progress);
        self.eta = if remaining == 0 || self.rate <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(remaining as f64 / self.rate).unwrap_or(Duration::MAX)
        };
    }

    /// Set the value shown for a custom verb.
    ///
    /// Replaces the first entry for `verb`, or appends a new one.
    pub fn set_value(&mut self, verb: &str, value: impl Display) {
        match self.context.iter_mut().find(|entry| entry.verb() == verb) {
            Some(entry) => entry.set_value(value),
            None => self.context.push(CustomEntry::new(verb, value)),
        }
    }

    /// Return `true` once the total has been reached.
    pub fn is_finished(&self) -> bool {
        self.progress >= self.config.total
    }

    /// Render the bar's format for display.
    pub fn render(&self) -> String {
        self.format.render(self)
    }

    /// Render the debug view of the bar's format.
    pub fn debug(&self) -> String {
        self.format.debug(self)
    }

    /// Instant the bar was created.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// The compiled format this bar renders.
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// The configuration the bar was built with, including any later
    /// [`set_total`](Bar::set_total) change.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }
}

impl ProgressState for Bar {
    fn progress(&self) -> u64 {
        self.progress
    }

    fn total(&self) -> u64 {
        self.config.total
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn eta(&self) -> Duration {
        self.eta
    }

    fn width(&self) -> usize {
        self.config.width
    }

    fn glyphs(&self) -> &Glyphs {
        &self.config.glyphs
    }

    fn custom_entries(&self) -> &[CustomEntry] {
        &self.context
    }
}
