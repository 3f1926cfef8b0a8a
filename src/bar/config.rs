//! Configuration structures and defaults for a [`Bar`](super::Bar).

use super::style::Glyphs;

/// Configuration structure for a bar.
///
/// Usually filled in through [`BarBuilder`](super::BarBuilder). The defaults
/// are a total of 100, a 40 cell wide [`Glyphs::classic`] bar and the
/// [`FORMAT_DEFAULT`](BarConfig::FORMAT_DEFAULT) format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    /// Total count the bar progresses towards.
    pub total: u64,
    /// Number of cells between the caps.
    pub width: usize,
    /// Glyphs used to draw the bar.
    pub glyphs: Glyphs,
    /// Format string compiled when the bar is built.
    pub format: String,
    /// Custom verbs recognised by the format, in registration order.
    ///
    /// Standard verbs are matched first, so a custom verb named `bar`,
    /// `percent`, `rate` or `eta` is never reached.
    pub custom_verbs: Vec<String>,
}

impl BarConfig {
    /// Bar followed by the percentage, e.g. `[====>     ] 50.0%`.
    pub const FORMAT_DEFAULT: &'static str = ":bar :percent";
    /// Everything the standard verbs can show.
    ///
    /// `[==>       ] 30.0% 12.5/s eta 6 seconds`
    pub const FORMAT_VERBOSE: &'static str = ":bar :percent :rate/s eta :eta";
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            total: 100,
            width: 40,
            glyphs: Glyphs::default(),
            format: BarConfig::FORMAT_DEFAULT.into(),
            custom_verbs: Vec::new(),
        }
    }
}
