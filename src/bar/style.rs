//! Bar glyph sets.
//!
//! A bar is drawn from five pieces: the start and end caps, the glyph for
//! completed cells, the head marking the current position, and the glyph for
//! remaining cells.
//!
//! # Examples
//!
//! ```rust
//! use tallybar::bar::Glyphs;
//!
//! // `[=====>    ]`
//! let classic = Glyphs::classic();
//!
//! // Custom glyphs.
//! let arrows = Glyphs::new("|", "|", "-", ">", ".");
//! assert_eq!(arrows.head(), ">");
//! ```

/// The glyphs used to draw a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    /// Left cap.
    start: String,
    /// Right cap.
    end: String,
    /// Completed cells.
    complete: String,
    /// Current position.
    head: String,
    /// Remaining cells.
    incomplete: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::classic()
    }
}

impl Glyphs {
    /// Create a new [`Glyphs`].
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        complete: impl Into<String>,
        head: impl Into<String>,
        incomplete: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            complete: complete.into(),
            head: head.into(),
            incomplete: incomplete.into(),
        }
    }

    /// `[=====>    ]`
    pub fn classic() -> Self {
        Glyphs::new("[", "]", "=", ">", " ")
    }

    /// `▕████▌    ▏`
    pub fn blocky() -> Self {
        Glyphs::new("▕", "▏", "█", "▌", " ")
    }

    /// `━━━━━╾────`, without caps.
    pub fn line() -> Self {
        Glyphs::new("", "", "━", "╾", "─")
    }

    /// `|▓▓▓▓▒░░░░|`
    pub fn fade_in() -> Self {
        Glyphs::new("|", "|", "▓", "▒", "░")
    }

    /// Left cap, drawn before the first cell.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Right cap, drawn after the last cell.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Glyph repeated for completed cells.
    pub fn complete(&self) -> &str {
        &self.complete
    }

    /// Glyph marking the current position.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Glyph repeated for remaining cells.
    pub fn incomplete(&self) -> &str {
        &self.incomplete
    }
}
