//! Renderable tokens produced by the tokenizer.
//!
//! A [`Token`] is either fixed text (a space or a literal run) or a verb that
//! pulls its content from a [`ProgressState`] on every redraw. Each token can
//! be rendered for display or for debugging.
//!
//! # Examples
//!
//! ```rust
//! use tallybar::format::{tokenize, Token};
//!
//! let tokens = tokenize(":bar :percent", &[] as &[&str]);
//! assert_eq!(tokens.as_slice(), &[Token::Bar, Token::Space, Token::Percent]);
//! ```

use crate::bar::ProgressState;

use indicatif::HumanDuration;
use tracing::warn;

/// A single unit of a compiled format string.
///
/// The set of tokens is closed: the tokenizer only ever produces these
/// variants, and [`render`](Token::render) and [`debug`](Token::debug) match
/// on all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single space.
    ///
    /// Every space in the format string becomes its own token, so runs of
    /// spaces are kept as written.
    Space,
    /// The progress bar itself, written as `:bar`.
    ///
    /// Drawn between the start and end caps, `width` cells wide plus the
    /// head, from the state's [`Glyphs`](crate::bar::Glyphs).
    Bar,
    /// Fraction complete as a percentage, written as `:percent`.
    ///
    /// Always one decimal place, e.g. `25.7%`.
    Percent,
    /// Current rate in units per second, written as `:rate`.
    ///
    /// Always one decimal place, with no unit attached.
    Rate,
    /// Estimated time remaining, written as `:eta`.
    ///
    /// Formatted with [`HumanDuration`], e.g. `3 seconds`.
    Eta,
    /// A user registered verb, resolved against the state's custom entries.
    ///
    /// When no entry matches, the verb name itself is rendered and a WARN
    /// event is logged through `tracing`.
    CustomVerb {
        /// Name of the verb, never empty.
        verb: String,
    },
    /// Verbatim text.
    ///
    /// This includes actions that never matched a verb, which keep their
    /// leading `:`.
    Literal {
        /// The text to print.
        content: String,
    },
}

impl Token {
    /// Render the token for display.
    ///
    /// This is a pure function of the token and `state`, except for an
    /// unresolved [`Token::CustomVerb`]. That case renders the verb name and
    /// emits a `tracing` WARN event (`unresolved custom verb, rendering its
    /// name`). The library installs no subscriber: the caller must install
    /// one, for example `tracing_subscriber` writing to stderr, for the
    /// diagnostic to appear on the error stream.
    pub fn render<S: ProgressState + ?Sized>(&self, state: &S) -> String {
        match self {
            Token::Space => " ".to_string(),
            Token::Bar => render_bar(state),
            Token::Percent => format!("{:.1}%", state.fraction() * 100.0),
            Token::Rate => format!("{:.1}", state.rate()),
            Token::Eta => HumanDuration(state.eta()).to_string(),
            Token::CustomVerb { verb } => match state
                .custom_entries()
                .iter()
                .find(|entry| entry.verb() == verb)
            {
                Some(entry) => entry.value().to_string(),
                None => {
                    warn!(verb = %verb, "unresolved custom verb, rendering its name");
                    verb.clone()
                }
            },
            Token::Literal { content } => content.clone(),
        }
    }

    /// Render the token as a tag describing what it is and what it resolved to.
    ///
    /// Spaces stay plain spaces; every other token becomes a tag such as
    /// `<bar progress=3 total=10>` or `<percent "25.7%">`.
    pub fn debug<S: ProgressState + ?Sized>(&self, state: &S) -> String {
        match self {
            Token::Space => " ".to_string(),
            Token::Bar => format!(
                "<bar progress={} total={}>",
                state.progress(),
                state.total()
            ),
            Token::Percent => format!("<percent {:?}>", self.render(state)),
            Token::Rate => format!("<rate {:?}>", self.render(state)),
            Token::Eta => format!("<eta {:?}>", self.render(state)),
            Token::CustomVerb { verb } => {
                format!("<custom verb={:?} value={:?}>", verb, self.render(state))
            }
            Token::Literal { content } => format!("<literal {:?}>", content),
        }
    }
}

// The head always takes the last completed cell, so a full bar shows
// `width - 1` complete glyphs followed by the head.
fn render_bar<S: ProgressState + ?Sized>(state: &S) -> String {
    let width = state.width();
    let glyphs = state.glyphs();
    let complete = ((state.fraction() * width as f64).floor() as usize).min(width);

    let mut out = String::new();
    out.push_str(glyphs.start());
    out.push_str(&glyphs.complete().repeat(complete.saturating_sub(1)));
    out.push_str(glyphs.head());
    out.push_str(&glyphs.incomplete().repeat(width - complete));
    out.push_str(glyphs.end());
    out
}

/// An ordered, immutable sequence of [`Token`]s.
///
/// The order is the render order. A sequence is built once by the tokenizer
/// and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    /// Render every token in order and concatenate the results.
    pub fn render<S: ProgressState + ?Sized>(&self, state: &S) -> String {
        self.0.iter().map(|token| token.render(state)).collect()
    }

    /// Concatenate the debug form of every token, without extra separators.
    pub fn debug<S: ProgressState + ?Sized>(&self, state: &S) -> String {
        self.0.iter().map(|token| token.debug(state)).collect()
    }

    /// Iterate over the tokens in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// The tokens as a slice, in render order.
    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the format string was empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Tokens(tokens)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
