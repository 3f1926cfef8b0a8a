//! Format string tokenizer.
//!
//! The grammar is deliberately small. A space is its own token, `:` starts an
//! action verb, and anything else is literal text running up to the next
//! separator (a space, a `:`, or the end of input).
//!
//! Action verbs are matched greedily from the left: after every character the
//! candidate is compared against the standard verbs (`bar`, `percent`,
//! `rate`, `eta`) and then the registered custom verbs, and the first match is
//! emitted straight away. A candidate that reaches a separator without
//! matching is kept as a literal, trigger included.
//!
//! # Examples
//!
//! ```rust
//! use tallybar::format::{tokenize, Token};
//!
//! let tokens = tokenize(":bar :file done", &["file"]);
//! assert_eq!(
//!     tokens.as_slice(),
//!     &[
//!         Token::Bar,
//!         Token::Space,
//!         Token::CustomVerb { verb: "file".into() },
//!         Token::Space,
//!         Token::Literal { content: "done".into() },
//!     ]
//! );
//! ```

use super::token::{Token, Tokens};
use crate::error::Result;

use std::iter::Peekable;
use std::str::Chars;

/// Character that starts an action verb.
pub const ACTION_TRIGGER: char = ':';

/// Names of the built-in verbs, in matching order.
pub const STANDARD_VERBS: [&str; 4] = ["bar", "percent", "rate", "eta"];

/// Compile a format string into a token sequence.
///
/// Standard verbs take precedence over custom verbs of the same name.
pub fn tokenize<S: AsRef<str>>(format: &str, custom_verbs: &[S]) -> Tokens {
    Scanner::new(format, custom_verbs).collect()
}

/// Compile a format string given as raw bytes.
///
/// Returns [`Error::InvalidEncoding`](crate::Error::InvalidEncoding) if the
/// bytes are not valid UTF-8.
pub fn tokenize_bytes<S: AsRef<str>>(format: &[u8], custom_verbs: &[S]) -> Result<Tokens> {
    let format = std::str::from_utf8(format)?;
    Ok(tokenize(format, custom_verbs))
}

/// Look up a complete verb name.
fn verb_token<S: AsRef<str>>(name: &str, custom_verbs: &[S]) -> Option<Token> {
    match name {
        "bar" => return Some(Token::Bar),
        "percent" => return Some(Token::Percent),
        "rate" => return Some(Token::Rate),
        "eta" => return Some(Token::Eta),
        _ => {}
    }

    custom_verbs
        .iter()
        .map(|verb| verb.as_ref())
        .find(|verb| *verb == name)
        .map(|verb| Token::CustomVerb {
            verb: verb.to_string(),
        })
}

fn is_separator(c: Option<&char>) -> bool {
    matches!(c, None | Some(&' ') | Some(&ACTION_TRIGGER))
}

/// Single pass scanner yielding one token per call to `next`.
struct Scanner<'a, S> {
    chars: Peekable<Chars<'a>>,
    custom_verbs: &'a [S],
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    fn new(format: &'a str, custom_verbs: &'a [S]) -> Self {
        Self {
            chars: format.chars().peekable(),
            custom_verbs,
        }
    }

    fn read_action(&mut self) -> Token {
        let mut verb = String::new();

        // The first character after the trigger is always taken, even a
        // separator. Every candidate is checked right after it grows, so
        // reaching a separator means it did not match.
        while let Some(c) = self.chars.next() {
            verb.push(c);

            if let Some(token) = verb_token(&verb, self.custom_verbs) {
                return token;
            }

            if is_separator(self.chars.peek()) {
                break;
            }
        }

        Token::Literal {
            content: format!("{ACTION_TRIGGER}{verb}"),
        }
    }

    fn read_literal(&mut self, prefix: char) -> Token {
        let mut content = String::from(prefix);

        while !is_separator(self.chars.peek()) {
            if let Some(c) = self.chars.next() {
                content.push(c);
            }
        }

        Token::Literal { content }
    }
}

impl<S: AsRef<str>> Iterator for Scanner<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = match self.chars.next()? {
            ' ' => Token::Space,
            ACTION_TRIGGER => self.read_action(),
            c => self.read_literal(c),
        };
        Some(token)
    }
}
