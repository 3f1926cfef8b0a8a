//! Bar module containing the progress state that formats render from.
//!
//! # Overview
//!
//! - `state` - The [`ProgressState`] trait tokens read from, and custom entries
//! - `style` - Bar glyph sets
//! - `config` - Bar configuration and defaults
//! - `builder` - The [`BarBuilder`] used to create a [`Bar`]
//! - `bar` - The [`Bar`] itself
//!
//! # Examples
//!
//! ```rust
//! use tallybar::bar::{BarBuilder, Glyphs};
//!
//! # fn main() -> tallybar::Result<()> {
//! let mut bar = BarBuilder::new()
//!     .total(10)
//!     .width(10)
//!     .glyphs(Glyphs::classic())
//!     .build()?;
//!
//! bar.inc(5);
//! assert_eq!(bar.render(), "[====>     ] 50.0%");
//! # Ok(())
//! # }
//! ```

pub(crate) mod bar;
pub(crate) mod builder;
pub(crate) mod config;
pub(crate) mod state;
pub(crate) mod style;

pub use bar::Bar;
pub use builder::BarBuilder;
pub use config::BarConfig;
pub use state::{CustomEntry, ProgressState};
pub use style::Glyphs;
