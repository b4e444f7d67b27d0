//! Item configuration from `key=value` query strings.
//!
//! Lets a host describe how an item is laid out with a short string, for
//! example from a template or a config file, instead of code:
//!
//! ```
//! use std::rc::Rc;
//! use seqlayout::{query, Container, EdgeInsets, Item, Layoutable, Rect, Size};
//!
//! struct Badge;
//! impl Layoutable for Badge {
//!     fn measure(&self, _fitting: Size) -> Size {
//!         Size::new(20.0, 20.0)
//!     }
//! }
//!
//! let result = query::parse("frame=container_top_right_aligned&spacing=4");
//! assert!(result.warnings.is_empty());
//!
//! let mut container = Container::new();
//! container.add_item(result.instructions.apply(Item::new(Rc::new(Badge))));
//! let trace = container.layout_traced(Rect::new(0.0, 0.0, 100.0, 100.0), EdgeInsets::ZERO, false);
//! assert_eq!(trace.placements[0].frame, Rect::new(80.0, 0.0, 20.0, 20.0));
//! ```
//!
//! # Keys
//!
//! | key | value |
//! |-----|-------|
//! | `frame` | a calculator name from [`calculators::names`](crate::calculators::names) |
//! | `sizing` | calculator used only during sizing passes |
//! | `size` | `WxH` natural size |
//! | `rect` | `x,y,w,h` fixed frame, wins over `frame` |
//! | `spacing`, `padding` | `a`, `v,h` or `t,l,b,r` |
//! | `skip`, `ignore_size`, `save_as_previous` | `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` |
//!
//! Names are case-insensitive and `-` may stand in for `_`. Anything that
//! doesn't parse is reported in [`ParseResult::warnings`] and left unset.

mod convert;
pub mod instructions;
mod parse;

pub use instructions::Instructions;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// The key is not one this module understands.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string such as `frame=container_center_aligned&padding=4,8`.
///
/// A leading `?` is ignored. Keys and values are percent-decoded.
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "query parsed with warnings");
    }
    ParseResult {
        instructions,
        warnings,
    }
}
