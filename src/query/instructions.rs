//! Parsed item configuration.

use alloc::string::String;

use crate::context::LayoutOptions;
use crate::geometry::{EdgeInsets, Rect, Size};

/// Item configuration parsed from a query string.
///
/// Every field is optional; unset fields leave the item's own decoration
/// and the container defaults in charge. Calculator names are stored in
/// their canonical form and are known to resolve.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Frame calculator name.
    pub frame: Option<String>,
    /// Frame calculator used only during sizing passes.
    pub sizing_frame: Option<String>,
    pub size: Option<Size>,
    /// Fixed frame. Takes precedence over [`frame`](Self::frame).
    pub rect: Option<Rect>,
    pub spacing: Option<EdgeInsets>,
    pub padding: Option<EdgeInsets>,
    pub skip: Option<bool>,
    pub ignore_size: Option<bool>,
    pub save_as_previous: Option<bool>,
}

impl Instructions {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing was set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layout options, if any of the option keys was given. Keys that were
    /// not given keep their default.
    pub fn options(&self) -> Option<LayoutOptions> {
        if self.skip.is_none() && self.ignore_size.is_none() && self.save_as_previous.is_none() {
            return None;
        }
        let defaults = LayoutOptions::default();
        Some(LayoutOptions {
            should_skip_layout: self.skip.unwrap_or(defaults.should_skip_layout),
            should_ignore_when_calculating_size: self
                .ignore_size
                .unwrap_or(defaults.should_ignore_when_calculating_size),
            save_as_previous: self.save_as_previous.unwrap_or(defaults.save_as_previous),
        })
    }
}
