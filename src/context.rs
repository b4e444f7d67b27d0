//! Per-pass snapshots handed to calculators and observers.
//!
//! Everything here is created fresh for each layout pass and thrown away
//! when the pass ends. Calculators only ever see shared references.

use crate::defaults::Defaults;
use crate::geometry::{EdgeInsets, Rect, Size};
use crate::item::Item;

/// Options that fine-tune how an item takes part in a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutOptions {
    /// Exclude the item from the pass entirely.
    pub should_skip_layout: bool,
    /// Place and observe the item but leave it out of the occupied bounds.
    /// Useful for backgrounds and decoration that overflow on purpose.
    pub should_ignore_when_calculating_size: bool,
    /// When false the next item keeps seeing the current "previous".
    pub save_as_previous: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            should_skip_layout: false,
            should_ignore_when_calculating_size: false,
            save_as_previous: true,
        }
    }
}

impl LayoutOptions {
    /// Options that skip the item.
    pub fn skipped() -> Self {
        Self {
            should_skip_layout: true,
            ..Self::default()
        }
    }

    /// Options that keep the item out of the occupied bounds.
    pub fn ignored_for_size() -> Self {
        Self {
            should_ignore_when_calculating_size: true,
            ..Self::default()
        }
    }

    /// Options that don't replace the current "previous" item.
    pub fn not_saved_as_previous() -> Self {
        Self {
            save_as_previous: false,
            ..Self::default()
        }
    }
}

/// The container an item is being laid out in.
///
/// ```text
/// ┌────────────────────────────┐
/// │  ┌──────────────────────┐  │
/// │  │                      │ ──────── layout_insets
/// │  │  usable rect         │  │
/// │  │                      │  │──── layout_bounds
/// │  └──────────────────────┘  │
/// └────────────────────────────┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContainerDescription {
    pub layout_bounds: Rect,
    pub layout_insets: EdgeInsets,
}

impl ContainerDescription {
    pub fn new(layout_bounds: Rect, layout_insets: EdgeInsets) -> Self {
        Self {
            layout_bounds,
            layout_insets,
        }
    }

    /// Bounds minus insets: where items are expected to go.
    pub fn usable_rect(&self) -> Rect {
        self.layout_bounds.inset_by(self.layout_insets)
    }

    pub fn usable_left(&self) -> f64 {
        self.layout_bounds.min_x() + self.layout_insets.left
    }

    pub fn usable_right(&self) -> f64 {
        self.layout_bounds.max_x() - self.layout_insets.right
    }

    pub fn usable_top(&self) -> f64 {
        self.layout_bounds.min_y() + self.layout_insets.top
    }

    pub fn usable_bottom(&self) -> f64 {
        self.layout_bounds.max_y() - self.layout_insets.bottom
    }
}

/// Snapshot of an item placed earlier in the same pass.
#[derive(Copy, Clone, Debug)]
pub struct PreviousItem<'a> {
    pub item: &'a Item,
    /// Frame returned by the item's calculator.
    pub content_bounds: Rect,
    pub spacing: EdgeInsets,
    pub padding: EdgeInsets,
}

impl PreviousItem<'_> {
    /// Content bounds grown by the item's padding: what it looks like on screen.
    pub fn padded_bounds(&self) -> Rect {
        self.content_bounds.outset_by(self.padding)
    }
}

/// Arguments to a size calculator.
#[derive(Copy, Clone, Debug)]
pub struct SizeContext<'a> {
    pub item: &'a Item,
    pub container: &'a ContainerDescription,
    /// Space available to the item. Either axis may be [`UNBOUNDED`](crate::UNBOUNDED).
    pub fitting_size: Size,
}

/// Arguments to spacing, padding and options calculators.
#[derive(Copy, Clone, Debug)]
pub struct ItemContext<'a> {
    pub item: &'a Item,
    pub container: &'a ContainerDescription,
}

/// Arguments to a layout observer.
#[derive(Copy, Clone, Debug)]
pub struct ObserverContext<'a> {
    pub item: &'a Item,
    pub frame: Rect,
    /// When true the observer must leave the item untouched.
    pub sizing_only: bool,
}

/// Everything a frame calculator may look at when placing one item.
#[derive(Copy, Clone, Debug)]
pub struct FrameContext<'a> {
    pub item: &'a Item,
    pub padding: EdgeInsets,
    pub spacing: EdgeInsets,
    pub container: &'a ContainerDescription,
    pub previous: Option<PreviousItem<'a>>,
    pub previous_to_previous: Option<PreviousItem<'a>>,
    pub sizing_only: bool,
    defaults: Option<&'a Defaults>,
}

impl<'a> FrameContext<'a> {
    /// Context with no previous items, zero spacing and padding.
    pub fn new(item: &'a Item, container: &'a ContainerDescription) -> Self {
        Self {
            item,
            padding: EdgeInsets::ZERO,
            spacing: EdgeInsets::ZERO,
            container,
            previous: None,
            previous_to_previous: None,
            sizing_only: false,
            defaults: None,
        }
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn spacing(mut self, spacing: EdgeInsets) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn previous(mut self, previous: Option<PreviousItem<'a>>) -> Self {
        self.previous = previous;
        self
    }

    pub fn previous_to_previous(mut self, previous: Option<PreviousItem<'a>>) -> Self {
        self.previous_to_previous = previous;
        self
    }

    pub fn sizing_only(mut self, sizing_only: bool) -> Self {
        self.sizing_only = sizing_only;
        self
    }

    /// Container defaults consulted when the item has no size calculator.
    pub fn defaults(mut self, defaults: Option<&'a Defaults>) -> Self {
        self.defaults = defaults;
        self
    }

    /// The item's natural size within `fitting_size`.
    pub fn measure(&self, fitting_size: Size) -> Size {
        self.item.resolved_size(
            &SizeContext {
                item: self.item,
                container: self.container,
                fitting_size,
            },
            self.defaults,
        )
    }
}
