//! The layout container and its single forward pass.
//!
//! A pass walks the item list in order. For each item it resolves options,
//! spacing and padding, picks a frame calculator, computes the frame, hands
//! it to the observer and grows the occupied bounds. Items that opt in
//! become "previous" for the items after them; nothing else carries over
//! from one item to the next, and nothing survives the pass.
//!
//! ```
//! use std::rc::Rc;
//! use seqlayout::{Container, EdgeInsets, Item, Layoutable, Rect, Size};
//!
//! struct Label(Size);
//! impl Layoutable for Label {
//!     fn measure(&self, _fitting: Size) -> Size {
//!         self.0
//!     }
//! }
//!
//! let mut container = Container::new();
//! container.add_item(Item::new(Rc::new(Label(Size::new(80.0, 20.0)))));
//! container.add_item(
//!     Item::new(Rc::new(Label(Size::new(120.0, 30.0)))).with_spacing(EdgeInsets::top(8.0)),
//! );
//!
//! let occupied = container.layout(Rect::new(0.0, 0.0, 300.0, 1000.0), EdgeInsets::ZERO, true);
//! assert_eq!(occupied, Rect::new(0.0, 0.0, 120.0, 58.0));
//! ```

use alloc::vec::Vec;
use core::cell::Cell;

use tracing::{debug, trace, trace_span};

use crate::context::{
    ContainerDescription, FrameContext, ItemContext, LayoutOptions, ObserverContext, PreviousItem,
};
use crate::defaults::Defaults;
use crate::error::LayoutError;
use crate::geometry::{EdgeInsets, Rect, Size};
use crate::item::Item;

/// One item's placement, as recorded by [`Container::layout_traced`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Position in the item list. Skipped items leave gaps.
    pub index: usize,
    pub frame: Rect,
    pub padding: EdgeInsets,
    pub spacing: EdgeInsets,
    pub options: LayoutOptions,
}

impl Placement {
    /// Frame grown by padding: the item's share of the occupied bounds.
    pub fn padded_frame(&self) -> Rect {
        self.frame.outset_by(self.padding)
    }
}

/// Everything a pass computed, for diagnostics and rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutTrace {
    /// Container the pass ran against, after clamping.
    pub container: ContainerDescription,
    pub sizing_only: bool,
    pub placements: Vec<Placement>,
    pub occupied: Rect,
}

/// An ordered list of items plus the defaults applied to them.
///
/// Mutation needs `&mut self` and a pass borrows `&self`, so the list can't
/// change while a pass is running. For a container shared with its own
/// items see [`NestedContainer`](crate::NestedContainer).
#[derive(Debug, Default)]
pub struct Container {
    items: Vec<Item>,
    defaults: Defaults,
    needs_layout: Cell<bool>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container whose items fall back to `defaults`.
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Replace the defaults and pass them down to nested containers
    /// already in the list.
    pub fn set_defaults(&mut self, defaults: Defaults) {
        self.defaults = defaults;
        for item in &self.items {
            item.target().inherit_defaults(&self.defaults);
        }
        self.needs_layout.set(true);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Set by list changes and [`set_needs_layout`](Self::set_needs_layout),
    /// cleared when a committing pass starts.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout.get()
    }

    pub fn set_needs_layout(&self) {
        self.needs_layout.set(true);
    }

    // ---- Mutation ----

    /// Append `item`. A nested container fills its unset defaults from
    /// this container's.
    pub fn add_item(&mut self, item: Item) {
        item.target().inherit_defaults(&self.defaults);
        self.items.push(item);
        self.needs_layout.set(true);
    }

    /// Remove the first item wrapping the same target as `item`.
    ///
    /// Matching is by target identity, so a differently decorated `Item`
    /// around the same host object removes it too.
    pub fn remove_item(&mut self, item: &Item) -> Result<Item, LayoutError> {
        let index = self
            .items
            .iter()
            .position(|candidate| candidate.is_same_target(item))
            .ok_or(LayoutError::ItemNotFound)?;
        self.needs_layout.set(true);
        Ok(self.items.remove(index))
    }

    pub fn set_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items = items.into_iter().collect();
        for item in &self.items {
            item.target().inherit_defaults(&self.defaults);
        }
        self.needs_layout.set(true);
    }

    pub fn remove_all_items(&mut self) {
        self.items.clear();
        self.needs_layout.set(true);
    }

    // ---- Layout ----

    /// Run one pass and return the occupied bounds.
    ///
    /// With `sizing_only` the observers are told not to commit anything, so
    /// the pass only measures.
    pub fn layout(&self, bounds: Rect, insets: EdgeInsets, sizing_only: bool) -> Rect {
        self.run_pass(bounds, insets, sizing_only, |_| {})
    }

    /// [`layout`](Self::layout), also recording every placement.
    pub fn layout_traced(
        &self,
        bounds: Rect,
        insets: EdgeInsets,
        sizing_only: bool,
    ) -> LayoutTrace {
        let mut placements = Vec::with_capacity(self.items.len());
        let occupied = self.run_pass(bounds, insets, sizing_only, |placement| {
            placements.push(placement);
        });
        LayoutTrace {
            container: ContainerDescription::new(clamp_bounds(bounds), insets),
            sizing_only,
            placements,
            occupied,
        }
    }

    /// Size the container would need to show all of its items.
    ///
    /// Runs a sizing-only pass in `(0, 0, fitting_size)` and adds the insets
    /// to the occupied size.
    pub fn measure_ideal_size(&self, fitting_size: Size, insets: EdgeInsets) -> Size {
        let occupied = self.layout(Rect::from_size(fitting_size), insets, true);
        occupied.size().outset_by(insets)
    }

    fn run_pass(
        &self,
        bounds: Rect,
        insets: EdgeInsets,
        sizing_only: bool,
        mut record: impl FnMut(Placement),
    ) -> Rect {
        let span = trace_span!("layout_pass", items = self.items.len(), sizing_only);
        let _entered = span.enter();

        // Cleared up front so an invalidation raised by an observer survives.
        if !sizing_only {
            self.needs_layout.set(false);
        }

        let container = ContainerDescription::new(clamp_bounds(bounds), insets);
        let defaults = Some(&self.defaults);
        let mut previous: Option<PreviousItem<'_>> = None;
        let mut previous_to_previous: Option<PreviousItem<'_>> = None;
        let mut occupied = Rect::ZERO;

        for (index, item) in self.items.iter().enumerate() {
            let item_ctx = ItemContext {
                item,
                container: &container,
            };
            let options = item.resolved_options(&item_ctx, defaults);
            if options.should_skip_layout {
                trace!(index, "skipped");
                continue;
            }
            let spacing = item.resolved_spacing(&item_ctx, defaults);
            let padding = item.resolved_padding(&item_ctx, defaults);

            let calculator = item.resolved_frame_calculator(defaults, sizing_only);
            let ctx = FrameContext::new(item, &container)
                .padding(padding)
                .spacing(spacing)
                .previous(previous)
                .previous_to_previous(previous_to_previous)
                .sizing_only(sizing_only)
                .defaults(defaults);
            let frame = calculator(&ctx);
            trace!(
                index,
                x = frame.x,
                y = frame.y,
                width = frame.width,
                height = frame.height,
                "placed"
            );

            item.observe(
                &ObserverContext {
                    item,
                    frame,
                    sizing_only,
                },
                defaults,
            );

            if !options.should_ignore_when_calculating_size {
                let padded = frame.outset_by(padding);
                if occupied.is_empty() {
                    occupied = padded;
                } else if !frame.is_empty() {
                    occupied = occupied.union(&padded);
                }
            }

            if options.save_as_previous {
                previous_to_previous = previous;
                previous = Some(PreviousItem {
                    item,
                    content_bounds: frame,
                    spacing,
                    padding,
                });
            }

            record(Placement {
                index,
                frame,
                padding,
                spacing,
                options,
            });
        }

        debug!(
            x = occupied.x,
            y = occupied.y,
            width = occupied.width,
            height = occupied.height,
            "pass complete"
        );
        occupied
    }
}

/// Keep pass bounds finite so calculators can add, subtract and halve them.
fn clamp_bounds(bounds: Rect) -> Rect {
    bounds.with_size(bounds.size().clamped())
}
