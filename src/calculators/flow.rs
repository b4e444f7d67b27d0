//! Flow: place beside the previous item, or wrap onto a new row.
//!
//! Flows are the one calculator family whose composition depends on
//! geometry. The "beside" placement is computed first; if it would run past
//! the container's usable edge the "wrap" placement is computed and used
//! instead. The wrapped row starts below the previous item, so flows suit
//! items of similar or increasing height.

use super::primitives::crop_to_container_reflowing;
use super::stacks::*;
use crate::context::FrameContext;
use crate::geometry::Rect;

/// Place with `beside`, falling back to `wrap` when the far right edge
/// (plus the item's right padding) would pass the container's usable right.
pub fn flow_with(
    ctx: &FrameContext<'_>,
    beside: impl FnOnce(&FrameContext<'_>) -> Rect,
    wrap: impl FnOnce(&FrameContext<'_>) -> Rect,
) -> Rect {
    let rect = beside(ctx);
    if overflows_right(ctx, &rect) {
        wrap(ctx)
    } else {
        rect
    }
}

/// Right-to-left counterpart of [`flow_with`]: wraps when the left edge
/// (minus the item's left padding) would pass the container's usable left.
pub fn flow_leftward_with(
    ctx: &FrameContext<'_>,
    beside: impl FnOnce(&FrameContext<'_>) -> Rect,
    wrap: impl FnOnce(&FrameContext<'_>) -> Rect,
) -> Rect {
    let rect = beside(ctx);
    if overflows_left(ctx, &rect) {
        wrap(ctx)
    } else {
        rect
    }
}

/// Build a flow calculator from any two calculators.
///
/// ```
/// use std::rc::Rc;
/// use seqlayout::{Item, Layoutable, calculators};
///
/// struct Chip;
/// impl Layoutable for Chip {}
///
/// let item = Item::new(Rc::new(Chip)).with_frame_calculator(calculators::flow(
///     calculators::container_top_aligned_hstack,
///     calculators::container_left_aligned_vstack,
/// ));
/// assert!(item.decoration().frame.is_some());
/// ```
pub fn flow<B, W>(beside: B, wrap: W) -> impl Fn(&FrameContext<'_>) -> Rect + Clone
where
    B: Fn(&FrameContext<'_>) -> Rect + Clone,
    W: Fn(&FrameContext<'_>) -> Rect + Clone,
{
    move |ctx: &FrameContext<'_>| flow_with(ctx, &beside, &wrap)
}

/// Wrap any calculator in a crop to the container with text reflow.
pub fn cropped<C>(calculator: C) -> impl Fn(&FrameContext<'_>) -> Rect + Clone
where
    C: Fn(&FrameContext<'_>) -> Rect + Clone,
{
    move |ctx: &FrameContext<'_>| crop_to_container_reflowing(ctx, calculator(ctx))
}

/// ```text
/// ┌────────────────────────────┐
/// │  ┌───────┐ ┌───────┐       │
/// │  │ prev1 │ │ prev2 │       │
/// │  └───────┘ └───────┘       │
/// │  ┌──────────────┐          │
/// │  │ curr         │          │
/// │  └──────────────┘          │
/// └────────────────────────────┘
/// ```
pub fn top_aligned_flow(ctx: &FrameContext<'_>) -> Rect {
    flow_with(ctx, top_aligned_hstack, container_left_aligned_vstack)
}

pub fn bottom_aligned_flow(ctx: &FrameContext<'_>) -> Rect {
    flow_with(ctx, bottom_aligned_hstack, container_left_aligned_vstack)
}

pub fn center_aligned_flow(ctx: &FrameContext<'_>) -> Rect {
    flow_with(ctx, center_aligned_hstack, container_left_aligned_vstack)
}

/// Right-to-left rows starting at the container's right edge.
pub fn top_aligned_flow_left(ctx: &FrameContext<'_>) -> Rect {
    flow_leftward_with(ctx, top_aligned_hstack_left, container_right_aligned_vstack)
}

/// Beside the previous item, cropped to the container with text reflow.
pub fn top_aligned_hstack_reflowing(ctx: &FrameContext<'_>) -> Rect {
    crop_to_container_reflowing(ctx, top_aligned_hstack(ctx))
}

fn overflows_right(ctx: &FrameContext<'_>, rect: &Rect) -> bool {
    rect.max_x() + ctx.padding.right > ctx.container.usable_right()
}

fn overflows_left(ctx: &FrameContext<'_>, rect: &Rect) -> bool {
    rect.min_x() - ctx.padding.left < ctx.container.usable_left()
}
