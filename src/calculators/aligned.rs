//! Corner and center alignment, to the container or on top of the previous item.

use super::primitives::*;
use crate::context::FrameContext;
use crate::geometry::Rect;

// ---- Container corners and center ----

pub fn container_center_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_center_y(ctx, align_to_container_center_x(ctx, origin(ctx)))
}

/// Natural size in the container's top-left corner.
pub fn container_top_left_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_top(ctx, align_to_container_left(ctx, origin(ctx)))
}

pub fn container_top_right_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_top(ctx, align_to_container_right(ctx, origin(ctx)))
}

pub fn container_bottom_left_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_bottom(ctx, align_to_container_left(ctx, origin(ctx)))
}

pub fn container_bottom_right_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_bottom(ctx, align_to_container_right(ctx, origin(ctx)))
}

// ---- Previous item corners and center ----
//
// These overlay the previous item: badges, labels on images and the like.
// Pair with `LayoutOptions::not_saved_as_previous` to overlay several.

pub fn center_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_center_y(ctx, align_to_previous_center_x(ctx, origin(ctx)))
}

pub fn top_left_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_top(ctx, align_to_previous_left(ctx, origin(ctx)))
}

pub fn top_right_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_top(ctx, align_to_previous_right(ctx, origin(ctx)))
}

pub fn bottom_left_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_bottom(ctx, align_to_previous_left(ctx, origin(ctx)))
}

pub fn bottom_right_aligned(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_bottom(ctx, align_to_previous_right(ctx, origin(ctx)))
}
