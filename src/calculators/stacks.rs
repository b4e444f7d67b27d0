//! Vertical and horizontal stacks.
//!
//! A stack places each item next to the previous one along the main axis
//! and aligns it on the cross axis, either to the container or to the
//! previous item. `_up` variants stack upward, `_left` variants leftward.

use super::primitives::*;
use crate::context::FrameContext;
use crate::geometry::Rect;

// ============================================================================
// Container-aligned vertical stacks
// ============================================================================

/// ```text
/// ┌────────────────────────────┐
/// │  ┌────────┐                │
/// │  │ prev   │                │
/// │  └────────┘                │
/// │  ┌──────────────┐          │
/// │  │ curr         │          │
/// │  └──────────────┘          │
/// └────────────────────────────┘
/// ```
///
/// Below the previous item, along the container's left edge. This is what
/// an item without a frame calculator gets.
pub fn container_left_aligned_vstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_left(ctx, align_below_previous(ctx, origin(ctx)))
}

pub fn container_left_aligned_vstack_up(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_left(ctx, align_above_previous(ctx, origin(ctx)))
}

pub fn container_right_aligned_vstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_right(ctx, align_below_previous(ctx, origin(ctx)))
}

pub fn container_right_aligned_vstack_up(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_right(ctx, align_above_previous(ctx, origin(ctx)))
}

pub fn container_center_aligned_vstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_center_x(ctx, align_below_previous(ctx, origin(ctx)))
}

pub fn container_center_aligned_vstack_up(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_center_x(ctx, align_above_previous(ctx, origin(ctx)))
}

/// Below the previous item, stretched across the container's usable width.
///
/// The height is re-fitted at the stretched width, so wrapping content
/// doesn't keep the height it needed when it was narrower.
pub fn container_width_vstack(ctx: &FrameContext<'_>) -> Rect {
    full_width(ctx, container_left_aligned_vstack(ctx))
}

pub fn container_width_vstack_up(ctx: &FrameContext<'_>) -> Rect {
    let rect = full_width(ctx, container_left_aligned_vstack_up(ctx));
    // Re-fitting moves the bottom edge; put it back against the previous item.
    align_above_previous(ctx, rect)
}

/// Below the taller of the last two items, along the container's left edge.
///
/// Closes a row of two side-by-side items without knowing which one is taller.
pub fn container_left_aligned_vstack_below_pair(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_left(ctx, align_below_previous_pair(ctx, origin(ctx)))
}

/// [`container_left_aligned_vstack`], cropped to the container with text reflow.
pub fn container_left_aligned_vstack_reflowing(ctx: &FrameContext<'_>) -> Rect {
    crop_to_container_reflowing(ctx, container_left_aligned_vstack(ctx))
}

/// [`container_center_aligned_vstack`], cropped to the container with text reflow.
pub fn container_center_aligned_vstack_reflowing(ctx: &FrameContext<'_>) -> Rect {
    crop_to_container_reflowing(ctx, container_center_aligned_vstack(ctx))
}

// ============================================================================
// Previous-aligned vertical stacks
// ============================================================================

pub fn left_aligned_vstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_left(ctx, align_below_previous(ctx, origin(ctx)))
}

pub fn left_aligned_vstack_up(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_left(ctx, align_above_previous(ctx, origin(ctx)))
}

pub fn right_aligned_vstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_right(ctx, align_below_previous(ctx, origin(ctx)))
}

pub fn right_aligned_vstack_up(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_right(ctx, align_above_previous(ctx, origin(ctx)))
}

pub fn center_aligned_vstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_center_x(ctx, align_below_previous(ctx, origin(ctx)))
}

pub fn center_aligned_vstack_up(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_center_x(ctx, align_above_previous(ctx, origin(ctx)))
}

// ============================================================================
// Container-aligned horizontal stacks
// ============================================================================

/// ```text
/// ┌────────────────────────────┐
/// │  ┌───────┐ ┌───────┐       │
/// │  │ prev  │ │ curr  │       │
/// │  └───────┘ │       │       │
/// │            └───────┘       │
/// └────────────────────────────┘
/// ```
///
/// Right of the previous item, along the container's top edge.
pub fn container_top_aligned_hstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_top(ctx, align_right_of_previous(ctx, origin(ctx)))
}

pub fn container_top_aligned_hstack_left(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_top(ctx, align_left_of_previous(ctx, origin(ctx)))
}

pub fn container_bottom_aligned_hstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_bottom(ctx, align_right_of_previous(ctx, origin(ctx)))
}

pub fn container_bottom_aligned_hstack_left(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_bottom(ctx, align_left_of_previous(ctx, origin(ctx)))
}

pub fn container_center_aligned_hstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_center_y(ctx, align_right_of_previous(ctx, origin(ctx)))
}

pub fn container_center_aligned_hstack_left(ctx: &FrameContext<'_>) -> Rect {
    align_to_container_center_y(ctx, align_left_of_previous(ctx, origin(ctx)))
}

// ============================================================================
// Previous-aligned horizontal stacks
// ============================================================================

pub fn top_aligned_hstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_top(ctx, align_right_of_previous(ctx, origin(ctx)))
}

pub fn top_aligned_hstack_left(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_top(ctx, align_left_of_previous(ctx, origin(ctx)))
}

pub fn bottom_aligned_hstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_bottom(ctx, align_right_of_previous(ctx, origin(ctx)))
}

pub fn bottom_aligned_hstack_left(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_bottom(ctx, align_left_of_previous(ctx, origin(ctx)))
}

pub fn center_aligned_hstack(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_center_y(ctx, align_right_of_previous(ctx, origin(ctx)))
}

pub fn center_aligned_hstack_left(ctx: &FrameContext<'_>) -> Rect {
    align_to_previous_center_y(ctx, align_left_of_previous(ctx, origin(ctx)))
}

fn full_width(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    size_to_fit_vertically(ctx, extend_to_container_right(ctx, rect), SizeToFit::GrowOrShrink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::*;
    use crate::geometry::EdgeInsets;

    #[test]
    fn left_vstack_below_previous() {
        let a_item = sized(0.0, 0.0);
        let item = sized(120.0, 30.0);
        let c = container(300.0, 1000.0);
        let a =
            previous(&a_item, Rect::new(0.0, 0.0, 80.0, 20.0), EdgeInsets::ZERO, EdgeInsets::ZERO);
        let ctx = FrameContext::new(&item, &c)
            .spacing(EdgeInsets::top(8.0))
            .previous(Some(a));
        assert_eq!(container_left_aligned_vstack(&ctx), Rect::new(0.0, 28.0, 120.0, 30.0));
    }

    #[test]
    fn first_item_goes_to_top_left() {
        let item = sized(80.0, 20.0);
        let c = container(300.0, 1000.0);
        let ctx = FrameContext::new(&item, &c);
        assert_eq!(container_left_aligned_vstack(&ctx), Rect::new(0.0, 0.0, 80.0, 20.0));
        assert_eq!(container_right_aligned_vstack(&ctx), Rect::new(220.0, 0.0, 80.0, 20.0));
        assert_eq!(container_center_aligned_vstack(&ctx), Rect::new(110.0, 0.0, 80.0, 20.0));
        assert_eq!(container_left_aligned_vstack_up(&ctx), Rect::new(0.0, 980.0, 80.0, 20.0));
    }

    #[test]
    fn width_vstack_refits_height() {
        let a_item = sized(0.0, 0.0);
        // 400 units of text in 10 high lines.
        let item = text_like(400.0, 10.0);
        let c = container(200.0, 500.0);
        let a =
            previous(&a_item, Rect::new(0.0, 0.0, 50.0, 20.0), EdgeInsets::ZERO, EdgeInsets::ZERO);
        let ctx = FrameContext::new(&item, &c)
            .padding(EdgeInsets::symmetric(0.0, 50.0))
            .previous(Some(a));
        // Origin fits at 100 wide (4 lines); stretched to 100 wide it stays 4 lines.
        assert_eq!(container_width_vstack(&ctx), Rect::new(50.0, 20.0, 100.0, 40.0));

        let ctx = ctx.padding(EdgeInsets::ZERO);
        assert_eq!(container_width_vstack(&ctx), Rect::new(0.0, 20.0, 200.0, 20.0));
    }

    #[test]
    fn width_vstack_up_sits_above_previous() {
        let a_item = sized(0.0, 0.0);
        let item = text_like(400.0, 10.0);
        let c = container(200.0, 500.0);
        let a = previous(
            &a_item,
            Rect::new(0.0, 300.0, 50.0, 20.0),
            EdgeInsets::ZERO,
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c).previous(Some(a));
        assert_eq!(container_width_vstack_up(&ctx), Rect::new(0.0, 280.0, 200.0, 20.0));
    }

    #[test]
    fn previous_aligned_vstacks_follow_previous() {
        let a_item = sized(0.0, 0.0);
        let item = sized(20.0, 10.0);
        let c = container(300.0, 300.0);
        let a = previous(
            &a_item,
            Rect::new(100.0, 50.0, 60.0, 20.0),
            EdgeInsets::ZERO,
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c).previous(Some(a));
        assert_eq!(left_aligned_vstack(&ctx), Rect::new(100.0, 70.0, 20.0, 10.0));
        assert_eq!(right_aligned_vstack(&ctx), Rect::new(140.0, 70.0, 20.0, 10.0));
        assert_eq!(center_aligned_vstack(&ctx), Rect::new(120.0, 70.0, 20.0, 10.0));
        assert_eq!(left_aligned_vstack_up(&ctx), Rect::new(100.0, 40.0, 20.0, 10.0));
    }

    #[test]
    fn hstacks_beside_previous() {
        let a_item = sized(0.0, 0.0);
        let item = sized(20.0, 10.0);
        let c = container(300.0, 100.0);
        let a = previous(
            &a_item,
            Rect::new(100.0, 40.0, 60.0, 30.0),
            EdgeInsets::ZERO,
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c)
            .spacing(EdgeInsets::symmetric(0.0, 5.0))
            .previous(Some(a));
        assert_eq!(container_top_aligned_hstack(&ctx), Rect::new(165.0, 0.0, 20.0, 10.0));
        assert_eq!(container_bottom_aligned_hstack(&ctx), Rect::new(165.0, 90.0, 20.0, 10.0));
        assert_eq!(container_center_aligned_hstack(&ctx), Rect::new(165.0, 45.0, 20.0, 10.0));
        assert_eq!(top_aligned_hstack(&ctx), Rect::new(165.0, 40.0, 20.0, 10.0));
        assert_eq!(bottom_aligned_hstack(&ctx), Rect::new(165.0, 60.0, 20.0, 10.0));
        assert_eq!(center_aligned_hstack(&ctx), Rect::new(165.0, 50.0, 20.0, 10.0));
        assert_eq!(top_aligned_hstack_left(&ctx), Rect::new(75.0, 40.0, 20.0, 10.0));
        assert_eq!(container_top_aligned_hstack_left(&ctx), Rect::new(75.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn below_pair_clears_both() {
        let a_item = sized(0.0, 0.0);
        let b_item = sized(0.0, 0.0);
        let item = sized(20.0, 10.0);
        let c = container(300.0, 300.0);
        let a =
            previous(&a_item, Rect::new(0.0, 0.0, 60.0, 50.0), EdgeInsets::ZERO, EdgeInsets::ZERO);
        let b =
            previous(&b_item, Rect::new(60.0, 0.0, 60.0, 10.0), EdgeInsets::ZERO, EdgeInsets::ZERO);
        let ctx = FrameContext::new(&item, &c)
            .previous(Some(b))
            .previous_to_previous(Some(a));
        assert_eq!(
            container_left_aligned_vstack_below_pair(&ctx),
            Rect::new(0.0, 50.0, 20.0, 10.0)
        );
    }

    #[test]
    fn reflowing_vstack_narrows_wide_content() {
        // Reports 150 wide whatever it is offered, like an image.
        let item = sized(150.0, 10.0);
        let c = container(100.0, 100.0);
        let ctx = FrameContext::new(&item, &c);
        assert_eq!(container_left_aligned_vstack_reflowing(&ctx), Rect::new(0.0, 0.0, 100.0, 10.0));
    }
}
