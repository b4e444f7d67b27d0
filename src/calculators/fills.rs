//! Fill the remaining container space on one side of the previous item.
//!
//! ```text
//! ┌────────────────────────────┐
//! │   ┌───────┐ ┌───────────┐  │
//! │   │ prev  │ │ curr      │  │
//! │   └───────┘ │           │  │
//! │             └───────────┘  │
//! └────────────────────────────┘
//! ```
//!
//! Horizontal fills take the full width of the region and their natural
//! height at that width; vertical fills the reverse.

use super::primitives::*;
use crate::context::FrameContext;
use crate::geometry::Rect;

// ---- Horizontal ----

pub fn top_aligned_fill_to_right(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_right_of_previous(ctx);
    extend_to_container_right(ctx, align_to_previous_top(ctx, region))
}

pub fn top_aligned_fill_to_left(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_left_of_previous(ctx);
    extend_to_container_left(ctx, align_to_previous_top(ctx, region))
}

pub fn bottom_aligned_fill_to_right(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_right_of_previous(ctx);
    extend_to_container_right(ctx, align_to_previous_bottom(ctx, region))
}

pub fn bottom_aligned_fill_to_left(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_left_of_previous(ctx);
    extend_to_container_left(ctx, align_to_previous_bottom(ctx, region))
}

pub fn center_aligned_fill_to_right(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_right_of_previous(ctx);
    extend_to_container_right(ctx, align_to_previous_center_y(ctx, region))
}

pub fn center_aligned_fill_to_left(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_left_of_previous(ctx);
    extend_to_container_left(ctx, align_to_previous_center_y(ctx, region))
}

// ---- Vertical ----

pub fn left_aligned_fill_to_bottom(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_below_previous(ctx);
    extend_to_container_bottom(ctx, align_to_previous_left(ctx, region))
}

pub fn left_aligned_fill_to_top(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_above_previous(ctx);
    extend_to_container_top(ctx, align_to_previous_left(ctx, region))
}

pub fn right_aligned_fill_to_bottom(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_below_previous(ctx);
    extend_to_container_bottom(ctx, align_to_previous_right(ctx, region))
}

pub fn right_aligned_fill_to_top(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_above_previous(ctx);
    extend_to_container_top(ctx, align_to_previous_right(ctx, region))
}

pub fn center_aligned_fill_to_bottom(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_below_previous(ctx);
    extend_to_container_bottom(ctx, align_to_previous_center_x(ctx, region))
}

pub fn center_aligned_fill_to_top(ctx: &FrameContext<'_>) -> Rect {
    let region = container_cropped_above_previous(ctx);
    extend_to_container_top(ctx, align_to_previous_center_x(ctx, region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::*;
    use crate::geometry::EdgeInsets;

    #[test]
    fn fill_right_takes_remaining_width() {
        let a_item = sized(0.0, 0.0);
        let item = sized(10.0, 15.0);
        let c = container(200.0, 100.0);
        let a = previous(
            &a_item,
            Rect::new(0.0, 10.0, 50.0, 30.0),
            EdgeInsets::right(10.0),
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c).previous(Some(a));
        assert_eq!(top_aligned_fill_to_right(&ctx), Rect::new(60.0, 10.0, 140.0, 15.0));
        assert_eq!(bottom_aligned_fill_to_right(&ctx), Rect::new(60.0, 25.0, 140.0, 15.0));
        assert_eq!(center_aligned_fill_to_right(&ctx), Rect::new(60.0, 17.5, 140.0, 15.0));
    }

    #[test]
    fn fill_left_honours_padding() {
        let a_item = sized(0.0, 0.0);
        let item = sized(10.0, 15.0);
        let c = container(200.0, 100.0);
        let a = previous(
            &a_item,
            Rect::new(150.0, 10.0, 50.0, 30.0),
            EdgeInsets::ZERO,
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c)
            .padding(EdgeInsets::symmetric(0.0, 4.0))
            .previous(Some(a));
        assert_eq!(top_aligned_fill_to_left(&ctx), Rect::new(4.0, 10.0, 142.0, 15.0));
    }

    #[test]
    fn fill_bottom_takes_remaining_height() {
        let a_item = sized(0.0, 0.0);
        let item = sized(30.0, 5.0);
        let c = container(200.0, 100.0);
        let a =
            previous(&a_item, Rect::new(20.0, 0.0, 50.0, 40.0), EdgeInsets::ZERO, EdgeInsets::ZERO);
        let ctx = FrameContext::new(&item, &c).previous(Some(a));
        assert_eq!(left_aligned_fill_to_bottom(&ctx), Rect::new(20.0, 40.0, 30.0, 60.0));
        assert_eq!(right_aligned_fill_to_bottom(&ctx), Rect::new(40.0, 40.0, 30.0, 60.0));
        assert_eq!(center_aligned_fill_to_bottom(&ctx), Rect::new(30.0, 40.0, 30.0, 60.0));
    }

    #[test]
    fn fill_top_takes_space_above() {
        let a_item = sized(0.0, 0.0);
        let item = sized(30.0, 5.0);
        let c = container(200.0, 100.0);
        let a = previous(
            &a_item,
            Rect::new(20.0, 70.0, 50.0, 30.0),
            EdgeInsets::top(10.0),
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c).previous(Some(a));
        assert_eq!(left_aligned_fill_to_top(&ctx), Rect::new(20.0, 0.0, 30.0, 60.0));
    }

    #[test]
    fn fill_without_previous_matches_container() {
        let item = sized(30.0, 5.0);
        let c = container(200.0, 100.0);
        let ctx = FrameContext::new(&item, &c);
        assert_eq!(top_aligned_fill_to_right(&ctx), Rect::new(0.0, 0.0, 200.0, 100.0));
    }
}
