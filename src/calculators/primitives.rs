//! Primitive transforms every named calculator is built from.
//!
//! Each primitive takes the frame context and a candidate rectangle and
//! returns an adjusted rectangle. "Relative to previous" primitives fall
//! back to their container counterpart when there is no previous item.
//!
//! Spacing between neighbours is reconciled by taking the larger of the
//! two requests on the shared side. Padding is never reconciled: it only
//! shifts the item's own frame relative to its visual content.

use crate::context::{FrameContext, PreviousItem};
use crate::geometry::{Rect, Size};

/// How a size-to-fit pass treats the fitted axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeToFit {
    /// Take the natural size only when it is larger than the candidate.
    #[default]
    GrowOnly,
    /// Always take the natural size.
    GrowOrShrink,
}

// ============================================================================
// Starting rectangles
// ============================================================================

/// ```text
/// ┌────────┐───────────────────┐
/// │ curr   │                   │
/// └────────┘                   │
/// │                            │
/// └────────────────────────────┘
/// ```
///
/// Item at the origin, sized to fit the container's usable area.
pub fn origin(ctx: &FrameContext<'_>) -> Rect {
    Rect::from_size(ctx.measure(fitting_size_for_container(ctx)))
}

/// Usable container size minus the item's padding.
pub fn fitting_size_for_container(ctx: &FrameContext<'_>) -> Size {
    ctx.container.usable_rect().size().inset_by(ctx.padding)
}

/// Container's usable area, inset by the item's padding.
pub fn match_container(ctx: &FrameContext<'_>) -> Rect {
    ctx.container.usable_rect().inset_by(ctx.padding)
}

/// Whole container bounds, ignoring layout insets.
pub fn match_container_full_bleed(ctx: &FrameContext<'_>) -> Rect {
    ctx.container.layout_bounds.inset_by(ctx.padding)
}

/// Same visual bounds as the previous item.
pub fn match_previous(ctx: &FrameContext<'_>) -> Rect {
    match ctx.previous {
        Some(previous) => previous.padded_bounds().inset_by(ctx.padding),
        None => match_container(ctx),
    }
}

// ============================================================================
// Size to fit
// ============================================================================

/// Natural size with both axes unbounded. Origin is kept.
pub fn size_to_fit(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    rect.with_size(ctx.measure(Size::UNBOUNDED))
}

/// Keep the width, fit the height to the content at that width.
pub fn size_to_fit_vertically(ctx: &FrameContext<'_>, rect: Rect, mode: SizeToFit) -> Rect {
    let natural = ctx.measure(rect.size().with_unbounded_height());
    let height = match mode {
        SizeToFit::GrowOnly => rect.height.max(natural.height),
        SizeToFit::GrowOrShrink => natural.height,
    };
    Rect::new(rect.x, rect.y, rect.width, height)
}

/// Keep the height, fit the width to the content at that height.
pub fn size_to_fit_horizontally(ctx: &FrameContext<'_>, rect: Rect, mode: SizeToFit) -> Rect {
    let natural = ctx.measure(rect.size().with_unbounded_width());
    let width = match mode {
        SizeToFit::GrowOnly => rect.width.max(natural.width),
        SizeToFit::GrowOrShrink => natural.width,
    };
    Rect::new(rect.x, rect.y, width, rect.height)
}

// ============================================================================
// Alignment to container
// ============================================================================

pub fn align_to_container_top(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let y = ctx.container.usable_top() + ctx.padding.top;
    Rect { y, ..rect }
}

pub fn align_to_container_left(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let x = ctx.container.usable_left() + ctx.padding.left;
    Rect { x, ..rect }
}

pub fn align_to_container_bottom(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let y = ctx.container.usable_bottom() - ctx.padding.bottom - rect.height;
    Rect { y, ..rect }
}

pub fn align_to_container_right(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let x = ctx.container.usable_right() - ctx.padding.right - rect.width;
    Rect { x, ..rect }
}

/// Center the item's padded width on the container's usable centerline.
pub fn align_to_container_center_x(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let x = centered_start(
        ctx.container.usable_left(),
        ctx.container.usable_right(),
        rect.width,
        ctx.padding.left,
        ctx.padding.right,
    );
    Rect { x, ..rect }
}

/// Center the item's padded height on the container's usable centerline.
pub fn align_to_container_center_y(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let y = centered_start(
        ctx.container.usable_top(),
        ctx.container.usable_bottom(),
        rect.height,
        ctx.padding.top,
        ctx.padding.bottom,
    );
    Rect { y, ..rect }
}

// ============================================================================
// Alignment to previous
// ============================================================================

pub fn align_to_previous_top(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_top(ctx, rect);
    };
    let y = previous.padded_bounds().min_y() + ctx.padding.top;
    Rect { y, ..rect }
}

pub fn align_to_previous_left(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_left(ctx, rect);
    };
    let x = previous.padded_bounds().min_x() + ctx.padding.left;
    Rect { x, ..rect }
}

pub fn align_to_previous_bottom(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_bottom(ctx, rect);
    };
    let y = previous.padded_bounds().max_y() - ctx.padding.bottom - rect.height;
    Rect { y, ..rect }
}

pub fn align_to_previous_right(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_right(ctx, rect);
    };
    let x = previous.padded_bounds().max_x() - ctx.padding.right - rect.width;
    Rect { x, ..rect }
}

pub fn align_to_previous_center_x(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_center_x(ctx, rect);
    };
    let bounds = previous.padded_bounds();
    let x = centered_start(
        bounds.min_x(),
        bounds.max_x(),
        rect.width,
        ctx.padding.left,
        ctx.padding.right,
    );
    Rect { x, ..rect }
}

pub fn align_to_previous_center_y(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_center_y(ctx, rect);
    };
    let bounds = previous.padded_bounds();
    let y = centered_start(
        bounds.min_y(),
        bounds.max_y(),
        rect.height,
        ctx.padding.top,
        ctx.padding.bottom,
    );
    Rect { y, ..rect }
}

// ============================================================================
// Adjacent to previous
// ============================================================================

/// Bottom edge just above the previous item. Without one, bottom of container.
pub fn align_above_previous(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_bottom(ctx, rect);
    };
    let bottom = previous.padded_bounds().min_y()
        - previous.spacing.top.max(ctx.spacing.bottom)
        - ctx.padding.bottom;
    Rect {
        y: bottom - rect.height,
        ..rect
    }
}

/// Top edge just below the previous item. Without one, top of container.
pub fn align_below_previous(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_top(ctx, rect);
    };
    Rect {
        y: top_below(ctx, &previous),
        ..rect
    }
}

/// Right edge just left of the previous item. Without one, right of container.
pub fn align_left_of_previous(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_right(ctx, rect);
    };
    let right = previous.padded_bounds().min_x()
        - previous.spacing.left.max(ctx.spacing.right)
        - ctx.padding.right;
    Rect {
        x: right - rect.width,
        ..rect
    }
}

/// Left edge just right of the previous item. Without one, left of container.
pub fn align_right_of_previous(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let Some(previous) = ctx.previous else {
        return align_to_container_left(ctx, rect);
    };
    let x = previous.padded_bounds().max_x()
        + previous.spacing.right.max(ctx.spacing.left)
        + ctx.padding.left;
    Rect { x, ..rect }
}

/// Top edge below both the previous and the previous-to-previous item.
///
/// For a pair placed side by side this clears the taller of the two.
/// With fewer than two previous items it behaves like
/// [`align_below_previous`].
pub fn align_below_previous_pair(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    match (ctx.previous, ctx.previous_to_previous) {
        (Some(previous), Some(earlier)) => Rect {
            y: top_below(ctx, &previous).max(top_below(ctx, &earlier)),
            ..rect
        },
        _ => align_below_previous(ctx, rect),
    }
}

// ============================================================================
// Extend to container edges
// ============================================================================

/// Move the right edge to the container's usable right edge.
pub fn extend_to_container_right(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let right = ctx.container.usable_right() - ctx.padding.right;
    Rect {
        width: right - rect.min_x(),
        ..rect
    }
}

/// Move the left edge to the container's usable left edge, keeping the right edge.
pub fn extend_to_container_left(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let left = ctx.container.usable_left() + ctx.padding.left;
    Rect {
        x: left,
        width: rect.max_x() - left,
        ..rect
    }
}

/// Move the bottom edge to the container's usable bottom edge.
pub fn extend_to_container_bottom(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let bottom = ctx.container.usable_bottom() - ctx.padding.bottom;
    Rect {
        height: bottom - rect.min_y(),
        ..rect
    }
}

/// Move the top edge to the container's usable top edge, keeping the bottom edge.
pub fn extend_to_container_top(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let top = ctx.container.usable_top() + ctx.padding.top;
    Rect {
        y: top,
        height: rect.max_y() - top,
        ..rect
    }
}

// ============================================================================
// Cropping
// ============================================================================

/// Pull in any edge that sticks out of the container's usable area.
///
/// Edges already inside are left untouched, so cropping a rect that fits
/// returns it unchanged. When nothing fits the result has a negative size;
/// it is passed on as-is.
pub fn crop_to_container(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let bounds = match_container(ctx);
    let mut cropped = rect;
    if cropped.min_x() < bounds.min_x() {
        cropped.width = cropped.max_x() - bounds.min_x();
        cropped.x = bounds.min_x();
    }
    if cropped.max_x() > bounds.max_x() {
        cropped.width = bounds.max_x() - cropped.x;
    }
    if cropped.min_y() < bounds.min_y() {
        cropped.height = cropped.max_y() - bounds.min_y();
        cropped.y = bounds.min_y();
    }
    if cropped.max_y() > bounds.max_y() {
        cropped.height = bounds.max_y() - cropped.y;
    }
    cropped
}

/// Crop to the container, then run `cleanup` if anything was cut off.
pub fn crop_to_container_with(
    ctx: &FrameContext<'_>,
    rect: Rect,
    cleanup: impl FnOnce(&FrameContext<'_>, Rect) -> Rect,
) -> Rect {
    let cropped = crop_to_container(ctx, rect);
    if cropped == rect {
        cropped
    } else {
        cleanup(ctx, cropped)
    }
}

/// Crop to the container and, if that narrowed the item, re-fit its height
/// at the new width (text reflow) and crop again.
pub fn crop_to_container_reflowing(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    crop_to_container_with(ctx, rect, |ctx, cropped| {
        if cropped.width == rect.width {
            return cropped;
        }
        crop_to_container(
            ctx,
            size_to_fit_vertically(ctx, cropped, SizeToFit::GrowOrShrink),
        )
    })
}

/// Same visual width as the previous item. Without one, the container's usable width.
pub fn crop_to_previous_width(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let visual_width = match ctx.previous {
        Some(previous) => previous.padded_bounds().width,
        None => ctx.container.usable_rect().width,
    };
    Rect {
        width: visual_width - ctx.padding.horizontal(),
        ..rect
    }
}

/// Same visual height as the previous item. Without one, the container's usable height.
pub fn crop_to_previous_height(ctx: &FrameContext<'_>, rect: Rect) -> Rect {
    let visual_height = match ctx.previous {
        Some(previous) => previous.padded_bounds().height,
        None => ctx.container.usable_rect().height,
    };
    Rect {
        height: visual_height - ctx.padding.vertical(),
        ..rect
    }
}

// ============================================================================
// Regions of the container on one side of the previous item
// ============================================================================

/// The container's usable area left of the previous item.
///
/// Full region width, natural height at that width. These are starting
/// rectangles for "fill the remaining space" calculators.
pub fn container_cropped_left_of_previous(ctx: &FrameContext<'_>) -> Rect {
    let Some(previous) = ctx.previous else {
        return match_container(ctx);
    };
    let c = ctx.container;
    let right = previous.padded_bounds().min_x() - previous.spacing.left.max(ctx.spacing.right);
    horizontal_region(
        ctx,
        Rect::from_edges(c.usable_left(), c.usable_top(), right, c.usable_bottom()),
    )
}

/// The container's usable area right of the previous item.
pub fn container_cropped_right_of_previous(ctx: &FrameContext<'_>) -> Rect {
    let Some(previous) = ctx.previous else {
        return match_container(ctx);
    };
    let c = ctx.container;
    let left = previous.padded_bounds().max_x() + previous.spacing.right.max(ctx.spacing.left);
    horizontal_region(
        ctx,
        Rect::from_edges(left, c.usable_top(), c.usable_right(), c.usable_bottom()),
    )
}

/// The container's usable area above the previous item.
///
/// Full region height, natural width at that height.
pub fn container_cropped_above_previous(ctx: &FrameContext<'_>) -> Rect {
    let Some(previous) = ctx.previous else {
        return match_container(ctx);
    };
    let c = ctx.container;
    let bottom = previous.padded_bounds().min_y() - previous.spacing.top.max(ctx.spacing.bottom);
    vertical_region(
        ctx,
        Rect::from_edges(c.usable_left(), c.usable_top(), c.usable_right(), bottom),
    )
}

/// The container's usable area below the previous item.
pub fn container_cropped_below_previous(ctx: &FrameContext<'_>) -> Rect {
    let Some(previous) = ctx.previous else {
        return match_container(ctx);
    };
    let c = ctx.container;
    let top = previous.padded_bounds().max_y() + previous.spacing.bottom.max(ctx.spacing.top);
    vertical_region(
        ctx,
        Rect::from_edges(c.usable_left(), top, c.usable_right(), c.usable_bottom()),
    )
}

// ---- Internal helpers ----

/// Start coordinate that centers a padded span between `low` and `high`.
fn centered_start(low: f64, high: f64, length: f64, pad_start: f64, pad_end: f64) -> f64 {
    let padded = length + pad_start + pad_end;
    (low + high) / 2.0 - padded / 2.0 + pad_start
}

/// Top edge for an item sitting below `previous`.
fn top_below(ctx: &FrameContext<'_>, previous: &PreviousItem<'_>) -> f64 {
    previous.padded_bounds().max_y()
        + previous.spacing.bottom.max(ctx.spacing.top)
        + ctx.padding.top
}

fn horizontal_region(ctx: &FrameContext<'_>, region: Rect) -> Rect {
    let inner = region.inset_by(ctx.padding);
    let natural = ctx.measure(inner.size());
    Rect {
        height: natural.height,
        ..inner
    }
}

fn vertical_region(ctx: &FrameContext<'_>, region: Rect) -> Rect {
    let inner = region.inset_by(ctx.padding);
    let natural = ctx.measure(inner.size());
    Rect {
        width: natural.width,
        ..inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::*;
    use crate::context::ContainerDescription;
    use crate::geometry::EdgeInsets;

    #[test]
    fn origin_measures_against_usable_area() {
        let seen = fitting_probe();
        let item = seen.item();
        let c =
            ContainerDescription::new(Rect::new(0.0, 0.0, 300.0, 200.0), EdgeInsets::uniform(10.0));
        let ctx = FrameContext::new(&item, &c).padding(EdgeInsets::symmetric(0.0, 5.0));
        origin(&ctx);
        assert_eq!(seen.last_fitting(), Some(Size::new(270.0, 180.0)));
    }

    #[test]
    fn container_edges_include_insets_and_padding() {
        let item = sized(10.0, 10.0);
        let c =
            ContainerDescription::new(Rect::new(0.0, 0.0, 100.0, 100.0), EdgeInsets::uniform(5.0));
        let ctx = FrameContext::new(&item, &c).padding(EdgeInsets::uniform(2.0));
        let r = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert_eq!(align_to_container_left(&ctx, r).x, 7.0);
        assert_eq!(align_to_container_top(&ctx, r).y, 7.0);
        assert_eq!(align_to_container_right(&ctx, r).x, 83.0);
        assert_eq!(align_to_container_bottom(&ctx, r).y, 83.0);
    }

    #[test]
    fn container_center_uses_padded_size() {
        let item = sized(10.0, 10.0);
        let c = container(100.0, 100.0);
        let ctx = FrameContext::new(&item, &c).padding(EdgeInsets::new(0.0, 4.0, 0.0, 0.0));
        // Padded width 14 centred in 100 starts at 43; content starts 4 later.
        let r = align_to_container_center_x(&ctx, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(r.x, 47.0);
        let r = align_to_container_center_y(&ctx, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(r.y, 45.0);
    }

    #[test]
    fn previous_alignment_degrades_to_container() {
        let item = sized(10.0, 10.0);
        let c =
            ContainerDescription::new(Rect::new(0.0, 0.0, 100.0, 80.0), EdgeInsets::uniform(3.0));
        let ctx = FrameContext::new(&item, &c);
        let r = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert_eq!(align_to_previous_left(&ctx, r), align_to_container_left(&ctx, r));
        assert_eq!(align_to_previous_right(&ctx, r), align_to_container_right(&ctx, r));
        assert_eq!(align_to_previous_top(&ctx, r), align_to_container_top(&ctx, r));
        assert_eq!(align_to_previous_bottom(&ctx, r), align_to_container_bottom(&ctx, r));
        assert_eq!(align_to_previous_center_x(&ctx, r), align_to_container_center_x(&ctx, r));
        assert_eq!(align_to_previous_center_y(&ctx, r), align_to_container_center_y(&ctx, r));
        assert_eq!(align_below_previous(&ctx, r), align_to_container_top(&ctx, r));
        assert_eq!(align_above_previous(&ctx, r), align_to_container_bottom(&ctx, r));
        assert_eq!(align_right_of_previous(&ctx, r), align_to_container_left(&ctx, r));
        assert_eq!(align_left_of_previous(&ctx, r), align_to_container_right(&ctx, r));
    }

    #[test]
    fn spacing_reconciles_by_max() {
        let prev_item = sized(0.0, 0.0);
        let item = sized(10.0, 10.0);
        let c = container(200.0, 200.0);
        let prev = previous(
            &prev_item,
            Rect::new(0.0, 0.0, 50.0, 20.0),
            EdgeInsets::bottom(10.0),
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c)
            .spacing(EdgeInsets::top(4.0))
            .previous(Some(prev));
        assert_eq!(align_below_previous(&ctx, Rect::new(0.0, 0.0, 10.0, 10.0)).y, 30.0);

        let ctx = ctx.spacing(EdgeInsets::top(15.0));
        assert_eq!(align_below_previous(&ctx, Rect::new(0.0, 0.0, 10.0, 10.0)).y, 35.0);
    }

    #[test]
    fn adjacency_adds_both_paddings() {
        let prev_item = sized(0.0, 0.0);
        let item = sized(10.0, 10.0);
        let c = container(200.0, 200.0);
        let prev = previous(
            &prev_item,
            Rect::new(10.0, 10.0, 50.0, 20.0),
            EdgeInsets::uniform(6.0),
            EdgeInsets::uniform(1.0),
        );
        let ctx = FrameContext::new(&item, &c)
            .spacing(EdgeInsets::uniform(2.0))
            .padding(EdgeInsets::uniform(3.0))
            .previous(Some(prev));
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // 60 + 1 padding + max(6, 2) + 3 padding
        assert_eq!(align_right_of_previous(&ctx, r).x, 70.0);
        // 10 - 1 - 6 - 3 - width 10
        assert_eq!(align_left_of_previous(&ctx, r).x, -10.0);
        assert_eq!(align_below_previous(&ctx, r).y, 40.0);
        assert_eq!(align_above_previous(&ctx, r).y, -10.0);
    }

    #[test]
    fn previous_edges_align_visual_bounds() {
        let prev_item = sized(0.0, 0.0);
        let item = sized(10.0, 10.0);
        let c = container(200.0, 200.0);
        let prev = previous(
            &prev_item,
            Rect::new(20.0, 20.0, 40.0, 40.0),
            EdgeInsets::ZERO,
            EdgeInsets::uniform(2.0),
        );
        let ctx = FrameContext::new(&item, &c)
            .padding(EdgeInsets::uniform(1.0))
            .previous(Some(prev));
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(align_to_previous_left(&ctx, r).x, 19.0);
        assert_eq!(align_to_previous_top(&ctx, r).y, 19.0);
        assert_eq!(align_to_previous_right(&ctx, r).x, 51.0);
        assert_eq!(align_to_previous_bottom(&ctx, r).y, 51.0);
        assert_eq!(align_to_previous_center_x(&ctx, r).x, 35.0);
        assert_eq!(align_to_previous_center_y(&ctx, r).y, 35.0);
    }

    #[test]
    fn below_pair_clears_taller_item() {
        let a_item = sized(0.0, 0.0);
        let b_item = sized(0.0, 0.0);
        let item = sized(10.0, 10.0);
        let c = container(200.0, 200.0);
        let tall =
            previous(&a_item, Rect::new(0.0, 0.0, 50.0, 60.0), EdgeInsets::ZERO, EdgeInsets::ZERO);
        let short =
            previous(&b_item, Rect::new(60.0, 0.0, 50.0, 20.0), EdgeInsets::ZERO, EdgeInsets::ZERO);
        let ctx = FrameContext::new(&item, &c)
            .spacing(EdgeInsets::top(5.0))
            .previous(Some(short))
            .previous_to_previous(Some(tall));
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(align_below_previous(&ctx, r).y, 25.0);
        assert_eq!(align_below_previous_pair(&ctx, r).y, 65.0);
    }

    #[test]
    fn size_to_fit_axes() {
        let item = text_like(600.0, 20.0);
        let c = container(300.0, 300.0);
        let ctx = FrameContext::new(&item, &c);
        let r = Rect::new(5.0, 5.0, 200.0, 10.0);

        assert_eq!(size_to_fit(&ctx, r), Rect::new(5.0, 5.0, 600.0, 20.0));
        // 600 wide of text at 200 wide wraps to 3 lines.
        assert_eq!(
            size_to_fit_vertically(&ctx, r, SizeToFit::GrowOnly),
            Rect::new(5.0, 5.0, 200.0, 60.0)
        );
        let tall = Rect::new(5.0, 5.0, 200.0, 100.0);
        assert_eq!(size_to_fit_vertically(&ctx, tall, SizeToFit::GrowOnly).height, 100.0);
        assert_eq!(size_to_fit_vertically(&ctx, tall, SizeToFit::GrowOrShrink).height, 60.0);
        assert_eq!(
            size_to_fit_horizontally(&ctx, r, SizeToFit::GrowOrShrink).width,
            600.0
        );
    }

    #[test]
    fn crop_inside_is_identity() {
        let item = sized(10.0, 10.0);
        let c =
            ContainerDescription::new(Rect::new(0.0, 0.0, 100.0, 100.0), EdgeInsets::uniform(1.5));
        let ctx = FrameContext::new(&item, &c);
        let r = Rect::new(10.1, 20.2, 30.3, 40.4);
        assert_eq!(crop_to_container(&ctx, r), r);
    }

    #[test]
    fn crop_pulls_in_overflowing_edges() {
        let item = sized(10.0, 10.0);
        let c = container(100.0, 100.0);
        let ctx = FrameContext::new(&item, &c);
        let r = Rect::new(-10.0, 80.0, 50.0, 40.0);
        assert_eq!(crop_to_container(&ctx, r), Rect::new(0.0, 80.0, 40.0, 20.0));
    }

    #[test]
    fn crop_with_nothing_left_goes_negative() {
        let item = sized(10.0, 10.0);
        let c = container(100.0, 100.0);
        let ctx = FrameContext::new(&item, &c);
        let r = Rect::new(150.0, 0.0, 20.0, 20.0);
        let cropped = crop_to_container(&ctx, r);
        assert_eq!(cropped.width, -50.0);
        assert!(cropped.is_empty());
    }

    #[test]
    fn reflow_after_narrowing() {
        let item = text_like(300.0, 10.0);
        let c = container(100.0, 1000.0);
        let ctx = FrameContext::new(&item, &c);
        // One line at 300 wide starting at x=40 only has 60 left: 5 lines.
        let r = Rect::new(40.0, 0.0, 300.0, 10.0);
        assert_eq!(crop_to_container_reflowing(&ctx, r), Rect::new(40.0, 0.0, 60.0, 50.0));
    }

    #[test]
    fn cleanup_skipped_when_nothing_cropped() {
        let item = sized(10.0, 10.0);
        let c = container(100.0, 100.0);
        let ctx = FrameContext::new(&item, &c);
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(crop_to_container_with(&ctx, r, |_, _| Rect::ZERO), r);
    }

    #[test]
    fn crop_to_previous_dimensions() {
        let prev_item = sized(0.0, 0.0);
        let item = sized(10.0, 10.0);
        let c = container(200.0, 200.0);
        let prev = previous(
            &prev_item,
            Rect::new(0.0, 0.0, 80.0, 30.0),
            EdgeInsets::ZERO,
            EdgeInsets::uniform(5.0),
        );
        let ctx = FrameContext::new(&item, &c)
            .padding(EdgeInsets::uniform(2.0))
            .previous(Some(prev));
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(crop_to_previous_width(&ctx, r).width, 86.0);
        assert_eq!(crop_to_previous_height(&ctx, r).height, 36.0);

        let lonely = FrameContext::new(&item, &c).padding(EdgeInsets::uniform(2.0));
        assert_eq!(crop_to_previous_width(&lonely, r).width, 196.0);
    }

    #[test]
    fn extend_to_edges() {
        let item = sized(10.0, 10.0);
        let c =
            ContainerDescription::new(Rect::new(0.0, 0.0, 100.0, 100.0), EdgeInsets::uniform(5.0));
        let ctx = FrameContext::new(&item, &c).padding(EdgeInsets::uniform(1.0));
        let r = Rect::new(30.0, 30.0, 10.0, 10.0);
        assert_eq!(extend_to_container_right(&ctx, r), Rect::new(30.0, 30.0, 64.0, 10.0));
        assert_eq!(extend_to_container_left(&ctx, r), Rect::new(6.0, 30.0, 34.0, 10.0));
        assert_eq!(extend_to_container_bottom(&ctx, r), Rect::new(30.0, 30.0, 10.0, 64.0));
        assert_eq!(extend_to_container_top(&ctx, r), Rect::new(30.0, 6.0, 10.0, 34.0));
    }

    #[test]
    fn region_right_of_previous() {
        let prev_item = sized(0.0, 0.0);
        let item = sized(10.0, 25.0);
        let c = container(200.0, 100.0);
        let prev = previous(
            &prev_item,
            Rect::new(0.0, 0.0, 50.0, 20.0),
            EdgeInsets::right(8.0),
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c).previous(Some(prev));
        assert_eq!(container_cropped_right_of_previous(&ctx), Rect::new(58.0, 0.0, 142.0, 25.0));
        assert_eq!(container_cropped_left_of_previous(&ctx), Rect::new(0.0, 0.0, 0.0, 25.0));
    }

    #[test]
    fn region_below_previous() {
        let prev_item = sized(0.0, 0.0);
        let item = sized(30.0, 10.0);
        let c = container(200.0, 100.0);
        let prev = previous(
            &prev_item,
            Rect::new(0.0, 0.0, 50.0, 20.0),
            EdgeInsets::ZERO,
            EdgeInsets::ZERO,
        );
        let ctx = FrameContext::new(&item, &c)
            .spacing(EdgeInsets::top(4.0))
            .previous(Some(prev));
        assert_eq!(container_cropped_below_previous(&ctx), Rect::new(0.0, 24.0, 30.0, 76.0));
        assert_eq!(container_cropped_above_previous(&ctx), Rect::new(0.0, 0.0, 30.0, 0.0));
    }

    #[test]
    fn regions_without_previous_match_container() {
        let item = sized(30.0, 10.0);
        let c =
            ContainerDescription::new(Rect::new(0.0, 0.0, 200.0, 100.0), EdgeInsets::uniform(10.0));
        let ctx = FrameContext::new(&item, &c);
        let expected = Rect::new(10.0, 10.0, 180.0, 80.0);
        assert_eq!(container_cropped_left_of_previous(&ctx), expected);
        assert_eq!(container_cropped_right_of_previous(&ctx), expected);
        assert_eq!(container_cropped_above_previous(&ctx), expected);
        assert_eq!(container_cropped_below_previous(&ctx), expected);
    }

    #[test]
    fn match_previous_and_container() {
        let prev_item = sized(0.0, 0.0);
        let item = sized(30.0, 10.0);
        let c =
            ContainerDescription::new(Rect::new(0.0, 0.0, 200.0, 100.0), EdgeInsets::uniform(10.0));
        let ctx = FrameContext::new(&item, &c).padding(EdgeInsets::uniform(1.0));
        assert_eq!(match_container(&ctx), Rect::new(11.0, 11.0, 178.0, 78.0));
        assert_eq!(match_container_full_bleed(&ctx), Rect::new(1.0, 1.0, 198.0, 98.0));
        assert_eq!(match_previous(&ctx), match_container(&ctx));

        let prev = previous(
            &prev_item,
            Rect::new(20.0, 20.0, 40.0, 40.0),
            EdgeInsets::ZERO,
            EdgeInsets::uniform(3.0),
        );
        let ctx = ctx.previous(Some(prev));
        assert_eq!(match_previous(&ctx), Rect::new(18.0, 18.0, 44.0, 44.0));
    }
}
