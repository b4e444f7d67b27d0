//! Lookup of named calculators by their snake_case function name.

use super::aligned::*;
use super::fills::*;
use super::flow::*;
use super::primitives::*;
use super::stacks::*;
use crate::context::FrameContext;
use crate::geometry::Rect;

/// A named frame calculator.
pub type NamedCalculator = fn(&FrameContext<'_>) -> Rect;

/// Sorted by name for binary search.
const NAMED: &[(&str, NamedCalculator)] = &[
    ("bottom_aligned_fill_to_left", bottom_aligned_fill_to_left),
    ("bottom_aligned_fill_to_right", bottom_aligned_fill_to_right),
    ("bottom_aligned_flow", bottom_aligned_flow),
    ("bottom_aligned_hstack", bottom_aligned_hstack),
    ("bottom_aligned_hstack_left", bottom_aligned_hstack_left),
    ("bottom_left_aligned", bottom_left_aligned),
    ("bottom_right_aligned", bottom_right_aligned),
    ("center_aligned", center_aligned),
    ("center_aligned_fill_to_bottom", center_aligned_fill_to_bottom),
    ("center_aligned_fill_to_left", center_aligned_fill_to_left),
    ("center_aligned_fill_to_right", center_aligned_fill_to_right),
    ("center_aligned_fill_to_top", center_aligned_fill_to_top),
    ("center_aligned_flow", center_aligned_flow),
    ("center_aligned_hstack", center_aligned_hstack),
    ("center_aligned_hstack_left", center_aligned_hstack_left),
    ("center_aligned_vstack", center_aligned_vstack),
    ("center_aligned_vstack_up", center_aligned_vstack_up),
    ("container_bottom_aligned_hstack", container_bottom_aligned_hstack),
    ("container_bottom_aligned_hstack_left", container_bottom_aligned_hstack_left),
    ("container_bottom_left_aligned", container_bottom_left_aligned),
    ("container_bottom_right_aligned", container_bottom_right_aligned),
    ("container_center_aligned", container_center_aligned),
    ("container_center_aligned_hstack", container_center_aligned_hstack),
    ("container_center_aligned_hstack_left", container_center_aligned_hstack_left),
    ("container_center_aligned_vstack", container_center_aligned_vstack),
    ("container_center_aligned_vstack_reflowing", container_center_aligned_vstack_reflowing),
    ("container_center_aligned_vstack_up", container_center_aligned_vstack_up),
    ("container_cropped_above_previous", container_cropped_above_previous),
    ("container_cropped_below_previous", container_cropped_below_previous),
    ("container_cropped_left_of_previous", container_cropped_left_of_previous),
    ("container_cropped_right_of_previous", container_cropped_right_of_previous),
    ("container_left_aligned_vstack", container_left_aligned_vstack),
    ("container_left_aligned_vstack_below_pair", container_left_aligned_vstack_below_pair),
    ("container_left_aligned_vstack_reflowing", container_left_aligned_vstack_reflowing),
    ("container_left_aligned_vstack_up", container_left_aligned_vstack_up),
    ("container_right_aligned_vstack", container_right_aligned_vstack),
    ("container_right_aligned_vstack_up", container_right_aligned_vstack_up),
    ("container_top_aligned_hstack", container_top_aligned_hstack),
    ("container_top_aligned_hstack_left", container_top_aligned_hstack_left),
    ("container_top_left_aligned", container_top_left_aligned),
    ("container_top_right_aligned", container_top_right_aligned),
    ("container_width_vstack", container_width_vstack),
    ("container_width_vstack_up", container_width_vstack_up),
    ("left_aligned_fill_to_bottom", left_aligned_fill_to_bottom),
    ("left_aligned_fill_to_top", left_aligned_fill_to_top),
    ("left_aligned_vstack", left_aligned_vstack),
    ("left_aligned_vstack_up", left_aligned_vstack_up),
    ("match_container", match_container),
    ("match_container_full_bleed", match_container_full_bleed),
    ("match_previous", match_previous),
    ("origin", origin),
    ("right_aligned_fill_to_bottom", right_aligned_fill_to_bottom),
    ("right_aligned_fill_to_top", right_aligned_fill_to_top),
    ("right_aligned_vstack", right_aligned_vstack),
    ("right_aligned_vstack_up", right_aligned_vstack_up),
    ("top_aligned_fill_to_left", top_aligned_fill_to_left),
    ("top_aligned_fill_to_right", top_aligned_fill_to_right),
    ("top_aligned_flow", top_aligned_flow),
    ("top_aligned_flow_left", top_aligned_flow_left),
    ("top_aligned_hstack", top_aligned_hstack),
    ("top_aligned_hstack_left", top_aligned_hstack_left),
    ("top_aligned_hstack_reflowing", top_aligned_hstack_reflowing),
    ("top_left_aligned", top_left_aligned),
    ("top_right_aligned", top_right_aligned),
];

/// Look up a named calculator. Names are exact snake_case function names.
///
/// ```
/// use seqlayout::calculators;
///
/// assert!(calculators::by_name("container_left_aligned_vstack").is_some());
/// assert!(calculators::by_name("sideways").is_none());
/// ```
pub fn by_name(name: &str) -> Option<NamedCalculator> {
    NAMED
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name))
        .ok()
        .map(|index| NAMED[index].1)
}

/// All registered names, in sorted order.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::*;

    #[test]
    fn named_is_sorted() {
        for w in NAMED.windows(2) {
            assert!(w[0].0 < w[1].0, "NAMED not sorted: {:?} >= {:?}", w[0].0, w[1].0);
        }
    }

    #[test]
    fn lookup_returns_the_function() {
        let item = sized(10.0, 10.0);
        let c = container(100.0, 100.0);
        let ctx = FrameContext::new(&item, &c);
        let calc = by_name("container_bottom_right_aligned").unwrap();
        assert_eq!(calc(&ctx), container_bottom_right_aligned(&ctx));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(by_name("Origin").is_none());
        assert!(by_name("origin ").is_none());
        assert!(by_name("").is_none());
        assert!(by_name("origin").is_some());
    }

    #[test]
    fn every_name_resolves() {
        assert_eq!(names().count(), NAMED.len());
        assert!(names().all(|name| by_name(name).is_some()));
    }
}
