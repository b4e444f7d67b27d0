//! Applying [`Instructions`] to an item.

use tracing::trace;

use crate::calculators;
use crate::item::Item;

use super::Instructions;

impl Instructions {
    /// Decorate `item` with everything that was set.
    ///
    /// Decoration set here replaces whatever the item already carried for
    /// the same property. Unset properties are left alone.
    pub fn apply(&self, item: Item) -> Item {
        let mut item = item;
        if let Some(size) = self.size {
            item = item.with_size(size);
        }
        if let Some(calculator) = self.frame.as_deref().and_then(calculators::by_name) {
            item = item.with_frame_calculator(calculator);
        }
        if let Some(rect) = self.rect {
            item = item.with_frame(rect);
        }
        if let Some(calculator) = self.sizing_frame.as_deref().and_then(calculators::by_name) {
            item = item.with_sizing_frame_calculator(calculator);
        }
        if let Some(spacing) = self.spacing {
            item = item.with_spacing(spacing);
        }
        if let Some(padding) = self.padding {
            item = item.with_padding(padding);
        }
        if let Some(options) = self.options() {
            item = item.with_options(options);
        }
        trace!(frame = self.frame.as_deref(), fixed = self.rect.is_some(), "instructions applied");
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::sized;
    use crate::container::Container;
    use crate::context::LayoutOptions;
    use crate::geometry::{EdgeInsets, Rect, Size};
    use alloc::string::String;

    fn run(items: impl IntoIterator<Item = Item>) -> crate::container::LayoutTrace {
        let mut container = Container::new();
        container.set_items(items);
        container.layout_traced(Rect::new(0.0, 0.0, 100.0, 100.0), EdgeInsets::ZERO, false)
    }

    #[test]
    fn empty_instructions_change_nothing() {
        let inst = Instructions::new();
        assert!(inst.is_empty());
        assert_eq!(inst.options(), None);
        let trace = run([inst.apply(sized(10.0, 10.0))]);
        assert_eq!(trace.placements[0].frame, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn rect_wins_over_frame() {
        let inst = Instructions {
            frame: Some(String::from("container_center_aligned")),
            rect: Some(Rect::new(5.0, 6.0, 7.0, 8.0)),
            ..Instructions::new()
        };
        let trace = run([inst.apply(sized(10.0, 10.0))]);
        assert_eq!(trace.placements[0].frame, Rect::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn size_feeds_the_frame_calculator() {
        let inst = Instructions {
            frame: Some(String::from("container_bottom_right_aligned")),
            size: Some(Size::new(30.0, 20.0)),
            ..Instructions::new()
        };
        let trace = run([inst.apply(sized(10.0, 10.0))]);
        assert_eq!(trace.placements[0].frame, Rect::new(70.0, 80.0, 30.0, 20.0));
    }

    #[test]
    fn partial_options_keep_defaults() {
        let inst = Instructions {
            save_as_previous: Some(false),
            ..Instructions::new()
        };
        assert_eq!(inst.options(), Some(LayoutOptions::not_saved_as_previous()));
    }

    #[test]
    fn skip_removes_item_from_pass() {
        let inst = Instructions {
            skip: Some(true),
            ..Instructions::new()
        };
        let trace = run([inst.apply(sized(10.0, 10.0)), sized(5.0, 5.0)]);
        assert_eq!(trace.placements.len(), 1);
        assert_eq!(trace.placements[0].index, 1);
        assert_eq!(trace.placements[0].frame, Rect::new(0.0, 0.0, 5.0, 5.0));
    }
}
