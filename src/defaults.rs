//! Container-level default calculators.
//!
//! Items resolve each calculator kind through an ordered list of providers:
//! the item's own decoration, the host object's override, the container's
//! [`Defaults`], and finally a built-in fallback (zero spacing and padding,
//! default options, the host's `measure`/`commit_frame`, and a left-aligned
//! top-to-bottom stack for frames).
//!
//! Size is the exception: a host that measures itself is its own size
//! provider, so [`Defaults::size`] only reaches hosts whose
//! [`has_intrinsic_size`](crate::Layoutable::has_intrinsic_size) is false.

use alloc::rc::Rc;
use core::fmt;

use crate::context::{FrameContext, ItemContext, LayoutOptions, ObserverContext, SizeContext};
use crate::geometry::{EdgeInsets, Rect, Size};
use crate::item::{
    FrameCalculator, InsetsCalculator, LayoutObserver, OptionsCalculator, SizeCalculator,
};

/// Calculators a container applies to items that don't bring their own.
#[derive(Clone, Default)]
pub struct Defaults {
    /// Size of hosts without an intrinsic size.
    pub size: Option<SizeCalculator>,
    pub frame: Option<FrameCalculator>,
    pub sizing_frame: Option<FrameCalculator>,
    pub spacing: Option<InsetsCalculator>,
    pub padding: Option<InsetsCalculator>,
    pub options: Option<OptionsCalculator>,
    pub observer: Option<LayoutObserver>,
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaults")
            .field("size", &self.size.is_some())
            .field("frame", &self.frame.is_some())
            .field("sizing_frame", &self.sizing_frame.is_some())
            .field("spacing", &self.spacing.is_some())
            .field("padding", &self.padding.is_some())
            .field("options", &self.options.is_some())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Defaults {
    /// No defaults: every item falls through to the built-in fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every unset calculator from an enclosing container's defaults.
    pub fn inherit_from(mut self, parent: &Defaults) -> Self {
        fn fill<T: Clone>(own: &mut Option<T>, parent: &Option<T>) {
            if own.is_none() {
                own.clone_from(parent);
            }
        }
        fill(&mut self.size, &parent.size);
        fill(&mut self.frame, &parent.frame);
        fill(&mut self.sizing_frame, &parent.sizing_frame);
        fill(&mut self.spacing, &parent.spacing);
        fill(&mut self.padding, &parent.padding);
        fill(&mut self.options, &parent.options);
        fill(&mut self.observer, &parent.observer);
        self
    }

    pub fn with_size_calculator(mut self, f: impl Fn(&SizeContext<'_>) -> Size + 'static) -> Self {
        self.size = Some(Rc::new(f));
        self
    }

    pub fn with_frame_calculator(
        mut self,
        f: impl Fn(&FrameContext<'_>) -> Rect + 'static,
    ) -> Self {
        self.frame = Some(Rc::new(f));
        self
    }

    pub fn with_sizing_frame_calculator(
        mut self,
        f: impl Fn(&FrameContext<'_>) -> Rect + 'static,
    ) -> Self {
        self.sizing_frame = Some(Rc::new(f));
        self
    }

    pub fn with_spacing_calculator(
        mut self,
        f: impl Fn(&ItemContext<'_>) -> EdgeInsets + 'static,
    ) -> Self {
        self.spacing = Some(Rc::new(f));
        self
    }

    pub fn with_padding_calculator(
        mut self,
        f: impl Fn(&ItemContext<'_>) -> EdgeInsets + 'static,
    ) -> Self {
        self.padding = Some(Rc::new(f));
        self
    }

    pub fn with_options_calculator(
        mut self,
        f: impl Fn(&ItemContext<'_>) -> LayoutOptions + 'static,
    ) -> Self {
        self.options = Some(Rc::new(f));
        self
    }

    pub fn with_observer(mut self, f: impl Fn(&ObserverContext<'_>) + 'static) -> Self {
        self.observer = Some(Rc::new(f));
        self
    }

    pub fn with_size(self, size: Size) -> Self {
        self.with_size_calculator(move |_| size)
    }

    pub fn with_spacing(self, spacing: EdgeInsets) -> Self {
        self.with_spacing_calculator(move |_| spacing)
    }

    pub fn with_padding(self, padding: EdgeInsets) -> Self {
        self.with_padding_calculator(move |_| padding)
    }

    pub fn with_options(self, options: LayoutOptions) -> Self {
        self.with_options_calculator(move |_| options)
    }
}

/// First value produced by the providers, evaluated in order.
///
/// Later providers are never called once one yields `Some`.
pub(crate) fn first_available<T>(providers: &[&dyn Fn() -> Option<T>]) -> Option<T> {
    providers.iter().find_map(|provider| provider())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn first_available_stops_at_first_hit() {
        let calls = Cell::new(0);
        let found = first_available(&[
            &|| {
                calls.set(calls.get() + 1);
                None
            },
            &|| {
                calls.set(calls.get() + 1);
                Some(2)
            },
            &|| {
                calls.set(calls.get() + 1);
                Some(3)
            },
        ]);
        assert_eq!(found, Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn first_available_none_when_empty() {
        let found: Option<u8> = first_available(&[&|| None, &|| None]);
        assert_eq!(found, None);
    }

    #[test]
    fn inherit_keeps_own_values() {
        let parent = Defaults::new()
            .with_spacing(EdgeInsets::uniform(8.0))
            .with_padding(EdgeInsets::uniform(2.0));
        let child = Defaults::new()
            .with_spacing(EdgeInsets::uniform(4.0))
            .inherit_from(&parent);
        assert!(Rc::ptr_eq(
            child.padding.as_ref().unwrap(),
            parent.padding.as_ref().unwrap()
        ));
        assert!(!Rc::ptr_eq(
            child.spacing.as_ref().unwrap(),
            parent.spacing.as_ref().unwrap()
        ));
        assert!(child.frame.is_none());
    }
}
