//! Layout items: the host capability trait and the decorated wrapper the
//! container arranges.
//!
//! A host type (a widget, a nested container, a test double) implements
//! [`Layoutable`]. The container never stores host types directly; it
//! stores [`Item`]s, each an `Rc` to the host plus a [`Decoration`] of
//! optional calculator overrides.
//!
//! ```
//! use std::rc::Rc;
//! use seqlayout::{EdgeInsets, Item, Layoutable, Size, calculators};
//!
//! struct Label;
//! impl Layoutable for Label {
//!     fn measure(&self, _fitting: Size) -> Size {
//!         Size::new(80.0, 20.0)
//!     }
//! }
//!
//! let item = Item::new(Rc::new(Label))
//!     .with_spacing(EdgeInsets::top(8.0))
//!     .with_frame_calculator(calculators::container_center_aligned_vstack);
//! assert!(item.decoration().frame.is_some());
//! ```

use alloc::rc::Rc;
use core::fmt;

use crate::calculators;
use crate::context::{FrameContext, ItemContext, LayoutOptions, ObserverContext, SizeContext};
use crate::defaults::{Defaults, first_available};
use crate::geometry::{EdgeInsets, Rect, Size};

/// Natural size of an item given the space available to it.
pub type SizeCalculator = Rc<dyn Fn(&SizeContext<'_>) -> Size>;

/// Placement of an item within its container.
pub type FrameCalculator = Rc<dyn Fn(&FrameContext<'_>) -> Rect>;

/// Spacing or padding of an item.
pub type InsetsCalculator = Rc<dyn Fn(&ItemContext<'_>) -> EdgeInsets>;

/// Per-pass options of an item.
pub type OptionsCalculator = Rc<dyn Fn(&ItemContext<'_>) -> LayoutOptions>;

/// Receives each computed frame. The only side-effecting step of a pass.
pub type LayoutObserver = Rc<dyn Fn(&ObserverContext<'_>)>;

/// Capabilities a host object offers to the layout engine.
///
/// Every method has a default, so a type that only knows its natural size
/// implements [`measure`](Self::measure) and nothing else. The
/// `*_calculator` hooks let a host type carry its own calculators; an
/// [`Item`]'s decoration still takes precedence over them.
pub trait Layoutable {
    /// Preferred size within `fitting_size`. Either axis may be
    /// [`UNBOUNDED`](crate::UNBOUNDED).
    fn measure(&self, fitting_size: Size) -> Size {
        let _ = fitting_size;
        Size::ZERO
    }

    /// Whether [`measure`](Self::measure) reports the host's own size.
    ///
    /// Hosts that return false (placeholders, spacers) are sized by the
    /// container's default size calculator when it has one. Everything
    /// else keeps its measured size regardless of container defaults.
    fn has_intrinsic_size(&self) -> bool {
        true
    }

    /// Apply a computed frame. Must do nothing when `sizing_only` is true.
    fn commit_frame(&self, frame: Rect, sizing_only: bool) {
        let _ = (frame, sizing_only);
    }

    /// Called when the host is added to a container, with that container's
    /// defaults. Nested containers use it to inherit what they don't set.
    fn inherit_defaults(&self, parent: &Defaults) {
        let _ = parent;
    }

    fn size_calculator(&self) -> Option<SizeCalculator> {
        None
    }

    fn frame_calculator(&self) -> Option<FrameCalculator> {
        None
    }

    fn sizing_frame_calculator(&self) -> Option<FrameCalculator> {
        None
    }

    fn spacing_calculator(&self) -> Option<InsetsCalculator> {
        None
    }

    fn padding_calculator(&self) -> Option<InsetsCalculator> {
        None
    }

    fn options_calculator(&self) -> Option<OptionsCalculator> {
        None
    }

    fn layout_observer(&self) -> Option<LayoutObserver> {
        None
    }
}

/// Optional calculator overrides attached to an [`Item`].
///
/// Setting a field twice replaces the earlier value.
#[derive(Clone, Default)]
pub struct Decoration {
    pub size: Option<SizeCalculator>,
    pub frame: Option<FrameCalculator>,
    /// Used instead of `frame` during sizing-only passes.
    pub sizing_frame: Option<FrameCalculator>,
    pub spacing: Option<InsetsCalculator>,
    pub padding: Option<InsetsCalculator>,
    pub options: Option<OptionsCalculator>,
    pub observer: Option<LayoutObserver>,
}

impl fmt::Debug for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoration")
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

/// A host object plus its calculator overrides.
///
/// Cloning is cheap: the target and every calculator are reference counted.
/// Two items wrapping the same `Rc` target count as the same item.
#[derive(Clone)]
pub struct Item {
    target: Rc<dyn Layoutable>,
    decoration: Decoration,
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("target", &Rc::as_ptr(&self.target).cast::<()>())
            .field("decoration", &self.decoration)
            .finish()
    }
}

impl<T: Layoutable + 'static> From<Rc<T>> for Item {
    fn from(target: Rc<T>) -> Self {
        Self::new(target)
    }
}

impl Item {
    /// Wrap a host object with no overrides.
    pub fn new(target: Rc<dyn Layoutable>) -> Self {
        Self {
            target,
            decoration: Decoration::default(),
        }
    }

    pub fn target(&self) -> &Rc<dyn Layoutable> {
        &self.target
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Whether both items wrap the same host object.
    pub fn is_same_target(&self, other: &Item) -> bool {
        core::ptr::addr_eq(Rc::as_ptr(&self.target), Rc::as_ptr(&other.target))
    }

    // ---- Decorators ----

    pub fn with_size_calculator(mut self, f: impl Fn(&SizeContext<'_>) -> Size + 'static) -> Self {
        self.decoration.size = Some(Rc::new(f));
        self
    }

    pub fn with_frame_calculator(
        mut self,
        f: impl Fn(&FrameContext<'_>) -> Rect + 'static,
    ) -> Self {
        self.decoration.frame = Some(Rc::new(f));
        self
    }

    pub fn with_sizing_frame_calculator(
        mut self,
        f: impl Fn(&FrameContext<'_>) -> Rect + 'static,
    ) -> Self {
        self.decoration.sizing_frame = Some(Rc::new(f));
        self
    }

    pub fn with_spacing_calculator(
        mut self,
        f: impl Fn(&ItemContext<'_>) -> EdgeInsets + 'static,
    ) -> Self {
        self.decoration.spacing = Some(Rc::new(f));
        self
    }

    pub fn with_padding_calculator(
        mut self,
        f: impl Fn(&ItemContext<'_>) -> EdgeInsets + 'static,
    ) -> Self {
        self.decoration.padding = Some(Rc::new(f));
        self
    }

    pub fn with_options_calculator(
        mut self,
        f: impl Fn(&ItemContext<'_>) -> LayoutOptions + 'static,
    ) -> Self {
        self.decoration.options = Some(Rc::new(f));
        self
    }

    pub fn with_observer(mut self, f: impl Fn(&ObserverContext<'_>) + 'static) -> Self {
        self.decoration.observer = Some(Rc::new(f));
        self
    }

    /// Constant natural size.
    pub fn with_size(self, size: Size) -> Self {
        self.with_size_calculator(move |_| size)
    }

    /// Constant frame, ignoring the container and previous items.
    pub fn with_frame(self, frame: Rect) -> Self {
        self.with_frame_calculator(move |_| frame)
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

    // ---- Resolution: decoration → host override → container default → fallback ----

    pub(crate) fn resolved_size(&self, ctx: &SizeContext<'_>, defaults: Option<&Defaults>) -> Size {
        let calculator = first_available(&[
            &|| self.decoration.size.clone(),
            &|| self.target.size_calculator(),
            &|| {
                defaults
                    .filter(|_| !self.target.has_intrinsic_size())
                    .and_then(|d| d.size.clone())
            },
        ]);
        match calculator {
            Some(calculator) => calculator(ctx),
            None => self.target.measure(ctx.fitting_size),
        }
    }

    /// Calculator for this pass. Sizing-only passes prefer a sizing
    /// calculator from any tier before falling back to the normal chain.
    pub(crate) fn resolved_frame_calculator(
        &self,
        defaults: Option<&Defaults>,
        sizing_only: bool,
    ) -> FrameCalculator {
        let sizing = if sizing_only {
            first_available(&[
                &|| self.decoration.sizing_frame.clone(),
                &|| self.target.sizing_frame_calculator(),
                &|| defaults.and_then(|d| d.sizing_frame.clone()),
            ])
        } else {
            None
        };
        if let Some(calculator) = sizing {
            return calculator;
        }
        let calculator = first_available(&[
            &|| self.decoration.frame.clone(),
            &|| self.target.frame_calculator(),
            &|| defaults.and_then(|d| d.frame.clone()),
        ]);
        match calculator {
            Some(calculator) => calculator,
            None => Rc::new(calculators::container_left_aligned_vstack),
        }
    }

    pub(crate) fn resolved_spacing(
        &self,
        ctx: &ItemContext<'_>,
        defaults: Option<&Defaults>,
    ) -> EdgeInsets {
        first_available(&[
            &|| self.decoration.spacing.clone(),
            &|| self.target.spacing_calculator(),
            &|| defaults.and_then(|d| d.spacing.clone()),
        ])
        .map_or(EdgeInsets::ZERO, |calculator| calculator(ctx))
    }

    pub(crate) fn resolved_padding(
        &self,
        ctx: &ItemContext<'_>,
        defaults: Option<&Defaults>,
    ) -> EdgeInsets {
        first_available(&[
            &|| self.decoration.padding.clone(),
            &|| self.target.padding_calculator(),
            &|| defaults.and_then(|d| d.padding.clone()),
        ])
        .map_or(EdgeInsets::ZERO, |calculator| calculator(ctx))
    }

    pub(crate) fn resolved_options(
        &self,
        ctx: &ItemContext<'_>,
        defaults: Option<&Defaults>,
    ) -> LayoutOptions {
        first_available(&[
            &|| self.decoration.options.clone(),
            &|| self.target.options_calculator(),
            &|| defaults.and_then(|d| d.options.clone()),
        ])
        .map_or_else(LayoutOptions::default, |calculator| calculator(ctx))
    }

    /// Run the observer, or commit straight to the host when there is none.
    pub(crate) fn observe(&self, ctx: &ObserverContext<'_>, defaults: Option<&Defaults>) {
        let observer = first_available(&[
            &|| self.decoration.observer.clone(),
            &|| self.target.layout_observer(),
            &|| defaults.and_then(|d| d.observer.clone()),
        ]);
        match observer {
            Some(observer) => observer(ctx),
            None => self.target.commit_frame(ctx.frame, ctx.sizing_only),
        }
    }
}
