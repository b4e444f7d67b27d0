//! A container that is itself an item of another container.
//!
//! [`NestedContainer`] is shared through an `Rc`: the parent holds it as an
//! [`Item`] while the host keeps a handle to add and remove children. It
//! measures itself with a sizing-only pass over its own items and, when the
//! parent commits its frame, lays its children out inside that frame.
//!
//! Frames of nested children are relative to the nested container's own
//! origin, `(0, 0)`.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use tracing::warn;

use crate::container::{Container, LayoutTrace};
use crate::context::ItemContext;
use crate::defaults::Defaults;
use crate::error::LayoutError;
use crate::geometry::{EdgeInsets, Rect, Size};
use crate::item::{InsetsCalculator, Item, Layoutable};

/// Insets or spacing computed from the nested container's current state.
pub type NestedInsetsCalculator = Rc<dyn Fn(&NestedContainer) -> EdgeInsets>;

/// A [`Container`] with interior mutability and its own frame and insets.
///
/// ```
/// use std::rc::Rc;
/// use seqlayout::{Container, EdgeInsets, Item, Layoutable, NestedContainer, Rect, Size};
///
/// struct Label;
/// impl Layoutable for Label {
///     fn measure(&self, _fitting: Size) -> Size {
///         Size::new(40.0, 10.0)
///     }
/// }
///
/// let card = Rc::new(NestedContainer::new().with_insets(EdgeInsets::uniform(4.0)));
/// card.add_item(Item::new(Rc::new(Label))).unwrap();
/// card.add_item(Item::new(Rc::new(Label))).unwrap();
///
/// let mut root = Container::new();
/// root.add_item(Item::from(Rc::clone(&card)));
/// root.layout(Rect::new(0.0, 0.0, 200.0, 200.0), EdgeInsets::ZERO, false);
///
/// assert_eq!(card.frame(), Rect::new(0.0, 0.0, 48.0, 28.0));
/// ```
#[derive(Default)]
pub struct NestedContainer {
    container: RefCell<Container>,
    len: Cell<usize>,
    insets: Cell<EdgeInsets>,
    insets_calculator: Option<NestedInsetsCalculator>,
    spacing_calculator: Option<NestedInsetsCalculator>,
    frame: Cell<Rect>,
    active: Cell<bool>,
}

impl fmt::Debug for NestedContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedContainer")
            .field("container", &self.container)
            .field("insets", &self.insets.get())
            .field("insets_calculator", &self.insets_calculator.is_some())
            .field("spacing_calculator", &self.spacing_calculator.is_some())
            .field("frame", &self.frame.get())
            .field("active", &self.active.get())
            .finish()
    }
}

impl NestedContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed insets. Replaces any insets calculator.
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets_calculator = None;
        self.insets.set(insets);
        self
    }

    /// Insets recomputed at the start of every pass.
    ///
    /// The calculator may read the container (its length, frame, last
    /// insets) but any layout it starts is refused.
    pub fn with_insets_calculator(
        mut self,
        f: impl Fn(&NestedContainer) -> EdgeInsets + 'static,
    ) -> Self {
        self.insets.set(f(&self));
        self.insets_calculator = Some(Rc::new(f));
        self
    }

    /// Spacing this container asks for from its neighbours in the parent.
    pub fn with_content_spacing(self, spacing: EdgeInsets) -> Self {
        self.with_content_spacing_calculator(move |_| spacing)
    }

    /// Spacing recomputed every time the parent resolves it.
    pub fn with_content_spacing_calculator(
        mut self,
        f: impl Fn(&NestedContainer) -> EdgeInsets + 'static,
    ) -> Self {
        self.spacing_calculator = Some(Rc::new(f));
        self
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.container.get_mut().set_defaults(defaults);
        self
    }

    /// Insets used by the last pass, or the fixed insets.
    pub fn insets(&self) -> EdgeInsets {
        self.insets.get()
    }

    /// Overwritten at the next pass when an insets calculator is set.
    pub fn set_insets(&self, insets: EdgeInsets) {
        self.insets.set(insets);
        self.set_needs_layout();
    }

    /// Last frame committed by the parent. Zero until the first commit.
    pub fn frame(&self) -> Rect {
        self.frame.get()
    }

    /// Number of items, also while the list is borrowed by a pass.
    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn needs_layout(&self) -> bool {
        self.container.try_borrow().is_ok_and(|c| c.needs_layout())
    }

    /// Mark the items for layout. Safe to call from an observer during a
    /// pass: the flag is cleared when a pass starts, not when it ends.
    pub fn set_needs_layout(&self) {
        // Only a list replacement holds the mutable borrow, and it marks
        // the container itself.
        if let Ok(container) = self.container.try_borrow() {
            container.set_needs_layout();
        }
    }

    // ---- Mutation ----
    //
    // Each fails with `PassInProgress` while one of this container's own
    // passes is running, e.g. when called from a child's observer.

    pub fn add_item(&self, item: Item) -> Result<(), LayoutError> {
        self.with_items(|c| c.add_item(item))
    }

    pub fn remove_item(&self, item: &Item) -> Result<Item, LayoutError> {
        self.with_items(|c| c.remove_item(item))?
    }

    pub fn set_items(&self, items: impl IntoIterator<Item = Item>) -> Result<(), LayoutError> {
        // Collect first: the iterator is host code and may look at `self`.
        let items: alloc::vec::Vec<Item> = items.into_iter().collect();
        self.with_items(|c| c.set_items(items))
    }

    pub fn remove_all_items(&self) -> Result<(), LayoutError> {
        self.with_items(Container::remove_all_items)
    }

    fn with_items<R>(&self, f: impl FnOnce(&mut Container) -> R) -> Result<R, LayoutError> {
        match self.container.try_borrow_mut() {
            Ok(mut container) => {
                let result = f(&mut container);
                self.len.set(container.len());
                Ok(result)
            }
            Err(_) => {
                warn!("item list mutated during an active layout pass");
                Err(LayoutError::PassInProgress)
            }
        }
    }

    // ---- Layout ----

    /// Lay the children out in `bounds` using this container's insets.
    ///
    /// A pass that would re-enter itself (the container is among its own
    /// items, directly or further down) is refused and returns `Rect::ZERO`.
    pub fn layout(&self, bounds: Rect, sizing_only: bool) -> Rect {
        self.guarded(Rect::ZERO, |c, insets| c.layout(bounds, insets, sizing_only))
    }

    /// [`layout`](Self::layout), recording every placement. `None` if refused.
    pub fn layout_traced(&self, bounds: Rect, sizing_only: bool) -> Option<LayoutTrace> {
        self.guarded(None, |c, insets| {
            Some(c.layout_traced(bounds, insets, sizing_only))
        })
    }

    /// Insets plus the space the children occupy within `fitting_size`.
    pub fn measure_ideal_size(&self, fitting_size: Size) -> Size {
        self.guarded(Size::ZERO, |c, insets| {
            c.measure_ideal_size(fitting_size, insets)
        })
    }

    fn guarded<R>(&self, refused: R, pass: impl FnOnce(&Container, EdgeInsets) -> R) -> R {
        if self.active.replace(true) {
            warn!("re-entrant layout of a nested container refused");
            return refused;
        }
        let _active = ActiveGuard(&self.active);
        let insets = self.resolve_insets();
        match self.container.try_borrow() {
            Ok(container) => pass(&container, insets),
            Err(_) => {
                warn!("layout requested while the item list is being replaced");
                refused
            }
        }
    }

    fn resolve_insets(&self) -> EdgeInsets {
        if let Some(calculator) = &self.insets_calculator {
            self.insets.set(calculator(self));
        }
        self.insets.get()
    }
}

impl Layoutable for NestedContainer {
    fn measure(&self, fitting_size: Size) -> Size {
        self.measure_ideal_size(fitting_size)
    }

    fn commit_frame(&self, frame: Rect, sizing_only: bool) {
        if sizing_only {
            return;
        }
        self.frame.set(frame);
        self.layout(Rect::from_size(frame.size()), false);
    }

    /// Fill unset defaults from the parent and pass the result further down.
    fn inherit_defaults(&self, parent: &Defaults) {
        match self.container.try_borrow_mut() {
            Ok(mut container) => {
                let merged = container.defaults().clone().inherit_from(parent);
                container.set_defaults(merged);
            }
            // The list is borrowed by a pass or a replacement, which also
            // covers a container that contains itself.
            Err(_) => warn!("nested container defaults not inherited: item list in use"),
        }
    }

    fn spacing_calculator(&self) -> Option<InsetsCalculator> {
        self.spacing_calculator.as_ref().map(|calculator| {
            let spacing = calculator(self);
            Rc::new(move |_: &ItemContext<'_>| spacing) as InsetsCalculator
        })
    }
}

impl From<NestedContainer> for Item {
    fn from(container: NestedContainer) -> Self {
        Item::from(Rc::new(container))
    }
}

/// Clears the re-entrancy flag when a pass ends, even by unwinding.
struct ActiveGuard<'a>(&'a Cell<bool>);

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
