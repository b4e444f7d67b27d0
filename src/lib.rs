//! Sequential flow layout for arbitrary host objects.
//!
//! A [`Container`] walks its items in order, asks each item's frame
//! calculator where it goes given the container and the previously placed
//! item, tells the item through its observer, and returns the bounds all
//! items occupy. There is no constraint solver: each frame is a pure
//! function of what came before it.
//!
//! # Modules
//!
//! - [`geometry`]: `Size`, `EdgeInsets`, `Rect`
//! - [`context`]: per-pass snapshots passed to calculators and observers
//! - [`item`]: the [`Layoutable`] host trait and the decorated [`Item`]
//! - [`defaults`]: container-wide fallbacks for undecorated items
//! - [`calculators`]: primitive transforms and the named calculator library
//! - [`container`]: the layout pass itself
//! - [`nested`]: containers that are items of other containers
//! - `svg` (feature `svg`): diagrams of recorded passes
//! - `query` (feature `query`): item configuration from query strings

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod calculators;
pub mod container;
pub mod context;
pub mod defaults;
pub mod error;
pub mod geometry;
pub mod item;
pub mod nested;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use container::{Container, LayoutTrace, Placement};
pub use context::{
    ContainerDescription, FrameContext, ItemContext, LayoutOptions, ObserverContext, PreviousItem,
    SizeContext,
};
pub use defaults::Defaults;
pub use error::LayoutError;
pub use geometry::{EdgeInsets, MAX_LAYOUT_DIMENSION, Rect, Size, UNBOUNDED};
pub use item::{
    Decoration, FrameCalculator, InsetsCalculator, Item, LayoutObserver, Layoutable,
    OptionsCalculator, SizeCalculator,
};
pub use nested::{NestedContainer, NestedInsetsCalculator};
