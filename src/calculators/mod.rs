//! Frame calculators: pure functions from a [`FrameContext`](crate::FrameContext)
//! to a [`Rect`](crate::Rect).
//!
//! Everything here is built from the transforms in [`primitives`]. A named
//! calculator is a left-to-right composition of them, for example
//!
//! ```text
//! container_left_aligned_vstack = align_to_container_left ∘ align_below_previous ∘ origin
//! ```
//!
//! Custom calculators are written the same way:
//!
//! ```
//! use seqlayout::calculators::*;
//! use seqlayout::{FrameContext, Rect};
//!
//! // Below the previous item, right-aligned, as tall as its content at full width.
//! fn banner(ctx: &FrameContext<'_>) -> Rect {
//!     let rect = align_below_previous(ctx, origin(ctx));
//!     let rect = extend_to_container_left(ctx, align_to_container_right(ctx, rect));
//!     size_to_fit_vertically(ctx, rect, SizeToFit::GrowOrShrink)
//! }
//! # let _ = banner;
//! ```
//!
//! No calculator fails. Missing previous items degrade to the container,
//! and rectangles that end up with a negative size are returned as they are.

mod aligned;
mod fills;
mod flow;
mod named;
pub mod primitives;
mod stacks;

pub use aligned::*;
pub use fills::*;
pub use flow::*;
pub use named::{NamedCalculator, by_name, names};
pub use primitives::*;
pub use stacks::*;
