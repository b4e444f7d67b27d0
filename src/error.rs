//! Errors for misuse of a container by its host.
//!
//! Layout itself never fails. These only come from item-list mutation.

use thiserror::Error;

/// Container mutation error.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The item list was changed while one of its own layout passes was
    /// running, for example from inside a layout observer.
    #[error("item list mutated during an active layout pass")]
    PassInProgress,
    /// The item to remove is not arranged in this container.
    #[error("item is not arranged in this container")]
    ItemNotFound,
}
