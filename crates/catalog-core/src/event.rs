//! Commands flowing from the UI into the items state manager.
//!
//! The UI translates user input into [`Command`]s; the core applies them
//! with [`ItemsState::reduce`](crate::items::state::ItemsState::reduce).
//! Any frontend can drive the same state this way.

use crate::catalog::product::ProductId;
use crate::items::sort::SortOrder;

/// A state transition the UI requests.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search query. Empty means "no filter".
    SetQuery(String),
    /// Replace the sort mode.
    SetSort(SortOrder),
    /// Flip the selection of one product.
    ToggleSelect(ProductId),
    /// Soft-delete every selected product and clear the selection.
    DeleteSelected,
    /// Restore the initial state.
    Reset,
}
