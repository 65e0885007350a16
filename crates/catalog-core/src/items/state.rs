//! Session state of the items screen and its reducer.

use std::collections::BTreeSet;

use crate::catalog::product::ProductId;
use crate::event::Command;
use crate::items::sort::SortOrder;

/// Raw, user-driven state: query, sort, soft-deleted and selected ids.
///
/// Immutable: [`ItemsState::reduce`] consumes the state and returns the
/// next one. The default value is the initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsState {
    query: String,
    sort: SortOrder,
    deleted_ids: BTreeSet<ProductId>,
    selected_ids: BTreeSet<ProductId>,
}

impl ItemsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn deleted_ids(&self) -> &BTreeSet<ProductId> {
        &self.deleted_ids
    }

    pub fn selected_ids(&self) -> &BTreeSet<ProductId> {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn is_deleted(&self, id: &ProductId) -> bool {
        self.deleted_ids.contains(id)
    }

    /// Applies `command` and returns the resulting state.
    #[must_use]
    pub fn reduce(self, command: Command) -> Self {
        match command {
            Command::SetQuery(query) => Self { query, ..self },
            Command::SetSort(sort) => Self { sort, ..self },
            Command::Reset => Self::default(),
            Command::ToggleSelect(id) => {
                let mut selected_ids = self.selected_ids;
                if !selected_ids.remove(&id) {
                    selected_ids.insert(id);
                }
                Self {
                    selected_ids,
                    ..self
                }
            }
            Command::DeleteSelected => {
                let mut deleted_ids = self.deleted_ids;
                deleted_ids.extend(self.selected_ids);
                Self {
                    deleted_ids,
                    selected_ids: BTreeSet::new(),
                    ..self
                }
            }
        }
    }
}
