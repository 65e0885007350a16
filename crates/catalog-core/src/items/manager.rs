//! The items manager: dataset plus session state behind screen operations.

use crate::catalog::product::{Product, ProductId};
use crate::catalog::Catalog;
use crate::event::Command;
use crate::items::pipeline::{active_items, derive_items};
use crate::items::search::DEFAULT_THRESHOLD;
use crate::items::sort::SortOrder;
use crate::items::state::ItemsState;

/// Owns the product dataset and the current [`ItemsState`].
///
/// Every operation consumes the manager and returns the next one, so a
/// caller always holds a consistent snapshot. Derived lists are computed on
/// demand from the current state and never cached.
#[derive(Debug, Clone)]
pub struct ItemsManager {
    catalog: Catalog,
    state: ItemsState,
    threshold: f64,
}

impl ItemsManager {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ItemsState::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Sets the fuzzy-search error threshold (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn with_threshold(self, threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ItemsState {
        &self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn sort(&self) -> SortOrder {
        self.state.sort()
    }

    /// Applies a raw [`Command`] to the state.
    ///
    /// `ToggleSelect` on an id that is unknown or already deleted is
    /// ignored, so the selection stays a subset of the active items.
    #[must_use]
    pub fn dispatch(self, command: Command) -> Self {
        if let Command::ToggleSelect(ref id) = command {
            if !self.catalog.contains(id) || self.state.is_deleted(id) {
                tracing::warn!(%id, "ignoring selection toggle for inactive product");
                return self;
            }
        }
        tracing::debug!(?command, "dispatch");
        Self {
            state: self.state.reduce(command),
            ..self
        }
    }

    #[must_use]
    pub fn set_query(self, query: impl Into<String>) -> Self {
        self.dispatch(Command::SetQuery(query.into()))
    }

    #[must_use]
    pub fn set_sort(self, sort: SortOrder) -> Self {
        self.dispatch(Command::SetSort(sort))
    }

    #[must_use]
    pub fn toggle_select(self, id: ProductId) -> Self {
        self.dispatch(Command::ToggleSelect(id))
    }

    #[must_use]
    pub fn delete_selected(self) -> Self {
        let count = self.state.selected_ids().len();
        if count > 0 {
            tracing::info!(count, "deleting selected products");
        }
        self.dispatch(Command::DeleteSelected)
    }

    #[must_use]
    pub fn reset(self) -> Self {
        tracing::info!("resetting items state");
        self.dispatch(Command::Reset)
    }

    /// Products not soft-deleted, in dataset order.
    pub fn active_items(&self) -> Vec<&Product> {
        active_items(&self.catalog, self.state.deleted_ids())
    }

    /// The displayed list: active, filtered by the query, then sorted.
    pub fn items(&self) -> Vec<&Product> {
        derive_items(&self.catalog, &self.state, self.threshold)
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.state.is_selected(id)
    }

    pub fn selected_count(&self) -> usize {
        self.state.selected_ids().len()
    }

    pub fn deleted_count(&self) -> usize {
        self.state.deleted_ids().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ItemsManager {
        let catalog = Catalog::new(vec![
            Product::new("1", "Wireless Headphones").with_tags(["audio"]),
            Product::new("2", "Espresso Machine").with_tags(["kitchen"]),
            Product::new("3", "Portable Speaker").with_tags(["audio"]),
        ])
        .unwrap();
        ItemsManager::new(catalog)
    }

    fn ids(items: &[&Product]) -> Vec<String> {
        items.iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn initial_items_equal_dataset() {
        let m = manager();
        assert_eq!(ids(&m.items()), vec!["1", "2", "3"]);
        assert_eq!(m.sort(), SortOrder::None);
        assert_eq!(m.query(), "");
    }

    #[test]
    fn toggle_then_delete_removes_from_items() {
        let m = manager()
            .toggle_select(ProductId::from("2"))
            .delete_selected();

        assert_eq!(ids(&m.items()), vec!["1", "3"]);
        assert_eq!(m.selected_count(), 0);
        assert_eq!(m.deleted_count(), 1);
    }

    #[test]
    fn toggle_unknown_id_is_ignored() {
        let m = manager().toggle_select(ProductId::from("99"));
        assert_eq!(m.selected_count(), 0);
    }

    #[test]
    fn toggle_deleted_id_is_ignored() {
        let m = manager()
            .toggle_select(ProductId::from("1"))
            .delete_selected()
            .toggle_select(ProductId::from("1"));
        assert!(!m.is_selected(&ProductId::from("1")));
        assert_eq!(m.selected_count(), 0);
    }

    #[test]
    fn selection_survives_filtering() {
        let m = manager()
            .toggle_select(ProductId::from("2"))
            .set_query("audio");

        assert_eq!(ids(&m.items()), vec!["1", "3"]);
        assert!(m.is_selected(&ProductId::from("2")));

        let m = m.delete_selected().set_query("");
        assert_eq!(ids(&m.items()), vec!["1", "3"]);
    }

    #[test]
    fn delete_without_selection_changes_nothing() {
        let m = manager().set_query("audio");
        let before = m.state().clone();
        let m = m.delete_selected();
        assert_eq!(m.state(), &before);
    }

    #[test]
    fn reset_restores_initial_view() {
        let m = manager()
            .set_query("audio")
            .set_sort(SortOrder::Descending)
            .toggle_select(ProductId::from("1"))
            .delete_selected()
            .toggle_select(ProductId::from("3"))
            .reset();

        assert_eq!(m.state(), &ItemsState::default());
        assert_eq!(ids(&m.items()), vec!["1", "2", "3"]);
    }

    #[test]
    fn active_items_ignore_query() {
        let m = manager().set_query("espresso");
        assert_eq!(m.items().len(), 1);
        assert_eq!(m.active_items().len(), 3);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(manager().with_threshold(4.0).threshold(), 1.0);
        assert_eq!(manager().with_threshold(-1.0).threshold(), 0.0);
    }

    #[test]
    fn typo_query_finds_product() {
        let m = manager().set_query("expresso");
        assert_eq!(ids(&m.items()), vec!["2"]);
    }
}
