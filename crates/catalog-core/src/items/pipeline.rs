//! Derived item views, recomputed from the dataset and [`ItemsState`].

use std::collections::BTreeSet;

use crate::catalog::product::{Product, ProductId};
use crate::catalog::Catalog;
use crate::items::search::fuzzy_filter;
use crate::items::sort::sort_products;
use crate::items::state::ItemsState;

/// Dataset products not soft-deleted, in dataset order.
pub fn active_items<'a>(catalog: &'a Catalog, deleted: &BTreeSet<ProductId>) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| !deleted.contains(p.id()))
        .collect()
}

/// The displayed list: active products, filtered by the query, then sorted.
pub fn derive_items<'a>(
    catalog: &'a Catalog,
    state: &ItemsState,
    threshold: f64,
) -> Vec<&'a Product> {
    let active = active_items(catalog, state.deleted_ids());
    let filtered: Vec<&Product> = fuzzy_filter(&active, state.query(), threshold)
        .into_iter()
        .map(|hit| hit.product())
        .collect();
    sort_products(&filtered, state.sort())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Command;
    use crate::items::search::DEFAULT_THRESHOLD;
    use crate::items::sort::SortOrder;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("1", "Banana").with_tags(["fruit"]),
            Product::new("2", "Apple").with_tags(["fruit"]),
            Product::new("3", "Cherry").with_tags(["fruit", "red"]),
        ])
        .unwrap()
    }

    fn titles<'a>(items: &[&'a Product]) -> Vec<&'a str> {
        items.iter().map(|p| p.title()).collect()
    }

    #[test]
    fn blank_query_lists_dataset_minus_deleted() {
        let catalog = catalog();
        let state = ItemsState::new()
            .reduce(Command::ToggleSelect(ProductId::from("2")))
            .reduce(Command::DeleteSelected)
            .reduce(Command::SetQuery("   ".into()));

        let items = derive_items(&catalog, &state, DEFAULT_THRESHOLD);

        assert_eq!(titles(&items), vec!["Banana", "Cherry"]);
    }

    #[test]
    fn items_are_a_subset_of_active_items() {
        let catalog = catalog();
        let state = ItemsState::new()
            .reduce(Command::ToggleSelect(ProductId::from("3")))
            .reduce(Command::DeleteSelected)
            .reduce(Command::SetQuery("fruit".into()));

        let active = active_items(&catalog, state.deleted_ids());
        let items = derive_items(&catalog, &state, DEFAULT_THRESHOLD);

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|p| active.iter().any(|a| a.id() == p.id())));
    }

    #[test]
    fn sort_cycle_on_fruit() {
        let catalog = catalog();
        let mut state = ItemsState::new();

        let next = state.sort().next();
        state = state.reduce(Command::SetSort(next));
        assert_eq!(
            titles(&derive_items(&catalog, &state, DEFAULT_THRESHOLD)),
            vec!["Apple", "Banana", "Cherry"]
        );

        let next = state.sort().next();
        state = state.reduce(Command::SetSort(next));
        assert_eq!(
            titles(&derive_items(&catalog, &state, DEFAULT_THRESHOLD)),
            vec!["Cherry", "Banana", "Apple"]
        );

        let next = state.sort().next();
        state = state.reduce(Command::SetSort(next));
        assert_eq!(state.sort(), SortOrder::None);
        assert_eq!(
            titles(&derive_items(&catalog, &state, DEFAULT_THRESHOLD)),
            vec!["Banana", "Apple", "Cherry"]
        );
    }

    #[test]
    fn query_then_sort() {
        let catalog = catalog();
        let state = ItemsState::new()
            .reduce(Command::SetQuery("fruit".into()))
            .reduce(Command::SetSort(SortOrder::Descending));

        let items = derive_items(&catalog, &state, DEFAULT_THRESHOLD);

        assert_eq!(titles(&items), vec!["Cherry", "Banana", "Apple"]);
    }

    #[test]
    fn empty_dataset_yields_empty_items() {
        let catalog = Catalog::default();
        let state = ItemsState::new().reduce(Command::SetQuery("anything".into()));

        assert!(active_items(&catalog, state.deleted_ids()).is_empty());
        assert!(derive_items(&catalog, &state, DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn all_deleted_yields_empty_items() {
        let catalog = catalog();
        let mut state = ItemsState::new();
        for id in ["1", "2", "3"] {
            state = state.reduce(Command::ToggleSelect(ProductId::from(id)));
        }
        state = state.reduce(Command::DeleteSelected);

        assert!(derive_items(&catalog, &state, DEFAULT_THRESHOLD).is_empty());
    }
}
