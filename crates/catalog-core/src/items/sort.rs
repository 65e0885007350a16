//! Title ordering for the displayed items.

use std::cmp::Ordering;

use crate::catalog::product::Product;

/// Sort mode of the item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Keep the filtered (relevance) order.
    #[default]
    None,
    /// Titles A–Z.
    Ascending,
    /// Titles Z–A.
    Descending,
}

impl SortOrder {
    /// The next mode in the `none → asc → desc → none` cycle used by the
    /// sort control.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Orders `items` by title according to `order`.
///
/// Titles compare case-insensitively, with the exact text as a tiebreak.
/// The sort is stable in both directions, so equal titles keep their input
/// order. [`SortOrder::None`] returns the input order unchanged.
pub fn sort_products<'a>(items: &[&'a Product], order: SortOrder) -> Vec<&'a Product> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::None => {}
        SortOrder::Ascending => sorted.sort_by(|a, b| compare_titles(a, b)),
        SortOrder::Descending => sorted.sort_by(|a, b| compare_titles(b, a)),
    }
    sorted
}

fn compare_titles(a: &Product, b: &Product) -> Ordering {
    a.title()
        .to_lowercase()
        .cmp(&b.title().to_lowercase())
        .then_with(|| a.title().cmp(b.title()))
}
