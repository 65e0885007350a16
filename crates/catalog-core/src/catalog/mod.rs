//! Product dataset.
//!
//! A [`Catalog`] is the immutable, ordered list of [`Product`]s the screen
//! browses. It is read once at startup, either from the dataset bundled into
//! the binary ([`Catalog::bundled`]) or from a JSON file ([`Catalog::load`]).

pub mod product;

use std::collections::HashSet;
use std::path::Path;

use crate::error::{read_to_string, CoreError, CoreResult};
use product::{Product, ProductId};

/// The dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../data/products.json");

/// Ordered, immutable product dataset with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from already-constructed products.
    ///
    /// # Errors
    ///
    /// [`CoreError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id()) {
                return Err(CoreError::DuplicateId(p.id().to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Parses a JSON array of product records.
    ///
    /// # Errors
    ///
    /// - [`CoreError::DatasetParse`] if the JSON is malformed.
    /// - [`CoreError::DuplicateId`] if two products share an id.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CoreError::DatasetParse(e.to_string()))?;
        Self::new(products)
    }

    /// Loads a dataset from a JSON file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::DatasetParse`] / [`CoreError::DuplicateId`] as for
    ///   [`Catalog::from_json`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "dataset loaded");
        Ok(catalog)
    }

    /// Parses the bundled dataset.
    ///
    /// # Errors
    ///
    /// Only if the bundled file itself is broken.
    pub fn bundled() -> CoreResult<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns `true` if a product with `id` exists in the dataset.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| p.id() == id)
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn bundled_dataset_parses_and_is_not_empty() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn from_json_preserves_order() {
        let catalog = Catalog::from_json(
            r#"[{"id": 3, "title": "C"}, {"id": 1, "title": "A"}, {"id": 2, "title": "B"}]"#,
        )
        .unwrap();
        let titles: Vec<&str> = catalog.products().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn from_json_empty_array() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn from_json_rejects_non_array() {
        let result = Catalog::from_json(r#"{"id": 1}"#);
        assert!(matches!(result.unwrap_err(), CoreError::DatasetParse(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected_across_number_and_string() {
        let result = Catalog::from_json(r#"[{"id": 1}, {"id": "1"}]"#);
        assert!(matches!(result.unwrap_err(), CoreError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn contains_and_get() {
        let catalog = Catalog::new(vec![Product::new("a", "Apple")]).unwrap();
        assert!(catalog.contains(&ProductId::from("a")));
        assert!(!catalog.contains(&ProductId::from("b")));
        assert_eq!(catalog.get(&ProductId::from("a")).unwrap().title(), "Apple");
    }

    #[test]
    fn load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("products.json");
        fs::write(&path, r#"[{"id": 1, "title": "Lamp"}]"#).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].title(), "Lamp");
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Catalog::load(&tmp.path().join("missing.json"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }
}
