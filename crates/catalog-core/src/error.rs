//! Error types for `catalog-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. The items state manager
//! itself never fails; errors only arise while loading files.

use std::path::PathBuf;

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to read the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The product dataset is not valid JSON or has the wrong shape.
    #[error("dataset parse error: {0}")]
    DatasetParse(String),

    /// Two products in the dataset share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `catalog-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Reads a file to a string, mapping the common failure kinds onto
/// [`CoreError::NotFound`] and [`CoreError::PermissionDenied`].
pub(crate) fn read_to_string(path: &std::path::Path) -> CoreResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/products.json"));
        assert_eq!(err.to_string(), "path not found: /missing/products.json");
    }

    #[test]
    fn permission_denied_displays_path() {
        let err = CoreError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "permission denied: /secret");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn dataset_parse_displays_message() {
        let err = CoreError::DatasetParse("expected array".to_string());
        assert_eq!(err.to_string(), "dataset parse error: expected array");
    }

    #[test]
    fn duplicate_id_displays_id() {
        let err = CoreError::DuplicateId("42".to_string());
        assert_eq!(err.to_string(), "duplicate product id: 42");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn read_to_string_missing_file_is_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = read_to_string(&tmp.path().join("nope.json"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }
}
