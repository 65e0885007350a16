//! Configuration management.
//!
//! User preferences ([`settings::Config`]), key bindings ([`keymap::Keymap`])
//! and colors ([`theme::Theme`]) are stored as TOML files and loaded at
//! startup. Every file is optional.

pub mod keymap;
pub mod settings;
pub mod theme;

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "default.toml";
/// Key binding file name inside the config directory.
pub const KEYMAP_FILE: &str = "keymap.toml";
/// Theme file name inside the config directory.
pub const THEME_FILE: &str = "theme.toml";

/// Resolves the config directory: `./config` when present, otherwise
/// `$HOME/.config/catalog`.
pub fn config_dir() -> PathBuf {
    let local = Path::new("config");
    if local.is_dir() {
        return local.to_path_buf();
    }
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("catalog")
}

/// Unwraps a config load result, falling back to the default.
///
/// A missing file is expected and silent; any other error is logged.
pub fn or_default<T: Default>(result: CoreResult<T>, path: &Path) -> T {
    match result {
        Ok(value) => {
            tracing::info!(path = %path.display(), "loaded config");
            value
        }
        Err(CoreError::NotFound(_)) => T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn or_default_on_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(SETTINGS_FILE);

        let config = or_default(Config::load(&path), &path);

        assert_eq!(config.search.debounce_ms, 500);
    }

    #[test]
    fn or_default_on_invalid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(KEYMAP_FILE);
        fs::write(&path, "not [[[ toml").unwrap();

        let keymap = or_default(keymap::Keymap::load(&path), &path);

        assert_eq!(
            keymap.action_for_key("q"),
            Some(crate::action::Action::Quit)
        );
    }

    #[test]
    fn or_default_keeps_loaded_value() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(SETTINGS_FILE);
        fs::write(&path, "[general]\nconfirm_delete = false\n").unwrap();

        let config = or_default(Config::load(&path), &path);

        assert!(!config.general.confirm_delete);
    }

    #[test]
    fn config_dir_ends_with_catalog_or_is_local() {
        let dir = config_dir();
        assert!(dir.ends_with("catalog") || dir == Path::new("config"));
    }
}
