//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"gg"`, `"Space"`) to [`Action`]
//! values. The default bindings follow vim conventions.
//!
//! A binding is a sequence of key presses: a named key such as `"Space"`
//! is a single press, anything else is one press per character. Sequence
//! matching compares whole presses, so `"S"` is not a prefix of `"Space"`.
//!
//! TOML files use string action identifiers (e.g. `"cursor_down"`); these
//! are resolved to [`Action`] via [`ActionRegistry::find_by_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionRegistry};
use crate::error::{read_to_string, CoreError, CoreResult};

/// Raw TOML representation, deserialized first, then resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Keys whose name is longer than one character.
const NAMED_KEYS: &[&str] = &[
    "Space",
    "Enter",
    "Tab",
    "Backspace",
    "Up",
    "Down",
    "Left",
    "Right",
    "Home",
    "End",
];

/// Splits a binding string into the key presses it stands for.
pub fn key_sequence(binding: &str) -> Vec<String> {
    if NAMED_KEYS.contains(&binding) {
        return vec![binding.to_string()];
    }
    binding.chars().map(String::from).collect()
}

/// Complete set of key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Bindings keyed by their key-press sequence.
    sequences: HashMap<Vec<String>, Action>,
    /// Reverse map: Action → list of key strings (for help display).
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Navigation
        bindings.insert("j".to_string(), Action::CursorDown);
        bindings.insert("k".to_string(), Action::CursorUp);
        bindings.insert("h".to_string(), Action::CursorLeft);
        bindings.insert("l".to_string(), Action::CursorRight);
        bindings.insert("Down".to_string(), Action::CursorDown);
        bindings.insert("Up".to_string(), Action::CursorUp);
        bindings.insert("Left".to_string(), Action::CursorLeft);
        bindings.insert("Right".to_string(), Action::CursorRight);
        bindings.insert("gg".to_string(), Action::CursorTop);
        bindings.insert("G".to_string(), Action::CursorBottom);

        // Items
        bindings.insert("Space".to_string(), Action::ToggleSelect);
        bindings.insert("Enter".to_string(), Action::ToggleSelect);
        bindings.insert("d".to_string(), Action::DeleteSelected);
        bindings.insert("r".to_string(), Action::Reset);

        // View
        bindings.insert("/".to_string(), Action::Search);
        bindings.insert("s".to_string(), Action::SortCycle);

        // System
        bindings.insert("?".to_string(), Action::Help);
        bindings.insert("q".to_string(), Action::Quit);

        Self::from_bindings(bindings)
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sort keys for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// String action identifiers are resolved via `ActionRegistry`.
    /// Unknown action strings are ignored with a warning.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = read_to_string(path)?;
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    /// Converts a raw (string-based) keymap into a resolved one.
    fn from_raw(raw: RawKeymap) -> Self {
        let registry = ActionRegistry::new();
        let bindings: HashMap<String, Action> = raw
            .bindings
            .into_iter()
            .filter_map(|(key, action_id)| match registry.find_by_id(&action_id) {
                Some(action) => Some((key, action)),
                None => {
                    tracing::warn!(%key, %action_id, "unknown action in keymap");
                    None
                }
            })
            .collect();
        Self::from_bindings(bindings)
    }

    fn from_bindings(bindings: HashMap<String, Action>) -> Self {
        let sequences = bindings
            .iter()
            .map(|(key, action)| (key_sequence(key), *action))
            .collect();
        let reverse = build_reverse(&bindings);
        Self {
            bindings,
            sequences,
            reverse,
        }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }

    /// Returns the action bound to the key presses in `keys`.
    pub fn action_for_sequence(&self, keys: &[String]) -> Option<Action> {
        self.sequences.get(keys).copied()
    }

    /// Returns `true` if some longer binding starts with the presses in
    /// `keys`.
    pub fn has_prefix(&self, keys: &[String]) -> bool {
        self.sequences
            .keys()
            .any(|seq| seq.len() > keys.len() && seq.starts_with(keys))
    }

    /// Returns all bindings.
    pub fn bindings(&self) -> &HashMap<String, Action> {
        &self.bindings
    }
}
