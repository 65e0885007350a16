//! User-triggerable actions of the catalog screen.
//!
//! Every action is represented by the [`Action`] enum. [`ActionRegistry`]
//! provides metadata (id, name, description, category) used to resolve
//! keymap entries and to list bindings in the help popup.

/// Every user-triggerable action.
///
/// Variants carry no parameters; context is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorTop,
    CursorBottom,
    // Items
    ToggleSelect,
    DeleteSelected,
    Reset,
    // View
    Search,
    SortCycle,
    // System
    Help,
    Quit,
}

/// Broad category for grouping actions in the help popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Items,
    View,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Items => "Items",
            Self::View => "View",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"cursor_up"`).
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActionCategory,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        use Action as A;
        use ActionCategory as C;
        let descriptors = vec![
            ActionDescriptor {
                action: A::CursorUp,
                id: "cursor_up",
                name: "Cursor Up",
                description: "Move to the card above",
                category: C::Navigation,
            },
            ActionDescriptor {
                action: A::CursorDown,
                id: "cursor_down",
                name: "Cursor Down",
                description: "Move to the card below",
                category: C::Navigation,
            },
            ActionDescriptor {
                action: A::CursorLeft,
                id: "cursor_left",
                name: "Cursor Left",
                description: "Move to the previous card",
                category: C::Navigation,
            },
            ActionDescriptor {
                action: A::CursorRight,
                id: "cursor_right",
                name: "Cursor Right",
                description: "Move to the next card",
                category: C::Navigation,
            },
            ActionDescriptor {
                action: A::CursorTop,
                id: "go_first",
                name: "Go to First",
                description: "Jump to the first card",
                category: C::Navigation,
            },
            ActionDescriptor {
                action: A::CursorBottom,
                id: "go_last",
                name: "Go to Last",
                description: "Jump to the last card",
                category: C::Navigation,
            },
            ActionDescriptor {
                action: A::ToggleSelect,
                id: "toggle_select",
                name: "Toggle Select",
                description: "Select or deselect the focused card",
                category: C::Items,
            },
            ActionDescriptor {
                action: A::DeleteSelected,
                id: "delete_selected",
                name: "Delete Selected",
                description: "Remove every selected product",
                category: C::Items,
            },
            ActionDescriptor {
                action: A::Reset,
                id: "reset",
                name: "Reset",
                description: "Restore all products and clear search, sort and selection",
                category: C::Items,
            },
            ActionDescriptor {
                action: A::Search,
                id: "search",
                name: "Search",
                description: "Focus the search bar",
                category: C::View,
            },
            ActionDescriptor {
                action: A::SortCycle,
                id: "sort_cycle",
                name: "Sort",
                description: "Cycle title sort: none, ascending, descending",
                category: C::View,
            },
            ActionDescriptor {
                action: A::Help,
                id: "help",
                name: "Help",
                description: "Show keyboard shortcuts",
                category: C::System,
            },
            ActionDescriptor {
                action: A::Quit,
                id: "quit",
                name: "Quit",
                description: "Exit the catalog",
                category: C::System,
            },
        ];
        Self { descriptors }
    }

    /// Returns all descriptors.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Finds an action by its string id (for keymap.toml parsing).
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    /// Returns the descriptor for a given action.
    pub fn descriptor_for(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
