use ratatui::layout::Rect;

use catalog_core::action::ActionRegistry;
use catalog_core::config::keymap::Keymap;
use catalog_core::config::settings::Config;
use catalog_core::config::theme::Theme;
use catalog_core::config::{config_dir, or_default, KEYMAP_FILE, SETTINGS_FILE, THEME_FILE};
use catalog_core::layout::GridLayout;
use catalog_core::{Catalog, ItemsManager, Product};

use crate::render::ScreenLayout;

/// Application mode. Determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// The search bar has focus; typed characters edit the query text.
    Search,
    Confirm(ConfirmAction),
    Help,
}

/// What action is pending user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete the selection; carries the selected count for the prompt.
    DeleteSelected(usize),
}

/// Top-level application state. Immutable transitions via `with_*` methods.
#[derive(Debug, Clone)]
pub struct App {
    mode: AppMode,
    items: ItemsManager,
    /// Text shown in the search bar. Reaches `items` only through the
    /// debouncer, so it may run ahead of the applied query.
    search_text: String,
    /// Index of the focused card in the displayed list.
    cursor: usize,
    /// First visible grid row.
    scroll: usize,
    list_area: Rect,
    grid: GridLayout,
    /// Bumped whenever the column count changes; cached card content from
    /// an older generation is discarded.
    list_generation: u64,
    should_quit: bool,
    status_message: Option<String>,
    keymap: Keymap,
    action_registry: ActionRegistry,
    theme: Theme,
    config: Config,
}

impl App {
    /// Creates an App over `catalog`, loading settings, keymap and theme
    /// from the config directory.
    pub fn new(catalog: Catalog) -> Self {
        let dir = config_dir();

        let settings_path = dir.join(SETTINGS_FILE);
        let config = or_default(Config::load(&settings_path), &settings_path);

        let keymap_path = dir.join(KEYMAP_FILE);
        let keymap = or_default(Keymap::load(&keymap_path), &keymap_path);

        let theme_path = dir.join(THEME_FILE);
        let theme = or_default(Theme::load(&theme_path), &theme_path);

        Self::from_parts(catalog, config, keymap, theme)
    }

    pub fn from_parts(catalog: Catalog, config: Config, keymap: Keymap, theme: Theme) -> Self {
        let items = ItemsManager::new(catalog).with_threshold(config.search.threshold);
        let grid = GridLayout::compute(0, 0, 0, &config.layout);
        Self {
            mode: AppMode::Normal,
            items,
            search_text: String::new(),
            cursor: 0,
            scroll: 0,
            list_area: Rect::default(),
            grid,
            list_generation: 0,
            should_quit: false,
            status_message: None,
            keymap,
            action_registry: ActionRegistry::new(),
            theme,
            config,
        }
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn items(&self) -> &ItemsManager {
        &self.items
    }

    /// The displayed products: filtered, sorted, without deleted ones.
    pub fn visible_items(&self) -> Vec<&Product> {
        self.items.items()
    }

    pub fn focused_product(&self) -> Option<&Product> {
        self.items.items().get(self.cursor).copied()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    #[cfg(test)]
    pub fn list_area(&self) -> Rect {
        self.list_area
    }

    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    pub fn list_generation(&self) -> u64 {
        self.list_generation
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn action_registry(&self) -> &ActionRegistry {
        &self.action_registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Transition to a new mode.
    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    /// Recomputes the grid for a terminal of `width` x `height` cells.
    ///
    /// A change in column count resets the list: scroll returns to the top
    /// and the list generation advances. The cursor is then scrolled back
    /// into view.
    pub fn with_viewport(self, width: u16, height: u16) -> Self {
        let screen = ScreenLayout::split(
            Rect::new(0, 0, width, height),
            self.config.layout.padding,
        );
        let grid = GridLayout::compute(width, height, screen.list.width, &self.config.layout);

        if grid.orientation() != self.grid.orientation() {
            tracing::info!(
                orientation = grid.orientation().label(),
                columns = grid.columns(),
                "orientation changed"
            );
        }

        let (scroll, list_generation) = if grid.columns() == self.grid.columns() {
            (self.scroll, self.list_generation)
        } else {
            tracing::debug!(
                from = self.grid.columns(),
                to = grid.columns(),
                "column count changed, resetting list"
            );
            (0, self.list_generation + 1)
        };

        Self {
            list_area: screen.list,
            grid,
            scroll,
            list_generation,
            ..self
        }
        .with_cursor_revealed()
    }

    /// Clamps the cursor to the displayed list and scrolls it into view.
    fn with_cursor_revealed(self) -> Self {
        let count = self.items.items().len();
        if count == 0 {
            return Self {
                cursor: 0,
                scroll: 0,
                ..self
            };
        }
        let cursor = self.cursor.min(count - 1);
        let height = self.list_area.height;
        let scroll = self
            .grid
            .scroll_to_reveal(self.scroll, cursor, height)
            .min(self.grid.max_scroll(count, height));
        Self {
            cursor,
            scroll,
            ..self
        }
    }

    fn with_cursor(self, cursor: usize) -> Self {
        Self { cursor, ..self }.with_cursor_revealed()
    }

    /// Move to the card one row below (or the last card).
    pub fn with_cursor_down(self) -> Self {
        let count = self.items.items().len();
        let next = (self.cursor + self.grid.columns()).min(count.saturating_sub(1));
        self.with_cursor(next)
    }

    /// Move to the card one row above, if any.
    pub fn with_cursor_up(self) -> Self {
        let cols = self.grid.columns();
        let next = if self.cursor >= cols {
            self.cursor - cols
        } else {
            self.cursor
        };
        self.with_cursor(next)
    }

    pub fn with_cursor_left(self) -> Self {
        let next = self.cursor.saturating_sub(1);
        self.with_cursor(next)
    }

    pub fn with_cursor_right(self) -> Self {
        let count = self.items.items().len();
        let next = (self.cursor + 1).min(count.saturating_sub(1));
        self.with_cursor(next)
    }

    pub fn with_cursor_top(self) -> Self {
        self.with_cursor(0)
    }

    pub fn with_cursor_bottom(self) -> Self {
        let last = self.items.items().len().saturating_sub(1);
        self.with_cursor(last)
    }

    /// Applies a debounced query; the new list starts at the top.
    pub fn with_query(self, query: String) -> Self {
        Self {
            items: self.items.set_query(query),
            cursor: 0,
            scroll: 0,
            ..self
        }
        .with_cursor_revealed()
    }

    pub fn with_search_char(self, c: char) -> Self {
        let mut search_text = self.search_text;
        search_text.push(c);
        Self {
            search_text,
            ..self
        }
    }

    pub fn with_search_backspace(self) -> Self {
        let mut search_text = self.search_text;
        search_text.pop();
        Self {
            search_text,
            ..self
        }
    }

    /// Advances the sort control: none → ascending → descending → none.
    pub fn with_sort_cycle(self) -> Self {
        let next = self.items.sort().next();
        let app = Self {
            items: self.items.set_sort(next),
            ..self
        }
        .with_cursor_revealed();
        app.with_status(format!("Sort: {}", next.label()))
    }

    /// Flips the selection of the focused card.
    pub fn with_toggle_focused(self) -> Self {
        let Some(id) = self.focused_product().map(|p| p.id().clone()) else {
            return self;
        };
        Self {
            items: self.items.toggle_select(id),
            ..self
        }
    }

    /// Starts deleting the selection: asks first when `confirm_delete` is
    /// set, otherwise deletes right away.
    pub fn request_delete(self) -> Self {
        let count = self.items.selected_count();
        if count == 0 {
            return self.with_status("No products selected".to_string());
        }
        if self.config.general.confirm_delete {
            self.with_mode(AppMode::Confirm(ConfirmAction::DeleteSelected(count)))
        } else {
            self.with_delete_selected()
        }
    }

    /// Runs the action awaiting confirmation and returns to Normal mode.
    pub fn with_confirm_approved(self) -> Self {
        match self.mode {
            AppMode::Confirm(ConfirmAction::DeleteSelected(_)) => self.with_delete_selected(),
            _ => self.with_mode(AppMode::Normal),
        }
    }

    fn with_delete_selected(self) -> Self {
        let count = self.items.selected_count();
        let plural = if count == 1 { "" } else { "s" };
        Self {
            items: self.items.delete_selected(),
            mode: AppMode::Normal,
            ..self
        }
        .with_cursor_revealed()
        .with_status(format!("Deleted {count} product{plural}"))
    }

    /// Restores every product and clears query, sort, selection and the
    /// search bar text.
    pub fn with_reset(self) -> Self {
        Self {
            items: self.items.reset(),
            search_text: String::new(),
            cursor: 0,
            scroll: 0,
            mode: AppMode::Normal,
            ..self
        }
        .with_cursor_revealed()
        .with_status("Reset".to_string())
    }
}
