use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, AppMode, ConfirmAction};
use crate::ui::card::CardPool;
use crate::ui::controls::{render_controls, ControlsProps};
use crate::ui::grid::render_grid;
use crate::ui::popup::{confirm_delete_lines, help_lines, render_popup};
use crate::ui::search_bar::{render_search_bar, SearchBarProps};
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub search: Rect,
    pub controls: Rect,
    pub list: Rect,
    pub statusbar: Rect,
}

impl ScreenLayout {
    /// Splits `area` into search bar, controls row, card list and status
    /// bar. The list is inset horizontally by `padding` on each side.
    pub fn split(area: Rect, padding: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let list = chunks[2];
        let inset = padding.min(list.width / 2);
        let list = Rect::new(
            list.x + inset,
            list.y,
            list.width - inset * 2,
            list.height,
        );

        Self {
            search: chunks[0],
            controls: chunks[1],
            list,
            statusbar: chunks[3],
        }
    }
}

/// Render-side state that outlives a single frame.
#[derive(Debug, Default)]
pub struct RenderState {
    pub cards: CardPool,
    pub query_pending: bool,
}

/// Main render function. Composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App, state: &mut RenderState) {
    let theme = app.theme();
    let screen = ScreenLayout::split(f.area(), app.config().layout.padding);
    let items = app.visible_items();

    render_search_bar(
        f,
        screen.search,
        &SearchBarProps {
            text: app.search_text(),
            focused: matches!(app.mode(), AppMode::Search),
            pending: state.query_pending,
        },
        theme,
    );

    render_controls(
        f,
        screen.controls,
        &ControlsProps {
            sort: app.items().sort(),
            selected_count: app.items().selected_count(),
            keymap: app.keymap(),
        },
        theme,
    );

    render_grid(f, screen.list, app, &items, &mut state.cards);

    render_statusbar(
        f,
        screen.statusbar,
        &StatusBarProps {
            item_count: items.len(),
            cursor: app.cursor(),
            selected_count: app.items().selected_count(),
            deleted_count: app.items().deleted_count(),
            orientation: app.grid().orientation(),
            columns: app.grid().columns(),
            status_message: app.status_message(),
        },
        theme,
    );

    match app.mode() {
        AppMode::Help => render_popup(
            f,
            "Help",
            &help_lines(app.action_registry(), app.keymap()),
            (60, 80),
            theme,
        ),
        AppMode::Confirm(ConfirmAction::DeleteSelected(count)) => render_popup(
            f,
            "Confirm",
            &confirm_delete_lines(*count),
            (50, 30),
            theme,
        ),
        AppMode::Normal | AppMode::Search => {}
    }
}
