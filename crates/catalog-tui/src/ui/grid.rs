//! Virtualized card grid.
//!
//! Only the rows intersecting the list area, plus the configured overscan
//! rows, are prepared through the [`CardPool`]; of those, only the rows
//! actually on screen are drawn.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use catalog_core::config::theme::parse_color;
use catalog_core::Product;

use crate::app::App;
use crate::ui::card::{description_lines, render_card, CardPool};

pub fn render_grid(f: &mut Frame, area: Rect, app: &App, items: &[&Product], pool: &mut CardPool) {
    let theme = app.theme();
    if items.is_empty() {
        let query = app.items().query();
        let msg = if query.trim().is_empty() {
            "No products".to_string()
        } else {
            format!("No products match \"{query}\"")
        };
        let empty = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(parse_color(&theme.search.placeholder_fg)));
        f.render_widget(empty, area);
        pool.begin_frame(app.list_generation(), 0, 0, &[]);
        return;
    }

    let grid = app.grid();
    let scroll = app.scroll();
    let window = grid.window(
        scroll,
        area.height,
        items.len(),
        app.config().layout.overscan_rows,
    );
    let inner_width = grid.card_width().saturating_sub(2);
    pool.begin_frame(
        app.list_generation(),
        inner_width,
        description_lines(grid.card_height()),
        &items[window.clone()],
    );

    let cols = grid.columns();
    let stride = usize::from(grid.row_stride());
    for index in window {
        let product = items[index];
        let card = pool.get_or_prepare(product);

        let row = grid.row_of(index);
        if row < scroll {
            continue;
        }
        let Ok(dy) = u16::try_from((row - scroll) * stride) else {
            continue;
        };
        if dy >= area.height {
            continue;
        }
        let rect = Rect::new(
            area.x.saturating_add(grid.column_x(index % cols)),
            area.y + dy,
            grid.card_width(),
            grid.card_height(),
        )
        .intersection(area);
        if rect.is_empty() {
            continue;
        }
        render_card(
            f,
            rect,
            card,
            app.items().is_selected(product.id()),
            index == app.cursor(),
            theme,
        );
    }
}
