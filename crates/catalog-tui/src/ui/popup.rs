use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use catalog_core::config::theme::{parse_color, Theme};
use catalog_core::{ActionCategory, ActionRegistry, Keymap};

/// Renders a centered popup dialog with the given title and message lines.
pub fn render_popup(
    f: &mut Frame,
    title: &str,
    lines: &[String],
    (percent_x, percent_y): (u16, u16),
    theme: &Theme,
) {
    let area = centered_rect(percent_x, percent_y, f.area());
    let border_fg = parse_color(&theme.popup.border_fg);

    f.render_widget(Clear, area);

    let content: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Help text: every registered action with its bound keys, grouped by
/// category. Actions without a binding are listed with `-`.
pub fn help_lines(registry: &ActionRegistry, keymap: &Keymap) -> Vec<String> {
    let categories = [
        ActionCategory::Navigation,
        ActionCategory::Items,
        ActionCategory::View,
        ActionCategory::System,
    ];
    let mut lines = Vec::new();
    for category in categories {
        let descriptors: Vec<_> = registry
            .all()
            .iter()
            .filter(|d| d.category == category)
            .collect();
        if descriptors.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(category.label().to_owned());
        for d in descriptors {
            let keys = keymap
                .keys_for_action(d.action)
                .map(|k| k.join("/"))
                .unwrap_or_else(|| "-".to_owned());
            lines.push(format!("  {keys:<12} {}", d.description));
        }
    }
    lines.push(String::new());
    lines.push("Press Esc or ? to close".to_owned());
    lines
}

pub fn confirm_delete_lines(count: usize) -> Vec<String> {
    let noun = if count == 1 { "product" } else { "products" };
    vec![
        format!("Delete {count} selected {noun}?"),
        String::new(),
        "y: confirm   n/Esc: cancel".to_owned(),
    ]
}

/// Calculates a centered rectangle of the given percentage size within the parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
