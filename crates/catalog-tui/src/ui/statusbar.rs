//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, the selected and deleted counts, the grid
//! orientation and an optional status message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use catalog_core::config::theme::{parse_color, Theme};
use catalog_core::Orientation;

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub item_count: usize,
    pub cursor: usize,
    pub selected_count: usize,
    pub deleted_count: usize,
    pub orientation: Orientation,
    pub columns: usize,
    pub status_message: Option<&'a str>,
}

fn position_label(cursor: usize, item_count: usize) -> String {
    if item_count > 0 {
        format!(" {}/{}", cursor + 1, item_count)
    } else {
        " 0/0".to_owned()
    }
}

fn counts_label(selected: usize, deleted: usize) -> String {
    let mut out = String::new();
    if selected > 0 {
        out.push_str(&format!("  {selected} selected"));
    }
    if deleted > 0 {
        out.push_str(&format!("  {deleted} deleted"));
    }
    out
}

pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let position_fg = parse_color(&theme.statusbar.position_fg);
    let message_fg = parse_color(&theme.statusbar.message_fg);

    let layout = format!(
        "  [{} x{}]",
        props.orientation.label(),
        props.columns
    );

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position_label(props.cursor, props.item_count),
            Style::default()
                .fg(position_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            counts_label(props.selected_count, props.deleted_count),
            Style::default().fg(position_fg).bg(bg),
        ),
        Span::styled(layout, Style::default().fg(position_fg).bg(bg)),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn position_is_one_based() {
        assert_eq!(position_label(0, 16), " 1/16");
        assert_eq!(position_label(15, 16), " 16/16");
    }

    #[test]
    fn position_on_empty_list() {
        assert_eq!(position_label(0, 0), " 0/0");
    }

    #[test]
    fn counts_only_shown_when_nonzero() {
        assert_eq!(counts_label(0, 0), "");
        assert_eq!(counts_label(2, 0), "  2 selected");
        assert_eq!(counts_label(0, 3), "  3 deleted");
        assert_eq!(counts_label(1, 1), "  1 selected  1 deleted");
    }

    #[test]
    fn renders_layout_and_message() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let props = StatusBarProps {
            item_count: 5,
            cursor: 1,
            selected_count: 1,
            deleted_count: 0,
            orientation: Orientation::Landscape,
            columns: 2,
            status_message: Some("Sort: ASC"),
        };
        terminal
            .draw(|f| render_statusbar(f, f.area(), &props, &Theme::default()))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("2/5"));
        assert!(screen.contains("1 selected"));
        assert!(screen.contains(&format!("[{} x2]", Orientation::Landscape.label())));
        assert!(screen.contains("Sort: ASC"));
    }
}
