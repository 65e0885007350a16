use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use catalog_core::config::theme::{parse_color, Theme};

pub const PLACEHOLDER: &str = "Search by title or tag...";

/// Data needed to render the search bar.
pub struct SearchBarProps<'a> {
    pub text: &'a str,
    pub focused: bool,
    /// A debounced query is scheduled but not yet applied.
    pub pending: bool,
}

pub fn render_search_bar(f: &mut Frame, area: Rect, props: &SearchBarProps<'_>, theme: &Theme) {
    let t = &theme.search;
    let border_fg = if props.focused {
        parse_color(&t.focused_border_fg)
    } else {
        parse_color(&t.border_fg)
    };
    let title = if props.pending {
        " Search … "
    } else {
        " Search "
    };

    let content = if props.text.is_empty() && !props.focused {
        Span::styled(PLACEHOLDER, Style::default().fg(parse_color(&t.placeholder_fg)))
    } else {
        Span::styled(props.text, Style::default().fg(parse_color(&t.text_fg)))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_fg));
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if props.focused && inner.width > 0 {
        let offset = u16::try_from(props.text.width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(offset.min(inner.width - 1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(props: &SearchBarProps<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|f| render_search_bar(f, f.area(), props, &Theme::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_placeholder_when_empty() {
        let screen = draw(&SearchBarProps {
            text: "",
            focused: false,
            pending: false,
        });
        assert!(screen.contains("Search"));
        assert!(screen.contains("Search by title"));
    }

    #[test]
    fn shows_text_and_pending_marker() {
        let screen = draw(&SearchBarProps {
            text: "lamp",
            focused: true,
            pending: true,
        });
        assert!(screen.contains("lamp"));
        assert!(screen.contains("Search …"));
        assert!(!screen.contains("Search by title"));
    }
}
