//! Controls row under the search bar: sort, reset and delete buttons.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use catalog_core::config::theme::{parse_color, Theme};
use catalog_core::{Action, Keymap, SortOrder};

/// Data needed to render the controls row.
pub struct ControlsProps<'a> {
    pub sort: SortOrder,
    pub selected_count: usize,
    pub keymap: &'a Keymap,
}

fn key_label(keymap: &Keymap, action: Action) -> String {
    keymap
        .keys_for_action(action)
        .and_then(|keys| keys.first())
        .cloned()
        .unwrap_or_else(|| "-".to_string())
}

/// Builds the controls line. The delete button only appears while at least
/// one product is selected.
pub fn controls_line(props: &ControlsProps<'_>, theme: &Theme) -> Line<'static> {
    let fg = Style::default().fg(parse_color(&theme.controls.fg));
    let key = Style::default()
        .fg(parse_color(&theme.controls.key_fg))
        .add_modifier(Modifier::BOLD);
    let delete = Style::default().fg(parse_color(&theme.controls.delete_fg));

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format!("[{}]", key_label(props.keymap, Action::SortCycle)), key),
        Span::styled(format!(" Sort: {}", props.sort.label()), fg),
        Span::raw("   "),
        Span::styled(format!("[{}]", key_label(props.keymap, Action::Reset)), key),
        Span::styled(" Reset", fg),
    ];
    if props.selected_count > 0 {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("[{}]", key_label(props.keymap, Action::DeleteSelected)),
            key,
        ));
        spans.push(Span::styled(
            format!(" Delete Selected ({})", props.selected_count),
            delete.add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

pub fn render_controls(f: &mut Frame, area: Rect, props: &ControlsProps<'_>, theme: &Theme) {
    f.render_widget(Paragraph::new(controls_line(props, theme)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_sort_and_reset_without_selection() {
        let keymap = Keymap::default();
        let line = controls_line(
            &ControlsProps {
                sort: SortOrder::None,
                selected_count: 0,
                keymap: &keymap,
            },
            &Theme::default(),
        );

        let text = text(&line);
        assert!(text.contains("[s] Sort: None"));
        assert!(text.contains("[r] Reset"));
        assert!(!text.contains("Delete"));
    }

    #[test]
    fn shows_delete_with_count_when_selected() {
        let keymap = Keymap::default();
        let line = controls_line(
            &ControlsProps {
                sort: SortOrder::Descending,
                selected_count: 3,
                keymap: &keymap,
            },
            &Theme::default(),
        );

        let text = text(&line);
        assert!(text.contains("Sort: DESC"));
        assert!(text.contains("[d] Delete Selected (3)"));
        let delete = line
            .spans
            .iter()
            .find(|s| s.content.contains("Delete"))
            .unwrap();
        assert_eq!(delete.style.fg, Some(Color::Red));
    }

    #[test]
    fn key_label_uses_first_bound_key() {
        let keymap = Keymap::default();
        assert_eq!(key_label(&keymap, Action::Quit), "q");
        assert_eq!(key_label(&keymap, Action::ToggleSelect), "Enter");
    }
}
