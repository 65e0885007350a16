//! Product card content and rendering.
//!
//! Wrapping and truncating card text is the expensive part of drawing a
//! card, so [`CardPool`] keeps prepared cards for the products inside the
//! virtual window and reuses them across frames.

use std::collections::{HashMap, HashSet};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use catalog_core::config::theme::{parse_color, Theme};
use catalog_core::{Product, ProductId};

/// Lines every card shows besides the description: image, title, price,
/// tags and the selection marker.
const FIXED_LINES: u16 = 5;

pub const SELECTED_MARKER: &str = "✅ Selected";
pub const UNSELECTED_MARKER: &str = "⬜ Tap to select";

/// Number of description lines that fit in a card of `card_height` rows.
pub fn description_lines(card_height: u16) -> usize {
    usize::from(card_height.saturating_sub(2 + FIXED_LINES))
}

/// Card text fitted to a given inner width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCard {
    pub image: String,
    pub title: String,
    pub description: Vec<String>,
    pub price: String,
    pub tags: String,
}

impl PreparedCard {
    pub fn prepare(product: &Product, width: u16, max_description_lines: usize) -> Self {
        let width = usize::from(width);
        let image = if product.image().is_empty() {
            "▣ (no image)".to_string()
        } else {
            format!("▣ {}", product.image())
        };

        let mut description: Vec<String> = if width == 0 || product.description().is_empty() {
            Vec::new()
        } else {
            textwrap::wrap(product.description(), width)
                .into_iter()
                .map(|l| l.into_owned())
                .collect()
        };
        if description.len() > max_description_lines {
            description.truncate(max_description_lines);
            if let Some(last) = description.last_mut() {
                *last = truncate(&format!("{last}…"), width);
            }
        }

        Self {
            image: truncate(&image, width),
            title: truncate(product.title(), width),
            description,
            price: truncate(&product.price().to_string(), width),
            tags: truncate(&product.tags_label(), width),
        }
    }
}

/// Cuts `s` to at most `width` display columns, ending in `…` when cut.
fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Prepared cards for the products in the current window.
///
/// The pool is cleared when the list generation, card width or card height
/// changes, and cards that leave the window are evicted.
#[derive(Debug, Default)]
pub struct CardPool {
    generation: u64,
    width: u16,
    description_lines: usize,
    cards: HashMap<ProductId, PreparedCard>,
    prepared_total: usize,
}

impl CardPool {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Syncs the pool with the frame about to be drawn.
    pub fn begin_frame(
        &mut self,
        generation: u64,
        width: u16,
        description_lines: usize,
        window: &[&Product],
    ) {
        if generation != self.generation
            || width != self.width
            || description_lines != self.description_lines
        {
            if !self.cards.is_empty() {
                tracing::debug!(
                    generation,
                    width,
                    prepared_total = self.prepared_total,
                    "card pool cleared"
                );
            }
            self.cards.clear();
            self.generation = generation;
            self.width = width;
            self.description_lines = description_lines;
        }
        let keep: HashSet<&ProductId> = window.iter().map(|p| p.id()).collect();
        self.cards.retain(|id, _| keep.contains(id));
    }

    /// Returns the prepared card for `product`, preparing it on first use.
    pub fn get_or_prepare(&mut self, product: &Product) -> &PreparedCard {
        let width = self.width;
        let lines = self.description_lines;
        let prepared_total = &mut self.prepared_total;
        self.cards.entry(product.id().clone()).or_insert_with(|| {
            *prepared_total += 1;
            PreparedCard::prepare(product, width, lines)
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[cfg(test)]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.cards.contains_key(id)
    }

    /// How many cards have been prepared since the pool was created.
    #[cfg(test)]
    pub fn prepared_total(&self) -> usize {
        self.prepared_total
    }
}

/// Renders one card. Selected cards use the selected border colour; the
/// focused card gets a bold border.
pub fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &PreparedCard,
    selected: bool,
    focused: bool,
    theme: &Theme,
) {
    let t = &theme.card;
    let border_fg = if selected {
        parse_color(&t.selected_border_fg)
    } else if focused {
        parse_color(&t.focused_border_fg)
    } else {
        parse_color(&t.border_fg)
    };
    let mut border_style = Style::default().fg(border_fg);
    if focused {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }
    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let mut lines = vec![
        Line::from(Span::styled(
            card.image.clone(),
            Style::default().fg(parse_color(&t.image_fg)),
        )),
        Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(parse_color(&t.title_fg))
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let description_style = Style::default().fg(parse_color(&t.description_fg));
    lines.extend(
        card.description
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), description_style))),
    );
    lines.push(Line::from(Span::styled(
        card.price.clone(),
        Style::default().fg(parse_color(&t.price_fg)),
    )));
    lines.push(Line::from(Span::styled(
        card.tags.clone(),
        Style::default().fg(parse_color(&t.tags_fg)),
    )));
    let (marker, marker_fg) = if selected {
        (SELECTED_MARKER, &t.selected_marker_fg)
    } else {
        (UNSELECTED_MARKER, &t.unselected_marker_fg)
    };
    lines.push(Line::from(Span::styled(
        marker,
        Style::default().fg(parse_color(marker_fg)),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}
