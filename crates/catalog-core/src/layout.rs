//! Card grid geometry and virtual-window math.
//!
//! Everything here is measured in terminal cells and item indices, so the
//! same computations serve any frontend. Scroll offsets are expressed in
//! grid rows.

use std::ops::Range;

use crate::config::settings::LayoutConfig;

/// Viewport orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when `width` exceeds `height` scaled by the cell aspect
    /// ratio (cells are roughly twice as tall as they are wide).
    pub fn detect(width: u16, height: u16, cell_aspect: f64) -> Self {
        if f64::from(width) > f64::from(height) * cell_aspect {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Resolved grid for one viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    orientation: Orientation,
    columns: u16,
    card_width: u16,
    card_height: u16,
    gap: u16,
}

impl GridLayout {
    /// Computes the grid for a viewport of `width` x `height` cells.
    ///
    /// `list_width` is the horizontal space left for cards once padding is
    /// removed. Landscape starts at the configured column count and drops
    /// columns while cards would be narrower than `min_card_width`.
    pub fn compute(width: u16, height: u16, list_width: u16, config: &LayoutConfig) -> Self {
        let orientation = Orientation::detect(width, height, config.cell_aspect);
        let gap = config.card_gap;

        let (mut columns, card_height) = match orientation {
            Orientation::Portrait => (1, config.portrait_card_height),
            Orientation::Landscape => {
                (config.landscape_columns.max(1), config.landscape_card_height)
            }
        };
        while columns > 1 && card_width(list_width, columns, gap) < config.min_card_width {
            columns -= 1;
        }

        Self {
            orientation,
            columns,
            card_width: card_width(list_width, columns, gap),
            card_height: card_height.max(1),
            gap,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn columns(&self) -> usize {
        usize::from(self.columns)
    }

    pub fn card_width(&self) -> u16 {
        self.card_width
    }

    pub fn card_height(&self) -> u16 {
        self.card_height
    }

    pub fn gap(&self) -> u16 {
        self.gap
    }

    /// Vertical distance between the tops of consecutive rows.
    pub fn row_stride(&self) -> u16 {
        self.card_height.saturating_add(self.gap).max(1)
    }

    /// Horizontal offset of column `col` from the list's left edge.
    pub fn column_x(&self, col: usize) -> u16 {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        col.saturating_mul(self.card_width.saturating_add(self.gap))
    }

    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns())
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns()
    }

    /// Rows that fit entirely in `viewport_height` (at least one).
    pub fn full_rows(&self, viewport_height: u16) -> usize {
        let full = viewport_height.saturating_add(self.gap) / self.row_stride();
        usize::from(full.max(1))
    }

    /// Rows that intersect `viewport_height`, including a partial last row.
    pub fn visible_rows(&self, viewport_height: u16) -> usize {
        usize::from(viewport_height.div_ceil(self.row_stride()).max(1))
    }

    /// Item indices to prepare for the current scroll position: the rows
    /// intersecting the viewport plus `overscan` rows on each side.
    pub fn window(
        &self,
        scroll_row: usize,
        viewport_height: u16,
        item_count: usize,
        overscan: usize,
    ) -> Range<usize> {
        let rows = self.row_count(item_count);
        let first_row = scroll_row.saturating_sub(overscan).min(rows);
        let last_row = (scroll_row + self.visible_rows(viewport_height) + overscan).min(rows);
        let cols = self.columns();
        (first_row * cols).min(item_count)..(last_row * cols).min(item_count)
    }

    /// Returns the scroll row that keeps item `index` fully visible,
    /// changing `scroll_row` as little as possible.
    pub fn scroll_to_reveal(&self, scroll_row: usize, index: usize, viewport_height: u16) -> usize {
        let row = self.row_of(index);
        let full = self.full_rows(viewport_height);
        if row < scroll_row {
            row
        } else if row >= scroll_row + full {
            row + 1 - full
        } else {
            scroll_row
        }
    }

    /// Largest scroll row that still fills the viewport.
    pub fn max_scroll(&self, item_count: usize, viewport_height: u16) -> usize {
        self.row_count(item_count)
            .saturating_sub(self.full_rows(viewport_height))
    }
}

fn card_width(list_width: u16, columns: u16, gap: u16) -> u16 {
    let gaps = gap.saturating_mul(columns.saturating_sub(1));
    list_width.saturating_sub(gaps) / columns.max(1)
}
