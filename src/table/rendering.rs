//! Body rendering and column sizing.
//!
//! Each frame is exactly `viewport_height` lines: the sticky header block
//! on top, then the body band sliced out of the virtual content strip at
//! the current scroll offset. Only rows intersecting the band are
//! rendered; in-range rows that are not loaded yet show a placeholder
//! line until a load completes.

use lipgloss_extras::lipgloss::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::{Column, SELECT_COLUMN_ID, SOURCE_COLUMN_ID, SYNTHETIC_COLUMN_WIDTH};

use super::style::{CHECKBOX_CHECKED, CHECKBOX_EMPTY, ELLIPSIS, SOURCE_GLYPH};
use super::types::{RowState, TableItem};
use super::Model;

/// Floor for derived column widths.
const MIN_DERIVED_WIDTH: usize = 4;

impl<R: TableItem> Model<R> {
    /// Renders the table: the sticky header followed by the body band.
    pub fn view(&self) -> String {
        let viewport = self.window.viewport_height();
        if viewport == 0 {
            return String::new();
        }
        let columns = self.visible_columns();
        let widths = self.column_widths(&columns);

        let mut lines: Vec<String> = self
            .view_header()
            .split('\n')
            .map(str::to_string)
            .collect();

        let sticky = self.window.sticky_height_total();
        let band = viewport.saturating_sub(sticky);
        let content_top = self.window.scroll_offset() + sticky;

        let mut body: Vec<String> = Vec::with_capacity(band);
        let mut index = self.window.index_at(content_top);
        let mut skip = content_top.saturating_sub(self.window.offset_of(index));
        while body.len() < band && index < self.window.item_count() {
            if self.window.is_sticky(index) {
                index += 1;
                skip = 0;
                continue;
            }
            let row = &self.rows[index - 1];
            for line in self
                .render_row(row, index - 1, &columns, &widths)
                .into_iter()
                .skip(skip)
            {
                if body.len() == band {
                    break;
                }
                body.push(line);
            }
            skip = 0;
            index += 1;
        }
        let more_pending = self.rows.len() < self.loader.total();
        while body.len() < band {
            if more_pending {
                body.push(self.styles.placeholder.render(ELLIPSIS));
            } else {
                body.push(String::new());
            }
        }

        lines.extend(body);
        // a viewport shorter than the header still gets exactly
        // viewport_height lines
        lines.truncate(viewport);
        lines.join("\n")
    }

    /// Renders one row as `row_height` lines.
    pub(super) fn render_row(
        &self,
        row: &R,
        row_index: usize,
        columns: &[Column<R>],
        widths: &[usize],
    ) -> Vec<String> {
        let state = self.row_state(row, row_index);
        let row_style = self.row_style(state);

        let content = if let Some(style) = row_style {
            // a row-level state overrides per-column styling
            let cells: Vec<String> = columns
                .iter()
                .zip(widths)
                .map(|(column, &width)| Self::pad_cell(&self.cell_content(row, column), width))
                .collect();
            style.render(&cells.join(" "))
        } else {
            let cells: Vec<String> = columns
                .iter()
                .zip(widths)
                .map(|(column, &width)| {
                    let padded = Self::pad_cell(&self.cell_content(row, column), width);
                    let rule = self.decorator.resolve(column);
                    match rule
                        .and_then(|r| r.cell_style.as_ref())
                        .or(column.style.as_ref())
                    {
                        Some(style) => style.render(&padded),
                        None => padded,
                    }
                })
                .collect();
            cells.join(" ")
        };

        let mut lines = vec![content];
        lines.resize(self.row_height, String::new());
        lines
    }

    fn cell_content(&self, row: &R, column: &Column<R>) -> String {
        if column.id == SELECT_COLUMN_ID {
            let selected = self
                .selection
                .as_ref()
                .map(|s| s.is_selected(row.id()))
                .unwrap_or(false);
            return if selected { CHECKBOX_CHECKED } else { CHECKBOX_EMPTY }.to_string();
        }
        if column.id == SOURCE_COLUMN_ID {
            return SOURCE_GLYPH.to_string();
        }
        match column.cell_renderer() {
            Some(render) => render(row),
            None => row.cell(&column.id),
        }
    }

    /// Resolves the per-row state flags used for style selection.
    pub(super) fn row_state(&self, row: &R, row_index: usize) -> RowState {
        RowState {
            even: row_index % 2 == 0,
            selected: self
                .selection
                .as_ref()
                .map(|s| s.is_selected(row.id()))
                .unwrap_or(false),
            highlighted: row.is_highlighted(),
            loading: row.is_loading(),
            disabled: self.stop_interactions,
        }
    }

    /// Row-level style for the given state, strongest flag first.
    /// `None` means the row has no distinguishing state and cells keep
    /// their column styling.
    fn row_style(&self, state: RowState) -> Option<&Style> {
        if state.disabled {
            Some(&self.styles.disabled)
        } else if state.loading {
            Some(&self.styles.loading)
        } else if state.highlighted {
            Some(&self.styles.highlighted)
        } else if state.selected {
            Some(&self.styles.selected)
        } else if self.zebra && state.even {
            Some(&self.styles.row_even)
        } else {
            None
        }
    }

    /// Resolves the rendered width of a column.
    ///
    /// Synthetic columns use a fixed width. Otherwise a decoration width
    /// override wins, then the column's fixed width, then a width derived
    /// from the header title (and, with fit-content sizing, the visible
    /// cell content), capped by `max_width`.
    pub(super) fn resolved_width(&self, column: &Column<R>) -> usize {
        if column.is_synthetic() {
            return SYNTHETIC_COLUMN_WIDTH;
        }
        if let Some(width) = self.decorator.resolve(column).and_then(|r| r.width) {
            return width.max(1);
        }
        if let Some(width) = column.width {
            return width.max(1);
        }
        let mut derived = UnicodeWidthStr::width(column.header_content().as_str());
        if self.fit_content {
            for index in self.window.visible_range() {
                if index == 0 {
                    continue;
                }
                if let Some(row) = self.rows.get(index - 1) {
                    let content = self.cell_content(row, column);
                    derived = derived.max(UnicodeWidthStr::width(content.as_str()));
                }
            }
        }
        derived = derived.max(MIN_DERIVED_WIDTH);
        match column.max_width {
            Some(cap) => derived.min(cap.max(1)),
            None => derived,
        }
    }

    pub(super) fn column_widths(&self, columns: &[Column<R>]) -> Vec<usize> {
        columns.iter().map(|c| self.resolved_width(c)).collect()
    }

    /// Pads or truncates `text` to exactly `width` display cells,
    /// marking truncation with an ellipsis.
    pub(super) fn pad_cell(text: &str, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        let text_width = UnicodeWidthStr::width(text);
        if text_width <= width {
            let mut out = text.to_string();
            out.push_str(&" ".repeat(width - text_width));
            return out;
        }
        let budget = width - 1;
        let mut out = String::new();
        let mut used = 0;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > budget {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push_str(ELLIPSIS);
        out.push_str(&" ".repeat(width - used - 1));
        out
    }
}
