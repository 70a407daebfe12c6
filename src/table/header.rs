//! Sticky header rendering.
//!
//! The header occupies the first `header_height` lines of every frame,
//! regardless of scroll position. Line one carries the column titles
//! (with the select-all checkbox, sort indicators, and the active-column
//! highlight); the remaining lines show the host's extra header content
//! when set, or a separator rule.

use crate::column::{Column, SELECT_COLUMN_ID};

use super::style::{
    CHECKBOX_CHECKED, CHECKBOX_EMPTY, CHECKBOX_INDETERMINATE, SORT_ASC, SORT_DESC,
};
use super::types::TableItem;
use super::Model;

impl<R: TableItem> Model<R> {
    /// Renders the header block, exactly `header_height` lines.
    pub(super) fn view_header(&self) -> String {
        let columns = self.visible_columns();
        let widths = self.column_widths(&columns);

        let mut cells = Vec::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            let content = self.header_cell_content(column);
            let padded = Self::pad_cell(&content, widths[i]);
            let rule = self.decorator.resolve(column);
            let styled = match rule.and_then(|r| r.header_style.as_ref()) {
                Some(style) => style.render(&padded),
                None if i == self.active_column && !column.is_synthetic() => {
                    self.styles.header_active.render(&padded)
                }
                None => self.styles.header.render(&padded),
            };
            cells.push(styled);
        }
        let title_line = cells.join(" ");

        let mut lines = vec![title_line];
        match &self.header_extra {
            Some(extra) => lines.extend(extra.lines().map(str::to_string)),
            None => {
                let mut rule_width: usize =
                    widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
                if self.width > 0 {
                    rule_width = rule_width.min(self.width);
                }
                lines.push(self.styles.separator.render(&"─".repeat(rule_width)));
            }
        }
        lines.truncate(self.header_height);
        while lines.len() < self.header_height {
            lines.push(String::new());
        }
        lines.join("\n")
    }

    fn header_cell_content(&self, column: &Column<R>) -> String {
        if column.id == SELECT_COLUMN_ID {
            return match &self.selection {
                Some(s) if s.is_all_selected() => CHECKBOX_CHECKED.to_string(),
                Some(s) if s.is_indeterminate() => CHECKBOX_INDETERMINATE.to_string(),
                Some(_) => CHECKBOX_EMPTY.to_string(),
                None => String::new(),
            };
        }
        if column.is_synthetic() {
            return String::new();
        }
        let mut content = column.header_content();
        if column.sortable {
            if let Some(order) = &self.order {
                if order.column_id == column.id {
                    content.push(' ');
                    content.push_str(if order.descending { SORT_DESC } else { SORT_ASC });
                }
            }
        }
        content
    }
}
