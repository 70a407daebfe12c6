//! Styling for the table component.
//!
//! [`TableStyles`] collects the lipgloss styles for the sticky header and
//! every row state the renderer distinguishes. The defaults use
//! `AdaptiveColor` palettes so output stays readable in both light and
//! dark terminals.

use lipgloss_extras::prelude::*;

/// Checkbox glyph for a fully selected state.
pub const CHECKBOX_CHECKED: &str = "[x]";

/// Checkbox glyph for a partially selected (indeterminate) state.
pub const CHECKBOX_INDETERMINATE: &str = "[~]";

/// Checkbox glyph for an unselected state.
pub const CHECKBOX_EMPTY: &str = "[ ]";

/// Glyph rendered in the show-source column.
pub const SOURCE_GLYPH: &str = "</>";

/// Sort indicator for ascending order.
pub const SORT_ASC: &str = "▲";

/// Sort indicator for descending order.
pub const SORT_DESC: &str = "▼";

/// Ellipsis used when cell content is truncated to the column width.
pub const ELLIPSIS: &str = "…";

/// Styles for every visual element of the table.
#[derive(Debug, Clone)]
pub struct TableStyles {
    /// Header cell text.
    pub header: Style,
    /// Header cell of the active (keyboard-focused) column.
    pub header_active: Style,
    /// Separator line under the header titles.
    pub separator: Style,
    /// Plain body row.
    pub row: Style,
    /// Zebra variant for even rows.
    pub row_even: Style,
    /// Row present in the selection set.
    pub selected: Style,
    /// Row carrying the host's highlight flag (e.g. the focused task).
    pub highlighted: Style,
    /// Row whose host-side record is refreshing.
    pub loading: Style,
    /// Rows while interactions are suspended.
    pub disabled: Style,
    /// Placeholder line shown for in-range rows that are still loading.
    pub placeholder: Style,
}

impl Default for TableStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            header: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            header_active: Style::new()
                .bold(true)
                .underline(true)
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#ffffff",
                }),
            separator: Style::new().foreground(subdued.clone()),
            row: Style::new(),
            row_even: Style::new().foreground(AdaptiveColor {
                Light: "#303030",
                Dark: "#c0c0c0",
            }),
            selected: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            highlighted: Style::new().reverse(true),
            loading: Style::new().faint(true),
            disabled: Style::new().foreground(subdued.clone()),
            placeholder: Style::new().foreground(subdued),
        }
    }
}
