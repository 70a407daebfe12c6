//! Key bindings for table navigation and interaction.
//!
//! ## Navigation
//!
//! - **Cursor**: `↑/k` (up), `↓/j` (down)
//! - **Paging**: `pgup/b`, `pgdn/f`, `u`/`d` for half pages
//! - **Jumps**: `home/g` (first row), `end/G` (last row)
//! - **Columns**: `←/h`, `→/l` move the active column
//!
//! ## Interaction
//!
//! - **Selection**: `space` toggles the cursor row, `ctrl+a` select-all
//! - **Activate**: `enter` (row click)
//! - **Sorting**: `o` cycles the active column's order
//! - **Type**: `t` requests a display-type change for the active column
//! - **Column width**: `>` widen, `<` narrow, `0` reset
//! - **Source**: `s` shows the cursor row's source record

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for the table component.
#[derive(Debug, Clone)]
pub struct TableKeyMap {
    /// Move the cursor up one row.
    pub cursor_up: key::Binding,
    /// Move the cursor down one row.
    pub cursor_down: key::Binding,
    /// Scroll up one page.
    pub page_up: key::Binding,
    /// Scroll down one page.
    pub page_down: key::Binding,
    /// Scroll up half a page.
    pub half_page_up: key::Binding,
    /// Scroll down half a page.
    pub half_page_down: key::Binding,
    /// Jump to the first row.
    pub go_to_start: key::Binding,
    /// Jump to the last row.
    pub go_to_end: key::Binding,
    /// Move the active column left.
    pub column_left: key::Binding,
    /// Move the active column right.
    pub column_right: key::Binding,
    /// Toggle selection of the cursor row.
    pub toggle_select: key::Binding,
    /// Toggle the select-all checkbox.
    pub select_all: key::Binding,
    /// Activate the cursor row (row click).
    pub activate: key::Binding,
    /// Cycle sort order on the active column.
    pub sort: key::Binding,
    /// Change the display type of the active column.
    pub change_type: key::Binding,
    /// Widen the active column.
    pub widen_column: key::Binding,
    /// Narrow the active column.
    pub narrow_column: key::Binding,
    /// Reset the active column's width.
    pub reset_column: key::Binding,
    /// Show the cursor row's source record.
    pub show_source: key::Binding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            page_up: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Char('b')])
                .with_help("b/pgup", "page up"),
            page_down: key::Binding::new(vec![KeyCode::PageDown, KeyCode::Char('f')])
                .with_help("f/pgdn", "page down"),
            half_page_up: key::Binding::new(vec![KeyCode::Char('u')])
                .with_help("u", "½ page up"),
            half_page_down: key::Binding::new(vec![KeyCode::Char('d')])
                .with_help("d", "½ page down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            column_left: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "column left"),
            column_right: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "column right"),
            toggle_select: key::Binding::new(vec![KeyCode::Char(' ')])
                .with_help("space", "toggle select"),
            select_all: key::Binding::new(vec![(
                KeyCode::Char('a'),
                KeyModifiers::CONTROL,
            )])
            .with_help("ctrl+a", "select all"),
            activate: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "open row"),
            sort: key::Binding::new(vec![KeyCode::Char('o')]).with_help("o", "sort"),
            change_type: key::Binding::new(vec![KeyCode::Char('t')])
                .with_help("t", "change type"),
            widen_column: key::Binding::new(vec![KeyCode::Char('>')])
                .with_help(">", "widen column"),
            narrow_column: key::Binding::new(vec![KeyCode::Char('<')])
                .with_help("<", "narrow column"),
            reset_column: key::Binding::new(vec![KeyCode::Char('0')])
                .with_help("0", "reset column"),
            show_source: key::Binding::new(vec![KeyCode::Char('s')])
                .with_help("s", "show source"),
        }
    }
}

impl key::KeyMap for TableKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.toggle_select,
            &self.activate,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down, &self.go_to_start, &self.go_to_end],
            vec![
                &self.page_up,
                &self.page_down,
                &self.half_page_up,
                &self.half_page_down,
            ],
            vec![
                &self.column_left,
                &self.column_right,
                &self.sort,
                &self.change_type,
            ],
            vec![
                &self.widen_column,
                &self.narrow_column,
                &self.reset_column,
            ],
            vec![
                &self.toggle_select,
                &self.select_all,
                &self.activate,
                &self.show_source,
            ],
        ]
    }
}
