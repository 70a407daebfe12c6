//! Column descriptors for the data table.
//!
//! A [`Column`] describes one vertical slice of the table: its unique id,
//! the header title, sizing constraints, sortability, and optional custom
//! header/cell renderers. Column order is significant and matches the
//! presentation order.
//!
//! Columns are cheap to rebuild per render pass. The table prepends a
//! synthetic `select` column when a selection set is configured and appends
//! a synthetic `show-source` column when source inspection is enabled; both
//! use the fixed ids below so renderers can recognize them.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datatable::column::Column;
//!
//! #[derive(Clone)]
//! struct Task { id: u64, name: String }
//!
//! let columns: Vec<Column<Task>> = vec![
//!     Column::new("id", "ID").with_width(6).sortable(true),
//!     Column::new("name", "Name").with_max_width(40),
//!     Column::new("status", "Status")
//!         .with_cell(|_task: &Task| "pending".to_string()),
//! ];
//! ```

use std::fmt;
use std::sync::Arc;

use lipgloss_extras::prelude::*;

/// Id of the synthetic selection-checkbox column.
pub const SELECT_COLUMN_ID: &str = "select";

/// Id of the synthetic show-source column.
pub const SOURCE_COLUMN_ID: &str = "show-source";

/// Width of the synthetic columns (checkbox / source glyph), in cells.
pub(crate) const SYNTHETIC_COLUMN_WIDTH: usize = 4;

/// Renders one cell of a column for a given row.
pub type CellRenderer<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Renders a column's header content in place of its title.
pub type HeaderRenderer = Arc<dyn Fn() -> String + Send + Sync>;

/// Current sort order of the table: which column, and which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    /// Id of the column the data is ordered by.
    pub column_id: String,
    /// `true` for descending order.
    pub descending: bool,
}

impl SortOrder {
    /// Creates an ascending sort order on the given column.
    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: false,
        }
    }

    /// Creates a descending sort order on the given column.
    pub fn descending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: true,
        }
    }
}

/// Descriptor for a single table column.
///
/// Immutable during a render pass. The generic parameter is the row type
/// the cell renderer receives.
pub struct Column<R> {
    /// Unique column id. Also the default alias for decoration matching.
    pub id: String,
    /// Alias used by decoration rules; defaults to the id.
    pub alias: String,
    /// Header title shown when no custom header renderer is set.
    pub title: String,
    /// Fixed width in cells. When absent, the width is derived from content.
    pub width: Option<usize>,
    /// Upper bound on the derived width.
    pub max_width: Option<usize>,
    /// Whether the sort key acts on this column.
    pub sortable: bool,
    /// Base style applied to this column's cells.
    pub style: Option<Style>,
    cell: Option<CellRenderer<R>>,
    header: Option<HeaderRenderer>,
}

impl<R> Column<R> {
    /// Creates a column with the given unique id and header title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            alias: id.clone(),
            id,
            title: title.into(),
            width: None,
            max_width: None,
            sortable: false,
            style: None,
            cell: None,
            header: None,
        }
    }

    /// Sets the alias used for decoration matching.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Sets a fixed column width in cells.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Caps the derived column width.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the base cell style for the column.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets a custom cell renderer.
    ///
    /// Without one, cells fall back to the row's own
    /// [`TableItem::cell`](crate::table::TableItem::cell) output.
    pub fn with_cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(f));
        self
    }

    /// Sets a custom header renderer, replacing the title.
    pub fn with_header<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.header = Some(Arc::new(f));
        self
    }

    /// Returns the custom cell renderer, if any.
    pub fn cell_renderer(&self) -> Option<&CellRenderer<R>> {
        self.cell.as_ref()
    }

    /// Returns the header content: custom renderer output or the title.
    pub fn header_content(&self) -> String {
        match &self.header {
            Some(f) => f(),
            None => self.title.clone(),
        }
    }

    /// Whether this is one of the synthetic columns added by the table.
    pub fn is_synthetic(&self) -> bool {
        self.id == SELECT_COLUMN_ID || self.id == SOURCE_COLUMN_ID
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            alias: self.alias.clone(),
            title: self.title.clone(),
            width: self.width,
            max_width: self.max_width,
            sortable: self.sortable,
            style: self.style.clone(),
            cell: self.cell.clone(),
            header: self.header.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("alias", &self.alias)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("max_width", &self.max_width)
            .field("sortable", &self.sortable)
            .finish()
    }
}

/// Filters out hidden columns by id, preserving order.
///
/// Unknown ids in `hidden` are ignored.
pub fn prepare_columns<R>(columns: &[Column<R>], hidden: &[String]) -> Vec<Column<R>> {
    columns
        .iter()
        .filter(|c| !hidden.iter().any(|h| h == &c.id))
        .cloned()
        .collect()
}
