//! Core types for the table component.
//!
//! This module defines the row contract ([`TableItem`]), the per-row state
//! flags handed to renderers ([`RowState`]), the selection-set interface
//! ([`Selection`]), the async load-more callback types, and every message
//! the table emits toward the host application.
//!
//! The table never mutates row content. Rows are owned by the host's data
//! store and outlive individual render passes; the table only reads ids,
//! keys, flags, and cell text.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Trait for rows displayed by the table.
///
/// Rows are opaque to the engine apart from identity and transient flags.
/// `cell` maps a column id to that row's cell text; columns with a custom
/// renderer bypass it.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datatable::table::TableItem;
///
/// #[derive(Clone)]
/// struct Task {
///     id: u64,
///     name: String,
/// }
///
/// impl TableItem for Task {
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn cell(&self, column_id: &str) -> String {
///         match column_id {
///             "id" => self.id.to_string(),
///             "name" => self.name.clone(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
pub trait TableItem: Clone + Send + Sync + 'static {
    /// Unique, stable row id used by selection and click messages.
    fn id(&self) -> u64;

    /// Stable identity key used by the windowing engine.
    ///
    /// Defaults to the id. Must survive reordering of the data sequence.
    fn key(&self) -> u64 {
        self.id()
    }

    /// Cell text for the given column id.
    fn cell(&self, column_id: &str) -> String;

    /// Transient highlight flag attached by the host.
    fn is_highlighted(&self) -> bool {
        false
    }

    /// Transient loading flag attached by the host.
    fn is_loading(&self) -> bool {
        false
    }
}

/// Per-row state flags resolved at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    /// Zebra flag: the row sits at an even list index.
    pub even: bool,
    /// The row is in the selection set.
    pub selected: bool,
    /// The row carries the host's highlight flag.
    pub highlighted: bool,
    /// The row carries the host's loading flag.
    pub loading: bool,
    /// Interactions are suspended table-wide.
    pub disabled: bool,
}

/// Read-only view of the host-owned selection set.
///
/// The table renders checkbox state from this and emits
/// [`SelectRowMsg`] / [`SelectAllMsg`] when the user toggles; mutation is
/// the host's job.
pub trait Selection: Send + Sync {
    /// Whether every row is selected.
    fn is_all_selected(&self) -> bool;

    /// Whether some but not all rows are selected.
    fn is_indeterminate(&self) -> bool;

    /// Whether the row with the given id is selected.
    fn is_selected(&self, id: u64) -> bool;
}

/// Future returned by a load-more callback.
///
/// Failure carries a human-readable reason; the table surfaces it as a
/// [`LoadFailedMsg`] and never retries on its own.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<(), String>> + Send>>;

/// Host callback fetching rows for the inclusive index range
/// `start..=stop`.
pub type LoadMoreFn = Arc<dyn Fn(usize, usize) -> LoadFuture + Send + Sync>;

/// Emitted when the user activates the cursor row (row click).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClickMsg {
    /// Id of the activated row.
    pub id: u64,
}

/// Emitted when the user toggles selection of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectRowMsg {
    /// Id of the toggled row.
    pub id: u64,
}

/// Emitted when the user toggles the select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectAllMsg;

/// Emitted when the user requests a new sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOrderMsg {
    /// Id of the column to order by.
    pub column_id: String,
    /// Requested direction.
    pub descending: bool,
}

/// Emitted when the user resizes a column.
///
/// The table holds no width state of its own; the host applies the new
/// width to its column definitions and re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResizeMsg {
    /// Id of the resized column.
    pub column_id: String,
    /// Requested width in cells.
    pub width: usize,
}

/// Emitted when the user resets a column's width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResetMsg {
    /// Id of the reset column.
    pub column_id: String,
}

/// Emitted when the user requests a display-type change for a column.
///
/// The set of available types is the host's; the table only names the
/// column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChangeMsg {
    /// Id of the column whose type should change.
    pub column_id: String,
}

/// Emitted when the user asks to inspect the cursor row's source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSourceMsg {
    /// Id of the row to inspect.
    pub id: u64,
}

/// Emitted when an in-flight load-more call resolves successfully.
///
/// `loader` identifies the issuing coordinator instance; a table that was
/// torn down and remounted ignores completions tagged with the old id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadCompletedMsg {
    /// Instance id of the coordinator that issued the request.
    pub loader: i64,
    /// First requested index.
    pub start: usize,
    /// Last requested index (inclusive).
    pub stop: usize,
}

/// Emitted when an in-flight load-more call fails.
///
/// The table clears its in-flight guard and otherwise leaves retry policy
/// to the host's data store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailedMsg {
    /// Instance id of the coordinator that issued the request.
    pub loader: i64,
    /// First requested index.
    pub start: usize,
    /// Last requested index (inclusive).
    pub stop: usize,
    /// Failure reason reported by the host callback.
    pub error: String,
}
