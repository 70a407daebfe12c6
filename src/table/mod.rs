//! Virtualized data table with a sticky header and incremental loading.
//!
//! This module exposes a generic [`Model<R: TableItem>`](Model) plus the
//! supporting pieces it is assembled from:
//! - [`TableItem`]: implement for your row type; provides identity, cell
//!   text, and transient highlight/loading flags
//! - [`Selection`]: read-only view of the host-owned selection set,
//!   rendered as a checkbox column
//! - [`VirtualWindow`]: the windowing engine answering which rows
//!   intersect the viewport
//! - [`InfiniteLoader`]: issues load-more commands when the window nears
//!   the loaded boundary
//! - [`ScrollRestore`]: restores and re-centers the scroll position on a
//!   focused row across mounts and data changes
//!
//! ## Division of responsibility
//!
//! The table owns presentation and geometry; the host owns data and
//! policy. Loaded rows, the selection set, the sort order, and column
//! widths all live with the host. When the user acts, the table emits a
//! message ([`RowClickMsg`], [`SelectRowMsg`], [`SetOrderMsg`],
//! [`ColumnResizeMsg`], ...) and the host applies the change, then hands
//! the new state back through [`Model::set_rows`], [`Model::set_order`],
//! and the column definitions. Data changes are explicit: the table never
//! diffs row vectors, it reacts to `set_rows`.
//!
//! ## Incremental loading
//!
//! The expected total row count may exceed the loaded length. Whenever
//! scrolling or a data change brings unloaded rows within the overscan
//! margin, the table runs the host's async load-more callback for the
//! unloaded span and reports the outcome as [`LoadCompletedMsg`] or
//! [`LoadFailedMsg`]. One request is in flight at a time, and failures
//! are surfaced, never retried.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_datatable::column::Column;
//! use bubbletea_datatable::table::{Model, TableItem};
//!
//! #[derive(Clone)]
//! struct Task {
//!     id: u64,
//!     name: String,
//! }
//!
//! impl TableItem for Task {
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn cell(&self, column_id: &str) -> String {
//!         match column_id {
//!             "id" => self.id.to_string(),
//!             "name" => self.name.clone(),
//!             _ => String::new(),
//!         }
//!     }
//! }
//!
//! let rows = vec![Task { id: 1, name: "triage".into() }];
//! let mut table = Model::new(vec![
//!     Column::new("id", "ID").with_width(6),
//!     Column::new("name", "Name"),
//! ])
//! .with_rows(rows, 1);
//! let _ = table.set_size(80, 24);
//! let frame = table.view();
//! assert!(frame.contains("ID"));
//! ```

mod header;
mod model;
mod rendering;

/// Key bindings for table navigation and interaction.
pub mod keys;

/// Infinite-load coordination against an incrementally fetched store.
pub mod loader;

/// Scroll-position restoration onto a focused row.
pub mod position;

/// Visual styles and glyph constants.
pub mod style;

/// Row, selection, and message types.
pub mod types;

/// Visible-range computation over the virtual item list.
pub mod windowing;

pub use keys::TableKeyMap;
pub use loader::InfiniteLoader;
pub use model::Model;
pub use position::ScrollRestore;
pub use style::TableStyles;
pub use types::{
    ColumnResetMsg, ColumnResizeMsg, LoadCompletedMsg, LoadFailedMsg, LoadFuture, LoadMoreFn,
    RowClickMsg, RowState, Selection, SelectAllMsg, SelectRowMsg, SetOrderMsg, ShowSourceMsg,
    TableItem, TypeChangeMsg,
};
pub use windowing::{Align, ItemKey, VirtualWindow, DEFAULT_OVERSCAN};
