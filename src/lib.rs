#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datatable/")]

//! # bubbletea-datatable
//!
//! A virtualized data table component for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! applications: windowed rendering over large row sets, a sticky header,
//! incremental (infinite-scroll) loading, and scroll-position restoration
//! onto a focused row.
//!
//! ## Overview
//!
//! The table follows the Elm Architecture pattern with `update()` and
//! `view()` methods. It renders only the rows intersecting the viewport
//! (plus an overscan margin), so frame cost is proportional to the window
//! size rather than the data size. When the expected total row count
//! exceeds the loaded length, scrolling toward the loaded boundary runs a
//! host-supplied async callback to fetch more rows.
//!
//! Data and policy stay with the host application: the table reads rows,
//! selection state, and sort order, and emits messages
//! ([`RowClickMsg`](table::RowClickMsg), [`SelectRowMsg`](table::SelectRowMsg),
//! [`SetOrderMsg`](table::SetOrderMsg), ...) when the user asks for a
//! change.
//!
//! ## Modules
//!
//! - [`table`]: the table component itself, with its windowing, loading,
//!   and scroll-restore machinery
//! - [`column`]: column descriptors (ids, titles, widths, renderers)
//! - [`decoration`]: alias- and predicate-based column styling overrides
//! - [`key`]: type-safe key bindings with help metadata
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_datatable::prelude::*;
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
//! let rows: Vec<Task> = (1..=3)
//!     .map(|id| Task { id, name: format!("task {id}") })
//!     .collect();
//!
//! let mut table = Table::new(vec![
//!     Column::new("id", "ID").with_width(6).sortable(true),
//!     Column::new("name", "Name"),
//! ])
//! .with_rows(rows, 3);
//!
//! let _ = table.set_size(80, 24);
//! println!("{}", table.view());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The table slots into a bubbletea-rs application model; forward
//! messages it does not consume and render its view:
//!
//! ```rust
//! use bubbletea_datatable::prelude::*;
//! use bubbletea_datatable::table::RowClickMsg;
//! use bubbletea_rs::{Cmd, Model, Msg};
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
//! struct App {
//!     table: Table<Task>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let rows = vec![Task { id: 1, name: "triage".into() }];
//!         let mut table = Table::new(vec![
//!             Column::new("id", "ID").with_width(6),
//!             Column::new("name", "Name"),
//!         ])
//!         .with_rows(rows, 1);
//!         let cmd = table.set_size(80, 24);
//!         (Self { table }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(click) = msg.downcast_ref::<RowClickMsg>() {
//!             // open the record with id `click.id`
//!             let _ = click.id;
//!             return None;
//!         }
//!         self.table.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.table.view()
//!     }
//! }
//! ```

pub mod column;
pub mod decoration;
pub mod key;
pub mod table;

pub use column::{Column, SortOrder, SELECT_COLUMN_ID, SOURCE_COLUMN_ID};
pub use decoration::{DecorationRule, DecorationTarget, Decorator};
pub use key::{Binding, KeyMap};
pub use table::Model as Table;

/// Commonly used types, importable in one line.
///
/// ```rust
/// use bubbletea_datatable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::column::{Column, SortOrder};
    pub use crate::decoration::{DecorationRule, Decorator};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::table::{
        Align, Model as Table, Selection, TableItem, TableKeyMap, TableStyles,
    };
}
