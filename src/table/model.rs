//! Table state and message handling.

use std::sync::Arc;

use bubbletea_rs::{Cmd, KeyMsg, Msg};

use crate::column::{prepare_columns, Column, SortOrder, SELECT_COLUMN_ID, SOURCE_COLUMN_ID};
use crate::decoration::Decorator;

use super::keys::TableKeyMap;
use super::loader::InfiniteLoader;
use super::position::ScrollRestore;
use super::style::TableStyles;
use super::types::{
    ColumnResetMsg, ColumnResizeMsg, LoadCompletedMsg, LoadFailedMsg, LoadMoreFn, RowClickMsg,
    Selection, SelectAllMsg, SelectRowMsg, SetOrderMsg, ShowSourceMsg, TableItem, TypeChangeMsg,
};
use super::windowing::{Align, VirtualWindow};

/// Wraps a message in a command that delivers it on the next update cycle.
pub(super) fn emit<M: Send + 'static>(msg: M) -> Cmd {
    Box::pin(async move { Some(Box::new(msg) as Msg) })
}

/// A virtualized data table with a sticky header and incremental loading.
///
/// The table renders a window of the host's row data, keeps the header
/// pinned while the body scrolls, and asks the host for more rows as the
/// window approaches the loaded boundary. Row data, selection state, and
/// sort order are owned by the host; the table reads them and emits
/// messages when the user asks for a change.
pub struct Model<R: TableItem> {
    // Data
    pub(super) rows: Vec<R>,
    pub(super) columns: Vec<Column<R>>,
    pub(super) hidden: Vec<String>,
    pub(super) decorator: Decorator<R>,

    // Host-owned state mirrored for rendering
    pub(super) selection: Option<Arc<dyn Selection>>,
    pub(super) order: Option<SortOrder>,
    pub(super) focused: Option<u64>,

    // Behavior switches
    pub(super) show_source: bool,
    pub(super) sorting_enabled: bool,
    pub(super) stop_interactions: bool,
    pub(super) fit_content: bool,
    pub(super) zebra: bool,

    // Geometry
    pub(super) width: usize,
    pub(super) row_height: usize,
    pub(super) header_height: usize,
    pub(super) header_extra: Option<String>,
    pub(super) window: VirtualWindow,

    // Coordination
    pub(super) loader: InfiniteLoader,
    pub(super) restore: ScrollRestore,

    // Interaction state
    pub(super) cursor: usize,
    pub(super) active_column: usize,

    /// Key bindings. Replace individual bindings to customize.
    pub keymap: TableKeyMap,
    /// Visual styles. Replace individual styles to customize.
    pub styles: TableStyles,
}

impl<R: TableItem> Model<R> {
    /// Creates a table over the given column definitions.
    ///
    /// The table starts empty and unsized; call [`set_rows`](Self::set_rows)
    /// and [`set_size`](Self::set_size) before the first render.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        let row_height = 1;
        let header_height = 2;
        Self {
            rows: Vec::new(),
            columns,
            hidden: Vec::new(),
            decorator: Decorator::empty(),
            selection: None,
            order: None,
            focused: None,
            show_source: false,
            sorting_enabled: true,
            stop_interactions: false,
            fit_content: false,
            zebra: false,
            width: 0,
            row_height,
            header_height,
            header_extra: None,
            window: VirtualWindow::new(row_height, header_height),
            loader: InfiniteLoader::new(),
            restore: ScrollRestore::new(),
            cursor: 0,
            active_column: 0,
            keymap: TableKeyMap::default(),
            styles: TableStyles::default(),
        }
    }

    /// Seeds the loaded rows and expected total before the first render.
    pub fn with_rows(mut self, rows: Vec<R>, total: usize) -> Self {
        self.window.set_item_count(rows.len() + 1);
        self.loader.set_total(total);
        self.rows = rows;
        self
    }

    /// Attaches the host's selection set, enabling the checkbox column.
    pub fn with_selection(mut self, selection: Arc<dyn Selection>) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Enables the show-source column.
    pub fn with_show_source(mut self, show: bool) -> Self {
        self.show_source = show;
        self
    }

    /// Sets the row whose scroll position should be restored on mount.
    pub fn with_focused_row(mut self, key: u64) -> Self {
        self.focused = Some(key);
        self
    }

    /// Sets the sort order shown in the header.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Enables or disables sort interaction (indicators still render).
    pub fn with_sorting_enabled(mut self, enabled: bool) -> Self {
        self.sorting_enabled = enabled;
        self
    }

    /// Installs column decoration rules.
    pub fn with_decorator(mut self, decorator: Decorator<R>) -> Self {
        self.decorator = decorator;
        self
    }

    /// Hides the columns with the given ids.
    pub fn with_hidden_columns(mut self, hidden: Vec<String>) -> Self {
        self.hidden = hidden;
        self
    }

    /// Sets the uniform body row height in lines (minimum 1).
    pub fn with_row_height(mut self, height: usize) -> Self {
        self.row_height = height.max(1);
        self.window.set_row_height(height);
        self
    }

    /// Sets the sticky header height in lines (minimum 1).
    pub fn with_header_height(mut self, height: usize) -> Self {
        self.header_height = height.max(1);
        self.window.set_sticky(vec![(0, self.header_height)]);
        self
    }

    /// Sets the overscan margin in items.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.window.set_overscan(overscan);
        self
    }

    /// Enables zebra striping of even rows.
    pub fn with_zebra(mut self, zebra: bool) -> Self {
        self.zebra = zebra;
        self
    }

    /// Derives column widths from visible cell content instead of titles.
    pub fn with_fit_content(mut self, fit: bool) -> Self {
        self.fit_content = fit;
        self
    }

    /// Installs the host's async load-more callback.
    pub fn with_load_more(mut self, f: LoadMoreFn) -> Self {
        self.loader.set_load_more(f);
        self
    }

    /// Sets extra header content rendered below the title line, replacing
    /// the separator.
    pub fn with_header_extra(mut self, extra: impl Into<String>) -> Self {
        self.header_extra = Some(extra.into());
        self
    }

    /// Loaded rows, in display order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of loaded rows.
    pub fn loaded_len(&self) -> usize {
        self.rows.len()
    }

    /// Expected total row count, which may exceed the loaded length.
    pub fn total(&self) -> usize {
        self.loader.total()
    }

    /// Whether a load-more request is in flight.
    pub fn loading(&self) -> bool {
        self.loader.loading()
    }

    /// Current sort order shown in the header.
    pub fn order(&self) -> Option<&SortOrder> {
        self.order.as_ref()
    }

    /// Applies a sort order decided by the host.
    pub fn set_order(&mut self, order: Option<SortOrder>) {
        self.order = order;
    }

    /// Updates the host selection set used for checkbox rendering.
    pub fn set_selection(&mut self, selection: Arc<dyn Selection>) {
        self.selection = Some(selection);
    }

    /// Suspends or resumes all key interaction.
    pub fn set_stop_interactions(&mut self, stop: bool) {
        self.stop_interactions = stop;
    }

    /// Whether key interaction is suspended.
    pub fn interactions_stopped(&self) -> bool {
        self.stop_interactions
    }

    /// Row index of the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Id of the row under the cursor, when one is loaded.
    pub fn cursor_id(&self) -> Option<u64> {
        self.rows.get(self.cursor).map(|r| r.id())
    }

    /// Current scroll offset in lines.
    pub fn scroll_offset(&self) -> usize {
        self.window.scroll_offset()
    }

    /// The windowing engine, for geometry queries.
    pub fn window(&self) -> &VirtualWindow {
        &self.window
    }

    /// Column list as rendered: hidden columns removed, the selection
    /// checkbox column prepended and the show-source column appended when
    /// those features are enabled.
    pub fn visible_columns(&self) -> Vec<Column<R>> {
        let mut cols = prepare_columns(&self.columns, &self.hidden);
        if self.selection.is_some() {
            cols.insert(0, Column::new(SELECT_COLUMN_ID, ""));
        }
        if self.show_source {
            cols.push(Column::new(SOURCE_COLUMN_ID, ""));
        }
        cols
    }

    /// Resizes the table. The first call also restores the scroll position
    /// onto the focused row.
    ///
    /// Returns a load command when the (re)computed window reaches into
    /// unloaded rows.
    pub fn set_size(&mut self, width: usize, height: usize) -> Option<Cmd> {
        self.width = width;
        self.window.set_viewport_height(height);
        if !self.restore.initialized() {
            let offset = self.restore.initial_offset(
                &self.rows,
                self.focused,
                self.row_height,
                height,
            );
            self.window.scroll_to_offset(offset);
        }
        self.check_load()
    }

    /// Replaces the loaded rows and expected total.
    ///
    /// This is the explicit data-change signal: the scroll position is
    /// re-centered on the focused row (re-resolved by key against the new
    /// data), the cursor is clamped, and the loaded boundary is re-checked.
    pub fn set_rows(&mut self, rows: Vec<R>, total: usize) -> Option<Cmd> {
        self.window.set_item_count(rows.len() + 1);
        self.loader.set_total(total);
        self.rows = rows;
        self.restore.recenter(&mut self.window, &self.rows, self.focused);
        if !self.rows.is_empty() {
            self.cursor = self.cursor.min(self.rows.len() - 1);
        } else {
            self.cursor = 0;
        }
        self.check_load()
    }

    /// Changes the focused row and re-centers the viewport on it.
    pub fn set_focused_row(&mut self, key: Option<u64>) {
        self.focused = key;
        self.restore.recenter(&mut self.window, &self.rows, self.focused);
    }

    /// Scrolls so the given row satisfies the alignment.
    pub fn scroll_to_row(&mut self, index: usize, align: Align) -> Option<Cmd> {
        self.window.scroll_to_index(index + 1, align);
        self.check_load()
    }

    /// Compares the overscanned row range against the loaded boundary and
    /// returns a load command when unloaded rows are in reach.
    fn check_load(&mut self) -> Option<Cmd> {
        let visible = self.window.visible_range();
        let last_slot = visible.end.checked_sub(1)?;
        // slot space to row space: slot i displays row i - 1
        let first_row = visible.start.max(1) - 1;
        let last_row = last_slot.saturating_sub(1);
        let overscan = self.window.overscan();
        let start = first_row.saturating_sub(overscan);
        let stop = last_row + overscan;
        self.loader.on_items_rendered(self.rows.len(), start, stop)
    }

    fn move_cursor(&mut self, delta: i64) -> Option<Cmd> {
        if self.rows.is_empty() {
            return None;
        }
        let last = (self.rows.len() - 1) as i64;
        self.cursor = (self.cursor as i64 + delta).clamp(0, last) as usize;
        self.window.scroll_to_index(self.cursor + 1, Align::Auto);
        self.check_load()
    }

    /// Rows per page: the body band height divided by the row height.
    fn page_rows(&self) -> usize {
        let band = self
            .window
            .viewport_height()
            .saturating_sub(self.window.sticky_height_total());
        (band / self.row_height).max(1)
    }

    fn move_active_column(&mut self, delta: i64) {
        let cols = self.visible_columns();
        if cols.is_empty() {
            return;
        }
        let mut index = self.active_column.min(cols.len() - 1) as i64;
        loop {
            index += delta;
            if index < 0 || index as usize >= cols.len() {
                return;
            }
            if !cols[index as usize].is_synthetic() {
                self.active_column = index as usize;
                return;
            }
        }
    }

    fn active_column_descriptor(&self) -> Option<Column<R>> {
        let cols = self.visible_columns();
        cols.get(self.active_column.min(cols.len().saturating_sub(1)))
            .filter(|c| !c.is_synthetic())
            .cloned()
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if self.keymap.cursor_up.matches(key) {
            return self.move_cursor(-1);
        }
        if self.keymap.cursor_down.matches(key) {
            return self.move_cursor(1);
        }
        if self.keymap.page_up.matches(key) {
            return self.move_cursor(-(self.page_rows() as i64));
        }
        if self.keymap.page_down.matches(key) {
            return self.move_cursor(self.page_rows() as i64);
        }
        if self.keymap.half_page_up.matches(key) {
            return self.move_cursor(-((self.page_rows() / 2).max(1) as i64));
        }
        if self.keymap.half_page_down.matches(key) {
            return self.move_cursor((self.page_rows() / 2).max(1) as i64);
        }
        if self.keymap.go_to_start.matches(key) {
            self.cursor = 0;
            self.window.scroll_to_offset(0);
            return self.check_load();
        }
        if self.keymap.go_to_end.matches(key) {
            if self.rows.is_empty() {
                return None;
            }
            self.cursor = self.rows.len() - 1;
            self.window.scroll_to_index(self.cursor + 1, Align::End);
            return self.check_load();
        }
        if self.keymap.column_left.matches(key) {
            self.move_active_column(-1);
            return None;
        }
        if self.keymap.column_right.matches(key) {
            self.move_active_column(1);
            return None;
        }
        if self.keymap.toggle_select.matches(key) {
            if self.selection.is_some() {
                if let Some(id) = self.cursor_id() {
                    return Some(emit(SelectRowMsg { id }));
                }
            }
            return None;
        }
        if self.keymap.select_all.matches(key) {
            if self.selection.is_some() {
                return Some(emit(SelectAllMsg));
            }
            return None;
        }
        if self.keymap.activate.matches(key) {
            return self.cursor_id().map(|id| emit(RowClickMsg { id }));
        }
        if self.keymap.show_source.matches(key) {
            if self.show_source {
                return self.cursor_id().map(|id| emit(ShowSourceMsg { id }));
            }
            return None;
        }
        if self.keymap.sort.matches(key) {
            if !self.sorting_enabled {
                return None;
            }
            let column = self.active_column_descriptor()?;
            if !column.sortable {
                return None;
            }
            // ascending first, then flip on repeat
            let descending = self
                .order
                .as_ref()
                .map(|o| o.column_id == column.id && !o.descending)
                .unwrap_or(false);
            return Some(emit(SetOrderMsg {
                column_id: column.id,
                descending,
            }));
        }
        if self.keymap.change_type.matches(key) {
            let column = self.active_column_descriptor()?;
            return Some(emit(TypeChangeMsg { column_id: column.id }));
        }
        if self.keymap.widen_column.matches(key) {
            let column = self.active_column_descriptor()?;
            let width = self.resolved_width(&column) + 1;
            return Some(emit(ColumnResizeMsg {
                column_id: column.id,
                width,
            }));
        }
        if self.keymap.narrow_column.matches(key) {
            let column = self.active_column_descriptor()?;
            let width = self.resolved_width(&column).saturating_sub(1).max(1);
            return Some(emit(ColumnResizeMsg {
                column_id: column.id,
                width,
            }));
        }
        if self.keymap.reset_column.matches(key) {
            let column = self.active_column_descriptor()?;
            return Some(emit(ColumnResetMsg { column_id: column.id }));
        }
        None
    }

    /// Handles a message, returning any command to run.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(done) = msg.downcast_ref::<LoadCompletedMsg>() {
            self.loader.on_load_settled(done.loader);
            return None;
        }
        if let Some(failed) = msg.downcast_ref::<LoadFailedMsg>() {
            self.loader.on_load_settled(failed.loader);
            return None;
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.stop_interactions {
                return None;
            }
            return self.handle_key(key);
        }
        None
    }
}

impl<R: TableItem> std::fmt::Debug for Model<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("rows", &self.rows.len())
            .field("total", &self.loader.total())
            .field("cursor", &self.cursor)
            .field("window", &self.window)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone)]
    struct Task {
        id: u64,
        name: String,
    }

    impl TableItem for Task {
        fn id(&self) -> u64 {
            self.id
        }

        fn cell(&self, column_id: &str) -> String {
            match column_id {
                "id" => self.id.to_string(),
                "name" => self.name.clone(),
                _ => String::new(),
            }
        }
    }

    struct FixedSelection {
        all: bool,
        selected: Vec<u64>,
    }

    impl Selection for FixedSelection {
        fn is_all_selected(&self) -> bool {
            self.all
        }

        fn is_indeterminate(&self) -> bool {
            !self.all && !self.selected.is_empty()
        }

        fn is_selected(&self, id: u64) -> bool {
            self.all || self.selected.contains(&id)
        }
    }

    fn tasks(n: usize) -> Vec<Task> {
        (0..n as u64)
            .map(|i| Task {
                id: i + 1,
                name: format!("task {}", i + 1),
            })
            .collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn table(rows: usize, total: usize) -> Model<Task> {
        let mut m = Model::new(vec![
            Column::new("id", "ID").sortable(true),
            Column::new("name", "Name").with_width(10),
        ])
        .with_rows(tasks(rows), total);
        let _ = m.set_size(40, 12);
        m
    }

    #[test]
    fn test_cursor_moves_and_scrolls() {
        let mut m = table(100, 100);
        for _ in 0..3 {
            assert!(m.update(key(KeyCode::Down)).is_none());
        }
        assert_eq!(m.cursor(), 3);
        m.update(key(KeyCode::Up));
        assert_eq!(m.cursor(), 2);

        m.update(key(KeyCode::End));
        assert_eq!(m.cursor(), 99);
        // last row flush with the viewport bottom: 2 header lines plus
        // 100 rows is 102 lines of content in a 12-line viewport
        assert_eq!(m.scroll_offset(), 90);

        m.update(key(KeyCode::Home));
        assert_eq!(m.cursor(), 0);
        assert_eq!(m.scroll_offset(), 0);
    }

    #[test]
    fn test_cursor_clamped_to_loaded_rows() {
        let mut m = table(3, 3);
        for _ in 0..10 {
            m.update(key(KeyCode::Down));
        }
        assert_eq!(m.cursor(), 2);
        assert_eq!(m.cursor_id(), Some(3));
    }

    #[tokio::test]
    async fn test_enter_emits_row_click() {
        let mut m = table(10, 10);
        m.update(key(KeyCode::Down));
        let cmd = m.update(key(KeyCode::Enter)).expect("activate emits");
        let msg = cmd.await.unwrap();
        assert_eq!(msg.downcast_ref::<RowClickMsg>().unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_selection_keys_emit_messages() {
        // no selection set configured: selection keys do nothing
        let mut m = table(10, 10);
        assert!(m.update(key(KeyCode::Char(' '))).is_none());

        let mut m = table(10, 10);
        m.set_selection(Arc::new(FixedSelection {
            all: false,
            selected: vec![],
        }));
        let cmd = m.update(key(KeyCode::Char(' '))).expect("toggle emits");
        let msg = cmd.await.unwrap();
        assert_eq!(msg.downcast_ref::<SelectRowMsg>().unwrap().id, 1);

        let cmd = m
            .update(Box::new(KeyMsg {
                key: KeyCode::Char('a'),
                modifiers: KeyModifiers::CONTROL,
            }))
            .expect("select-all emits");
        let msg = cmd.await.unwrap();
        assert!(msg.downcast_ref::<SelectAllMsg>().is_some());
    }

    #[tokio::test]
    async fn test_sort_key_cycles_order() {
        let mut m = table(10, 10);
        let cmd = m.update(key(KeyCode::Char('o'))).expect("sort emits");
        let msg = cmd.await.unwrap();
        let order = msg.downcast_ref::<SetOrderMsg>().unwrap();
        assert_eq!((order.column_id.as_str(), order.descending), ("id", false));

        // the host applied the ascending order; the next press flips it
        m.set_order(Some(SortOrder::ascending("id")));
        let cmd = m.update(key(KeyCode::Char('o'))).unwrap();
        let msg = cmd.await.unwrap();
        assert!(msg.downcast_ref::<SetOrderMsg>().unwrap().descending);

        // the second column is not sortable
        m.update(key(KeyCode::Right));
        assert!(m.update(key(KeyCode::Char('o'))).is_none());
    }

    #[tokio::test]
    async fn test_column_resize_messages() {
        let mut m = table(10, 10);
        let cmd = m.update(key(KeyCode::Char('>'))).expect("widen emits");
        let msg = cmd.await.unwrap();
        let resize = msg.downcast_ref::<ColumnResizeMsg>().unwrap();
        assert_eq!(resize.column_id, "id");
        assert_eq!(resize.width, 5); // derived width 4 plus one

        let cmd = m.update(key(KeyCode::Char('0'))).unwrap();
        let msg = cmd.await.unwrap();
        assert_eq!(msg.downcast_ref::<ColumnResetMsg>().unwrap().column_id, "id");
    }

    #[tokio::test]
    async fn test_type_change_message() {
        let mut m = table(10, 10);
        let cmd = m.update(key(KeyCode::Char('t'))).expect("type change emits");
        let msg = cmd.await.unwrap();
        assert_eq!(msg.downcast_ref::<TypeChangeMsg>().unwrap().column_id, "id");

        // the synthetic select column has no display type
        let mut m = table(10, 10);
        m.set_selection(Arc::new(FixedSelection {
            all: false,
            selected: vec![],
        }));
        m.active_column = 0;
        assert!(m.update(key(KeyCode::Char('t'))).is_none());
    }

    #[test]
    fn test_stop_interactions_blocks_keys() {
        let mut m = table(10, 10);
        m.set_stop_interactions(true);
        assert!(m.update(key(KeyCode::Down)).is_none());
        assert_eq!(m.cursor(), 0);
        assert!(m.update(key(KeyCode::Enter)).is_none());
    }

    #[tokio::test]
    async fn test_scroll_into_unloaded_triggers_single_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let mut m = Model::new(vec![Column::new("id", "ID")])
            .with_rows(tasks(50), 200)
            .with_load_more(Arc::new(move |_, _| {
                seen.fetch_add(1, Ordering::SeqCst);
                Box::pin(async { Ok(()) })
            }));
        // sizing keeps the window on loaded rows, no request yet
        assert!(m.set_size(40, 12).is_none());

        let cmd = m.update(key(KeyCode::End)).expect("boundary reached");
        assert!(m.loading());
        // further scrolling into the same boundary issues nothing
        assert!(m.update(key(KeyCode::Up)).is_none());
        assert!(m.update(key(KeyCode::Down)).is_none());

        let msg = cmd.await.unwrap();
        let done = msg.downcast_ref::<LoadCompletedMsg>().unwrap();
        assert_eq!((done.start, done.stop), (50, 59));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_settles_and_stale_ids_ignored() {
        let mut m = Model::new(vec![Column::new("id", "ID")])
            .with_rows(tasks(50), 200)
            .with_load_more(Arc::new(|_, _| Box::pin(async { Ok(()) })));
        let _ = m.set_size(40, 12);
        let cmd = m.update(key(KeyCode::End)).unwrap();
        let msg = cmd.await.unwrap();
        let done = *msg.downcast_ref::<LoadCompletedMsg>().unwrap();

        // a completion from a torn-down table leaves the guard alone
        m.update(Box::new(LoadCompletedMsg {
            loader: done.loader - 1,
            ..done
        }));
        assert!(m.loading());

        m.update(Box::new(done));
        assert!(!m.loading());
    }

    #[tokio::test]
    async fn test_load_failure_reported_and_not_retried() {
        let mut m = Model::new(vec![Column::new("id", "ID")])
            .with_rows(tasks(10), 100)
            .with_load_more(Arc::new(|_, _| {
                Box::pin(async { Err("timeout".to_string()) })
            }));
        let cmd = m.set_size(40, 12).expect("short data loads on size");
        let msg = cmd.await.unwrap();
        let failed = msg.downcast_ref::<LoadFailedMsg>().unwrap();
        assert_eq!(failed.error, "timeout");
        assert_eq!(failed.start, 10);

        m.update(Box::new(failed.clone()));
        assert!(!m.loading());
    }

    #[test]
    fn test_new_rows_recenter_on_focused_row() {
        let mut m = Model::new(vec![Column::new("id", "ID")])
            .with_rows(tasks(100), 100)
            .with_focused_row(80);
        let _ = m.set_size(40, 12);
        let _ = m.set_rows(tasks(100), 100);
        let before = m.scroll_offset();

        // ten rows inserted ahead shift the focused row down
        let mut shifted: Vec<Task> = (200..210)
            .map(|id| Task {
                id,
                name: String::new(),
            })
            .collect();
        shifted.extend(tasks(100));
        let _ = m.set_rows(shifted, 110);
        assert_eq!(m.scroll_offset(), before + 10);
    }

    #[test]
    fn test_view_header_checkbox_states() {
        let mut m = table(10, 10);
        m.set_selection(Arc::new(FixedSelection {
            all: false,
            selected: vec![1, 2, 3],
        }));
        let view = m.view();
        assert!(view.contains("[~]"));
        assert!(view.contains("[x]")); // the three selected rows

        m.set_selection(Arc::new(FixedSelection {
            all: true,
            selected: vec![],
        }));
        assert!(m.view().contains("[x]"));
        assert!(!m.view().contains("[~]"));
    }

    #[test]
    fn test_view_header_stays_pinned() {
        let mut m = table(100, 100);
        m.update(key(KeyCode::End));
        let view = m.view();
        let first_line = view.lines().next().unwrap();
        assert!(first_line.contains("ID"));
        assert!(view.contains("task 100"));
        assert!(!view.contains("task 1 "));
    }

    #[test]
    fn test_view_sort_indicator() {
        let mut m = table(10, 10);
        m.set_order(Some(SortOrder::descending("id")));
        assert!(m.view().contains("▼"));
        m.set_order(Some(SortOrder::ascending("id")));
        assert!(m.view().contains("▲"));
    }

    #[test]
    fn test_view_placeholders_for_unloaded_rows() {
        let m = table(5, 50);
        assert!(m.view().contains("…"));

        let m = table(5, 5);
        assert!(!m.view().contains("…"));
    }

    #[test]
    fn test_view_line_count_matches_viewport() {
        let m = table(3, 3);
        assert_eq!(m.view().split('\n').count(), 12);
        let m = table(100, 100);
        assert_eq!(m.view().split('\n').count(), 12);

        // a viewport shorter than the 2-line header truncates the frame
        let mut m = table(3, 3);
        let _ = m.set_size(20, 1);
        assert_eq!(m.view().split('\n').count(), 1);
        let _ = m.set_size(20, 0);
        assert_eq!(m.view(), "");
    }

    #[test]
    fn test_show_source_column_rendered() {
        let mut m = Model::new(vec![Column::new("id", "ID")])
            .with_rows(tasks(3), 3)
            .with_show_source(true);
        let _ = m.set_size(40, 12);
        assert!(m.view().contains("</>"));
    }
}
