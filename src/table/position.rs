//! Scroll-position persistence: restoring the viewport onto a focused row.
//!
//! [`ScrollRestore`] computes the mount-time scroll offset that centers
//! the externally tracked focused row, and re-centers the viewport when a
//! data change moves that row to a different index. The initial offset is
//! computed once per mount and cached; recentering never consults the
//! cache and re-resolves the focused row's index by key on every data
//! change, so inserts and deletes ahead of it cannot leave the viewport
//! pointing at a stale position.
//!
//! A missing focused row is not an error: the initial offset falls back
//! to 0 and recentering becomes a no-op.

use super::types::TableItem;
use super::windowing::{Align, VirtualWindow};

/// Mount-scoped scroll restoration state.
#[derive(Debug, Clone, Default)]
pub struct ScrollRestore {
    cached_offset: Option<usize>,
}

impl ScrollRestore {
    /// Creates an uninitialized restore state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the initial offset has been computed for this mount.
    pub fn initialized(&self) -> bool {
        self.cached_offset.is_some()
    }

    /// Computes (once) the initial scroll offset for this mount.
    ///
    /// When the focused row is present in the loaded data, the offset
    /// centers it: `index * row_height - viewport/2 + row_height/2`,
    /// saturating at 0. Otherwise the offset is 0. The result is cached;
    /// later calls return the cached value even if the focused row has
    /// moved, since the data-change recentering path compensates.
    pub fn initial_offset<R: TableItem>(
        &mut self,
        rows: &[R],
        focused: Option<u64>,
        row_height: usize,
        viewport_height: usize,
    ) -> usize {
        if let Some(cached) = self.cached_offset {
            return cached;
        }
        let offset = focused
            .and_then(|key| rows.iter().position(|r| r.key() == key))
            .map(|index| (index * row_height + row_height / 2).saturating_sub(viewport_height / 2))
            .unwrap_or(0);
        self.cached_offset = Some(offset);
        offset
    }

    /// Re-centers the viewport on the focused row after a data change.
    ///
    /// The row's index is re-resolved by key against the new data; the
    /// slot index shift for the sticky header is applied before scrolling.
    /// Returns `false` (and leaves the offset alone) when no focused row
    /// is present in the data.
    pub fn recenter<R: TableItem>(
        &self,
        window: &mut VirtualWindow,
        rows: &[R],
        focused: Option<u64>,
    ) -> bool {
        let Some(key) = focused else {
            return false;
        };
        let Some(index) = rows.iter().position(|r| r.key() == key) else {
            return false;
        };
        window.scroll_to_index(index + 1, Align::Center);
        true
    }

    /// Clears the cached offset (teardown).
    pub fn reset(&mut self) {
        self.cached_offset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        id: u64,
    }

    impl TableItem for Item {
        fn id(&self) -> u64 {
            self.id
        }

        fn cell(&self, _column_id: &str) -> String {
            String::new()
        }
    }

    fn rows(n: usize) -> Vec<Item> {
        (0..n as u64).map(|id| Item { id }).collect()
    }

    #[test]
    fn test_initial_offset_centers_focused_row() {
        // focused = row 500, rowHeight = 50, viewport = 500:
        // 500*50 - 250 + 25 = 24775
        let mut restore = ScrollRestore::new();
        let offset = restore.initial_offset(&rows(1000), Some(500), 50, 500);
        assert_eq!(offset, 24775);
    }

    #[test]
    fn test_initial_offset_zero_without_focus() {
        let mut restore = ScrollRestore::new();
        assert_eq!(restore.initial_offset(&rows(10), None, 50, 500), 0);
        let mut restore = ScrollRestore::new();
        assert_eq!(restore.initial_offset(&rows(10), Some(999), 50, 500), 0);
    }

    #[test]
    fn test_initial_offset_saturates_near_top() {
        let mut restore = ScrollRestore::new();
        // row 1 of height 50 in a 500-line viewport: centering would go
        // negative, so it clamps to 0
        assert_eq!(restore.initial_offset(&rows(10), Some(1), 50, 500), 0);
    }

    #[test]
    fn test_initial_offset_cached_per_mount() {
        let mut restore = ScrollRestore::new();
        let first = restore.initial_offset(&rows(1000), Some(500), 50, 500);
        // the focused row moved, but the cache is intentionally kept
        let second = restore.initial_offset(&rows(1000), Some(100), 50, 500);
        assert_eq!(first, second);
        assert!(restore.initialized());

        restore.reset();
        let fresh = restore.initial_offset(&rows(1000), Some(100), 50, 500);
        assert_ne!(fresh, first);
    }

    #[test]
    fn test_recenter_re_resolves_index_by_key() {
        let restore = ScrollRestore::new();
        let mut window = VirtualWindow::new(1, 2);
        window.set_viewport_height(10);

        let mut data = rows(100);
        window.set_item_count(data.len() + 1);
        assert!(restore.recenter(&mut window, &data, Some(80)));
        let before = window.scroll_offset();

        // insert ten rows ahead of the focused one; its index shifts
        let mut inserted: Vec<Item> = (1000..1010).map(|id| Item { id }).collect();
        inserted.append(&mut data);
        window.set_item_count(inserted.len() + 1);
        assert!(restore.recenter(&mut window, &inserted, Some(80)));
        assert_eq!(window.scroll_offset(), before + 10);
    }

    #[test]
    fn test_recenter_noop_when_focus_missing() {
        let restore = ScrollRestore::new();
        let mut window = VirtualWindow::new(1, 2);
        window.set_viewport_height(10);
        let data = rows(50);
        window.set_item_count(data.len() + 1);
        window.scroll_to_offset(7);

        assert!(!restore.recenter(&mut window, &data, None));
        assert!(!restore.recenter(&mut window, &data, Some(12345)));
        assert_eq!(window.scroll_offset(), 7);
    }
}
