//! Windowing engine: visible-range computation over a virtual item list.
//!
//! [`VirtualWindow`] models the table as a vertical strip of items measured
//! in terminal lines. Logical index 0 is the sticky header slot; body slot
//! `i` displays row `i - 1`. Sticky indices carry explicit per-index
//! heights; every other index uses the uniform body row height.
//!
//! The engine owns only scroll geometry: scroll offset, viewport size,
//! overscan, and the sticky index set. Given those it answers which
//! contiguous index range intersects the viewport, what any index's extent
//! is, and how to scroll so a given index is visible or centered. Work per
//! query is O(sticky items), never O(total rows), which keeps render cost
//! proportional to the visible window.
//!
//! Item identity is exposed through [`VirtualWindow::item_key`]: a loaded
//! row contributes its own stable key, and any slot without a row (sticky
//! slots, not-yet-loaded indices) falls back to its positional index, so a
//! key is always defined and never panics.

use std::ops::Range;

use super::types::TableItem;

/// Scroll alignment for [`VirtualWindow::scroll_to_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Put the item's top edge at the top of the viewport.
    Start,
    /// Center the item in the viewport.
    Center,
    /// Put the item's bottom edge at the bottom of the viewport.
    End,
    /// Scroll the minimum distance needed to make the item fully visible
    /// below the sticky band; no-op when already visible.
    Auto,
}

/// Stable identity for a rendered slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// A loaded row's own key.
    Row(u64),
    /// Positional fallback for sticky slots and not-yet-loaded indices.
    Slot(usize),
}

/// Scroll geometry for a virtualized list with sticky indices.
#[derive(Debug, Clone)]
pub struct VirtualWindow {
    /// Total logical item count (loaded rows + the header slot).
    item_count: usize,
    /// Uniform height of non-sticky items, in lines. Always >= 1.
    row_height: usize,
    /// Sticky `(index, height)` pairs, sorted ascending by index.
    sticky: Vec<(usize, usize)>,
    overscan: usize,
    scroll_offset: usize,
    viewport_height: usize,
}

/// Default overscan: extra items computed on each side of the visible
/// range to absorb fast scrolling.
pub const DEFAULT_OVERSCAN: usize = 10;

impl VirtualWindow {
    /// Creates a window with a sticky header slot at index 0.
    pub fn new(row_height: usize, header_height: usize) -> Self {
        Self {
            item_count: 0,
            row_height: row_height.max(1),
            sticky: vec![(0, header_height.max(1))],
            overscan: DEFAULT_OVERSCAN,
            scroll_offset: 0,
            viewport_height: 0,
        }
    }

    /// Sets the logical item count (loaded rows + 1) and re-clamps the
    /// scroll offset against the new content size.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    /// Logical item count.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the viewport height in lines.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    /// Viewport height in lines.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Sets the uniform body row height (minimum 1).
    pub fn set_row_height(&mut self, height: usize) {
        self.row_height = height.max(1);
    }

    /// Uniform body row height.
    pub fn row_height(&self) -> usize {
        self.row_height
    }

    /// Sets the overscan margin.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// Overscan margin.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Replaces the sticky index set. Pairs are `(index, height)`;
    /// the list is sorted by index before use.
    pub fn set_sticky(&mut self, mut sticky: Vec<(usize, usize)>) {
        sticky.sort_by_key(|&(i, _)| i);
        for (_, h) in &mut sticky {
            *h = (*h).max(1);
        }
        self.sticky = sticky;
    }

    /// Sticky `(index, height)` pairs in ascending index order.
    pub fn sticky(&self) -> &[(usize, usize)] {
        &self.sticky
    }

    /// Whether the given index is sticky.
    pub fn is_sticky(&self, index: usize) -> bool {
        self.sticky.iter().any(|&(i, _)| i == index)
    }

    /// Combined height of all sticky items, in lines.
    pub fn sticky_height_total(&self) -> usize {
        self.sticky.iter().map(|&(_, h)| h).sum()
    }

    /// Fixed top offset of a sticky index: the cumulative height of the
    /// sticky items before it. Returns `None` for non-sticky indices.
    pub fn sticky_top(&self, index: usize) -> Option<usize> {
        let mut top = 0;
        for &(i, h) in &self.sticky {
            if i == index {
                return Some(top);
            }
            top += h;
        }
        None
    }

    /// Height of the item at `index`, in lines.
    pub fn height_of(&self, index: usize) -> usize {
        self.sticky
            .iter()
            .find(|&&(i, _)| i == index)
            .map(|&(_, h)| h)
            .unwrap_or(self.row_height)
    }

    /// Offset in lines of the item's top edge within the content strip.
    pub fn offset_of(&self, index: usize) -> usize {
        let mut sticky_before = 0;
        let mut sticky_height = 0;
        for &(i, h) in &self.sticky {
            if i >= index {
                break;
            }
            sticky_before += 1;
            sticky_height += h;
        }
        sticky_height + (index - sticky_before) * self.row_height
    }

    /// Total content height in lines.
    pub fn total_size(&self) -> usize {
        self.offset_of(self.item_count)
    }

    /// Index of the item whose extent contains the given line offset,
    /// clamped to the last item.
    pub fn index_at(&self, offset: usize) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        let last = self.item_count - 1;
        let mut idx = 0;
        let mut off = 0;
        for &(s, h) in &self.sticky {
            if s >= self.item_count {
                break;
            }
            // uniform run of body items before this sticky index
            let run = s - idx;
            let run_size = run * self.row_height;
            if offset < off + run_size {
                return (idx + (offset - off) / self.row_height).min(last);
            }
            off += run_size;
            idx = s;
            if offset < off + h {
                return s.min(last);
            }
            off += h;
            idx = s + 1;
        }
        if idx > last {
            return last;
        }
        (idx + offset.saturating_sub(off) / self.row_height).min(last)
    }

    /// Maximum valid scroll offset.
    pub fn max_offset(&self) -> usize {
        self.total_size().saturating_sub(self.viewport_height)
    }

    /// Current scroll offset in lines.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Sets the scroll offset, clamped to the valid range.
    pub fn scroll_to_offset(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_offset());
    }

    /// Scrolls by a signed number of lines, clamped to the valid range.
    pub fn scroll_by(&mut self, delta: i64) {
        let target = self.scroll_offset as i64 + delta;
        self.scroll_to_offset(target.max(0) as usize);
    }

    /// Indices whose extent intersects `[offset, offset + viewport)`.
    pub fn visible_range(&self) -> Range<usize> {
        if self.item_count == 0 || self.viewport_height == 0 {
            return 0..0;
        }
        let first = self.index_at(self.scroll_offset);
        let last = self.index_at(self.scroll_offset + self.viewport_height - 1);
        first..(last + 1).min(self.item_count)
    }

    /// Visible range expanded by the overscan margin on both sides,
    /// clamped to `[0, item_count)`.
    pub fn render_range(&self) -> Range<usize> {
        let visible = self.visible_range();
        if visible.is_empty() {
            return visible;
        }
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible.end.saturating_add(self.overscan).min(self.item_count);
        start..end
    }

    /// Scrolls so the item at `index` satisfies the given alignment.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) {
        if self.item_count == 0 {
            return;
        }
        let index = index.min(self.item_count - 1);
        let start = self.offset_of(index);
        let height = self.height_of(index);
        let viewport = self.viewport_height;
        let target = match align {
            Align::Start => start,
            Align::Center => (start + height / 2).saturating_sub(viewport / 2),
            Align::End => (start + height).saturating_sub(viewport),
            Align::Auto => {
                let band = if self.is_sticky(index) {
                    0
                } else {
                    self.sticky_height_total()
                };
                if start < self.scroll_offset + band {
                    start.saturating_sub(band)
                } else if start + height > self.scroll_offset + viewport {
                    (start + height).saturating_sub(viewport)
                } else {
                    self.scroll_offset
                }
            }
        };
        self.scroll_to_offset(target);
    }

    /// Stable key for the slot at `index`.
    ///
    /// Body slot `i` displays row `i - 1` and takes that row's key. Sticky
    /// slots and slots without a loaded row fall back to the positional
    /// index, so the key is always defined.
    pub fn item_key<R: TableItem>(&self, rows: &[R], index: usize) -> ItemKey {
        if index == 0 || self.is_sticky(index) {
            return ItemKey::Slot(index);
        }
        match rows.get(index - 1) {
            Some(row) => ItemKey::Row(row.key()),
            None => ItemKey::Slot(index),
        }
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
            self.id.to_string()
        }
    }

    fn window(rows: usize, row_height: usize, header_height: usize, viewport: usize) -> VirtualWindow {
        let mut w = VirtualWindow::new(row_height, header_height);
        w.set_item_count(rows + 1);
        w.set_viewport_height(viewport);
        w
    }

    #[test]
    fn test_offsets_with_sticky_header() {
        let w = window(100, 50, 43, 500);
        assert_eq!(w.offset_of(0), 0);
        assert_eq!(w.offset_of(1), 43);
        assert_eq!(w.offset_of(2), 93);
        assert_eq!(w.height_of(0), 43);
        assert_eq!(w.height_of(1), 50);
        assert_eq!(w.total_size(), 43 + 100 * 50);
    }

    #[test]
    fn test_index_at_inverts_offset_of() {
        let w = window(100, 50, 43, 500);
        for index in 0..30 {
            assert_eq!(w.index_at(w.offset_of(index)), index);
            let end = w.offset_of(index) + w.height_of(index) - 1;
            assert_eq!(w.index_at(end), index);
        }
        // past the end clamps to the last item
        assert_eq!(w.index_at(1_000_000), 100);
    }

    #[test]
    fn test_visible_range_at_top() {
        // rowHeight=50, viewportHeight=500, overscan=10, 1000 rows:
        // visible indices (header included) are 0..=10, overscan expands
        // to 0..=20 with the top clamped at 0.
        let w = window(1000, 50, 43, 500);
        assert_eq!(w.visible_range(), 0..11);
        assert_eq!(w.render_range(), 0..21);
    }

    #[test]
    fn test_visible_range_mid_scroll() {
        let mut w = window(1000, 50, 43, 500);
        w.scroll_to_offset(5043); // top of slot 101
        let visible = w.visible_range();
        assert_eq!(visible.start, 101);
        // 500 lines of 50-line rows: slots 101..=110
        assert_eq!(visible.end, 111);
        let render = w.render_range();
        assert_eq!(render, 91..121);
    }

    #[test]
    fn test_render_range_clamps_at_bottom() {
        let mut w = window(30, 1, 2, 10);
        w.scroll_to_offset(w.max_offset());
        let render = w.render_range();
        assert!(render.end <= w.item_count());
        assert!(render.contains(&(w.item_count() - 1)));
    }

    #[test]
    fn test_empty_and_zero_viewport() {
        let w = window(0, 1, 1, 0);
        assert_eq!(w.visible_range(), 0..0);
        assert_eq!(w.render_range(), 0..0);

        let mut w = VirtualWindow::new(1, 1);
        w.set_viewport_height(10);
        assert_eq!(w.visible_range(), 0..0);
        w.scroll_to_offset(99);
        assert_eq!(w.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_offset_clamped() {
        let mut w = window(10, 1, 1, 5);
        // content 11 lines, viewport 5 -> max offset 6
        w.scroll_to_offset(100);
        assert_eq!(w.scroll_offset(), 6);
        w.scroll_by(-100);
        assert_eq!(w.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_to_index_center() {
        let mut w = window(1000, 50, 43, 500);
        w.scroll_to_index(501, Align::Center);
        // start = 43 + 500*50 = 25043; centered: 25043 + 25 - 250
        assert_eq!(w.scroll_offset(), 24818);
    }

    #[test]
    fn test_scroll_to_index_auto_is_minimal() {
        let mut w = window(1000, 1, 2, 10);
        // already visible below the sticky band: no movement
        w.scroll_to_offset(100);
        let before = w.scroll_offset();
        w.scroll_to_index(105, Align::Auto);
        assert_eq!(w.scroll_offset(), before);

        // above the band: scroll up just enough
        w.scroll_to_index(50, Align::Auto);
        assert_eq!(w.scroll_offset(), w.offset_of(50) - 2);

        // below the viewport: scroll down just enough
        w.scroll_to_index(200, Align::Auto);
        assert_eq!(w.scroll_offset() + 10, w.offset_of(200) + 1);
    }

    #[test]
    fn test_item_key_fallback_and_stability() {
        let mut w = window(2, 1, 1, 10);
        let rows = vec![Item { id: 7 }, Item { id: 9 }];
        assert_eq!(w.item_key(&rows, 0), ItemKey::Slot(0));
        assert_eq!(w.item_key(&rows, 1), ItemKey::Row(7));
        assert_eq!(w.item_key(&rows, 2), ItemKey::Row(9));
        // slot beyond the loaded rows falls back to the index
        w.set_item_count(5);
        assert_eq!(w.item_key(&rows, 4), ItemKey::Slot(4));

        // a row keeps its key when its position shifts
        let shifted = vec![Item { id: 5 }, Item { id: 7 }, Item { id: 9 }];
        w.set_item_count(4);
        assert_eq!(w.item_key(&shifted, 2), ItemKey::Row(7));
    }

    #[test]
    fn test_sticky_top_offsets() {
        let mut w = window(100, 1, 2, 10);
        w.set_sticky(vec![(0, 2), (50, 3)]);
        assert_eq!(w.sticky_top(0), Some(0));
        assert_eq!(w.sticky_top(50), Some(2));
        assert_eq!(w.sticky_top(1), None);
        assert_eq!(w.sticky_height_total(), 5);
    }

    #[test]
    fn test_multiple_sticky_geometry() {
        let mut w = window(100, 1, 2, 10);
        w.set_sticky(vec![(0, 2), (10, 3)]);
        // slots 1..=9 are body rows after the 2-line header
        assert_eq!(w.offset_of(10), 2 + 9);
        assert_eq!(w.offset_of(11), 2 + 9 + 3);
        assert_eq!(w.index_at(11), 10);
        assert_eq!(w.index_at(14), 11);
    }
}
