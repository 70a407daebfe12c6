//! Infinite-load coordination: fetching rows as the window nears the
//! loaded boundary.
//!
//! [`InfiniteLoader`] watches the overscanned row range the windowing
//! engine reports after each scroll or data change. When that range runs
//! past the loaded length it issues exactly one command executing the
//! host's async load-more callback for the unloaded span; until that
//! request settles, further scrolls into the same boundary issue nothing.
//!
//! The coordinator decides *when* more data is needed, never *how* to
//! fetch it: a failed load is surfaced as a
//! [`LoadFailedMsg`](super::LoadFailedMsg) and not retried here. Each
//! coordinator carries a unique instance id; completion messages tagged
//! with a different id belong to a torn-down table and are ignored, so a
//! stale continuation can never corrupt a newer mount's state.

use std::sync::atomic::{AtomicI64, Ordering};

use bubbletea_rs::{Cmd, Msg};

use super::types::{LoadCompletedMsg, LoadFailedMsg, LoadMoreFn};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Coordinates load-more requests against an incrementally fetched store.
pub struct InfiniteLoader {
    id: i64,
    total: usize,
    in_flight: Option<(usize, usize)>,
    load_more: Option<LoadMoreFn>,
}

impl std::fmt::Debug for InfiniteLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfiniteLoader")
            .field("id", &self.id)
            .field("total", &self.total)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl InfiniteLoader {
    /// Creates a coordinator with no callback and zero expected items.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            total: 0,
            in_flight: None,
            load_more: None,
        }
    }

    /// Unique instance id stamped onto issued load messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Sets the expected total item count, which may exceed the loaded
    /// length while pages remain unfetched.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    /// Expected total item count.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Installs the host's load-more callback.
    pub fn set_load_more(&mut self, f: LoadMoreFn) {
        self.load_more = Some(f);
    }

    /// Whether a load request is currently in flight.
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the item at `index` is already loaded.
    ///
    /// True exactly when `index < loaded`; once true for an index it stays
    /// true for the session, since loaded data is never unloaded.
    pub fn is_item_loaded(&self, loaded: usize, index: usize) -> bool {
        index < loaded
    }

    /// Reports the overscanned row range currently in view (inclusive
    /// bounds, row index space).
    ///
    /// Returns a command running the host callback over the unloaded span
    /// of that range, or `None` when everything in range is loaded, a
    /// request is already in flight, no callback is installed, or the
    /// range lies entirely beyond `total`.
    pub fn on_items_rendered(
        &mut self,
        loaded: usize,
        start: usize,
        stop: usize,
    ) -> Option<Cmd> {
        if self.in_flight.is_some() {
            return None;
        }
        if self.total == 0 || start >= self.total {
            return None;
        }
        let stop = stop.min(self.total - 1);
        let first_unloaded = start.max(loaded);
        if first_unloaded > stop {
            return None;
        }
        let load_more = self.load_more.clone()?;
        self.in_flight = Some((first_unloaded, stop));
        let id = self.id;
        Some(Box::pin(async move {
            match load_more(first_unloaded, stop).await {
                Ok(()) => Some(Box::new(LoadCompletedMsg {
                    loader: id,
                    start: first_unloaded,
                    stop,
                }) as Msg),
                Err(error) => Some(Box::new(LoadFailedMsg {
                    loader: id,
                    start: first_unloaded,
                    stop,
                    error,
                }) as Msg),
            }
        }))
    }

    /// Clears the in-flight guard for a settled request.
    ///
    /// Returns `false` when the message belongs to another coordinator
    /// instance (a previous mount) and must be ignored.
    pub fn on_load_settled(&mut self, loader_id: i64) -> bool {
        if loader_id != self.id {
            return false;
        }
        self.in_flight = None;
        true
    }
}

impl Default for InfiniteLoader {
    fn default() -> Self {
        Self::new()
    }
}
