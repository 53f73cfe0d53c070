//! Incremental mode: reveal a collection batch by batch as the viewer
//! approaches the end of what is already shown.

use serde::Serialize;

use pagewin_core::{WindowConfig, WindowError};

/// Snapshot of how much of the collection has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollProgress {
    pub revealed: usize,
    pub total_items: usize,
    pub batch_size: usize,
    pub has_more: bool,
    pub loading: bool,
}

/// Infinite-scroll windower.
///
/// The revealed count only grows until [`InfiniteScroll::reset`] or
/// [`InfiniteScroll::replace_items`]. Whether a load is in flight is owned
/// by the caller; while it is set, loads are skipped.
#[derive(Debug, Clone)]
pub struct InfiniteScroll<T> {
    items: Vec<T>,
    batch_size: usize,
    revealed: usize,
    has_more: bool,
    loading: bool,
}

impl<T> InfiniteScroll<T> {
    /// Create a windower with nothing revealed yet.
    pub fn new(items: Vec<T>, batch_size: usize) -> Result<Self, WindowError> {
        check_batch_size(batch_size)?;
        let has_more = !items.is_empty();
        Ok(Self {
            items,
            batch_size,
            revealed: 0,
            has_more,
            loading: false,
        })
    }

    /// Create a windower that reveals `config.page_size` items per batch.
    pub fn with_config(items: Vec<T>, config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        Self::new(items, config.page_size)
    }

    /// Reveal the next batch and return it.
    ///
    /// Returns `None` without touching state when everything is revealed or
    /// a load is pending.
    pub fn load_more(&mut self) -> Option<&[T]> {
        if !self.has_more || self.loading {
            tracing::trace!(
                has_more = self.has_more,
                loading = self.loading,
                "load skipped"
            );
            return None;
        }

        let start = self.revealed;
        let end = start.saturating_add(self.batch_size).min(self.items.len());
        self.revealed = end;
        self.has_more = self.revealed < self.items.len();
        tracing::debug!(
            revealed = self.revealed,
            total_items = self.items.len(),
            "revealed next batch"
        );

        if end > start {
            Some(&self.items[start..end])
        } else {
            None
        }
    }

    /// Scroll signal from the environment. Loads only when near the end.
    pub fn on_near_end(&mut self, near_end: bool) -> Option<&[T]> {
        if near_end { self.load_more() } else { None }
    }

    /// Mark a load as in flight (or finished).
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Hide everything again.
    pub fn reset(&mut self) {
        self.revealed = 0;
        self.has_more = !self.items.is_empty();
    }

    /// Swap in a new collection and reveal its first batch.
    pub fn replace_items(&mut self, items: Vec<T>) -> Option<&[T]> {
        self.items = items;
        self.reset();
        self.load_more()
    }

    /// Change the batch size, start over and reveal the first batch.
    ///
    /// A rejected size leaves the windower untouched.
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<Option<&[T]>, WindowError> {
        check_batch_size(batch_size)?;
        self.batch_size = batch_size;
        self.reset();
        tracing::debug!(batch_size, "scroll batch size changed");
        Ok(self.load_more())
    }

    /// Everything revealed so far, in order.
    pub fn revealed(&self) -> &[T] {
        &self.items[..self.revealed]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn progress(&self) -> ScrollProgress {
        ScrollProgress {
            revealed: self.revealed,
            total_items: self.items.len(),
            batch_size: self.batch_size,
            has_more: self.has_more,
            loading: self.loading,
        }
    }
}

fn check_batch_size(batch_size: usize) -> Result<(), WindowError> {
    if batch_size == 0 {
        return Err(WindowError::invalid_config("batch size must be at least 1"));
    }
    Ok(())
}
