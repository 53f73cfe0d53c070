//! Page state and its derived views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PageRejection, WindowError};
use crate::request::PageRequest;
use crate::window::{PageWindow, visible_window};

/// 1-based inclusive span of the items on the current page.
///
/// An empty collection yields `0-0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRange {
    /// First item shown (1-based), 0 when empty.
    pub start: usize,
    /// Last item shown (1-based, inclusive), 0 when empty.
    pub end: usize,
}

impl ItemRange {
    /// Number of items in the range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Check if the range covers no items.
    pub fn is_empty(&self) -> bool {
        self.end == 0 || self.start > self.end
    }
}

impl fmt::Display for ItemRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// An input to the page state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The user picked a page.
    Select(PageRequest),
    /// Counts changed; the current page is kept where possible.
    Resize { total_items: usize, page_size: usize },
    /// The collection or page size was replaced; start over on page 1.
    Reset { total_items: usize, page_size: usize },
}

/// Pagination state: everything else is derived from these three numbers.
///
/// Fields are private and every constructor clamps, so `page_size >= 1` and
/// `1 <= current_page <= display_total_pages()` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageState {
    /// Build a state from raw counts, clamping `current_page` into range.
    pub fn recompute(
        total_items: usize,
        page_size: usize,
        current_page: usize,
    ) -> Result<Self, WindowError> {
        if page_size == 0 {
            return Err(WindowError::invalid_config("page size must be at least 1"));
        }

        Ok(Self::clamped(total_items, page_size, current_page))
    }

    // Caller guarantees `page_size >= 1`.
    fn clamped(total_items: usize, page_size: usize, current_page: usize) -> Self {
        let last = total_items.div_ceil(page_size).max(1);
        Self {
            current_page: current_page.clamp(1, last),
            page_size,
            total_items,
        }
    }

    /// First page of a collection.
    pub fn first(total_items: usize, page_size: usize) -> Result<Self, WindowError> {
        Self::recompute(total_items, page_size, 1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages holding items; 0 for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Page count shown to the user. An empty collection still has page 1.
    pub fn display_total_pages(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Items shown on the current page.
    pub fn item_range(&self) -> ItemRange {
        if self.total_items == 0 {
            return ItemRange::default();
        }
        ItemRange {
            start: (self.current_page - 1) * self.page_size + 1,
            end: self
                .current_page
                .saturating_mul(self.page_size)
                .min(self.total_items),
        }
    }

    /// Zero-based slice bounds of the current page within the collection.
    pub fn slice_bounds(&self) -> (usize, usize) {
        slice_bounds(self.total_items, self.current_page, self.page_size)
    }

    /// Page controls around the current page.
    pub fn window(&self, max_visible: usize) -> PageWindow {
        visible_window(self.current_page, self.display_total_pages(), max_visible)
    }

    /// Following page, if there is one.
    pub fn next_page(&self) -> Option<usize> {
        (self.current_page < self.total_pages()).then_some(self.current_page + 1)
    }

    /// Preceding page, if there is one.
    pub fn previous_page(&self) -> Option<usize> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Check a page selection against this state without changing it.
    pub fn validate_request(
        &self,
        request: impl Into<PageRequest>,
    ) -> Result<usize, PageRejection> {
        let requested = match request.into() {
            PageRequest::Page(page) => page,
            PageRequest::Invalid => return Err(PageRejection::NotANumber),
        };

        if requested < 1 {
            return Err(PageRejection::BeforeFirst { requested });
        }

        let total_pages = self.total_pages();
        let page = match usize::try_from(requested) {
            Ok(page) if page <= total_pages => page,
            _ => {
                return Err(PageRejection::PastLast {
                    requested,
                    total_pages,
                });
            }
        };

        if page == self.current_page {
            return Err(PageRejection::Unchanged { page });
        }
        Ok(page)
    }

    /// Move to a validated page.
    pub fn select(&self, request: impl Into<PageRequest>) -> Result<Self, PageRejection> {
        let page = self.validate_request(request)?;
        Ok(Self {
            current_page: page,
            ..*self
        })
    }

    /// New item count with the same page size, current page clamped.
    pub fn resize(&self, total_items: usize) -> Self {
        Self::clamped(total_items, self.page_size, self.current_page)
    }

    /// New item count with the same page size, back on page 1.
    pub fn reset(&self, total_items: usize) -> Self {
        Self::clamped(total_items, self.page_size, 1)
    }

    /// Apply an event, returning the next state. `self` is left untouched so
    /// a rejected event costs nothing.
    pub fn apply(&self, event: PageEvent) -> Result<Self, WindowError> {
        match event {
            PageEvent::Select(request) => Ok(self.select(request)?),
            PageEvent::Resize {
                total_items,
                page_size,
            } => Self::recompute(total_items, page_size, self.current_page),
            PageEvent::Reset {
                total_items,
                page_size,
            } => Self::first(total_items, page_size),
        }
    }

    /// Snapshot of every derived field.
    pub fn view(&self, max_visible: usize) -> PageView {
        PageView {
            current_page: self.current_page,
            total_pages: self.display_total_pages(),
            total_items: self.total_items,
            page_size: self.page_size,
            range: self.item_range(),
            window: self.window(max_visible),
            has_previous: self.previous_page().is_some(),
            has_next: self.next_page().is_some(),
        }
    }
}

/// Render-ready pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub current_page: usize,
    /// Display total, never below 1.
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub range: ItemRange,
    pub window: PageWindow,
    pub has_previous: bool,
    pub has_next: bool,
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} of {} | page {}/{} | {}",
            self.range, self.total_items, self.current_page, self.total_pages, self.window
        )
    }
}

fn slice_bounds(len: usize, current_page: usize, page_size: usize) -> (usize, usize) {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = start.saturating_add(page_size).min(len);
    (start, end)
}

/// The items on `current_page`, clamped to the collection.
///
/// Out-of-range pages give an empty slice.
pub fn visible_slice<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    let (start, end) = slice_bounds(items.len(), current_page, page_size);
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recompute_clamps_current_page() {
        let state = PageState::recompute(25, 10, 9).unwrap();
        assert_eq!(state.current_page(), 3);

        let state = PageState::recompute(25, 10, 0).unwrap();
        assert_eq!(state.current_page(), 1);

        let state = PageState::recompute(0, 10, 4).unwrap();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_recompute_rejects_zero_page_size() {
        let err = PageState::recompute(10, 0, 1).unwrap_err();
        assert!(matches!(err, WindowError::InvalidConfig { .. }));
    }

    #[test]
    fn test_empty_collection() {
        let state = PageState::first(0, 10).unwrap();
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.display_total_pages(), 1);
        assert_eq!(state.item_range(), ItemRange { start: 0, end: 0 });
        assert!(state.item_range().is_empty());
        assert_eq!(state.window(5).to_string(), "1");
    }

    #[test]
    fn test_item_range_last_page() {
        let state = PageState::recompute(25, 10, 3).unwrap();
        let range = state.item_range();
        assert_eq!(range, ItemRange { start: 21, end: 25 });
        assert_eq!(range.len(), 5);
        assert_eq!(range.to_string(), "21-25");
    }

    #[test]
    fn test_visible_slice() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(visible_slice(&items, 3, 10), &items[20..25]);
        assert_eq!(visible_slice(&items, 1, 10).len(), 10);
        assert!(visible_slice(&items, 4, 10).is_empty());
        assert!(visible_slice(&items, usize::MAX, usize::MAX).is_empty());

        let state = PageState::recompute(items.len(), 10, 3).unwrap();
        assert_eq!(state.slice_bounds(), (20, 25));
    }

    #[test]
    fn test_neighbours() {
        let state = PageState::recompute(30, 10, 2).unwrap();
        assert_eq!(state.previous_page(), Some(1));
        assert_eq!(state.next_page(), Some(3));

        let empty = PageState::first(0, 10).unwrap();
        assert_eq!(empty.previous_page(), None);
        assert_eq!(empty.next_page(), None);
    }

    #[test]
    fn test_apply_resize_keeps_page() {
        let state = PageState::recompute(100, 10, 4).unwrap();
        let resized = state
            .apply(PageEvent::Resize {
                total_items: 200,
                page_size: 10,
            })
            .unwrap();
        assert_eq!(resized.current_page(), 4);

        let shrunk = state
            .apply(PageEvent::Resize {
                total_items: 15,
                page_size: 10,
            })
            .unwrap();
        assert_eq!(shrunk.current_page(), 2);
    }

    #[test]
    fn test_apply_reset_returns_to_first_page() {
        let state = PageState::recompute(100, 10, 4).unwrap();
        let reset = state
            .apply(PageEvent::Reset {
                total_items: 100,
                page_size: 20,
            })
            .unwrap();
        assert_eq!(reset.current_page(), 1);
        assert_eq!(reset.page_size(), 20);
    }

    #[test]
    fn test_resize_and_reset_keep_page_size() {
        let state = PageState::recompute(100, 10, 7).unwrap();
        assert_eq!(state.resize(45).current_page(), 5);
        assert_eq!(state.resize(45).page_size(), 10);
        assert_eq!(state.reset(200).current_page(), 1);
    }

    #[test]
    fn test_view_display() {
        let view = PageState::recompute(25, 10, 3).unwrap().view(5);
        assert_eq!(view.to_string(), "Showing 21-25 of 25 | page 3/3 | 1 2 3");
        assert!(view.has_previous);
        assert!(!view.has_next);
    }
}
