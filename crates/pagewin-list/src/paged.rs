//! Paged mode: the windower owns the collection and the current page.

use pagewin_core::{
    ItemRange, PageEvent, PageRejection, PageRequest, PageState, PageView, PageWindow,
    WindowConfig, WindowError, visible_slice,
};

/// A collection split into fixed-size pages.
///
/// Replacing the items or the page size starts over on page 1. Page
/// selections are validated against the current state and rejected ones
/// leave it untouched.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    items: Vec<T>,
    state: PageState,
    max_visible: usize,
}

impl<T> PagedList<T> {
    /// Create a paged list from a validated config.
    pub fn new(items: Vec<T>, config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        let state = PageState::first(items.len(), config.page_size)?;
        Ok(Self {
            items,
            state,
            max_visible: config.max_visible,
        })
    }

    /// Create a paged list with the default window.
    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Result<Self, WindowError> {
        Self::new(items, WindowConfig::new(page_size)?)
    }

    /// Replace the collection and return the new first page.
    pub fn set_items(&mut self, items: Vec<T>) -> &[T] {
        self.items = items;
        self.state = self.state.reset(self.items.len());
        tracing::debug!(total_items = self.items.len(), "paged list items replaced");
        self.current_items()
    }

    /// Change the page size and return the new first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<&[T], WindowError> {
        self.state = self.state.apply(PageEvent::Reset {
            total_items: self.items.len(),
            page_size,
        })?;
        tracing::debug!(page_size, "paged list page size changed");
        Ok(self.current_items())
    }

    /// Move to the requested page and return its items.
    pub fn request_page(&mut self, request: impl Into<PageRequest>) -> Result<&[T], PageRejection> {
        let previous = self.state.current_page();
        self.state = self.state.select(request).inspect_err(|rejection| {
            tracing::trace!(%rejection, "page request ignored");
        })?;
        tracing::debug!(previous, page = self.state.current_page(), "page changed");
        Ok(self.current_items())
    }

    /// Move forward one page.
    pub fn next_page(&mut self) -> Result<&[T], PageRejection> {
        let requested = self.state.current_page().saturating_add(1);
        self.request_page(requested)
    }

    /// Move back one page.
    pub fn previous_page(&mut self) -> Result<&[T], PageRejection> {
        let requested = self.state.current_page() as i64 - 1;
        self.request_page(requested)
    }

    /// Items on the current page.
    pub fn current_items(&self) -> &[T] {
        visible_slice(&self.items, self.state.current_page(), self.state.page_size())
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn item_range(&self) -> ItemRange {
        self.state.item_range()
    }

    pub fn window(&self) -> PageWindow {
        self.state.window(self.max_visible)
    }

    pub fn view(&self) -> PageView {
        self.state.view(self.max_visible)
    }

    /// The whole collection.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
