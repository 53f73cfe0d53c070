//! External-page mode: the page and counts come from elsewhere (usually a
//! paginated API response); the pager only derives controls and validates
//! selections.

use serde::{Deserialize, Serialize};

use pagewin_core::{
    ItemRange, PageRejection, PageRequest, PageState, PageView, PageWindow, WindowConfig,
    WindowError,
};

/// Page metadata as returned alongside a page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of records.
    pub total: usize,
    /// Page the records belong to (1-based).
    pub page: usize,
    /// Last page number as computed by the server.
    #[serde(default)]
    pub last_page: Option<usize>,
    /// Records per page.
    pub limit: usize,
}

impl PageMeta {
    /// Create page metadata without a server-side last page.
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        Self {
            total,
            page,
            last_page: None,
            limit,
        }
    }
}

/// Notification that the user picked another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageChange {
    /// Page shown before the selection.
    pub previous: usize,
    /// Newly selected page.
    pub page: usize,
}

/// Windower over counts supplied by the caller.
#[derive(Debug, Clone)]
pub struct ExternalPager {
    state: PageState,
    max_visible: usize,
}

impl ExternalPager {
    /// Create a pager from raw counts. An out-of-range page is clamped.
    pub fn new(
        current_page: usize,
        total_items: usize,
        page_size: usize,
        config: WindowConfig,
    ) -> Result<Self, WindowError> {
        config.validate()?;
        Ok(Self {
            state: PageState::recompute(total_items, page_size, current_page)?,
            max_visible: config.max_visible,
        })
    }

    /// Create a pager from response metadata.
    pub fn from_meta(meta: PageMeta, config: WindowConfig) -> Result<Self, WindowError> {
        check_last_page(&meta);
        Self::new(meta.page, meta.total, meta.limit, config)
    }

    /// Take counts from a fresh response. The page the server reports wins
    /// over the local one, clamped into range.
    pub fn update(&mut self, meta: PageMeta) -> Result<(), WindowError> {
        check_last_page(&meta);
        self.state = PageState::recompute(meta.total, meta.limit, meta.page)?;
        Ok(())
    }

    /// Validate a selection and move to it. The returned change is what the
    /// caller forwards to whatever fetches pages.
    pub fn request_page(
        &mut self,
        request: impl Into<PageRequest>,
    ) -> Result<PageChange, PageRejection> {
        let previous = self.state.current_page();
        self.state = self.state.select(request).inspect_err(|rejection| {
            tracing::trace!(%rejection, "page request ignored");
        })?;

        let change = PageChange {
            previous,
            page: self.state.current_page(),
        };
        tracing::debug!(previous, page = change.page, "page change requested");
        Ok(change)
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
}

// The derived page count is authoritative; a disagreeing server value is
// only logged.
fn check_last_page(meta: &PageMeta) {
    let Some(last_page) = meta.last_page else {
        return;
    };
    if meta.limit == 0 {
        return;
    }
    let derived = meta.total.div_ceil(meta.limit);
    if last_page != derived && !(derived == 0 && last_page == 1) {
        tracing::warn!(
            last_page,
            derived,
            total = meta.total,
            limit = meta.limit,
            "page metadata disagrees with its own counts, using derived page count"
        );
    }
}
