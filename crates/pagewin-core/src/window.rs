//! Page-number windows with ellipses.

use std::fmt;

use itertools::Itertools;
use serde::{Serialize, Serializer};

/// Default capacity of a page window.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Smallest capacity the windowing heuristic supports.
///
/// Below this the fixed head/tail shapes would repeat pages or put an
/// ellipsis between neighbours.
pub const MIN_VISIBLE_PAGES: usize = 5;

/// Text shown for an elided run of pages.
pub const ELLIPSIS: &str = "...";

/// One control in a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEntry {
    /// A selectable page (1-based).
    Page(usize),
    /// A gap of one or more hidden pages.
    Ellipsis,
}

impl PageEntry {
    /// The page number, if this entry is a page.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    /// Check if this entry is an ellipsis.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

// Pages go out as numbers and gaps as "...", the shape page controls bind to.
impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u64(*page as u64),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// The ordered set of page controls to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageWindow {
    entries: Vec<PageEntry>,
}

impl PageWindow {
    /// All entries, pages and gaps, in display order.
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Concrete page numbers in display order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().filter_map(|entry| entry.page())
    }

    /// Check whether a page has its own control.
    pub fn contains(&self, page: usize) -> bool {
        self.pages().any(|p| p == page)
    }

    /// Check if any pages are hidden behind an ellipsis.
    pub fn is_abbreviated(&self) -> bool {
        self.entries.iter().any(|entry| entry.is_ellipsis())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().join(" "))
    }
}

impl From<Vec<PageEntry>> for PageWindow {
    fn from(entries: Vec<PageEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a PageEntry;
    type IntoIter = std::slice::Iter<'a, PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute the page controls for `current_page` out of `total_pages`.
///
/// Small page counts are listed in full. Larger ones use one of three fixed
/// shapes: the first four pages, the last four pages, or the current page
/// with its two neighbours, always bracketed by the first and last page.
/// A `max_visible` below [`MIN_VISIBLE_PAGES`] is raised to it.
pub fn visible_window(current_page: usize, total_pages: usize, max_visible: usize) -> PageWindow {
    use PageEntry::{Ellipsis, Page};

    let max_visible = max_visible.max(MIN_VISIBLE_PAGES);

    let entries = if total_pages <= max_visible {
        (1..=total_pages).map(Page).collect()
    } else if current_page <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total_pages)]
    } else if current_page >= total_pages - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    };

    PageWindow { entries }
}
