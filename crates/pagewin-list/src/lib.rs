//! Stateful list windowers for pagewin.
//!
//! Three ways of showing part of a list, all built on
//! [`pagewin_core::PageState`]:
//!
//! - [`PagedList`] - owns the collection and the current page, hands back
//!   the visible slice whenever the page changes
//! - [`ExternalPager`] - the page and counts come from a server response;
//!   selections produce a [`PageChange`] for the caller to fetch
//! - [`InfiniteScroll`] - reveals the collection batch by batch on a
//!   "near end" signal
//!
//! ```rust
//! use pagewin_list::PagedList;
//!
//! let mut list = PagedList::with_page_size((1..=25).collect::<Vec<u32>>(), 10).unwrap();
//! assert_eq!(list.request_page(3usize).unwrap(), &[21, 22, 23, 24, 25]);
//! assert_eq!(list.view().to_string(), "Showing 21-25 of 25 | page 3/3 | 1 2 3");
//! ```

mod external;
mod paged;
mod scroll;

pub use external::{ExternalPager, PageChange, PageMeta};
pub use paged::PagedList;
pub use scroll::{InfiniteScroll, ScrollProgress};

// Re-export core types
pub use pagewin_core::{
    ItemRange, PageEntry, PageRejection, PageRequest, PageState, PageView, PageWindow,
    WindowConfig, WindowError,
};
