//! Core page arithmetic for pagewin.
//!
//! This crate computes everything a paged list needs to render from three
//! numbers (total items, page size, current page): the page count, the
//! range of items on screen, and the page-number controls with ellipses.
//! All of it is pure; the stateful windowers live in `pagewin-list`.
//!
//! ```rust
//! use pagewin_core::{PageEvent, PageRequest, PageState};
//!
//! let state = PageState::first(250, 10).unwrap();
//! assert_eq!(state.window(5).to_string(), "1 2 3 4 ... 25");
//!
//! let state = state.apply(PageEvent::Select(PageRequest::from(12usize))).unwrap();
//! assert_eq!(state.item_range().to_string(), "111-120");
//! assert_eq!(state.window(5).to_string(), "1 ... 11 12 13 ... 25");
//! ```

mod config;
mod error;
mod request;
mod state;
mod window;

pub use config::{
    DEFAULT_PAGE_SIZE, WindowConfig, WindowConfigBuilder, WindowConfigBuilderError,
};
pub use error::{PageRejection, WindowError};
pub use request::PageRequest;
pub use state::{ItemRange, PageEvent, PageState, PageView, visible_slice};
pub use window::{
    DEFAULT_MAX_VISIBLE, ELLIPSIS, MIN_VISIBLE_PAGES, PageEntry, PageWindow, visible_window,
};
