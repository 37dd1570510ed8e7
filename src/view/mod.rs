//! View windowing: paged and infinite-scroll slicing of query results.

pub mod window;

pub use window::{ViewMode, ViewWindow, JOBS_PER_PAGE};
