//! View windowing over the query engine's ordered output.
//!
//! Two mutually exclusive strategies expose a bounded subset of the filtered,
//! sorted result for rendering:
//!
//! - **Paged**: fixed-size pages; page `n` is `output[(n-1)*P .. n*P]`.
//! - **Infinite**: a monotonically growing visible prefix `output[0 ..
//!   visible_count]`, grown by one page size whenever the consumer nears the
//!   end of the current window.
//!
//! Windowing is a view-level concern: it never re-filters or re-sorts, it only
//! slices, so it is generic over the element type. A filter-spec change resets
//! whichever strategy is active to its initial state; so does a mode switch.

/// Default number of jobs per page / per reveal step.
pub const JOBS_PER_PAGE: usize = 12;

/// Which windowing strategy is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Discrete fixed-size pages with explicit page navigation.
    #[default]
    Paged,

    /// Incrementally revealed prefix (infinite scroll).
    Infinite,
}

/// Windowing state over an ordered result slice.
///
/// The window holds only indices, never the data, so it stays valid across
/// recomputations of the filtered set as long as the owner resets it when the
/// filter spec changes.
///
/// # Examples
///
/// ```
/// use jobflow::view::{ViewMode, ViewWindow};
///
/// let items: Vec<u32> = (0..30).collect();
/// let mut window = ViewWindow::new();
/// assert_eq!(window.window(&items).len(), 12);
///
/// window.set_page(3);
/// assert_eq!(window.window(&items), &[24, 25, 26, 27, 28, 29]);
///
/// window.set_mode(ViewMode::Infinite);
/// window.reveal_more(items.len());
/// assert_eq!(window.window(&items).len(), 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    /// Active strategy.
    mode: ViewMode,

    /// Page size P, also the reveal step in infinite mode.
    page_size: usize,

    /// One-based current page (paged mode).
    current_page: usize,

    /// Size of the visible prefix (infinite mode). Non-decreasing except on
    /// reset.
    visible_count: usize,
}

impl ViewWindow {
    /// Creates a paged window with the default page size, on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(JOBS_PER_PAGE)
    }

    /// Creates a paged window with a custom page size.
    ///
    /// A zero page size is bumped to 1 to keep the arithmetic total.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            mode: ViewMode::Paged,
            page_size,
            current_page: 1,
            visible_count: page_size,
        }
    }

    /// Active strategy.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Page size P.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// One-based current page (meaningful in paged mode).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current visible-prefix length (meaningful in infinite mode).
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Switches strategy, resetting to the target mode's initial state.
    ///
    /// Switching is idempotent: re-entering the current mode still resets,
    /// matching the view-level toggle behavior.
    pub fn set_mode(&mut self, mode: ViewMode) {
        tracing::debug!(mode = ?mode, "switching view mode");
        self.mode = mode;
        self.reset();
    }

    /// Resets windowing state to the active mode's initial state.
    ///
    /// Called by the owner on every filter-spec change: page 1, visible
    /// prefix of one page.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.visible_count = self.page_size;
    }

    /// Moves to one-based page `page` (paged mode).
    ///
    /// Page 0 is clamped to 1. Pages past the data simply yield an empty
    /// slice from [`ViewWindow::window`]; the owner bounds navigation with
    /// [`ViewWindow::total_pages`].
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Number of pages needed for `total` items: `ceil(total / P)`.
    ///
    /// An empty result has zero pages and nothing is rendered.
    #[must_use]
    pub fn total_pages(&self, total: usize) -> usize {
        (total + self.page_size - 1) / self.page_size
    }

    /// Grows the visible prefix by one page, clamped to `total`.
    ///
    /// `visible_count` never decreases here; only [`ViewWindow::reset`] (spec
    /// change or mode switch) shrinks it back to P.
    pub fn reveal_more(&mut self, total: usize) {
        let grown = (self.visible_count + self.page_size).min(total);
        // A shrunken result set must not pull an already-revealed prefix back.
        self.visible_count = self.visible_count.max(grown);
        tracing::trace!(visible_count = self.visible_count, "revealed more items");
    }

    /// Whether the consumer nearing the end of the window should trigger a
    /// reveal: infinite mode with undisplayed items remaining.
    #[must_use]
    pub fn should_reveal(&self, total: usize) -> bool {
        self.mode == ViewMode::Infinite && self.visible_count < total
    }

    /// The currently visible slice of `output` under the active strategy.
    #[must_use]
    pub fn window<'a, T>(&self, output: &'a [T]) -> &'a [T] {
        match self.mode {
            ViewMode::Paged => self.page_slice(output),
            ViewMode::Infinite => self.visible_slice(output),
        }
    }

    /// Slice for the current page: `output[(n-1)*P .. n*P]`, truncated at the
    /// end of the data.
    #[must_use]
    pub fn page_slice<'a, T>(&self, output: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(output.len());
        if start >= output.len() {
            return &[];
        }
        &output[start..end]
    }

    /// The visible prefix: `output[0 .. visible_count]`, truncated at the end
    /// of the data.
    #[must_use]
    pub fn visible_slice<'a, T>(&self, output: &'a [T]) -> &'a [T] {
        &output[..self.visible_count.min(output.len())]
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::new()
    }
}
