//! Application state management.
//!
//! This module defines [`AppState`], the central state container owned by the
//! presentation layer. It separates core data (the fetched job collection)
//! from derived state (the filtered, sorted output and the view window) to
//! keep transitions consistent: every filter edit replaces the whole
//! [`FilterSpec`], recomputes the derived output through the pure query
//! engine, and resets windowing.
//!
//! # State Components
//!
//! - **Jobs**: master collection from the gateway, immutable between fetches
//! - **Filters**: the current [`FilterSpec`], replaced wholesale on every edit
//! - **Filtered jobs**: derived output of the query engine
//! - **Window**: paged / infinite windowing over the derived output
//! - **Selection**: id of the job open in the detail view, if any
//! - **Fetch error**: user-visible retryable error state from the gateway

use crate::domain::job::Job;
use crate::query;
use crate::query::spec::FilterSpec;
use crate::view::window::{ViewMode, ViewWindow};

/// Central application state container.
///
/// All transitions run synchronously on the owning thread; the state never
/// observes a partially updated collection because the collection is replaced
/// atomically and the derived output is recomputed in the same call.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master collection fetched from the gateway.
    pub jobs: Vec<Job>,

    /// Jobs matching the current filters, in sort order.
    ///
    /// Recomputed by [`AppState::apply_filters`] after every jobs or filters
    /// change. This is what windowing slices.
    pub filtered_jobs: Vec<Job>,

    /// The current filter specification.
    pub filters: FilterSpec,

    /// Windowing state over `filtered_jobs`.
    pub window: ViewWindow,

    /// Id of the job open in the detail view, if any.
    pub selected_job_id: Option<String>,

    /// Retryable fetch-error message, if the last fetch failed.
    ///
    /// Cleared when a collection arrives. There is no automatic retry; the
    /// user re-invokes the fetch.
    pub fetch_error: Option<String>,
}

impl AppState {
    /// Creates an empty state with neutral filters and default windowing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(ViewWindow::new())
    }

    /// Creates an empty state with a pre-configured window (custom page size).
    #[must_use]
    pub fn with_window(window: ViewWindow) -> Self {
        Self {
            jobs: Vec::new(),
            filtered_jobs: Vec::new(),
            filters: FilterSpec::default(),
            window,
            selected_job_id: None,
            fetch_error: None,
        }
    }

    /// Replaces the master collection and recomputes the derived output.
    ///
    /// Clears any previous fetch error. Windowing is reset: a new collection
    /// restarts at page 1 / one revealed page.
    pub fn set_jobs(&mut self, jobs: Vec<Job>) {
        tracing::debug!(count = jobs.len(), "collection replaced");
        self.jobs = jobs;
        self.fetch_error = None;
        self.window.reset();
        self.apply_filters();
    }

    /// Replaces the filter specification wholesale and recomputes.
    ///
    /// Windowing resets to the active mode's initial state (page 1, one
    /// revealed page), so a filter edit never leaves the view pointing past
    /// the new result set.
    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
        self.window.reset();
        self.apply_filters();
    }

    /// Resets every constraint to neutral (the "clear filters" affordance).
    ///
    /// The sort order is also reset to the default.
    pub fn clear_filters(&mut self) {
        self.set_filters(FilterSpec::default());
    }

    /// Recomputes `filtered_jobs` from the collection and current filters.
    ///
    /// Pure derivation: runs the query engine against the master collection.
    /// Also drops the detail-view selection if the selected job fell out of
    /// the filtered set.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_jobs = self.jobs.len(),
            query_len = self.filters.search.len()
        )
        .entered();

        self.filtered_jobs = query::apply(&self.jobs, &self.filters);

        if let Some(selected) = &self.selected_job_id {
            if !self.filtered_jobs.iter().any(|job| &job.id == selected) {
                self.selected_job_id = None;
            }
        }

        tracing::debug!(filtered_count = self.filtered_jobs.len(), "filters applied");
    }

    /// The slice of filtered jobs currently visible under the active window.
    #[must_use]
    pub fn visible_jobs(&self) -> &[Job] {
        self.window.window(&self.filtered_jobs)
    }

    /// Number of pages the filtered set occupies.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.window.total_pages(self.filtered_jobs.len())
    }

    /// Navigates to one-based page `page` (paged mode).
    pub fn set_page(&mut self, page: usize) {
        self.window.set_page(page);
    }

    /// Switches the windowing strategy, resetting window state.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.window.set_mode(mode);
    }

    /// Reveals one more page of results (infinite mode).
    pub fn reveal_more(&mut self) {
        self.window.reveal_more(self.filtered_jobs.len());
    }

    /// Whether the consumer nearing the end of the window should reveal more.
    #[must_use]
    pub fn should_reveal(&self) -> bool {
        self.window.should_reveal(self.filtered_jobs.len())
    }

    /// Opens the detail view for the job with `id`, if it is in the filtered
    /// set.
    pub fn select_job(&mut self, id: &str) {
        if self.filtered_jobs.iter().any(|job| job.id == id) {
            self.selected_job_id = Some(id.to_string());
        }
    }

    /// Closes the detail view.
    pub fn clear_selection(&mut self) {
        self.selected_job_id = None;
    }

    /// The job open in the detail view, if any.
    #[must_use]
    pub fn selected_job(&self) -> Option<&Job> {
        let id = self.selected_job_id.as_deref()?;
        self.filtered_jobs.iter().find(|job| job.id == id)
    }

    /// Records a retryable fetch failure for the presentation layer.
    pub fn set_fetch_error(&mut self, message: String) {
        tracing::debug!(error = %message, "fetch failed");
        self.fetch_error = Some(message);
    }

    /// Whether the current filters match zero jobs.
    ///
    /// This is a normal terminal state, not an error; the presentation layer
    /// offers [`AppState::clear_filters`] as the way out.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.jobs.is_empty() && self.filtered_jobs.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::test_support::sample;
    use crate::query::spec::SortKey;
    use crate::view::window::JOBS_PER_PAGE;

    fn jobs(n: usize) -> Vec<Job> {
        (0..n)
            .map(|i| {
                let mut job = sample();
                job.id = format!("job-{i}");
                job.salary_to = 40_000 + (i as i64) * 1_000;
                job
            })
            .collect()
    }

    #[test]
    fn set_jobs_recomputes_and_clears_errors() {
        let mut state = AppState::new();
        state.set_fetch_error("failed to fetch all_jobs: HTTP 500".to_string());

        state.set_jobs(jobs(3));
        assert_eq!(state.filtered_jobs.len(), 3);
        assert!(state.fetch_error.is_none());
    }

    #[test]
    fn filter_change_resets_windowing() {
        let mut state = AppState::new();
        state.set_jobs(jobs(40));
        state.set_page(3);

        state.set_filters(FilterSpec {
            sort_by: SortKey::SalaryHigh,
            ..FilterSpec::default()
        });
        assert_eq!(state.window.current_page(), 1);
        assert_eq!(state.window.visible_count(), JOBS_PER_PAGE);
    }

    #[test]
    fn filter_change_resets_infinite_reveal() {
        let mut state = AppState::new();
        state.set_jobs(jobs(40));
        state.set_view_mode(ViewMode::Infinite);
        state.reveal_more();
        assert_eq!(state.visible_jobs().len(), 24);

        state.set_filters(FilterSpec::default());
        assert_eq!(state.visible_jobs().len(), JOBS_PER_PAGE);
    }

    #[test]
    fn visible_jobs_follow_the_active_mode() {
        let mut state = AppState::new();
        state.set_jobs(jobs(30));

        assert_eq!(state.visible_jobs().len(), JOBS_PER_PAGE);
        state.set_page(3);
        assert_eq!(state.visible_jobs().len(), 6);

        state.set_view_mode(ViewMode::Infinite);
        assert_eq!(state.visible_jobs().len(), JOBS_PER_PAGE);
        assert!(state.should_reveal());
        state.reveal_more();
        state.reveal_more();
        assert_eq!(state.visible_jobs().len(), 30);
        assert!(!state.should_reveal());
    }

    #[test]
    fn clear_filters_restores_the_full_collection() {
        let mut state = AppState::new();
        state.set_jobs(jobs(5));
        state.set_filters(FilterSpec {
            search: "no such term anywhere".to_string(),
            ..FilterSpec::default()
        });
        assert!(state.is_empty_result());

        state.clear_filters();
        assert_eq!(state.filtered_jobs.len(), 5);
        assert!(!state.is_empty_result());
    }

    #[test]
    fn empty_result_requires_a_nonempty_collection() {
        let state = AppState::new();
        // No jobs fetched yet: not an "empty result", just empty.
        assert!(!state.is_empty_result());
    }

    #[test]
    fn selection_tracks_the_filtered_set() {
        let mut state = AppState::new();
        let mut collection = jobs(2);
        collection[0].title = "Rust Engineer".to_string();
        collection[1].title = "Gardener".to_string();
        state.set_jobs(collection);

        state.select_job("job-1");
        assert_eq!(state.selected_job().map(|j| j.id.as_str()), Some("job-1"));

        // Filtering the selected job away drops the selection.
        state.set_filters(FilterSpec {
            search: "rust".to_string(),
            ..FilterSpec::default()
        });
        assert!(state.selected_job().is_none());

        // Selecting an id outside the filtered set is a no-op.
        state.select_job("job-1");
        assert!(state.selected_job_id.is_none());
    }

    #[test]
    fn derived_output_is_sorted_per_spec() {
        let mut state = AppState::new();
        state.set_jobs(jobs(5));
        state.set_filters(FilterSpec {
            sort_by: SortKey::SalaryHigh,
            ..FilterSpec::default()
        });

        let salaries: Vec<i64> = state.filtered_jobs.iter().map(|j| j.salary_to).collect();
        let mut sorted = salaries.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(salaries, sorted);
    }
}
