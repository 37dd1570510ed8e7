//! JobFlow: a client-side job-listing browser.
//!
//! JobFlow fetches a flat collection of job postings from a remote read-only
//! API, then filters, searches, sorts, windows, and exports the resulting
//! subset entirely in memory. The core is the pure query engine; everything
//! around it is plumbing to feed it data and show its output.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation driver (main.rs)                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Owned state
//! │  - Collection + FilterSpec + window state           │
//! │  - Input debouncing                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ View Layer    │   │ Gateway Layer │
//! │ (query/)      │   │ (view/)       │   │ (gateway/)    │
//! │ - Predicates  │   │ - Paged       │   │ - HTTP client │
//! │ - Comparators │   │ - Infinite    │   │ - TTL cache   │
//! │ - Facets      │   │   scroll      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Export Layers                             │
//! │  - Job model, error types (domain/)                 │
//! │  - CSV / report rendering (export/)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! Gateway → cache → full collection in memory → query engine (on every
//! filter change) → view windowing → presentation. The presentation layer is
//! the only caller of the query engine; all of its state changes flow down as
//! one atomic [`query::FilterSpec`] value.
//!
//! # Execution Model
//!
//! Single-threaded and cooperative. The gateway's blocking fetch is the only
//! suspension point; the query engine and windowing are synchronous over an
//! already-resolved collection. Nothing is locked, nothing is shared across
//! threads.
//!
//! # Example
//!
//! ```no_run
//! use jobflow::app::AppState;
//! use jobflow::gateway::JobApiClient;
//! use jobflow::query::{FilterSpec, SortKey};
//!
//! let mut client = JobApiClient::new();
//! let mut state = AppState::new();
//!
//! state.set_jobs(client.all_jobs()?);
//! state.set_filters(FilterSpec {
//!     location: "Austin".to_string(),
//!     sort_by: SortKey::SalaryHigh,
//!     ..FilterSpec::default()
//! });
//!
//! for job in state.visible_jobs() {
//!     println!("{} at {}", job.title, job.company);
//! }
//! # Ok::<(), jobflow::domain::JobflowError>(())
//! ```

pub mod app;
pub mod domain;
pub mod export;
pub mod gateway;
pub mod observability;
pub mod query;
pub mod view;

pub use app::{AppState, Debouncer};
pub use domain::{Job, JobPage, JobflowError, Result};
pub use gateway::{JobApiClient, ResponseCache};
pub use query::{FilterSpec, SortKey};
pub use view::{ViewMode, ViewWindow};

use std::collections::BTreeMap;

/// Runtime configuration for the browser.
///
/// Values are parsed from a flat string map (CLI `key=value` arguments or any
/// other source) with fallback defaults, so the configuration surface stays
/// declarative.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API base URL.
    ///
    /// Default: the public job API.
    pub base_url: String,

    /// Response-cache time-to-live in milliseconds.
    ///
    /// Default: 300,000 (5 minutes). Zero disables caching.
    pub cache_ttl_ms: i64,

    /// Jobs per page, also the reveal step in infinite mode.
    ///
    /// Default: 12.
    pub page_size: usize,

    /// Tracing filter directive (`"info"`, `"debug"`, `"jobflow=trace"`).
    ///
    /// Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: gateway::DEFAULT_BASE_URL.to_string(),
            cache_ttl_ms: gateway::CACHE_TTL_MS,
            page_size: view::JOBS_PER_PAGE,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `base_url`: used verbatim
    /// - `cache_ttl_ms`: parsed as `i64`, default on parse error
    /// - `page_size`: parsed as `usize`, default on parse error or zero
    /// - `trace_level`: used verbatim
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use jobflow::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "6".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 6);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let page_size = map
            .get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let cache_ttl_ms = map
            .get("cache_ttl_ms")
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(defaults.cache_ttl_ms);

        Self {
            base_url: map
                .get("base_url")
                .cloned()
                .unwrap_or(defaults.base_url),
            cache_ttl_ms,
            page_size,
            trace_level: map.get("trace_level").cloned(),
        }
    }
}

/// Builds an empty [`AppState`] configured per `config`.
///
/// The state starts with no jobs and neutral filters; the caller fetches a
/// collection through a [`JobApiClient`] and hands it over with
/// [`AppState::set_jobs`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(page_size = config.page_size, "initializing application state");
    AppState::with_window(ViewWindow::with_page_size(config.page_size))
}
