//! Blocking HTTP gateway to the upstream job API.
//!
//! [`JobApiClient`] issues the four logical requests the upstream supports,
//! deserializes their JSON bodies, and normalizes failures into
//! [`JobflowError::Fetch`] / [`JobflowError::Decode`]. Every operation first
//! consults the composed [`ResponseCache`] under a key derived from the
//! operation and its parameters, so repeated queries within the TTL window
//! return without a network call.
//!
//! The client is deliberately blocking: the execution model is a single
//! cooperative thread and the fetch is the only suspension point. Parsing is
//! structural only; odd field content (such as malformed `qualifications`
//! strings) passes through and is tolerated by the consumers of those fields.

use crate::domain::error::{JobflowError, Result};
use crate::domain::job::{Job, JobPage};
use crate::gateway::cache::ResponseCache;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default upstream API base URL.
pub const DEFAULT_BASE_URL: &str = "https://jsonfakery.com";

/// Gateway to the read-only upstream job API.
///
/// Owns its HTTP client and response cache. All methods take `&mut self`
/// because a cache read may evict a stale entry; there is no interior
/// mutability and no locking, consistent with single-threaded access.
///
/// # Examples
///
/// ```no_run
/// use jobflow::gateway::JobApiClient;
///
/// let mut client = JobApiClient::new();
/// let jobs = client.all_jobs()?;
/// println!("{} jobs", jobs.len());
/// # Ok::<(), jobflow::domain::JobflowError>(())
/// ```
#[derive(Debug)]
pub struct JobApiClient {
    /// Upstream base URL without a trailing slash.
    base_url: String,

    /// Reused blocking HTTP client.
    http: reqwest::blocking::Client,

    /// TTL memoization layer over the upstream responses.
    cache: ResponseCache,
}

impl JobApiClient {
    /// Creates a client against the default upstream with a default cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL with a default cache.
    ///
    /// A trailing slash on `base_url` is stripped so request paths join
    /// cleanly.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_cache(base_url, ResponseCache::new())
    }

    /// Creates a client with an explicitly constructed cache.
    ///
    /// Used to tune the TTL or disable caching (zero TTL) without touching
    /// the request logic.
    #[must_use]
    pub fn with_cache(base_url: &str, cache: ResponseCache) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
            cache,
        }
    }

    /// Fetches the full job collection (`GET /jobs`).
    ///
    /// Cached under `all_jobs`. This is the collection the query engine
    /// operates on; it is fetched once per TTL window.
    ///
    /// # Errors
    ///
    /// Returns [`JobflowError::Fetch`] on a non-success status or transport
    /// failure, [`JobflowError::Decode`] when the body is not a JSON array of
    /// jobs.
    pub fn all_jobs(&mut self) -> Result<Vec<Job>> {
        self.fetch("all_jobs", "all_jobs".to_string(), "/jobs".to_string())
    }

    /// Fetches one page of the server-paginated listing
    /// (`GET /jobs/paginated?page=N`).
    ///
    /// Cached under `paginated_jobs_{page}`.
    ///
    /// # Errors
    ///
    /// Returns [`JobflowError::Fetch`] or [`JobflowError::Decode`] as for
    /// [`JobApiClient::all_jobs`].
    pub fn paginated_jobs(&mut self, page: u32) -> Result<JobPage> {
        self.fetch(
            "paginated_jobs",
            format!("paginated_jobs_{page}"),
            format!("/jobs/paginated?page={page}"),
        )
    }

    /// Fetches one random job (`GET /jobs/random`).
    ///
    /// Cached under `random_job`: within the TTL window the "random" job is
    /// stable, which keeps repeated renders consistent.
    ///
    /// # Errors
    ///
    /// Returns [`JobflowError::Fetch`] or [`JobflowError::Decode`] as for
    /// [`JobApiClient::all_jobs`].
    pub fn random_job(&mut self) -> Result<Job> {
        self.fetch("random_job", "random_job".to_string(), "/jobs/random".to_string())
    }

    /// Fetches `count` random jobs (`GET /jobs/random/{count}`).
    ///
    /// Cached under `random_jobs_{count}`.
    ///
    /// # Errors
    ///
    /// Returns [`JobflowError::Fetch`] or [`JobflowError::Decode`] as for
    /// [`JobApiClient::all_jobs`].
    pub fn random_jobs(&mut self, count: u32) -> Result<Vec<Job>> {
        self.fetch(
            "random_jobs",
            format!("random_jobs_{count}"),
            format!("/jobs/random/{count}"),
        )
    }

    /// Cache-through fetch shared by every operation.
    ///
    /// Consults the cache under `key`; on a miss, issues the request, stores
    /// the structurally parsed body, and deserializes it into the expected
    /// shape. The cached value is the raw JSON, so a payload decodes the same
    /// way whether it came from the network or the cache.
    fn fetch<T: DeserializeOwned>(
        &mut self,
        operation: &'static str,
        key: String,
        path: String,
    ) -> Result<T> {
        let _span = tracing::debug_span!("gateway_fetch", operation = operation, key = %key).entered();

        if let Some(payload) = self.cache.get(&key) {
            return decode(operation, payload);
        }

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "requesting upstream");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| JobflowError::Fetch {
                operation,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "upstream returned non-success status");
            return Err(JobflowError::Fetch {
                operation,
                reason: format!("HTTP {status}"),
            });
        }

        let payload: Value = response.json().map_err(|e| JobflowError::Decode {
            operation,
            reason: e.to_string(),
        })?;

        self.cache.put(&key, payload.clone());
        decode(operation, payload)
    }
}

impl Default for JobApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserializes a cached or freshly fetched payload into the expected shape.
fn decode<T: DeserializeOwned>(operation: &'static str, payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| JobflowError::Decode {
        operation,
        reason: e.to_string(),
    })
}
