//! Remote data gateway: TTL response cache plus the upstream HTTP client.

pub mod cache;
pub mod client;

pub use cache::{ResponseCache, CACHE_TTL_MS};
pub use client::{JobApiClient, DEFAULT_BASE_URL};
