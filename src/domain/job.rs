//! Job posting domain model.
//!
//! This module defines the core [`Job`] type representing one posting from the
//! upstream API, plus the [`JobPage`] envelope returned by the paginated endpoint.
//! Jobs are immutable once fetched: the query engine filters and reorders copies,
//! it never mutates source records.
//!
//! Several upstream fields are deliberately loose and the accessors here absorb
//! that looseness: `qualifications` is a string holding a JSON-encoded array that
//! may be malformed, `is_remote_work` is an integer 0/1 flag rather than a
//! boolean, and `created_at`/`updated_at` are timestamp strings in more than one
//! shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job posting as delivered by the upstream API.
///
/// The field set and representations mirror the upstream payload bit-for-bit:
/// `is_remote_work` stays an integer flag and `qualifications` stays a raw
/// string. Conversions happen only in the accessor methods, so a `Job` can be
/// re-serialized without drift.
///
/// `salary_from <= salary_to` is NOT guaranteed by upstream and is tolerated
/// everywhere; the salary filters and comparators each read the single field
/// they are defined against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Opaque unique identifier.
    pub id: String,

    /// Position title.
    pub title: String,

    /// Full listing description.
    pub description: String,

    /// Hiring company name.
    pub company: String,

    /// Free-text "City, Region" location string.
    pub location: String,

    /// Lower bound of the advertised salary range.
    pub salary_from: i64,

    /// Upper bound of the advertised salary range.
    pub salary_to: i64,

    /// Open string enumeration, e.g. "Full-time Developer".
    pub employment_type: String,

    /// Application deadline date string, presentation-only.
    pub application_deadline: String,

    /// JSON-encoded array of requirement strings. May be malformed; use
    /// [`Job::qualification_list`] which degrades to an empty list.
    pub qualifications: String,

    /// Free-text contact information.
    pub contact: String,

    /// Open string enumeration, e.g. "Back-end Developer".
    pub job_category: String,

    /// Remote flag as an integer: 1 = remote, 0 = on-site. Preserved as an
    /// integer at the model boundary; use [`Job::is_remote`] in logic.
    pub is_remote_work: u8,

    /// Number of open positions, minimum 1.
    pub number_of_opening: u32,

    /// Creation timestamp string, ISO-8601-like.
    pub created_at: String,

    /// Last-update timestamp string, ISO-8601-like.
    pub updated_at: String,
}

impl Job {
    /// Returns the city token derived from the location string.
    ///
    /// The token is the text before the first comma, trimmed. A location of
    /// `"Austin, TX"` yields `"Austin"`; a location with no comma yields the
    /// whole trimmed string. Location filtering compares this token exactly,
    /// so `"Austin Heights, CA"` does not match a filter for `"Austin"`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jobflow::domain::Job;
    /// # let mut job = jobflow::domain::job::test_support::sample();
    /// job.location = "Austin, TX".to_string();
    /// assert_eq!(job.city(), "Austin");
    /// ```
    #[must_use]
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or("").trim()
    }

    /// Parses the `qualifications` field into a list of requirement strings.
    ///
    /// The upstream value is a string holding a JSON-encoded array. Malformed
    /// JSON degrades to an empty list rather than failing; this is the only
    /// defined recovery for that field and the error is never propagated.
    #[must_use]
    pub fn qualification_list(&self) -> Vec<String> {
        serde_json::from_str(&self.qualifications).unwrap_or_default()
    }

    /// Returns whether this posting is remote.
    ///
    /// Converts the upstream 0/1 integer flag to a boolean. Values other than
    /// 1 are treated as on-site.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.is_remote_work == 1
    }

    /// Parses `created_at` into a comparable UTC instant.
    ///
    /// Accepts RFC 3339 (`2024-01-05T10:30:00Z`, with or without offset),
    /// `YYYY-MM-DD HH:MM:SS` (with optional fractional seconds), and bare
    /// `YYYY-MM-DD` dates. Returns `None` when the string matches none of
    /// these shapes; callers decide how an unparseable timestamp behaves
    /// (the recency filter keeps such jobs, the date comparators order them
    /// as oldest).
    #[must_use]
    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.created_at)
    }

    /// Parses `updated_at` into a comparable UTC instant.
    #[must_use]
    pub fn updated_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.updated_at)
    }
}

/// Parses an ISO-8601-like timestamp string into a UTC instant.
///
/// Tried in order: RFC 3339, naive datetime with space separator, naive
/// datetime with `T` separator, bare date (interpreted as midnight UTC).
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Paginated response envelope from `GET /jobs/paginated?page=N`.
///
/// Mirrors the upstream pagination format. `from`/`to` and the page URLs are
/// nullable upstream (an out-of-range page has no rows), hence the `Option`
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPage {
    /// Jobs on this page.
    pub data: Vec<Job>,

    /// One-based index of this page.
    pub current_page: u32,

    /// Index of the last available page.
    pub last_page: u32,

    /// Upstream page size.
    pub per_page: u32,

    /// Total jobs across all pages.
    pub total: u32,

    /// URL of the next page, if any.
    pub next_page_url: Option<String>,

    /// URL of the previous page, if any.
    pub prev_page_url: Option<String>,

    /// One-based index of the first row on this page, if the page has rows.
    pub from: Option<u32>,

    /// One-based index of the last row on this page, if the page has rows.
    pub to: Option<u32>,

    /// Pager link descriptors.
    #[serde(default)]
    pub links: Vec<PageLink>,
}

/// A single pager link in a [`JobPage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Target URL; absent for the disabled previous/next placeholders.
    pub url: Option<String>,

    /// Display label ("1", "2", "&laquo; Previous", ...).
    pub label: String,

    /// Whether this link points at the current page.
    pub active: bool,
}

/// Job fixtures shared by unit tests across modules.
#[doc(hidden)]
pub mod test_support {
    use super::Job;

    /// Returns a fully populated posting with plausible defaults.
    ///
    /// Tests override the fields they exercise.
    #[must_use]
    pub fn sample() -> Job {
        Job {
            id: "job-1".to_string(),
            title: "Backend Engineer".to_string(),
            description: "Build and maintain APIs".to_string(),
            company: "Acme Corp".to_string(),
            location: "Austin, TX".to_string(),
            salary_from: 60_000,
            salary_to: 90_000,
            employment_type: "Full-time Developer".to_string(),
            application_deadline: "2024-06-30".to_string(),
            qualifications: r#"["Rust","SQL"]"#.to_string(),
            contact: "jobs@acme.example".to_string(),
            job_category: "Back-end Developer".to_string(),
            is_remote_work: 0,
            number_of_opening: 1,
            created_at: "2024-01-05 10:30:00".to_string(),
            updated_at: "2024-01-05 10:30:00".to_string(),
        }
    }
}
