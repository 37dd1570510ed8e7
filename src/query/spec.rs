//! Filter specification value objects.
//!
//! [`FilterSpec`] describes the user's current query as one atomic value: every
//! constraint is always present, with absence represented by an explicit neutral
//! value (empty string, empty list, `None`) rather than omission. The owning
//! state replaces the whole value on every edit; nothing mutates it field by
//! field from outside.

use crate::domain::error::JobflowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort order applied to the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Descending by creation instant.
    #[default]
    Newest,

    /// Ascending by creation instant.
    Oldest,

    /// Descending by `salary_to`.
    SalaryHigh,

    /// Ascending by `salary_from`.
    SalaryLow,

    /// Descending by `number_of_opening`.
    MostOpenings,
}

impl SortKey {
    /// Every sort key, in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::SalaryHigh,
        SortKey::SalaryLow,
        SortKey::MostOpenings,
    ];

    /// Human-readable label for menus and summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::SalaryHigh => "Salary: High to Low",
            SortKey::SalaryLow => "Salary: Low to High",
            SortKey::MostOpenings => "Most Openings",
        }
    }

    /// Wire identifier used in configuration and URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::SalaryHigh => "salary_high",
            SortKey::SalaryLow => "salary_low",
            SortKey::MostOpenings => "most_openings",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = JobflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "salary_high" => Ok(SortKey::SalaryHigh),
            "salary_low" => Ok(SortKey::SalaryLow),
            "most_openings" => Ok(SortKey::MostOpenings),
            other => Err(JobflowError::Config(format!("unknown sort key: {other}"))),
        }
    }
}

/// The full, always-defined set of user-chosen constraints plus sort order.
///
/// Every predicate has a neutral value that keeps all jobs; the default value
/// is all-neutral with [`SortKey::Newest`]. Applying the same spec to the same
/// collection is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Case-insensitive free-text term matched against title, company,
    /// description, and category. Empty = no restriction.
    pub search: String,

    /// Exact city token ("Austin", not "Austin, TX"). Empty = no restriction.
    pub location: String,

    /// Selected employment types, OR-combined. Empty = no restriction.
    pub employment_type: Vec<String>,

    /// Single selected category, exact match. Empty = no restriction.
    pub job_category: String,

    /// Tri-state remote flag: `None` = all, `Some(true)` = remote only,
    /// `Some(false)` = on-site only.
    pub is_remote: Option<bool>,

    /// Keep jobs whose `salary_from` is at least this value.
    pub salary_min: Option<i64>,

    /// Keep jobs whose `salary_to` is at most this value.
    ///
    /// Note the asymmetry with `salary_min`: each bound reads a different
    /// salary field, mirroring the observed listing behavior. A job whose
    /// range sits entirely above the maximum can still pass when only its
    /// lower bound is low.
    pub salary_max: Option<i64>,

    /// Keep jobs with at least this many openings.
    pub min_openings: Option<u32>,

    /// Keep jobs created within the last N days.
    pub created_within: Option<i64>,

    /// Sort order for the filtered set.
    pub sort_by: SortKey,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: String::new(),
            employment_type: Vec::new(),
            job_category: String::new(),
            is_remote: None,
            salary_min: None,
            salary_max: None,
            min_openings: None,
            created_within: None,
            sort_by: SortKey::Newest,
        }
    }
}

impl FilterSpec {
    /// Whether every constraint is neutral (sort order is not a constraint).
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty()
            && self.location.is_empty()
            && self.employment_type.is_empty()
            && self.job_category.is_empty()
            && self.is_remote.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
            && self.min_openings.is_none()
            && self.created_within.is_none()
    }

    /// Human-readable labels for every active constraint.
    ///
    /// One label per active predicate (one per selected employment type), in a
    /// fixed order. Used for the export report's applied-filters summary and
    /// for filter chips. Neutral constraints produce nothing.
    #[must_use]
    pub fn active_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();

        if !self.search.is_empty() {
            labels.push(format!("Search: \"{}\"", self.search));
        }
        if !self.location.is_empty() {
            labels.push(format!("Location: {}", self.location));
        }
        if !self.job_category.is_empty() {
            labels.push(format!("Category: {}", self.job_category));
        }
        for employment_type in &self.employment_type {
            labels.push(employment_type.clone());
        }
        match self.is_remote {
            Some(true) => labels.push("Remote Only".to_string()),
            Some(false) => labels.push("On-site Only".to_string()),
            None => {}
        }
        if let Some(min) = self.salary_min {
            labels.push(format!("Min Salary: ${}", crate::export::format_salary(min)));
        }
        if let Some(max) = self.salary_max {
            labels.push(format!("Max Salary: ${}", crate::export::format_salary(max)));
        }
        if let Some(openings) = self.min_openings {
            labels.push(format!("Min Openings: {openings}"));
        }
        if let Some(days) = self.created_within {
            labels.push(format!("Last {days} days"));
        }

        labels
    }
}
