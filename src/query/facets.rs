//! Derived facet queries over the job collection.
//!
//! These helpers feed the filter dropdowns: unique categories (with an
//! "All Categories" sentinel in front), unique employment types, and unique
//! city tokens. All lists are sorted and deduplicated; they are derived from
//! the fetched collection, never maintained separately.

use crate::domain::job::Job;
use std::collections::BTreeSet;

/// Sentinel entry that prefixes the category list and means "no restriction".
pub const ALL_CATEGORIES: &str = "All Categories";

/// Unique job categories, sorted, prefixed with [`ALL_CATEGORIES`].
#[must_use]
pub fn unique_categories(jobs: &[Job]) -> Vec<String> {
    let categories: BTreeSet<&str> = jobs.iter().map(|job| job.job_category.as_str()).collect();

    let mut list = Vec::with_capacity(categories.len() + 1);
    list.push(ALL_CATEGORIES.to_string());
    list.extend(categories.into_iter().map(String::from));
    list
}

/// Unique employment types, sorted.
#[must_use]
pub fn unique_employment_types(jobs: &[Job]) -> Vec<String> {
    let types: BTreeSet<&str> = jobs.iter().map(|job| job.employment_type.as_str()).collect();
    types.into_iter().map(String::from).collect()
}

/// Unique city tokens, sorted and deduplicated.
///
/// Tokens are derived with [`Job::city`]; empty tokens (blank locations) are
/// skipped.
#[must_use]
pub fn unique_locations(jobs: &[Job]) -> Vec<String> {
    let cities: BTreeSet<&str> = jobs
        .iter()
        .map(Job::city)
        .filter(|city| !city.is_empty())
        .collect();
    cities.into_iter().map(String::from).collect()
}
