//! The pure filter/sort pipeline.
//!
//! [`apply`] takes the full in-memory job collection plus a [`FilterSpec`] and
//! produces a new ordered, filtered vector. It is synchronous, has no side
//! effects, never mutates its inputs, and is deterministic: identical inputs
//! always yield identical ordered output. The presentation layer re-runs it on
//! every spec change.
//!
//! All predicates are AND-combined; a job must pass every active one. The sort
//! uses `sort_by`, which is stable, so ties keep their original relative order.

use crate::domain::job::Job;
use crate::query::spec::{FilterSpec, SortKey};
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;

/// Filters and sorts `jobs` according to `spec`.
///
/// Convenience wrapper over [`apply_at`] using the current instant for the
/// recency predicate.
#[must_use]
pub fn apply(jobs: &[Job], spec: &FilterSpec) -> Vec<Job> {
    apply_at(jobs, spec, Utc::now())
}

/// Filters and sorts `jobs` according to `spec`, evaluating the
/// `created_within` predicate against an explicit `now`.
///
/// # Examples
///
/// ```
/// use jobflow::query::{apply_at, FilterSpec, SortKey};
/// use jobflow::domain::job::test_support::sample;
/// use chrono::Utc;
///
/// let jobs = vec![sample()];
/// let spec = FilterSpec { sort_by: SortKey::SalaryHigh, ..FilterSpec::default() };
/// let out = apply_at(&jobs, &spec, Utc::now());
/// assert_eq!(out.len(), 1);
/// ```
#[must_use]
pub fn apply_at(jobs: &[Job], spec: &FilterSpec, now: DateTime<Utc>) -> Vec<Job> {
    let _span = tracing::debug_span!(
        "apply_query",
        total_jobs = jobs.len(),
        sort_by = %spec.sort_by,
        neutral = spec.is_neutral()
    )
    .entered();

    let mut result: Vec<Job> = jobs
        .iter()
        .filter(|job| matches_at(job, spec, now))
        .cloned()
        .collect();

    result.sort_by(|a, b| compare(a, b, spec.sort_by));

    tracing::debug!(filtered_count = result.len(), "query applied");
    result
}

/// Whether `job` passes every active predicate in `spec`.
///
/// `now` anchors the `created_within` cutoff.
#[must_use]
pub fn matches_at(job: &Job, spec: &FilterSpec, now: DateTime<Utc>) -> bool {
    if !spec.search.is_empty() {
        let term = spec.search.to_lowercase();
        let matches_search = job.title.to_lowercase().contains(&term)
            || job.company.to_lowercase().contains(&term)
            || job.description.to_lowercase().contains(&term)
            || job.job_category.to_lowercase().contains(&term);
        if !matches_search {
            return false;
        }
    }

    if !spec.location.is_empty() && job.city() != spec.location {
        return false;
    }

    if !spec.employment_type.is_empty()
        && !spec.employment_type.iter().any(|t| t == &job.employment_type)
    {
        return false;
    }

    if !spec.job_category.is_empty() && job.job_category != spec.job_category {
        return false;
    }

    if let Some(remote) = spec.is_remote {
        if job.is_remote() != remote {
            return false;
        }
    }

    if let Some(min) = spec.salary_min {
        if job.salary_from < min {
            return false;
        }
    }

    // The maximum bound reads salary_to while the minimum reads salary_from;
    // this asymmetry is the defined behavior.
    if let Some(max) = spec.salary_max {
        if job.salary_to > max {
            return false;
        }
    }

    if let Some(min) = spec.min_openings {
        if job.number_of_opening < min {
            return false;
        }
    }

    if let Some(days) = spec.created_within {
        let cutoff = now - Duration::days(days);
        // A job whose timestamp cannot be parsed is kept: an unreadable date
        // never compares below the cutoff.
        if job.created_instant().is_some_and(|created| created < cutoff) {
            return false;
        }
    }

    true
}

/// Total ordering comparator for `sort_by`.
///
/// Jobs with unparseable `created_at` strings compare as the oldest possible
/// instant, so they sink to the bottom under `Newest` and rise to the top
/// under `Oldest`.
#[must_use]
pub fn compare(a: &Job, b: &Job, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.created_instant().cmp(&a.created_instant()),
        SortKey::Oldest => a.created_instant().cmp(&b.created_instant()),
        SortKey::SalaryHigh => b.salary_to.cmp(&a.salary_to),
        SortKey::SalaryLow => a.salary_from.cmp(&b.salary_from),
        SortKey::MostOpenings => b.number_of_opening.cmp(&a.number_of_opening),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::test_support::sample;
    use chrono::TimeZone;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            ..sample()
        }
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(apply_at(&[], &FilterSpec::default(), now()).is_empty());
    }

    #[test]
    fn neutral_spec_keeps_everything() {
        let jobs = vec![job("a"), job("b"), job("c")];
        let out = apply_at(&jobs, &FilterSpec::default(), now());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn apply_is_deterministic() {
        let jobs = vec![job("a"), job("b"), job("c")];
        let spec = FilterSpec {
            sort_by: SortKey::SalaryHigh,
            ..FilterSpec::default()
        };
        assert_eq!(apply_at(&jobs, &spec, now()), apply_at(&jobs, &spec, now()));
    }

    #[test]
    fn apply_never_mutates_the_source() {
        let jobs = vec![job("a"), job("b")];
        let before = jobs.clone();
        let _ = apply_at(&jobs, &FilterSpec::default(), now());
        assert_eq!(jobs, before);
    }

    #[test]
    fn search_matches_title_company_description_and_category() {
        let mut by_title = job("title");
        by_title.title = "Senior Rust Engineer".to_string();
        let mut by_company = job("company");
        by_company.company = "Rustworks".to_string();
        let mut by_description = job("description");
        by_description.description = "We write rust all day".to_string();
        let mut by_category = job("category");
        by_category.job_category = "Rust Developer".to_string();
        let mut miss = job("miss");
        miss.title = "Gardener".to_string();
        miss.company = "Petals".to_string();
        miss.description = "Flowers".to_string();
        miss.job_category = "Horticulture".to_string();

        let jobs = vec![by_title, by_company, by_description, by_category, miss];
        let spec = FilterSpec {
            search: "RUST".to_string(),
            ..FilterSpec::default()
        };
        let out = apply_at(&jobs, &spec, now());
        assert_eq!(out.len(), 4);
        assert!(!out.iter().any(|j| j.id == "miss"));
    }

    #[test]
    fn location_matches_exact_city_token_only() {
        let mut austin = job("austin");
        austin.location = "Austin, TX".to_string();
        let mut heights = job("heights");
        heights.location = "Austin Heights, CA".to_string();

        let jobs = vec![austin, heights];
        let spec = FilterSpec {
            location: "Austin".to_string(),
            ..FilterSpec::default()
        };
        let out = apply_at(&jobs, &spec, now());
        assert_eq!(ids(&out), vec!["austin"]);
    }

    #[test]
    fn employment_type_is_or_of_members() {
        let mut full_time = job("ft");
        full_time.employment_type = "Full-time Developer".to_string();
        let mut contract = job("ct");
        contract.employment_type = "Contract Developer".to_string();
        let mut intern = job("in");
        intern.employment_type = "Intern Developer".to_string();

        let jobs = vec![full_time, contract, intern];
        let spec = FilterSpec {
            employment_type: vec![
                "Full-time Developer".to_string(),
                "Intern Developer".to_string(),
            ],
            ..FilterSpec::default()
        };
        let out = apply_at(&jobs, &spec, now());
        assert_eq!(ids(&out), vec!["ft", "in"]);

        // Empty selection keeps all.
        let neutral = FilterSpec::default();
        assert_eq!(apply_at(&jobs, &neutral, now()).len(), 3);
    }

    #[test]
    fn category_requires_exact_match() {
        let mut backend = job("be");
        backend.job_category = "Back-end Developer".to_string();
        let mut frontend = job("fe");
        frontend.job_category = "Front-end Developer".to_string();

        let jobs = vec![backend, frontend];
        let spec = FilterSpec {
            job_category: "Back-end Developer".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &spec, now())), vec!["be"]);
    }

    #[test]
    fn remote_flag_is_tri_state() {
        let mut remote = job("remote");
        remote.is_remote_work = 1;
        let mut onsite = job("onsite");
        onsite.is_remote_work = 0;
        let jobs = vec![remote, onsite];

        let remote_only = FilterSpec {
            is_remote: Some(true),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &remote_only, now())), vec!["remote"]);

        let onsite_only = FilterSpec {
            is_remote: Some(false),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &onsite_only, now())), vec!["onsite"]);

        let either = FilterSpec::default();
        assert_eq!(apply_at(&jobs, &either, now()).len(), 2);
    }

    #[test]
    fn salary_bounds_read_asymmetric_fields() {
        let mut low = job("low");
        low.salary_from = 30_000;
        low.salary_to = 50_000;
        let mut high = job("high");
        high.salary_from = 80_000;
        high.salary_to = 120_000;
        // Lower bound below the max filter, upper bound above it.
        let mut straddle = job("straddle");
        straddle.salary_from = 40_000;
        straddle.salary_to = 150_000;

        let jobs = vec![low, high, straddle];

        let min_spec = FilterSpec {
            salary_min: Some(60_000),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &min_spec, now())), vec!["high"]);

        let max_spec = FilterSpec {
            salary_max: Some(60_000),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &max_spec, now())), vec!["low"]);
    }

    #[test]
    fn min_openings_keeps_jobs_at_or_above_bound() {
        let mut one = job("one");
        one.number_of_opening = 1;
        let mut five = job("five");
        five.number_of_opening = 5;

        let jobs = vec![one, five];
        let spec = FilterSpec {
            min_openings: Some(2),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &spec, now())), vec!["five"]);
    }

    #[test]
    fn created_within_keeps_recent_jobs_only() {
        // now = 2024-01-10; 9 days ago is outside a 7-day window, 5 days ago inside.
        let mut stale = job("stale");
        stale.created_at = "2024-01-01 00:00:00".to_string();
        let mut fresh = job("fresh");
        fresh.created_at = "2024-01-05 00:00:00".to_string();

        let jobs = vec![stale, fresh];
        let spec = FilterSpec {
            created_within: Some(7),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &spec, now())), vec!["fresh"]);
    }

    #[test]
    fn created_within_keeps_unparseable_timestamps() {
        let mut mystery = job("mystery");
        mystery.created_at = "not a date".to_string();

        let spec = FilterSpec {
            created_within: Some(7),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&[mystery], &spec, now())), vec!["mystery"]);
    }

    #[test]
    fn predicates_are_and_combined() {
        let mut match_all = job("all");
        match_all.title = "Rust Engineer".to_string();
        match_all.is_remote_work = 1;
        let mut match_one = job("one");
        match_one.title = "Rust Engineer".to_string();
        match_one.is_remote_work = 0;

        let jobs = vec![match_all, match_one];
        let spec = FilterSpec {
            search: "rust".to_string(),
            is_remote: Some(true),
            ..FilterSpec::default()
        };
        let out = apply_at(&jobs, &spec, now());
        assert_eq!(ids(&out), vec!["all"]);
        // Every survivor independently satisfies every active predicate.
        for survivor in &out {
            assert!(matches_at(survivor, &spec, now()));
        }
    }

    #[test]
    fn sorts_salary_high_descending_by_salary_to() {
        let mut a = job("a");
        a.salary_to = 50_000;
        let mut b = job("b");
        b.salary_to = 90_000;
        let mut c = job("c");
        c.salary_to = 70_000;

        let spec = FilterSpec {
            sort_by: SortKey::SalaryHigh,
            ..FilterSpec::default()
        };
        let out = apply_at(&[a, b, c], &spec, now());
        assert_eq!(ids(&out), vec!["b", "c", "a"]);
    }

    #[test]
    fn sorts_salary_low_ascending_by_salary_from() {
        let mut a = job("a");
        a.salary_from = 70_000;
        let mut b = job("b");
        b.salary_from = 30_000;
        let mut c = job("c");
        c.salary_from = 50_000;

        let spec = FilterSpec {
            sort_by: SortKey::SalaryLow,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&[a, b, c], &spec, now())), vec!["b", "c", "a"]);
    }

    #[test]
    fn sorts_newest_and_oldest_by_created_instant() {
        let mut early = job("early");
        early.created_at = "2024-01-01 00:00:00".to_string();
        let mut late = job("late");
        late.created_at = "2024-01-08 00:00:00".to_string();
        let mut middle = job("middle");
        middle.created_at = "2024-01-04 00:00:00".to_string();

        let jobs = vec![early.clone(), late.clone(), middle.clone()];

        let newest = FilterSpec {
            sort_by: SortKey::Newest,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &newest, now())), vec!["late", "middle", "early"]);

        let oldest = FilterSpec {
            sort_by: SortKey::Oldest,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&jobs, &oldest, now())), vec!["early", "middle", "late"]);
    }

    #[test]
    fn newest_sinks_unparseable_timestamps() {
        let mut dated = job("dated");
        dated.created_at = "2024-01-01 00:00:00".to_string();
        let mut mystery = job("mystery");
        mystery.created_at = "???".to_string();

        let spec = FilterSpec {
            sort_by: SortKey::Newest,
            ..FilterSpec::default()
        };
        assert_eq!(
            ids(&apply_at(&[mystery, dated], &spec, now())),
            vec!["dated", "mystery"]
        );
    }

    #[test]
    fn sorts_most_openings_descending() {
        let mut a = job("a");
        a.number_of_opening = 2;
        let mut b = job("b");
        b.number_of_opening = 9;
        let mut c = job("c");
        c.number_of_opening = 4;

        let spec = FilterSpec {
            sort_by: SortKey::MostOpenings,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_at(&[a, b, c], &spec, now())), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_preserve_input_order() {
        let mut first = job("first");
        first.salary_to = 80_000;
        let mut second = job("second");
        second.salary_to = 80_000;
        let mut third = job("third");
        third.salary_to = 80_000;

        let spec = FilterSpec {
            sort_by: SortKey::SalaryHigh,
            ..FilterSpec::default()
        };
        assert_eq!(
            ids(&apply_at(&[first, second, third], &spec, now())),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn sort_correctness_holds_for_adjacent_pairs() {
        let mut jobs = Vec::new();
        for (i, salary) in [55_000, 91_000, 12_000, 77_000, 77_000, 30_000].iter().enumerate() {
            let mut j = job(&format!("j{i}"));
            j.salary_to = *salary;
            jobs.push(j);
        }

        let spec = FilterSpec {
            sort_by: SortKey::SalaryHigh,
            ..FilterSpec::default()
        };
        let out = apply_at(&jobs, &spec, now());
        for pair in out.windows(2) {
            assert!(pair[0].salary_to >= pair[1].salary_to);
        }
    }
}
