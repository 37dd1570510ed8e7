//! Print-formatted text report of the filtered job set.
//!
//! The report mirrors the printable listing export: a header with the applied
//! filters rendered as a human-readable summary, one row per job, and a
//! total-count footer.

use crate::domain::job::Job;
use crate::export::format_salary;
use crate::query::spec::FilterSpec;

/// Renders `jobs` as a print-formatted text document.
///
/// The header names the active filters ("None" when the spec is neutral) and
/// the footer carries the total count. Rows keep the input order.
#[must_use]
pub fn to_report(jobs: &[Job], spec: &FilterSpec) -> String {
    let labels = spec.active_labels();
    let applied = if labels.is_empty() {
        "None".to_string()
    } else {
        labels.join(", ")
    };

    let mut out = String::new();
    out.push_str("JobFlow — Job Listings\n");
    out.push_str(&format!("Applied Filters: {applied}\n"));
    out.push_str(&format!("Total Results: {}\n", jobs.len()));
    out.push('\n');
    out.push_str("Title | Company | Location | Salary | Type | Remote | Openings\n");
    out.push_str("------+---------+----------+--------+------+--------+---------\n");

    for job in jobs {
        out.push_str(&format!(
            "{} | {} | {} | ${} – ${} | {} | {} | {}\n",
            job.title,
            job.company,
            job.location,
            format_salary(job.salary_from),
            format_salary(job.salary_to),
            job.employment_type,
            if job.is_remote() { "Yes" } else { "No" },
            job.number_of_opening,
        ));
    }

    out.push('\n');
    let noun = if jobs.len() == 1 { "job" } else { "jobs" };
    out.push_str(&format!("Total: {} {noun}\n", jobs.len()));
    out
}
