//! CSV rendering of the filtered job set.

use crate::domain::job::Job;

/// Column headers, in output order.
const HEADERS: [&str; 10] = [
    "Title",
    "Company",
    "Location",
    "Salary From",
    "Salary To",
    "Employment Type",
    "Job Category",
    "Remote",
    "Openings",
    "Created At",
];

/// Renders `jobs` as CSV text with a header row.
///
/// Text fields are quoted with embedded quotes doubled; numeric fields are
/// emitted bare. The remote flag renders as `Yes`/`No`. Rows appear in the
/// order given, so exporting the query engine's output preserves the active
/// sort.
#[must_use]
pub fn to_csv(jobs: &[Job]) -> String {
    let mut lines = Vec::with_capacity(jobs.len() + 1);
    lines.push(HEADERS.join(","));

    for job in jobs {
        let row = [
            quote(&job.title),
            quote(&job.company),
            quote(&job.location),
            job.salary_from.to_string(),
            job.salary_to.to_string(),
            quote(&job.employment_type),
            quote(&job.job_category),
            if job.is_remote() { "Yes" } else { "No" }.to_string(),
            job.number_of_opening.to_string(),
            job.created_at.clone(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Quotes a text field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
