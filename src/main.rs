//! JobFlow presentation driver.
//!
//! A thin command-line front end over the library: it parses `key=value`
//! arguments into configuration and a filter specification, fetches the job
//! collection through the gateway, runs the query pipeline, and prints the
//! windowed listing (or a CSV / report export) to stdout.
//!
//! ```text
//! jobflow search=rust location=Austin sort=salary_high page=2
//! jobflow remote=true within_days=7 export=csv > jobs.csv
//! jobflow mode=infinite reveal=2
//! ```
//!
//! A fetch failure prints a retryable error and exits non-zero; re-running the
//! command is the retry. Zero matches is not an error: the listing suggests
//! clearing filters instead.

use jobflow::app::AppState;
use jobflow::domain::error::{JobflowError, Result};
use jobflow::export;
use jobflow::gateway::{JobApiClient, ResponseCache};
use jobflow::observability;
use jobflow::query::{self, FilterSpec, SortKey};
use jobflow::view::ViewMode;
use jobflow::Config;
use std::collections::BTreeMap;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        eprintln!("nothing was modified; re-run the command to retry");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args();
    let config = Config::from_map(&args);
    observability::init_tracing(&config);

    let mut client = JobApiClient::with_cache(
        &config.base_url,
        ResponseCache::with_ttl_ms(config.cache_ttl_ms),
    );
    let mut state = jobflow::initialize(&config);

    tracing::info!(base_url = %config.base_url, "fetching job collection");
    match client.all_jobs() {
        Ok(jobs) => state.set_jobs(jobs),
        Err(error) => {
            state.set_fetch_error(error.to_string());
            return Err(error);
        }
    }

    state.set_filters(filter_spec_from_map(&args)?);
    apply_view_args(&mut state, &args)?;

    match args.get("export").map(String::as_str) {
        Some("csv") => println!("{}", export::to_csv(&state.filtered_jobs)),
        Some("report") => print!("{}", export::to_report(&state.filtered_jobs, &state.filters)),
        Some(other) => {
            return Err(JobflowError::Config(format!(
                "unknown export format: {other} (expected csv or report)"
            )))
        }
        None => print_listing(&state),
    }

    Ok(())
}

/// Collects `key=value` command-line arguments into a map.
///
/// Arguments without an `=` are ignored; later duplicates win.
fn parse_args() -> BTreeMap<String, String> {
    std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Builds the filter specification from the argument map.
///
/// Missing keys stay neutral; malformed numeric values and unknown sort keys
/// are configuration errors rather than silently ignored constraints.
fn filter_spec_from_map(map: &BTreeMap<String, String>) -> Result<FilterSpec> {
    let mut spec = FilterSpec::default();

    if let Some(search) = map.get("search") {
        spec.search = search.clone();
    }
    if let Some(location) = map.get("location") {
        spec.location = location.clone();
    }
    if let Some(category) = map.get("category") {
        spec.job_category = category.clone();
    }
    if let Some(types) = map.get("types") {
        spec.employment_type = types
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(remote) = map.get("remote") {
        spec.is_remote = Some(parse_value(remote, "remote")?);
    }
    if let Some(min) = map.get("salary_min") {
        spec.salary_min = Some(parse_value(min, "salary_min")?);
    }
    if let Some(max) = map.get("salary_max") {
        spec.salary_max = Some(parse_value(max, "salary_max")?);
    }
    if let Some(openings) = map.get("min_openings") {
        spec.min_openings = Some(parse_value(openings, "min_openings")?);
    }
    if let Some(days) = map.get("within_days") {
        spec.created_within = Some(parse_value(days, "within_days")?);
    }
    if let Some(sort) = map.get("sort") {
        spec.sort_by = sort.parse::<SortKey>()?;
    }

    Ok(spec)
}

/// Applies view-mode, page, and reveal arguments to the state.
fn apply_view_args(state: &mut AppState, map: &BTreeMap<String, String>) -> Result<()> {
    match map.get("mode").map(String::as_str) {
        Some("infinite") => state.set_view_mode(ViewMode::Infinite),
        Some("pages") | None => {}
        Some(other) => {
            return Err(JobflowError::Config(format!(
                "unknown view mode: {other} (expected pages or infinite)"
            )))
        }
    }

    if let Some(page) = map.get("page") {
        state.set_page(parse_value(page, "page")?);
    }

    // Each reveal step simulates the consumer reaching the end of the window.
    if let Some(reveal) = map.get("reveal") {
        let steps: usize = parse_value(reveal, "reveal")?;
        for _ in 0..steps {
            if !state.should_reveal() {
                break;
            }
            state.reveal_more();
        }
    }

    Ok(())
}

/// Parses one typed argument value, naming the key on failure.
fn parse_value<T: std::str::FromStr>(raw: &str, key: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| JobflowError::Config(format!("invalid value for {key}: {raw}")))
}

/// Prints the windowed listing with facets, detail rows, and a pager footer.
fn print_listing(state: &AppState) {
    println!(
        "{} jobs fetched, {} matching",
        state.jobs.len(),
        state.filtered_jobs.len()
    );

    if !state.filters.is_neutral() {
        println!("filters: {}", state.filters.active_labels().join(", "));
    }
    println!("sort: {}", state.filters.sort_by.label());
    println!();

    if state.is_empty_result() {
        println!("No jobs match your criteria.");
        println!("Try adjusting your filters or search terms.");
        return;
    }

    for job in state.visible_jobs() {
        println!(
            "{} — {} ({})",
            job.title,
            job.company,
            job.location
        );
        println!(
            "    ${} – ${} | {} | {} | {} opening(s)",
            export::format_salary(job.salary_from),
            export::format_salary(job.salary_to),
            job.employment_type,
            if job.is_remote() { "remote" } else { "on-site" },
            job.number_of_opening
        );
    }

    println!();
    match state.window.mode() {
        ViewMode::Paged => {
            println!(
                "page {} of {}",
                state.window.current_page(),
                state.total_pages()
            );
        }
        ViewMode::Infinite => {
            println!(
                "showing {} of {} results",
                state.visible_jobs().len(),
                state.filtered_jobs.len()
            );
        }
    }

    let locations = query::unique_locations(&state.jobs);
    if !locations.is_empty() {
        println!("locations: {}", locations.join(", "));
    }
}
