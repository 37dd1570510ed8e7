//! Export surface: CSV and print-formatted text rendering of the filtered
//! set.
//!
//! These are pure string builders over the query engine's output; writing the
//! result anywhere is the caller's concern.

pub mod csv;
pub mod report;

pub use csv::to_csv;
pub use report::to_report;

/// Formats a salary amount with comma thousands separators.
///
/// `1234567` renders as `1,234,567`. Negative amounts keep their sign.
///
/// # Examples
///
/// ```
/// assert_eq!(jobflow::export::format_salary(90_000), "90,000");
/// assert_eq!(jobflow::export::format_salary(500), "500");
/// ```
#[must_use]
pub fn format_salary(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
