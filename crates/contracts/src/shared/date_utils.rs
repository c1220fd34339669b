/// Utilities for the pt-BR `dd/mm/yyyy` dates used by the form renderer
use chrono::{Datelike, NaiveDate};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Validity period of health documents, in years
pub const HEALTH_DOCUMENT_VALIDITY_YEARS: i32 = 1;

/// Parse `dd/mm/yyyy`
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| format!("Invalid date '{}': {}", value, e))
}

/// Format as zero-padded `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Same day and month `years` later; 29/02 rolls over to 01/03 when the
/// target year is not a leap year
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Expiry date of a document issued at `issued_at`.
///
/// An empty issue date yields an empty expiry rather than an error.
pub fn expiry_date(issued_at: &str, years: i32) -> Result<String, String> {
    if issued_at.trim().is_empty() {
        return Ok(String::new());
    }

    let issued = parse_date(issued_at)?;
    add_years(issued, years)
        .map(format_date)
        .ok_or_else(|| format!("Date out of range: {}", issued_at))
}
