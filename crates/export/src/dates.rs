//! Date formatting — renders `YYYY-MM` / `YYYY` / `present` values in the
//! literal style an ATS profile dictates.
//!
//! Dates in the data model are strings, not calendar values: only the year
//! and an optional month exist. The `DD.MM.YYYY` style synthesizes day `01`
//! (the day is never parsed) and degrades to the bare year when no month is
//! present.

use serde::{Deserialize, Serialize};

/// The four literal date styles the profile catalogue uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateStyle {
    /// `08/2022` (zero-padded month), or `2022` without a month.
    #[serde(rename = "MM/YYYY")]
    MmSlashYyyy,
    /// `2022-08`, or `2022` without a month.
    #[serde(rename = "YYYY-MM")]
    YyyyDashMm,
    /// `01.08.2022` — day always synthesized as `01`. `2022` without a month.
    #[serde(rename = "DD.MM.YYYY")]
    DdDotMmDotYyyy,
    /// `August 2022` (full English month name), or `2022` without a month.
    #[serde(rename = "MMMM YYYY")]
    MonthNameYyyy,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats a single data-model date in the given style.
///
/// The sentinel `present` (case-insensitive) renders as `Present` in every
/// style. A month outside `1..=12` is treated as absent.
pub fn format_date(date: &str, style: DateStyle) -> String {
    if date.eq_ignore_ascii_case("present") {
        return "Present".to_string();
    }

    let mut parts = date.splitn(2, '-');
    let year = parts.next().unwrap_or(date);
    let month: Option<u32> = parts
        .next()
        .and_then(|m| m.parse().ok())
        .filter(|m| (1..=12).contains(m));

    let Some(month) = month else {
        return year.to_string();
    };

    match style {
        DateStyle::MmSlashYyyy => format!("{month:02}/{year}"),
        DateStyle::YyyyDashMm => format!("{year}-{month:02}"),
        DateStyle::DdDotMmDotYyyy => format!("01.{month:02}.{year}"),
        DateStyle::MonthNameYyyy => format!("{} {year}", MONTH_NAMES[(month - 1) as usize]),
    }
}

/// `format_date(start) + " - " + format_date(end)`.
pub fn format_date_range(start: &str, end: &str, style: DateStyle) -> String {
    format!("{} - {}", format_date(start, style), format_date(end, style))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_sentinel_any_style() {
        for style in [
            DateStyle::MmSlashYyyy,
            DateStyle::YyyyDashMm,
            DateStyle::DdDotMmDotYyyy,
            DateStyle::MonthNameYyyy,
        ] {
            assert_eq!(format_date("present", style), "Present");
            assert_eq!(format_date("Present", style), "Present");
        }
    }

    #[test]
    fn test_month_name_style() {
        assert_eq!(format_date("2022-08", DateStyle::MonthNameYyyy), "August 2022");
        assert_eq!(format_date("2021-01", DateStyle::MonthNameYyyy), "January 2021");
        assert_eq!(format_date("2021-12", DateStyle::MonthNameYyyy), "December 2021");
    }

    #[test]
    fn test_numeric_styles() {
        assert_eq!(format_date("2022-08", DateStyle::MmSlashYyyy), "08/2022");
        assert_eq!(format_date("2022-8", DateStyle::MmSlashYyyy), "08/2022");
        assert_eq!(format_date("2022-08", DateStyle::YyyyDashMm), "2022-08");
        assert_eq!(format_date("2021-03", DateStyle::DdDotMmDotYyyy), "01.03.2021");
    }

    #[test]
    fn test_year_only_skips_day_synthesis() {
        assert_eq!(format_date("2021", DateStyle::DdDotMmDotYyyy), "2021");
        assert_eq!(format_date("2021", DateStyle::MmSlashYyyy), "2021");
        assert_eq!(format_date("2021", DateStyle::MonthNameYyyy), "2021");
    }

    #[test]
    fn test_unparsable_month_degrades_to_year() {
        assert_eq!(format_date("2021-xx", DateStyle::MonthNameYyyy), "2021");
        assert_eq!(format_date("2021-13", DateStyle::MmSlashYyyy), "2021");
    }

    #[test]
    fn test_date_range_joins_with_hyphen() {
        assert_eq!(
            format_date_range("2019-04", "present", DateStyle::MmSlashYyyy),
            "04/2019 - Present"
        );
        assert_eq!(
            format_date_range("2017-09", "2019-03", DateStyle::MonthNameYyyy),
            "September 2017 - March 2019"
        );
    }
}
