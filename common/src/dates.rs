//! The header date format, `"Tuesday, 22nd of March"`, and its inverse.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::model::submission::SubmissionDate;

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

static DAY_OF_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:st|nd|rd|th)\s+of\s+(\w+)").expect("day-of-month pattern compiles")
});

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Formats `date` as `"<weekday>, <day><suffix> of <month>"`.
pub fn format_display_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{}, {}{} of {}",
        date.format("%A"),
        day,
        ordinal_suffix(day),
        MONTH_NAMES[date.month0() as usize]
    )
}

/// Recovers the calendar date from header text, assuming `year`.
///
/// Month names must be spelled in full with a leading capital. Returns
/// `None` when the text does not match or names an impossible date.
pub fn parse_display_date(text: &str, year: i32) -> Option<NaiveDate> {
    let captures = DAY_OF_MONTH.captures(text)?;
    let day: u32 = captures.get(1)?.as_str().parse().ok()?;
    let month_name = captures.get(2)?.as_str();
    let month = MONTH_NAMES.iter().position(|name| *name == month_name)? as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Date value for a submission: the parsed date, or the text unchanged.
pub fn submission_date(text: &str, year: i32) -> SubmissionDate {
    match parse_display_date(text, year) {
        Some(date) => SubmissionDate::Parsed(date),
        None => SubmissionDate::Raw(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn suffixes_for_irregular_days() {
        let days = [1, 2, 3, 21, 22, 23, 31];
        let expected = ["st", "nd", "rd", "st", "nd", "rd", "st"];
        for (day, suffix) in days.into_iter().zip(expected) {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    proptest! {
        #[test]
        fn every_other_day_uses_th(day in 1u32..=31) {
            prop_assume!(![1, 2, 3, 21, 22, 23, 31].contains(&day));
            prop_assert_eq!(ordinal_suffix(day), "th");
        }

        #[test]
        fn formatted_dates_parse_back(ordinal in 1u32..=365) {
            let date = NaiveDate::from_yo_opt(2023, ordinal).unwrap();
            let text = format_display_date(date);
            prop_assert_eq!(parse_display_date(&text, 2023), Some(date));
        }
    }

    #[test]
    fn formats_weekday_ordinal_and_month() {
        let date = NaiveDate::from_ymd_opt(2022, 3, 22).unwrap();
        assert_eq!(format_display_date(date), "Tuesday, 22nd of March");

        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(format_display_date(date), "Sunday, 1st of September");
    }

    #[test]
    fn parses_header_text_in_given_year() {
        let date = parse_display_date("Tuesday, 22nd of March", 2026).unwrap();
        assert_eq!(date.day(), 22);
        assert_eq!(date.month0(), 2);
        assert_eq!(date.year(), 2026);
    }

    #[test]
    fn rejects_unknown_month_and_impossible_day() {
        assert_eq!(parse_display_date("Monday, 3rd of march", 2026), None);
        assert_eq!(parse_display_date("Monday, 31st of February", 2026), None);
        assert_eq!(parse_display_date("", 2026), None);
    }

    #[test]
    fn unparseable_text_is_kept_raw() {
        assert_eq!(
            submission_date("Loading...", 2026),
            SubmissionDate::Raw("Loading...".to_string())
        );
        assert_eq!(
            submission_date("Friday, 2nd of January", 2026),
            SubmissionDate::Parsed(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())
        );
    }
}
