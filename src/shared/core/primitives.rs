use chrono::{Datelike, Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// First and last day of a calendar year, formatted the way the store keeps dates.
pub fn year_bounds(year: i32) -> (String, String) {
    (format!("{year:04}-01-01"), format!("{year:04}-12-31"))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(18.67 + 5.0 - 5.0, 18.67)]
    #[case(2.345_000_1, 2.35)]
    #[case(-1.234, -1.23)]
    #[case(0.0, 0.0)]
    fn it_should_round_to_two_decimals(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round2(value), expected);
    }

    #[rstest]
    fn it_should_return_the_bounds_of_the_year() {
        let (start, end) = year_bounds(2024);
        assert_eq!(start, "2024-01-01");
        assert_eq!(end, "2024-12-31");
    }

    #[rstest]
    fn it_should_parse_and_format_iso_dates() {
        let date = parse_date("2024-03-01").expect("valid date");
        assert_eq!(format_date(date), "2024-03-01");
        assert!(parse_date("01/03/2024").is_none());
    }
}
