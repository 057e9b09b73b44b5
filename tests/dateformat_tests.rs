use chrono::NaiveDate;
use workday_tool::dateformat::{DateFormatMap, parse_date};
use workday_tool::error::CalculatorError;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn iso_style_pattern_parses() {
    assert_eq!(parse_date("2016-05-01", "yyyy-MM-dd").unwrap(), d(2016, 5, 1));
}

#[test]
fn dotted_and_short_patterns_parse() {
    assert_eq!(parse_date("2016.05.01", "yyyy.MM.dd").unwrap(), d(2016, 5, 1));
    assert_eq!(parse_date("1/9/16", "d/M/yy").unwrap(), d(2016, 9, 1));
}

#[test]
fn out_of_range_month_is_a_date_format_error() {
    let err = parse_date("2016-13-01", "yyyy-MM-dd").unwrap_err();
    assert!(matches!(err, CalculatorError::DateFormat { .. }));
}

#[test]
fn out_of_range_day_is_a_date_format_error() {
    assert!(parse_date("2016-02-30", "yyyy-MM-dd").is_err());
}

#[test]
fn wrong_separator_fails() {
    assert!(parse_date("2016/05/01", "yyyy-MM-dd").is_err());
}

#[test]
fn non_numeric_token_fails() {
    assert!(parse_date("2016-MAY-01", "yyyy-MM-dd").is_err());
}

#[test]
fn trailing_garbage_fails() {
    assert!(parse_date("2016-05-01x", "yyyy-MM-dd").is_err());
}

#[test]
fn unsupported_pattern_token_is_a_config_error() {
    let err = parse_date("2016-05-01 12", "yyyy-MM-dd HH").unwrap_err();
    assert!(matches!(err, CalculatorError::InvalidConfig(_)));
}

#[test]
fn missing_role_is_reported_by_name() {
    let map = DateFormatMap::new();
    let err = map.resolve("vacation-format").unwrap_err();
    assert!(matches!(err, CalculatorError::MissingFormat(role) if role == "vacation-format"));
}

#[test]
fn resolve_returns_the_configured_pattern() {
    let mut map = DateFormatMap::new();
    map.insert("extra-workday-format", "yyyy-MM-dd");
    assert_eq!(map.resolve("extra-workday-format").unwrap(), "yyyy-MM-dd");
}
