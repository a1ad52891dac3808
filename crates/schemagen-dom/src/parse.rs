//! Primitive value parsers used by generated loaders
//!
//! Loaders never fail: surrounding whitespace is ignored, empty text yields the
//! type's default, and malformed text yields the default with a warning in the
//! log. List values are whitespace separated.

use chrono::{DateTime, NaiveDateTime};

/// Timestamp representation used by generated records
pub type Timestamp = NaiveDateTime;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_boolean(text: &str) -> bool {
    match text.trim() {
        "true" | "1" => true,
        "false" | "0" | "" => false,
        other => {
            log::warn!("invalid boolean value '{other}', using false");
            false
        }
    }
}

pub fn parse_double(text: &str) -> f64 {
    parse_number(text, "double")
}

pub fn parse_int(text: &str) -> i32 {
    parse_number(text, "int")
}

pub fn parse_string(text: &str) -> String {
    text.to_string()
}

/// Parse an `xs:dateTime` value
///
/// Values with an offset are converted to UTC; values without one are taken
/// as they are.
pub fn parse_date_time(text: &str) -> Timestamp {
    let text = text.trim();
    if text.is_empty() {
        return Timestamp::default();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.naive_utc();
    }
    match NaiveDateTime::parse_from_str(text, NAIVE_FORMAT) {
        Ok(dt) => dt,
        Err(e) => {
            log::warn!("invalid dateTime value '{text}' ({e}), using default");
            Timestamp::default()
        }
    }
}

pub fn parse_double_list(text: &str) -> Vec<f64> {
    text.split_whitespace().map(parse_double).collect()
}

pub fn parse_int_list(text: &str) -> Vec<i32> {
    text.split_whitespace().map(parse_int).collect()
}

pub fn parse_string_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn parse_number<T>(text: &str, kind: &str) -> T
where
    T: std::str::FromStr + Default,
{
    let text = text.trim();
    if text.is_empty() {
        return T::default();
    }
    match text.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("invalid {kind} value '{text}', using default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case(" 1 ", true)]
    #[case("false", false)]
    #[case("0", false)]
    #[case("", false)]
    #[case("yes", false)]
    fn test_parse_boolean(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(parse_boolean(input), expected);
    }

    #[rstest]
    #[case("1.5", 1.5)]
    #[case("  -7000.25\n", -7000.25)]
    #[case("1e3", 1000.0)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    fn test_parse_double(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_double(input), expected);
    }

    #[rstest]
    #[case("42", 42)]
    #[case(" -3 ", -3)]
    #[case("", 0)]
    #[case("4.2", 0)]
    fn test_parse_int(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(parse_int(input), expected);
    }

    #[test]
    fn test_parse_string_keeps_text() {
        assert_eq!(parse_string(" Earth "), " Earth ");
    }

    #[test]
    fn test_parse_date_time_forms() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(parse_date_time("2020-01-01T12:30:00"), expected);
        assert_eq!(parse_date_time("2020-01-01T12:30:00Z"), expected);
        assert_eq!(parse_date_time("2020-01-01T14:30:00+02:00"), expected);
        assert_eq!(parse_date_time(""), Timestamp::default());
        assert_eq!(parse_date_time("not a date"), Timestamp::default());
    }

    #[test]
    fn test_parse_lists() {
        assert_eq!(parse_double_list("1.0 2.5\n  3"), vec![1.0, 2.5, 3.0]);
        assert_eq!(parse_int_list(" 4 5 6 "), vec![4, 5, 6]);
        assert_eq!(parse_string_list("Earth Moon"), vec!["Earth", "Moon"]);
        assert!(parse_double_list("   ").is_empty());
    }
}
