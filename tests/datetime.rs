use chrono::{NaiveDate, NaiveDateTime, Timelike};
use dtutil::utils::datetime::*;
use dtutil::{DateTimeError, Unit};

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
}

fn is_display_shaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[test]
fn test_format_default() {
    assert_eq!(format_default(&dt(2024, 3, 7, 9, 5, 0)), "03/07/2024 09:05");
    assert_eq!(format_default(&dt(1999, 12, 31, 23, 59, 59)), "12/31/1999 23:59");
}

#[test]
fn test_format_default_shape_and_roundtrip() {
    let samples = [
        dt(2024, 3, 7, 9, 5, 30),
        dt(2000, 2, 29, 0, 0, 0),
        dt(1970, 1, 1, 12, 1, 59),
        dt(2038, 1, 19, 3, 14, 7),
    ];
    for date in samples {
        let text = format_default(&date);
        assert!(is_display_shaped(&text), "unexpected layout: {}", text);

        let back = parse_with_pattern(&text, DEFAULT_DISPLAY_PATTERN).unwrap();
        // seconds are not part of the display layout
        assert_eq!(back, date.with_second(0).unwrap());
    }
}

#[test]
fn test_format_default_matches_pattern() {
    let date = dt(2024, 3, 7, 9, 5, 0);
    assert_eq!(
        format_default(&date),
        format_with_pattern(&date, DEFAULT_DISPLAY_PATTERN).unwrap()
    );
}

#[test]
fn test_format_with_pattern() {
    let date = dt(2024, 3, 7, 9, 5, 30);
    assert_eq!(format_with_pattern(&date, "yyyy/MM/dd").unwrap(), "2024/03/07");
    assert_eq!(format_with_pattern(&date, "HH:mm").unwrap(), "09:05");
    assert_eq!(format_with_pattern(&date, "MM-dd HH:mm").unwrap(), "03-07 09:05");
}

#[test]
fn test_format_with_invalid_pattern() {
    let date = dt(2024, 3, 7, 9, 5, 0);
    let result = format_with_pattern(&date, "not a valid??pattern");
    assert!(matches!(result, Err(DateTimeError::InvalidPattern(_))));
}

#[test]
fn test_pattern_roundtrip() {
    let date = dt(2024, 11, 23, 17, 45, 12);
    // each pattern only carries some of the fields of `date`
    for (pattern, expected) in [
        ("yyyy-MM-dd HH:mm:ss", date),
        ("dd.MM.yyyy HH:mm", dt(2024, 11, 23, 17, 45, 0)),
        ("EEE, d MMM yyyy h:mm:ss a", date),
        ("MMMM d, yyyy 'at' HH:mm:ss", date),
        ("yyyyMMddHHmmss", date),
        ("yyyy-MM-dd HH", dt(2024, 11, 23, 17, 0, 0)),
    ] {
        let text = format_with_pattern(&date, pattern).unwrap();
        assert_eq!(parse_with_pattern(&text, pattern).unwrap(), expected, "pattern {}", pattern);
    }
}

#[test]
fn test_parse_with_pattern_is_strict() {
    let pattern = "MM/dd/yyyy HH:mm";
    assert!(matches!(parse_with_pattern(" 03/07/2024 09:05", pattern), Err(DateTimeError::Parse(_))));
    assert!(matches!(parse_with_pattern("03/07/2024   09:05", pattern), Err(DateTimeError::Parse(_))));
    assert!(matches!(parse_with_pattern("03/07/2024 9:5", pattern), Err(DateTimeError::Parse(_))));
    assert_eq!(parse_with_pattern("3/7/2024 9:5", "M/d/yyyy H:m").unwrap(), dt(2024, 3, 7, 9, 5, 0));
}

#[test]
fn test_parse_default_minutes() {
    assert_eq!(parse_default("2024-03-07T09:05").unwrap(), dt(2024, 3, 7, 9, 5, 0));
}

#[test]
fn test_parse_default_seconds() {
    assert_eq!(parse_default("2024-03-07T09:05:30").unwrap(), dt(2024, 3, 7, 9, 5, 30));
}

#[test]
fn test_parse_default_empty() {
    assert!(matches!(parse_default(""), Err(DateTimeError::InvalidArgument(_))));
}

#[test]
fn test_parse_default_rejects_other_layouts() {
    for text in [
        "not-a-date",
        "2024-03-07",
        "2024-03-07 09:05",
        "2024-3-7T09:05",
        "2024-03-07T09:05:30.123",
        "2024-03-07T09:05Z",
        " 2024-03-07T09:05",
    ] {
        assert!(
            matches!(parse_default(text), Err(DateTimeError::Parse(_))),
            "accepted {}",
            text
        );
    }
}

#[test]
fn test_parse_default_out_of_range() {
    assert!(matches!(parse_default("2024-02-30T09:05"), Err(DateTimeError::Parse(_))));
    assert!(matches!(parse_default("2024-13-01T09:05"), Err(DateTimeError::Parse(_))));
    assert!(matches!(parse_default("2024-01-01T24:00"), Err(DateTimeError::Parse(_))));
}

#[test]
fn test_parse_with_pattern() {
    assert_eq!(
        parse_with_pattern("03/07/2024 09:05", "MM/dd/yyyy HH:mm").unwrap(),
        dt(2024, 3, 7, 9, 5, 0)
    );
    assert_eq!(
        parse_with_pattern("7 March 2024 9:05 PM", "d MMMM yyyy h:mm a").unwrap(),
        dt(2024, 3, 7, 21, 5, 0)
    );
}

#[test]
fn test_parse_with_pattern_errors() {
    assert!(matches!(
        parse_with_pattern("", "MM/dd/yyyy HH:mm"),
        Err(DateTimeError::InvalidArgument(_))
    ));
    assert!(matches!(
        parse_with_pattern("03/07/2024 09:05", "MM/dd/yyyy HH:mm ]"),
        Err(DateTimeError::InvalidPattern(_))
    ));
    assert!(matches!(
        parse_with_pattern("02/30/2024 09:05", "MM/dd/yyyy HH:mm"),
        Err(DateTimeError::Parse(_))
    ));
    assert!(matches!(
        parse_with_pattern("2024/03/07 09:05", "MM/dd/yyyy HH:mm"),
        Err(DateTimeError::Parse(_))
    ));
    assert!(matches!(
        parse_with_pattern("03/07/2024 09:05 trailing", "MM/dd/yyyy HH:mm"),
        Err(DateTimeError::Parse(_))
    ));
}

#[test]
fn test_diff_truncates() {
    let start = dt(2024, 1, 1, 0, 0, 0);
    let end = dt(2024, 1, 2, 23, 0, 0);
    assert_eq!(diff(&start, &end, Unit::Days).unwrap(), 1);
    assert_eq!(diff(&start, &end, Unit::Hours).unwrap(), 47);
    assert_eq!(diff(&dt(2024, 1, 1, 1, 0, 0), &dt(2024, 1, 2, 0, 0, 0), Unit::Days).unwrap(), 0);
}

#[test]
fn test_diff_negative() {
    let start = dt(2024, 1, 2, 0, 0, 0);
    let end = dt(2024, 1, 1, 0, 0, 0);
    assert_eq!(diff(&start, &end, Unit::Days).unwrap(), -1);
    assert_eq!(diff(&start, &end, Unit::Minutes).unwrap(), -1440);
}

#[test]
fn test_diff_zero() {
    let date = dt(2024, 6, 1, 12, 0, 0);
    for unit in Unit::ALL {
        assert_eq!(diff(&date, &date, unit).unwrap(), 0, "unit {}", unit);
    }
}
