use chrono::{Duration, Local, NaiveDate};
use portalist::utils::datetime::{format_human_date, format_human_datetime, format_today, format_ymd, parse_date};

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(format_ymd(date), "2023-12-25");
}

#[test]
fn test_parse_date_round_trip() {
    let date = parse_date("2025-06-01").unwrap();
    assert_eq!(format_ymd(date), "2025-06-01");
    assert!(parse_date("not-a-date").is_err());
}

#[test]
fn test_format_human_date_relative_values() {
    let today = Local::now().date_naive();
    assert_eq!(format_human_date(&format_ymd(today)), "today");
    assert_eq!(format_human_date(&format_ymd(today - Duration::days(1))), "yesterday");
    assert_eq!(format_human_date(&format_ymd(today + Duration::days(1))), "tomorrow");
    assert_eq!(format_human_date(&format_ymd(today - Duration::days(10))), "10 days ago");
}

#[test]
fn test_format_human_date_passes_through_garbage() {
    assert_eq!(format_human_date("???"), "???");
}

#[test]
fn test_format_human_datetime_recent_posts_are_relative() {
    let now = Local::now();
    let five_minutes_ago = (now - Duration::minutes(5)).to_rfc3339();
    assert_eq!(format_human_datetime(&five_minutes_ago), "5m ago");

    let three_hours_ago = (now - Duration::hours(3)).to_rfc3339();
    assert_eq!(format_human_datetime(&three_hours_ago), "3h ago");
}

#[test]
fn test_format_human_datetime_old_posts_show_time() {
    let now = Local::now();
    let last_month = (now - Duration::days(40)).to_rfc3339();
    let formatted = format_human_datetime(&last_month);
    assert!(formatted.contains(" at "), "expected date-with-time, got '{}'", formatted);
}

#[test]
fn test_format_today_matches_parse() {
    assert!(parse_date(&format_today()).is_ok());
}
