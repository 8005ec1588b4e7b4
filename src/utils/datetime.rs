//! Date and time utility functions
//!
//! This module provides functions for date manipulation and human-readable
//! formatting of the portal's timestamps (e.g., "today", "5 days ago",
//! "Jan 15 at 14:30").

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Weekday};

/// Standard date format used throughout the application for portal API compatibility
pub const PORTAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, PORTAL_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(PORTAL_DATE_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Format a date string in human-readable form relative to today
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `String` - Human-readable date format
pub fn format_human_date(date_str: &str) -> String {
    let input_date = match parse_date(date_str) {
        Ok(date) => date,
        Err(_) => return date_str.to_string(), // Return original if parsing fails
    };

    let now = Local::now();
    let today = now.date_naive();
    let days_diff = (input_date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if (-7..-1).contains(&diff) => {
            // Within the past week - show day name
            let weekday = input_date.weekday();
            format!("last {}", weekday_name(weekday))
        }
        diff if (-30..-7).contains(&diff) => {
            // Within the past month - show "X days ago"
            format!("{} days ago", -diff)
        }
        _ => {
            // For dates further out, show the actual date
            // Format as "Jan 15" or "Jan 15, 2025" if different year
            let current_year = today.year();
            let input_year = input_date.year();

            if input_year == current_year {
                input_date.format("%b %d").to_string()
            } else {
                input_date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Format a post timestamp in human-readable form
///
/// # Arguments
/// * `datetime_str` - DateTime string in various formats (RFC3339, ISO 8601, etc.)
///
/// # Returns
/// * `String` - Human-readable datetime format
pub fn format_human_datetime(datetime_str: &str) -> String {
    // Try multiple datetime parsing strategies
    let parsed_dt = if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        // RFC3339 with timezone (e.g., "2025-01-15T14:30:00Z")
        Some(dt.with_timezone(&Local))
    } else if let Ok(dt) =
        chrono::NaiveDateTime::parse_from_str(datetime_str, &format!("{}T%H:%M:%S", PORTAL_DATE_FORMAT))
    {
        // ISO 8601 without timezone (e.g., "2025-01-15T14:30:00")
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else if let Ok(dt) =
        chrono::NaiveDateTime::parse_from_str(datetime_str, &format!("{} %H:%M:%S", PORTAL_DATE_FORMAT))
    {
        // Space-separated format (e.g., "2025-01-15 14:30:00")
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else {
        None
    };

    if let Some(local_dt) = parsed_dt {
        let now = Local::now();
        let minutes = (now - local_dt).num_minutes();

        // Fresh posts get a compact relative stamp
        if (0..60).contains(&minutes) {
            return if minutes < 1 {
                "just now".to_string()
            } else {
                format!("{}m ago", minutes)
            };
        }
        if (60..1440).contains(&minutes) {
            return format!("{}h ago", minutes / 60);
        }

        let date_str = local_dt.format(PORTAL_DATE_FORMAT).to_string();
        let time_str = local_dt.format("%H:%M").to_string();
        let human_date = format_human_date(&date_str);

        format!("{} at {}", human_date, time_str)
    } else {
        // Fallback to date-only parsing
        format_human_date(datetime_str)
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
