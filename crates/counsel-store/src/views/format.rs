//! Display formatting shared by the views and the CLI tables.

use chrono::{DateTime, NaiveDate, Utc};

/// Group the integer digits of `digits` in threes.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Thousands-separated number with at most two decimals: `15000.0` → `15,000`.
#[must_use]
pub fn number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{}", group_thousands(whole))
    } else {
        format!("{sign}{}.{fraction}", group_thousands(whole))
    }
}

/// Dollar amount: `$15,000`. Negative amounts keep the sign after the `$`.
#[must_use]
pub fn currency(value: f64) -> String {
    format!("${}", number(value))
}

/// `Dec 1, 2024`
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Dec 1`
#[must_use]
pub fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Human distance between `then` and `now`, e.g. "2 days ago" or "in about 1 hour".
#[must_use]
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    let distance = distance_in_words(seconds.unsigned_abs());
    if seconds >= 0 {
        format!("{distance} ago")
    } else {
        format!("in {distance}")
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Round `value / unit` to the nearest whole number.
const fn rounded(value: u64, unit: u64) -> u64 {
    (value + unit / 2) / unit
}

fn distance_in_words(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 365 * DAY;

    let minutes = rounded(seconds, MINUTE);
    match seconds {
        s if s < 30 => "less than a minute".to_string(),
        s if s < 90 => "1 minute".to_string(),
        _ if minutes < 45 => plural(minutes, "minute"),
        _ if minutes < 90 => "about 1 hour".to_string(),
        s if minutes < 24 * 60 => format!("about {}", plural(rounded(s, HOUR), "hour")),
        s if s < 42 * HOUR => "1 day".to_string(),
        s if s < MONTH => plural(rounded(s, DAY), "day"),
        s if s < 45 * DAY => "about 1 month".to_string(),
        s if s < 60 * DAY => "about 2 months".to_string(),
        s if s < YEAR => plural(rounded(s, MONTH).min(11), "month"),
        s => {
            let years = s / YEAR;
            let months_over = (s % YEAR) / MONTH;
            if months_over < 3 {
                format!("about {}", plural(years, "year"))
            } else if months_over < 9 {
                format!("over {}", plural(years, "year"))
            } else {
                format!("almost {}", plural(years + 1, "year"))
            }
        }
    }
}
