//! Presentation helpers shared by every truck and review view.
//!
//! # Responsibility
//! - Turn raw catalog values (prices, dates, ratings, long text) into display
//!   strings and widget counts.
//!
//! # Invariants
//! - Every helper is total: bad input degrades to a sentinel, never an error.
//! - Star breakdowns always sum to [`STAR_SLOTS`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Number of stars in a rating widget.
pub const STAR_SLOTS: u8 = 5;
/// Rendered in place of a date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";
const ELLIPSIS: &str = "...";
const CURRENCY_SYMBOL: &str = "$";

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Star widget counts for one rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// Splits a `0..=5` rating into full, half and empty stars.
///
/// A half star is shown when the fractional part is at least `0.5`; at most
/// one half star is ever produced.
///
/// # Panics
/// Debug builds assert that `rating` is within `[0, 5]`. Release builds clamp.
pub fn rating_stars(rating: f64) -> StarBreakdown {
    debug_assert!(
        (0.0..=f64::from(STAR_SLOTS)).contains(&rating),
        "rating {rating} outside 0..=5"
    );
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, f64::from(STAR_SLOTS))
    };

    let full = rating.floor() as u8;
    let half = u8::from(rating.fract() >= 0.5);
    StarBreakdown {
        full,
        half,
        empty: STAR_SLOTS - full - half,
    }
}

/// Formats an amount as Australian dollars, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}NaN");
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL}∞");
    }

    // Shortest round-trip digits, so `1.005` rounds like the literal it came from.
    let (whole, cents) = round_half_up(&amount.abs().to_string(), 2);
    let is_zero = whole.bytes().all(|digit| digit == b'0') && cents == "00";
    let sign = if is_zero { "" } else { sign };
    format!("{sign}{CURRENCY_SYMBOL}{}.{cents}", group_thousands(&whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Rounds a non-negative plain decimal string to `places` fraction digits,
/// ties away from zero. Returns the whole and fraction digit strings.
fn round_half_up(decimal: &str, places: usize) -> (String, String) {
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut digits = whole.as_bytes().to_vec();
    digits.extend(fraction.bytes().chain(std::iter::repeat(b'0')).take(places));
    let round_up = fraction.as_bytes().get(places).is_some_and(|digit| *digit >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let text = String::from_utf8_lossy(&digits);
    (text[..split].to_string(), text[split..].to_string())
}

/// Formats an ISO date or datetime as `Mar 5, 2024`.
///
/// The calendar date written in the input is used as-is; offsets are not
/// converted. Returns [`INVALID_DATE`] when the input cannot be parsed.
pub fn format_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Parses the calendar date of an ISO date or datetime string.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.naive_local().date());
    }
    parse_naive_datetime(trimmed)
        .map(|datetime| datetime.date())
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
}

/// Parses an ISO date or datetime into a comparable instant.
///
/// Offset datetimes are normalized to UTC; naive values and bare dates
/// (midnight) are taken as written.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.naive_utc());
    }
    parse_naive_datetime(trimmed).or_else(|| {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Cuts `text` to `max_len` characters and appends `...` when it is longer.
///
/// Counts characters, not bytes; cuts may land mid-word.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_len).collect::<String>();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Mean of `ratings` rounded to one decimal place; `0.0` when empty.
pub fn average_rating(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: f64 = ratings.iter().sum();
    round_to_tenth(sum / ratings.len() as f64)
}

/// Rounds the exact binary value, so a mean stored as `4.3499...` gives 4.3.
fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let (whole, tenth) = round_half_up(&format!("{:.60}", value.abs()), 1);
    let rounded = format!("{whole}.{tenth}").parse::<f64>().unwrap_or(value);
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}
