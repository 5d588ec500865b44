//! Opening-hours evaluation over weekly truck schedules.
//!
//! # Responsibility
//! - Resolve the schedule entry for a weekday.
//! - Decide whether a truck is trading at a given wall-clock moment.
//!
//! # Invariants
//! - Trading windows are half-open: `open <= now < close`.
//! - Malformed times and `"Closed"` days evaluate to closed, never an error.
//! - Windows that cross midnight (`close < open`) are not supported and
//!   evaluate to closed for the whole day.

use crate::model::truck::ScheduleEntry;
use chrono::{Datelike, Local, NaiveTime, Timelike, Weekday};

/// Long English name used in schedule entries, e.g. `Monday`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
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

/// Finds the entry whose `day` exactly matches `weekday`'s long name.
pub fn schedule_for_day(schedule: &[ScheduleEntry], weekday: Weekday) -> Option<&ScheduleEntry> {
    let name = weekday_name(weekday);
    schedule.iter().find(|entry| entry.day == name)
}

/// Entry for the current local weekday.
pub fn today_schedule(schedule: &[ScheduleEntry]) -> Option<&ScheduleEntry> {
    schedule_for_day(schedule, Local::now().weekday())
}

/// Converts `HH:MM` into minutes since midnight.
///
/// Only the first two `:`-separated segments are read. Returns `None` when a
/// segment is missing or not an unsigned integer.
pub fn parse_minutes(value: &str) -> Option<u32> {
    let mut parts = value.split(':');
    let hours = parts.next()?.trim().parse::<u32>().ok()?;
    let minutes = parts.next()?.trim().parse::<u32>().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Whether the schedule is trading on `weekday` at `time`.
pub fn is_open_at(schedule: &[ScheduleEntry], weekday: Weekday, time: NaiveTime) -> bool {
    let Some(entry) = schedule_for_day(schedule, weekday) else {
        return false;
    };
    if entry.is_closed() {
        return false;
    }

    let (Some(open), Some(close)) = (parse_minutes(&entry.open), parse_minutes(&entry.close))
    else {
        return false;
    };
    let now = time.hour() * 60 + time.minute();
    open <= now && now < close
}

/// Whether the schedule is trading right now, by the local wall clock.
pub fn is_open_now(schedule: &[ScheduleEntry]) -> bool {
    let now = Local::now();
    is_open_at(schedule, now.weekday(), now.time())
}

#[cfg(test)]
mod tests {
    use super::parse_minutes;

    #[test]
    fn parse_minutes_reads_hours_and_minutes() {
        assert_eq!(parse_minutes("09:30"), Some(570));
        assert_eq!(parse_minutes("0:05"), Some(5));
        assert_eq!(parse_minutes("17:00:59"), Some(1020));
    }

    #[test]
    fn parse_minutes_rejects_malformed_segments() {
        assert_eq!(parse_minutes("Closed"), None);
        assert_eq!(parse_minutes("9"), None);
        assert_eq!(parse_minutes("ab:cd"), None);
        assert_eq!(parse_minutes("-1:00"), None);
    }
}
