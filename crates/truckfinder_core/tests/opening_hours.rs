use chrono::{NaiveTime, Weekday};
use truckfinder_core::hours::{parse_minutes, weekday_name};
use truckfinder_core::{is_open_at, schedule_for_day, ScheduleEntry};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn weekday_schedule() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry::closed("Sunday"),
        ScheduleEntry::new("Monday", "09:00", "17:00"),
        ScheduleEntry::new("Tuesday", "11:30", "21:00"),
        ScheduleEntry::new("Friday", "22:00", "02:00"),
        ScheduleEntry::new("Saturday", "9am", "5pm"),
    ]
}

#[test]
fn open_inside_window() {
    let schedule = weekday_schedule();
    assert!(is_open_at(&schedule, Weekday::Mon, at(12, 0)));
    assert!(is_open_at(&schedule, Weekday::Tue, at(20, 59)));
}

#[test]
fn open_boundary_is_inclusive_and_close_boundary_exclusive() {
    let schedule = weekday_schedule();
    assert!(is_open_at(&schedule, Weekday::Mon, at(9, 0)));
    assert!(!is_open_at(&schedule, Weekday::Mon, at(8, 59)));
    assert!(!is_open_at(&schedule, Weekday::Mon, at(17, 0)));
}

#[test]
fn closed_day_is_closed_all_day() {
    let schedule = weekday_schedule();
    for hour in [0, 9, 12, 23] {
        assert!(!is_open_at(&schedule, Weekday::Sun, at(hour, 0)));
    }
}

#[test]
fn missing_day_is_closed() {
    let schedule = weekday_schedule();
    assert!(!is_open_at(&schedule, Weekday::Wed, at(12, 0)));
    assert!(schedule_for_day(&schedule, Weekday::Wed).is_none());
}

#[test]
fn overnight_window_is_not_supported() {
    let schedule = weekday_schedule();
    assert!(!is_open_at(&schedule, Weekday::Fri, at(23, 0)));
    assert!(!is_open_at(&schedule, Weekday::Fri, at(1, 0)));
}

#[test]
fn malformed_times_degrade_to_closed() {
    let schedule = weekday_schedule();
    assert!(!is_open_at(&schedule, Weekday::Sat, at(12, 0)));
}

#[test]
fn day_lookup_is_exact_long_name() {
    let schedule = vec![ScheduleEntry::new("monday", "00:00", "23:59")];
    assert!(!is_open_at(&schedule, Weekday::Mon, at(12, 0)));

    let schedule = weekday_schedule();
    let entry = schedule_for_day(&schedule, Weekday::Tue).unwrap();
    assert_eq!(entry.open, "11:30");
    assert_eq!(weekday_name(Weekday::Thu), "Thursday");
}

#[test]
fn minutes_since_midnight() {
    assert_eq!(parse_minutes("11:30"), Some(690));
    assert_eq!(parse_minutes("Closed"), None);
}
