//! Owner-portal location and trading-hours editing.
//!
//! # Responsibility
//! - Edit the parking label and weekly hours on a private copy.
//!
//! # Invariants
//! - Times written through the editor are strict 24-hour `HH:MM`.
//! - `open` may also be `"Closed"`, which closes the whole day.
//! - Only days already present in the schedule can be edited.

use crate::model::truck::{FoodTruck, ScheduleEntry, TruckLocation, CLOSED_MARKER};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationEditError {
    EmptyLocation,
    UnknownDay(String),
    InvalidTime { day: String, value: String },
}

impl Display for LocationEditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLocation => write!(f, "location cannot be empty"),
            Self::UnknownDay(day) => write!(f, "no schedule entry for `{day}`"),
            Self::InvalidTime { day, value } => {
                write!(f, "invalid time `{value}` for {day}; expected HH:MM")
            }
        }
    }
}

impl Error for LocationEditError {}

/// Which end of a trading window to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursField {
    Open,
    Close,
}

/// Whether `value` is a strict 24-hour `HH:MM` time.
pub fn is_valid_time_of_day(value: &str) -> bool {
    TIME_OF_DAY_RE.is_match(value)
}

/// Editable copy of a truck's location and schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationEditor {
    truck_id: String,
    location: TruckLocation,
    schedule: Vec<ScheduleEntry>,
}

impl LocationEditor {
    pub fn new(truck: &FoodTruck) -> Self {
        Self {
            truck_id: truck.id.clone(),
            location: truck.location.clone(),
            schedule: truck.schedule.clone(),
        }
    }

    pub fn location(&self) -> &TruckLocation {
        &self.location
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Replaces the location label; the pin is kept.
    pub fn set_location_text(&mut self, text: &str) -> Result<(), LocationEditError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LocationEditError::EmptyLocation);
        }
        self.location.text = text.to_string();
        Ok(())
    }

    /// Sets the opening or closing time of one day.
    ///
    /// `"Closed"` is accepted for [`HoursField::Open`] and closes the day.
    pub fn set_hours(
        &mut self,
        day: &str,
        field: HoursField,
        value: &str,
    ) -> Result<(), LocationEditError> {
        let value = value.trim();
        let closes_day = field == HoursField::Open && value == CLOSED_MARKER;
        if !closes_day && !is_valid_time_of_day(value) {
            return Err(LocationEditError::InvalidTime {
                day: day.to_string(),
                value: value.to_string(),
            });
        }

        let entry = self.entry_mut(day)?;
        if closes_day {
            *entry = ScheduleEntry::closed(day);
            return Ok(());
        }
        match field {
            HoursField::Open => entry.open = value.to_string(),
            HoursField::Close => entry.close = value.to_string(),
        }
        Ok(())
    }

    /// Marks one day as closed.
    pub fn close_day(&mut self, day: &str) -> Result<(), LocationEditError> {
        self.set_hours(day, HoursField::Open, CLOSED_MARKER)
    }

    fn entry_mut(&mut self, day: &str) -> Result<&mut ScheduleEntry, LocationEditError> {
        self.schedule
            .iter_mut()
            .find(|entry| entry.day == day)
            .ok_or_else(|| LocationEditError::UnknownDay(day.to_string()))
    }

    /// Returns a copy of `truck` carrying the edited location and hours.
    pub fn apply_to(&self, truck: &FoodTruck) -> FoodTruck {
        info!(
            "event=location_save module=location status=ok truck_id={} days={}",
            self.truck_id,
            self.schedule.len()
        );
        let mut edited = truck.clone();
        edited.location = self.location.clone();
        edited.schedule = self.schedule.clone();
        edited
    }
}
