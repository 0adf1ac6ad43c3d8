//! Configuration types for region calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML region files.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::HolidayFraction;

/// A weekday name as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum WeekdayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekdayName {
    /// The corresponding chrono weekday.
    pub fn to_weekday(self) -> Weekday {
        match self {
            WeekdayName::Monday => Weekday::Mon,
            WeekdayName::Tuesday => Weekday::Tue,
            WeekdayName::Wednesday => Weekday::Wed,
            WeekdayName::Thursday => Weekday::Thu,
            WeekdayName::Friday => Weekday::Fri,
            WeekdayName::Saturday => Weekday::Sat,
            WeekdayName::Sunday => Weekday::Sun,
        }
    }
}

/// One public-holiday rule of a region.
///
/// A rule either recurs on a fixed `month`/`day` every year, or lists the
/// explicit `dates` it applies on (used for movable feasts such as Good
/// Friday). The `fraction` defaults to a full holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayRule {
    /// Human-readable holiday name (e.g., "Christmas Eve").
    pub name: String,
    /// Month of a fixed-date recurrence (1-12).
    #[serde(default)]
    pub month: Option<u32>,
    /// Day of month of a fixed-date recurrence (1-31).
    #[serde(default)]
    pub day: Option<u32>,
    /// Explicit dates the rule applies on, for movable holidays.
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    /// How much of the day the holiday covers.
    #[serde(default)]
    pub fraction: HolidayFraction,
}

impl HolidayRule {
    /// Whether this rule covers the given date.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if let (Some(month), Some(day)) = (self.month, self.day) {
            if date.month() == month && date.day() == day {
                return true;
            }
        }
        self.dates.contains(&date)
    }

    /// Validates the rule shape at load time.
    pub(crate) fn validate(&self) -> Result<(), String> {
        match (self.month, self.day) {
            (Some(month), Some(day)) => {
                if !(1..=12).contains(&month) {
                    return Err(format!("holiday '{}': month {} out of range", self.name, month));
                }
                if !(1..=31).contains(&day) {
                    return Err(format!("holiday '{}': day {} out of range", self.name, day));
                }
                Ok(())
            }
            (None, None) => {
                if self.dates.is_empty() {
                    Err(format!(
                        "holiday '{}': needs month/day or at least one date",
                        self.name
                    ))
                } else {
                    Ok(())
                }
            }
            _ => Err(format!(
                "holiday '{}': month and day must be given together",
                self.name
            )),
        }
    }
}

/// The calendar configuration of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Region code used to look the region up (e.g., "germany").
    pub code: String,
    /// Human-readable region name.
    pub name: String,
    /// Weekdays that are not working days.
    pub weekend: Vec<WeekdayName>,
    /// The region's public-holiday rules.
    pub holidays: Vec<HolidayRule>,
}
