//! Region-configured calendar implementation.

use chrono::{Datelike, NaiveDate};

use crate::config::RegionConfig;
use crate::models::Person;

use super::{HolidayFraction, WorkingTimeCalendar};

/// A [`WorkingTimeCalendar`] backed by one region's configuration.
///
/// The calendar applies the region's weekend weekdays uniformly to every
/// person and resolves public holidays from the region's holiday rules.
/// Instances are obtained from
/// [`CalendarLoader::calendar`](crate::config::CalendarLoader::calendar).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::calendar::{HolidayFraction, RegionCalendar, WorkingTimeCalendar};
/// use leave_engine::config::RegionConfig;
/// use leave_engine::models::Person;
///
/// let config: RegionConfig = serde_yaml::from_str(
///     r#"
///     code: germany
///     name: Germany
///     weekend: [saturday, sunday]
///     holidays:
///       - name: New Year's Day
///         month: 1
///         day: 1
///       - name: New Year's Eve
///         month: 12
///         day: 31
///         fraction: half
///     "#,
/// )
/// .unwrap();
/// let calendar = RegionCalendar::new(config);
///
/// let new_years_eve = NaiveDate::from_ymd_opt(2012, 12, 31).unwrap();
/// assert_eq!(calendar.holiday_fraction(new_years_eve), HolidayFraction::Half);
/// assert!(calendar.is_working_day(new_years_eve, &Person::new("horscht")));
/// ```
#[derive(Debug, Clone)]
pub struct RegionCalendar {
    config: RegionConfig,
}

impl RegionCalendar {
    /// Creates a calendar from a region configuration.
    pub fn new(config: RegionConfig) -> Self {
        Self { config }
    }

    /// The region code this calendar answers for.
    pub fn region_code(&self) -> &str {
        &self.config.code
    }
}

impl WorkingTimeCalendar for RegionCalendar {
    fn holiday_fraction(&self, date: NaiveDate) -> HolidayFraction {
        for rule in &self.config.holidays {
            if rule.applies_on(date) {
                return rule.fraction;
            }
        }
        HolidayFraction::None
    }

    fn is_working_day(&self, date: NaiveDate, _person: &Person) -> bool {
        let weekday = date.weekday();
        !self
            .config
            .weekend
            .iter()
            .any(|name| name.to_weekday() == weekday)
    }
}
