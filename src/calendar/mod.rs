//! Working-time calendar capability.
//!
//! This module defines the [`WorkingTimeCalendar`] trait the calculation
//! engine consumes to decide how much of a working day a calendar date
//! represents, together with [`RegionCalendar`], the configuration-backed
//! implementation shipped with the crate.

mod region;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Person;

pub use region::RegionCalendar;

/// How much of a date is covered by a public holiday.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::HolidayFraction;
/// use rust_decimal::Decimal;
///
/// assert_eq!(HolidayFraction::None.working_share(), Decimal::ONE);
/// assert_eq!(HolidayFraction::Half.working_share(), Decimal::new(5, 1));
/// assert_eq!(HolidayFraction::Full.working_share(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayFraction {
    /// Not a public holiday.
    None,
    /// A half-day holiday (for example Christmas Eve in the German calendar).
    Half,
    /// A full public holiday.
    #[default]
    Full,
}

impl HolidayFraction {
    /// The share of a working day that remains on such a date: 1, 0.5 or 0.
    pub fn working_share(&self) -> Decimal {
        match self {
            HolidayFraction::None => Decimal::ONE,
            HolidayFraction::Half => Decimal::new(5, 1),
            HolidayFraction::Full => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for HolidayFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayFraction::None => write!(f, "none"),
            HolidayFraction::Half => write!(f, "half"),
            HolidayFraction::Full => write!(f, "full"),
        }
    }
}

/// Read-only calendar knowledge the engine depends on.
///
/// Implementations answer two questions per date: is it a working day for
/// the given person, and how much of it is covered by a public holiday.
/// [`RegionCalendar`] answers both from a per-region configuration; custom
/// implementations can consult per-person working-time schedules instead.
pub trait WorkingTimeCalendar {
    /// The public-holiday share of the given date.
    fn holiday_fraction(&self, date: NaiveDate) -> HolidayFraction;

    /// Whether the date is a working day for the given person.
    ///
    /// Weekends return false; the person parameter allows implementations
    /// with individual working-time schedules.
    fn is_working_day(&self, date: NaiveDate, person: &Person) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_share_values() {
        assert_eq!(HolidayFraction::None.working_share(), Decimal::ONE);
        assert_eq!(HolidayFraction::Half.working_share(), Decimal::new(5, 1));
        assert_eq!(HolidayFraction::Full.working_share(), Decimal::ZERO);
    }

    #[test]
    fn test_fraction_defaults_to_full() {
        assert_eq!(HolidayFraction::default(), HolidayFraction::Full);
    }

    #[test]
    fn test_fraction_serialization() {
        assert_eq!(
            serde_json::to_string(&HolidayFraction::Half).unwrap(),
            "\"half\""
        );
        let deserialized: HolidayFraction = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(deserialized, HolidayFraction::None);
    }

    #[test]
    fn test_fraction_display() {
        assert_eq!(format!("{}", HolidayFraction::None), "none");
        assert_eq!(format!("{}", HolidayFraction::Half), "half");
        assert_eq!(format!("{}", HolidayFraction::Full), "full");
    }
}
