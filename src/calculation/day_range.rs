//! Day-range calculation functionality.
//!
//! This module provides the [`WorkdayCalculator`] for converting a leave
//! interval into the decimal number of vacation days it is worth, given a
//! working-time calendar.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::WorkingTimeCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayLength, Person};

use super::rounding::round_days;

/// Converts date ranges into vacation day counts.
///
/// The calculator is a thin, copyable handle over a
/// [`WorkingTimeCalendar`]; it holds no state of its own and is a pure
/// function of its inputs plus the calendar.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use leave_engine::calculation::WorkdayCalculator;
/// use leave_engine::config::CalendarLoader;
/// use leave_engine::models::{DayLength, Person};
///
/// let loader = CalendarLoader::load("./config/holidays")?;
/// let calendar = loader.calendar("germany")?;
/// let calculator = WorkdayCalculator::new(&calendar);
///
/// let days = calculator.days_between(
///     NaiveDate::from_ymd_opt(2012, 3, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2012, 3, 16).unwrap(),
///     DayLength::Full,
///     &Person::new("horscht"),
/// )?;
/// assert_eq!(days.to_string(), "5");
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Clone, Copy)]
pub struct WorkdayCalculator<'a> {
    calendar: &'a dyn WorkingTimeCalendar,
}

impl<'a> WorkdayCalculator<'a> {
    /// Creates a calculator over the given calendar.
    pub fn new(calendar: &'a dyn WorkingTimeCalendar) -> Self {
        Self { calendar }
    }

    /// Calculates the vacation days consumed by `[start, end]` inclusive.
    ///
    /// Per date: weekends contribute nothing; otherwise a date contributes
    /// the share of it not covered by a public holiday (full holiday 0,
    /// half holiday 0.5, none 1). For [`DayLength::Morning`] and
    /// [`DayLength::Afternoon`] requests each date contributes at most 0.5,
    /// and a date that is itself a half holiday contributes nothing (the
    /// requested half is the free half).
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDateRange`] when `start > end`.
    pub fn days_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        day_length: DayLength,
        person: &Person,
    ) -> EngineResult<Decimal> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }

        let half = Decimal::new(5, 1);
        let mut total = Decimal::ZERO;

        for date in start.iter_days().take_while(|d| *d <= end) {
            if !self.calendar.is_working_day(date, person) {
                continue;
            }

            let share = self.calendar.holiday_fraction(date).working_share();
            total += match day_length {
                DayLength::Full => share,
                DayLength::Morning | DayLength::Afternoon => {
                    (share - half).max(Decimal::ZERO)
                }
            };
        }

        Ok(round_days(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayFraction, RegionCalendar};
    use crate::config::{HolidayRule, RegionConfig, WeekdayName};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn fixed(name: &str, month: u32, day: u32, fraction: HolidayFraction) -> HolidayRule {
        HolidayRule {
            name: name.to_string(),
            month: Some(month),
            day: Some(day),
            dates: vec![],
            fraction,
        }
    }

    /// Weekend Sat/Sun plus the holiday rules the scenarios depend on.
    fn test_calendar() -> RegionCalendar {
        RegionCalendar::new(RegionConfig {
            code: "test".to_string(),
            name: "Test region".to_string(),
            weekend: vec![WeekdayName::Saturday, WeekdayName::Sunday],
            holidays: vec![
                fixed("New Year's Day", 1, 1, HolidayFraction::Full),
                fixed("Labour Day", 5, 1, HolidayFraction::Full),
                fixed("Christmas Eve", 12, 24, HolidayFraction::Half),
                fixed("Christmas Day", 12, 25, HolidayFraction::Full),
                fixed("Boxing Day", 12, 26, HolidayFraction::Full),
                fixed("New Year's Eve", 12, 31, HolidayFraction::Half),
            ],
        })
    }

    fn days(start: &str, end: &str, day_length: DayLength) -> Decimal {
        let calendar = test_calendar();
        let calculator = WorkdayCalculator::new(&calendar);
        calculator
            .days_between(make_date(start), make_date(end), day_length, &Person::new("horscht"))
            .unwrap()
    }

    #[test]
    fn test_full_working_week_is_five_days() {
        // 2012-03-12 is a Monday
        assert_eq!(days("2012-03-12", "2012-03-16", DayLength::Full), dec("5"));
    }

    #[test]
    fn test_weekend_days_do_not_count() {
        // Monday through Sunday still yields five days
        assert_eq!(days("2012-03-12", "2012-03-18", DayLength::Full), dec("5"));
        // a weekend-only range yields zero
        assert_eq!(days("2012-03-17", "2012-03-18", DayLength::Full), dec("0"));
    }

    #[test]
    fn test_single_working_day() {
        assert_eq!(days("2012-03-12", "2012-03-12", DayLength::Full), dec("1"));
    }

    #[test]
    fn test_full_holiday_does_not_count() {
        // 2012-05-01 (Labour Day) falls on a Tuesday
        assert_eq!(days("2012-04-30", "2012-05-02", DayLength::Full), dec("2"));
    }

    #[test]
    fn test_half_holiday_counts_half() {
        // 2012-12-24 is a Monday and a half holiday
        assert_eq!(days("2012-12-24", "2012-12-24", DayLength::Full), dec("0.5"));
    }

    #[test]
    fn test_year_end_week() {
        // Thu 27, Fri 28, weekend, half-day Mon Dec 31
        assert_eq!(days("2012-12-27", "2012-12-31", DayLength::Full), dec("2.5"));
    }

    #[test]
    fn test_morning_week_is_half_per_day() {
        assert_eq!(
            days("2012-03-12", "2012-03-16", DayLength::Morning),
            dec("2.5")
        );
        assert_eq!(
            days("2012-03-12", "2012-03-16", DayLength::Afternoon),
            dec("2.5")
        );
    }

    #[test]
    fn test_half_request_on_half_holiday_is_free() {
        assert_eq!(
            days("2012-12-24", "2012-12-24", DayLength::Morning),
            dec("0")
        );
    }

    #[test]
    fn test_half_request_on_full_holiday_is_free() {
        assert_eq!(days("2012-05-01", "2012-05-01", DayLength::Morning), dec("0"));
    }

    #[test]
    fn test_half_request_on_weekend_is_free() {
        assert_eq!(
            days("2012-03-17", "2012-03-18", DayLength::Afternoon),
            dec("0")
        );
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        let calendar = test_calendar();
        let calculator = WorkdayCalculator::new(&calendar);
        let result = calculator.days_between(
            make_date("2012-03-16"),
            make_date("2012-03-12"),
            DayLength::Full,
            &Person::new("horscht"),
        );

        match result {
            Err(EngineError::InvalidDateRange { start, end }) => {
                assert_eq!(start, make_date("2012-03-16"));
                assert_eq!(end, make_date("2012-03-12"));
            }
            _ => panic!("Expected InvalidDateRange error"),
        }
    }

    #[test]
    fn test_days_between_is_idempotent() {
        let first = days("2011-12-29", "2012-01-03", DayLength::Full);
        let second = days("2011-12-29", "2012-01-03", DayLength::Full);
        assert_eq!(first, second);
    }

    #[test]
    fn test_year_boundary_range() {
        // Thu 29, Fri 30, Sat half-holiday (weekend wins), New Year's Day on
        // a Sunday, then Mon 2 and Tue 3
        assert_eq!(days("2011-12-29", "2012-01-03", DayLength::Full), dec("4"));
    }
}
