//! Fiscal milestone windows and consumption aggregation.
//!
//! A calendar year splits at April 1 into two fiscal sub-periods, because
//! carried-over remainder days may expire on March 31. This module provides
//! the [`MilestoneWindow`] value for those sub-periods and the
//! [`MilestoneAggregator`], which sums the vacation days a person has
//! already consumed inside a window, clipping applications that straddle a
//! window boundary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Application, ApplicationStatus, Person, VacationType};
use crate::provider::ApplicationSource;

use super::day_range::WorkdayCalculator;
use super::rounding::round_days;

/// The statuses that count as consumed entitlement.
pub const COUNTED_STATUSES: [ApplicationStatus; 2] =
    [ApplicationStatus::Waiting, ApplicationStatus::Allowed];

/// One fiscal sub-period of a calendar year, both bounds inclusive.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::calculation::MilestoneWindow;
///
/// let window = MilestoneWindow::before_april(2012);
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2012, 3, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneWindow {
    /// First day of the window (inclusive).
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
}

impl MilestoneWindow {
    /// The window from January 1 through March 31 of the year.
    pub fn before_april(year: i32) -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(year, 3, 31).expect("valid calendar date"),
        }
    }

    /// The window from April 1 through December 31 of the year.
    pub fn after_april(year: i32) -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(year, 4, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(year, 12, 31).expect("valid calendar date"),
        }
    }

    /// Clips an interval to this window, or `None` when they do not overlap.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let clipped_start = start.max(self.start);
        let clipped_end = end.min(self.end);
        (clipped_start <= clipped_end).then_some((clipped_start, clipped_end))
    }
}

/// Sums consumed vacation days per fiscal window.
///
/// Applications fully inside the window contribute their cached day count
/// when present, otherwise the day count of their own interval. Applications
/// straddling a window boundary are clipped to the window on both sides
/// before counting, so a multi-period application is split across windows
/// without double counting, and days outside the requested window are never
/// counted.
pub struct MilestoneAggregator<'a> {
    applications: &'a dyn ApplicationSource,
    calculator: WorkdayCalculator<'a>,
}

impl<'a> MilestoneAggregator<'a> {
    /// Creates an aggregator over an application source and a calculator.
    pub fn new(applications: &'a dyn ApplicationSource, calculator: WorkdayCalculator<'a>) -> Self {
        Self {
            applications,
            calculator,
        }
    }

    /// The vacation days the person has consumed inside `[start, end]`.
    ///
    /// Counts waiting and allowed holiday applications. Returns zero when
    /// nothing is found.
    pub fn days_between_two_milestones(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Decimal> {
        self.days_excluding(person, start, end, None)
    }

    /// Like [`Self::days_between_two_milestones`] but skipping one
    /// application id, so a candidate under evaluation is never counted
    /// against itself.
    pub(crate) fn days_excluding(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
        excluded: Option<Uuid>,
    ) -> EngineResult<Decimal> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }

        let mut total = Decimal::ZERO;

        let inside = self.applications.applications_between(
            person,
            start,
            end,
            VacationType::Holiday,
            &COUNTED_STATUSES,
        )?;
        for application in Self::retain(inside, excluded) {
            total += match application.days {
                Some(days) => days,
                None => self.calculator.days_between(
                    application.start_date,
                    application.end_date,
                    application.day_length,
                    person,
                )?,
            };
        }

        let starting_before = self.applications.applications_starting_before(
            person,
            start,
            end,
            VacationType::Holiday,
            &COUNTED_STATUSES,
        )?;
        for application in Self::retain(starting_before, excluded) {
            let clipped_end = application.end_date.min(end);
            total += self.calculator.days_between(
                start,
                clipped_end,
                application.day_length,
                person,
            )?;
        }

        let ending_after = self.applications.applications_ending_after(
            person,
            start,
            end,
            VacationType::Holiday,
            &COUNTED_STATUSES,
        )?;
        for application in Self::retain(ending_after, excluded) {
            let clipped_start = application.start_date.max(start);
            total += self.calculator.days_between(
                clipped_start,
                end,
                application.day_length,
                person,
            )?;
        }

        Ok(round_days(total))
    }

    fn retain(
        applications: Vec<Application>,
        excluded: Option<Uuid>,
    ) -> impl Iterator<Item = Application> {
        applications
            .into_iter()
            .filter(move |application| Some(application.id) != excluded)
    }
}
