//! Application checking against the entitlement account.
//!
//! This module provides the [`CalculationService`], the orchestrator that
//! decides whether a candidate leave application fits the remaining
//! entitlement of every calendar year it touches.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calendar::WorkingTimeCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{Application, Person};
use crate::provider::{AccountSource, ApplicationSource};

use super::day_range::WorkdayCalculator;
use super::milestone::{MilestoneAggregator, MilestoneWindow};
use super::rounding::round_days;

/// Decides whether leave applications fit the remaining entitlement.
///
/// The service holds no mutable state; it reads applications and accounts
/// through its collaborators and is safe to use concurrently for different
/// persons. Callers are responsible for serializing concurrent checks for
/// the *same* person, so that each call sees a consistent snapshot.
///
/// # Example
///
/// ```no_run
/// use leave_engine::calculation::CalculationService;
/// use leave_engine::config::CalendarLoader;
/// use leave_engine::provider::{InMemoryAccountSource, InMemoryApplicationSource};
/// use rust_decimal::Decimal;
/// # use chrono::NaiveDate;
/// # use leave_engine::models::{Application, DayLength, Person, VacationType};
///
/// let applications = InMemoryApplicationSource::new();
/// let accounts = InMemoryAccountSource::new(Decimal::from(28));
/// let calendar = CalendarLoader::load("./config/holidays")?.calendar("germany")?;
/// let service = CalculationService::new(&applications, &accounts, &calendar);
///
/// # let candidate = Application::new(
/// #     Person::new("horscht"),
/// #     NaiveDate::from_ymd_opt(2012, 8, 20).unwrap(),
/// #     NaiveDate::from_ymd_opt(2012, 8, 21).unwrap(),
/// #     DayLength::Full,
/// #     VacationType::Holiday,
/// # );
/// assert!(service.check_application(&candidate)?);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
pub struct CalculationService<'a> {
    applications: &'a dyn ApplicationSource,
    accounts: &'a dyn AccountSource,
    calculator: WorkdayCalculator<'a>,
}

impl<'a> CalculationService<'a> {
    /// Creates a service over the given collaborators.
    pub fn new(
        applications: &'a dyn ApplicationSource,
        accounts: &'a dyn AccountSource,
        calendar: &'a dyn WorkingTimeCalendar,
    ) -> Self {
        Self {
            applications,
            accounts,
            calculator: WorkdayCalculator::new(calendar),
        }
    }

    /// Whether the candidate application can be granted.
    ///
    /// Every calendar year the candidate touches must independently fit:
    /// the days already consumed in both fiscal sub-windows of the year
    /// (the candidate itself excluded) plus the candidate's own portion
    /// must not exceed the actually available days. With the account's
    /// expiry flag set, carried-over remainder days only count as far as
    /// they are consumed before April; without it the full remainder
    /// counts. Equality grants.
    pub fn check_application(&self, candidate: &Application) -> EngineResult<bool> {
        if candidate.start_date > candidate.end_date {
            return Err(EngineError::InvalidDateRange {
                start: candidate.start_date,
                end: candidate.end_date,
            });
        }

        let start_year = candidate.start_date.year();
        let end_year = candidate.end_date.year();

        for year in start_year..=end_year {
            if !self.check_year(candidate, year)? {
                info!(
                    login = %candidate.person.login_name,
                    year,
                    "application exceeds the remaining entitlement"
                );
                return Ok(false);
            }
        }

        debug!(
            login = %candidate.person.login_name,
            "application fits the remaining entitlement"
        );
        Ok(true)
    }

    /// The vacation days the person has consumed inside `[start, end]`.
    ///
    /// Exposed here so callers reach all calculation entry points through
    /// one service; delegates to the [`MilestoneAggregator`].
    pub fn days_between_two_milestones(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Decimal> {
        self.aggregator().days_between_two_milestones(person, start, end)
    }

    fn aggregator(&self) -> MilestoneAggregator<'a> {
        MilestoneAggregator::new(self.applications, self.calculator)
    }

    fn check_year(&self, candidate: &Application, year: i32) -> EngineResult<bool> {
        let person = &candidate.person;
        let before = MilestoneWindow::before_april(year);
        let after = MilestoneWindow::after_april(year);

        let aggregator = self.aggregator();
        let consumed_before =
            aggregator.days_excluding(person, before.start, before.end, Some(candidate.id))?;
        let consumed_after =
            aggregator.days_excluding(person, after.start, after.end, Some(candidate.id))?;

        let requested_before = self.candidate_days(candidate, &before)?;
        let requested_after = self.candidate_days(candidate, &after)?;

        let account = self.accounts.get_or_create_account(year, person)?;
        let actual_days = self.accounts.actual_vacation_days(&account)?;

        let used_before = round_days(consumed_before + requested_before);
        let used_after = round_days(consumed_after + requested_after);

        // Remainder days expiring on March 31 only stretch the pool as far
        // as consumption before April actually reaches into them.
        let usable_remainder = if account.remaining_days_expire {
            account.remaining_vacation_days.min(used_before)
        } else {
            account.remaining_vacation_days
        };

        let available = round_days(actual_days + usable_remainder);
        let total = round_days(used_before + used_after);

        debug!(
            login = %person.login_name,
            year,
            %used_before,
            %used_after,
            %available,
            "evaluated entitlement year"
        );

        Ok(total <= available)
    }

    /// The candidate's own day count for the part of it inside the window.
    fn candidate_days(
        &self,
        candidate: &Application,
        window: &MilestoneWindow,
    ) -> EngineResult<Decimal> {
        let Some((start, end)) = window.clip(candidate.start_date, candidate.end_date) else {
            return Ok(Decimal::ZERO);
        };

        if start == candidate.start_date && end == candidate.end_date {
            if let Some(days) = candidate.days {
                return Ok(days);
            }
        }

        self.calculator
            .days_between(start, end, candidate.day_length, &candidate.person)
    }
}
