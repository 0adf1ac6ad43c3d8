//! External data capabilities consumed by the calculation engine.
//!
//! The engine never talks to a database itself; it reads applications and
//! entitlement accounts through the [`ApplicationSource`] and
//! [`AccountSource`] traits. The full system implements them on top of its
//! persistence layer; [`InMemoryApplicationSource`] and
//! [`InMemoryAccountSource`] are the vector/map-backed reference
//! implementations, also used throughout the test suite.

pub mod memory;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Account, Application, ApplicationStatus, Person, VacationType};

pub use memory::{InMemoryAccountSource, InMemoryApplicationSource};

/// Query access to submitted leave applications.
///
/// The three query methods partition the applications of a person relative
/// to a window `[start, end]` into **disjoint** sets:
///
/// - *between*: `start_date >= start` and `end_date <= end`,
/// - *starting before*: `start_date < start` and `end_date >= start`
///   (whatever the end date — an application spanning the entire window
///   belongs here),
/// - *ending after*: `end_date > end` and `start_date` within the window.
///
/// Implementations only return applications matching the requested vacation
/// type and one of the requested statuses.
pub trait ApplicationSource {
    /// Applications lying fully inside `[start, end]`.
    fn applications_between(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
        vacation_type: VacationType,
        statuses: &[ApplicationStatus],
    ) -> EngineResult<Vec<Application>>;

    /// Applications starting strictly before `start` and reaching into the window.
    fn applications_starting_before(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
        vacation_type: VacationType,
        statuses: &[ApplicationStatus],
    ) -> EngineResult<Vec<Application>>;

    /// Applications starting inside the window and ending strictly after `end`.
    fn applications_ending_after(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
        vacation_type: VacationType,
        statuses: &[ApplicationStatus],
    ) -> EngineResult<Vec<Application>>;
}

/// Access to entitlement accounts.
pub trait AccountSource {
    /// Returns the person's account for the year, creating it if absent.
    ///
    /// Lazy creation is the source's responsibility; a year for which no
    /// account can be produced is a configuration error
    /// ([`EngineError::MissingAccount`](crate::error::EngineError::MissingAccount)).
    fn get_or_create_account(&self, year: i32, person: &Person) -> EngineResult<Account>;

    /// The actually available vacation days for an account.
    ///
    /// External accounting hook that may override the raw entitlement, for
    /// example pro-rating it for part-year employment. The default figure is
    /// the account's annual entitlement.
    fn actual_vacation_days(&self, account: &Account) -> EngineResult<Decimal>;
}
