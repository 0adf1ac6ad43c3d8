//! Entitlement account model.
//!
//! This module defines the Account struct holding a person's vacation day
//! entitlement for one calendar year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_days;

use super::Person;

/// A person's vacation day entitlement for one calendar year.
///
/// One account exists per (person, year); the account lookup collaborator
/// creates it lazily the first time it is needed. The engine treats an
/// account as immutable input: consumed days are derived from applications,
/// never written back here.
///
/// `remaining_vacation_days` is the remainder carried over from the prior
/// year. When `remaining_days_expire` is set, remainder days not consumed
/// by March 31 are lost.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Account, Person};
/// use rust_decimal::Decimal;
///
/// let account = Account::for_year(
///     Person::new("horscht"),
///     2012,
///     Decimal::from(28),
///     Decimal::from(5),
///     true,
/// );
/// assert_eq!(account.year(), 2012);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The person the entitlement belongs to.
    pub person: Person,
    /// First day of the account's validity (normally January 1).
    pub valid_from: NaiveDate,
    /// Last day of the account's validity (normally December 31).
    pub valid_to: NaiveDate,
    /// Annual vacation day entitlement, scale 2.
    pub annual_vacation_days: Decimal,
    /// Unused days carried over from the prior year, scale 2.
    pub remaining_vacation_days: Decimal,
    /// Whether the carried-over days expire after March 31.
    pub remaining_days_expire: bool,
}

impl Account {
    /// Creates an account, normalizing the day figures to scale 2.
    pub fn new(
        person: Person,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
        annual_vacation_days: Decimal,
        remaining_vacation_days: Decimal,
        remaining_days_expire: bool,
    ) -> Self {
        Self {
            person,
            valid_from,
            valid_to,
            annual_vacation_days: round_days(annual_vacation_days),
            remaining_vacation_days: round_days(remaining_vacation_days),
            remaining_days_expire,
        }
    }

    /// Creates an account valid for the whole of the given calendar year.
    pub fn for_year(
        person: Person,
        year: i32,
        annual_vacation_days: Decimal,
        remaining_vacation_days: Decimal,
        remaining_days_expire: bool,
    ) -> Self {
        let valid_from = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid calendar date");
        let valid_to = NaiveDate::from_ymd_opt(year, 12, 31).expect("valid calendar date");
        Self::new(
            person,
            valid_from,
            valid_to,
            annual_vacation_days,
            remaining_vacation_days,
            remaining_days_expire,
        )
    }

    /// The calendar year this account covers.
    pub fn year(&self) -> i32 {
        self.valid_from.year()
    }
}
