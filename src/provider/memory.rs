//! In-memory reference implementations of the data capabilities.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Account, Application, ApplicationStatus, Person, VacationType};

use super::{AccountSource, ApplicationSource};

/// Vector-backed [`ApplicationSource`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::models::{Application, ApplicationStatus, DayLength, Person, VacationType};
/// use leave_engine::provider::{ApplicationSource, InMemoryApplicationSource};
///
/// let person = Person::new("horscht");
/// let mut source = InMemoryApplicationSource::new();
/// source.insert(Application::new(
///     person.clone(),
///     NaiveDate::from_ymd_opt(2012, 3, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2012, 3, 16).unwrap(),
///     DayLength::Full,
///     VacationType::Holiday,
/// ));
///
/// let window_start = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
/// let window_end = NaiveDate::from_ymd_opt(2012, 3, 31).unwrap();
/// let inside = source
///     .applications_between(
///         &person,
///         window_start,
///         window_end,
///         VacationType::Holiday,
///         &[ApplicationStatus::Waiting, ApplicationStatus::Allowed],
///     )
///     .unwrap();
/// assert_eq!(inside.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryApplicationSource {
    applications: Vec<Application>,
}

impl InMemoryApplicationSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an application.
    pub fn insert(&mut self, application: Application) {
        self.applications.push(application);
    }

    fn matching<'a>(
        &'a self,
        person: &'a Person,
        vacation_type: VacationType,
        statuses: &'a [ApplicationStatus],
    ) -> impl Iterator<Item = &'a Application> {
        self.applications.iter().filter(move |application| {
            application.person == *person
                && application.vacation_type == vacation_type
                && statuses.contains(&application.status)
        })
    }
}

impl ApplicationSource for InMemoryApplicationSource {
    fn applications_between(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
        vacation_type: VacationType,
        statuses: &[ApplicationStatus],
    ) -> EngineResult<Vec<Application>> {
        Ok(self
            .matching(person, vacation_type, statuses)
            .filter(|a| a.start_date >= start && a.end_date <= end)
            .cloned()
            .collect())
    }

    fn applications_starting_before(
        &self,
        person: &Person,
        start: NaiveDate,
        _end: NaiveDate,
        vacation_type: VacationType,
        statuses: &[ApplicationStatus],
    ) -> EngineResult<Vec<Application>> {
        Ok(self
            .matching(person, vacation_type, statuses)
            .filter(|a| a.start_date < start && a.end_date >= start)
            .cloned()
            .collect())
    }

    fn applications_ending_after(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
        vacation_type: VacationType,
        statuses: &[ApplicationStatus],
    ) -> EngineResult<Vec<Application>> {
        Ok(self
            .matching(person, vacation_type, statuses)
            .filter(|a| a.end_date > end && a.start_date >= start && a.start_date <= end)
            .cloned()
            .collect())
    }
}

/// Map-backed [`AccountSource`] with lazy account creation.
///
/// Missing accounts are created on demand with the configured default
/// annual entitlement, no remainder, and expiring-remainder semantics.
/// Actual-vacation-day overrides can be registered per (year, person) to
/// emulate an external pro-ration policy.
#[derive(Debug)]
pub struct InMemoryAccountSource {
    default_annual_days: Decimal,
    accounts: Mutex<HashMap<(i32, Person), Account>>,
    actual_days: Mutex<HashMap<(i32, Person), Decimal>>,
}

impl InMemoryAccountSource {
    /// Creates a source that fabricates missing accounts with the given
    /// default annual entitlement.
    pub fn new(default_annual_days: Decimal) -> Self {
        Self {
            default_annual_days,
            accounts: Mutex::new(HashMap::new()),
            actual_days: Mutex::new(HashMap::new()),
        }
    }

    /// Registers (or replaces) an account.
    pub fn insert_account(&self, account: Account) {
        let key = (account.year(), account.person.clone());
        self.accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, account);
    }

    /// Overrides the actual available days for a (year, person).
    pub fn set_actual_vacation_days(&self, year: i32, person: &Person, days: Decimal) {
        self.actual_days
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((year, person.clone()), days);
    }
}

impl AccountSource for InMemoryAccountSource {
    fn get_or_create_account(&self, year: i32, person: &Person) -> EngineResult<Account> {
        let mut accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        let account = accounts
            .entry((year, person.clone()))
            .or_insert_with(|| {
                Account::for_year(
                    person.clone(),
                    year,
                    self.default_annual_days,
                    Decimal::ZERO,
                    true,
                )
            });
        Ok(account.clone())
    }

    fn actual_vacation_days(&self, account: &Account) -> EngineResult<Decimal> {
        let overrides = self
            .actual_days
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(overrides
            .get(&(account.year(), account.person.clone()))
            .copied()
            .unwrap_or(account.annual_vacation_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayLength;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holiday(person: &Person, start: &str, end: &str) -> Application {
        Application::new(
            person.clone(),
            make_date(start),
            make_date(end),
            DayLength::Full,
            VacationType::Holiday,
        )
    }

    const COUNTED: [ApplicationStatus; 2] =
        [ApplicationStatus::Waiting, ApplicationStatus::Allowed];

    fn window() -> (NaiveDate, NaiveDate) {
        (make_date("2012-01-01"), make_date("2012-03-31"))
    }

    #[test]
    fn test_queries_partition_applications_disjointly() {
        let person = Person::new("horscht");
        let mut source = InMemoryApplicationSource::new();
        // fully inside
        source.insert(holiday(&person, "2012-02-06", "2012-02-09"));
        // straddles the window start
        source.insert(holiday(&person, "2011-12-29", "2012-01-03"));
        // straddles the window end
        source.insert(holiday(&person, "2012-03-29", "2012-04-05"));
        // spans the entire window: belongs to "starting before" only
        source.insert(holiday(&person, "2011-12-20", "2012-04-10"));

        let (start, end) = window();
        let inside = source
            .applications_between(&person, start, end, VacationType::Holiday, &COUNTED)
            .unwrap();
        let before = source
            .applications_starting_before(&person, start, end, VacationType::Holiday, &COUNTED)
            .unwrap();
        let after = source
            .applications_ending_after(&person, start, end, VacationType::Holiday, &COUNTED)
            .unwrap();

        assert_eq!(inside.len(), 1);
        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 1);

        let mut ids: Vec<_> = inside
            .iter()
            .chain(before.iter())
            .chain(after.iter())
            .map(|a| a.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4, "no application may appear in two sets");
    }

    #[test]
    fn test_queries_filter_by_status_and_type() {
        let person = Person::new("horscht");
        let mut source = InMemoryApplicationSource::new();

        let mut rejected = holiday(&person, "2012-02-06", "2012-02-09");
        rejected.status = ApplicationStatus::Rejected;
        source.insert(rejected);

        let mut special = holiday(&person, "2012-02-13", "2012-02-14");
        special.vacation_type = VacationType::SpecialLeave;
        source.insert(special);

        let (start, end) = window();
        let inside = source
            .applications_between(&person, start, end, VacationType::Holiday, &COUNTED)
            .unwrap();
        assert!(inside.is_empty());
    }

    #[test]
    fn test_queries_filter_by_person() {
        let person = Person::new("horscht");
        let other = Person::new("berta");
        let mut source = InMemoryApplicationSource::new();
        source.insert(holiday(&other, "2012-02-06", "2012-02-09"));

        let (start, end) = window();
        let inside = source
            .applications_between(&person, start, end, VacationType::Holiday, &COUNTED)
            .unwrap();
        assert!(inside.is_empty());
    }

    #[test]
    fn test_account_is_created_lazily_with_defaults() {
        let person = Person::new("horscht");
        let source = InMemoryAccountSource::new(dec("28"));

        let account = source.get_or_create_account(2012, &person).unwrap();
        assert_eq!(account.annual_vacation_days, dec("28"));
        assert_eq!(account.remaining_vacation_days, Decimal::ZERO);
        assert!(account.remaining_days_expire);
        assert_eq!(account.year(), 2012);

        // the lazily created account is stable across calls
        let again = source.get_or_create_account(2012, &person).unwrap();
        assert_eq!(account, again);
    }

    #[test]
    fn test_registered_account_wins_over_lazy_creation() {
        let person = Person::new("horscht");
        let source = InMemoryAccountSource::new(dec("28"));
        source.insert_account(Account::for_year(
            person.clone(),
            2012,
            dec("20"),
            dec("4.5"),
            true,
        ));

        let account = source.get_or_create_account(2012, &person).unwrap();
        assert_eq!(account.annual_vacation_days, dec("20"));
        assert_eq!(account.remaining_vacation_days, dec("4.5"));
    }

    #[test]
    fn test_actual_days_default_to_entitlement() {
        let person = Person::new("horscht");
        let source = InMemoryAccountSource::new(dec("28"));
        let account = source.get_or_create_account(2012, &person).unwrap();

        assert_eq!(source.actual_vacation_days(&account).unwrap(), dec("28"));
    }

    #[test]
    fn test_actual_days_override() {
        let person = Person::new("horscht");
        let source = InMemoryAccountSource::new(dec("28"));
        let account = source.get_or_create_account(2012, &person).unwrap();
        source.set_actual_vacation_days(2012, &person, dec("14"));

        assert_eq!(source.actual_vacation_days(&account).unwrap(), dec("14"));
    }
}
