//! Leave application model and related types.
//!
//! This module defines the Application struct for representing requested
//! or decided leave intervals, together with the day-length, vacation-type
//! and status enums that classify them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Person;

/// Whether a leave day covers a full day or only half of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLength {
    /// Whole working days.
    Full,
    /// Only the morning of each day.
    Morning,
    /// Only the afternoon of each day.
    Afternoon,
}

impl DayLength {
    /// Returns true for the half-day variants.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::DayLength;
    ///
    /// assert!(!DayLength::Full.is_half());
    /// assert!(DayLength::Morning.is_half());
    /// assert!(DayLength::Afternoon.is_half());
    /// ```
    pub fn is_half(&self) -> bool {
        matches!(self, DayLength::Morning | DayLength::Afternoon)
    }
}

/// The kind of leave an application asks for.
///
/// Only [`VacationType::Holiday`] applications are counted against the
/// entitlement account; the other kinds are tracked by the surrounding
/// application but ignored by the calculation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationType {
    /// Regular recreational leave, deducted from the entitlement.
    Holiday,
    /// Special leave (wedding, bereavement, relocation).
    SpecialLeave,
    /// Unpaid leave.
    UnpaidLeave,
    /// Compensation for accumulated overtime.
    Overtime,
}

/// The decision state of a leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted and awaiting a decision. Counts as consumed.
    Waiting,
    /// Approved. Counts as consumed.
    Allowed,
    /// Declined by the approver.
    Rejected,
    /// Withdrawn by the applicant.
    Cancelled,
}

/// A requested or decided leave interval.
///
/// Applications are created by the submission workflow outside the engine;
/// the engine only reads them. The `days` field caches the day count the
/// interval was worth when it was decided — when present it is trusted for
/// applications lying fully inside an aggregation window, otherwise the day
/// count is recomputed from the interval.
///
/// Invariant: `start_date <= end_date`. Violations surface as
/// [`EngineError::InvalidDateRange`](crate::error::EngineError::InvalidDateRange)
/// as soon as a day count is computed over the interval.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::models::{Application, DayLength, Person, VacationType};
///
/// let application = Application::new(
///     Person::new("horscht"),
///     NaiveDate::from_ymd_opt(2012, 3, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2012, 3, 16).unwrap(),
///     DayLength::Full,
///     VacationType::Holiday,
/// );
/// assert!(application.days.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Unique identifier for the application.
    pub id: Uuid,
    /// The person the leave is requested for.
    pub person: Person,
    /// First day of the leave interval (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave interval (inclusive).
    pub end_date: NaiveDate,
    /// Whether each day is taken fully or as a half day.
    pub day_length: DayLength,
    /// The kind of leave requested.
    pub vacation_type: VacationType,
    /// The decision state of the application.
    pub status: ApplicationStatus,
    /// Cached day count, set once the interval has been evaluated.
    #[serde(default)]
    pub days: Option<Decimal>,
}

impl Application {
    /// Creates a new waiting application with a fresh id and no cached day count.
    pub fn new(
        person: Person,
        start_date: NaiveDate,
        end_date: NaiveDate,
        day_length: DayLength,
        vacation_type: VacationType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person,
            start_date,
            end_date,
            day_length,
            vacation_type,
            status: ApplicationStatus::Waiting,
            days: None,
        }
    }
}
