//! Core data models for the vacation day calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod account;
mod application;
mod person;

pub use account::Account;
pub use application::{Application, ApplicationStatus, DayLength, VacationType};
pub use person::Person;
