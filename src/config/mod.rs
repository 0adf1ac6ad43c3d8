//! Calendar configuration for the vacation day calculation engine.
//!
//! This module provides functionality to load region calendar configuration
//! from YAML files: weekend weekdays and public-holiday rules per region.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::CalendarLoader;
//!
//! let loader = CalendarLoader::load("./config/holidays").unwrap();
//! println!("Loaded regions: {:?}", loader.region_codes());
//! ```

mod loader;
mod types;

pub use loader::CalendarLoader;
pub use types::{HolidayRule, RegionConfig, WeekdayName};
