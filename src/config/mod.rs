//! Configuration loading for the working-time reconciliation engine.
//!
//! This module loads the agreement's static tables from YAML files: annual
//! hour ceilings, base salaries, public holidays, agreement days and salary
//! groups.
//!
//! # Example
//!
//! ```no_run
//! use workhours_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bizkaia_retail").unwrap();
//! println!("Loaded agreement: {}", config.agreement().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgreementConfig, AgreementDayRule, EngineConfig, FixedHoliday, HolidayConfig,
    PayslipYearWindow, SalarySubgroup, SalaryTables, SeniorityReduction, YearValue,
};
