//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the agreement's
//! static tables from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryGroup;

use super::types::{AgreementConfig, EngineConfig, HolidayConfig, SalaryTables, YearValue};

const AGREEMENT_FILE: &str = "agreement.yaml";
const HOLIDAYS_FILE: &str = "holidays.yaml";
const SALARY_TABLES_FILE: &str = "salary_tables.yaml";

const BUNDLED_AGREEMENT: &str = include_str!("../../config/bizkaia_retail/agreement.yaml");
const BUNDLED_HOLIDAYS: &str = include_str!("../../config/bizkaia_retail/holidays.yaml");
const BUNDLED_SALARY_TABLES: &str = include_str!("../../config/bizkaia_retail/salary_tables.yaml");

/// Loads and provides access to the agreement's static tables.
///
/// # Directory Structure
///
/// ```text
/// config/bizkaia_retail/
/// ├── agreement.yaml      # Ceilings, salaries, seniority rule, agreement days
/// ├── holidays.yaml       # Fixed holidays and exact per-year lists
/// └── salary_tables.yaml  # Salary groups and yearly revision factors
/// ```
///
/// # Example
///
/// ```no_run
/// use workhours_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bizkaia_retail").unwrap();
/// let ceiling = loader.annual_ceiling(2025);
/// println!("2025 ceiling: {} h", ceiling.value);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let agreement = Self::load_yaml::<AgreementConfig>(&path.join(AGREEMENT_FILE))?;
        let holidays = Self::load_yaml::<HolidayConfig>(&path.join(HOLIDAYS_FILE))?;
        let salaries = Self::load_yaml::<SalaryTables>(&path.join(SALARY_TABLES_FILE))?;

        Ok(Self {
            config: EngineConfig::new(agreement, holidays, salaries),
        })
    }

    /// Loads the tables compiled into the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use workhours_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::bundled()?;
    /// assert_eq!(loader.agreement().region, "bizkaia");
    /// # Ok::<(), workhours_engine::error::EngineError>(())
    /// ```
    pub fn bundled() -> EngineResult<Self> {
        let agreement = Self::parse_yaml::<AgreementConfig>(BUNDLED_AGREEMENT, AGREEMENT_FILE)?;
        let holidays = Self::parse_yaml::<HolidayConfig>(BUNDLED_HOLIDAYS, HOLIDAYS_FILE)?;
        let salaries =
            Self::parse_yaml::<SalaryTables>(BUNDLED_SALARY_TABLES, SALARY_TABLES_FILE)?;

        Ok(Self {
            config: EngineConfig::new(agreement, holidays, salaries),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the agreement configuration.
    pub fn agreement(&self) -> &AgreementConfig {
        self.config.agreement()
    }

    /// Gets the full-time annual hour ceiling for a year.
    ///
    /// Falls back to the configured default ceiling when the year is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use workhours_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::bundled()?;
    /// assert_eq!(loader.annual_ceiling(2025).value, Decimal::from(1780));
    /// assert!(loader.annual_ceiling(1999).is_default);
    /// # Ok::<(), workhours_engine::error::EngineError>(())
    /// ```
    pub fn annual_ceiling(&self, year: i32) -> YearValue {
        let agreement = self.agreement();
        match agreement.ceilings.get(&year) {
            Some(value) => YearValue {
                value: *value,
                is_default: false,
            },
            None => {
                warn!(
                    year,
                    default = %agreement.default_ceiling,
                    "No annual ceiling configured for year, using default"
                );
                YearValue {
                    value: agreement.default_ceiling,
                    is_default: true,
                }
            }
        }
    }

    /// Gets the annual base salary for a year.
    ///
    /// Falls back to the configured default salary when the year is unknown.
    pub fn base_salary(&self, year: i32) -> YearValue {
        let agreement = self.agreement();
        match agreement.base_salaries.get(&year) {
            Some(value) => YearValue {
                value: *value,
                is_default: false,
            },
            None => {
                warn!(
                    year,
                    default = %agreement.default_base_salary,
                    "No base salary configured for year, using default"
                );
                YearValue {
                    value: agreement.default_base_salary,
                    is_default: true,
                }
            }
        }
    }

    /// Gets the salary revision factor for a year, 1 when the year is unknown.
    pub fn revision_factor(&self, year: i32) -> Decimal {
        match self.config.salaries().revision_factors.get(&year) {
            Some(factor) => *factor,
            None => {
                warn!(year, "No salary revision factor for year, using 1");
                Decimal::ONE
            }
        }
    }

    /// Gets the reference-year monthly base of a salary group.
    ///
    /// The group's first trade is the representative one.
    pub fn group_monthly_base(&self, group: SalaryGroup) -> Option<Decimal> {
        self.config
            .salaries()
            .groups
            .get(&group)
            .and_then(|trades| trades.first())
            .map(|t| t.monthly_base)
    }
}
