//! Data source identifiers
//!
//! A data source names one underlying record collection a report can target.
//! The set is fixed at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{CatalogError, CatalogResult};

/// Record collections a report can be built against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Employee master records
    Employees,
    /// Payroll entries
    Payroll,
    /// Recruitment candidates
    Recruitment,
    /// Attendance entries
    Attendance,
}

impl DataSource {
    /// All sources, in catalog order
    pub const ALL: [DataSource; 4] = [
        DataSource::Employees,
        DataSource::Payroll,
        DataSource::Recruitment,
        DataSource::Attendance,
    ];

    /// Returns the wire/file tag for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Employees => "employees",
            DataSource::Payroll => "payroll",
            DataSource::Recruitment => "recruitment",
            DataSource::Attendance => "attendance",
        }
    }

    /// Parses a source tag from the boundary.
    ///
    /// Tags are lowercase. Unknown tags are rejected, never coerced.
    pub fn parse(tag: &str) -> CatalogResult<Self> {
        match tag {
            "employees" => Ok(DataSource::Employees),
            "payroll" => Ok(DataSource::Payroll),
            "recruitment" => Ok(DataSource::Recruitment),
            "attendance" => Ok(DataSource::Attendance),
            other => Err(CatalogError::UnknownDataSource(other.to_string())),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::error::Error for DataSource {}
