// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The roster source.
//!
//! Employee administration happens outside this system; the scheduler only
//! needs to know who is active for a given month. [`StaticDirectory`] serves
//! a fixed roster, typically loaded from a JSON file next to the data
//! directory.

use crate::error::ApiResult;
use rota_domain::{Employee, MonthKey, validate_employee};
use std::path::Path;
use thiserror::Error;

/// Source of the employee roster.
pub trait EmployeeDirectory {
    /// Returns the employees active during any part of the month.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be resolved for the month.
    fn active_for_month(&self, key: MonthKey) -> ApiResult<Vec<Employee>>;
}

/// Errors raised while loading a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("Cannot read roster file {path}: {source}")]
    Read {
        /// The file that could not be read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The roster file could not be parsed.
    #[error("Cannot parse roster file {path}: {source}")]
    Parse {
        /// The file that could not be parsed.
        path: String,
        /// The underlying decode error.
        source: serde_json::Error,
    },
    /// A roster entry failed validation.
    #[error("Invalid roster entry: {0}")]
    InvalidEntry(#[from] rota_domain::DomainError),
}

/// [`EmployeeDirectory`] over a fixed, pre-validated roster.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    employees: Vec<Employee>,
}

impl StaticDirectory {
    /// Creates a directory from an in-memory roster.
    #[must_use]
    pub const fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Loads and validates a roster from a JSON file holding an array of
    /// employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// entry fails validation.
    pub fn from_json_file(path: &Path) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let employees: Vec<Employee> =
            serde_json::from_str(&contents).map_err(|source| RosterError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        for employee in &employees {
            validate_employee(employee)?;
        }
        Ok(Self::new(employees))
    }
}

impl EmployeeDirectory for StaticDirectory {
    fn active_for_month(&self, key: MonthKey) -> ApiResult<Vec<Employee>> {
        let mut active = Vec::new();
        for employee in &self.employees {
            if employee.is_active_during(key)? {
                active.push(employee.clone());
            }
        }
        Ok(active)
    }
}
