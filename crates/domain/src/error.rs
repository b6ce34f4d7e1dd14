// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Month number is outside 1..=12.
    InvalidMonth(u8),
    /// Year is outside the supported calendar range.
    InvalidYear(u16),
    /// Day number does not exist in the given month.
    InvalidDay {
        /// The offending day number.
        day: u8,
        /// The number of days in the month.
        days_in_month: u8,
    },
    /// A shift code string could not be parsed.
    InvalidShiftCode(String),
    /// Employee identifier is empty or invalid.
    InvalidEmployeeId(String),
    /// Employee display name is empty or invalid.
    InvalidEmployeeName(String),
    /// An employee's activity window is inverted (end before start).
    InvalidActivityWindow {
        /// The employee whose window is invalid.
        employee_id: String,
    },
    /// Date construction or arithmetic failed.
    DateOutOfRange {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidYear(year) => {
                write!(f, "Invalid year: {year}. Must be between 1900 and 2200")
            }
            Self::InvalidDay { day, days_in_month } => {
                write!(
                    f,
                    "Invalid day: {day}. Must be between 1 and {days_in_month}"
                )
            }
            Self::InvalidShiftCode(code) => write!(f, "Unknown shift code: '{code}'"),
            Self::InvalidEmployeeId(msg) => write!(f, "Invalid employee id: {msg}"),
            Self::InvalidEmployeeName(msg) => write!(f, "Invalid employee name: {msg}"),
            Self::InvalidActivityWindow { employee_id } => {
                write!(
                    f,
                    "Employee '{employee_id}' has an end date before their start date"
                )
            }
            Self::DateOutOfRange { operation } => {
                write!(f, "Date out of range while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
