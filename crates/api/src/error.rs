// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service boundary.

use rota_core::CoreError;
use rota_domain::DomainError;
use rota_storage::StorageError;

/// Result alias for service operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Service-level errors.
///
/// These are distinct from domain/core errors and represent the service
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A scheduling rule or operation precondition was violated.
    RuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The month is locked and can no longer be modified.
    MonthLocked {
        /// The locked month, formatted `YYYY-MM`.
        month: String,
    },
    /// The month before the requested one has not been locked yet.
    PrecedingMonthNotLocked {
        /// The month that must be locked first, formatted `YYYY-MM`.
        month: String,
    },
    /// Strict generation could not staff a required shift.
    CoverageGap {
        /// The day that could not be staffed.
        day: u8,
        /// The shift that could not be staffed.
        shift: String,
    },
    /// The storage layer failed.
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::RuleViolation { rule, message } => {
                write!(f, "Rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::MonthLocked { month } => write!(f, "Month {month} is locked"),
            Self::PrecedingMonthNotLocked { month } => {
                write!(f, "Preceding month {month} must be locked first")
            }
            Self::CoverageGap { day, shift } => {
                write!(f, "No eligible employee for the {shift} shift on day {day}")
            }
            Self::Storage { message } => write!(f, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into a service error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidMonth(month) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("{month} is not a calendar month"),
        },
        DomainError::InvalidYear(year) => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("{year} is outside the supported range"),
        },
        DomainError::InvalidDay { day, days_in_month } => ApiError::InvalidInput {
            field: String::from("day"),
            message: format!("Day {day} does not exist in a {days_in_month}-day month"),
        },
        DomainError::InvalidShiftCode(code) => ApiError::InvalidInput {
            field: String::from("shift"),
            message: format!("'{code}' is not a shift code"),
        },
        DomainError::InvalidEmployeeId(message) => ApiError::InvalidInput {
            field: String::from("employee_id"),
            message,
        },
        DomainError::InvalidEmployeeName(message) => ApiError::InvalidInput {
            field: String::from("name"),
            message,
        },
        DomainError::InvalidActivityWindow { employee_id } => ApiError::InvalidInput {
            field: String::from("activity_window"),
            message: format!("Employee {employee_id} ends before they start"),
        },
        DomainError::DateOutOfRange { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date out of range while {operation}"),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(inner) => translate_domain_error(inner),
            CoreError::Precondition(message) => Self::RuleViolation {
                rule: String::from("precondition"),
                message,
            },
            CoreError::Coverage { day, shift } => Self::CoverageGap {
                day,
                shift: shift.to_string(),
            },
            CoreError::MonthLocked { key } => Self::MonthLocked {
                month: key.to_string(),
            },
            CoreError::PrecedingMonthNotLocked { key } => Self::PrecedingMonthNotLocked {
                month: key.to_string(),
            },
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}
