// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_domain::{DayNumber, DomainError, MonthKey, ShiftCode};

/// Errors that can occur while generating, validating, or locking a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// An operation's precondition does not hold.
    Precondition(String),
    /// Strict generation could not staff a required shift.
    Coverage {
        /// The day that could not be staffed.
        day: DayNumber,
        /// The shift that could not be staffed.
        shift: ShiftCode,
    },
    /// The month is locked and can no longer be modified.
    MonthLocked {
        /// The locked month.
        key: MonthKey,
    },
    /// The month before the one being generated has not been locked yet.
    PrecedingMonthNotLocked {
        /// The month that must be locked first.
        key: MonthKey,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Precondition(message) => write!(f, "Precondition failed: {message}"),
            Self::Coverage { day, shift } => {
                write!(f, "No eligible employee for the {shift} shift on day {day}")
            }
            Self::MonthLocked { key } => write!(f, "Month {key} is locked"),
            Self::PrecedingMonthNotLocked { key } => {
                write!(f, "Preceding month {key} must be locked first")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
