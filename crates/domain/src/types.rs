// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month, Weekday};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Opaque stable employee identifier.
///
/// Serialized transparently so it can key JSON maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new `EmployeeId`. Surrounding whitespace is stripped.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member of the roster.
///
/// Employees are created and edited externally; the scheduling engine only
/// reads the active members and the designated administrator for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable identifier.
    pub id: EmployeeId,
    /// Display name (informational, not unique).
    pub name: String,
    /// Whether the employee is currently on the roster at all.
    #[serde(default = "Employee::default_active")]
    pub is_active: bool,
    /// First day of employment, if bounded.
    #[serde(default, with = "iso_date::option")]
    pub start_date: Option<Date>,
    /// Last day of employment, if bounded.
    #[serde(default, with = "iso_date::option")]
    pub end_date: Option<Date>,
}

impl Employee {
    /// Creates a new active employee with an unbounded activity window.
    #[must_use]
    pub fn new(id: EmployeeId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            is_active: true,
            start_date: None,
            end_date: None,
        }
    }

    const fn default_active() -> bool {
        true
    }

    /// Returns whether the employee is active during any part of the month.
    ///
    /// An employee is active when the active flag is set and the activity
    /// window overlaps the month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month key cannot be resolved to calendar dates.
    pub fn is_active_during(&self, key: MonthKey) -> Result<bool, DomainError> {
        if !self.is_active {
            return Ok(false);
        }
        let first = key.date(1)?;
        let last = key.date(key.days_in_month())?;
        if self.start_date.is_some_and(|start| start > last) {
            return Ok(false);
        }
        if self.end_date.is_some_and(|end| end < first) {
            return Ok(false);
        }
        Ok(true)
    }
}

/// Identifies one calendar month.
///
/// Construction validates the year and month, so every `MonthKey` in
/// circulation refers to a real month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    year: u16,
    month: u8,
}

impl MonthKey {
    /// Creates a new `MonthKey`.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in 1..=12 or the year is outside
    /// 1900..=2200.
    pub fn new(year: u16, month: u8) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        if !(1900..=2200).contains(&year) {
            return Err(DomainError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month number (1..=12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the chronologically preceding month.
    #[must_use]
    pub const fn preceding(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn days_in_month(self) -> u8 {
        self.month_enum().length(i32::from(self.year))
    }

    /// Resolves a day number to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the day does not exist in this month.
    pub fn date(self, day: u8) -> Result<Date, DomainError> {
        Date::from_calendar_date(i32::from(self.year), self.month_enum(), day).map_err(|_| {
            DomainError::InvalidDay {
                day,
                days_in_month: self.days_in_month(),
            }
        })
    }

    /// Returns the weekday of a day number.
    ///
    /// # Errors
    ///
    /// Returns an error if the day does not exist in this month.
    pub fn weekday(self, day: u8) -> Result<Weekday, DomainError> {
        Ok(self.date(day)?.weekday())
    }

    fn month_enum(self) -> Month {
        // The month field is validated at construction.
        match self.month {
            1 => Month::January,
            2 => Month::February,
            3 => Month::March,
            4 => Month::April,
            5 => Month::May,
            6 => Month::June,
            7 => Month::July,
            8 => Month::August,
            9 => Month::September,
            10 => Month::October,
            11 => Month::November,
            _ => Month::December,
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
