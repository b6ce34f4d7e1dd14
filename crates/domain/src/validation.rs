// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Employee, MonthKey};

/// Validates an employee's basic field constraints.
///
/// # Errors
///
/// Returns an error if the id or name is empty, or if the activity window is
/// inverted.
pub fn validate_employee(employee: &Employee) -> Result<(), DomainError> {
    if employee.id.is_empty() {
        return Err(DomainError::InvalidEmployeeId(String::from(
            "Employee id cannot be empty",
        )));
    }

    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeName(String::from(
            "Employee name cannot be empty",
        )));
    }

    if let (Some(start), Some(end)) = (employee.start_date, employee.end_date)
        && end < start
    {
        return Err(DomainError::InvalidActivityWindow {
            employee_id: employee.id.as_str().to_string(),
        });
    }

    Ok(())
}

/// Validates that a day number exists in a month.
///
/// # Errors
///
/// Returns an error if the day is zero or past the end of the month.
pub fn validate_day_number(key: MonthKey, day: u8) -> Result<(), DomainError> {
    let days_in_month = key.days_in_month();
    if day == 0 || day > days_in_month {
        return Err(DomainError::InvalidDay { day, days_in_month });
    }
    Ok(())
}
