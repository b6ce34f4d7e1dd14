// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-month schedule validation.
//!
//! Validation never mutates and never short-circuits: every finding is
//! reported so an administrator can fix a month in one pass. Rotation and
//! administrator findings are advisory; coverage gaps block locking.

use rota_domain::{
    DayNumber, EmployeeId, MonthCalendar, RotationPolicy, Schedule, ShiftCode,
    UNSEEDED_DAYS_SINCE, is_transition_allowed,
};
use serde::Serialize;

/// Rule identifier for rotation-rest findings.
pub const RULE_ROTATION: &str = "ROTATION";
/// Rule identifier for administrator-shift findings.
pub const RULE_ADMIN: &str = "ADMIN";
/// Rule identifier for daily coverage findings.
pub const RULE_COVERAGE: &str = "COVERAGE";

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Advisory; the month can still be locked.
    Soft,
    /// The month cannot be locked while this finding stands.
    Blocking,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The employee concerned, if the finding is about one employee.
    pub employee: Option<EmployeeId>,
    /// The day the finding is anchored to.
    pub day: DayNumber,
    /// Stable rule identifier.
    pub rule: &'static str,
    /// Human-readable description.
    pub message: String,
    /// Whether the finding blocks locking.
    pub severity: Severity,
}

/// Returns whether any finding blocks locking.
#[must_use]
pub fn has_blocking(violations: &[Violation]) -> bool {
    violations
        .iter()
        .any(|violation| violation.severity == Severity::Blocking)
}

/// Validates a whole month.
///
/// Two passes. The first replays each employee's row against the rotation
/// gate and checks that the administrator shift stays with the administrator
/// on business days. The second counts daily coverage: every day needs
/// exactly one day-class assignment (day shift or administrator), one
/// evening, and one night.
///
/// With `relaxed` set the rotation replay enforces only the hard rest
/// floors, so merely sub-optimal sequences pass; with it clear, shortfalls
/// against the preferred rest thresholds are reported as soft findings too.
#[must_use]
pub fn validate_schedule(
    calendar: &MonthCalendar,
    schedule: &Schedule,
    admin_id: &EmployeeId,
    policy: &RotationPolicy,
    relaxed: bool,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (employee, row) in schedule {
        if employee == admin_id {
            check_admin_row(calendar, employee, row, &mut violations);
        } else {
            check_rotation_row(calendar, employee, row, policy, relaxed, &mut violations);
        }
    }

    check_coverage(calendar, schedule, &mut violations);
    violations
}

fn shift_on(row: &std::collections::BTreeMap<DayNumber, ShiftCode>, day: u8) -> ShiftCode {
    row.get(&day).copied().unwrap_or(ShiftCode::Rest)
}

fn check_admin_row(
    calendar: &MonthCalendar,
    employee: &EmployeeId,
    row: &std::collections::BTreeMap<DayNumber, ShiftCode>,
    violations: &mut Vec<Violation>,
) {
    for day in 1..=calendar.days_in_month() {
        let shift = shift_on(row, day);
        match shift {
            ShiftCode::Admin => {
                if !calendar.is_business_day(day) {
                    violations.push(Violation {
                        employee: Some(employee.clone()),
                        day,
                        rule: RULE_ADMIN,
                        message: format!(
                            "Administrator {employee} is scheduled on non-business day {day}"
                        ),
                        severity: Severity::Soft,
                    });
                }
            }
            ShiftCode::Day | ShiftCode::Evening | ShiftCode::Night => {
                violations.push(Violation {
                    employee: Some(employee.clone()),
                    day,
                    rule: RULE_ADMIN,
                    message: format!(
                        "Administrator {employee} holds the rotational {shift} shift on day {day}"
                    ),
                    severity: Severity::Soft,
                });
            }
            ShiftCode::Rest | ShiftCode::Vacation | ShiftCode::Sick => {}
        }
    }
}

fn check_rotation_row(
    calendar: &MonthCalendar,
    employee: &EmployeeId,
    row: &std::collections::BTreeMap<DayNumber, ShiftCode>,
    policy: &RotationPolicy,
    relaxed: bool,
    violations: &mut Vec<Violation>,
) {
    let mut last_shift: Option<ShiftCode> = None;
    let mut last_work_day: Option<u8> = None;

    for day in 1..=calendar.days_in_month() {
        let shift = shift_on(row, day);
        if !shift.is_working() {
            continue;
        }

        if shift == ShiftCode::Admin {
            violations.push(Violation {
                employee: Some(employee.clone()),
                day,
                rule: RULE_ADMIN,
                message: format!(
                    "{employee} holds the administrator shift on day {day} but is not the administrator"
                ),
                severity: Severity::Soft,
            });
        } else {
            let days_since = last_work_day
                .map_or(UNSEEDED_DAYS_SINCE, |last| u32::from(day - last));
            if !is_transition_allowed(last_shift, days_since, shift, relaxed, policy) {
                let prev = last_shift.map_or_else(|| String::from("rest"), |s| s.to_string());
                violations.push(Violation {
                    employee: Some(employee.clone()),
                    day,
                    rule: RULE_ROTATION,
                    message: format!(
                        "{employee} takes a {shift} shift on day {day} too soon after a {prev} shift"
                    ),
                    severity: Severity::Soft,
                });
            }
        }

        last_shift = Some(shift);
        last_work_day = Some(day);
    }
}

fn check_coverage(calendar: &MonthCalendar, schedule: &Schedule, violations: &mut Vec<Violation>) {
    for day in 1..=calendar.days_in_month() {
        let mut day_class = 0_u32;
        let mut evening = 0_u32;
        let mut night = 0_u32;
        for row in schedule.values() {
            match shift_on(row, day) {
                ShiftCode::Day | ShiftCode::Admin => day_class += 1,
                ShiftCode::Evening => evening += 1,
                ShiftCode::Night => night += 1,
                ShiftCode::Rest | ShiftCode::Vacation | ShiftCode::Sick => {}
            }
        }

        for (label, count) in [
            ("day-class", day_class),
            ("evening", evening),
            ("night", night),
        ] {
            if count != 1 {
                violations.push(Violation {
                    employee: None,
                    day,
                    rule: RULE_COVERAGE,
                    message: format!(
                        "Day {day} has {count} {label} assignments, expected exactly one"
                    ),
                    severity: Severity::Blocking,
                });
            }
        }
    }
}
