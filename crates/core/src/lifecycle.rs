// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The month lifecycle: open for editing, then locked for good.
//!
//! Locking is the only transition. It bakes the override layer into the
//! schedule, derives the cycle-state snapshot the next month will start
//! from, and is refused while any blocking finding stands. There is no
//! unlock.

use crate::error::CoreError;
use crate::overrides::apply_overrides;
use crate::state_prep::cursor_from_schedule;
use crate::validator::{Violation, has_blocking, validate_schedule};
use rota_domain::{
    CycleState, CycleStateRecord, EmployeeId, MonthCalendar, MonthKey, MonthRecord, Overrides,
    RotationPolicy, Schedule,
};

/// What locking a month produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    /// The month was locked.
    Locked {
        /// The locked record, overrides baked in and cleared.
        record: MonthRecord,
        /// The snapshot the following month starts from.
        cycle_state: CycleStateRecord,
        /// Advisory findings that did not prevent the lock.
        soft_violations: Vec<Violation>,
    },
    /// The month was left untouched because blocking findings stand.
    Refused {
        /// All findings, blocking ones included.
        violations: Vec<Violation>,
    },
}

/// Ensures a month can still be edited.
///
/// # Errors
///
/// Returns an error if the month is locked.
pub const fn ensure_open(record: &MonthRecord) -> Result<(), CoreError> {
    if record.ui_locked {
        return Err(CoreError::MonthLocked { key: record.key });
    }
    Ok(())
}

/// Locks a month.
///
/// The effective schedule (generated cells with overrides applied) is
/// validated first. Blocking findings refuse the lock and leave the record
/// untouched; the refusal is an outcome, not an error. On success the
/// returned record carries the effective schedule with the override layer
/// emptied, both lock flags set, and the derived cycle-state snapshot rides
/// along for persistence.
///
/// # Errors
///
/// Returns an error if the month is already locked or has no administrator
/// assigned.
pub fn lock_month(
    record: &MonthRecord,
    calendar: &MonthCalendar,
    policy: &RotationPolicy,
) -> Result<LockOutcome, CoreError> {
    ensure_open(record)?;
    let admin_id = record.month_admin_id.as_ref().ok_or_else(|| {
        CoreError::Precondition(format!(
            "Month {} has no administrator assigned",
            record.key
        ))
    })?;

    let effective = apply_overrides(&record.schedule, &record.overrides);
    let violations = validate_schedule(calendar, &effective, admin_id, policy, true);
    if has_blocking(&violations) {
        return Ok(LockOutcome::Refused { violations });
    }

    let cycle_state = extract_cycle_state(
        &effective,
        calendar.days_in_month(),
        admin_id,
        record.key,
    );
    let locked = MonthRecord {
        key: record.key,
        schedule: effective,
        overrides: Overrides::default(),
        month_admin_id: record.month_admin_id.clone(),
        generator_locked: true,
        ui_locked: true,
    };

    Ok(LockOutcome::Locked {
        record: locked,
        cycle_state,
        soft_violations: violations,
    })
}

/// Derives the cycle-state snapshot from a finished schedule.
///
/// The administrator carries no cursor; neither does anyone who never worked
/// a rotational shift in the month.
#[must_use]
pub fn extract_cycle_state(
    schedule: &Schedule,
    days_in_month: u8,
    admin_id: &EmployeeId,
    derived_from: MonthKey,
) -> CycleStateRecord {
    let cursors: CycleState = schedule
        .iter()
        .filter(|(id, _)| *id != admin_id)
        .filter_map(|(id, row)| {
            cursor_from_schedule(row, days_in_month).map(|cursor| (id.clone(), cursor))
        })
        .collect();
    CycleStateRecord {
        derived_from,
        cursors,
    }
}

/// Recomputes the cycle-state snapshot for a month whose snapshot was lost
/// or never written.
///
/// Recovery only: the record's schedule, overrides, and lock flags are left
/// exactly as they are.
///
/// # Errors
///
/// Returns an error if the month has no administrator assigned.
pub fn accept_as_baseline(
    record: &MonthRecord,
    calendar: &MonthCalendar,
) -> Result<CycleStateRecord, CoreError> {
    let admin_id = record.month_admin_id.as_ref().ok_or_else(|| {
        CoreError::Precondition(format!(
            "Month {} has no administrator assigned",
            record.key
        ))
    })?;
    let effective = apply_overrides(&record.schedule, &record.overrides);
    Ok(extract_cycle_state(
        &effective,
        calendar.days_in_month(),
        admin_id,
        record.key,
    ))
}
