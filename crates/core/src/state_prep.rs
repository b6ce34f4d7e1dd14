// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seeding of per-employee rotation state before a generation run.

use rota_domain::{
    CycleState, DayNumber, EmployeeId, RotationCursor, RotationState, Schedule, ShiftCode,
};
use std::collections::BTreeMap;

/// Where the rotation picks up from when a month is generated.
#[derive(Debug, Clone, Copy)]
pub enum PriorState<'a> {
    /// No usable history: every employee starts unseeded.
    None,
    /// The persisted cycle-state snapshot of the preceding month.
    Snapshot(&'a CycleState),
    /// The preceding month's locked schedule, scanned directly when no
    /// snapshot is available.
    Schedule {
        /// The preceding month's final schedule.
        schedule: &'a Schedule,
        /// Number of days in the preceding month.
        days_in_month: u8,
    },
}

/// Derives a rotation cursor from one employee's finished month row.
///
/// Scans backwards for the last rotational shift worked. The administrator
/// shift and rest-like cells are skipped, so an employee who only ever held
/// the administrator shift carries no cursor. `days_since_last_work` is
/// counted from the end of the month: `0` means the employee worked the final
/// day.
#[must_use]
pub fn cursor_from_schedule(
    row: &BTreeMap<DayNumber, ShiftCode>,
    days_in_month: u8,
) -> Option<RotationCursor> {
    let shift_on = |day: u8| row.get(&day).copied().unwrap_or(ShiftCode::Rest);

    let last_work_day = (1..=days_in_month)
        .rev()
        .find(|day| shift_on(*day).is_rotational())?;
    let last_shift = shift_on(last_work_day);

    let mut run_start = last_work_day;
    while run_start > 1 && shift_on(run_start - 1) == last_shift {
        run_start -= 1;
    }

    Some(RotationCursor {
        last_shift,
        days_since_last_work: u32::from(days_in_month - last_work_day),
        consecutive_same_shift: u32::from(last_work_day - run_start + 1),
    })
}

/// Builds the initial rotation state for every rotational employee.
///
/// Employees without a cursor in the prior state start unseeded.
#[must_use]
pub fn initial_states<'a, I>(rotational: I, prior: &PriorState<'_>) -> BTreeMap<EmployeeId, RotationState>
where
    I: IntoIterator<Item = &'a EmployeeId>,
{
    rotational
        .into_iter()
        .map(|id| {
            let state = match prior {
                PriorState::None => RotationState::unseeded(id),
                PriorState::Snapshot(cursors) => cursors
                    .get(id)
                    .map_or_else(|| RotationState::unseeded(id), RotationState::from_cursor),
                PriorState::Schedule {
                    schedule,
                    days_in_month,
                } => schedule
                    .get(id)
                    .and_then(|row| cursor_from_schedule(row, *days_in_month))
                    .map_or_else(
                        || RotationState::unseeded(id),
                        |cursor| RotationState::from_cursor(&cursor),
                    ),
            };
            (id.clone(), state)
        })
        .collect()
}
