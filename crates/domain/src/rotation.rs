// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rules::preferred_next_shift;
use crate::shift::ShiftCode;
use crate::types::{EmployeeId, MonthKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel for employees with no recorded work history. Large enough to
/// satisfy every rest threshold.
pub const UNSEEDED_DAYS_SINCE: u32 = 999;

/// Per-employee rotation bookkeeping during one generation run.
///
/// Initialized once per month from prior history (or unseeded), mutated once
/// per day as shifts are assigned, and discarded at the end of generation
/// except for what survives as a [`RotationCursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    /// The last real shift worked, if any.
    pub last_shift: Option<ShiftCode>,
    /// Days since the last real shift; see [`crate::RotationPolicy`] for the
    /// counting convention.
    pub days_since_last_work: u32,
    /// Length of the current run of identical shifts on consecutive days.
    pub consecutive_same_shift: u32,
    /// Workdays accumulated this month (business days only).
    pub total_workdays: u32,
    /// The shift the rotation pattern prefers next.
    pub preferred_next: Option<ShiftCode>,
}

impl RotationState {
    /// Creates an unseeded state for an employee with no history.
    ///
    /// The preferred shift is seeded deterministically from the identifier so
    /// that first runs are stable without any persisted state.
    #[must_use]
    pub fn unseeded(id: &EmployeeId) -> Self {
        Self {
            last_shift: None,
            days_since_last_work: UNSEEDED_DAYS_SINCE,
            consecutive_same_shift: 0,
            total_workdays: 0,
            preferred_next: Some(seed_shift(id)),
        }
    }

    /// Resumes a state from a persisted cursor.
    #[must_use]
    pub fn from_cursor(cursor: &RotationCursor) -> Self {
        Self {
            last_shift: Some(cursor.last_shift),
            days_since_last_work: cursor.days_since_last_work,
            consecutive_same_shift: cursor.consecutive_same_shift,
            total_workdays: 0,
            preferred_next: preferred_next_shift(Some(cursor.last_shift)),
        }
    }

    /// Advances the rest counter at the start of a new day.
    pub const fn advance_day(&mut self) {
        self.days_since_last_work = self.days_since_last_work.saturating_add(1);
    }

    /// Records a worked shift.
    ///
    /// The consecutive count resets to 1 whenever the shift changes and
    /// increments when it repeats; workdays count only when the day is a
    /// counted (business) day.
    pub fn record_working(&mut self, shift: ShiftCode, counted_workday: bool) {
        if self.last_shift == Some(shift) && self.days_since_last_work <= 1 {
            self.consecutive_same_shift += 1;
        } else {
            self.consecutive_same_shift = 1;
        }
        if counted_workday {
            self.total_workdays += 1;
        }
        self.days_since_last_work = 0;
        self.last_shift = Some(shift);
        self.preferred_next = preferred_next_shift(Some(shift));
    }

    /// Records a rest day: the current same-shift run is broken.
    pub const fn record_rest(&mut self) {
        self.consecutive_same_shift = 0;
    }

    /// Extracts the persistable cursor, if the employee ever worked.
    #[must_use]
    pub const fn cursor(&self) -> Option<RotationCursor> {
        match self.last_shift {
            Some(last_shift) => Some(RotationCursor {
                last_shift,
                days_since_last_work: self.days_since_last_work,
                consecutive_same_shift: self.consecutive_same_shift,
            }),
            None => None,
        }
    }
}

/// Deterministic starting preference for an unseeded employee.
///
/// A stable byte-sum hash spreads a fresh roster across the three rotational
/// shifts without any source of randomness.
#[must_use]
pub fn seed_shift(id: &EmployeeId) -> ShiftCode {
    let sum: u32 = id.as_str().bytes().map(u32::from).sum();
    match sum % 3 {
        0 => ShiftCode::Day,
        1 => ShiftCode::Evening,
        _ => ShiftCode::Night,
    }
}

/// One employee's position in the rotation, carried across a month boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationCursor {
    /// The last real shift worked in the source month.
    pub last_shift: ShiftCode,
    /// Rest days accumulated by the end of the source month.
    pub days_since_last_work: u32,
    /// The trailing run of identical shifts ending at the last worked day.
    pub consecutive_same_shift: u32,
}

/// Mapping of employee to rotation cursor.
pub type CycleState = BTreeMap<EmployeeId, RotationCursor>;

/// The persisted cycle-state snapshot.
///
/// Written exactly once when a month is locked (or re-derived by the
/// baseline-accept recovery path) and read exactly once, at the start of
/// generating the following month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStateRecord {
    /// The month whose final state the cursors describe.
    pub derived_from: MonthKey,
    /// Per-employee cursors. The administrator is excluded.
    pub cursors: CycleState,
}
