// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shift::ShiftCode;
use crate::types::{EmployeeId, MonthKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized day-of-month number (1-based).
///
/// Day keys are integers everywhere inside the engine; stringly keys exist
/// only at the storage boundary.
pub type DayNumber = u8;

/// A month grid: employee → day → shift.
pub type Schedule = BTreeMap<EmployeeId, BTreeMap<DayNumber, ShiftCode>>;

/// Sparse manual corrections, same shape as [`Schedule`].
pub type Overrides = Schedule;

/// The schedule artifact for one month.
///
/// `overrides` is always a sparse layer applied on top of `schedule`; callers
/// see the effective (merged) grid. `generator_locked` records that
/// generation has produced the month; `ui_locked` marks it finalized and
/// immutable. Once `ui_locked` is set there is no unlock transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// The month this record describes.
    pub key: MonthKey,
    /// The base grid, as produced by the generator (plus mirrored overrides).
    #[serde(default)]
    pub schedule: Schedule,
    /// Sparse manual corrections layered on top of the base grid.
    #[serde(default)]
    pub overrides: Overrides,
    /// The designated administrator for this month.
    #[serde(default)]
    pub month_admin_id: Option<EmployeeId>,
    /// Generation has produced this month; it should not be silently
    /// regenerated.
    #[serde(default)]
    pub generator_locked: bool,
    /// The month has been finalized by a human and is now immutable.
    #[serde(default)]
    pub ui_locked: bool,
}

impl MonthRecord {
    /// Creates an empty, open record for a month.
    #[must_use]
    pub const fn empty(key: MonthKey) -> Self {
        Self {
            key,
            schedule: Schedule::new(),
            overrides: Overrides::new(),
            month_admin_id: None,
            generator_locked: false,
            ui_locked: false,
        }
    }
}
