// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_domain::{Overrides, Schedule};

/// Merges the override layer over a generated schedule.
///
/// The base schedule is never modified; callers always see the merge as a
/// fresh value. Override rows for employees absent from the base schedule are
/// stale (the employee left the roster after the overrides were recorded) and
/// are ignored.
#[must_use]
pub fn apply_overrides(base: &Schedule, overrides: &Overrides) -> Schedule {
    let mut effective = base.clone();
    for (employee, days) in overrides {
        let Some(row) = effective.get_mut(employee) else {
            continue;
        };
        for (day, shift) in days {
            row.insert(*day, *shift);
        }
    }
    effective
}
