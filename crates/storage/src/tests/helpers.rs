// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_domain::{
    CycleStateRecord, EmployeeId, MonthKey, MonthRecord, RotationCursor, ShiftCode,
};
use std::collections::BTreeMap;

pub fn create_test_key() -> MonthKey {
    MonthKey::new(2026, 1).unwrap()
}

/// A small but structurally complete month record.
pub fn create_test_record() -> MonthRecord {
    let ana = EmployeeId::new("ana");
    let mut record = MonthRecord::empty(create_test_key());

    let mut row = BTreeMap::new();
    row.insert(1_u8, ShiftCode::Night);
    row.insert(2_u8, ShiftCode::Rest);
    record.schedule.insert(ana.clone(), row);

    let mut override_row = BTreeMap::new();
    override_row.insert(2_u8, ShiftCode::Vacation);
    record.overrides.insert(ana, override_row);

    record.month_admin_id = Some(EmployeeId::new("admin"));
    record
}

pub fn create_test_cycle_state() -> CycleStateRecord {
    let mut cursors = BTreeMap::new();
    cursors.insert(
        EmployeeId::new("ana"),
        RotationCursor {
            last_shift: ShiftCode::Night,
            days_since_last_work: 0,
            consecutive_same_shift: 1,
        },
    );
    CycleStateRecord {
        derived_from: create_test_key(),
        cursors,
    }
}
