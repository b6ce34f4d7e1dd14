// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{GenerateRequest, GeneratorOutput, PriorState, generate};
use rota_domain::{
    Employee, EmployeeId, MonthCalendar, MonthKey, MonthRecord, RotationPolicy, ShiftCode,
};

pub fn create_test_admin_id() -> EmployeeId {
    EmployeeId::new("admin")
}

/// One administrator plus four rotational employees, the minimum viable
/// roster.
pub fn create_test_roster() -> Vec<Employee> {
    vec![
        Employee::new(EmployeeId::new("admin"), "Petya Stoyanova"),
        Employee::new(EmployeeId::new("ana"), "Ana Ivanova"),
        Employee::new(EmployeeId::new("boris"), "Boris Dimitrov"),
        Employee::new(EmployeeId::new("dora"), "Dora Petrova"),
        Employee::new(EmployeeId::new("emil"), "Emil Georgiev"),
    ]
}

pub fn create_january_key() -> MonthKey {
    MonthKey::new(2026, 1).unwrap()
}

pub fn create_january_calendar() -> MonthCalendar {
    MonthCalendar::for_month(create_january_key()).unwrap()
}

/// Generates January 2026 from a cold start with the default policy.
pub fn generate_january() -> GeneratorOutput {
    let calendar = create_january_calendar();
    let roster = create_test_roster();
    let admin_id = create_test_admin_id();
    generate(&GenerateRequest {
        calendar: &calendar,
        roster: &roster,
        admin_id: &admin_id,
        prior: PriorState::None,
        policy: &RotationPolicy::default(),
        strict: false,
    })
    .unwrap()
}

/// Wraps a generated January into an open month record.
pub fn create_open_january_record() -> MonthRecord {
    let output = generate_january();
    MonthRecord {
        key: create_january_key(),
        schedule: output.schedule,
        overrides: rota_domain::Overrides::default(),
        month_admin_id: Some(create_test_admin_id()),
        generator_locked: false,
        ui_locked: false,
    }
}

/// Finds the rotational employee holding `shift` on `day`.
pub fn find_worker(
    schedule: &rota_domain::Schedule,
    day: u8,
    shift: ShiftCode,
) -> Option<EmployeeId> {
    schedule
        .iter()
        .find(|(_, row)| row.get(&day) == Some(&shift))
        .map(|(id, _)| id.clone())
}
