// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    GenerateMonthRequest, ScheduleService, SetMonthAdminRequest, SetOverrideRequest,
    StaticDirectory,
};
use rota_domain::{Employee, EmployeeId, ShiftCode};
use rota_storage::MemoryStore;

pub type TestService = ScheduleService<MemoryStore, StaticDirectory>;

/// One administrator plus the minimum four rotational employees.
pub fn create_test_roster() -> Vec<Employee> {
    vec![
        Employee::new(EmployeeId::new("admin"), "Petya Stoyanova"),
        Employee::new(EmployeeId::new("ana"), "Ana Ivanova"),
        Employee::new(EmployeeId::new("boris"), "Boris Dimitrov"),
        Employee::new(EmployeeId::new("dora"), "Dora Petrova"),
        Employee::new(EmployeeId::new("emil"), "Emil Georgiev"),
    ]
}

pub fn create_test_service() -> TestService {
    ScheduleService::new(MemoryStore::new(), StaticDirectory::new(create_test_roster()))
}

pub fn set_test_admin(service: &TestService, year: u16, month: u8) {
    service
        .set_month_admin(&SetMonthAdminRequest {
            year,
            month,
            employee_id: String::from("admin"),
        })
        .unwrap();
}

/// Assigns the administrator and generates the month.
pub fn prepare_month(service: &TestService, year: u16, month: u8) {
    set_test_admin(service, year, month);
    service
        .generate_month(&GenerateMonthRequest {
            year,
            month,
            strict: false,
        })
        .unwrap();
}

/// Locks the month and asserts the lock went through.
pub fn lock_month(service: &TestService, year: u16, month: u8) {
    let response = service.lock_month(year, month).unwrap();
    assert!(response.locked, "{:?}", response.violations);
}

/// Finds the rotational employee holding `shift` on `day` in the effective
/// schedule.
pub fn find_worker(service: &TestService, year: u16, month: u8, day: u8, shift: ShiftCode) -> EmployeeId {
    let response = service.get_effective_schedule(year, month).unwrap();
    response
        .schedule
        .iter()
        .find(|(_, row)| row.get(&day) == Some(&shift))
        .map(|(id, _)| id.clone())
        .unwrap()
}

pub fn set_test_override(
    service: &TestService,
    year: u16,
    month: u8,
    employee_id: &EmployeeId,
    day: u8,
    shift: &str,
) {
    service
        .set_override(&SetOverrideRequest {
            year,
            month,
            employee_id: employee_id.to_string(),
            day,
            shift: String::from(shift),
        })
        .unwrap();
}
