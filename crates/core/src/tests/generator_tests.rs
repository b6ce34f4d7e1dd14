// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_january_calendar, create_test_admin_id, create_test_roster, generate_january,
};
use crate::{
    CoreError, CoverageWarning, GenerateRequest, PriorState, generate, has_blocking,
    validate_schedule,
};
use rota_domain::{EmployeeId, RotationCursor, RotationPolicy, ShiftCode};
use std::collections::BTreeMap;

fn exhausting_policy() -> RotationPolicy {
    // Rest floors nobody can satisfy after the first working day.
    RotationPolicy {
        min_rest_after_night: 6,
        preferred_rest_after_night: 6,
        rest_after_day: 6,
        rest_after_evening: 6,
        ..RotationPolicy::default()
    }
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate_january();
    let second = generate_january();
    assert_eq!(first.schedule, second.schedule);
    assert_eq!(first.final_cycle_state, second.final_cycle_state);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_minimum_roster_fills_the_whole_month() {
    let output = generate_january();
    assert!(output.warnings.is_empty());
}

#[test]
fn test_every_roster_member_has_a_full_row() {
    let output = generate_january();
    assert_eq!(output.schedule.len(), 5);
    for row in output.schedule.values() {
        assert_eq!(row.len(), 31);
    }
}

#[test]
fn test_admin_covers_exactly_the_business_days() {
    let calendar = create_january_calendar();
    let output = generate_january();
    let admin_row = &output.schedule[&create_test_admin_id()];
    for day in 1..=31 {
        let expected = if calendar.is_business_day(day) {
            ShiftCode::Admin
        } else {
            ShiftCode::Rest
        };
        assert_eq!(admin_row[&day], expected, "day {day}");
    }
}

#[test]
fn test_generated_month_validates_clean() {
    let calendar = create_january_calendar();
    let output = generate_january();
    let violations = validate_schedule(
        &calendar,
        &output.schedule,
        &create_test_admin_id(),
        &RotationPolicy::default(),
        true,
    );
    assert!(violations.is_empty(), "{violations:?}");
    assert!(!has_blocking(&violations));
}

#[test]
fn test_cycle_state_covers_every_rotational_employee() {
    let output = generate_january();
    assert_eq!(output.final_cycle_state.len(), 4);
    assert!(
        !output
            .final_cycle_state
            .contains_key(&create_test_admin_id())
    );
}

#[test]
fn test_too_few_rotational_employees_is_rejected() {
    let calendar = create_january_calendar();
    let mut roster = create_test_roster();
    roster.truncate(4); // admin plus three
    let admin_id = create_test_admin_id();
    let result = generate(&GenerateRequest {
        calendar: &calendar,
        roster: &roster,
        admin_id: &admin_id,
        prior: PriorState::None,
        policy: &RotationPolicy::default(),
        strict: false,
    });
    assert!(matches!(result, Err(CoreError::Precondition(_))));
}

#[test]
fn test_admin_must_be_on_the_roster() {
    let calendar = create_january_calendar();
    let roster = create_test_roster();
    let admin_id = EmployeeId::new("nobody");
    let result = generate(&GenerateRequest {
        calendar: &calendar,
        roster: &roster,
        admin_id: &admin_id,
        prior: PriorState::None,
        policy: &RotationPolicy::default(),
        strict: false,
    });
    assert!(matches!(result, Err(CoreError::Precondition(_))));
}

#[test]
fn test_strict_mode_aborts_on_the_first_gap() {
    let calendar = create_january_calendar();
    let roster = create_test_roster();
    let admin_id = create_test_admin_id();
    let policy = exhausting_policy();
    let result = generate(&GenerateRequest {
        calendar: &calendar,
        roster: &roster,
        admin_id: &admin_id,
        prior: PriorState::None,
        policy: &policy,
        strict: true,
    });
    assert_eq!(
        result.unwrap_err(),
        CoreError::Coverage {
            day: 2,
            shift: ShiftCode::Evening,
        }
    );
}

#[test]
fn test_lenient_mode_records_gaps_as_warnings() {
    let calendar = create_january_calendar();
    let roster = create_test_roster();
    let admin_id = create_test_admin_id();
    let policy = exhausting_policy();
    let output = generate(&GenerateRequest {
        calendar: &calendar,
        roster: &roster,
        admin_id: &admin_id,
        prior: PriorState::None,
        policy: &policy,
        strict: false,
    })
    .unwrap();
    assert!(output.warnings.contains(&CoverageWarning {
        day: 2,
        shift: ShiftCode::Evening,
    }));
}

#[test]
fn test_prior_snapshot_constrains_the_first_days() {
    let calendar = create_january_calendar();
    let roster = create_test_roster();
    let admin_id = create_test_admin_id();

    // Dora ended the prior month on an evening shift; an evening worker may
    // never roll straight into a night shift, whatever her seed preference.
    let mut cursors = BTreeMap::new();
    cursors.insert(
        EmployeeId::new("dora"),
        RotationCursor {
            last_shift: ShiftCode::Evening,
            days_since_last_work: 0,
            consecutive_same_shift: 1,
        },
    );
    let output = generate(&GenerateRequest {
        calendar: &calendar,
        roster: &roster,
        admin_id: &admin_id,
        prior: PriorState::Snapshot(&cursors),
        policy: &RotationPolicy::default(),
        strict: false,
    })
    .unwrap();

    assert_ne!(
        output.schedule[&EmployeeId::new("dora")][&1],
        ShiftCode::Night
    );
}
