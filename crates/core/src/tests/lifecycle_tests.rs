// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_january_calendar, create_january_key, create_open_january_record, create_test_admin_id,
    find_worker,
};
use crate::{CoreError, LockOutcome, accept_as_baseline, ensure_open, lock_month};
use rota_domain::{RotationPolicy, ShiftCode};

#[test]
fn test_open_month_is_editable() {
    let record = create_open_january_record();
    assert!(ensure_open(&record).is_ok());
}

#[test]
fn test_locked_month_is_not_editable() {
    let mut record = create_open_january_record();
    record.ui_locked = true;
    assert_eq!(
        ensure_open(&record),
        Err(CoreError::MonthLocked {
            key: create_january_key(),
        })
    );
}

#[test]
fn test_lock_sets_both_flags_and_clears_overrides() {
    let record = create_open_january_record();
    let outcome = lock_month(&record, &create_january_calendar(), &RotationPolicy::default());

    let LockOutcome::Locked {
        record: locked,
        cycle_state,
        soft_violations,
    } = outcome.unwrap()
    else {
        panic!("expected the lock to succeed");
    };

    assert!(locked.ui_locked);
    assert!(locked.generator_locked);
    assert!(locked.overrides.is_empty());
    assert!(soft_violations.is_empty());
    assert_eq!(cycle_state.derived_from, create_january_key());
}

#[test]
fn test_cycle_state_excludes_the_admin() {
    let record = create_open_january_record();
    let outcome = lock_month(&record, &create_january_calendar(), &RotationPolicy::default());

    let LockOutcome::Locked { cycle_state, .. } = outcome.unwrap() else {
        panic!("expected the lock to succeed");
    };

    assert_eq!(cycle_state.cursors.len(), 4);
    assert!(!cycle_state.cursors.contains_key(&create_test_admin_id()));
}

#[test]
fn test_final_night_worker_ends_with_zero_rest() {
    let record = create_open_january_record();
    let night_worker = find_worker(&record.schedule, 31, ShiftCode::Night).unwrap();
    let outcome = lock_month(&record, &create_january_calendar(), &RotationPolicy::default());

    let LockOutcome::Locked { cycle_state, .. } = outcome.unwrap() else {
        panic!("expected the lock to succeed");
    };

    let cursor = &cycle_state.cursors[&night_worker];
    assert_eq!(cursor.last_shift, ShiftCode::Night);
    assert_eq!(cursor.days_since_last_work, 0);
}

#[test]
fn test_lock_bakes_overrides_into_the_schedule() {
    let mut record = create_open_january_record();
    let night_worker = find_worker(&record.schedule, 31, ShiftCode::Night).unwrap();
    let stand_in = record
        .schedule
        .iter()
        .find(|(id, row)| {
            **id != create_test_admin_id() && row.get(&31) == Some(&ShiftCode::Rest)
        })
        .map(|(id, _)| id.clone())
        .unwrap();

    record
        .overrides
        .entry(night_worker.clone())
        .or_default()
        .insert(31, ShiftCode::Sick);
    record
        .overrides
        .entry(stand_in.clone())
        .or_default()
        .insert(31, ShiftCode::Night);

    let outcome = lock_month(&record, &create_january_calendar(), &RotationPolicy::default());
    let LockOutcome::Locked { record: locked, .. } = outcome.unwrap() else {
        panic!("expected the lock to succeed");
    };

    assert_eq!(locked.schedule[&night_worker][&31], ShiftCode::Sick);
    assert_eq!(locked.schedule[&stand_in][&31], ShiftCode::Night);
    assert!(locked.overrides.is_empty());
}

#[test]
fn test_lock_is_refused_while_cover_is_missing() {
    let mut record = create_open_january_record();
    let night_worker = find_worker(&record.schedule, 10, ShiftCode::Night).unwrap();
    record
        .overrides
        .entry(night_worker)
        .or_default()
        .insert(10, ShiftCode::Sick);

    let outcome = lock_month(&record, &create_january_calendar(), &RotationPolicy::default());
    let LockOutcome::Refused { violations } = outcome.unwrap() else {
        panic!("expected the lock to be refused");
    };

    assert!(crate::has_blocking(&violations));
    // The record itself was never touched.
    assert!(!record.ui_locked);
}

#[test]
fn test_locking_twice_is_an_error() {
    let record = create_open_january_record();
    let calendar = create_january_calendar();
    let outcome = lock_month(&record, &calendar, &RotationPolicy::default());
    let LockOutcome::Locked { record: locked, .. } = outcome.unwrap() else {
        panic!("expected the lock to succeed");
    };

    assert_eq!(
        lock_month(&locked, &calendar, &RotationPolicy::default()),
        Err(CoreError::MonthLocked {
            key: create_january_key(),
        })
    );
}

#[test]
fn test_lock_requires_an_admin() {
    let mut record = create_open_january_record();
    record.month_admin_id = None;
    let outcome = lock_month(&record, &create_january_calendar(), &RotationPolicy::default());
    assert!(matches!(outcome, Err(CoreError::Precondition(_))));
}

#[test]
fn test_baseline_recovery_matches_the_lock_snapshot() {
    let record = create_open_january_record();
    let calendar = create_january_calendar();
    let outcome = lock_month(&record, &calendar, &RotationPolicy::default());
    let LockOutcome::Locked {
        record: locked,
        cycle_state,
        ..
    } = outcome.unwrap()
    else {
        panic!("expected the lock to succeed");
    };

    let recovered = accept_as_baseline(&locked, &calendar).unwrap();
    assert_eq!(recovered, cycle_state);
}

#[test]
fn test_baseline_recovery_leaves_the_record_alone() {
    let record = create_open_january_record();
    let calendar = create_january_calendar();
    let before = record.clone();
    let _snapshot = accept_as_baseline(&record, &calendar).unwrap();
    assert_eq!(record, before);
}
