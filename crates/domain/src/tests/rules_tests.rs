// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RotationPolicy, ShiftCode, is_rest_like, is_transition_allowed, preferred_next_shift};

fn policy() -> RotationPolicy {
    RotationPolicy::default()
}

// ============================================================================
// Preferred rotation pattern
// ============================================================================

#[test]
fn test_rotation_pattern_night_evening_day() {
    assert_eq!(
        preferred_next_shift(Some(ShiftCode::Night)),
        Some(ShiftCode::Evening)
    );
    assert_eq!(
        preferred_next_shift(Some(ShiftCode::Evening)),
        Some(ShiftCode::Day)
    );
    assert_eq!(
        preferred_next_shift(Some(ShiftCode::Day)),
        Some(ShiftCode::Night)
    );
}

#[test]
fn test_admin_keeps_admin_shift() {
    assert_eq!(
        preferred_next_shift(Some(ShiftCode::Admin)),
        Some(ShiftCode::Admin)
    );
}

#[test]
fn test_rest_history_carries_no_preference() {
    assert_eq!(preferred_next_shift(None), None);
    assert_eq!(preferred_next_shift(Some(ShiftCode::Rest)), None);
    assert_eq!(preferred_next_shift(Some(ShiftCode::Vacation)), None);
}

// ============================================================================
// Transition legality
// ============================================================================

#[test]
fn test_rest_like_candidate_is_always_allowed() {
    assert!(is_transition_allowed(
        Some(ShiftCode::Night),
        0,
        ShiftCode::Rest,
        false,
        &policy()
    ));
    assert!(is_transition_allowed(
        Some(ShiftCode::Night),
        0,
        ShiftCode::Vacation,
        false,
        &policy()
    ));
}

#[test]
fn test_zero_rest_double_shift_is_never_allowed() {
    for relaxed in [false, true] {
        assert!(!is_transition_allowed(
            Some(ShiftCode::Day),
            0,
            ShiftCode::Evening,
            relaxed,
            &policy()
        ));
    }
}

#[test]
fn test_unseeded_employee_may_take_anything() {
    for candidate in [ShiftCode::Day, ShiftCode::Evening, ShiftCode::Night] {
        assert!(is_transition_allowed(None, 999, candidate, false, &policy()));
    }
}

#[test]
fn test_evening_to_night_is_forbidden_in_both_modes() {
    for relaxed in [false, true] {
        assert!(!is_transition_allowed(
            Some(ShiftCode::Evening),
            5,
            ShiftCode::Night,
            relaxed,
            &policy()
        ));
    }
}

#[test]
fn test_back_to_back_day_shifts_are_allowed() {
    assert!(is_transition_allowed(
        Some(ShiftCode::Day),
        1,
        ShiftCode::Day,
        false,
        &policy()
    ));
}

#[test]
fn test_night_requires_preferred_rest_in_normal_mode() {
    // Worked a night yesterday: one rest day is not yet complete.
    assert!(!is_transition_allowed(
        Some(ShiftCode::Night),
        1,
        ShiftCode::Evening,
        false,
        &policy()
    ));
    // One full rest day has passed.
    assert!(is_transition_allowed(
        Some(ShiftCode::Night),
        2,
        ShiftCode::Evening,
        false,
        &policy()
    ));
}

#[test]
fn test_relaxed_mode_lowers_night_rest_to_the_floor() {
    assert!(is_transition_allowed(
        Some(ShiftCode::Night),
        1,
        ShiftCode::Evening,
        true,
        &policy()
    ));
    // The floor itself is not relaxable.
    assert!(!is_transition_allowed(
        Some(ShiftCode::Night),
        0,
        ShiftCode::Evening,
        true,
        &policy()
    ));
}

#[test]
fn test_rest_thresholds_follow_the_policy() {
    let strict_policy = RotationPolicy {
        preferred_rest_after_night: 3,
        ..RotationPolicy::default()
    };
    assert!(!is_transition_allowed(
        Some(ShiftCode::Night),
        2,
        ShiftCode::Evening,
        false,
        &strict_policy
    ));
    assert!(is_transition_allowed(
        Some(ShiftCode::Night),
        3,
        ShiftCode::Evening,
        false,
        &strict_policy
    ));
}

#[test]
fn test_rest_like_helper_accepts_none() {
    assert!(is_rest_like(None));
    assert!(is_rest_like(Some(ShiftCode::Sick)));
    assert!(!is_rest_like(Some(ShiftCode::Admin)));
}
