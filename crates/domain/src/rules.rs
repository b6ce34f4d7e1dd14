// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stateless shift-transition rules.
//!
//! These predicates are the single source of truth for rotation legality.
//! The generator consults them when picking candidates and the validator
//! replays finished schedules against the very same functions.

use crate::shift::ShiftCode;
use serde::{Deserialize, Serialize};

/// Numeric rotation policy.
///
/// Rest thresholds are deliberately configuration, not constants. The counts
/// are expressed in the `days_since_last_work` convention: `0` means a shift
/// already worked today, `1` means the shift ended yesterday. A threshold of
/// `1` therefore permits back-to-back days while a threshold of `2` demands
/// one full rest day in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// Hard floor of rest after a night shift, enforced even in relaxed mode.
    pub min_rest_after_night: u32,
    /// Preferred rest after a night shift, enforced in normal mode.
    pub preferred_rest_after_night: u32,
    /// Rest required after a day shift.
    pub rest_after_day: u32,
    /// Rest required after an evening shift.
    pub rest_after_evening: u32,
    /// Longest permitted run of the same rotational shift on consecutive days.
    pub max_consecutive_same_shift: u32,
    /// Workdays above the monthly business-day count tolerated in normal mode.
    pub soft_workday_deviation: u32,
    /// Workdays above the monthly business-day count tolerated in any mode.
    pub hard_workday_deviation: u32,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            min_rest_after_night: 1,
            preferred_rest_after_night: 2,
            rest_after_day: 1,
            rest_after_evening: 1,
            max_consecutive_same_shift: 4,
            soft_workday_deviation: 1,
            hard_workday_deviation: 2,
        }
    }
}

/// Per-shift transition thresholds derived from a [`RotationPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    /// Minimum rest before the next real shift (relaxed-mode floor).
    pub min_rest_days: u32,
    /// Preferred rest before the next real shift (normal mode).
    pub preferred_rest_days: u32,
    /// The shift the rotation pattern continues with.
    pub default_next: Option<ShiftCode>,
}

impl RotationPolicy {
    /// Returns the transition rule that applies after `prev`.
    #[must_use]
    pub const fn transition_rule(&self, prev: ShiftCode) -> TransitionRule {
        match prev {
            ShiftCode::Night => TransitionRule {
                min_rest_days: self.min_rest_after_night,
                preferred_rest_days: self.preferred_rest_after_night,
                default_next: Some(ShiftCode::Evening),
            },
            ShiftCode::Evening => TransitionRule {
                min_rest_days: self.rest_after_evening,
                preferred_rest_days: self.rest_after_evening,
                default_next: Some(ShiftCode::Day),
            },
            ShiftCode::Day => TransitionRule {
                min_rest_days: self.rest_after_day,
                preferred_rest_days: self.rest_after_day,
                default_next: Some(ShiftCode::Night),
            },
            ShiftCode::Admin => TransitionRule {
                min_rest_days: 0,
                preferred_rest_days: 0,
                default_next: Some(ShiftCode::Admin),
            },
            ShiftCode::Rest | ShiftCode::Vacation | ShiftCode::Sick => TransitionRule {
                min_rest_days: 0,
                preferred_rest_days: 0,
                default_next: None,
            },
        }
    }
}

/// Returns whether a cell is rest-like. `None` counts as rest.
#[must_use]
pub fn is_rest_like(code: Option<ShiftCode>) -> bool {
    code.is_none_or(ShiftCode::is_rest_like)
}

/// Returns the shift the rotation pattern prefers after `last`.
///
/// Night rolls into evening, evening into day, day into night; the
/// administrator keeps the administrator shift. Rest-like history carries no
/// preference.
#[must_use]
pub const fn preferred_next_shift(last: Option<ShiftCode>) -> Option<ShiftCode> {
    match last {
        Some(ShiftCode::Night) => Some(ShiftCode::Evening),
        Some(ShiftCode::Evening) => Some(ShiftCode::Day),
        Some(ShiftCode::Day) => Some(ShiftCode::Night),
        Some(ShiftCode::Admin) => Some(ShiftCode::Admin),
        Some(ShiftCode::Rest | ShiftCode::Vacation | ShiftCode::Sick) | None => None,
    }
}

/// The rotation legality gate.
///
/// * Rest-like candidates are always allowed.
/// * A second real shift with zero rest is never allowed.
/// * Unseeded employees (`prev` is `None`) may take anything.
/// * An evening worker may never roll directly into a night shift,
///   in either mode.
/// * Otherwise the candidate must satisfy the rest threshold after the
///   previous shift: preferred in normal mode, the hard floor in
///   relaxed ("crisis") mode.
#[must_use]
pub fn is_transition_allowed(
    prev: Option<ShiftCode>,
    days_since_last_work: u32,
    candidate: ShiftCode,
    relaxed: bool,
    policy: &RotationPolicy,
) -> bool {
    if candidate.is_rest_like() {
        return true;
    }

    if days_since_last_work == 0 && prev.is_some_and(ShiftCode::is_working) && candidate.is_working()
    {
        return false;
    }

    let Some(prev) = prev else {
        return true;
    };

    if prev == ShiftCode::Evening && candidate == ShiftCode::Night {
        return false;
    }

    let rule = policy.transition_rule(prev);
    let required_rest = if relaxed {
        rule.min_rest_days
    } else {
        rule.preferred_rest_days
    };

    if candidate.is_rotational() && days_since_last_work < required_rest {
        return false;
    }

    true
}
