// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Greedy month generation.
//!
//! Shifts are filled one day at a time in order of scarcity: night first,
//! then evening, then the day slot when the administrator is off. For each
//! slot the best-rested eligible employee wins, preferring whoever the
//! rotation pattern points at. When nobody qualifies under the normal rest
//! thresholds the slot is retried in relaxed mode before being reported as a
//! coverage gap.

use crate::error::CoreError;
use crate::state_prep::{PriorState, initial_states};
use rota_domain::{
    CycleState, DayNumber, Employee, EmployeeId, MonthCalendar, RotationPolicy, RotationState,
    Schedule, ShiftCode, is_transition_allowed, validate_employee,
};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

/// Minimum number of rotational employees (the administrator not counted)
/// needed to staff a month.
pub const MIN_ROTATIONAL: usize = 4;

/// Everything a generation run needs, passed in explicitly.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    /// Calendar of the month being generated.
    pub calendar: &'a MonthCalendar,
    /// Active roster for the month, administrator included.
    pub roster: &'a [Employee],
    /// The employee holding the administrator shift this month.
    pub admin_id: &'a EmployeeId,
    /// Where the rotation picks up from.
    pub prior: PriorState<'a>,
    /// Rest thresholds and caps.
    pub policy: &'a RotationPolicy,
    /// When set, any coverage gap aborts the run instead of being reported.
    pub strict: bool,
}

/// A shift slot the generator could not staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageWarning {
    /// The day with the gap.
    pub day: DayNumber,
    /// The shift left unstaffed.
    pub shift: ShiftCode,
}

/// The result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOutput {
    /// The generated schedule, with a cell for every roster member and day.
    pub schedule: Schedule,
    /// Each rotational employee's position at the end of the month.
    pub final_cycle_state: CycleState,
    /// Coverage gaps, in day order. Empty on a fully staffed month.
    pub warnings: Vec<CoverageWarning>,
}

/// Generates a month from scratch.
///
/// The run is deterministic: the same request always produces the same
/// schedule. Identifier order breaks every scoring tie.
///
/// # Errors
///
/// Returns an error if any roster member fails basic validation, if the
/// administrator is not on the roster, if fewer than [`MIN_ROTATIONAL`]
/// rotational employees are available, or, in strict mode, if a required
/// shift cannot be staffed.
pub fn generate(request: &GenerateRequest<'_>) -> Result<GeneratorOutput, CoreError> {
    for employee in request.roster {
        validate_employee(employee)?;
    }

    if !request
        .roster
        .iter()
        .any(|employee| &employee.id == request.admin_id)
    {
        return Err(CoreError::Precondition(format!(
            "Administrator {} is not on the roster",
            request.admin_id
        )));
    }

    let rotational: Vec<&EmployeeId> = request
        .roster
        .iter()
        .map(|employee| &employee.id)
        .filter(|id| *id != request.admin_id)
        .collect();
    if rotational.len() < MIN_ROTATIONAL {
        return Err(CoreError::Precondition(format!(
            "Need at least {MIN_ROTATIONAL} rotational employees, have {}",
            rotational.len()
        )));
    }

    let calendar = request.calendar;
    let business_days = calendar.count_business_days();
    let mut states = initial_states(rotational.iter().copied(), &request.prior);
    let mut schedule = empty_schedule(request.roster, calendar.days_in_month());
    let mut warnings = Vec::new();

    for day in 1..=calendar.days_in_month() {
        for state in states.values_mut() {
            state.advance_day();
        }

        let business = calendar.is_business_day(day);
        if business && let Some(row) = schedule.get_mut(request.admin_id) {
            row.insert(day, ShiftCode::Admin);
        }

        // The administrator covers the day class on business days, so the
        // rotational day slot is only staffed when the administrator is off.
        let needed: &[ShiftCode] = if business {
            &[ShiftCode::Night, ShiftCode::Evening]
        } else {
            &ShiftCode::ROTATIONAL
        };

        let mut assigned: BTreeSet<EmployeeId> = BTreeSet::new();
        for &shift in needed {
            let pick = pick_candidate(&states, &assigned, shift, false, request.policy, business_days)
                .or_else(|| {
                    pick_candidate(&states, &assigned, shift, true, request.policy, business_days)
                });
            match pick {
                Some(id) => {
                    if let Some(row) = schedule.get_mut(&id) {
                        row.insert(day, shift);
                    }
                    if let Some(state) = states.get_mut(&id) {
                        state.record_working(shift, business);
                    }
                    assigned.insert(id);
                }
                None => {
                    if request.strict {
                        return Err(CoreError::Coverage { day, shift });
                    }
                    warnings.push(CoverageWarning { day, shift });
                }
            }
        }

        for (id, state) in &mut states {
            if !assigned.contains(id) {
                state.record_rest();
            }
        }
    }

    let final_cycle_state: CycleState = states
        .iter()
        .filter_map(|(id, state)| state.cursor().map(|cursor| (id.clone(), cursor)))
        .collect();

    Ok(GeneratorOutput {
        schedule,
        final_cycle_state,
        warnings,
    })
}

fn empty_schedule(roster: &[Employee], days_in_month: u8) -> Schedule {
    roster
        .iter()
        .map(|employee| {
            let row: BTreeMap<DayNumber, ShiftCode> = (1..=days_in_month)
                .map(|day| (day, ShiftCode::Rest))
                .collect();
            (employee.id.clone(), row)
        })
        .collect()
}

/// Picks the best eligible employee for a slot, or `None` when nobody
/// qualifies in the given mode.
///
/// Scoring is lexicographic: rotation-pattern match first, then the longest
/// rest, then the lightest month so far. Map iteration order makes the
/// identifier the final tiebreak.
fn pick_candidate(
    states: &BTreeMap<EmployeeId, RotationState>,
    assigned: &BTreeSet<EmployeeId>,
    shift: ShiftCode,
    relaxed: bool,
    policy: &RotationPolicy,
    business_days: u32,
) -> Option<EmployeeId> {
    states
        .iter()
        .filter(|(id, _)| !assigned.contains(*id))
        .filter(|(_, state)| may_take(state, shift, relaxed, policy, business_days))
        .min_by_key(|(_, state)| {
            (
                state.preferred_next != Some(shift),
                Reverse(state.days_since_last_work),
                state.total_workdays,
            )
        })
        .map(|(id, _)| id.clone())
}

fn may_take(
    state: &RotationState,
    shift: ShiftCode,
    relaxed: bool,
    policy: &RotationPolicy,
    business_days: u32,
) -> bool {
    if !is_transition_allowed(
        state.last_shift,
        state.days_since_last_work,
        shift,
        relaxed,
        policy,
    ) {
        return false;
    }

    // Same-shift runs are capped in normal mode.
    if !relaxed
        && state.last_shift == Some(shift)
        && state.days_since_last_work <= 1
        && state.consecutive_same_shift >= policy.max_consecutive_same_shift
    {
        return false;
    }

    if state.total_workdays >= business_days.saturating_add(policy.hard_workday_deviation) {
        return false;
    }
    if !relaxed
        && state.total_workdays >= business_days.saturating_add(policy.soft_workday_deviation)
    {
        return false;
    }

    true
}
