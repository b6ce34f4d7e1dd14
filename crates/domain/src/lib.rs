// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod month;
mod rotation;
mod rules;
mod shift;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{FIXED_HOLIDAYS, MonthCalendar, easter_holiday_block, holidays_for_month, orthodox_easter};
pub use error::DomainError;
pub use month::{DayNumber, MonthRecord, Overrides, Schedule};
pub use rotation::{
    CycleState, CycleStateRecord, RotationCursor, RotationState, UNSEEDED_DAYS_SINCE, seed_shift,
};
pub use rules::{RotationPolicy, TransitionRule, is_rest_like, is_transition_allowed, preferred_next_shift};
pub use shift::ShiftCode;
pub use types::{Employee, EmployeeId, MonthKey};
pub use validation::{validate_day_number, validate_employee};
