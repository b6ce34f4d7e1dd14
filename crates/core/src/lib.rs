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

mod error;
mod generator;
mod lifecycle;
mod overrides;
mod state_prep;
mod validator;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use generator::{CoverageWarning, GenerateRequest, GeneratorOutput, MIN_ROTATIONAL, generate};
pub use lifecycle::{LockOutcome, accept_as_baseline, ensure_open, extract_cycle_state, lock_month};
pub use overrides::apply_overrides;
pub use state_prep::{PriorState, cursor_from_schedule, initial_states};
pub use validator::{
    RULE_ADMIN, RULE_COVERAGE, RULE_ROTATION, Severity, Violation, has_blocking, validate_schedule,
};
