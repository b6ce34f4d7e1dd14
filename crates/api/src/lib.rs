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
    clippy::all
)]

mod directory;
mod error;
mod request_response;
mod service;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use directory::{EmployeeDirectory, RosterError, StaticDirectory};
pub use error::{ApiError, ApiResult, translate_domain_error};
pub use request_response::{
    AcceptBaselineResponse, EffectiveScheduleResponse, GenerateMonthRequest,
    GenerateMonthResponse, LockMonthResponse, SetMonthAdminRequest, SetOverrideRequest,
    ValidateMonthResponse,
};
pub use service::ScheduleService;
