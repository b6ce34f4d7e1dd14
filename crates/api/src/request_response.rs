// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service request and response data transfer objects.

use rota_core::{CoverageWarning, Violation};
use rota_domain::{EmployeeId, Overrides, Schedule};

/// Request to generate a month's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateMonthRequest {
    /// The year (e.g., 2026).
    pub year: u16,
    /// The month number (1-12).
    pub month: u8,
    /// When set, any coverage gap fails the request.
    pub strict: bool,
}

/// Response for a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GenerateMonthResponse {
    /// The generated month, formatted `YYYY-MM`.
    pub month: String,
    /// Coverage gaps the generator could not staff.
    pub warnings: Vec<CoverageWarning>,
    /// A success message.
    pub message: String,
}

/// Request to designate the month's administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMonthAdminRequest {
    /// The year (e.g., 2026).
    pub year: u16,
    /// The month number (1-12).
    pub month: u8,
    /// The employee taking the administrator shift.
    pub employee_id: String,
}

/// Request to correct one cell of a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOverrideRequest {
    /// The year (e.g., 2026).
    pub year: u16,
    /// The month number (1-12).
    pub month: u8,
    /// The employee whose cell changes.
    pub employee_id: String,
    /// The day being corrected (1-based).
    pub day: u8,
    /// The new shift code (`D`, `V`, `N`, `A`, `REST`, `VAC`, `SICK`).
    pub shift: String,
}

/// The effective (overrides applied) view of a month.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EffectiveScheduleResponse {
    /// The month, formatted `YYYY-MM`.
    pub month: String,
    /// The merged grid.
    pub schedule: Schedule,
    /// The sparse correction layer, so callers can tell generated cells
    /// from hand-edited ones.
    pub overrides: Overrides,
    /// The designated administrator, if any.
    pub month_admin_id: Option<EmployeeId>,
    /// Generation has produced this month.
    pub generator_locked: bool,
    /// The month is finalized and immutable.
    pub ui_locked: bool,
}

/// Validation findings for a month.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidateMonthResponse {
    /// The month, formatted `YYYY-MM`.
    pub month: String,
    /// Every finding, advisory and blocking.
    pub violations: Vec<Violation>,
    /// Whether any finding would block locking.
    pub blocking: bool,
}

/// Outcome of a lock attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LockMonthResponse {
    /// The month, formatted `YYYY-MM`.
    pub month: String,
    /// Whether the month is now locked.
    pub locked: bool,
    /// On refusal, every finding; on success, the advisory ones.
    pub violations: Vec<Violation>,
    /// A human-readable outcome message.
    pub message: String,
}

/// Outcome of recomputing the rotation snapshot from a finished month.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AcceptBaselineResponse {
    /// The month the snapshot was derived from, formatted `YYYY-MM`.
    pub month: String,
    /// How many employees carry a cursor in the snapshot.
    pub employees: usize,
    /// A success message.
    pub message: String,
}
