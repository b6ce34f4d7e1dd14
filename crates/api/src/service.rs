// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scheduling service.
//!
//! One façade over the generator, validator, override layer, and lifecycle,
//! wired to a [`MonthStore`] and an [`EmployeeDirectory`]. Mutating
//! operations serialize per month, so two callers cannot interleave a
//! read-modify-write on the same record.

use crate::directory::EmployeeDirectory;
use crate::error::{ApiError, ApiResult};
use crate::request_response::{
    AcceptBaselineResponse, EffectiveScheduleResponse, GenerateMonthRequest,
    GenerateMonthResponse, LockMonthResponse, SetMonthAdminRequest, SetOverrideRequest,
    ValidateMonthResponse,
};
use rota_core::{GenerateRequest, LockOutcome, PriorState};
use rota_domain::{
    EmployeeId, MonthCalendar, MonthKey, MonthRecord, Overrides, RotationPolicy, ShiftCode,
    validate_day_number,
};
use rota_storage::MonthStore;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// The scheduling service façade.
pub struct ScheduleService<S, D> {
    store: S,
    directory: D,
    policy: RotationPolicy,
    month_locks: Mutex<HashMap<MonthKey, Arc<Mutex<()>>>>,
}

impl<S: MonthStore, D: EmployeeDirectory> ScheduleService<S, D> {
    /// Creates a service with the default rotation policy.
    #[must_use]
    pub fn new(store: S, directory: D) -> Self {
        Self::with_policy(store, directory, RotationPolicy::default())
    }

    /// Creates a service with an explicit rotation policy.
    #[must_use]
    pub fn with_policy(store: S, directory: D, policy: RotationPolicy) -> Self {
        Self {
            store,
            directory,
            policy,
            month_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Designates the administrator for a month, creating the month record
    /// if this is its first touch.
    ///
    /// Reassigning the administrator of an already generated month leaves
    /// the schedule untouched; regenerate to rebuild it under the new
    /// administrator.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is locked or the employee is not
    /// active during the month.
    pub fn set_month_admin(&self, request: &SetMonthAdminRequest) -> ApiResult<()> {
        let key = MonthKey::new(request.year, request.month)?;
        let employee_id = EmployeeId::new(&request.employee_id);
        if employee_id.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("employee_id"),
                message: String::from("Employee id cannot be empty"),
            });
        }

        self.with_month_lock(key, || {
            let mut record = self
                .store
                .load_month(key)?
                .unwrap_or_else(|| MonthRecord::empty(key));
            rota_core::ensure_open(&record)?;

            let roster = self.directory.active_for_month(key)?;
            if !roster.iter().any(|employee| employee.id == employee_id) {
                return Err(ApiError::ResourceNotFound {
                    resource_type: String::from("Employee"),
                    message: format!("{employee_id} is not active during {key}"),
                });
            }

            record.month_admin_id = Some(employee_id.clone());
            self.store.save_month(&record)?;
            info!(month = %key, admin = %employee_id, "set month administrator");
            Ok(())
        })
    }

    /// Generates a month's schedule.
    ///
    /// The preceding month must be locked before a new one is generated; a
    /// month with no predecessor on record starts the rotation from scratch.
    /// Regenerating a still-open month overwrites its schedule and discards
    /// its overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is locked, has no administrator, if the
    /// preceding month exists but is not locked, or if generation itself
    /// fails.
    pub fn generate_month(
        &self,
        request: &GenerateMonthRequest,
    ) -> ApiResult<GenerateMonthResponse> {
        let key = MonthKey::new(request.year, request.month)?;
        self.with_month_lock(key, || {
            let record = self
                .store
                .load_month(key)?
                .unwrap_or_else(|| MonthRecord::empty(key));
            rota_core::ensure_open(&record)?;
            let admin_id = record.month_admin_id.clone().ok_or_else(|| {
                ApiError::RuleViolation {
                    rule: String::from("admin_required"),
                    message: format!("Assign an administrator to {key} before generating"),
                }
            })?;

            let preceding_key = key.preceding();
            let preceding = self.store.load_month(preceding_key)?;
            if let Some(preceding_record) = &preceding
                && !preceding_record.ui_locked
            {
                return Err(ApiError::PrecedingMonthNotLocked {
                    month: preceding_key.to_string(),
                });
            }

            let snapshot = self.store.load_cycle_state()?;
            let prior = match (&snapshot, &preceding) {
                (Some(state), _) if state.derived_from == preceding_key => {
                    PriorState::Snapshot(&state.cursors)
                }
                (_, Some(preceding_record)) => PriorState::Schedule {
                    schedule: &preceding_record.schedule,
                    days_in_month: preceding_key.days_in_month(),
                },
                _ => PriorState::None,
            };

            let calendar = MonthCalendar::for_month(key)?;
            let roster = self.directory.active_for_month(key)?;
            let output = rota_core::generate(&GenerateRequest {
                calendar: &calendar,
                roster: &roster,
                admin_id: &admin_id,
                prior,
                policy: &self.policy,
                strict: request.strict,
            })?;

            // A fresh run replaces the whole month; overrides recorded
            // against the previous schedule are stale.
            let updated = MonthRecord {
                key,
                schedule: output.schedule,
                overrides: Overrides::default(),
                month_admin_id: Some(admin_id),
                generator_locked: true,
                ui_locked: false,
            };
            self.store.save_month(&updated)?;
            info!(month = %key, gaps = output.warnings.len(), "generated month");

            Ok(GenerateMonthResponse {
                month: key.to_string(),
                warnings: output.warnings,
                message: format!("Generated schedule for {key}"),
            })
        })
    }

    /// Returns the effective (overrides applied) view of a month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month has never been touched.
    pub fn get_effective_schedule(
        &self,
        year: u16,
        month: u8,
    ) -> ApiResult<EffectiveScheduleResponse> {
        let key = MonthKey::new(year, month)?;
        let record = self.load_existing(key)?;
        Ok(EffectiveScheduleResponse {
            month: key.to_string(),
            schedule: rota_core::apply_overrides(&record.schedule, &record.overrides),
            overrides: record.overrides,
            month_admin_id: record.month_admin_id,
            generator_locked: record.generator_locked,
            ui_locked: record.ui_locked,
        })
    }

    /// Records a manual correction for one cell of a month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is locked or unknown, the shift code or
    /// day is invalid, or the employee is not on the month's schedule.
    pub fn set_override(&self, request: &SetOverrideRequest) -> ApiResult<()> {
        let key = MonthKey::new(request.year, request.month)?;
        let shift = ShiftCode::from_str(&request.shift)?;
        validate_day_number(key, request.day)?;
        let employee_id = EmployeeId::new(&request.employee_id);

        self.with_month_lock(key, || {
            let mut record = self.load_existing(key)?;
            rota_core::ensure_open(&record)?;
            let Some(schedule_row) = record.schedule.get_mut(&employee_id) else {
                return Err(ApiError::ResourceNotFound {
                    resource_type: String::from("Employee"),
                    message: format!("{employee_id} is not on the schedule for {key}"),
                });
            };

            // Mirrored into the base cell so the persisted grid and the
            // sparse layer never drift apart.
            schedule_row.insert(request.day, shift);
            record
                .overrides
                .entry(employee_id.clone())
                .or_default()
                .insert(request.day, shift);
            self.store.save_month(&record)?;
            info!(month = %key, employee = %employee_id, day = request.day, shift = %shift, "recorded override");
            Ok(())
        })
    }

    /// Validates the effective schedule of a month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is unknown or has no administrator.
    pub fn validate_month(&self, year: u16, month: u8) -> ApiResult<ValidateMonthResponse> {
        let key = MonthKey::new(year, month)?;
        let record = self.load_existing(key)?;
        let admin_id = record
            .month_admin_id
            .as_ref()
            .ok_or_else(|| ApiError::RuleViolation {
                rule: String::from("admin_required"),
                message: format!("Month {key} has no administrator assigned"),
            })?;

        let calendar = MonthCalendar::for_month(key)?;
        let effective = rota_core::apply_overrides(&record.schedule, &record.overrides);
        let violations =
            rota_core::validate_schedule(&calendar, &effective, admin_id, &self.policy, true);
        let blocking = rota_core::has_blocking(&violations);
        Ok(ValidateMonthResponse {
            month: key.to_string(),
            violations,
            blocking,
        })
    }

    /// Finalizes a month.
    ///
    /// A refusal over blocking findings is reported in the response, not as
    /// an error; the record stays open and untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is unknown, already locked, or has no
    /// administrator.
    pub fn lock_month(&self, year: u16, month: u8) -> ApiResult<LockMonthResponse> {
        let key = MonthKey::new(year, month)?;
        self.with_month_lock(key, || {
            let record = self.load_existing(key)?;
            let calendar = MonthCalendar::for_month(key)?;
            match rota_core::lock_month(&record, &calendar, &self.policy)? {
                LockOutcome::Locked {
                    record: locked,
                    cycle_state,
                    soft_violations,
                } => {
                    self.store.save_month(&locked)?;
                    self.store.save_cycle_state(&cycle_state)?;
                    info!(month = %key, "locked month");
                    Ok(LockMonthResponse {
                        month: key.to_string(),
                        locked: true,
                        violations: soft_violations,
                        message: format!("Locked {key}"),
                    })
                }
                LockOutcome::Refused { violations } => Ok(LockMonthResponse {
                    month: key.to_string(),
                    locked: false,
                    violations,
                    message: format!("Refusing to lock {key}: blocking findings stand"),
                }),
            }
        })
    }

    /// Recomputes the rotation snapshot from a month's effective schedule.
    ///
    /// Recovery path for months finalized before a snapshot existed; the
    /// record itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is unknown or has no administrator.
    pub fn accept_month_as_baseline(
        &self,
        year: u16,
        month: u8,
    ) -> ApiResult<AcceptBaselineResponse> {
        let key = MonthKey::new(year, month)?;
        self.with_month_lock(key, || {
            let record = self.load_existing(key)?;
            let calendar = MonthCalendar::for_month(key)?;
            let snapshot = rota_core::accept_as_baseline(&record, &calendar)?;
            let employees = snapshot.cursors.len();
            self.store.save_cycle_state(&snapshot)?;
            info!(month = %key, employees, "accepted month as rotation baseline");
            Ok(AcceptBaselineResponse {
                month: key.to_string(),
                employees,
                message: format!("Rotation baseline now derived from {key}"),
            })
        })
    }

    fn load_existing(&self, key: MonthKey) -> ApiResult<MonthRecord> {
        self.store
            .load_month(key)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Month"),
                message: format!("Month {key} has no record"),
            })
    }

    /// Runs `operation` while holding this month's mutation lock.
    fn with_month_lock<T>(
        &self,
        key: MonthKey,
        operation: impl FnOnce() -> ApiResult<T>,
    ) -> ApiResult<T> {
        let cell = {
            let mut locks = self
                .month_locks
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(key).or_default())
        };
        let held = cell.lock().unwrap_or_else(PoisonError::into_inner);
        let result = operation();
        drop(held);
        result
    }
}
