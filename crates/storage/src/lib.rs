// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage layer for the rota shift scheduler.
//!
//! A month on disk is one JSON document named `YYYY-MM.json`; the rotation
//! snapshot lives next to them as `last_cycle_state.json`. The [`MonthStore`]
//! trait keeps the engine independent of where records actually live, and the
//! in-memory implementation backs the fast tests.

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
mod json_file;
mod memory;

#[cfg(test)]
mod tests;

use rota_domain::{CycleStateRecord, MonthKey, MonthRecord};
use std::sync::Arc;

// Re-export public types and functions
pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Durable storage for month records and the rotation snapshot.
///
/// Implementations are synchronous; callers serialize access per month
/// themselves.
pub trait MonthStore {
    /// Loads one month, or `None` when it has never been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or decoded.
    fn load_month(&self, key: MonthKey) -> Result<Option<MonthRecord>, StorageError>;

    /// Saves one month, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn save_month(&self, record: &MonthRecord) -> Result<(), StorageError>;

    /// Lists every saved month in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    fn list_months(&self) -> Result<Vec<MonthKey>, StorageError>;

    /// Loads the rotation snapshot, or `None` when none was ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    fn load_cycle_state(&self) -> Result<Option<CycleStateRecord>, StorageError>;

    /// Saves the rotation snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    fn save_cycle_state(&self, record: &CycleStateRecord) -> Result<(), StorageError>;
}

/// A shared store is still a store.
impl<S: MonthStore> MonthStore for Arc<S> {
    fn load_month(&self, key: MonthKey) -> Result<Option<MonthRecord>, StorageError> {
        self.as_ref().load_month(key)
    }

    fn save_month(&self, record: &MonthRecord) -> Result<(), StorageError> {
        self.as_ref().save_month(record)
    }

    fn list_months(&self) -> Result<Vec<MonthKey>, StorageError> {
        self.as_ref().list_months()
    }

    fn load_cycle_state(&self) -> Result<Option<CycleStateRecord>, StorageError> {
        self.as_ref().load_cycle_state()
    }

    fn save_cycle_state(&self, record: &CycleStateRecord) -> Result<(), StorageError> {
        self.as_ref().save_cycle_state(record)
    }
}
