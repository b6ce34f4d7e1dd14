// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MonthStore, StorageError};
use rota_domain::{CycleStateRecord, MonthKey, MonthRecord};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory [`MonthStore`], used in tests and as the reference
/// implementation of the trait's semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    months: Mutex<BTreeMap<MonthKey, MonthRecord>>,
    cycle_state: Mutex<Option<CycleStateRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn months(&self) -> MutexGuard<'_, BTreeMap<MonthKey, MonthRecord>> {
        self.months.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cycle(&self) -> MutexGuard<'_, Option<CycleStateRecord>> {
        self.cycle_state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl MonthStore for MemoryStore {
    fn load_month(&self, key: MonthKey) -> Result<Option<MonthRecord>, StorageError> {
        Ok(self.months().get(&key).cloned())
    }

    fn save_month(&self, record: &MonthRecord) -> Result<(), StorageError> {
        self.months().insert(record.key, record.clone());
        Ok(())
    }

    fn list_months(&self) -> Result<Vec<MonthKey>, StorageError> {
        Ok(self.months().keys().copied().collect())
    }

    fn load_cycle_state(&self) -> Result<Option<CycleStateRecord>, StorageError> {
        Ok(self.cycle().clone())
    }

    fn save_cycle_state(&self, record: &CycleStateRecord) -> Result<(), StorageError> {
        *self.cycle() = Some(record.clone());
        Ok(())
    }
}
