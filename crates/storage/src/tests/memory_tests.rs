// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_cycle_state, create_test_key, create_test_record};
use crate::{MemoryStore, MonthStore};
use rota_domain::MonthKey;

#[test]
fn test_missing_month_loads_as_none() {
    let store = MemoryStore::new();
    assert_eq!(store.load_month(create_test_key()).unwrap(), None);
}

#[test]
fn test_month_round_trip() {
    let store = MemoryStore::new();
    let record = create_test_record();
    store.save_month(&record).unwrap();
    assert_eq!(store.load_month(record.key).unwrap(), Some(record));
}

#[test]
fn test_saving_again_replaces_the_month() {
    let store = MemoryStore::new();
    let mut record = create_test_record();
    store.save_month(&record).unwrap();

    record.ui_locked = true;
    store.save_month(&record).unwrap();

    let loaded = store.load_month(record.key).unwrap().unwrap();
    assert!(loaded.ui_locked);
}

#[test]
fn test_months_list_in_chronological_order() {
    let store = MemoryStore::new();
    for (year, month) in [(2026_u16, 3_u8), (2025, 12), (2026, 1)] {
        let mut record = create_test_record();
        record.key = MonthKey::new(year, month).unwrap();
        store.save_month(&record).unwrap();
    }

    let listed = store.list_months().unwrap();
    assert_eq!(
        listed,
        vec![
            MonthKey::new(2025, 12).unwrap(),
            MonthKey::new(2026, 1).unwrap(),
            MonthKey::new(2026, 3).unwrap(),
        ]
    );
}

#[test]
fn test_cycle_state_round_trip() {
    let store = MemoryStore::new();
    assert_eq!(store.load_cycle_state().unwrap(), None);

    let snapshot = create_test_cycle_state();
    store.save_cycle_state(&snapshot).unwrap();
    assert_eq!(store.load_cycle_state().unwrap(), Some(snapshot));
}
