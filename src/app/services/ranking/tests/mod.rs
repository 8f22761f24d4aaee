//! Shared fixtures for ranking tests

mod top_k_tests;

use crate::app::services::aggregate_store::AggregateStore;

/// Build a store from literal (zone, hour) trips
pub fn store_from_trips(trips: &[(&str, u8)]) -> AggregateStore {
    let mut store = AggregateStore::new();
    for &(zone, hour) in trips {
        store.record(zone, hour);
    }
    store
}

/// Build a store where each zone receives `count` trips at hour 0
pub fn store_from_totals(totals: &[(&str, u64)]) -> AggregateStore {
    let mut store = AggregateStore::new();
    for &(zone, count) in totals {
        for _ in 0..count {
            store.record(zone, 0);
        }
    }
    store
}
