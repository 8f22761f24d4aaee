//! Busiest (zone, hour) slots query
//!
//! The candidate universe is every zone-hour pair with a non-zero count, up
//! to 24 per zone. Instead of materializing and sorting all of them, the
//! query streams candidates through the bounded retain-best-k structure so
//! memory stays proportional to `k`.

use super::top_k::retain_best;
use crate::app::models::SlotCount;
use crate::app::services::aggregate_store::AggregateStore;

/// Return at most `k` slots ordered by count descending, zone ascending,
/// hour ascending
///
/// Zero-count slots are never candidates. Empty result for `k <= 0`.
pub fn top_busy_slots(store: &AggregateStore, k: i64) -> Vec<SlotCount> {
    if k <= 0 {
        return Vec::new();
    }

    let candidates = store.iter().flat_map(|(zone, stats)| {
        stats
            .hourly_trips
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(move |(hour, &count)| SlotCount {
                zone: zone.clone(),
                hour: hour as u8,
                count,
            })
    });

    retain_best(candidates, k as usize)
}
