//! Busiest pickup zones query
//!
//! Materializes one candidate per zone and selects the top `k` under
//! (count descending, zone ascending). When `k` is smaller than the number
//! of zones, a partition step narrows the field before the final sort, so
//! only `k` entries ever pass through the comparison-heavy path.

use crate::app::models::ZoneCount;
use crate::app::services::aggregate_store::AggregateStore;
use std::cmp::Ordering;
use tracing::debug;

/// Return at most `k` zones ordered by count descending, zone ascending
///
/// Empty result for `k <= 0` or an empty store; fewer than `k` entries when
/// the store holds fewer distinct zones.
pub fn top_zones(store: &AggregateStore, k: i64) -> Vec<ZoneCount> {
    if k <= 0 {
        return Vec::new();
    }

    let mut entries: Vec<ZoneCount> = store
        .iter()
        .map(|(zone, stats)| ZoneCount {
            zone: zone.clone(),
            count: stats.total_trips,
        })
        .collect();
    if entries.is_empty() {
        return entries;
    }

    // Display order: the highest-ranked entry sorts first
    let by_rank = |a: &ZoneCount, b: &ZoneCount| -> Ordering { b.cmp(a) };

    let k = (k as usize).min(entries.len());
    if k < entries.len() {
        debug!("partial selection: {} of {} zones", k, entries.len());
        entries.select_nth_unstable_by(k, by_rank);
        entries.truncate(k);
    }
    entries.sort_unstable_by(by_rank);
    entries
}
