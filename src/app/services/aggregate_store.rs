//! Per-zone trip aggregation
//!
//! The store owns the zone → [`ZoneStats`] mapping built during one
//! ingestion pass. It is the single writer in the system: only
//! [`AggregateStore::record`] mutates state, once per accepted row, and the
//! ranking queries read the finished snapshot.

use crate::app::models::ZoneStats;
use std::collections::HashMap;

/// Mapping from pickup zone to accumulated trip statistics
///
/// Keys are case-sensitive zone identifiers exactly as they appeared in the
/// input. Iteration order is unspecified; the rankers impose all ordering.
#[derive(Debug, Default)]
pub struct AggregateStore {
    zones: HashMap<String, ZoneStats>,
}

impl AggregateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted trip for `zone` at `hour`
    ///
    /// Looks up or creates the zone entry and advances both the total and
    /// the hourly counter, keeping the `total == sum(hourly)` invariant.
    pub fn record(&mut self, zone: &str, hour: u8) {
        debug_assert!(hour < 24);
        if let Some(stats) = self.zones.get_mut(zone) {
            stats.total_trips += 1;
            stats.hourly_trips[hour as usize] += 1;
        } else {
            // First sighting of this zone; only now does the key allocate
            let mut stats = ZoneStats::default();
            stats.total_trips = 1;
            stats.hourly_trips[hour as usize] = 1;
            self.zones.insert(zone.to_string(), stats);
        }
    }

    /// Remove all accumulated state ahead of a fresh ingestion pass
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Number of distinct zones seen so far
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Whether the store holds no zones
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Look up the statistics for one zone
    pub fn get(&self, zone: &str) -> Option<&ZoneStats> {
        self.zones.get(zone)
    }

    /// Iterate over all (zone, stats) entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ZoneStats)> {
        self.zones.iter()
    }
}
