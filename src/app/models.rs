//! Core data models for trip aggregation
//!
//! This module defines the per-zone accumulator plus the transient report
//! records produced by the two ranking queries, including the strict total
//! orders the rankers rely on for deterministic output.

use crate::constants::HOURS_PER_DAY;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per pickup-zone accumulator
///
/// Invariant: `total_trips` always equals the sum of `hourly_trips`.
/// Both counters are only ever advanced together by
/// [`crate::app::services::aggregate_store::AggregateStore::record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneStats {
    /// Total accepted trips that picked up in this zone
    pub total_trips: u64,

    /// Accepted trips per hour of day, index = hour 0-23
    pub hourly_trips: [u64; HOURS_PER_DAY],
}

impl Default for ZoneStats {
    fn default() -> Self {
        Self {
            total_trips: 0,
            hourly_trips: [0; HOURS_PER_DAY],
        }
    }
}

/// Busiest-zones report entry: a zone and its total trip count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// Busiest-slots report entry: a (zone, hour-of-day) pair and its count
///
/// Invariant: `hour` is in `0..=23`; slots with a zero count are never
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

// Ranking orders. `Ord` is defined so that the element that ranks higher in
// a report compares as `Greater`; ties on count fall through to ascending
// zone (and ascending hour for slots), so the order is total and no two
// distinct entries ever compare equal.

impl Ord for ZoneCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.zone.cmp(&self.zone))
    }
}

impl PartialOrd for ZoneCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.zone.cmp(&self.zone))
            .then_with(|| other.hour.cmp(&self.hour))
    }
}

impl PartialOrd for SlotCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
