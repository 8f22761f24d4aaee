//! Exact top-k selection over the aggregate store
//!
//! Two independent ranked queries share one selection toolkit:
//! - [`zones`] - busiest pickup zones, partition-then-sort selection
//! - [`slots`] - busiest (zone, hour) slots, bounded-heap retention
//! - [`top_k`] - the generic retain-best-k component behind the slot ranker
//!
//! Both queries are pure reads over a finished store snapshot and order
//! their output by a strict total order, so repeated calls with the same
//! store and `k` are byte-identical.

pub mod slots;
pub mod top_k;
pub mod zones;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use slots::top_busy_slots;
pub use top_k::retain_best;
pub use zones::top_zones;
