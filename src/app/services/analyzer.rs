//! Trip analysis facade
//!
//! [`TripAnalyzer`] owns one [`AggregateStore`] and wires the record parser
//! and the two ranked queries around it. Each analyzer is an independent
//! value; nothing here is process-global, so multiple analyzers can coexist
//! in one process (and in tests).

use crate::app::models::{SlotCount, ZoneCount};
use crate::app::services::aggregate_store::AggregateStore;
use crate::app::services::ranking::{top_busy_slots, top_zones};
use crate::app::services::trip_parser::{IngestStats, parse_trip_line};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Single-writer trip aggregation and ranked-query front
#[derive(Debug, Default)]
pub struct TripAnalyzer {
    store: AggregateStore,
}

impl TripAnalyzer {
    /// Create an analyzer with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a sequence of raw lines, replacing all prior state
    ///
    /// Clear-then-rebuild: previous aggregates are discarded before the
    /// first line is consumed. Malformed lines are silently dropped and
    /// only show up in the returned counters.
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> IngestStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.clear();
        let mut stats = IngestStats::new();
        for line in lines {
            self.consume_line(line.as_ref(), &mut stats);
        }
        info!(
            "Ingested {} lines: {} accepted, {} rejected",
            stats.lines_seen, stats.lines_accepted, stats.lines_rejected
        );
        stats
    }

    /// Ingest a trip file line by line, replacing all prior state
    ///
    /// Only stream-level failures (missing file, read error) surface as
    /// errors; record-level problems follow the silent-drop policy.
    pub fn ingest_file(&mut self, path: &Path) -> Result<IngestStats> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        let reader = BufReader::new(file);

        self.store.clear();
        let mut stats = IngestStats::new();
        for line in reader.lines() {
            let line = line
                .map_err(|e| Error::io(format!("Read failed in {}", path.display()), e))?;
            self.consume_line(&line, &mut stats);
        }

        info!(
            "Ingested {}: {} of {} lines accepted ({:.1}%)",
            path.display(),
            stats.lines_accepted,
            stats.lines_seen,
            stats.acceptance_rate()
        );
        debug!("{} distinct zones accumulated", self.store.zone_count());
        Ok(stats)
    }

    /// The busiest pickup zones, at most `k` entries
    pub fn top_zones(&self, k: i64) -> Vec<ZoneCount> {
        top_zones(&self.store, k)
    }

    /// The busiest (zone, hour) slots, at most `k` entries
    pub fn top_busy_slots(&self, k: i64) -> Vec<SlotCount> {
        top_busy_slots(&self.store, k)
    }

    /// Read access to the accumulated aggregates
    pub fn store(&self) -> &AggregateStore {
        &self.store
    }

    fn consume_line(&mut self, line: &str, stats: &mut IngestStats) {
        match parse_trip_line(line) {
            Some(trip) => {
                self.store.record(trip.zone, trip.hour);
                stats.accept();
            }
            None => stats.reject(),
        }
    }
}
