//! Configuration for report generation.
//!
//! Holds the report sizing and output preferences shared between the CLI
//! commands and the library entry points.

use crate::constants::{DEFAULT_TOP_SLOTS, DEFAULT_TOP_ZONES};
use serde::{Deserialize, Serialize};

/// Global configuration for trip analysis runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of entries requested from the busiest-zones report
    pub top_zones: usize,

    /// Number of entries requested from the busiest-slots report
    pub top_slots: usize,

    /// Show a progress spinner while ingesting large files
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_zones: DEFAULT_TOP_ZONES,
            top_slots: DEFAULT_TOP_SLOTS,
            show_progress: true,
        }
    }
}

impl Config {
    /// Create configuration with a custom busiest-zones report size
    pub fn with_top_zones(mut self, top_zones: usize) -> Self {
        self.top_zones = top_zones;
        self
    }

    /// Create configuration with a custom busiest-slots report size
    pub fn with_top_slots(mut self, top_slots: usize) -> Self {
        self.top_slots = top_slots;
        self
    }

    /// Disable the ingestion progress spinner
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }
}
