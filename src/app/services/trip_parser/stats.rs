//! Ingestion statistics
//!
//! Per-pass counters reported after an ingestion run. Rejections stay
//! invisible at the record level (the silent-drop contract); these counters
//! are the only place the drop rate surfaces.

/// Simple ingestion statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct IngestStats {
    /// Total number of input lines consumed
    pub lines_seen: usize,

    /// Number of lines accepted into the aggregate
    pub lines_accepted: usize,

    /// Number of lines silently dropped (blank, header, or malformed)
    pub lines_rejected: usize,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted line
    pub fn accept(&mut self) {
        self.lines_seen += 1;
        self.lines_accepted += 1;
    }

    /// Record one rejected line
    pub fn reject(&mut self) {
        self.lines_seen += 1;
        self.lines_rejected += 1;
    }

    /// Calculate acceptance rate as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.lines_seen == 0 {
            0.0
        } else {
            (self.lines_accepted as f64 / self.lines_seen as f64) * 100.0
        }
    }
}
