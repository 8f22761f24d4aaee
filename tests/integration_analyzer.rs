//! End-to-end tests for the trip analyzer
//!
//! These tests drive the full pipeline through real files: strict line
//! validation, aggregation, and both ranked queries.

use std::io::Write;
use tempfile::NamedTempFile;
use trip_analyzer::TripAnalyzer;

/// Write a trip file mixing valid records with every rejection class
fn write_mixed_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let lines = [
        "TripID,PZone,DZone,Time,Dist,Fare",        // header
        "1,Downtown,Airport,2024-01-01 08:10,3.1,12.0",
        "2,Downtown,Harbor,2024-01-01 08:45,1.2,6.5",
        "3,Airport,Downtown,2024-01-01 17:00,3.1,12.0",
        "4,Downtown,Airport,2024-01-02 17:30,2.0,9.0",
        "5,Harbor,Downtown,2024-01-02 8:05,4.0,15.0", // single-digit hour
        ",A,B,2024-01-01 08:00,1,2",                  // empty trip id
        "6,ZoneX,B,2024-01-01 24:00,1,2",             // hour out of range
        "7,ZoneY,B,2024-01-01 08:00",                 // too few fields
        "",                                           // blank
        "8,Downtown,Airport,2024-01-03 08:59,1.0,5.0",
    ];
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[test]
fn test_full_pipeline_counts_and_rankings() {
    let file = write_mixed_file();
    let mut analyzer = TripAnalyzer::new();
    let stats = analyzer.ingest_file(file.path()).unwrap();

    assert_eq!(stats.lines_seen, 11);
    assert_eq!(stats.lines_accepted, 6);
    assert_eq!(stats.lines_rejected, 5);

    // Count conservation: store totals equal accepted lines
    let store_total: u64 = analyzer
        .store()
        .iter()
        .map(|(_, zone_stats)| zone_stats.total_trips)
        .sum();
    assert_eq!(store_total, stats.lines_accepted as u64);

    let zones = analyzer.top_zones(10);
    let ranked: Vec<(&str, u64)> = zones.iter().map(|z| (z.zone.as_str(), z.count)).collect();
    assert_eq!(
        ranked,
        vec![("Downtown", 4), ("Airport", 1), ("Harbor", 1)]
    );

    let slots = analyzer.top_busy_slots(10);
    let ranked: Vec<(&str, u8, u64)> = slots
        .iter()
        .map(|s| (s.zone.as_str(), s.hour, s.count))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Downtown", 8, 3),
            ("Airport", 17, 1),
            ("Downtown", 17, 1),
            ("Harbor", 8, 1),
        ]
    );
}

#[test]
fn test_reingesting_same_file_is_idempotent() {
    let file = write_mixed_file();
    let mut analyzer = TripAnalyzer::new();

    analyzer.ingest_file(file.path()).unwrap();
    let zones_first = analyzer.top_zones(10);
    let slots_first = analyzer.top_busy_slots(10);

    analyzer.ingest_file(file.path()).unwrap();
    assert_eq!(analyzer.top_zones(10), zones_first);
    assert_eq!(analyzer.top_busy_slots(10), slots_first);
}

#[test]
fn test_crlf_line_endings_are_accepted() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "1,Downtown,Airport,2024-01-01 08:10,3.1,12.0\r\n2,Downtown,Harbor,2024-01-01 09:45,1.2,6.5\r\n"
    )
    .unwrap();

    let mut analyzer = TripAnalyzer::new();
    let stats = analyzer.ingest_file(file.path()).unwrap();
    assert_eq!(stats.lines_accepted, 2);
    assert_eq!(analyzer.store().get("Downtown").unwrap().total_trips, 2);
}

#[test]
fn test_top_k_prefix_consistency() {
    let file = write_mixed_file();
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(file.path()).unwrap();

    let all_zones = analyzer.top_zones(1000);
    for k in 1..=all_zones.len() as i64 {
        let prefix = analyzer.top_zones(k);
        assert_eq!(prefix.as_slice(), &all_zones[..k as usize]);
    }

    let all_slots = analyzer.top_busy_slots(1000);
    for k in 1..=all_slots.len() as i64 {
        let prefix = analyzer.top_busy_slots(k);
        assert_eq!(prefix.as_slice(), &all_slots[..k as usize]);
    }
}

#[test]
fn test_k_bounds_on_real_store() {
    let file = write_mixed_file();
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(file.path()).unwrap();

    assert!(analyzer.top_zones(0).is_empty());
    assert!(analyzer.top_busy_slots(-1).is_empty());
    // 3 distinct zones regardless of how large k is
    assert_eq!(analyzer.top_zones(1000).len(), 3);
}

#[test]
fn test_file_with_only_rejected_lines_yields_empty_reports() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "TripID,PZone,DZone,Time,Dist,Fare").unwrap();
    writeln!(file, "bad,Zone,B,2024-01-01 08:00,1,2").unwrap();
    writeln!(file).unwrap();

    let mut analyzer = TripAnalyzer::new();
    let stats = analyzer.ingest_file(file.path()).unwrap();

    assert_eq!(stats.lines_accepted, 0);
    assert!(analyzer.top_zones(10).is_empty());
    assert!(analyzer.top_busy_slots(10).is_empty());
}
