//! Library-level tests for the derivation pass.

use appviz::core::derive::derive;
use appviz::errors::AppError;
use appviz::models::record::RawRecord;
use appviz::models::status::Status;

fn rec(time: &str, app: &str, status: &str) -> RawRecord {
    RawRecord::new(time, app, status)
}

#[test]
fn test_catalog_sorted_distinct() {
    let records = vec![
        rec("100", "Viewer", "Launched"),
        rec("200", "Editor", "Launched"),
        rec("300", "Viewer", "Activated"),
        rec("400", "Browser", "Launched"),
        rec("500", "Editor", "Terminated"),
    ];

    let data = derive(&records).expect("derive");

    assert_eq!(data.catalog, vec!["Browser", "Editor", "Viewer"]);
}

#[test]
fn test_lane_index_matches_catalog_position() {
    let records = vec![
        rec("100", "Viewer", "Launched"),
        rec("200", "Editor", "Launched"),
        rec("300", "Viewer", "Activated"),
    ];

    let data = derive(&records).expect("derive");

    for ev in &data.events {
        assert_eq!(data.lane_of(&ev.application), Some(ev.lane));
    }
    assert_eq!(data.events[0].lane, 1); // Viewer
    assert_eq!(data.events[1].lane, 0); // Editor
    assert_eq!(data.events[2].lane, 1); // Viewer
}

#[test]
fn test_timestamp_is_millis() {
    let records = vec![rec("1000", "X", "Launched"), rec("4600.5", "X", "Launched")];

    let data = derive(&records).expect("derive");

    assert_eq!(
        data.events[0].timestamp.expect("ts").timestamp_millis(),
        1_000_000
    );
    assert_eq!(
        data.events[1].timestamp.expect("ts").timestamp_millis(),
        4_600_500
    );
}

#[test]
fn test_end_to_end_example() {
    let records = vec![
        rec("1000", "X", "Launched"),
        rec("4600", "Y", "Activated"),
        rec("7200", "X", "Terminated"),
    ];

    let data = derive(&records).expect("derive");

    assert_eq!(data.catalog, vec!["X", "Y"]);
    assert_eq!(data.range.start.timestamp_millis(), 1_000_000);
    assert_eq!(data.range.end.timestamp_millis(), 7_200_000);
    assert_eq!(data.hour_span, 2);
    assert_eq!(data.events[0].lane, 0);
    assert_eq!(data.events[1].lane, 1);
    assert_eq!(data.events[2].lane, 0);
}

#[test]
fn test_hour_span_zero_for_zero_length_range() {
    let records = vec![rec("5000", "X", "Launched")];

    let data = derive(&records).expect("derive");

    assert_eq!(data.range.duration_millis(), 0);
    assert_eq!(data.hour_span, 0);
}

#[test]
fn test_unsorted_input_keeps_inverted_range() {
    // range comes from first/last rows as logged, never from a min/max scan
    let records = vec![
        rec("7200", "X", "Launched"),
        rec("1000", "X", "Terminated"),
    ];

    let data = derive(&records).expect("derive");

    assert_eq!(data.range.start.timestamp_millis(), 7_200_000);
    assert_eq!(data.range.end.timestamp_millis(), 1_000_000);
    assert!(data.range.duration_millis() < 0);
    assert_eq!(data.hour_span, -1); // ceil(-1.72) toward zero
}

#[test]
fn test_unknown_status_is_preserved() {
    let records = vec![rec("100", "X", "Suspended")];

    let data = derive(&records).expect("derive");

    assert_eq!(
        data.events[0].status,
        Status::Other("Suspended".to_string())
    );
    assert!(!data.events[0].status.is_known());
}

#[test]
fn test_interior_malformed_time_yields_none() {
    let records = vec![
        rec("1000", "X", "Launched"),
        rec("oops", "X", "Activated"),
        rec("7200", "X", "Terminated"),
    ];

    let data = derive(&records).expect("derive");

    assert!(data.events[0].timestamp.is_some());
    assert!(data.events[1].timestamp.is_none());
    assert!(data.events[2].timestamp.is_some());
}

#[test]
fn test_malformed_boundary_time_fails() {
    let records = vec![rec("oops", "X", "Launched"), rec("7200", "X", "Terminated")];

    match derive(&records) {
        Err(AppError::InvalidTime(raw)) => assert_eq!(raw, "oops"),
        other => panic!("expected InvalidTime, got {:?}", other.map(|d| d.catalog)),
    }
}

#[test]
fn test_empty_input_fails() {
    match derive(&[]) {
        Err(AppError::EmptyDataset) => {}
        other => panic!("expected EmptyDataset, got {:?}", other.map(|d| d.catalog)),
    }
}

#[test]
fn test_derivation_is_deterministic() {
    let records = vec![
        rec("1000", "Browser", "Launched"),
        rec("2200", "Editor", "Activated"),
        rec("7200", "Browser", "Terminated"),
    ];

    let a = derive(&records).expect("derive");
    let b = derive(&records).expect("derive");

    assert_eq!(a.catalog, b.catalog);
    assert_eq!(a.range, b.range);
    assert_eq!(a.hour_span, b.hour_span);

    let lanes_a: Vec<usize> = a.events.iter().map(|e| e.lane).collect();
    let lanes_b: Vec<usize> = b.events.iter().map(|e| e.lane).collect();
    assert_eq!(lanes_a, lanes_b);

    let ts_a: Vec<_> = a.events.iter().map(|e| e.timestamp).collect();
    let ts_b: Vec<_> = b.events.iter().map(|e| e.timestamp).collect();
    assert_eq!(ts_a, ts_b);
}
