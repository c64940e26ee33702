//! Derivation of the chart-ready structures from the raw row set:
//! time range, hour span, application catalog and per-row lane indices.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::record::RawRecord;
use crate::models::status::Status;
use crate::utils::time::parse_epoch_secs;

const MILLIS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;

/// Global time extent of the dataset.
///
/// Taken from the first and last rows as they arrive, not from a min/max
/// scan. The log is written in chronological order; an unsorted file yields
/// an inverted range and everything downstream inherits that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn duration_millis(&self) -> i64 {
        self.end.timestamp_millis() - self.start.timestamp_millis()
    }

    /// Number of hour-granularity bands needed to cover the range.
    pub fn hour_span(&self) -> i64 {
        (self.duration_millis() as f64 / MILLIS_PER_HOUR).ceil() as i64
    }
}

/// Immutable result of the derivation pass. Computed once per load,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Derived {
    pub events: Vec<Event>,
    pub catalog: Vec<String>,
    pub range: TimeRange,
    pub hour_span: i64,
}

impl Derived {
    /// Lane index for an application name, if it appears in the catalog.
    pub fn lane_of(&self, application: &str) -> Option<usize> {
        self.catalog.iter().position(|a| a == application)
    }
}

/// Build the derived structures from the raw row set.
///
/// Fails on an empty row set (no time range can be computed) and when the
/// first or last row carries a non-numeric time field. Interior rows with a
/// bad time keep `timestamp = None` and are skipped at placement.
pub fn derive(records: &[RawRecord]) -> AppResult<Derived> {
    let first = records.first().ok_or(AppError::EmptyDataset)?;
    let last = records.last().ok_or(AppError::EmptyDataset)?;

    // -----------------------------
    // Time range and hour span
    // -----------------------------
    let start =
        parse_epoch_secs(&first.time).ok_or_else(|| AppError::InvalidTime(first.time.clone()))?;
    let end =
        parse_epoch_secs(&last.time).ok_or_else(|| AppError::InvalidTime(last.time.clone()))?;

    let range = TimeRange { start, end };
    let hour_span = range.hour_span();

    // -----------------------------
    // Application catalog, sorted and distinct
    // -----------------------------
    let mut catalog: Vec<String> = records.iter().map(|r| r.application.clone()).collect();
    catalog.sort();
    catalog.dedup();

    // name → lane index, built once from the sorted catalog
    let lanes: HashMap<&str, usize> = catalog
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    // -----------------------------
    // Per-row derivation
    // -----------------------------
    let events = records
        .iter()
        .map(|r| Event {
            timestamp: parse_epoch_secs(&r.time),
            application: r.application.clone(),
            status: Status::st_from_str(&r.status),
            lane: lanes[r.application.as_str()],
        })
        .collect();

    Ok(Derived {
        events,
        catalog,
        range,
        hour_span,
    })
}
