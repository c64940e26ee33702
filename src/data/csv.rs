//! CSV loading of the activity log.
//! One synchronous read per invocation feeds the whole pipeline.

use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::record::RawRecord;

/// Read all rows from the activity log at `path`.
///
/// Columns are resolved by header name (`Time`, `Application`, `Status`),
/// so the column order in the file is free.
pub fn load_records(path: &str) -> AppResult<Vec<RawRecord>> {
    if !Path::new(path).exists() {
        return Err(AppError::DataFileNotFound(path.to_string()));
    }

    let mut rdr = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let rec: RawRecord = row?;
        records.push(rec);
    }

    Ok(records)
}
