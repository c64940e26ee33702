// src/export/logic.rs

use crate::core::derive::Derived;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::events_to_exports;
use crate::ui::messages::warning;
use crate::utils::path::absolutize;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the derived row set to `file`.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: output path, made absolute against the current directory
    /// - `force`: overwrite without asking
    pub fn export(data: &Derived, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = absolutize(file);

        ensure_writable(&path, force)?;

        let rows = events_to_exports(&data.events);

        if rows.is_empty() {
            warning("No events to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(())
    }
}
