use crate::chart::{ChartOptions, render_chart};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive;
use crate::data::load_records;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::absolutize;

/// Handle the `render` command: load → derive → render → write SVG.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        width,
        height,
        force,
    } = cmd
    {
        let path = absolutize(file);
        ensure_writable(&path, *force)?;

        info(format!("Reading {}", &cfg.data_file));
        let records = load_records(&cfg.data_file)?;
        info(format!("Data size: {}", records.len()));

        if records.is_empty() {
            warning("No events found: nothing to render.");
            return Ok(());
        }

        let data = derive::derive(&records)?;

        let opts = ChartOptions {
            width: (*width).unwrap_or(cfg.chart_width),
            height: (*height).unwrap_or(cfg.chart_height),
            time_ticks: cfg.time_ticks,
            background: cfg.background.clone(),
        };

        let document = render_chart(&data, &opts);
        if document.is_empty() {
            warning("Empty chart: nothing written.");
            return Ok(());
        }

        std::fs::write(&path, &document)?;

        success(format!(
            "Chart written: {} ({} lanes, {} events)",
            path.display(),
            data.catalog.len(),
            data.events.len()
        ));
    }
    Ok(())
}
