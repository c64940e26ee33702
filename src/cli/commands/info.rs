use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive;
use crate::data::load_records;
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;
use crate::utils::time::format_instant;

/// Handle the `info` command: derive the dataset and print a summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Info = cmd {
        let records = load_records(&cfg.data_file)?;

        if records.is_empty() {
            warning("No events found in the activity log.");
            return Ok(());
        }

        let data = derive::derive(&records)?;

        header("Application activity summary");
        println!("Rows:      {}", data.events.len());
        println!(
            "Range:     {} → {}",
            format_instant(data.range.start),
            format_instant(data.range.end)
        );
        println!("Hours:     {}", data.hour_span);
        println!();

        let mut table = Table::new(&[
            "Lane",
            "Application",
            "Events",
            "Activated",
            "Deactivated",
            "Launched",
            "Terminated",
            "Other",
        ]);

        for (lane, app) in data.catalog.iter().enumerate() {
            let mut counts = StatusCounts::default();
            for ev in data.events.iter().filter(|e| e.lane == lane) {
                counts.bump(&ev.status);
            }

            table.add_row(vec![
                lane.to_string(),
                app.clone(),
                counts.total.to_string(),
                counts.activated.to_string(),
                counts.deactivated.to_string(),
                counts.launched.to_string(),
                counts.terminated.to_string(),
                counts.other.to_string(),
            ]);
        }

        println!("{}", table.render());
    }
    Ok(())
}

#[derive(Default)]
struct StatusCounts {
    total: usize,
    activated: usize,
    deactivated: usize,
    launched: usize,
    terminated: usize,
    other: usize,
}

impl StatusCounts {
    fn bump(&mut self, status: &Status) {
        self.total += 1;
        match status {
            Status::Activated => self.activated += 1,
            Status::Deactivated => self.deactivated += 1,
            Status::Launched => self.launched += 1,
            Status::Terminated => self.terminated += 1,
            Status::Other(_) => self.other += 1,
        }
    }
}
