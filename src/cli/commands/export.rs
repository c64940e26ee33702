use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive;
use crate::data::load_records;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let records = load_records(&cfg.data_file)?;

        if records.is_empty() {
            warning("No events found: nothing to export.");
            return Ok(());
        }

        let data = derive::derive(&records)?;
        ExportLogic::export(&data, format, file, *force)?;
    }
    Ok(())
}
