use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(&cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => warning(format!("Cannot serialize configuration: {e}")),
            }
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (run `appviz init`)",
                    path.display()
                ));
                return Ok(());
            }

            let content = std::fs::read_to_string(&path)?;
            let value: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;

            let mut missing = Vec::new();
            for key in Config::expected_keys() {
                if value.get(key).is_none() {
                    missing.push(*key);
                }
            }

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing fields (defaults will be used): {}",
                    missing.join(", ")
                ));
            }
        }
    }
    Ok(())
}
