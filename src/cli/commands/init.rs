use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing appviz…");

    Config::init_all(cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();

    println!("📄 Config file : {}", path.display());
    println!("📈 Data file   : {}", &cfg.data_file);

    println!("🎉 appviz initialization completed!");
    Ok(())
}
