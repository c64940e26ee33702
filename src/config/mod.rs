use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
    #[serde(default = "default_time_ticks")]
    pub time_ticks: u32,
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_chart_width() -> u32 {
    1200
}
fn default_chart_height() -> u32 {
    1000
}
fn default_time_ticks() -> u32 {
    16
}
fn default_background() -> String {
    "#fdfdfd".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_path().to_string_lossy().to_string(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            time_ticks: default_time_ticks(),
            background: default_background(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".appviz")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("appviz.conf")
    }

    /// Default location of the activity log
    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("console.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Names of the fields a complete config file carries.
    pub fn expected_keys() -> &'static [&'static str] {
        &[
            "data_file",
            "chart_width",
            "chart_height",
            "time_ticks",
            "background",
        ]
    }

    /// Initialize the configuration directory and file
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Data file:   {:?}", config.data_file);

        Ok(())
    }
}
