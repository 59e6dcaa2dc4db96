use crate::errors::{AppError, AppResult};
use crate::models::parameters::{Frequency, Scope};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_generate_path")]
    pub generate_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub default_frequency: Frequency,
    #[serde(default)]
    pub default_scope: Scope,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub strict_extension_case: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base() -> String {
    "http://localhost:8000/api".to_string()
}
fn default_generate_path() -> String {
    "/reports/generate".to_string()
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            generate_path: default_generate_path(),
            timeout_secs: default_timeout_secs(),
            default_frequency: Frequency::default(),
            default_scope: Scope::default(),
            output_dir: default_output_dir(),
            strict_extension_case: false,
            separator_char: default_separator_char(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Full URL of the report generation endpoint.
    pub fn generate_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = self.generate_path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Load configuration from the default file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {e}", path.display()))
        })
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration file. An existing file is kept, with any
    /// missing field filled in with its default.
    pub fn init_all(path: &Path) -> AppResult<Self> {
        let config = Self::load_from(path)?;
        config.save_to(path)?;
        Ok(config)
    }
}
