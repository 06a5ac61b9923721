// crates/artledger-cli/src/config.rs
//
// CLI configuration. Loaded from a TOML file or populated with defaults.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Runtime configuration for the `artledger` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Directory holding the registry's RocksDB database.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Directory holding the caller's key files.
    #[serde(default = "default_keys_dir")]
    pub keys_dir: String,

    /// Hex principal allowed to verify artists and authenticators.
    #[serde(default)]
    pub owner: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    "~/.artledger/data".to_string()
}

fn default_keys_dir() -> String {
    "~/.artledger/keys".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            keys_dir: default_keys_dir(),
            owner: None,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(expand_tilde(path))?;
        let config: CliConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
