use std::fs;
use std::path::{Path, PathBuf};

use crate::io::store_io;
use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `<config_dir>/memo/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("memo").join("config.toml"))
}

/// Read the config at `path`. A missing file gives the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config from `--config` if given, else the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) => read_config(&path),
            None => Ok(Config::default()),
        },
    }
}

/// Data file precedence: command line, then config, then platform default
pub fn resolve_data_file(cli_file: Option<&Path>, config: &Config) -> PathBuf {
    cli_file
        .map(Path::to_path_buf)
        .or_else(|| config.store.data_file.clone())
        .unwrap_or_else(store_io::default_data_file)
}
