use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::Config;

/// Error type for locating and reading config.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot locate {what}: neither ${var} nor $HOME is set")]
    NoHome { what: &'static str, var: &'static str },
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

const APP_DIR: &str = "tally";

/// Resolve `$VAR/tally/<file>`, falling back to `$HOME/<home_rel>/tally/<file>`
fn xdg_path(
    env: &impl Fn(&str) -> Option<OsString>,
    var: &'static str,
    home_rel: &str,
    file: &str,
) -> Result<PathBuf, ConfigError> {
    let non_empty = |name: &str| env(name).filter(|v| !v.is_empty()).map(PathBuf::from);
    if let Some(base) = non_empty(var) {
        return Ok(base.join(APP_DIR).join(file));
    }
    match non_empty("HOME") {
        Some(home) => Ok(home.join(home_rel).join(APP_DIR).join(file)),
        None => Err(ConfigError::NoHome { what: file_what(file), var }),
    }
}

fn file_what(file: &str) -> &'static str {
    match file {
        "config.toml" => "the config file",
        "tally.db" => "the database",
        _ => "the log file",
    }
}

fn process_env(name: &str) -> Option<OsString> {
    std::env::var_os(name)
}

/// Default config file: `$XDG_CONFIG_HOME/tally/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    xdg_path(&process_env, "XDG_CONFIG_HOME", ".config", "config.toml")
}

/// Default database: `$XDG_DATA_HOME/tally/tally.db`
pub fn default_db_path() -> Result<PathBuf, ConfigError> {
    xdg_path(&process_env, "XDG_DATA_HOME", ".local/share", "tally.db")
}

/// Default log file: `$XDG_STATE_HOME/tally/tally.log`
pub fn default_log_path() -> Result<PathBuf, ConfigError> {
    xdg_path(&process_env, "XDG_STATE_HOME", ".local/state", "tally.log")
}

/// Load the config. An explicit path must exist; the default location
/// may be absent, in which case every setting takes its default.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = default_config_path()?;
            if path.exists() {
                read_config(&path)
            } else {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

/// Parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Database path: `--db` wins over `[storage] path`, which wins over the default
pub fn resolve_db_path(cli: Option<&Path>, config: &Config) -> Result<PathBuf, ConfigError> {
    match cli.or(config.storage.path.as_deref()) {
        Some(path) => Ok(path.to_path_buf()),
        None => default_db_path(),
    }
}
