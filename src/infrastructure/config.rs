//! Runtime settings.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, `SIMBANK__*`
//! environment variables, then command-line flags (applied by `main`).

use crate::domain::Language;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "simbank.toml";
const ENV_PREFIX: &str = "SIMBANK__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the JSON records, the log and exports.
    pub data_dir: PathBuf,
    /// Keep everything in memory; nothing survives exit.
    pub in_memory: bool,
    pub log_file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    pub default_language: Language,
    pub starting_balance: f64,
    pub lookup_delay_ms: u64,
    /// Receiver IDs shorter than this are not looked up.
    pub lookup_min_len: usize,
    pub history_limit: usize,
    /// Show issued verification codes in the status line.
    pub show_demo_codes: bool,
    /// Report a wrong PIN with the same text as an unknown ID.
    pub uniform_login_errors: bool,
    pub export_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible account IDs and codes.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("simbank-data"),
            in_memory: false,
            log_file: None,
            log_level: "info".into(),
            default_language: Language::Kn,
            starting_balance: 10000.0,
            lookup_delay_ms: 600,
            lookup_min_len: 10,
            history_limit: 5,
            show_demo_codes: true,
            uniform_login_errors: false,
            export_path: None,
            seed: None,
        }
    }
}

impl Settings {
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| self.data_dir.join("simbank.log"))
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_path.clone().unwrap_or_else(|| self.data_dir.join("transactions.csv"))
    }

    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `SIMBANK__*` overrides. Unknown keys and unparsable values are ignored.
    pub fn apply_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name {
                "DATA_DIR" => self.data_dir = PathBuf::from(value),
                "IN_MEMORY" => set_parsed(&mut self.in_memory, &value),
                "LOG_FILE" => self.log_file = Some(PathBuf::from(value)),
                "LOG_LEVEL" => self.log_level = value,
                "LANGUAGE" => {
                    if let Some(lang) = Language::from_code(&value) {
                        self.default_language = lang;
                    }
                }
                "STARTING_BALANCE" => set_parsed(&mut self.starting_balance, &value),
                "LOOKUP_DELAY_MS" => set_parsed(&mut self.lookup_delay_ms, &value),
                "LOOKUP_MIN_LEN" => set_parsed(&mut self.lookup_min_len, &value),
                "HISTORY_LIMIT" => set_parsed(&mut self.history_limit, &value),
                "SHOW_DEMO_CODES" => set_parsed(&mut self.show_demo_codes, &value),
                "UNIFORM_LOGIN_ERRORS" => set_parsed(&mut self.uniform_login_errors, &value),
                "EXPORT_PATH" => self.export_path = Some(PathBuf::from(value)),
                "SEED" => {
                    if let Ok(seed) = value.trim().parse() {
                        self.seed = Some(seed);
                    }
                }
                _ => {}
            }
        }
    }
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, raw: &str) {
    if let Ok(parsed) = raw.trim().parse() {
        *slot = parsed;
    }
}

/// Loads settings from `path`, or from `simbank.toml` in the working
/// directory when no path is given. Only an explicitly named file must exist.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let mut settings = match fs::read_to_string(&path) {
        Ok(raw) => Settings::from_toml(&raw, &path)?,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    settings.apply_env(std::env::vars());
    Ok(settings)
}
