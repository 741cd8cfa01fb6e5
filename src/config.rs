use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::weather::Units;

const DEFAULT_BASE_URL: &str = "https://api.pirateweather.net/forecast";

/// Coordinates of the forecast location, kept as written in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Home {
    #[serde(deserialize_with = "coordinate")]
    pub lat: String,
    #[serde(deserialize_with = "coordinate")]
    pub lng: String,
}

/// Accepts both `lat: "35.68"` and `lat: 35.68`.
fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Text(String),
        Number(f64),
    }

    Ok(match Coordinate::deserialize(deserializer)? {
        Coordinate::Text(text) => text,
        Coordinate::Number(number) => number.to_string(),
    })
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub forecast_api_key: String,
    pub home: Home,
    /// Unit system requested from the forecast API
    #[serde(default)]
    pub units: Units,
    /// Dark Sky compatible forecast endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// `<home>/.config/jpweather/config.yml`.
///
/// `<home>` is `$HOME`; on Windows, where that is usually unset, the roaming
/// application data directory is used instead.
pub fn default_path() -> PathBuf {
    let home = std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(|| if cfg!(windows) { dirs::data_dir() } else { None })
        .unwrap_or_default();
    home.join(".config").join("jpweather").join("config.yml")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
