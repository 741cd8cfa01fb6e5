use crate::config::ConfigError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config file load Error: {0}\nPlease create a config file.")]
    ConfigLoad(#[from] ConfigError),
    #[error("API Error: {0}")]
    Fetch(#[source] BoxError),
}
