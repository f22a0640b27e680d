//! Shared configuration and the location-category model.

pub mod app_config;
pub mod categories;
pub mod config;

use thiserror::Error;

pub use app_config::AppConfig;
pub use categories::{
    default_categories, load_categories, CategoriesFile, LocationCategory,
    DEFAULT_QUERY_TERMS,
};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read categories file {path}: {source}")]
    CategoriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse categories file: {0}")]
    CategoriesFileParse(#[from] serde_yaml::Error),

    #[error("invalid categories config: {0}")]
    Validation(String),
}
