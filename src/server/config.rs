use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,

    /// Directory where submitted schedule PDFs are stored.
    pub upload_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
        })
    }
}
