use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the documentation or `.env.example` for required configuration.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
