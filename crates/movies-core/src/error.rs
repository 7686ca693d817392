use thiserror::Error;

/// Top-level error type for the movie catalog.
#[derive(Error, Debug)]
pub enum MoviesError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<::config::ConfigError> for MoviesError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
