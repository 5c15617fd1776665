use thiserror::Error;

/// Common result type used across the crate.
pub type Result<T> = std::result::Result<T, NamingError>;

/// Unified error enum surfaced by strategy constructors and configuration loading.
///
/// Naming operations themselves never fail; only building a strategy can.
#[derive(Error, Debug)]
pub enum NamingError {
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for NamingError {
    fn from(value: std::io::Error) -> Self {
        NamingError::Config(format!("unable to read configuration: {value}"))
    }
}
