use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyApiUrl,
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
