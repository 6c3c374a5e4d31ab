use thiserror::Error;

/// Returned by [`Dataset::add`](crate::Dataset::add) when the key is already taken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Key {key} is not unique")]
pub struct UniquenessViolation {
    key: String,
}

impl UniquenessViolation {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    NotUnique(#[from] UniquenessViolation),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
