use thiserror::Error;

/// Setup-level checker failures. Per-URL probe failures are not errors;
/// they come back as data in the failure map.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("failed to build HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;
