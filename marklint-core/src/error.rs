use thiserror::Error;

/// Fatal problems with a backup's structure. Any of these aborts the whole
/// parse; a partially broken backup cannot produce correct folder paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized bookmark node type: {0}")]
    UnrecognizedNodeType(String),

    #[error("bookmark node is missing required field `{0}`")]
    MissingRequiredField(String),

    #[error("child of `{0}` is not a JSON object")]
    MalformedChild(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
