use thiserror::Error;


#[derive(Debug, Error)]
pub enum Error {
    /// A shape or transform was given an input it cannot build geometry from.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The rotation axis between two vectors vanished because they are
    /// parallel (`opposite == false`) or anti-parallel (`opposite == true`).
    #[error("degenerate rotation (anti-parallel: {opposite})")]
    DegenerateRotation { opposite: bool },

    #[error("invalid system: {0}")]
    InvalidSystem(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter(message.into())
    }

    pub fn system(message: impl Into<String>) -> Self {
        Error::InvalidSystem(message.into())
    }
}
