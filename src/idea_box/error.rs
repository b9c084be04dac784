use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeaBoxError {
    /// Missing or malformed user input. The message is meant for the user as-is.
    #[error("{0}")]
    Usage(String),

    /// Holds the id as typed, so ids too large for any integer type still round-trip.
    #[error("No idea with id: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl IdeaBoxError {
    /// Usage and not-found errors are reported on stdout; everything else is a failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, IdeaBoxError::Usage(_) | IdeaBoxError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, IdeaBoxError>;
