/// Convenience result type used across cardslots.
pub type CardslotsResult<T> = Result<T, CardslotsError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardslotsError {
    /// A layout or slot request violates a geometric precondition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rendering a slot sequence to text failed.
    #[error("format error: {0}")]
    Format(String),

    /// Layout or box table (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error that does not fit the categories above.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardslotsError {
    /// Build a [`CardslotsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardslotsError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`CardslotsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<std::fmt::Error> for CardslotsError {
    fn from(err: std::fmt::Error) -> Self {
        Self::format(err.to_string())
    }
}

impl From<serde_json::Error> for CardslotsError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
