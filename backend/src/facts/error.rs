//! Error types for fact lookups.

/// Result type for fact lookups
pub type FactResult<T> = Result<T, FactError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    /// The fact source could not produce a fact for this number.
    #[error("No fact available for {number}: {reason}")]
    Unavailable { number: i64, reason: String },
}

impl FactError {
    pub fn unavailable(number: i64, reason: impl Into<String>) -> Self {
        FactError::Unavailable {
            number,
            reason: reason.into(),
        }
    }
}
