//! Fact lookup trait.

use async_trait::async_trait;

use super::error::FactResult;

/// A source of trivia about integers.
///
/// Implementations must be cheap to share between request handlers.
#[async_trait]
pub trait FactLookup: Send + Sync {
    /// Fetch one fact about `number`, or [`FactError::Unavailable`](super::FactError::Unavailable).
    async fn lookup_fact(&self, number: i64) -> FactResult<String>;
}
