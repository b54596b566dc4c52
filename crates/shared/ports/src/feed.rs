use async_trait::async_trait;

use crate::error::FeedResult;

/// Pull-based sequence of values produced over time
///
/// A feed ends with [`FeedError::Closed`](crate::FeedError::Closed) once its
/// source has been torn down. Closure is terminal: every later call
/// returns the same error.
#[async_trait]
pub trait Feed<T>: Send {
    /// Wait for the next value
    async fn next(&mut self) -> FeedResult<T>;

    /// Take the next value if one is ready, without waiting
    fn try_next(&mut self) -> FeedResult<Option<T>>;
}
