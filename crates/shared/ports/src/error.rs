use thiserror::Error;

/// Errors surfaced by a [`Feed`](crate::Feed)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    /// The source was torn down; no further values will arrive
    #[error("Feed closed")]
    Closed,
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
