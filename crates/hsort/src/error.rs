use thiserror::Error;

/// Failure reported by every sorting routine in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The input slice was empty.
    #[error("invalid list size")]
    InvalidListSize,
}
