use thiserror::Error;

/// Failure conditions raised by the positional selectors. Every other
/// operation in the crate is total over its documented input domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The sequence ended before reaching the requested position.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No element satisfied the predicate.
    #[error("no element matched")]
    NoMatch,

    /// A second element satisfied a predicate that required exactly one.
    #[error("more than one element matched")]
    MultipleMatches,
}

pub type Result<T> = core::result::Result<T, SelectError>;
