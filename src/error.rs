//! Errors reported for positions that cannot be used.

use std::fmt;

/// Why a [`Position`](crate::Position) was rejected by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionError {
    /// The position was taken from a different list.
    ForeignList,
    /// The element the position named has been erased.
    Stale,
    /// The end position has no successor and holds no element.
    PastEnd,
    /// No element follows the position.
    NothingAfter,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PositionError::ForeignList => "position belongs to a different list",
            PositionError::Stale => "position refers to an erased element",
            PositionError::PastEnd => "position is past the end of the list",
            PositionError::NothingAfter => "no element follows the position",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for PositionError {}

/// Error returned by [`ForwardList::try_insert_after`](crate::ForwardList::try_insert_after).
///
/// Hands the value back so the caller keeps ownership of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertError<T> {
    error: PositionError,
    value: T,
}

impl<T> InsertError<T> {
    pub(crate) fn new(error: PositionError, value: T) -> Self {
        InsertError { error, value }
    }

    /// Why the position was rejected.
    pub fn error(&self) -> PositionError {
        self.error
    }

    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot insert: {}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PositionError::Stale.to_string(),
            "position refers to an erased element"
        );

        let err = InsertError::new(PositionError::PastEnd, 7);
        assert_eq!(
            err.to_string(),
            "cannot insert: position is past the end of the list"
        );
        assert_eq!(err.error(), PositionError::PastEnd);
        assert_eq!(err.into_inner(), 7);
    }
}
