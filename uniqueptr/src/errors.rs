use thiserror::Error;

/// Returned when a null `UniquePtr` is converted into something that must own a value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("UniquePtr is null")]
#[non_exhaustive]
pub struct NullPtrError;

/// Returned by the checked element accessors of `UniquePtr<[T]>`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("index {index} into a null UniquePtr")]
    Null {
        index: usize,
    },

    #[error("index {index} out of bounds for array of length {len}")]
    OutOfBounds {
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(NullPtrError.to_string(), "UniquePtr is null");
        assert_eq!(IndexError::Null { index: 2 }.to_string(),
                   "index 2 into a null UniquePtr");
        assert_eq!(IndexError::OutOfBounds { index: 5, len: 5 }.to_string(),
                   "index 5 out of bounds for array of length 5");
    }
}
