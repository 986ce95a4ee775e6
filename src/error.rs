use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UnionFindError {
    #[error("Invalid universe size {len}: must be non-negative")]
    InvalidArgument { len: i64 },

    #[error("Index {index} out of range for universe of {len} elements (valid range 0..{len})")]
    IndexOutOfRange { index: i64, len: usize },
}

impl UnionFindError {
    // Indices above `i64::MAX` are saturated; they are out of range either way.
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_index_and_range() {
        let error = UnionFindError::out_of_range(5, 5);
        assert_eq!(
            error.to_string(),
            "Index 5 out of range for universe of 5 elements (valid range 0..5)"
        );

        let error = UnionFindError::InvalidArgument { len: -1 };
        assert_eq!(
            error.to_string(),
            "Invalid universe size -1: must be non-negative"
        );
    }

    #[test]
    fn huge_indices_saturate() {
        assert_eq!(
            UnionFindError::out_of_range(usize::MAX, 3),
            UnionFindError::IndexOutOfRange {
                index: i64::MAX,
                len: 3
            }
        );
    }
}
