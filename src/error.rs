use crate::MAX_DIM;

/// Errors raised when building or indexing a multi view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ViewError {
    #[error("expected between 1 and {max} extents, got {got}")]
    DimensionCount { got: usize, max: usize },

    #[error("extent of dimension {dim} is negative")]
    NegativeExtent { dim: usize },

    #[error("extent of dimension {dim} does not fit in usize")]
    ExtentOverflow { dim: usize },

    #[error("extents {extents:?} describe zero elements")]
    ZeroElements { extents: Vec<usize> },

    #[error("element count overflows usize")]
    ElementCountOverflow,

    #[error("got {got} indices for a {ndim}-dimensional view")]
    TooManyIndices { got: usize, ndim: usize },

    #[error("index {index} for dimension {dim} is negative")]
    NegativeIndex { dim: usize, index: i64 },

    #[error("index for dimension {dim} does not fit in usize")]
    IndexOverflow { dim: usize },

    #[error("offset overflows usize")]
    OffsetOverflow,

    #[error("range of length {len} is too short for {required} elements")]
    RangeTooShort { len: usize, required: usize },
}

impl ViewError {
    pub(crate) fn dimension_count(got: usize) -> Self {
        ViewError::DimensionCount { got, max: MAX_DIM }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ViewError::dimension_count(11).to_string(),
            "expected between 1 and 10 extents, got 11"
        );
        assert_eq!(
            ViewError::ZeroElements { extents: vec![2, 0] }.to_string(),
            "extents [2, 0] describe zero elements"
        );
        assert_eq!(
            ViewError::NegativeIndex { dim: 1, index: -3 }.to_string(),
            "index -3 for dimension 1 is negative"
        );
    }
}
