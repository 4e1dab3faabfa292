use num_traits::PrimInt;

use crate::error::{Result, ViewError};
use crate::extents::Extents;
use crate::MAX_DIM;

/// A validated index prefix, zero-padded up to `MAX_DIM` slots.
///
/// `len` is the number of indices the caller actually supplied. The padding
/// selects the first element along every missing trailing dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPrefix {
    values: [usize; MAX_DIM],
    ndim: usize,
    len: usize,
}

impl IndexPrefix {
    /// Normalize `indices` for a view with `ndim` dimensions.
    ///
    /// More indices than dimensions are rejected rather than ignored.
    pub fn new<I: PrimInt>(indices: &[I], ndim: usize) -> Result<Self> {
        if ndim > MAX_DIM {
            return Err(ViewError::dimension_count(ndim));
        }
        if indices.len() > ndim {
            return Err(ViewError::TooManyIndices {
                got: indices.len(),
                ndim,
            });
        }

        let mut values = [0; MAX_DIM];
        for (dim, index) in indices.iter().enumerate() {
            values[dim] = index_to_usize(dim, *index)?;
        }

        Ok(Self {
            values,
            ndim,
            len: indices.len(),
        })
    }

    /// Number of supplied indices
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The supplied indices, without padding.
    pub fn as_slice(&self) -> &[usize] {
        &self.values[..self.len]
    }

    /// The indices padded with zeros to the view's dimension count.
    pub fn padded(&self) -> &[usize] {
        &self.values[..self.ndim]
    }

    /// The same prefix with its last supplied index incremented by one.
    /// An empty prefix is returned unchanged.
    pub fn bump_last(mut self) -> Result<Self> {
        if let Some(last) = self.len.checked_sub(1) {
            self.values[last] = self.values[last]
                .checked_add(1)
                .ok_or(ViewError::IndexOverflow { dim: last })?;
        }
        Ok(self)
    }
}

fn index_to_usize<I: PrimInt>(dim: usize, index: I) -> Result<usize> {
    if index < I::zero() {
        // i128 values below i64::MIN are reported at the i64 floor
        return Err(ViewError::NegativeIndex {
            dim,
            index: index.to_i64().unwrap_or(i64::MIN),
        });
    }
    index.to_usize().ok_or(ViewError::IndexOverflow { dim })
}

/// Iterates every full index of an [`Extents`] in row-major order: the last
/// dimension varies fastest.
pub struct RowMajorIndices {
    extents: Extents,
    offset: usize,
}

impl RowMajorIndices {
    pub fn new(extents: Extents) -> Self {
        Self { extents, offset: 0 }
    }
}

impl Iterator for RowMajorIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.extents.unravel(self.offset)?;
        self.offset += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.extents.num_elements().saturating_sub(self.offset);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RowMajorIndices {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_zero_fill() {
        let p = IndexPrefix::new(&[1, 2], 4).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.as_slice(), &[1, 2]);
        assert_eq!(p.padded(), &[1, 2, 0, 0]);
    }

    #[test]
    fn prefix_empty() {
        let none: [usize; 0] = [];
        let p = IndexPrefix::new(&none, 3).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.padded(), &[0, 0, 0]);
        assert_eq!(p.bump_last().unwrap(), p);
    }

    #[test]
    fn prefix_rejects_extra_indices() {
        assert_eq!(
            IndexPrefix::new(&[0, 0, 0], 2),
            Err(ViewError::TooManyIndices { got: 3, ndim: 2 })
        );
    }

    #[test]
    fn prefix_rejects_negative() {
        assert_eq!(
            IndexPrefix::new(&[0i64, -4], 2),
            Err(ViewError::NegativeIndex { dim: 1, index: -4 })
        );
    }

    #[test]
    fn prefix_rejects_wide_views() {
        assert_eq!(
            IndexPrefix::new(&[0usize; 11], 11),
            Err(ViewError::DimensionCount { got: 11, max: MAX_DIM })
        );
        let none: [u8; 0] = [];
        assert!(IndexPrefix::new(&none, MAX_DIM + 1).is_err());
    }

    #[test]
    fn prefix_huge_index_is_overflow() {
        assert_eq!(
            IndexPrefix::new(&[u128::MAX, 0], 2),
            Err(ViewError::IndexOverflow { dim: 0 })
        );
        assert_eq!(
            IndexPrefix::new(&[0i128, i128::MIN], 2),
            Err(ViewError::NegativeIndex { dim: 1, index: i64::MIN })
        );
    }

    #[test]
    fn bump_last_only() {
        let p = IndexPrefix::new(&[1, 2, 3], 3).unwrap().bump_last().unwrap();
        assert_eq!(p.as_slice(), &[1, 2, 4]);

        let p = IndexPrefix::new(&[usize::MAX], 1).unwrap();
        assert_eq!(p.bump_last(), Err(ViewError::IndexOverflow { dim: 0 }));
    }

    #[test]
    fn row_major_2d() {
        let extents = Extents::new(&[2, 3]).unwrap();
        let all: Vec<Vec<usize>> = RowMajorIndices::new(extents).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn row_major_count_3d() {
        let extents = Extents::new(&[4, 1, 5]).unwrap();
        let all: Vec<Vec<usize>> = RowMajorIndices::new(extents).collect();
        assert_eq!(all.len(), 20);
        assert_eq!(all[0], vec![0, 0, 0]);
        assert_eq!(all[19], vec![3, 0, 4]);

        let mut iter = RowMajorIndices::new(extents);
        assert_eq!(iter.len(), 20);
        iter.next();
        assert_eq!(iter.len(), 19);
    }
}
