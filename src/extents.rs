use std::fmt;

use num_traits::PrimInt;

use crate::error::{Result, ViewError};
use crate::MAX_DIM;

/// Dimension sizes of a view together with their row-major strides.
///
/// Both sequences live in fixed arrays of `MAX_DIM` slots; only the first
/// `ndim` slots are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    ndim: usize,
    sizes: [usize; MAX_DIM],
    strides: [usize; MAX_DIM],
    num_elements: usize,
}

impl Extents {
    /// Validate `extents` and derive their strides.
    ///
    /// Fails if there are no extents or more than [`MAX_DIM`], if any extent
    /// is negative, or if the extents describe zero elements.
    pub fn new<E: PrimInt>(extents: &[E]) -> Result<Self> {
        let ndim = extents.len();
        if ndim == 0 || ndim > MAX_DIM {
            log::debug!("rejecting extent list of length {ndim}");
            return Err(ViewError::dimension_count(ndim));
        }

        let mut sizes = [0; MAX_DIM];
        for (dim, extent) in extents.iter().enumerate() {
            if *extent < E::zero() {
                return Err(ViewError::NegativeExtent { dim });
            }
            sizes[dim] = extent.to_usize().ok_or(ViewError::ExtentOverflow { dim })?;
        }

        let sizes_used = &sizes[..ndim];
        if sizes_used.contains(&0) {
            log::debug!("rejecting empty extents {sizes_used:?}");
            return Err(ViewError::ZeroElements {
                extents: sizes_used.to_vec(),
            });
        }

        let (strides, num_elements) =
            row_major_strides(sizes_used).ok_or(ViewError::ElementCountOverflow)?;

        Ok(Self {
            ndim,
            sizes,
            strides,
            num_elements,
        })
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes[..self.ndim]
    }

    /// Linear elements spanned by one step along each dimension
    pub fn strides(&self) -> &[usize] {
        &self.strides[..self.ndim]
    }

    /// Total number of elements
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Dot product of a full index with the strides.
    ///
    /// Indices past `index.len()` count as zero. Indices are not checked
    /// against the extents.
    pub fn offset_of(&self, index: &[usize]) -> Result<usize> {
        index
            .iter()
            .zip(self.strides())
            .try_fold(0usize, |offset, (i, stride)| {
                i.checked_mul(*stride)
                    .and_then(|step| offset.checked_add(step))
            })
            .ok_or(ViewError::OffsetOverflow)
    }

    /// Full index of the element at `offset`, or `None` past the end.
    pub fn unravel(&self, mut offset: usize) -> Option<Vec<usize>> {
        if offset >= self.num_elements {
            return None;
        }

        let mut out = Vec::with_capacity(self.ndim);
        for stride in self.strides() {
            let v = offset / stride;
            offset -= v * stride;
            out.push(v);
        }
        Some(out)
    }
}

/* ---------- stride helpers ---------- */

/// Right-to-left running product: the last dimension is contiguous.
/// Returns the strides and the total element count.
fn row_major_strides(sizes: &[usize]) -> Option<([usize; MAX_DIM], usize)> {
    let mut strides = [0; MAX_DIM];
    let mut acc: usize = 1;
    for i in (0..sizes.len()).rev() {
        strides[i] = acc;
        acc = acc.checked_mul(sizes[i])?;
    }
    Some((strides, acc))
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes = self.sizes();
        if sizes.len() == 1 {
            return write!(f, "{}", sizes[0]);
        }
        write!(f, "(")?;
        for (i, s) in sizes.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{s}")?;
        }
        write!(f, ")")
    }
}
