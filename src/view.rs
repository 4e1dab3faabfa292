use std::ops::Range;

use num_traits::PrimInt;

use crate::cursor::{Cursor, Position, ReadCursor};
use crate::error::{Result, ViewError};
use crate::extents::Extents;
use crate::indices::{IndexPrefix, RowMajorIndices};

/* ========================= MultiView ========================= */

/// A multi-dimensional view of a one-dimensional linear range.
///
/// The view does not own the range. `base` marks its first element and the
/// extents describe how the range is split into dimensions, last dimension
/// contiguous. Every operation is a pure function of the base cursor, the
/// strides and the supplied indices.
///
/// Index prefixes may be shorter than the number of dimensions; missing
/// trailing indices are taken as zero, which addresses the whole sub-object
/// spanned by the remaining dimensions. Indices are *not* checked against
/// the extents: the caller must ensure `indices[i] < sizes()[i]`. An
/// out-of-extent index yields a cursor outside the intended sub-range. Only
/// negative indices, too many indices, and arithmetic overflow are reported.
///
/// ```
/// use multiview::MultiView;
///
/// let data = [0, 1, 2, 3, 4, 5];
/// let view = MultiView::from_slice(&data[..], &[2, 3]).unwrap();
/// assert_eq!(view.get(&[1, 2]).unwrap(), Some(&5));
/// assert_eq!(view.get(&[1]).unwrap(), Some(&3));
/// assert_eq!(view.sub_slice(&[1]).unwrap(), Some(&data[3..6]));
/// ```
///
/// Indices and extents are integers; fractional values do not compile.
///
/// ```compile_fail
/// use multiview::MultiView;
///
/// let data = [0, 1, 2, 3, 4, 5];
/// let view = MultiView::from_slice(&data[..], &[2, 3]).unwrap();
/// let _ = view.get(&[-0.5f64, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiView<C> {
    base: C,
    extents: Extents,
}

impl<C: Cursor> MultiView<C> {
    /// View the range starting at `base` with the given dimension extents.
    pub fn new<E: PrimInt>(base: C, extents: &[E]) -> Result<Self> {
        let extents = Extents::new(extents)?;
        Self::with_extents(base, extents)
    }

    /// View the range starting at `base` with already validated extents.
    ///
    /// Fails if the end of the range is not representable as a cursor.
    pub fn with_extents(base: C, extents: Extents) -> Result<Self> {
        if base.checked_advance(extents.num_elements()).is_none() {
            log::debug!("rejecting view whose end overflows, extents {extents}");
            return Err(ViewError::OffsetOverflow);
        }
        log::trace!(
            "multi view over {} elements, extents {}, strides {:?}",
            extents.num_elements(),
            extents,
            extents.strides()
        );
        Ok(Self { base, extents })
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    pub fn ndim(&self) -> usize {
        self.extents.ndim()
    }

    pub fn sizes(&self) -> &[usize] {
        self.extents.sizes()
    }

    pub fn strides(&self) -> &[usize] {
        self.extents.strides()
    }

    pub fn num_elements(&self) -> usize {
        self.extents.num_elements()
    }

    /// Begin of the whole object.
    pub fn begin(&self) -> C {
        self.base.clone()
    }

    /// End of the whole object. Construction guarantees it is representable.
    pub fn end(&self) -> C {
        self.base.advance(self.extents.num_elements())
    }

    /// Linear offset of the sub-object at `indices`.
    pub fn offset<I: PrimInt>(&self, indices: &[I]) -> Result<usize> {
        let prefix = IndexPrefix::new(indices, self.ndim())?;
        self.prefix_offset(&prefix)
    }

    /// Begin of the sub-object at `indices`. No indices means the whole
    /// object.
    pub fn begin_at<I: PrimInt>(&self, indices: &[I]) -> Result<C> {
        self.cursor_at(self.offset(indices)?)
    }

    /// End of the sub-object at `indices`: the begin of the same prefix with
    /// its last index incremented. No indices means the whole object.
    pub fn end_at<I: PrimInt>(&self, indices: &[I]) -> Result<C> {
        let prefix = IndexPrefix::new(indices, self.ndim())?;
        if prefix.is_empty() {
            return Ok(self.end());
        }
        let offset = self.prefix_offset(&prefix.bump_last()?)?;
        self.cursor_at(offset)
    }

    /// Every full index of the view in row-major order.
    pub fn indices(&self) -> RowMajorIndices {
        RowMajorIndices::new(self.extents)
    }

    fn prefix_offset(&self, prefix: &IndexPrefix) -> Result<usize> {
        self.extents.offset_of(prefix.padded())
    }

    fn cursor_at(&self, offset: usize) -> Result<C> {
        self.base
            .checked_advance(offset)
            .ok_or(ViewError::OffsetOverflow)
    }
}

impl<C: ReadCursor> MultiView<C> {
    /// Element at `indices`. Missing trailing indices are zero filled, so a
    /// partial index reads the first element of the addressed sub-object.
    pub fn get<I: PrimInt>(&self, indices: &[I]) -> Result<C::Output> {
        Ok(self.begin_at(indices)?.read())
    }
}

/* ---------- offset views ---------- */

impl MultiView<usize> {
    /// Offsets `[begin, end)` of the sub-object at `indices`, suitable for
    /// indexing storage the view does not borrow.
    pub fn range<I: PrimInt>(&self, indices: &[I]) -> Result<Range<usize>> {
        Ok(self.begin_at(indices)?..self.end_at(indices)?)
    }
}

/* ---------- slice views ---------- */

impl<'a, T> MultiView<Position<'a, T>> {
    /// View `data` with the given extents. `data` must hold at least as many
    /// elements as the extents describe.
    pub fn from_slice<E: PrimInt>(data: &'a [T], extents: &[E]) -> Result<Self> {
        let extents = Extents::new(extents)?;
        if data.len() < extents.num_elements() {
            return Err(ViewError::RangeTooShort {
                len: data.len(),
                required: extents.num_elements(),
            });
        }
        Self::with_extents(Position::new(data), extents)
    }

    /// Elements of the sub-object at `indices`, or `None` if out-of-extent
    /// indices push it past the end of the slice.
    pub fn sub_slice<I: PrimInt>(&self, indices: &[I]) -> Result<Option<&'a [T]>> {
        let begin = self.begin_at(indices)?;
        let end = self.end_at(indices)?;
        Ok(begin.slice_to(&end))
    }
}

/* ---------- raw pointer views ---------- */

impl<T: Copy> MultiView<*const T> {
    /// Copy out the element at `indices`.
    ///
    /// # Safety
    /// The addressed element must lie inside the live allocation `base`
    /// points into.
    pub unsafe fn read<I: PrimInt>(&self, indices: &[I]) -> Result<T> {
        let ptr = self.begin_at(indices)?;
        Ok(*ptr)
    }
}

impl<T> MultiView<*mut T> {
    /// Overwrite the element at `indices`, dropping the previous value.
    ///
    /// # Safety
    /// The addressed element must lie inside the live allocation `base`
    /// points into, and nothing else may access it concurrently.
    pub unsafe fn write<I: PrimInt>(&self, indices: &[I], value: T) -> Result<()> {
        let ptr = self.begin_at(indices)?;
        *ptr = value;
        Ok(())
    }
}

/// Make a [`MultiView`] of the range beginning at `base`, deducing the
/// cursor type.
pub fn make_multi_view<C: Cursor, E: PrimInt>(base: C, extents: &[E]) -> Result<MultiView<C>> {
    MultiView::new(base, extents)
}

/* ========================= Tests ========================= */
