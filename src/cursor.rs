use std::fmt;
use std::ptr;

/// A position in a linear range that can be moved forward by an offset.
///
/// Advancing never touches the underlying storage, so computing a cursor
/// past the end of the range is always sound; only reading through it is
/// not.
pub trait Cursor: Clone {
    fn advance(&self, offset: usize) -> Self;

    /// Like `advance`, but `None` when the position cannot be represented.
    fn checked_advance(&self, offset: usize) -> Option<Self> {
        Some(self.advance(offset))
    }
}

/// A cursor that can be dereferenced without `unsafe`.
pub trait ReadCursor: Cursor {
    type Output;

    fn read(&self) -> Self::Output;
}

/* ---------- plain offsets ---------- */

/// `advance` saturates at `usize::MAX`; views go through `checked_advance`.
impl Cursor for usize {
    fn advance(&self, offset: usize) -> Self {
        self.saturating_add(offset)
    }

    fn checked_advance(&self, offset: usize) -> Option<Self> {
        self.checked_add(offset)
    }
}

/* ---------- raw pointers ---------- */

impl<T> Cursor for *const T {
    fn advance(&self, offset: usize) -> Self {
        self.wrapping_add(offset)
    }
}

impl<T> Cursor for *mut T {
    fn advance(&self, offset: usize) -> Self {
        self.wrapping_add(offset)
    }
}

/* ========================= Position ========================= */

/// A checked cursor into a borrowed slice.
pub struct Position<'a, T> {
    data: &'a [T],
    index: usize,
}

impl<'a, T> Position<'a, T> {
    /// Cursor at the first element of `data`
    pub fn new(data: &'a [T]) -> Self {
        Self::at(data, 0)
    }

    pub fn at(data: &'a [T], index: usize) -> Self {
        Self { data, index }
    }

    /// Linear index into the underlying slice
    pub fn index(&self) -> usize {
        self.index
    }

    /// The slice this cursor walks over
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Element under the cursor, `None` at or past the end.
    pub fn get(&self) -> Option<&'a T> {
        self.data.get(self.index)
    }

    /// Elements in `[self, end)`.
    ///
    /// Returns `None` if `end` walks a different slice, comes before `self`,
    /// or lies past the end of the slice.
    pub fn slice_to(&self, end: &Position<'a, T>) -> Option<&'a [T]> {
        if !ptr::eq(self.data, end.data) {
            return None;
        }
        self.data.get(self.index..end.index)
    }
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<T> PartialEq for Position<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data, other.data) && self.index == other.index
    }
}

impl<T> Eq for Position<'_, T> {}

impl<T> fmt::Debug for Position<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("index", &self.index)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<T> Cursor for Position<'_, T> {
    fn advance(&self, offset: usize) -> Self {
        Self {
            data: self.data,
            index: self.index.saturating_add(offset),
        }
    }

    fn checked_advance(&self, offset: usize) -> Option<Self> {
        Some(Self {
            data: self.data,
            index: self.index.checked_add(offset)?,
        })
    }
}

impl<'a, T> ReadCursor for Position<'a, T> {
    type Output = Option<&'a T>;

    fn read(&self) -> Self::Output {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_cursor() {
        assert_eq!(5usize.advance(3), 8);
        assert_eq!(usize::MAX.advance(1), usize::MAX);
        assert_eq!(5usize.checked_advance(3), Some(8));
        assert_eq!((usize::MAX - 1).checked_advance(2), None);
    }

    #[test]
    fn pointer_cursor() {
        let data = [10, 11, 12, 13];
        let p: *const i32 = data.as_ptr();
        let q = p.advance(2);
        assert_eq!(unsafe { *q }, 12);

        // Far past the end is computable, just not readable
        let far = p.advance(1 << 20);
        assert!(far != p);
    }

    #[test]
    fn position_read_and_slice() {
        let data = [0, 1, 2, 3, 4, 5];
        let begin = Position::new(&data[..]).advance(3);
        let end = begin.advance(3);

        assert_eq!(begin.index(), 3);
        assert_eq!(begin.read(), Some(&3));
        assert_eq!(end.read(), None);
        assert_eq!(begin.slice_to(&end), Some(&data[3..6]));
        assert_eq!(end.slice_to(&begin), None);
        assert_eq!(begin.slice_to(&end.advance(1)), None);
    }

    #[test]
    fn position_different_slices() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let pa = Position::new(&a[..]);
        let pb = Position::at(&b[..], 2);
        assert_ne!(pa, Position::new(&b[..]));
        assert_eq!(pa.slice_to(&pb), None);
        assert_eq!(pa.advance(2), Position::at(&a[..], 2));
        assert_eq!(Position::at(&a[..], usize::MAX).checked_advance(1), None);
    }
}
