pub mod error;
pub mod extents;
pub mod indices;
pub mod cursor;
pub mod view;

pub mod swap;

pub use cursor::{Cursor, Position, ReadCursor};
pub use error::{Result, ViewError};
pub use extents::Extents;
pub use indices::{IndexPrefix, RowMajorIndices};
pub use swap::{swap, Swap};
pub use view::{make_multi_view, MultiView};

/// Maximum number of dimensions a view supports.
pub const MAX_DIM: usize = 10;

/// Build a [`MultiView`] from a base cursor and one extent per dimension.
///
/// The dimension count is checked at compile time; the extents themselves
/// are still validated when the view is built.
///
/// ```
/// let data = [0, 1, 2, 3, 4, 5];
/// let view = multiview::multi_view!(multiview::Position::new(&data[..]), 2, 3).unwrap();
/// assert_eq!(view.get(&[1, 2]).unwrap(), Some(&5));
/// ```
///
/// ```compile_fail
/// let _ = multiview::multi_view!(0usize, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1);
/// ```
#[macro_export]
macro_rules! multi_view {
    (@one $x:expr) => (1usize);
    ($base:expr $(, $extent:expr)+ $(,)?) => ({
        const _: () = assert!(
            0usize $(+ $crate::multi_view!(@one $extent))+ <= $crate::MAX_DIM,
            "too many dimensions for a multi view"
        );
        $crate::MultiView::new($base, &[$($extent),+])
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_builds_view() {
        let rows = 2;
        let view = multi_view!(0usize, rows, 3, 4).unwrap();
        assert_eq!(view.sizes(), &[2, 3, 4]);
        assert_eq!(view.end(), 24);
    }

    #[test]
    fn macro_rejects_zero_extent() {
        assert_eq!(
            multi_view!(0usize, 3, 0).unwrap_err(),
            ViewError::ZeroElements { extents: vec![3, 0] }
        );
    }
}
