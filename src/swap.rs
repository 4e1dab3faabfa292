/// Exchange the values of two places.
pub trait Swap {
    fn swap_with(&mut self, other: &mut Self);
}

/// Swap `a` and `b` with the routine their type selected.
pub fn swap<T: Swap + ?Sized>(a: &mut T, b: &mut T) {
    a.swap_with(b);
}

/// Implement [`Swap`] for each listed type with [`std::mem::swap`].
#[macro_export]
macro_rules! swap_by_move {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::swap::Swap for $ty {
                fn swap_with(&mut self, other: &mut Self) {
                    ::std::mem::swap(self, other);
                }
            }
        )+
    };
}

/// Implement [`Swap`] for `$ty` by calling `$f(&mut a, &mut b)`.
#[macro_export]
macro_rules! swap_via {
    ($ty:ty, $f:path) => {
        impl $crate::swap::Swap for $ty {
            fn swap_with(&mut self, other: &mut Self) {
                $f(self, other);
            }
        }
    };
}

swap_by_move!(
    bool, char, (), u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

impl<T> Swap for Vec<T> {
    fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T: ?Sized> Swap for Box<T> {
    fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T> Swap for Option<T> {
    fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T: Swap, const N: usize> Swap for [T; N] {
    fn swap_with(&mut self, other: &mut Self) {
        self[..].swap_with(&mut other[..]);
    }
}

/// # Panics
/// Panics if the slices differ in length.
impl<T: Swap> Swap for [T] {
    fn swap_with(&mut self, other: &mut Self) {
        assert_eq!(
            self.len(),
            other.len(),
            "cannot swap slices of different lengths"
        );
        for (a, b) in self.iter_mut().zip(other.iter_mut()) {
            a.swap_with(b);
        }
    }
}
