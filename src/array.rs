//! Fixed-size backing storage.

/// Trait for the fixed-size arrays that back a [`RingFifo`].
///
/// [`RingFifo`]: ../struct.RingFifo.html
///
/// # Safety
///
/// An implementor must consist of exactly `capacity()` contiguous `Item`s
/// and nothing else, so that a pointer to the storage may be treated as a
/// pointer to its first element.
pub unsafe trait Array {
    /// The array's element type.
    type Item;

    /// Returns the number of elements the array holds.
    fn capacity() -> usize;
}

unsafe impl<T, const N: usize> Array for [T; N] {
    type Item = T;

    #[inline(always)]
    fn capacity() -> usize {
        N
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::{ArrayLength, GenericArray};

    unsafe impl<T, N> Array for GenericArray<T, N>
    where
        N: ArrayLength<T>,
    {
        type Item = T;

        #[inline(always)]
        fn capacity() -> usize {
            N::USIZE
        }
    }
}
