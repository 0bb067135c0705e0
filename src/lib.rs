//! A FIFO queue on a circular buffer with fixed capacity.
//! Requires Rust 1.59+
//!
//! It can be stored directly on the stack if needed.
//!
//! The queue has `O(1)` pushes and pops and performs no allocation after
//! construction. Elements are moved in and out by value and the contained
//! elements are not required to be copyable.
//!
//! Instead of reserving one slot of the backing array to tell a full
//! buffer from an empty one, [`RingFifo`] records whether the most recent
//! operation was a pop. When the read and write cursors coincide, that
//! flag settles the ambiguity, so **all N slots of the backing array hold
//! elements** and `capacity()` equals the array length.
//!
//! # Feature Flags
//! The **ringfifo** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; disable for `no_std` builds
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `RingFifo` storage.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringfifo = "0.1"
//! ```
//!
//! If you would like to use ringfifo in a `no_std` crate, disable the
//! default features:
//!
//! ```toml
//! [dependencies]
//! ringfifo = { version = "0.1", default-features = false }
//! ```
//!
//! # Examples
//! ```
//! use ringfifo::RingFifo;
//!
//! let mut fifo: RingFifo<[_; 4]> = RingFifo::new();
//! assert_eq!(fifo.capacity(), 4);
//! assert_eq!(fifo.len(), 0);
//!
//! assert!(fifo.push_back(1).is_ok());
//! assert!(fifo.push_back(2).is_ok());
//! assert_eq!(fifo.len(), 2);
//!
//! assert_eq!(fifo.pop_front(), Some(1));
//! assert_eq!(fifo.pop_front(), Some(2));
//! assert_eq!(fifo.pop_front(), None);
//! ```
//!
//! A rejected push hands the element back instead of overwriting:
//!
//! ```
//! use ringfifo::entry::Entry;
//! use ringfifo::RingFifo;
//!
//! let mut log: RingFifo<[Entry; 4]> = RingFifo::new();
//! for id in 1..=4u8 {
//!     let item = Entry::new(id, "boot", u64::from(id));
//!     assert!(log.push_back(item).is_ok());
//! }
//! assert!(log.is_full());
//!
//! let refused = log.push_back(Entry::new(5, "late", 5));
//! assert_eq!(refused.unwrap_err().element.id, 5);
//!
//! assert_eq!(log.pop_front().map(|e| e.id), Some(1));
//! ```
//!
//! # Concurrency
//!
//! `RingFifo` performs no internal synchronization. All mutating
//! operations take `&mut self`, so sharing a queue between threads
//! requires external mutual exclusion (a mutex, or a single-threaded
//! event loop that serializes the producer and the consumer).

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

use core::fmt;
use core::iter::FromIterator;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

mod array;
pub mod entry;
pub mod error;
pub mod hexdump;
mod utils;

pub use crate::array::Array;
pub use crate::error::CapacityError;

use crate::utils::{count, wrap_add, wrap_sub};

/// A fixed capacity FIFO queue on a circular buffer.
///
/// It can be stored directly on the stack if needed.
///
/// Elements enter at the back with [`push_back`] and leave from the front
/// with [`pop_front`], in strict first-in-first-out order. Both
/// operations are `O(1)`, never block, and signal a full or empty queue
/// through their return value instead of waiting.
///
/// # Capacity
///
/// `capacity()` equals the backing array length: the queue tracks whether
/// the last operation was a pop, which removes the need for the
/// traditional reserved slot.
///
/// [`push_back`]: #method.push_back
/// [`pop_front`]: #method.pop_front
pub struct RingFifo<A: Array> {
    xs: MaybeUninit<A>,
    // Read cursor: index of the front element, next pop.
    tail: usize,
    // Write cursor: index the next push lands in.
    head: usize,
    // True iff the most recent successful operation was a pop. When the
    // cursors coincide this is what separates empty from full.
    last_read: bool,
}

impl<A: Array> RingFifo<A> {
    #[inline]
    fn wrap_add(index: usize, addend: usize) -> usize {
        wrap_add(index, addend, A::capacity())
    }

    #[inline]
    fn ptr(&self) -> *const A::Item {
        self.xs.as_ptr() as *const A::Item
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut A::Item {
        self.xs.as_mut_ptr() as *mut A::Item
    }

    /// Reads the slot at `offset` out of the buffer.
    ///
    /// Unsafe because the caller must ensure the slot holds a live
    /// element and is not read again.
    #[inline]
    unsafe fn buffer_read(&mut self, offset: usize) -> A::Item {
        debug_assert!(offset < A::capacity());
        ptr::read(self.ptr().add(offset))
    }

    /// Writes `element` into the slot at `offset` without dropping the
    /// previous contents.
    #[inline]
    unsafe fn buffer_write(&mut self, offset: usize, element: A::Item) {
        debug_assert!(offset < A::capacity());
        ptr::write(self.ptr_mut().add(offset), element);
    }

    /// The whole backing buffer as a slice. Slots outside
    /// `tail..head` (in wrapping terms) are uninitialized and must not
    /// be touched by the caller.
    #[inline]
    unsafe fn buffer_as_slice(&self) -> &[A::Item] {
        slice::from_raw_parts(self.ptr(), A::capacity())
    }

    #[inline]
    unsafe fn buffer_as_mut_slice(&mut self) -> &mut [A::Item] {
        slice::from_raw_parts_mut(self.ptr_mut(), A::capacity())
    }
}

impl<A: Array> RingFifo<A> {
    /// Creates an empty `RingFifo`.
    ///
    /// The backing storage is left uninitialized; only slots a push has
    /// written to are ever read.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let fifo: RingFifo<[usize; 3]> = RingFifo::new();
    /// assert!(fifo.is_empty());
    /// ```
    #[inline]
    pub fn new() -> RingFifo<A> {
        RingFifo {
            xs: MaybeUninit::uninit(),
            tail: 0,
            head: 0,
            last_read: true,
        }
    }

    /// Returns the capacity of the `RingFifo`.
    ///
    /// Every slot of the backing array is usable, so the capacity equals
    /// the array length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let fifo: RingFifo<[usize; 4]> = RingFifo::new();
    /// assert_eq!(fifo.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        A::capacity()
    }

    /// Returns the number of elements in the `RingFifo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 4]> = RingFifo::new();
    /// assert_eq!(fifo.len(), 0);
    /// fifo.push_back(1).unwrap();
    /// assert_eq!(fifo.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        count(self.tail, self.head, A::capacity(), self.last_read)
    }

    /// Returns true if the queue contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 4]> = RingFifo::new();
    /// assert!(fifo.is_empty());
    /// fifo.push_back(1).unwrap();
    /// assert!(!fifo.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last_read && self.head == self.tail
    }

    /// Returns true if the queue is at capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 1]> = RingFifo::new();
    /// assert!(!fifo.is_full());
    /// fifo.push_back(1).unwrap();
    /// assert!(fifo.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        // A zero-length backing array is always full (and always empty):
        // nothing can ever be stored in it.
        A::capacity() == 0 || (!self.last_read && self.head == self.tail)
    }

    /// Appends an element to the back of the queue.
    ///
    /// When the queue is full the push is rejected: nothing is
    /// overwritten, no cursor moves, and the element comes back to the
    /// caller inside the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 2]> = RingFifo::new();
    /// assert!(fifo.push_back(1).is_ok());
    /// assert!(fifo.push_back(2).is_ok());
    ///
    /// let overflow = fifo.push_back(3);
    /// assert_eq!(overflow.unwrap_err().element, 3);
    /// ```
    pub fn push_back(&mut self, element: A::Item) -> Result<(), CapacityError<A::Item>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        unsafe {
            let head = self.head;
            self.buffer_write(head, element);
            self.head = Self::wrap_add(head, 1);
        }
        self.last_read = false;
        Ok(())
    }

    /// Removes the front element and returns it, or `None` if the queue
    /// is empty.
    ///
    /// A failed pop leaves the queue untouched, no matter how often it is
    /// repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 3]> = RingFifo::new();
    /// fifo.push_back(1).unwrap();
    /// fifo.push_back(2).unwrap();
    ///
    /// assert_eq!(fifo.pop_front(), Some(1));
    /// assert_eq!(fifo.pop_front(), Some(2));
    /// assert_eq!(fifo.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<A::Item> {
        if self.is_empty() {
            return None;
        }
        unsafe {
            let tail = self.tail;
            self.tail = Self::wrap_add(tail, 1);
            self.last_read = true;
            Some(self.buffer_read(tail))
        }
    }

    /// Returns a reference to the front element, or `None` if the queue
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 3]> = RingFifo::new();
    /// assert_eq!(fifo.front(), None);
    /// fifo.push_back(1).unwrap();
    /// fifo.push_back(2).unwrap();
    /// assert_eq!(fifo.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&A::Item> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(&*self.ptr().add(self.tail)) }
    }

    /// Returns a reference to the back element, or `None` if the queue
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 3]> = RingFifo::new();
    /// assert_eq!(fifo.back(), None);
    /// fifo.push_back(1).unwrap();
    /// fifo.push_back(2).unwrap();
    /// assert_eq!(fifo.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&A::Item> {
        if self.is_empty() {
            return None;
        }
        let idx = wrap_sub(self.head, 1, A::capacity());
        unsafe { Some(&*self.ptr().add(idx)) }
    }

    /// Removes and drops every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 3]> = RingFifo::new();
    /// fifo.push_back(1).unwrap();
    /// fifo.clear();
    /// assert!(fifo.is_empty());
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 4]> = RingFifo::new();
    /// fifo.push_back(5).unwrap();
    /// fifo.push_back(3).unwrap();
    /// fifo.push_back(4).unwrap();
    /// let collected: Vec<&i32> = fifo.iter().collect();
    /// assert_eq!(&collected[..], &[&5, &3, &4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<A::Item> {
        Iter {
            ring: unsafe { self.buffer_as_slice() },
            tail: self.tail,
            len: self.len(),
        }
    }

    /// Returns a front-to-back iterator of mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 4]> = RingFifo::new();
    /// fifo.push_back(5).unwrap();
    /// fifo.push_back(3).unwrap();
    /// for n in fifo.iter_mut() {
    ///     *n -= 2;
    /// }
    /// assert_eq!(fifo.pop_front(), Some(3));
    /// assert_eq!(fifo.pop_front(), Some(1));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<A::Item> {
        let tail = self.tail;
        let len = self.len();
        IterMut {
            ring: unsafe { self.buffer_as_mut_slice() },
            tail,
            len,
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of
    /// the queue.
    ///
    /// The second slice is empty while the contents are contiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 3]> = RingFifo::new();
    /// fifo.push_back(1).unwrap();
    /// fifo.push_back(2).unwrap();
    /// fifo.push_back(3).unwrap();
    /// fifo.pop_front();
    /// fifo.push_back(4).unwrap();
    ///
    /// assert_eq!(fifo.as_slices(), (&[2, 3][..], &[4][..]));
    /// ```
    pub fn as_slices(&self) -> (&[A::Item], &[A::Item]) {
        if self.is_empty() {
            return (&[], &[]);
        }
        let buf = unsafe { self.buffer_as_slice() };
        if self.tail < self.head {
            (&buf[self.tail..self.head], &[])
        } else {
            (&buf[self.tail..], &buf[..self.head])
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the
    /// contents of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingFifo;
    ///
    /// let mut fifo: RingFifo<[_; 3]> = RingFifo::new();
    /// fifo.push_back(1).unwrap();
    /// fifo.push_back(2).unwrap();
    /// fifo.as_mut_slices().0[0] = 42;
    /// assert_eq!(fifo.pop_front(), Some(42));
    /// ```
    pub fn as_mut_slices(&mut self) -> (&mut [A::Item], &mut [A::Item]) {
        if self.is_empty() {
            return (&mut [], &mut []);
        }
        let head = self.head;
        let tail = self.tail;
        let buf = unsafe { self.buffer_as_mut_slice() };
        if tail < head {
            let (_, rest) = buf.split_at_mut(tail);
            let (front, _) = rest.split_at_mut(head - tail);
            (front, &mut [])
        } else {
            let (wrapped, back) = buf.split_at_mut(tail);
            let (front_of_wrap, _) = wrapped.split_at_mut(head);
            (back, front_of_wrap)
        }
    }
}

/// `RingFifo` iterator.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    ring: &'a [T],
    tail: usize,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.tail;
        self.tail = wrap_add(tail, 1, self.ring.len());
        self.len -= 1;
        Some(&self.ring[tail])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let idx = wrap_add(self.tail, self.len, self.ring.len());
        Some(&self.ring[idx])
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// `RingFifo` mutable iterator.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    ring: &'a mut [T],
    tail: usize,
    len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.tail;
        self.tail = wrap_add(tail, 1, self.ring.len());
        self.len -= 1;
        // Each index is handed out at most once, so the &mut does not
        // alias an earlier one.
        unsafe { Some(&mut *self.ring.as_mut_ptr().add(tail)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let idx = wrap_add(self.tail, self.len, self.ring.len());
        unsafe { Some(&mut *self.ring.as_mut_ptr().add(idx)) }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// A by-value `RingFifo` iterator.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<A: Array> {
    inner: RingFifo<A>,
}

impl<A: Array> Iterator for IntoIter<A> {
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<A: Array> ExactSizeIterator for IntoIter<A> {}

impl<A: Array> IntoIterator for RingFifo<A> {
    type Item = A::Item;
    type IntoIter = IntoIter<A>;

    #[inline]
    fn into_iter(self) -> IntoIter<A> {
        IntoIter { inner: self }
    }
}

impl<'a, A: Array> IntoIterator for &'a RingFifo<A>
where
    A::Item: 'a,
{
    type Item = &'a A::Item;
    type IntoIter = Iter<'a, A::Item>;

    #[inline]
    fn into_iter(self) -> Iter<'a, A::Item> {
        self.iter()
    }
}

impl<'a, A: Array> IntoIterator for &'a mut RingFifo<A>
where
    A::Item: 'a,
{
    type Item = &'a mut A::Item;
    type IntoIter = IterMut<'a, A::Item>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, A::Item> {
        self.iter_mut()
    }
}

impl<A: Array> Drop for RingFifo<A> {
    fn drop(&mut self) {
        self.clear();
        // The MaybeUninit wrapper inhibits the array's own drop; every
        // live element was dropped by clear() above, exactly once.
    }
}

impl<A: Array> Default for RingFifo<A> {
    #[inline]
    fn default() -> RingFifo<A> {
        RingFifo::new()
    }
}

impl<A: Array> Clone for RingFifo<A>
where
    A::Item: Clone,
{
    fn clone(&self) -> RingFifo<A> {
        self.iter().cloned().collect()
    }
}

impl<A: Array> fmt::Debug for RingFifo<A>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A: Array> PartialEq for RingFifo<A>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &RingFifo<A>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<A: Array> Eq for RingFifo<A> where A::Item: Eq {}

impl<A: Array> Extend<A::Item> for RingFifo<A> {
    /// Pushes elements until the queue is at capacity and silently drops
    /// the rest of the iterator.
    fn extend<T: IntoIterator<Item = A::Item>>(&mut self, iter: T) {
        let room = self.capacity() - self.len();
        for element in iter.into_iter().take(room) {
            let _ = self.push_back(element);
        }
    }
}

impl<A: Array> FromIterator<A::Item> for RingFifo<A> {
    fn from_iter<T: IntoIterator<Item = A::Item>>(iter: T) -> RingFifo<A> {
        let mut fifo = RingFifo::new();
        fifo.extend(iter);
        fifo
    }
}


#[cfg(all(test, feature = "use_generic_array"))]
mod test_generic_array {
    use generic_array::typenum::U4;
    use generic_array::GenericArray;

    use super::RingFifo;

    #[test]
    fn generic_array_backing() {
        let mut fifo: RingFifo<GenericArray<i32, U4>> = RingFifo::new();
        assert_eq!(fifo.capacity(), 4);
        for n in 0..4 {
            assert!(fifo.push_back(n).is_ok());
        }
        assert!(fifo.push_back(4).is_err());
        for n in 0..4 {
            assert_eq!(fifo.pop_front(), Some(n));
        }
        assert_eq!(fifo.pop_front(), None);
    }
}
