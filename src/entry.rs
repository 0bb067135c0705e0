//! A small fixed-layout record type for queue elements.
//!
//! [`Entry`] is the kind of value a bounded FIFO is typically fed with on
//! an embedded or logging path: a numeric tag, a short human-readable
//! name, and a tick count. It is `Copy`, allocation-free, and therefore
//! safe to move in and out of a [`RingFifo`] by value.
//!
//! [`Entry`]: struct.Entry.html
//! [`RingFifo`]: ../struct.RingFifo.html

use core::fmt;
use core::str;

/// An owned string with a fixed maximum length in bytes.
///
/// Construction truncates at the largest UTF-8 character boundary that
/// fits `CAP` bytes; the stored text is always valid UTF-8 and never
/// overruns the buffer.
///
/// # Examples
///
/// ```
/// use ringfifo::entry::Name;
///
/// let name: Name<8> = Name::new("( entry [1] )");
/// assert_eq!(name.as_str(), "( entry ");
/// assert_eq!(name.len(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Name<const CAP: usize> {
    buf: [u8; CAP],
    len: usize,
}

impl<const CAP: usize> Name<CAP> {
    /// Creates a `Name` from `s`, truncating to at most `CAP` bytes.
    ///
    /// Truncation backs off to a character boundary, so a multi-byte
    /// character is dropped whole rather than split.
    pub fn new(s: &str) -> Name<CAP> {
        let mut end = s.len().min(CAP);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        let mut buf = [0u8; CAP];
        buf[..end].copy_from_slice(&s.as_bytes()[..end]);
        Name { buf, len: end }
    }

    /// Returns the stored text.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Invariant: buf[..len] is a prefix of a valid &str cut at a
        // character boundary.
        unsafe { str::from_utf8_unchecked(&self.buf[..self.len]) }
    }

    /// Returns the length of the stored text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the name is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const CAP: usize> Default for Name<CAP> {
    #[inline]
    fn default() -> Name<CAP> {
        Name::new("")
    }
}

impl<'a, const CAP: usize> From<&'a str> for Name<CAP> {
    #[inline]
    fn from(s: &'a str) -> Name<CAP> {
        Name::new(s)
    }
}

impl<const CAP: usize> PartialEq<&str> for Name<CAP> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const CAP: usize> fmt::Display for Name<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const CAP: usize> fmt::Debug for Name<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// A plain value record: identifier, bounded name, creation tick count.
///
/// `ticks` is opaque to this crate; callers fill it with whatever
/// monotonic counter they have (CPU clocks, a frame number, an `Instant`
/// delta). `NAME_CAP` bounds the name in bytes and defaults to 20.
///
/// # Examples
///
/// ```
/// use ringfifo::entry::Entry;
///
/// let e: Entry = Entry::new(1, "( entry [1] )", 42);
/// assert_eq!(e.id, 1);
/// assert_eq!(e.name, "( entry [1] )");
/// assert_eq!(e.ticks, 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Entry<const NAME_CAP: usize = 20> {
    /// Numeric identifier.
    pub id: u8,
    /// Human-readable name, truncated to `NAME_CAP` bytes.
    pub name: Name<NAME_CAP>,
    /// Monotonic tick count at creation, relative to a caller-chosen
    /// reference.
    pub ticks: u64,
}

impl<const NAME_CAP: usize> Entry<NAME_CAP> {
    /// Creates an entry, truncating `name` as [`Name::new`] does.
    ///
    /// [`Name::new`]: struct.Name.html#method.new
    #[inline]
    pub fn new(id: u8, name: &str, ticks: u64) -> Entry<NAME_CAP> {
        Entry {
            id,
            name: Name::new(name),
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_fits() {
        let name: Name<20> = Name::new("( entry [3] )");
        assert_eq!(name.as_str(), "( entry [3] )");
        assert_eq!(name.len(), 13);
        assert!(!name.is_empty());
    }

    #[test]
    fn name_truncates() {
        let name: Name<4> = Name::new("abcdef");
        assert_eq!(name.as_str(), "abcd");
        assert_eq!(name.len(), 4);
    }

    #[test]
    fn name_truncates_at_char_boundary() {
        // 'é' is two bytes; cutting at 4 would split it.
        let name: Name<4> = Name::new("abcérest");
        assert_eq!(name.as_str(), "abc");
        assert_eq!(name.len(), 3);
    }

    #[test]
    fn name_longer_than_256_bytes() {
        // 1 + 149 * 2 + 1 = 300 bytes exactly.
        let mut text = String::from("a");
        for _ in 0..149 {
            text.push('é');
        }
        text.push('a');
        assert_eq!(text.len(), 300);

        let name: Name<300> = Name::new(&text);
        assert_eq!(name.len(), 300);
        assert_eq!(name.as_str(), text);
        assert!(str::from_utf8(name.as_str().as_bytes()).is_ok());
    }

    #[test]
    fn large_name_truncates_at_char_boundary() {
        // 151 'é's is 302 bytes; byte 299 falls inside the 150th char,
        // so truncation backs off to 298.
        let text: String = core::iter::repeat('é').take(151).collect();
        let name: Name<299> = Name::new(&text);
        assert_eq!(name.len(), 298);
        assert_eq!(name.as_str(), &text[..298]);
    }

    #[test]
    fn name_empty() {
        let name: Name<8> = Name::default();
        assert_eq!(name.as_str(), "");
        assert!(name.is_empty());
    }

    #[test]
    fn entry_roundtrip() {
        let e: Entry = Entry::new(7, "seven", 1234);
        let copy = e;
        assert_eq!(copy, e);
        assert_eq!(copy.name.as_str(), "seven");
    }
}
