//! A hex+ASCII rendering of a byte range, for debugging.
//!
//! [`HexDump`] borrows a byte slice and implements [`Display`], so it can
//! be rendered into any `fmt::Write` sink, including in `no_std` builds.
//! The layout is the classic 16-bytes-per-line table: a 4-digit hex
//! offset, the bytes in hex, and a printable-ASCII column with `.` in
//! place of anything outside `0x20..=0x7E`.
//!
//! ```text
//!   0000  46 49 46 4F 20 64 65 6D 6F 20 76 30 2E 31 00 01  FIFO demo v0.1..
//!   0010  02 03                                            ..
//! ```
//!
//! This is a debugging aid over raw bytes; it knows nothing about the
//! queue or its element types.
//!
//! [`HexDump`]: struct.HexDump.html
//! [`Display`]: https://doc.rust-lang.org/core/fmt/trait.Display.html

use core::fmt;
use core::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// Displayable hex+ASCII listing of a byte slice.
///
/// # Examples
///
/// ```
/// use ringfifo::hexdump::HexDump;
///
/// let listing = HexDump::new(b"ABC\x00").label("three letters").to_string();
/// assert_eq!(
///     listing,
///     "three letters\n  0000  41 42 43 00                                      ABC.\n"
/// );
/// ```
#[derive(Clone, Copy)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
    label: Option<&'a str>,
}

impl<'a> HexDump<'a> {
    /// Creates an unlabeled dump of `bytes`.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> HexDump<'a> {
        HexDump { bytes, label: None }
    }

    /// Adds a label line emitted before the listing.
    #[inline]
    pub fn label(self, label: &'a str) -> HexDump<'a> {
        HexDump {
            label: Some(label),
            ..self
        }
    }
}

impl<'a> fmt::Display for HexDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(label) = self.label {
            writeln!(f, "{}", label)?;
        }
        for (line, chunk) in self.bytes.chunks(BYTES_PER_LINE).enumerate() {
            write!(f, "  {:04X} ", line * BYTES_PER_LINE)?;
            for byte in chunk {
                write!(f, " {:02X}", byte)?;
            }
            // Pad a short final line so the ASCII column stays aligned.
            for _ in chunk.len()..BYTES_PER_LINE {
                f.write_str("   ")?;
            }
            f.write_str("  ")?;
            for &byte in chunk {
                let c = if (0x20..=0x7E).contains(&byte) {
                    byte as char
                } else {
                    '.'
                };
                f.write_char(c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Prints a labeled hex dump of `bytes` to stdout.
#[cfg(feature = "std")]
pub fn hexdump(label: Option<&str>, bytes: &[u8]) {
    let mut dump = HexDump::new(bytes);
    if let Some(label) = label {
        dump = dump.label(label);
    }
    print!("{}", dump);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_emits_nothing() {
        assert_eq!(HexDump::new(&[]).to_string(), "");
    }

    #[test]
    fn empty_with_label_emits_only_label() {
        let listing = HexDump::new(&[]).label("empty").to_string();
        assert_eq!(listing, "empty\n");
    }

    #[test]
    fn exactly_one_line() {
        let bytes: Vec<u8> = (0x41u8..0x51).collect();
        let listing = HexDump::new(&bytes).to_string();
        assert_eq!(
            listing,
            "  0000  41 42 43 44 45 46 47 48 49 4A 4B 4C 4D 4E 4F 50  ABCDEFGHIJKLMNOP\n"
        );
    }

    #[test]
    fn partial_second_line_is_padded() {
        let bytes: Vec<u8> = (0x41u8..0x52).collect();
        let listing = HexDump::new(&bytes).to_string();
        let mut lines = listing.lines();
        let first = lines.next().unwrap();
        let second = lines.next().unwrap();
        assert!(lines.next().is_none());
        assert_eq!(
            first,
            "  0000  41 42 43 44 45 46 47 48 49 4A 4B 4C 4D 4E 4F 50  ABCDEFGHIJKLMNOP"
        );
        assert_eq!(
            second,
            "  0010  51                                               Q"
        );
        // The ASCII columns of both lines start at the same position.
        assert_eq!(first.find("  ABC"), second.find("  Q"));
    }

    #[test]
    fn nonprintable_bytes_render_as_dots() {
        let listing = HexDump::new(&[0x00, 0x1F, 0x20, 0x7E, 0x7F, 0xFF]).to_string();
        assert_eq!(
            listing,
            "  0000  00 1F 20 7E 7F FF                                .. ~..\n"
        );
    }

    #[test]
    fn offsets_advance_by_sixteen() {
        let bytes = [0u8; 40];
        let listing = HexDump::new(&bytes).to_string();
        let offsets: Vec<&str> = listing
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(offsets, ["0000", "0010", "0020"]);
    }
}
