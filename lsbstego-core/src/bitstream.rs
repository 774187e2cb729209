//! Bitstream framing: payload bits MSB-first followed by the end marker
//!
//! The bitstream for a payload of `n` bytes is `n * 8 + 16` bits long:
//!
//! ```text
//! | byte 0 (b7..b0) | byte 1 (b7..b0) | ... | 1111111111111110 |
//! ```
//!
//! Detection is prefix-scanned: a reader stops at the first 16-bit window equal
//! to the marker. Payloads whose own bits form that window before their true
//! end are cut short on extraction; [`find_premature_marker`] reports this.

use crate::constants::{BITS_PER_BYTE, END_MARKER, MARKER_BITS};

/// Number of bits in the bitstream for a payload of `payload_len` bytes
pub const fn bit_len(payload_len: usize) -> usize {
    payload_len * BITS_PER_BYTE + MARKER_BITS
}

/// Samples a cover must hold to carry a payload of `payload_len` bytes
pub const fn required_samples(payload_len: usize) -> usize {
    bit_len(payload_len)
}

/// Largest payload, in bytes, that fits in `sample_count` samples
pub const fn max_payload_len(sample_count: usize) -> usize {
    sample_count.saturating_sub(MARKER_BITS) / BITS_PER_BYTE
}

/// Iterator over the bits of `payload ‖ END_MARKER`, one bit per item (0 or 1)
#[derive(Debug, Clone)]
pub struct Bitstream<'a> {
    payload: &'a [u8],
    pos: usize,
}

impl<'a> Bitstream<'a> {
    /// Create a bitstream over `payload`
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload, pos: 0 }
    }

    /// Total number of bits this stream yields
    pub fn total_bits(&self) -> usize {
        bit_len(self.payload.len())
    }

    /// Number of payload bits (excluding the marker)
    pub fn payload_bits(&self) -> usize {
        self.payload.len() * BITS_PER_BYTE
    }
}

impl Iterator for Bitstream<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let payload_bits = self.payload_bits();
        let bit = if self.pos < payload_bits {
            let byte = self.payload[self.pos / BITS_PER_BYTE];
            let shift = BITS_PER_BYTE - 1 - self.pos % BITS_PER_BYTE;
            (byte >> shift) & 1
        } else if self.pos < self.total_bits() {
            let shift = MARKER_BITS - 1 - (self.pos - payload_bits);
            ((END_MARKER >> shift) & 1) as u8
        } else {
            return None;
        };

        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_bits() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bitstream<'_> {}

/// Sliding window over the last 16 bits seen, used to detect the end marker
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerWindow {
    bits: u16,
    seen: usize,
}

impl MarkerWindow {
    /// Create an empty window
    pub const fn new() -> Self {
        Self { bits: 0, seen: 0 }
    }

    /// Shift in one bit; returns true when the last 16 bits equal the marker
    pub fn push(&mut self, bit: u8) -> bool {
        self.bits = (self.bits << 1) | u16::from(bit & 1);
        self.seen += 1;
        self.seen >= MARKER_BITS && self.bits == END_MARKER
    }

    /// Number of bits shifted in so far
    pub const fn seen(&self) -> usize {
        self.seen
    }
}

/// Check whether a prefix-scanning reader would stop before the real marker.
///
/// Returns `Some(bits)` with the number of bits the reader would treat as
/// payload when the marker pattern first appears early, or `None` when the
/// payload frames cleanly.
pub fn find_premature_marker(payload: &[u8]) -> Option<usize> {
    let stream = Bitstream::new(payload);
    let total = stream.total_bits();
    let mut window = MarkerWindow::new();

    for bit in stream {
        if window.push(bit) {
            let seen = window.seen();
            return if seen < total {
                Some(seen - MARKER_BITS)
            } else {
                None
            };
        }
    }

    // The trailing marker always matches, so this is unreachable for a
    // well-formed stream.
    None
}
