//! Error types for embedding and extraction

/// Errors that can occur while embedding into or extracting from a sample grid
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// Payload bits plus end marker do not fit in the available samples
    #[cfg_attr(
        feature = "std",
        error("Cover too small: need {needed} samples, have {available}")
    )]
    CapacityExceeded {
        /// Samples required for payload bits plus the 16 marker bits.
        needed: usize,
        /// Samples present in the cover.
        available: usize,
    },

    /// Every sample was scanned without meeting the end marker
    #[cfg_attr(
        feature = "std",
        error("No end marker found after scanning {samples_scanned} samples")
    )]
    MarkerNotFound {
        /// Number of samples consumed before giving up.
        samples_scanned: usize,
    },

    /// Bits preceding the end marker do not form whole bytes
    #[cfg_attr(
        feature = "std",
        error("Framing error: {payload_bits} payload bits is not a whole number of bytes")
    )]
    Framing {
        /// Number of bits found before the marker.
        payload_bits: usize,
    },

    /// Sample count does not match the declared grid shape
    #[cfg_attr(
        feature = "std",
        error("Shape mismatch: shape holds {expected} samples, got {actual}")
    )]
    ShapeMismatch {
        /// Samples implied by width * height * channels.
        expected: usize,
        /// Samples actually supplied.
        actual: usize,
    },

    /// Channel count outside 1..=4
    #[cfg_attr(feature = "std", error("Unsupported channel count: {0}"))]
    InvalidChannels(u8),
}
