//! Constants for the sequential-LSB bitstream layout

/// End marker appended after the payload bits: `1111111111111110`
pub const END_MARKER: u16 = 0xFFFE;

/// Number of bits in the end marker
pub const MARKER_BITS: usize = 16;

/// Bits carried by each payload byte
pub const BITS_PER_BYTE: usize = 8;

/// Mask that keeps the upper 7 bits of a sample and clears the LSB
pub const LSB_CLEAR_MASK: u8 = 0xFE;

/// Mask that selects the least significant bit of a sample
pub const LSB_MASK: u8 = 0x01;

/// Largest channel count a sample grid may carry (RGBA)
pub const MAX_CHANNELS: u8 = 4;

/// Nonce size for the ChaCha20-Poly1305 payload cipher
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size appended by ChaCha20-Poly1305
pub const TAG_SIZE: usize = 16;

/// Bytes the payload cipher adds on top of the plaintext
pub const CIPHER_OVERHEAD: usize = NONCE_SIZE + TAG_SIZE;

/// Symmetric key size in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Context string for BLAKE3 passphrase key derivation
pub const KEY_DERIVATION_CONTEXT: &str = "lsbstego 2024-01-01 payload key v1";

