//! # lsbstego Core
//!
//! Sequential least-significant-bit steganography for raster images, with a
//! sentinel end marker so the reader needs no length prefix.
//!
//! ## Modules
//!
//! - `constants`: Marker pattern, masks and cipher sizes
//! - `types`: Sample grids and per-call statistics
//! - `bitstream`: Payload-plus-marker bit layout and marker detection
//! - `embedder`: Writing a payload into sample LSBs
//! - `extractor`: Scanning sample LSBs for the marker and recovering the payload
//! - `codec`: PNG/BMP files to sample grids and back (feature `image-codec`)
//! - `cipher`: ChaCha20-Poly1305 payload sealing (feature `cipher`)
//! - `pipeline`: Encrypt-then-embed and extract-then-decrypt (feature `cipher`)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bitstream;
pub mod constants;
pub mod embedder;
pub mod error;
pub mod extractor;
pub mod types;

#[cfg(feature = "cipher")]
pub mod cipher;
#[cfg(feature = "image-codec")]
pub mod codec;
#[cfg(feature = "cipher")]
pub mod pipeline;

// Re-export commonly used types
pub use embedder::embed;
pub use error::StegoError;
pub use extractor::extract;
pub use types::{EmbedStats, ExtractStats, GridShape, SampleGrid};

/// Result type alias for lsbstego operations
pub type Result<T> = core::result::Result<T, StegoError>;
