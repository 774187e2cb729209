//! Encrypt-then-embed and extract-then-decrypt
//!
//! Errors keep the two collaborators apart: a [`RevealError::Stego`] means no
//! usable framing was found in the image, a [`RevealError::Cipher`] means the
//! framing was fine but the bytes inside are not a valid sealed payload for
//! this key.

use crate::bitstream::max_payload_len;
use crate::cipher::{self, CipherError, SecretKey};
use crate::embedder::{check_capacity, embed_with_stats};
use crate::error::StegoError;
use crate::extractor::extract;
use crate::types::{EmbedStats, SampleGrid};
use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::debug;

/// Errors raised while concealing a plaintext in a cover
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConcealError {
    /// Sealing the plaintext failed
    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Embedding the sealed payload failed
    #[error("Steganography error: {0}")]
    Stego(#[from] StegoError),
}

/// Errors raised while revealing a plaintext from a stego image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    /// No hidden payload could be framed
    #[error("No hidden payload: {0}")]
    Stego(#[from] StegoError),

    /// A payload was found but it does not open under this key
    #[error("Hidden payload found but could not be opened: {0}")]
    Cipher(#[from] CipherError),
}

/// Largest plaintext that can be concealed in a cover of `sample_count` samples
///
/// Returns 0 both when only an empty plaintext fits and when nothing fits.
pub fn max_plaintext_len(sample_count: usize) -> usize {
    cipher::max_plaintext_for(max_payload_len(sample_count))
}

/// Encrypt `plaintext` under `key` and embed the sealed bytes into `cover`
///
/// The sealed payload is base64 text, so it never contains the end marker and
/// any plaintext up to [`max_plaintext_len`] conceals in one pass.
pub fn conceal(
    cover: &SampleGrid,
    plaintext: &[u8],
    key: &SecretKey,
) -> Result<(SampleGrid, EmbedStats), ConcealError> {
    check_capacity(cover.len(), cipher::sealed_len(plaintext.len()))?;

    let sealed = cipher::encrypt(key, plaintext)?;

    #[cfg(feature = "logging")]
    debug!(
        "Sealed {} plaintext bytes into {} payload bytes",
        plaintext.len(),
        sealed.len()
    );

    Ok(embed_with_stats(cover, &sealed)?)
}

/// Extract the sealed payload from `stego` and decrypt it with `key`
pub fn reveal(stego: &SampleGrid, key: &SecretKey) -> Result<Vec<u8>, RevealError> {
    let sealed = extract(stego)?;
    Ok(cipher::decrypt(key, &sealed)?)
}
