//! Payload sealing with ChaCha20-Poly1305
//!
//! Plaintext is encrypted before embedding so that the hidden bytes are opaque
//! and tamper-evident. The key is always passed in by the caller; nothing in
//! this crate keeps key state between calls.
//!
//! Sealed layout: URL-safe base64 of `nonce (12 bytes) || ciphertext || tag (16 bytes)`.
//! Every armoured byte is ASCII, so its top bit is clear and no 16-bit window of
//! the sealed payload can equal the end marker.

use crate::constants::{CIPHER_OVERHEAD, KEY_DERIVATION_CONTEXT, KEY_SIZE, NONCE_SIZE};
use base64::{engine::general_purpose::URL_SAFE as BASE64, Engine};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use core::fmt;
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Errors raised by the payload cipher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Encryption failed inside the AEAD implementation
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Authentication failed: wrong key or tampered payload
    #[error("Decryption failed: wrong key or tampered payload")]
    DecryptionFailed,

    /// Sealed payload is not valid URL-safe base64
    #[error("Sealed payload is not valid base64: {0}")]
    MalformedArmor(String),

    /// Payload shorter than nonce plus tag
    #[error("Sealed payload too short: {0} bytes, need at least {min}", min = CIPHER_OVERHEAD)]
    CiphertextTooShort(usize),

    /// Key material could not be parsed
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// 256-bit symmetric key for the payload cipher
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    /// Generate a fresh random key from the OS RNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap raw key bytes
    pub const fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Derive a key from a passphrase using BLAKE3 in key-derivation mode
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self(blake3::derive_key(
            KEY_DERIVATION_CONTEXT,
            passphrase.as_bytes(),
        ))
    }

    /// Parse a key from 64 hex characters (surrounding whitespace ignored)
    pub fn from_hex(text: &str) -> Result<Self, CipherError> {
        let decoded =
            hex::decode(text.trim()).map_err(|e| CipherError::InvalidKey(e.to_string()))?;
        let bytes: [u8; KEY_SIZE] = decoded.as_slice().try_into().map_err(|_| {
            CipherError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_SIZE,
                decoded.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Hex encoding of the key
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Encrypt `plaintext` under `key` with a fresh random nonce and armour the
/// result as URL-safe base64
pub fn encrypt(key: &SecretKey, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| CipherError::EncryptionFailed)?;

    let mut raw = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    raw.extend_from_slice(&nonce_bytes);
    raw.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(raw).into_bytes())
}

/// Decrypt a payload produced by [`encrypt`]
pub fn decrypt(key: &SecretKey, sealed: &[u8]) -> Result<Vec<u8>, CipherError> {
    let raw = BASE64
        .decode(sealed)
        .map_err(|e| CipherError::MalformedArmor(e.to_string()))?;
    if raw.len() < CIPHER_OVERHEAD {
        return Err(CipherError::CiphertextTooShort(raw.len()));
    }

    let (nonce_bytes, ciphertext) = raw.split_at(NONCE_SIZE);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CipherError::DecryptionFailed)
}

/// Armoured sealed size for a plaintext of `plaintext_len` bytes
pub const fn sealed_len(plaintext_len: usize) -> usize {
    (plaintext_len + CIPHER_OVERHEAD + 2) / 3 * 4
}

/// Largest plaintext whose armoured sealed form fits in `payload_len` bytes
pub const fn max_plaintext_for(payload_len: usize) -> usize {
    (payload_len / 4 * 3).saturating_sub(CIPHER_OVERHEAD)
}
