//! Library entry for lsbstego-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

use anyhow::{Context, Result};
use lsbstego_core::cipher::SecretKey;
use std::fs;

/// Key selection shared by `hide` and `reveal`
#[derive(clap::Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct KeyArgs {
    /// File holding a hex-encoded 256-bit key (see `keygen`)
    #[arg(long)]
    pub key_file: Option<String>,

    /// Derive the key from a passphrase
    #[arg(long)]
    pub passphrase: Option<String>,

    /// Skip encryption and embed/extract the message bytes as-is
    #[arg(long)]
    pub raw: bool,
}

impl KeyArgs {
    /// Where the payload key comes from
    pub fn source(&self) -> KeySource {
        if let Some(path) = &self.key_file {
            KeySource::File(path.clone())
        } else if let Some(passphrase) = &self.passphrase {
            KeySource::Passphrase(passphrase.clone())
        } else {
            KeySource::Raw
        }
    }
}

/// Where the payload key comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeySource {
    /// Hex key stored in a file
    File(String),
    /// Key derived from a passphrase
    Passphrase(String),
    /// No encryption
    Raw,
}

impl KeySource {
    /// Load or derive the key; `None` means the payload is not encrypted
    pub fn resolve(&self) -> Result<Option<SecretKey>> {
        match self {
            KeySource::File(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read key file: {}", path))?;
                let key = SecretKey::from_hex(&text)
                    .with_context(|| format!("Invalid key in {}", path))?;
                Ok(Some(key))
            }
            KeySource::Passphrase(passphrase) => Ok(Some(SecretKey::from_passphrase(passphrase))),
            KeySource::Raw => Ok(None),
        }
    }
}
