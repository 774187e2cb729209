use crate::KeySource;
use anyhow::{anyhow, Context, Result};
use colored::*;
use lsbstego_core::{
    codec, extract,
    pipeline::{reveal, RevealError},
};
use std::fs;
use tracing::{info, warn};

pub fn execute(input: &str, output: Option<&str>, key: &KeySource) -> Result<()> {
    let message = reveal_bytes(input, key)?;

    if let Some(output_path) = output {
        fs::write(output_path, &message)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        println!(
            "{} Revealed {} bytes into {}",
            "✓".green(),
            message.len(),
            output_path
        );
        return Ok(());
    }

    match String::from_utf8(message) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            warn!("Hidden message is not UTF-8; printing hex");
            println!("{}", hex::encode(e.into_bytes()));
        }
    }

    Ok(())
}

/// Recover the hidden message from the image at `input`
pub fn reveal_bytes(input: &str, key: &KeySource) -> Result<Vec<u8>> {
    info!("Revealing message from {}", input);

    let grid = codec::load(input).with_context(|| format!("Failed to load image: {}", input))?;

    let message = match key.resolve()? {
        Some(secret) => match reveal(&grid, &secret) {
            Ok(plaintext) => plaintext,
            Err(RevealError::Stego(e)) => {
                return Err(anyhow!(e))
                    .with_context(|| format!("No hidden message found in {}", input));
            }
            Err(RevealError::Cipher(e)) => {
                return Err(anyhow!(e)).with_context(|| {
                    format!(
                        "Hidden payload found in {} but it could not be decrypted (wrong key or tampered image)",
                        input
                    )
                });
            }
        },
        None => extract(&grid)
            .with_context(|| format!("No hidden message found in {}", input))?
            .to_vec(),
    };

    info!("Recovered {} bytes", message.len());
    Ok(message)
}
