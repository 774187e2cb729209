use anyhow::{Context, Result};
use lsbstego_core::cipher::SecretKey;
use std::fs;
use tracing::info;

pub fn execute(output: Option<&str>) -> Result<()> {
    let key = SecretKey::generate();

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", key.to_hex()))
                .with_context(|| format!("Failed to write key file: {}", path))?;
            info!("Wrote new key to {}", path);
        }
        None => println!("{}", key.to_hex()),
    }

    Ok(())
}
