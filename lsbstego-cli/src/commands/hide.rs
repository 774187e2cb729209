use crate::KeySource;
use anyhow::{bail, Context, Result};
use colored::*;
use lsbstego_core::{
    bitstream::find_premature_marker,
    codec,
    embedder::embed_with_stats,
    pipeline::conceal,
    EmbedStats,
};
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Read the message from `--message`, or from `--message-file` (`-` for stdin)
pub fn read_message(message: Option<&str>, message_file: Option<&str>) -> Result<Vec<u8>> {
    match (message, message_file) {
        (Some(text), None) => Ok(text.as_bytes().to_vec()),
        (None, Some("-")) => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("Failed to read message file: {}", path))
        }
        (Some(_), Some(_)) => bail!("Pass either --message or --message-file, not both"),
        (None, None) => bail!("A message is required: pass --message or --message-file"),
    }
}

pub fn execute(
    cover: &str,
    output: &str,
    message: Option<&str>,
    message_file: Option<&str>,
    key: &KeySource,
) -> Result<()> {
    let message = read_message(message, message_file)?;
    let stats = hide_bytes(cover, output, &message, key)?;

    println!(
        "{} Hid {} bytes in {}",
        "✓".green(),
        message.len(),
        output
    );
    println!("Samples used:      {}", stats.samples_used);
    println!("Samples changed:   {}", stats.samples_changed);
    println!("Cover utilization: {:.2}%", stats.utilization());

    Ok(())
}

/// Embed `message` into the image at `cover` and write the stego PNG to `output`
pub fn hide_bytes(cover: &str, output: &str, message: &[u8], key: &KeySource) -> Result<EmbedStats> {
    info!("Hiding {} bytes from {} into {}", message.len(), cover, output);

    let grid = codec::load(cover).with_context(|| format!("Failed to load cover image: {}", cover))?;
    let shape = grid.shape();
    info!(
        "Cover is {}x{} with {} channels ({} samples)",
        shape.width,
        shape.height,
        shape.channels,
        grid.len()
    );

    let (stego, stats) = match key.resolve()? {
        Some(secret) => conceal(&grid, message, &secret)
            .with_context(|| format!("Failed to conceal message in {}", cover))?,
        None => {
            if let Some(bits) = find_premature_marker(message) {
                bail!(
                    "Message contains the end marker pattern after {} bits and would be cut short on reveal; \
                     drop --raw to encrypt it",
                    bits
                );
            }
            embed_with_stats(&grid, message)
                .with_context(|| format!("Failed to embed message in {}", cover))?
        }
    };

    codec::save_png(&stego, output)
        .with_context(|| format!("Failed to write stego image: {}", output))?;

    info!(
        "Embedded into {} of {} samples ({} flipped)",
        stats.samples_used, stats.capacity, stats.samples_changed
    );

    Ok(stats)
}
