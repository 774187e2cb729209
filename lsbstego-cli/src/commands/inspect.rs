use anyhow::{Context, Result};
use colored::*;
use lsbstego_core::{
    bitstream::max_payload_len,
    codec,
    extractor::{extract_with_stats, has_marker},
    pipeline::max_plaintext_len,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Capacity and marker report for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectReport {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub samples: usize,
    pub max_payload_bytes: usize,
    pub max_plaintext_bytes: usize,
    pub marker_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_payload_bytes: Option<usize>,
}

pub fn execute(input: &str, json: bool) -> Result<()> {
    let report = report(input)?;

    if json {
        let text = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize inspect report")?;
        println!("{}", text);
        return Ok(());
    }

    println!("\n=== Inspect Results ===");
    println!(
        "Dimensions:        {}x{} ({} channels)",
        report.width, report.height, report.channels
    );
    println!("Samples:           {}", report.samples);
    println!("Max payload:       {} bytes", report.max_payload_bytes);
    println!("Max plaintext:     {} bytes (encrypted)", report.max_plaintext_bytes);
    match report.hidden_payload_bytes {
        Some(len) => println!("End marker:        {} ({} bytes framed)", "✓".green(), len),
        None if report.marker_present => {
            println!("End marker:        {} (misaligned framing)", "✗".yellow())
        }
        None => println!("End marker:        {} none", "✗".red()),
    }
    println!();

    Ok(())
}

/// Build the report for the image at `input`
pub fn report(input: &str) -> Result<InspectReport> {
    info!("Inspecting {}", input);

    let grid = codec::load(input).with_context(|| format!("Failed to load image: {}", input))?;
    let shape = grid.shape();

    let hidden_payload_bytes = extract_with_stats(grid.samples())
        .ok()
        .map(|(_, stats)| stats.payload_len());
    let marker_present = has_marker(grid.samples());

    Ok(InspectReport {
        path: input.to_string(),
        width: shape.width,
        height: shape.height,
        channels: shape.channels,
        samples: grid.len(),
        max_payload_bytes: max_payload_len(grid.len()),
        max_plaintext_bytes: max_plaintext_len(grid.len()),
        marker_present,
        hidden_payload_bytes,
    })
}
