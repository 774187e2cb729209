//! Basic embedding example

use lsbstego_core::{codec, embedder::embed_with_stats, extract, GridShape, SampleGrid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("lsbstego Basic Embedding Example\n");

    // A 64x64 RGB gradient stands in for a real photo
    let shape = GridShape::new(64, 64, 3);
    let cover = SampleGrid::from_fn(shape, |i| {
        let pixel = i / 3;
        let (x, y) = (pixel % 64, pixel / 64);
        match i % 3 {
            0 => (x * 4) as u8,
            1 => (y * 4) as u8,
            _ => ((x + y) * 2) as u8,
        }
    })?;

    let message = b"This message rides in the low bits";
    let (stego, stats) = embed_with_stats(&cover, message)?;

    println!(
        "Embedded {} bytes: {} samples used, {} flipped ({:.2}% of cover)",
        message.len(),
        stats.samples_used,
        stats.samples_changed,
        stats.utilization()
    );

    codec::save_png(&stego, "example_stego.png")?;
    println!("Wrote example_stego.png");

    let reloaded = codec::load("example_stego.png")?;
    let recovered = extract(&reloaded)?;
    println!("Recovered: {}", String::from_utf8_lossy(&recovered));

    Ok(())
}
