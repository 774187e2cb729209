//! Encrypt-then-embed example with an explicit key

use lsbstego_core::{
    cipher::SecretKey,
    pipeline::{conceal, max_plaintext_len, reveal, RevealError},
    GridShape, SampleGrid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("lsbstego Sealed Round Trip Example\n");

    let cover = SampleGrid::from_fn(GridShape::new(128, 96, 4), |i| (i * 29 % 256) as u8)?;
    println!(
        "Cover holds {} samples, room for {} plaintext bytes",
        cover.len(),
        max_plaintext_len(cover.len())
    );

    let key = SecretKey::generate();
    println!("Key: {}", key.to_hex());

    let (stego, stats) = conceal(&cover, b"rendezvous at 0600", &key)?;
    println!("Concealed using {} samples", stats.samples_used);

    let plaintext = reveal(&stego, &key)?;
    println!("Revealed: {}", String::from_utf8_lossy(&plaintext));

    match reveal(&stego, &SecretKey::generate()) {
        Err(RevealError::Cipher(e)) => println!("Wrong key rejected: {}", e),
        other => println!("Unexpected result with wrong key: {:?}", other),
    }

    match reveal(&cover, &key) {
        Err(RevealError::Stego(e)) => println!("Plain cover rejected: {}", e),
        other => println!("Unexpected result on plain cover: {:?}", other),
    }

    Ok(())
}
