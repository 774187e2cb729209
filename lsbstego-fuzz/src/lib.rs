//! Fuzzing entry points for lsbstego-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_extract

use lsbstego_core::bitstream::{find_premature_marker, required_samples};
use lsbstego_core::embedder::embed_samples;
use lsbstego_core::extractor::extract_samples;

pub fn fuzz_extract(data: &[u8]) {
    // Arbitrary samples must never panic
    let _ = extract_samples(data);
}

pub fn fuzz_decode_image(data: &[u8]) {
    // Arbitrary file bytes through the image codec must never panic
    if let Ok(grid) = lsbstego_core::codec::decode(data) {
        let _ = lsbstego_core::extract(&grid);
    }
}

/// Split the input into a payload and a cover, embed, and check the round trip
pub fn fuzz_roundtrip(data: &[u8]) {
    let split = data.first().map(|&b| b as usize).unwrap_or(0).min(data.len());
    let (payload, rest) = data.split_at(split);

    let mut cover = rest.to_vec();
    cover.resize(cover.len().max(required_samples(payload.len())), 0);

    let stego = match embed_samples(&cover, payload) {
        Ok(stego) => stego,
        Err(e) => panic!("cover sized for the payload was rejected: {}", e),
    };

    if find_premature_marker(payload).is_none() {
        let extracted = extract_samples(&stego);
        assert_eq!(extracted.as_deref(), Ok(payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_extract_empty() {
        fuzz_extract(&[]);
    }

    #[test]
    fn test_fuzz_extract_random() {
        fuzz_extract(&[0xFF; 1024]);
    }

    #[test]
    fn test_fuzz_decode_image_garbage() {
        fuzz_decode_image(&[0x89, b'P', b'N', b'G', 0x00]);
    }

    #[test]
    fn test_fuzz_roundtrip_empty() {
        fuzz_roundtrip(&[]);
    }

    #[test]
    fn test_fuzz_roundtrip_text() {
        let mut data = vec![5u8];
        data.extend_from_slice(b"hello");
        data.extend_from_slice(&[0x33; 100]);
        fuzz_roundtrip(&data);
    }
}
