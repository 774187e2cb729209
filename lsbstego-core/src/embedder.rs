//! Payload embedding

use crate::bitstream::{bit_len, Bitstream};
use crate::constants::{LSB_CLEAR_MASK, LSB_MASK};
use crate::error::StegoError;
use crate::types::{EmbedStats, SampleGrid};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use crate::bitstream::find_premature_marker;
#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Embed `payload` into a copy of `cover`
///
/// The bitstream (payload bits MSB-first, then the 16-bit end marker) is
/// written one bit per sample into the least significant bit, starting at the
/// first sample in row-major, channel-minor order. Samples past the bitstream
/// are left untouched and the returned grid has the cover's shape.
///
/// Fails with [`StegoError::CapacityExceeded`] before touching any sample when
/// the cover holds fewer samples than `payload.len() * 8 + 16`.
pub fn embed(cover: &SampleGrid, payload: &[u8]) -> Result<SampleGrid, StegoError> {
    embed_with_stats(cover, payload).map(|(stego, _)| stego)
}

/// Embed `payload` into a copy of `cover`, also reporting how many samples
/// were used and flipped
pub fn embed_with_stats(
    cover: &SampleGrid,
    payload: &[u8],
) -> Result<(SampleGrid, EmbedStats), StegoError> {
    // Checked here too so an oversized payload never clones the cover
    check_capacity(cover.len(), payload.len())?;

    let mut stego = cover.clone();
    let stats = embed_in_place(stego.samples_mut(), payload)?;

    Ok((stego, stats))
}

/// Embed into a flat sample sequence, returning the modified copy
pub fn embed_samples(cover: &[u8], payload: &[u8]) -> Result<Vec<u8>, StegoError> {
    // Fail before copying the cover
    check_capacity(cover.len(), payload.len())?;

    let mut stego = cover.to_vec();
    embed_in_place(&mut stego, payload)?;
    Ok(stego)
}

/// Embed directly into `samples`
///
/// Capacity is checked before the first write, so on error the buffer is
/// unchanged.
pub fn embed_in_place(samples: &mut [u8], payload: &[u8]) -> Result<EmbedStats, StegoError> {
    check_capacity(samples.len(), payload.len())?;

    #[cfg(feature = "logging")]
    if let Some(early) = find_premature_marker(payload) {
        warn!(
            "Payload of {} bytes contains the end marker pattern; extraction will stop after {} bits",
            payload.len(),
            early
        );
    }

    let stream = Bitstream::new(payload);
    let samples_used = stream.len();
    let mut samples_changed = 0;

    for (sample, bit) in samples.iter_mut().zip(stream) {
        let updated = (*sample & LSB_CLEAR_MASK) | (bit & LSB_MASK);
        if updated != *sample {
            samples_changed += 1;
        }
        *sample = updated;
    }

    let stats = EmbedStats {
        samples_used,
        samples_changed,
        capacity: samples.len(),
    };

    #[cfg(feature = "logging")]
    debug!(
        "Embedded {} payload bytes into {} of {} samples ({} flipped, {:.2}% used)",
        payload.len(),
        stats.samples_used,
        stats.capacity,
        stats.samples_changed,
        stats.utilization()
    );

    Ok(stats)
}

/// Verify that `available` samples can carry a payload of `payload_len` bytes
pub fn check_capacity(available: usize, payload_len: usize) -> Result<(), StegoError> {
    let needed = bit_len(payload_len);
    if needed > available {
        return Err(StegoError::CapacityExceeded { needed, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridShape;
    use alloc::vec;

    #[test]
    fn test_embed_writes_msb_first_then_marker() {
        let cover = vec![200u8; 24];
        let stego = embed_samples(&cover, &[0x41]).unwrap();

        let lsbs: Vec<u8> = stego.iter().map(|s| s & 1).collect();
        assert_eq!(&lsbs[..8], &[0u8, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&lsbs[8..23], &[1u8; 15]);
        assert_eq!(lsbs[23], 0);
    }

    #[test]
    fn test_upper_bits_preserved() {
        let cover: Vec<u8> = (0..=255).collect();
        let stego = embed_samples(&cover, b"upper bits").unwrap();

        for (before, after) in cover.iter().zip(stego.iter()) {
            assert_eq!(before & 0xFE, after & 0xFE);
        }
    }

    #[test]
    fn test_tail_untouched() {
        let cover: Vec<u8> = (0..100).map(|i| (i * 7) as u8).collect();
        let stego = embed_samples(&cover, b"hi").unwrap();

        assert_eq!(&stego[32..], &cover[32..]);
    }

    #[test]
    fn test_capacity_error_leaves_buffer_untouched() {
        let mut samples: Vec<u8> = (10..26).collect();
        let original = samples.clone();

        let err = embed_in_place(&mut samples, &[0x41]).unwrap_err();

        assert_eq!(
            err,
            StegoError::CapacityExceeded {
                needed: 24,
                available: 16
            }
        );
        assert_eq!(samples, original);
    }

    #[test]
    fn test_copying_entry_points_reject_oversized_payload() {
        let cover = SampleGrid::from_fn(GridShape::new(4, 4, 1), |i| i as u8).unwrap();
        let expected = StegoError::CapacityExceeded {
            needed: 24,
            available: 16,
        };

        assert_eq!(embed_with_stats(&cover, b"A").unwrap_err(), expected);
        assert_eq!(embed_samples(cover.samples(), b"A").unwrap_err(), expected);
    }

    #[test]
    fn test_stats_count_flips() {
        // All-even cover: only the 1 bits flip
        let mut samples = vec![0u8; 32];
        let stats = embed_in_place(&mut samples, &[0x41]).unwrap();

        assert_eq!(stats.samples_used, 24);
        assert_eq!(stats.samples_changed, 2 + 15);
        assert_eq!(stats.capacity, 32);
    }

    #[test]
    fn test_embed_preserves_shape() {
        let shape = GridShape::new(5, 4, 3);
        let cover = SampleGrid::from_fn(shape, |i| (i % 251) as u8).unwrap();

        let stego = embed(&cover, b"shape").unwrap();

        assert_eq!(stego.shape(), shape);
        assert_eq!(stego.len(), cover.len());
    }
}
