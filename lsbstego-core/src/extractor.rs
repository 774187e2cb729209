//! Payload extraction by end-marker scanning

use crate::bitstream::MarkerWindow;
use crate::constants::{BITS_PER_BYTE, LSB_MASK, MARKER_BITS};
use crate::error::StegoError;
use crate::types::{ExtractStats, SampleGrid};
use alloc::vec::Vec;
use bytes::Bytes;

#[cfg(feature = "logging")]
use tracing::debug;

/// Extract the payload hidden in `stego`
pub fn extract(stego: &SampleGrid) -> Result<Bytes, StegoError> {
    extract_samples(stego.samples())
}

/// Extract the payload hidden in a flat sample sequence
pub fn extract_samples(samples: &[u8]) -> Result<Bytes, StegoError> {
    extract_with_stats(samples).map(|(payload, _)| payload)
}

/// Extract the payload and report how far the scan went
///
/// This function:
/// 1. Reads the LSB of each sample in flatten order
/// 2. Packs the bits MSB-first into bytes as they arrive
/// 3. Stops at the first 16-bit window equal to the end marker, without
///    reading further samples
/// 4. Drops the marker bits and returns the whole bytes before it
///
/// Fails with [`StegoError::MarkerNotFound`] when the samples run out first and
/// with [`StegoError::Framing`] when the bits before the marker are not a whole
/// number of bytes.
pub fn extract_with_stats(samples: &[u8]) -> Result<(Bytes, ExtractStats), StegoError> {
    let mut window = MarkerWindow::new();
    let mut packed = Vec::with_capacity(samples.len() / BITS_PER_BYTE);
    let mut current = 0u8;

    #[cfg(feature = "logging")]
    debug!("Scanning {} samples for end marker", samples.len());

    for (index, sample) in samples.iter().enumerate() {
        let bit = sample & LSB_MASK;
        current = (current << 1) | bit;
        if (index + 1) % BITS_PER_BYTE == 0 {
            packed.push(current);
            current = 0;
        }

        if window.push(bit) {
            let samples_scanned = index + 1;
            let payload_bits = samples_scanned - MARKER_BITS;

            if payload_bits % BITS_PER_BYTE != 0 {
                #[cfg(feature = "logging")]
                debug!(
                    "Marker at sample {} leaves {} payload bits",
                    samples_scanned, payload_bits
                );
                return Err(StegoError::Framing { payload_bits });
            }

            packed.truncate(payload_bits / BITS_PER_BYTE);

            let stats = ExtractStats {
                samples_scanned,
                samples_total: samples.len(),
                payload_bits,
            };

            #[cfg(feature = "logging")]
            debug!(
                "Found end marker after {} samples: {} payload bytes",
                samples_scanned,
                packed.len()
            );

            return Ok((Bytes::from(packed), stats));
        }
    }

    Err(StegoError::MarkerNotFound {
        samples_scanned: samples.len(),
    })
}

/// Check whether an end marker occurs anywhere in the sample LSBs
pub fn has_marker(samples: &[u8]) -> bool {
    let mut window = MarkerWindow::new();
    samples.iter().any(|sample| window.push(sample & LSB_MASK))
}
