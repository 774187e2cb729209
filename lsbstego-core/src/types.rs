//! Core types: sample grids and per-call statistics

use crate::constants::MAX_CHANNELS;
use crate::error::StegoError;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Dimensions of an image flattened in row-major, channel-minor order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    /// Pixels per row
    pub width: u32,

    /// Number of rows
    pub height: u32,

    /// Samples per pixel (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
    pub channels: u8,
}

impl GridShape {
    /// Create a new shape
    pub const fn new(width: u32, height: u32, channels: u8) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Total number of samples, which is also the capacity in bits
    pub const fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }

    /// Validate the shape
    pub fn validate(&self) -> Result<(), StegoError> {
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(StegoError::InvalidChannels(self.channels));
        }
        Ok(())
    }
}

/// A cover or stego image as a flat sample buffer plus the shape to rebuild it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    shape: GridShape,
    samples: Vec<u8>,
}

impl SampleGrid {
    /// Build a grid, failing unless `samples` holds exactly one value per
    /// pixel channel of `shape`
    pub fn from_samples(shape: GridShape, samples: Vec<u8>) -> Result<Self, StegoError> {
        shape.validate()?;

        let expected = shape.sample_count();
        if samples.len() != expected {
            return Err(StegoError::ShapeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self { shape, samples })
    }

    /// Build a grid whose sample at flat index `i` is `f(i)`
    pub fn from_fn<F>(shape: GridShape, f: F) -> Result<Self, StegoError>
    where
        F: FnMut(usize) -> u8,
    {
        shape.validate()?;
        let samples = (0..shape.sample_count()).map(f).collect();
        Ok(Self { shape, samples })
    }

    /// Shape of the grid
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Flat samples in row-major, channel-minor order
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Mutable access to the flat samples; the length cannot change
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Number of samples (capacity in bits)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the grid has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the grid, returning the shape and flat samples
    pub fn into_parts(self) -> (GridShape, Vec<u8>) {
        (self.shape, self.samples)
    }
}

/// Statistics reported by an embedding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedStats {
    /// Samples that carry payload or marker bits
    pub samples_used: usize,

    /// Samples whose LSB actually flipped
    pub samples_changed: usize,

    /// Total samples in the cover
    pub capacity: usize,
}

impl EmbedStats {
    /// Percentage of the cover consumed by the bitstream
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.samples_used as f64 / self.capacity as f64) * 100.0
    }
}

/// Statistics reported by an extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStats {
    /// Samples consumed up to and including the last marker bit
    pub samples_scanned: usize,

    /// Samples available in the stego image
    pub samples_total: usize,

    /// Bits that preceded the end marker
    pub payload_bits: usize,
}

impl ExtractStats {
    /// Payload length in bytes
    pub fn payload_len(&self) -> usize {
        self.payload_bits / 8
    }
}
