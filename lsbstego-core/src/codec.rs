//! Image file codec: PNG/BMP in, PNG out
//!
//! Decoding keeps every channel the file carries (alpha included) and flattens
//! it in the `image` crate's native row-major, channel-minor order, so the
//! grid round-trips through PNG without touching a single sample. Lossy
//! formats are refused outright; nothing here converts between color types.

use crate::error::StegoError;
use crate::types::{GridShape, SampleGrid};
use image::{
    ColorType, DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, RgbImage, RgbaImage,
};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::debug;

/// Errors raised while moving between image files and sample grids
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is a lossy format that would destroy LSB data
    #[error("Lossy image format {0:?} cannot carry LSB data; use PNG or BMP")]
    LossyFormat(ImageFormat),

    /// The input is a lossless format this codec does not accept
    #[error("Unsupported image format: {0:?}")]
    UnsupportedFormat(ImageFormat),

    /// The decoded image is not 8 bits per sample
    #[error("Unsupported color type {0:?}: only 8-bit gray, gray+alpha, RGB and RGBA are accepted")]
    UnsupportedColor(ColorType),

    /// Stego output must be written as PNG
    #[error("Output path must have a .png extension: {0}")]
    OutputNotPng(String),

    /// Decoding or encoding failed inside the image library
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File read or write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The pixel buffer did not match its declared shape
    #[error(transparent)]
    Grid(#[from] StegoError),
}

/// Accept only lossless formats that can be read back bit-exactly
pub fn check_format(format: ImageFormat) -> Result<(), CodecError> {
    match format {
        ImageFormat::Png | ImageFormat::Bmp => Ok(()),
        ImageFormat::Jpeg | ImageFormat::WebP | ImageFormat::Avif => {
            Err(CodecError::LossyFormat(format))
        }
        other => Err(CodecError::UnsupportedFormat(other)),
    }
}

/// Decode PNG or BMP bytes into a sample grid
pub fn decode(bytes: &[u8]) -> Result<SampleGrid, CodecError> {
    let format = image::guess_format(bytes)?;
    check_format(format)?;

    let image = image::load_from_memory_with_format(bytes, format)?;
    let grid = grid_from_image(image)?;

    #[cfg(feature = "logging")]
    debug!(
        "Decoded {:?} image {}x{} with {} channels",
        format,
        grid.shape().width,
        grid.shape().height,
        grid.shape().channels
    );

    Ok(grid)
}

/// Read and decode an image file; the format is sniffed from its content
pub fn load<P: AsRef<Path>>(path: P) -> Result<SampleGrid, CodecError> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Flatten a decoded image into a sample grid without converting color types
pub fn grid_from_image(image: DynamicImage) -> Result<SampleGrid, CodecError> {
    let (width, height, channels, samples) = match image {
        DynamicImage::ImageLuma8(buf) => (buf.width(), buf.height(), 1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (buf.width(), buf.height(), 2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (buf.width(), buf.height(), 3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (buf.width(), buf.height(), 4, buf.into_raw()),
        other => return Err(CodecError::UnsupportedColor(other.color())),
    };

    let shape = GridShape::new(width, height, channels);
    Ok(SampleGrid::from_samples(shape, samples)?)
}

/// Rebuild an image from a sample grid
pub fn image_from_grid(grid: &SampleGrid) -> Result<DynamicImage, CodecError> {
    let shape = grid.shape();
    let (width, height) = (shape.width, shape.height);
    let raw = grid.samples().to_vec();

    let image = match shape.channels {
        1 => GrayImage::from_raw(width, height, raw).map(DynamicImage::ImageLuma8),
        2 => GrayAlphaImage::from_raw(width, height, raw).map(DynamicImage::ImageLumaA8),
        3 => RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8),
        other => return Err(StegoError::InvalidChannels(other).into()),
    };

    image.ok_or_else(|| {
        StegoError::ShapeMismatch {
            expected: shape.sample_count(),
            actual: grid.len(),
        }
        .into()
    })
}

/// Encode a sample grid as PNG bytes
pub fn encode_png(grid: &SampleGrid) -> Result<Vec<u8>, CodecError> {
    let image = image_from_grid(grid)?;
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode a sample grid as PNG and write it to `path`
pub fn save_png<P: AsRef<Path>>(grid: &SampleGrid, path: P) -> Result<(), CodecError> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if !is_png {
        return Err(CodecError::OutputNotPng(path.display().to_string()));
    }

    let bytes = encode_png(grid)?;
    fs::write(path, &bytes)?;

    #[cfg(feature = "logging")]
    debug!("Wrote {} PNG bytes to {}", bytes.len(), path.display());

    Ok(())
}
