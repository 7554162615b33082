//! Image decoding and pixel sampling
//!
//! Turns an image file into the flat list of RGB samples the palette
//! extractor works on.

use std::path::Path;

use hue_quant::Rgb;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::error::SampleError;
use crate::models::SamplingConfig;

/// Pixel samples of one image
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub samples: Vec<Rgb>,
    /// Decoded width before downscaling
    pub width: u32,
    /// Decoded height before downscaling
    pub height: u32,
    /// Dimensions that were actually sampled
    pub sampled_width: u32,
    pub sampled_height: u32,
    /// Transparent pixels left out
    pub skipped: usize,
}

/// Decode an image file
///
/// The format is detected from the file contents.
pub fn load_image(path: &Path) -> Result<DynamicImage, SampleError> {
    let data = std::fs::read(path).map_err(|source| SampleError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    image::load_from_memory(&data).map_err(|source| SampleError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode and sample an image file
pub fn sample_file(path: &Path, config: &SamplingConfig) -> Result<SampleSet, SampleError> {
    let img = load_image(path)?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded image"
    );
    sample_image(&img, config)
}

/// Collect RGB samples from a decoded image
///
/// The image is converted to 8-bit RGBA, shrunk with nearest-neighbour
/// filtering so its longest side fits `max_dimension`, and fully
/// transparent pixels are dropped when `skip_transparent` is set.
pub fn sample_image(img: &DynamicImage, config: &SamplingConfig) -> Result<SampleSet, SampleError> {
    let (width, height) = img.dimensions();

    let scaled;
    let working = match config.max_dimension() {
        Some(max) if width > max || height > max => {
            scaled = img.resize(max, max, FilterType::Nearest);
            &scaled
        }
        _ => img,
    };
    let rgba = working.to_rgba8();
    let (sampled_width, sampled_height) = rgba.dimensions();

    let mut samples = Vec::with_capacity((sampled_width * sampled_height) as usize);
    let mut skipped = 0;
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if config.skip_transparent && a == 0 {
            skipped += 1;
            continue;
        }
        samples.push(Rgb::new(r, g, b));
    }

    if samples.is_empty() {
        return Err(SampleError::NoOpaquePixels { width, height });
    }

    tracing::debug!(
        width,
        height,
        sampled_width,
        sampled_height,
        samples = samples.len(),
        skipped,
        "Sampled image"
    );

    Ok(SampleSet {
        samples,
        width,
        height,
        sampled_width,
        sampled_height,
        skipped,
    })
}
