//! Test fixtures: generated images and config files.

use image::{Rgba, RgbaImage};

/// Colors that are exact CSS3 keywords
pub mod colors {
    pub const SALMON: [u8; 3] = [250, 128, 114];
    pub const NAVY: [u8; 3] = [0, 0, 128];
    pub const GOLD: [u8; 3] = [255, 215, 0];
    pub const TEAL: [u8; 3] = [0, 128, 128];
}

/// Vertical stripes, `(color, width)` from left to right
pub fn stripes(bands: &[([u8; 3], u32)], height: u32) -> RgbaImage {
    let width: u32 = bands.iter().map(|(_, w)| w).sum();
    RgbaImage::from_fn(width, height, |x, _| {
        let mut left = 0;
        for &(color, w) in bands {
            if x < left + w {
                return opaque(color);
            }
            left += w;
        }
        opaque(bands[bands.len() - 1].0)
    })
}

/// `inner` centered in a fully transparent frame of `border` pixels
pub fn with_transparent_border(inner: &RgbaImage, border: u32) -> RgbaImage {
    let (w, h) = inner.dimensions();
    RgbaImage::from_fn(w + 2 * border, h + 2 * border, |x, y| {
        if x < border || y < border || x >= w + border || y >= h + border {
            Rgba([255, 255, 255, 0])
        } else {
            *inner.get_pixel(x - border, y - border)
        }
    })
}

/// Image with every pixel fully transparent
pub fn transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

pub fn opaque(color: [u8; 3]) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

/// Custom reference table with two entries, in this order
pub const INK_AND_PAPER: &str = r##"- name: ink
  hex: "#101010"
- name: paper
  hex: "#f5f5f0"
"##;
