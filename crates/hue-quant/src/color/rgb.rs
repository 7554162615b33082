//! 8-bit RGB color type
//!
//! `Rgb` is both the pixel sample fed to the extractor and the value stored
//! in reference tables. All distances in this crate are plain squared
//! Euclidean distances over the three 0..=255 channels.

use std::fmt;
use std::str::FromStr;

use crate::names::ParseColorError;

/// A color with three 8-bit channels.
///
/// The channel range 0..=255 is enforced by the type, so any `Rgb` is a
/// valid pixel sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    ///
    /// # Example
    /// ```
    /// use hue_quant::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from floating point channels.
    ///
    /// Each channel is rounded to the nearest integer (halves away from
    /// zero) and clamped to 0..=255. NaN maps to 0.
    ///
    /// # Example
    /// ```
    /// use hue_quant::Rgb;
    /// assert_eq!(Rgb::from_f64([127.5, -3.0, 300.0]), Rgb::new(128, 0, 255));
    /// ```
    #[inline]
    pub fn from_f64(channels: [f64; 3]) -> Self {
        // `as u8` saturates and maps NaN to 0
        let quantize = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self::new(
            quantize(channels[0]),
            quantize(channels[1]),
            quantize(channels[2]),
        )
    }

    /// Channels as `f64`, for centroid arithmetic.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Squared Euclidean distance to another color.
    ///
    /// The maximum value is `3 * 255²`, so `u32` never overflows.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_quant::Rgb;
    ///
    /// let teal: Rgb = "#008080".parse().unwrap();
    /// assert_eq!(teal, Rgb::new(0, 128, 128));
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        // from_str_radix alone would let a sign through ("+f")
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
