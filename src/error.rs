use std::path::PathBuf;

use hue_quant::{QuantError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sampling error: {0}")]
    Sample(#[from] SampleError),

    #[error("Palette error: {0}")]
    Quant(#[from] QuantError),

    #[error("Reference table error: {0}")]
    Table(#[from] TableError),

    #[error("Failed to read color table {}: {source}", path.display())]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse color table {}: {source}", path.display())]
    TableParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no opaque pixels ({width}x{height})")]
    NoOpaquePixels { width: u32, height: u32 },
}
