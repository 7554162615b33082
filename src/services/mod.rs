pub mod analyzer;
pub mod sampler;

pub use analyzer::{parse_color_input, PaletteAnalyzer};
pub use sampler::{load_image, sample_file, sample_image, SampleSet};
