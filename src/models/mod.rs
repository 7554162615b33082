pub mod config;
pub mod report;

pub use config::{
    load_table_file, AppConfig, ExtractionConfig, OutputConfig, OutputFormat, ReferenceConfig,
    SamplingConfig, TableEntry,
};
pub use report::{display_name, hex_string, ColorReport, NamedColor, PaletteReport};
