use crate::assets::AssetLoader;
use crate::error::AppError;
use hue_quant::extract::{DEFAULT_K, DEFAULT_MAX_ITERATIONS, DEFAULT_RESTARTS, DEFAULT_SEED};
use hue_quant::{ColorTable, ExtractOptions, ReferenceColorTable, TableError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// k-means parameters
    pub extraction: ExtractionConfig,

    /// How pixels are turned into samples
    pub sampling: SamplingConfig,

    /// Which reference table names the colors
    pub reference: ReferenceConfig,

    /// Report output
    pub output: OutputConfig,
}

/// k-means parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of palette colors
    pub colors: usize,
    pub seed: u64,
    /// Iteration cap per run
    pub max_iterations: usize,
    pub restarts: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_K,
            seed: DEFAULT_SEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
        }
    }
}

impl ExtractionConfig {
    /// Options for the palette extractor
    pub fn to_options(&self) -> ExtractOptions {
        ExtractOptions::new()
            .k(self.colors)
            .seed(self.seed)
            .max_iterations(self.max_iterations)
            .restarts(self.restarts)
    }
}

/// Sampling parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SamplingConfig {
    /// Longest side after downscaling; `None` or 0 keeps full resolution
    pub max_dimension: Option<u32>,

    /// Ignore pixels with alpha 0
    pub skip_transparent: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_dimension: Some(256),
            skip_transparent: true,
        }
    }
}

impl SamplingConfig {
    /// Effective downscale limit, with 0 treated as disabled
    pub fn max_dimension(&self) -> Option<u32> {
        self.max_dimension.filter(|&d| d > 0)
    }
}

/// Reference table selection
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReferenceConfig {
    /// YAML file with a list of `{name, hex}` entries; `None` uses CSS3
    pub table: Option<PathBuf>,
}

/// One entry of a custom reference table file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub name: String,
    pub hex: String,
}

impl ReferenceConfig {
    /// Load the configured reference table
    ///
    /// Relative table paths resolve against `base_dir` when given. Without a
    /// custom table this is a copy of the built-in CSS3 table.
    pub fn load_table(&self, base_dir: Option<&Path>) -> Result<ReferenceColorTable, AppError> {
        match self.table {
            None => Ok(ReferenceColorTable::css3().clone()),
            Some(ref path) => {
                let path = match base_dir {
                    Some(base) if path.is_relative() => base.join(path),
                    _ => path.clone(),
                };
                load_table_file(&path)
            }
        }
    }
}

/// Read a reference table from a YAML list of `{name, hex}` entries
///
/// File order is kept, so it decides ties between equally close names.
pub fn load_table_file(path: &Path) -> Result<ReferenceColorTable, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::TableRead {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<TableEntry> =
        serde_yaml::from_str(&content).map_err(|source| AppError::TableParse {
            path: path.to_path_buf(),
            source,
        })?;

    let pairs: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.hex.as_str()))
        .collect();
    let table = ReferenceColorTable::from_hex(&pairs)?;
    if table.is_empty() {
        return Err(TableError::Empty.into());
    }

    tracing::info!(
        path = %path.display(),
        entries = table.len(),
        "Loaded custom color table"
    );
    Ok(table)
}

/// Report output format
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report output settings
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        source = %loader.config_source(),
                        colors = config.extraction.colors,
                        restarts = config.extraction.restarts,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_quant::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.extraction.colors, 5);
        assert_eq!(config.extraction.seed, 42);
        assert_eq!(config.extraction.max_iterations, 300);
        assert_eq!(config.extraction.restarts, 10);
        assert_eq!(config.sampling.max_dimension(), Some(256));
        assert!(config.sampling.skip_transparent);
        assert!(config.reference.table.is_none());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = AppConfig::load_from_assets(&AssetLoader::default());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
extraction:
  colors: 8
sampling:
  max_dimension: 0
output:
  format: json
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.extraction.colors, 8);
        assert_eq!(config.extraction.restarts, 10);
        assert_eq!(config.sampling.max_dimension(), None);
        assert!(config.sampling.skip_transparent);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_null_max_dimension_disables_downscale() {
        let config: AppConfig = serde_yaml::from_str("sampling:\n  max_dimension: null\n").unwrap();
        assert_eq!(config.sampling.max_dimension(), None);
    }

    #[test]
    fn test_extraction_to_options() {
        let extraction = ExtractionConfig {
            colors: 3,
            seed: 7,
            max_iterations: 20,
            restarts: 2,
        };
        assert_eq!(
            extraction.to_options(),
            ExtractOptions::new().k(3).seed(7).max_iterations(20).restarts(2)
        );
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "extraction: [not, a, mapping]").unwrap();

        let config = AppConfig::load_from_assets(&AssetLoader::new(Some(path)));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_default_reference_is_css3() {
        let table = ReferenceConfig::default().load_table(None).unwrap();
        assert_eq!(table.len(), 147);
    }

    #[test]
    fn test_load_table_relative_to_config_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("brand.yaml"),
            "- name: ink\n  hex: \"#101010\"\n- name: paper\n  hex: \"#f5f5f0\"\n",
        )
        .unwrap();

        let reference = ReferenceConfig {
            table: Some(PathBuf::from("brand.yaml")),
        };
        let table = reference.load_table(Some(dir.path())).unwrap();

        let names: Vec<&str> = table.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["ink", "paper"]);
        assert_eq!(table.get("paper").unwrap().rgb(), Rgb::new(0xf5, 0xf5, 0xf0));
    }

    #[test]
    fn test_load_table_errors() {
        let dir = TempDir::new().unwrap();

        let missing = load_table_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, AppError::TableRead { .. }));

        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "name: not-a-list").unwrap();
        assert!(matches!(
            load_table_file(&path).unwrap_err(),
            AppError::TableParse { .. }
        ));

        std::fs::write(&path, "[]").unwrap();
        assert!(matches!(
            load_table_file(&path).unwrap_err(),
            AppError::Table(TableError::Empty)
        ));

        std::fs::write(&path, "- name: oops\n  hex: \"#12\"\n").unwrap();
        assert!(matches!(
            load_table_file(&path).unwrap_err(),
            AppError::Table(TableError::ParseColor { .. })
        ));
    }
}
