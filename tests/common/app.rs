//! Test workspace: a temporary directory with images and config files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chromaname::assets::AssetLoader;
use chromaname::models::AppConfig;
use chromaname::services::PaletteAnalyzer;
use image::RgbaImage;
use tempfile::TempDir;

/// Temporary directory that cleans up after the test
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Save an image; the format follows the file extension
    pub fn write_image(&self, name: &str, img: &RgbaImage) -> PathBuf {
        let path = self.dir.path().join(name);
        img.save(&path).expect("Failed to write test image");
        path
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Loader as if CONFIG_FILE pointed at `name` in this workspace
    pub fn loader(&self, name: &str) -> AssetLoader {
        AssetLoader::new(Some(self.dir.path().join(name)))
    }

    /// Analyzer for config file `name` in this workspace
    pub fn analyzer(&self, name: &str) -> PaletteAnalyzer {
        let loader = self.loader(name);
        let config = Arc::new(AppConfig::load_from_assets(&loader));
        PaletteAnalyzer::from_config(config, loader.config_dir())
            .expect("Failed to build analyzer")
    }

    /// Analyzer with the given config and the built-in table
    pub fn analyzer_with(config: AppConfig) -> PaletteAnalyzer {
        PaletteAnalyzer::from_config(Arc::new(config), None).expect("Failed to build analyzer")
    }
}
