//! Config loading with an embedded fallback
//!
//! The default `config.yaml` is compiled into the binary. Behaviour:
//!
//! - If `CONFIG_FILE` is NOT set: use the embedded config only (no filesystem access)
//! - If `CONFIG_FILE` IS set and the file is missing: seed it with the embedded config, then use it
//! - If `CONFIG_FILE` IS set and the file exists: use the file

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the embedded default config
pub const CONFIG_NAME: &str = "config.yaml";

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Where the active config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Embedded => f.write_str("embedded"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Config loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new loader
    ///
    /// `config_file` should be `Some` only if `CONFIG_FILE` was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the `CONFIG_FILE` env var
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("CONFIG_FILE").map(PathBuf::from))
    }

    /// The configured external path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Where [`read_config`](Self::read_config) will read from
    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            _ => ConfigSource::Embedded,
        }
    }

    /// Directory that relative paths inside the config resolve against
    ///
    /// The directory of the external config file, or `None` (current
    /// directory) for the embedded config.
    pub fn config_dir(&self) -> Option<&Path> {
        match self.config_source() {
            ConfigSource::File(_) => self
                .config_file
                .as_deref()
                .and_then(Path::parent)
                .filter(|p| !p.as_os_str().is_empty()),
            ConfigSource::Embedded => None,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        Self::embedded_config()
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Write the embedded config to a configured but missing path
    ///
    /// Returns whether a file was written.
    pub fn seed_if_configured(&self) -> io::Result<bool> {
        let Some(ref path) = self.config_file else {
            return Ok(false);
        };
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = Self::embedded_config()?;
        fs::write(path, &*data)?;
        tracing::info!(path = %path.display(), "Seeded config file with embedded default");
        Ok(true)
    }

    /// Extract the embedded config to the filesystem (init command)
    ///
    /// Uses the configured path, or `./config.yaml` if none is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(".").join(CONFIG_NAME));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = Self::embedded_config()?;
        fs::write(&path, &*data)?;
        report.written.push(path.display().to_string());

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedConfig::iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_config_is_present() {
        assert_eq!(AssetLoader::list_embedded(), vec![CONFIG_NAME.to_string()]);
        let content = AssetLoader::default().read_config_string().unwrap();
        assert!(content.contains("extraction:"));
    }

    #[test]
    fn test_missing_external_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let absent = dir.path().join("absent.yaml");
        let loader = AssetLoader::new(Some(absent.clone()));
        assert_eq!(loader.config_file(), Some(absent.as_path()));
        assert_eq!(loader.config_source(), ConfigSource::Embedded);
        assert!(loader.config_dir().is_none());
        assert!(loader.read_config_string().unwrap().contains("sampling:"));
    }

    #[test]
    fn test_unset_config_file() {
        assert_eq!(AssetLoader::default().config_file(), None);
        assert_eq!(AssetLoader::default().config_source(), ConfigSource::Embedded);
    }

    #[test]
    fn test_external_config_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "extraction:\n  colors: 3\n").unwrap();

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(loader.config_source(), ConfigSource::File(path));
        assert_eq!(loader.config_dir(), Some(dir.path()));
        assert_eq!(
            loader.read_config_string().unwrap(),
            "extraction:\n  colors: 3\n"
        );
    }

    #[test]
    fn test_seed_writes_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        assert!(loader.seed_if_configured().unwrap());
        assert!(path.exists());
        assert!(!loader.seed_if_configured().unwrap());
        assert!(!AssetLoader::default().seed_if_configured().unwrap());
    }

    #[test]
    fn test_init_skips_existing_unless_forced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "old").unwrap();
        let loader = AssetLoader::new(Some(path.clone()));

        let report = loader.init(false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        let report = loader.init(true).unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(fs::read_to_string(&path).unwrap().contains("extraction:"));
    }
}
