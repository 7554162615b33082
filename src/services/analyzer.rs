use std::path::Path;
use std::sync::Arc;

use hue_quant::{resolve, resolve_palette, ExtractOptions, PaletteExtractor, ReferenceColorTable, Rgb};

use crate::error::AppError;
use crate::models::{AppConfig, ColorReport, NamedColor, PaletteReport};
use crate::services::sampler::{self, SampleSet};

/// Palette analysis that orchestrates sample → extract → name
pub struct PaletteAnalyzer {
    config: Arc<AppConfig>,
    table: Arc<ReferenceColorTable>,
}

impl PaletteAnalyzer {
    pub fn new(config: Arc<AppConfig>, table: Arc<ReferenceColorTable>) -> Self {
        Self { config, table }
    }

    /// Analyzer with the reference table the config selects
    ///
    /// Relative table paths resolve against `config_dir`.
    pub fn from_config(config: Arc<AppConfig>, config_dir: Option<&Path>) -> Result<Self, AppError> {
        let table = Arc::new(config.reference.load_table(config_dir)?);
        Ok(Self::new(config, table))
    }

    pub fn table(&self) -> &ReferenceColorTable {
        &self.table
    }

    /// Extraction options from the config
    pub fn options(&self) -> ExtractOptions {
        self.config.extraction.to_options()
    }

    /// Build the palette report for one image file
    pub fn analyze_file(&self, path: &Path) -> Result<PaletteReport, AppError> {
        let set = sampler::sample_file(path, &self.config.sampling)?;
        self.analyze_samples(path.display().to_string(), &set)
    }

    /// Build the palette report for already collected samples
    pub fn analyze_samples(&self, source: String, set: &SampleSet) -> Result<PaletteReport, AppError> {
        let extractor = PaletteExtractor::with_options(self.options());
        let palette = extractor.extract(&set.samples)?;
        let named = resolve_palette(&palette, self.table.as_ref())?;

        let colors: Vec<ColorReport> = named.iter().map(ColorReport::from_entry).collect();

        tracing::info!(
            source = %source,
            samples = set.samples.len(),
            colors = colors.len(),
            inertia = palette.inertia(),
            "Extracted palette"
        );

        Ok(PaletteReport {
            source,
            width: set.width,
            height: set.height,
            samples: palette.total_samples(),
            requested_colors: extractor.options().k,
            colors,
        })
    }

    /// Name a single color
    pub fn name_color(&self, rgb: Rgb) -> Result<NamedColor, AppError> {
        let name = resolve(rgb, self.table.as_ref())?;
        Ok(NamedColor::from_resolved(rgb, &name))
    }

    /// Parse `#rrggbb`, `#rgb` or `r,g,b` and name it
    pub fn name_input(&self, input: &str) -> Result<NamedColor, AppError> {
        self.name_color(parse_color_input(input)?)
    }
}

/// Parse a color given as `#rrggbb`, `#rgb` (leading `#` optional) or
/// as decimal `r,g,b`
pub fn parse_color_input(input: &str) -> Result<Rgb, AppError> {
    let trimmed = input.trim();
    let invalid = |reason: String| AppError::InvalidColor {
        input: input.to_string(),
        reason,
    };

    if trimmed.contains(',') {
        let channels = trimmed
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid(format!("channels must be 0-255 ({e})")))?;
        return match channels[..] {
            [r, g, b] => Ok(Rgb::new(r, g, b)),
            _ => Err(invalid(format!(
                "expected 3 channels, got {}",
                channels.len()
            ))),
        };
    }

    trimmed.parse::<Rgb>().map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_quant::TableError;

    fn analyzer() -> PaletteAnalyzer {
        PaletteAnalyzer::from_config(Arc::new(AppConfig::default()), None).unwrap()
    }

    fn sample_set(samples: Vec<Rgb>) -> SampleSet {
        SampleSet {
            width: samples.len() as u32,
            height: 1,
            sampled_width: samples.len() as u32,
            sampled_height: 1,
            skipped: 0,
            samples,
        }
    }

    #[test]
    fn test_parse_color_input_forms() {
        assert_eq!(parse_color_input("#ff0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(parse_color_input("0f0").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(parse_color_input(" 10, 20 ,30 ").unwrap(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_parse_color_input_errors() {
        assert!(matches!(
            parse_color_input("1,2"),
            Err(AppError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_color_input("1,2,300"),
            Err(AppError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_color_input("#12345"),
            Err(AppError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_color_input("zzzzzz"),
            Err(AppError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_color_input("#+1+2+3"),
            Err(AppError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_name_input() {
        let analyzer = analyzer();
        let exact = analyzer.name_input("#fa8072").unwrap();
        assert_eq!(exact.name, "salmon");
        assert!(exact.exact);

        let near = analyzer.name_input("200,10,10").unwrap();
        assert!(!near.exact);
        assert_eq!(near.hex, "#c80a0a");
    }

    #[test]
    fn test_analyze_samples() {
        let mut samples = vec![Rgb::new(250, 128, 114); 60];
        samples.extend(vec![Rgb::new(0, 0, 130); 40]);

        let report = analyzer()
            .analyze_samples("memory".to_string(), &sample_set(samples))
            .unwrap();

        assert_eq!(report.source, "memory");
        assert_eq!(report.samples, 100);
        assert_eq!(report.requested_colors, 5);
        assert_eq!(report.colors.len(), 2);
        assert_eq!(report.colors[0].name, "salmon");
        assert_eq!(report.colors[0].share, 60.0);
        assert_eq!(report.colors[0].count, 60);
        assert_eq!(report.colors[1].name, "navy");
        assert_eq!(report.colors[1].share, 40.0);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let analyzer = PaletteAnalyzer::new(
            Arc::new(AppConfig::default()),
            Arc::new(ReferenceColorTable::default()),
        );
        let err = analyzer
            .analyze_samples("memory".to_string(), &sample_set(vec![Rgb::new(1, 2, 3)]))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Quant(hue_quant::QuantError::Configuration(TableError::Empty))
        ));
        assert!(analyzer.name_color(Rgb::new(1, 2, 3)).is_err());
    }
}
