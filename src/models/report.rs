use hue_quant::{NamedPaletteEntry, ResolvedName, Rgb};
use serde::Serialize;

/// Palette of one image, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteReport {
    /// Where the samples came from (usually the image path)
    pub source: String,
    /// Decoded image width before downscaling
    pub width: u32,
    /// Decoded image height before downscaling
    pub height: u32,
    /// Pixels that went into clustering
    pub samples: usize,
    pub requested_colors: usize,
    /// Colors, most dominant first
    pub colors: Vec<ColorReport>,
}

/// One named palette color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    /// Reference table name, as stored in the table
    pub name: String,
    /// Title-cased name for display
    pub display_name: String,
    /// Lowercase `#rrggbb`
    pub hex: String,
    pub rgb: [u8; 3],
    /// Percentage of samples (0..=100)
    pub share: f64,
    pub count: usize,
    /// Whether the centroid equals the reference color
    pub exact: bool,
}

impl ColorReport {
    /// Report entry for an extracted, named palette color
    pub fn from_entry(named: &NamedPaletteEntry<'_>) -> Self {
        let cluster = named.entry.cluster;
        let color = NamedColor::from_resolved(cluster.centroid, &named.name);
        Self {
            name: color.name,
            display_name: color.display_name,
            hex: color.hex,
            rgb: color.rgb,
            share: named.entry.share,
            count: cluster.count,
            exact: color.exact,
        }
    }
}

/// A single named color that was looked up, not measured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedColor {
    pub name: String,
    pub display_name: String,
    pub hex: String,
    pub rgb: [u8; 3],
    /// Whether the color equals the reference color
    pub exact: bool,
}

impl NamedColor {
    pub fn from_resolved(rgb: Rgb, name: &ResolvedName<'_>) -> Self {
        Self {
            name: name.name().to_string(),
            display_name: display_name(name.name()),
            hex: hex_string(rgb),
            rgb: rgb.to_bytes(),
            exact: name.is_exact(),
        }
    }
}

/// Lowercase `#rrggbb`
pub fn hex_string(rgb: Rgb) -> String {
    format!("#{}", hex::encode(rgb.to_bytes()))
}

/// Title-case a reference name: "light blue" becomes "Light Blue"
///
/// Hyphens and underscores separate words too. Single-word CSS names such
/// as "darkslategray" only get their first letter raised.
pub fn display_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_quant::{resolve, ReferenceColorTable};

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("darkslategray"), "Darkslategray");
        assert_eq!(display_name("light blue"), "Light Blue");
        assert_eq!(display_name("off-white"), "Off White");
        assert_eq!(display_name("  ink__black "), "Ink Black");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_hex_string_is_lowercase() {
        assert_eq!(hex_string(Rgb::new(0xAB, 0x0C, 0xFF)), "#ab0cff");
        assert_eq!(hex_string(Rgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn test_from_resolved() {
        let table = ReferenceColorTable::css3();
        let name = resolve(Rgb::new(250, 128, 114), table).unwrap();
        let report = NamedColor::from_resolved(Rgb::new(250, 128, 114), &name);

        assert_eq!(report.name, "salmon");
        assert_eq!(report.display_name, "Salmon");
        assert_eq!(report.hex, "#fa8072");
        assert_eq!(report.rgb, [250, 128, 114]);
        assert!(report.exact);
    }

    #[test]
    fn test_lookup_serializes_without_share() {
        let table = ReferenceColorTable::css3();
        let name = resolve(Rgb::new(1, 1, 1), table).unwrap();
        let report = NamedColor::from_resolved(Rgb::new(1, 1, 1), &name);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["name"], "black");
        assert_eq!(json["rgb"], serde_json::json!([1, 1, 1]));
        assert_eq!(json["exact"], false);
        // a lookup has no measured share
        assert!(json.get("share").is_none());
        assert!(json.get("count").is_none());
    }
}
