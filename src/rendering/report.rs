//! Report rendering for the terminal and for machines
//!
//! Text output is an aligned table with a proportional share bar. JSON
//! output is pretty-printed and always an array, one element per input.

use hue_quant::{ColorTable, ReferenceColorTable};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{display_name, hex_string, NamedColor, OutputFormat, PaletteReport};

/// Width of a 100% share bar
const BAR_WIDTH: usize = 30;

/// Render palette reports in the requested format
pub fn render_palettes(reports: &[PaletteReport], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(palette_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(reports),
    }
}

/// One resolved color name, as printed by the `name` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameLookup {
    /// What the user typed
    pub input: String,
    #[serde(flatten)]
    pub color: NamedColor,
}

/// Render single-color lookups
pub fn render_names(lookups: &[NameLookup], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(lookups
            .iter()
            .map(|lookup| {
                let c = &lookup.color;
                format!(
                    "{:<12} {}  {}  {} ({})\n",
                    lookup.input,
                    c.hex,
                    rgb_text(c.rgb),
                    c.display_name,
                    if c.exact { "exact" } else { "nearest" }
                )
            })
            .collect()),
        OutputFormat::Json => to_json(lookups),
    }
}

/// One row of the reference table listing
#[derive(Debug, Clone, PartialEq, Serialize)]
struct TableRow {
    name: String,
    display_name: String,
    hex: String,
    rgb: [u8; 3],
}

/// Render the reference table, in table order
pub fn render_table(table: &ReferenceColorTable, format: OutputFormat) -> Result<String, AppError> {
    let rows: Vec<TableRow> = table
        .entries()
        .iter()
        .map(|entry| TableRow {
            name: entry.name().to_string(),
            display_name: display_name(entry.name()),
            hex: hex_string(entry.rgb()),
            rgb: entry.rgb().to_bytes(),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let mut out: String = rows
                .iter()
                .map(|row| format!("{:<22} {}  {}\n", row.name, row.hex, rgb_text(row.rgb)))
                .collect();
            out.push_str(&format!("\n{} colors\n", rows.len()));
            Ok(out)
        }
        OutputFormat::Json => to_json(&rows),
    }
}

/// Text table for one palette
pub fn palette_text(report: &PaletteReport) -> String {
    let mut out = format!(
        "{} ({}x{}, {} samples)\n",
        report.source, report.width, report.height, report.samples
    );

    if report.colors.len() < report.requested_colors {
        out.push_str(&format!(
            "  only {} distinct colors found ({} requested)\n",
            report.colors.len(),
            report.requested_colors
        ));
    }

    let name_width = report
        .colors
        .iter()
        .map(|c| c.display_name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    for (i, color) in report.colors.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}  {:<name_width$}  {}  {:<18}  {:>6.2}%  {}\n",
            i + 1,
            color.display_name,
            color.hex,
            rgb_text(color.rgb),
            color.share,
            share_bar(color.share),
        ));
    }
    out
}

/// `rgb(r, g, b)`
fn rgb_text(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}

/// Bar proportional to a 0..=100 share
fn share_bar(share: f64) -> String {
    let len = (share.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
