//! Assertion helpers for tests.

use chromaname::models::{ColorReport, PaletteReport};
use pretty_assertions::assert_eq;

/// Assert the report's shares add up to 100 and its counts to its samples
pub fn assert_conserved(report: &PaletteReport) {
    let shares: f64 = report.colors.iter().map(|c| c.share).sum();
    assert!(
        (shares - 100.0).abs() < 1e-6,
        "Shares of {} add up to {shares}",
        report.source
    );
    let counts: usize = report.colors.iter().map(|c| c.count).sum();
    assert_eq!(counts, report.samples, "Counts of {}", report.source);
}

/// Assert colors are listed most dominant first
pub fn assert_sorted_by_share(report: &PaletteReport) {
    for pair in report.colors.windows(2) {
        assert!(
            pair[0].share >= pair[1].share,
            "{} ({}) listed before {} ({})",
            pair[0].name,
            pair[0].share,
            pair[1].name,
            pair[1].share
        );
    }
}

/// Assert a color's name, hex and share
pub fn assert_color(color: &ColorReport, name: &str, hex: &str, share: f64) {
    assert_eq!(
        (color.name.as_str(), color.hex.as_str()),
        (name, hex),
        "Unexpected color: {color:?}"
    );
    assert!(
        (color.share - share).abs() < 1e-9,
        "Expected {name} at {share}%, got {}%",
        color.share
    );
}

/// Assert a well-formed report
pub fn assert_valid_report(report: &PaletteReport) {
    assert!(!report.colors.is_empty(), "Empty palette for {}", report.source);
    assert!(report.colors.len() <= report.requested_colors);
    assert_conserved(report);
    assert_sorted_by_share(report);
    for color in &report.colors {
        assert_eq!(color.hex.len(), 7, "Bad hex {}", color.hex);
        assert_eq!(color.hex, color.hex.to_lowercase());
    }
}
