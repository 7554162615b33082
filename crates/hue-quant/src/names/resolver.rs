//! Nearest named-color resolution.
//!
//! Resolution first tries an exact lookup by value and only falls back to
//! a linear scan of the table when that misses. The scan uses squared
//! Euclidean RGB distance with strict `<`, so the first entry in table order
//! wins ties.

use super::error::TableError;
use super::table::{ColorTable, NamedColor};
use crate::color::Rgb;
use crate::error::QuantError;
use crate::extract::{PaletteEntry, PaletteResult};

/// The reference entry chosen for a color.
///
/// Borrows from the table it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedName<'t> {
    entry: &'t NamedColor,
    distance_squared: u32,
}

impl<'t> ResolvedName<'t> {
    /// The reference name.
    #[inline]
    pub fn name(&self) -> &'t str {
        self.entry.name()
    }

    /// The reference entry's own color.
    #[inline]
    pub fn reference(&self) -> Rgb {
        self.entry.rgb()
    }

    /// Squared distance between the queried color and the reference color.
    #[inline]
    pub fn distance_squared(&self) -> u32 {
        self.distance_squared
    }

    /// True when the queried color is exactly the reference color.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.distance_squared == 0
    }
}

impl AsRef<str> for ResolvedName<'_> {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// Resolve `rgb` to the closest name in `table`.
///
/// An exact value match returns immediately without scanning. Otherwise
/// every entry is compared and the closest one wins, the earliest entry on
/// ties.
///
/// # Errors
///
/// Returns [`QuantError::Configuration`] if the table is empty.
///
/// # Example
///
/// ```
/// use hue_quant::{resolve, ReferenceColorTable, Rgb};
///
/// let table = ReferenceColorTable::from_hex(&[("red", "#ff0000"), ("blue", "#0000ff")]).unwrap();
/// let name = resolve(Rgb::new(200, 10, 10), &table).unwrap();
/// assert_eq!(name.name(), "red");
/// assert!(!name.is_exact());
/// ```
pub fn resolve<T>(rgb: Rgb, table: &T) -> Result<ResolvedName<'_>, QuantError>
where
    T: ColorTable + ?Sized,
{
    if let Some(entry) = table.exact(rgb) {
        return Ok(ResolvedName {
            entry,
            distance_squared: 0,
        });
    }
    resolve_nearest(rgb, table)
}

/// Resolve `rgb` by scanning every entry, without the exact-match shortcut.
///
/// This is the reference behavior [`resolve`] must agree with.
///
/// # Errors
///
/// Returns [`QuantError::Configuration`] if the table is empty.
pub fn resolve_nearest<T>(rgb: Rgb, table: &T) -> Result<ResolvedName<'_>, QuantError>
where
    T: ColorTable + ?Sized,
{
    let mut best: Option<ResolvedName<'_>> = None;

    for entry in table.entries() {
        let distance_squared = rgb.distance_squared(entry.rgb());
        if best.map_or(true, |b| distance_squared < b.distance_squared) {
            best = Some(ResolvedName {
                entry,
                distance_squared,
            });
            if distance_squared == 0 {
                break;
            }
        }
    }

    best.ok_or(QuantError::Configuration(TableError::Empty))
}

/// A palette entry together with its resolved name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedPaletteEntry<'t> {
    /// The extracted color and its share
    pub entry: PaletteEntry,
    /// The resolved reference name
    pub name: ResolvedName<'t>,
}

/// Resolve every centroid of an extraction result, keeping result order.
///
/// # Errors
///
/// Returns [`QuantError::Configuration`] if the table is empty, even when
/// the palette itself has no entries.
pub fn resolve_palette<'t, T>(
    palette: &PaletteResult,
    table: &'t T,
) -> Result<Vec<NamedPaletteEntry<'t>>, QuantError>
where
    T: ColorTable + ?Sized,
{
    if table.is_empty() {
        return Err(QuantError::Configuration(TableError::Empty));
    }

    palette
        .iter()
        .map(|entry| {
            let name = resolve(entry.cluster.centroid, table)?;
            tracing::trace!(
                centroid = %entry.cluster.centroid,
                name = name.name(),
                distance_squared = name.distance_squared(),
                "Resolved palette color"
            );
            Ok(NamedPaletteEntry { entry: *entry, name })
        })
        .collect()
}
