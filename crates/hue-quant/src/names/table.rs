//! Reference color tables and the lookup seam used by the resolver.
//!
//! A [`ReferenceColorTable`] is an ordered list of uniquely named colors
//! plus a hash index from value to entry. It is built once and never
//! mutated, so a single instance can be shared by any number of threads.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use super::css3::CSS3_COLORS;
use super::error::TableError;
use crate::color::Rgb;

/// A single reference entry: a name and its canonical color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    name: Cow<'static, str>,
    rgb: Rgb,
}

impl NamedColor {
    /// Create an entry with a static name (usable in `const` tables).
    pub const fn new(name: &'static str, rgb: Rgb) -> Self {
        Self {
            name: Cow::Borrowed(name),
            rgb,
        }
    }

    /// Create an entry with an owned name, e.g. parsed from a file.
    pub fn owned(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            rgb,
        }
    }

    /// The entry's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry's reference color.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

/// Read-only view of a reference palette, as seen by the resolver.
///
/// The resolver only needs an exact lookup by value and the ordered entry
/// list for the nearest-match scan. Iteration order of [`entries()`] is the
/// tie-break order.
///
/// [`entries()`]: ColorTable::entries
pub trait ColorTable {
    /// Entry whose color equals `rgb` exactly, if any.
    ///
    /// When several entries share a value, the first in table order is
    /// returned.
    fn exact(&self, rgb: Rgb) -> Option<&NamedColor>;

    /// All entries, in table order.
    fn entries(&self) -> &[NamedColor];

    /// Number of entries.
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns true if there is nothing to resolve against.
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// An immutable, ordered set of uniquely named reference colors.
///
/// # Example
///
/// ```
/// use hue_quant::{ColorTable, ReferenceColorTable, Rgb};
///
/// let table = ReferenceColorTable::from_hex(&[("red", "#ff0000"), ("blue", "#00f")]).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.exact(Rgb::new(0, 0, 255)).map(|c| c.name()), Some("blue"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceColorTable {
    entries: Vec<NamedColor>,
    by_value: HashMap<Rgb, usize>,
}

impl ReferenceColorTable {
    /// Build a table from entries, preserving their order.
    ///
    /// An empty list is accepted here; resolving against an empty table is
    /// what fails, with a configuration error.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateName`] if two entries share a name.
    pub fn new(entries: Vec<NamedColor>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.name()) {
                return Err(TableError::DuplicateName {
                    name: entry.name().to_string(),
                });
            }
        }

        let mut by_value = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            // first name for a value wins
            by_value.entry(entry.rgb()).or_insert(i);
        }

        Ok(Self { entries, by_value })
    }

    /// Build a table from `(name, hex)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ParseColor`] if any hex string is invalid, or
    /// [`TableError::DuplicateName`] for repeated names.
    pub fn from_hex<N, H>(pairs: &[(N, H)]) -> Result<Self, TableError>
    where
        N: AsRef<str>,
        H: AsRef<str>,
    {
        let entries = pairs
            .iter()
            .map(|(name, hex)| {
                let name = name.as_ref();
                hex.as_ref()
                    .parse::<Rgb>()
                    .map(|rgb| NamedColor::owned(name, rgb))
                    .map_err(|source| TableError::ParseColor {
                        name: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The built-in CSS3 extended color keyword table.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn css3() -> &'static ReferenceColorTable {
        static CSS3: OnceLock<ReferenceColorTable> = OnceLock::new();
        CSS3.get_or_init(|| {
            let entries = CSS3_COLORS.to_vec();
            let mut by_value = HashMap::with_capacity(entries.len());
            for (i, entry) in entries.iter().enumerate() {
                by_value.entry(entry.rgb()).or_insert(i);
            }
            tracing::debug!(entries = entries.len(), "Built CSS3 reference color table");
            ReferenceColorTable { entries, by_value }
        })
    }

    /// Look up an entry by name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&NamedColor> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Iterate over the entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, NamedColor> {
        self.entries.iter()
    }
}

impl ColorTable for ReferenceColorTable {
    #[inline]
    fn exact(&self, rgb: Rgb) -> Option<&NamedColor> {
        self.by_value.get(&rgb).map(|&i| &self.entries[i])
    }

    #[inline]
    fn entries(&self) -> &[NamedColor] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ReferenceColorTable {
    type Item = &'a NamedColor;
    type IntoIter = std::slice::Iter<'a, NamedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
