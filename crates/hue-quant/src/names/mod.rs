//! Named-color resolution
//!
//! This module maps arbitrary colors to the closest entry of a reference
//! table of named colors, and ships the CSS3 keyword table as the built-in
//! reference.

mod css3;
mod error;
mod resolver;
mod table;

pub use error::{ParseColorError, TableError};
pub use resolver::{resolve, resolve_nearest, resolve_palette, NamedPaletteEntry, ResolvedName};
pub use table::{ColorTable, NamedColor, ReferenceColorTable};
