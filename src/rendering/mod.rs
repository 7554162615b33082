pub mod report;

pub use report::{palette_text, render_names, render_palettes, render_table, NameLookup};
