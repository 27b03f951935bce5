//! Palette lookup and region labeling.
//!
//! A [`Palette`] maps exact RGB colors to display labels. Labels are either a
//! number or a short name; both are printed as written in the palette.
//! Labeling never fails: a region whose fill color is missing from the
//! palette keeps `label: None` and a warning is logged.

mod error;
mod label;
mod palette;

pub use error::PaletteError;
pub use label::{LabeledRegion, label_regions};
pub use palette::{Label, Palette, PaletteEntry};
