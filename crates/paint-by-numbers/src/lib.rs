//! Umbrella crate for the paint-by-numbers workspace.
//!
//! Re-exports the raster primitives, the region tracer and the palette
//! labeling layer so downstream code needs a single dependency.

pub use pbn_core::*;
pub use pbn_palette::*;
pub use pbn_trace::*;
