//! Foundational primitives for paint-by-numbers region tracing.
//!
//! ## Raster and Sentinel
//! A [`Raster`] owns a row-major grid of [`Pixel`]s, each a color plus a
//! `visited` flag. Reads outside `[0, width) x [0, height)` never fail: they
//! return [`Pixel::SENTINEL`], an opaque black pixel that is already visited.
//! Edge walkers rely on this to treat the image border as a divider wall.
//!
//! ## Coordinates
//! Points are integer `(x, y)` pairs indexing pixels directly. "West" is
//! `-x` and "south" is `-y`. Whether `y` grows up or down on screen is the
//! caller's convention; the primitives only need it to be consistent.
//!
//! ## Directions
//! Walking directions are the four axis-aligned unit vectors. They rotate in
//! 90 degree steps only.

mod color;
mod error;
mod geom;
mod raster;

pub use color::{Color, Pixel};
pub use error::Error;
pub use geom::{Direction, Point, Vec2i};
pub use raster::Raster;
