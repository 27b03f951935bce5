//! Region-boundary tracing for paint-by-numbers sheets.
//!
//! The input is a [`pbn_core::Raster`] of flat color regions separated by
//! black divider lines at least one pixel wide. Each region is walked once
//! along its outer border, keeping the divider on the walker's right, and
//! emitted as a [`Region`]: an ordered polygon of integer vertices plus the
//! fill color.
//!
//! Vertex placement:
//! - Vertices sit on the centers of the diagonal neighbor cells at each turn,
//!   so every polygon edge runs along the center line of the surrounding
//!   divider pixels.
//! - Consecutive vertices differ along exactly one axis; the polygon is
//!   implicitly closed.
//! - Pixels of the region are strictly inside the polygon, the divider pixels
//!   touching it lie on its boundary.
//!
//! The walk marks every pixel it stands on as visited. The collector scan
//! relies on the origin search ([`find_origin`]) landing on one of those
//! visited border pixels to skip regions that are already traced.

mod collect;
mod region;
mod trace;

pub use collect::{ScanOrder, TraceConfig, collect_regions};
pub use region::{Region, RegionSet};
pub use trace::{find_origin, trace_from_origin, trace_region};
