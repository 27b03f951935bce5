use pbn_core::{Point, Raster};

use crate::region::RegionSet;
use crate::trace::trace_region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    RowMajor,
    ColumnMajor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub scan_order: ScanOrder,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            scan_order: ScanOrder::RowMajor,
        }
    }
}

/// Scans every pixel once and traces each region the first time one of its
/// pixels is reached.
///
/// Black and already visited pixels are skipped, as is any pixel whose
/// origin was visited by an earlier trace. Output order is discovery order
/// and depends on `cfg.scan_order`. Calling this again on the same raster
/// finds nothing new.
pub fn collect_regions(raster: &mut Raster, cfg: &TraceConfig) -> RegionSet {
    let _span = tracing::info_span!(
        "collect_regions",
        width = raster.width(),
        height = raster.height()
    )
    .entered();

    let mut regions = Vec::new();
    let mut visit = |raster: &mut Raster, p: Point| {
        let px = raster.get(p);
        if px.is_black() || px.visited {
            return;
        }
        if let Some(region) = trace_region(raster, p) {
            regions.push(region);
        }
    };

    match cfg.scan_order {
        ScanOrder::RowMajor => {
            for p in raster.positions_row_major() {
                visit(raster, p);
            }
        }
        ScanOrder::ColumnMajor => {
            for p in raster.positions_column_major() {
                visit(raster, p);
            }
        }
    }

    tracing::debug!(regions = regions.len(), "scan complete");

    RegionSet {
        width: raster.width(),
        height: raster.height(),
        regions,
    }
}
