use pbn_trace::{Region, RegionSet};

use crate::{Label, Palette};

/// A traced region paired with the palette label for its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledRegion<'a> {
    pub region: &'a Region,
    /// `None` when the palette has no entry for the region's color.
    pub label: Option<&'a Label>,
}

/// Labels every region, preserving discovery order.
///
/// Each color missing from the palette is reported once.
pub fn label_regions<'a>(regions: &'a RegionSet, palette: &'a Palette) -> Vec<LabeledRegion<'a>> {
    let mut missing = Vec::new();

    let out: Vec<_> = regions
        .iter()
        .map(|region| {
            let label = palette.lookup(region.color());
            if label.is_none() && !missing.contains(&region.color()) {
                missing.push(region.color());
                tracing::warn!(color = %region.color(), "color has no palette entry");
            }
            LabeledRegion { region, label }
        })
        .collect();

    tracing::debug!(
        regions = out.len(),
        unlabeled_colors = missing.len(),
        "regions labeled"
    );
    out
}
