//! Point-in-bounds feature lookup.
//!
//! Backs the coordinate search box: the user enters a latitude and
//! longitude, and the display surface highlights whichever UTM zone or
//! raster cell contains that point.

use crate::models::{Feature, LatLng};

/// The features whose bounds contain `point`, input order preserved.
///
/// Bounds are closed, so a point on a shared cell edge matches every cell
/// touching it.
pub fn features_containing_point(features: &[Feature], point: &LatLng) -> Vec<Feature> {
    features
        .iter()
        .filter(|feature| feature.bounds.contains_point(point))
        .cloned()
        .collect()
}
