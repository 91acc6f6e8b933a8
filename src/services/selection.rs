//! Visible-feature selection.
//!
//! Determines which features are currently on screen: a feature qualifies
//! only when its zone overlay is toggled on and the viewport fully contains
//! its geometry bounds. Containment is deliberate; a field half off-screen
//! is excluded rather than partially counted, so the stats panel and the
//! histogram always describe exactly what the user can see.

use crate::map::ZoneVisibility;
use crate::models::{Feature, GeoBounds};

/// Select the features that are both in a displayed zone and entirely
/// inside the viewport.
///
/// Relative input order is preserved and the inputs are never mutated.
/// There are no error conditions: an empty input yields an empty output,
/// and a viewport containing nothing yields the same.
pub fn select_visible_features(
    features: &[Feature],
    viewport: &GeoBounds,
    visibility: &ZoneVisibility,
) -> Vec<Feature> {
    features
        .iter()
        .filter(|feature| {
            visibility.is_visible(&feature.zone) && viewport.contains_bounds(&feature.bounds)
        })
        .cloned()
        .collect()
}
