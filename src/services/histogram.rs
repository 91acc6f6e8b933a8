//! Zone-grouped histogram series.
//!
//! Prepares the data behind the overlaid per-zone histogram next to the
//! map. Each distinct zone in the input becomes one series carrying that
//! zone's raw attribute values and its registered display color; binning
//! and drawing belong to the chart renderer.

use crate::error::Result;
use crate::models::Feature;
use crate::zones::ZonePalette;
use serde::{Deserialize, Serialize};

/// Histogram-ready values for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSeries {
    pub zone: String,
    pub color: String,
    /// Raw attribute values in feature order
    pub values: Vec<serde_json::Value>,
}

/// Partition `features` by zone into histogram series.
///
/// Zones appear in first-seen order and each series holds only the
/// attribute values of its own features. A feature without the attribute
/// contributes nothing to its series (the renderer bins whatever it is
/// given); a zone without a registered color fails the whole call.
///
/// # Errors
/// * `UnknownZone` when a feature's zone is absent from `palette`
pub fn group_by_zone(
    features: &[Feature],
    palette: &ZonePalette,
    attribute: &str,
) -> Result<Vec<HistogramSeries>> {
    let mut series: Vec<HistogramSeries> = Vec::new();

    for feature in features {
        let index = match series.iter().position(|s| s.zone == feature.zone) {
            Some(index) => index,
            None => {
                let color = palette.color_for_zone(&feature.zone)?.to_string();
                series.push(HistogramSeries {
                    zone: feature.zone.clone(),
                    color,
                    values: Vec::new(),
                });
                series.len() - 1
            }
        };

        match feature.property(attribute) {
            Some(value) => series[index].values.push(value.clone()),
            None => {
                log::debug!(
                    "Feature {} has no '{}' attribute, skipping in histogram",
                    feature.id,
                    attribute
                );
            }
        }
    }

    Ok(series)
}
