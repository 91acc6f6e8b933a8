use crate::error::{AggregationError, Result};
use crate::models::GeoBounds;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-form display attributes attached to a feature.
pub type PropertyMap = serde_json::Map<String, serde_json::Value>;

/// Feature identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub i64);

impl FeatureId {
    pub fn new(value: i64) -> Self {
        FeatureId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FeatureId> for i64 {
    fn from(id: FeatureId) -> Self {
        id.0
    }
}

/// Geographic feature: a field, a UTM zone polygon, or a raster cell.
///
/// Features are immutable records owned by the mapping display surface.
/// The aggregation services read them and never mutate them. The zone label
/// drives filtering and coloring; everything else a renderer might show
/// (farm, variety, planting date, cell id) lives in `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    /// Categorical region label used for coloring and visibility toggles
    pub zone: String,
    /// Rectangular geometry extent as reported by the display surface
    pub bounds: GeoBounds,
    /// Free-form display attributes, e.g. `plant_date`, `variety`
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Feature {
    pub fn new(id: FeatureId, zone: impl Into<String>, bounds: GeoBounds) -> Self {
        Self {
            id,
            zone: zone.into(),
            bounds,
            properties: PropertyMap::new(),
        }
    }

    /// Attach a display attribute.
    pub fn with_property(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Look up a display attribute by name.
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }

    /// Read the named attribute as an ISO-8601 calendar date.
    ///
    /// Fails with `MissingAttribute` when the property is absent or not a
    /// string, and with `InvalidDate` when the string does not parse. No
    /// fallback date is ever synthesized.
    pub fn date_property(&self, name: &str) -> Result<NaiveDate> {
        let value = self
            .property(name)
            .and_then(|v| v.as_str())
            .ok_or_else(|| AggregationError::MissingAttribute {
                feature_id: self.id,
                attribute: name.to_string(),
            })?;

        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| AggregationError::InvalidDate {
            feature_id: self.id,
            attribute: name.to_string(),
            value: value.to_string(),
            reason: e,
        })
    }
}
