//! Public API surface for the map analytics layer.
//!
//! This file consolidates the types the display surface and the stats/
//! histogram renderers exchange with this crate. All types derive
//! Serialize/Deserialize for JSON interchange with the frontend.

pub use crate::error::AggregationError;
pub use crate::error::Result;

pub use crate::models::Feature;
pub use crate::models::FeatureId;
pub use crate::models::GeoBounds;
pub use crate::models::LatLng;
pub use crate::models::PropertyMap;

pub use crate::map::EventDispatcher;
pub use crate::map::LayerGroup;
pub use crate::map::MapEvent;
pub use crate::map::MapSession;
pub use crate::map::ZoneVisibility;

pub use crate::services::histogram::HistogramSeries;
pub use crate::services::summary::DateSummary;
pub use crate::services::summary::DEFAULT_DATE_ATTRIBUTE;

pub use crate::zones::LegendEntry;
pub use crate::zones::ZonePalette;
