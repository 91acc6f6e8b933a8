//! Zone color registry and legend data.
//!
//! Zones are categorical region labels (the commercial ABI zones for field
//! data, UTM designators for grid data). Each zone displayed on the map has
//! exactly one registered color; the histogram and legend both resolve
//! colors through the palette so the two can never disagree. An observed
//! zone without a registered color is an error, never a silent default.

use crate::error::{AggregationError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One legend row: a zone and its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub zone: String,
    pub color: String,
}

/// Ordered zone-to-color registry.
///
/// Registration order is preserved and drives legend ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZonePalette {
    entries: Vec<LegendEntry>,
}

/// Built-in palette covering the six commercial zones.
static COMMERCIAL_ZONE_PALETTE: Lazy<ZonePalette> = Lazy::new(|| {
    ZonePalette::from_pairs([
        ("North American Zone (NAZ)", "red"),
        ("Middle American Zone (MAZ)", "blue"),
        ("South American Zone (SAZ)", "deepskyblue"),
        ("European Zone (EUR)", "green"),
        ("Asia Pacific Zone (APAC)", "orange"),
        ("African Zone (Africa)", "magenta"),
    ])
});

impl ZonePalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from (zone, color) pairs, keeping their order.
    pub fn from_pairs<I, Z, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Z, C)>,
        Z: Into<String>,
        C: Into<String>,
    {
        let mut palette = Self::new();
        for (zone, color) in pairs {
            palette.register(zone, color);
        }
        palette
    }

    /// The built-in commercial zone palette.
    pub fn commercial_zones() -> &'static ZonePalette {
        &COMMERCIAL_ZONE_PALETTE
    }

    /// Register a zone color. Re-registering a zone replaces its color but
    /// keeps its legend position.
    pub fn register(&mut self, zone: impl Into<String>, color: impl Into<String>) {
        let zone = zone.into();
        let color = color.into();
        match self.entries.iter_mut().find(|e| e.zone == zone) {
            Some(entry) => entry.color = color,
            None => self.entries.push(LegendEntry { zone, color }),
        }
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.entries.iter().any(|e| e.zone == zone)
    }

    /// Resolve the display color for a zone.
    pub fn color_for_zone(&self, zone: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|e| e.zone == zone)
            .map(|e| e.color.as_str())
            .ok_or_else(|| AggregationError::UnknownZone {
                zone: zone.to_string(),
            })
    }

    /// Legend rows in registration order.
    pub fn legend_entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}
