//! Map session state.
//!
//! The session is the single owner of everything the aggregation services
//! need to read from the display surface: the current viewport, the zoom
//! level, the per-zone visibility toggles, and the registered layer groups.
//! Event handlers receive it by reference instead of reaching for
//! process-wide mutable map state.

use crate::map::events::MapEvent;
use crate::models::{Feature, GeoBounds, LatLng};
use crate::services::selection::select_visible_features;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-zone "currently displayed" flags.
///
/// Zones never mentioned read as not displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneVisibility {
    displayed: HashMap<String, bool>,
}

impl ZoneVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given zones toggled on.
    pub fn with_visible<I, Z>(zones: I) -> Self
    where
        I: IntoIterator<Item = Z>,
        Z: Into<String>,
    {
        let mut visibility = Self::new();
        for zone in zones {
            visibility.set_visible(zone, true);
        }
        visibility
    }

    pub fn is_visible(&self, zone: &str) -> bool {
        self.displayed.get(zone).copied().unwrap_or(false)
    }

    pub fn set_visible(&mut self, zone: impl Into<String>, visible: bool) {
        self.displayed.insert(zone.into(), visible);
    }

    /// Flip a zone's flag and return the new state.
    pub fn toggle(&mut self, zone: impl Into<String>) -> bool {
        let entry = self.displayed.entry(zone.into()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Currently displayed zones, sorted by name for deterministic output.
    pub fn visible_zones(&self) -> Vec<&str> {
        let mut zones: Vec<&str> = self
            .displayed
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(zone, _)| zone.as_str())
            .collect();
        zones.sort_unstable();
        zones
    }
}

/// A collection of features rendered and toggled together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerGroup {
    pub name: String,
    pub features: Vec<Feature>,
    /// Zoom limit above which the layer leaves the map, if any
    pub max_zoom: Option<f64>,
    pub active: bool,
}

impl LayerGroup {
    pub fn new(name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            name: name.into(),
            features,
            max_zoom: None,
            active: true,
        }
    }

    /// Drop the layer from the map once the zoom passes `limit`.
    pub fn with_max_zoom(mut self, limit: f64) -> Self {
        self.max_zoom = Some(limit);
        self
    }

    /// Smallest extent covering every feature in the group, or `None` for
    /// an empty group. Used by the display surface to fit the view to a
    /// layer.
    pub fn bounds(&self) -> Option<GeoBounds> {
        let mut features = self.features.iter();
        let mut bounds = features.next()?.bounds;
        for feature in features {
            bounds.extend(&feature.bounds);
        }
        Some(bounds)
    }
}

/// Explicit map state owned by the caller.
///
/// All mutation goes through the methods below (directly or via
/// [`MapEvent`]), and the session never computes statistics itself; the
/// aggregation entry points stay pure functions of what they are handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSession {
    viewport: GeoBounds,
    zoom: f64,
    visibility: ZoneVisibility,
    layers: Vec<LayerGroup>,
    marker: Option<LatLng>,
}

impl MapSession {
    pub fn new(viewport: GeoBounds, zoom: f64) -> Self {
        Self {
            viewport,
            zoom,
            visibility: ZoneVisibility::new(),
            layers: Vec::new(),
            marker: None,
        }
    }

    pub fn viewport(&self) -> &GeoBounds {
        &self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn visibility(&self) -> &ZoneVisibility {
        &self.visibility
    }

    pub fn layers(&self) -> &[LayerGroup] {
        &self.layers
    }

    pub fn marker(&self) -> Option<&LatLng> {
        self.marker.as_ref()
    }

    pub fn set_viewport(&mut self, viewport: GeoBounds) {
        self.viewport = viewport;
    }

    /// Update the zoom level and apply each layer's zoom-threshold rule:
    /// strictly above its limit a layer leaves the map, strictly below it
    /// returns, and at the limit it is left as-is.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        for layer in &mut self.layers {
            if let Some(limit) = layer.max_zoom {
                if zoom > limit {
                    layer.active = false;
                } else if zoom < limit {
                    layer.active = true;
                }
            }
        }
    }

    pub fn set_zone_visible(&mut self, zone: impl Into<String>, visible: bool) {
        self.visibility.set_visible(zone, visible);
    }

    /// Flip a zone toggle and return the new state.
    pub fn toggle_zone(&mut self, zone: impl Into<String>) -> bool {
        self.visibility.toggle(zone)
    }

    pub fn add_layer_group(&mut self, layer: LayerGroup) {
        self.layers.push(layer);
    }

    /// Place the search marker, replacing any previous one. The map shows
    /// at most one marker at a time.
    pub fn place_marker(&mut self, point: LatLng) {
        self.marker = Some(point);
    }

    pub fn clear_marker(&mut self) {
        self.marker = None;
    }

    /// Activate or deactivate a layer group by name. Returns false when no
    /// layer has that name.
    pub fn set_layer_active(&mut self, name: &str, active: bool) -> bool {
        match self.layers.iter_mut().find(|l| l.name == name) {
            Some(layer) => {
                layer.active = active;
                true
            }
            None => false,
        }
    }

    /// Apply a display-surface event to the session state.
    pub fn apply(&mut self, event: &MapEvent) {
        match event {
            MapEvent::ViewportChanged(viewport) => self.set_viewport(*viewport),
            MapEvent::ZoomChanged(zoom) => self.set_zoom(*zoom),
            MapEvent::ZoneToggled { zone, visible } => self.set_zone_visible(zone.clone(), *visible),
            MapEvent::LayerToggled { layer, active } => {
                if !self.set_layer_active(layer, *active) {
                    log::debug!("Ignoring toggle for unknown layer '{}'", layer);
                }
            }
            MapEvent::MarkerPlaced(point) => self.place_marker(*point),
        }
    }

    /// Features currently visible across all active layer groups, in layer
    /// registration order.
    pub fn visible_features(&self) -> Vec<Feature> {
        self.layers
            .iter()
            .filter(|layer| layer.active)
            .flat_map(|layer| {
                select_visible_features(&layer.features, &self.viewport, &self.visibility)
            })
            .collect()
    }
}
