//! Display-surface events and subscription dispatch.
//!
//! User interactions on the map (panning, zooming, toggling a zone overlay)
//! arrive here as plain values. Dispatching an event first applies it to the
//! session, then invokes every subscriber with the event and the updated
//! session. Subscribers are pure callbacks: they hold no handles into the
//! session and all state they need is passed in on each call.

use crate::map::session::MapSession;
use crate::models::{GeoBounds, LatLng};
use serde::{Deserialize, Serialize};

/// A state change reported by the mapping display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The visible extent changed (pan, zoom, or resize)
    ViewportChanged(GeoBounds),
    /// The zoom level changed
    ZoomChanged(f64),
    /// A zone overlay was toggled on or off
    ZoneToggled { zone: String, visible: bool },
    /// A layer group was activated or deactivated
    LayerToggled { layer: String, active: bool },
    /// The search marker was placed at a coordinate
    MarkerPlaced(LatLng),
}

/// Subscriber callback invoked after an event has been applied.
pub type EventSubscriber = Box<dyn FnMut(&MapEvent, &MapSession)>;

/// Synchronous event fan-out to registered subscribers.
#[derive(Default)]
pub struct EventDispatcher {
    subscribers: Vec<EventSubscriber>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Subscribers run in registration order.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&MapEvent, &MapSession) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply `event` to the session, then notify every subscriber.
    ///
    /// Each call runs to completion before the next event is dispatched;
    /// nothing here suspends or retains state between calls.
    pub fn dispatch(&mut self, session: &mut MapSession, event: MapEvent) {
        session.apply(&event);
        for subscriber in &mut self.subscribers {
            subscriber(&event, session);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
