//! Map session state and event dispatch.
//!
//! This module models the display surface's mutable state (viewport, zoom,
//! overlay toggles, layer groups) as an explicit [`MapSession`] value and
//! routes user interactions through [`EventDispatcher`] so the aggregation
//! services stay pure.

pub mod events;
pub mod session;

pub use events::{EventDispatcher, EventSubscriber, MapEvent};
pub use session::{LayerGroup, MapSession, ZoneVisibility};
