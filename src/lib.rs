//! # Field Visualization Backend
//!
//! Analytics core for a browser-based map of agricultural fields and
//! weather-grid cells.
//!
//! The mapping display surface owns rendering, pan/zoom, and layer
//! plumbing; this crate owns the computations behind the info panels next
//! to the map: which features are currently visible, the date statistics
//! over them, and the per-zone series feeding the histogram.
//!
//! ## Features
//!
//! - **Visible-Feature Selection**: filter features by zone toggles and
//!   full viewport containment
//! - **Date Summaries**: count/min/median/max over a date-valued attribute
//! - **Zone Histograms**: per-zone attribute series with registered colors
//! - **Point Location**: find the grid cells containing a coordinate
//! - **Map Session**: explicit viewport/zoom/visibility/layer state with
//!   event dispatch
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: consolidated public type surface
//! - [`models`]: geographic primitives and the feature record
//! - [`services`]: pure aggregation and summarization functions
//! - [`map`]: session state and event dispatch
//! - [`zones`]: zone color registry and legend data
//!
//! Every computation is synchronous and stateless across calls: results
//! are pure functions of the features, viewport, and visibility flags
//! passed in.

pub mod api;

pub mod error;
pub mod models;

pub mod map;

pub mod services;

pub mod zones;
