//! Service layer for feature aggregation and summarization.
//!
//! These services are pure transformations: each call reads the features,
//! viewport, and visibility state it is handed and produces fresh output.
//! No state carries between calls, so repeated invocations with identical
//! inputs yield identical results.

pub mod histogram;

pub mod locate;

pub mod selection;

pub mod summary;

pub use histogram::{group_by_zone, HistogramSeries};
pub use locate::features_containing_point;
pub use selection::select_visible_features;
pub use summary::{
    summarize_dates, summarize_plant_dates, DateSummary, DEFAULT_DATE_ATTRIBUTE,
};
