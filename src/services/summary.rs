//! Date order-statistics over a feature set.
//!
//! Feeds the stats panel shown next to the map: how many fields are in
//! view, and the earliest, median, and latest value of a date attribute
//! (planting date by default). Computed fresh on every call from exactly
//! the features passed in; nothing carries over between calls.

use crate::error::{AggregationError, Result};
use crate::models::Feature;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attribute summarized when the caller has no other preference.
pub const DEFAULT_DATE_ATTRIBUTE: &str = "plant_date";

/// Descriptive statistics over a date-valued attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSummary {
    pub count: usize,
    pub min: NaiveDate,
    pub median: NaiveDate,
    pub max: NaiveDate,
}

/// Summarize the named date attribute across `features`.
///
/// Every feature must carry the attribute as a parseable ISO-8601 date;
/// a missing or malformed value fails the whole call naming the offending
/// feature, so the caller never renders stats computed from a partial set.
///
/// The median is the upper-middle element of the ascending sort: the exact
/// middle for odd counts, and for even counts the upper of the two middle
/// elements rather than their average. Downstream consumers expect this
/// tie-break, so it is pinned by tests.
///
/// # Errors
/// * `EmptyInput` when `features` is empty
/// * `MissingAttribute` / `InvalidDate` from attribute extraction
pub fn summarize_dates(features: &[Feature], attribute: &str) -> Result<DateSummary> {
    if features.is_empty() {
        return Err(AggregationError::EmptyInput);
    }

    let mut dates = features
        .iter()
        .map(|feature| feature.date_property(attribute))
        .collect::<Result<Vec<NaiveDate>>>()?;
    dates.sort_unstable();

    let count = dates.len();
    Ok(DateSummary {
        count,
        min: dates[0],
        median: dates[count / 2],
        max: dates[count - 1],
    })
}

/// Summarize the planting date attribute.
pub fn summarize_plant_dates(features: &[Feature]) -> Result<DateSummary> {
    summarize_dates(features, DEFAULT_DATE_ATTRIBUTE)
}
