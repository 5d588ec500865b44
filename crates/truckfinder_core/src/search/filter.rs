//! Free-text and structured filtering over the truck catalog.
//!
//! # Responsibility
//! - Match a search box query against truck and menu text.
//! - Apply cuisine and open-state filters.
//!
//! # Invariants
//! - Output is a subsequence of the input in catalog order.
//! - Blank criteria filter nothing: an empty query and default filters return
//!   every truck.

use crate::model::truck::FoodTruck;
use log::debug;

/// Open-state axis of [`TruckFilters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenFilter {
    /// Do not filter on open state.
    #[default]
    Any,
    /// Keep trucks whose stored `is_open` flag is set.
    OpenOnly,
    /// Keep trucks whose stored `is_open` flag is clear.
    ClosedOnly,
}

impl OpenFilter {
    /// Maps the search form's checkbox value.
    ///
    /// An unchecked box (`Some(false)`) means "don't filter", not "closed".
    pub fn from_checkbox(is_open: Option<bool>) -> Self {
        match is_open {
            Some(true) => Self::OpenOnly,
            Some(false) | None => Self::Any,
        }
    }

    fn accepts(self, truck: &FoodTruck) -> bool {
        match self {
            Self::Any => true,
            Self::OpenOnly => truck.is_open,
            Self::ClosedOnly => !truck.is_open,
        }
    }
}

/// Structured filters applied alongside the free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruckFilters {
    /// Exact, case-sensitive cuisine name. `None` or empty disables it.
    pub cuisine: Option<String>,
    pub open: OpenFilter,
}

impl TruckFilters {
    /// Creates filters that match every truck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds filters from the search form's raw values.
    pub fn from_legacy(cuisine: Option<&str>, is_open: Option<bool>) -> Self {
        Self {
            cuisine: cuisine.map(str::to_string),
            open: OpenFilter::from_checkbox(is_open),
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_open(mut self, open: OpenFilter) -> Self {
        self.open = open;
        self
    }

    fn active_cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|cuisine| !cuisine.is_empty())
    }
}

/// Returns trucks matching `query` and `filters`, in catalog order.
///
/// A truck is kept when all active criteria hold:
/// - `query` (skipped when empty) is a case-insensitive substring of its name,
///   cuisine, location text, or any menu item's name or description;
/// - its cuisine equals `filters.cuisine` exactly;
/// - its `is_open` flag satisfies `filters.open`.
pub fn filter_trucks<'a>(
    trucks: &'a [FoodTruck],
    query: &str,
    filters: &TruckFilters,
) -> Vec<&'a FoodTruck> {
    let lowered_query = (!query.is_empty()).then(|| query.to_lowercase());
    let cuisine = filters.active_cuisine();

    let matched = trucks
        .iter()
        .filter(|truck| {
            if let Some(needle) = lowered_query.as_deref() {
                if !matches_query(truck, needle) {
                    return false;
                }
            }
            if let Some(cuisine) = cuisine {
                if truck.cuisine.as_str() != cuisine {
                    return false;
                }
            }
            filters.open.accepts(truck)
        })
        .collect::<Vec<_>>();

    debug!(
        "event=catalog_filter module=search status=ok total={} matched={} query_chars={} cuisine={} open={:?}",
        trucks.len(),
        matched.len(),
        query.chars().count(),
        cuisine.unwrap_or("-"),
        filters.open
    );
    matched
}

/// Whether `truck` matches an already lower-cased query.
pub fn matches_query(truck: &FoodTruck, lowered_query: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(lowered_query);

    contains(&truck.name)
        || contains(truck.cuisine.as_str())
        || contains(&truck.location.text)
        || truck
            .menu
            .iter()
            .any(|item| contains(&item.name) || contains(&item.description))
}

#[cfg(test)]
mod tests {
    use super::{OpenFilter, TruckFilters};

    #[test]
    fn checkbox_false_means_any() {
        assert_eq!(OpenFilter::from_checkbox(Some(false)), OpenFilter::Any);
        assert_eq!(OpenFilter::from_checkbox(None), OpenFilter::Any);
        assert_eq!(OpenFilter::from_checkbox(Some(true)), OpenFilter::OpenOnly);
    }

    #[test]
    fn empty_cuisine_is_inactive() {
        let filters = TruckFilters::from_legacy(Some(""), None);
        assert_eq!(filters.active_cuisine(), None);
        let filters = TruckFilters::new().with_cuisine("Mexican");
        assert_eq!(filters.active_cuisine(), Some("Mexican"));
    }
}
