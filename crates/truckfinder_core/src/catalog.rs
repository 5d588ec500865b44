//! Immutable catalog snapshot.
//!
//! # Responsibility
//! - Load trucks, reviews and accounts from JSON (file or bundled sample).
//! - Provide id lookups and the truck -> reviews relation.
//!
//! # Invariants
//! - Truck ids are unique within a snapshot.
//! - Truck ratings are within `[0, 5]`; review ratings within `1..=5`.
//! - A loaded snapshot is never mutated; editors take private copies.

use crate::model::owner::{OwnerProfile, User};
use crate::model::review::{Review, MAX_REVIEW_RATING, MIN_REVIEW_RATING};
use crate::model::truck::FoodTruck;
use crate::search::filter::{filter_trucks, TruckFilters};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const SAMPLE_CATALOG_JSON: &str = include_str!("../data/sample_catalog.json");

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading and validation error.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateTruckId(String),
    /// Truck rating outside `[0, 5]`.
    InvalidTruckRating {
        truck_id: String,
        rating: f64,
    },
    /// Review rating outside `1..=5`.
    InvalidReviewRating {
        review_id: String,
        rating: u8,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog: {err}"),
            Self::Json(err) => write!(f, "invalid catalog json: {err}"),
            Self::DuplicateTruckId(id) => write!(f, "duplicate truck id: {id}"),
            Self::InvalidTruckRating { truck_id, rating } => {
                write!(f, "truck `{truck_id}` rating {rating} is outside 0..=5")
            }
            Self::InvalidReviewRating { review_id, rating } => {
                write!(f, "review `{review_id}` rating {rating} is outside 1..=5")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Snapshot of everything the directory and owner portal render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Trucks in display order.
    pub trucks: Vec<FoodTruck>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub owners: Vec<OwnerProfile>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Catalog {
    /// Builds a validated catalog from trucks and reviews.
    pub fn new(trucks: Vec<FoodTruck>, reviews: Vec<Review>) -> CatalogResult<Self> {
        let catalog = Self {
            trucks,
            reviews,
            ..Self::default()
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog JSON document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog JSON file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "event=catalog_load module=catalog status=ok source=file path={} trucks={} reviews={}",
            path.display(),
            catalog.trucks.len(),
            catalog.reviews.len()
        );
        Ok(catalog)
    }

    /// Bundled sample data used when no catalog file is given.
    pub fn sample() -> CatalogResult<Self> {
        let catalog = Self::from_json(SAMPLE_CATALOG_JSON)?;
        info!(
            "event=catalog_load module=catalog status=ok source=sample trucks={} reviews={}",
            catalog.trucks.len(),
            catalog.reviews.len()
        );
        Ok(catalog)
    }

    /// Checks snapshot invariants.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::with_capacity(self.trucks.len());
        for truck in &self.trucks {
            if !seen.insert(truck.id.as_str()) {
                return Err(CatalogError::DuplicateTruckId(truck.id.clone()));
            }
            if !(0.0..=5.0).contains(&truck.rating) {
                return Err(CatalogError::InvalidTruckRating {
                    truck_id: truck.id.clone(),
                    rating: truck.rating,
                });
            }
        }

        for review in &self.reviews {
            if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&review.rating) {
                return Err(CatalogError::InvalidReviewRating {
                    review_id: review.id.clone(),
                    rating: review.rating,
                });
            }
        }

        Ok(())
    }

    pub fn truck(&self, id: &str) -> Option<&FoodTruck> {
        self.trucks.iter().find(|truck| truck.id == id)
    }

    /// Reviews of one truck, in stored order.
    pub fn reviews_for(&self, truck_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.truck_id == truck_id)
            .collect()
    }

    pub fn owner_profile_for(&self, truck_id: &str) -> Option<&OwnerProfile> {
        self.owners.iter().find(|owner| owner.truck_id == truck_id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Distinct truck location labels in catalog order.
    pub fn location_options(&self) -> Vec<&str> {
        let mut options: Vec<&str> = Vec::new();
        for truck in &self.trucks {
            let text = truck.location.text.as_str();
            if !options.contains(&text) {
                options.push(text);
            }
        }
        options
    }

    /// Owned copy of [`filter_trucks`] over this snapshot.
    pub fn filter_catalog(&self, query: &str, filters: &TruckFilters) -> Vec<FoodTruck> {
        filter_trucks(&self.trucks, query, filters)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;

    #[test]
    fn sample_catalog_loads_and_validates() {
        let catalog = Catalog::sample().expect("bundled sample should be valid");
        assert!(!catalog.trucks.is_empty());
        assert!(!catalog.reviews.is_empty());
        for review in &catalog.reviews {
            assert!(
                catalog.truck(&review.truck_id).is_some(),
                "review {} points at unknown truck {}",
                review.id,
                review.truck_id
            );
        }
    }
}
