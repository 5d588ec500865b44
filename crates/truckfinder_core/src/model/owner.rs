//! Consumer and owner-portal account shapes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Consumer account with saved trucks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Truck ids, in the order they were saved.
    #[serde(default)]
    pub saved_trucks: Vec<String>,
    /// Review ids written by this user.
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl User {
    pub fn has_saved(&self, truck_id: &str) -> bool {
        self.saved_trucks.iter().any(|id| id == truck_id)
    }

    /// Saves or un-saves a truck.
    ///
    /// Returns `true` when the truck is saved after the call.
    pub fn toggle_saved_truck(&mut self, truck_id: &str) -> bool {
        if self.has_saved(truck_id) {
            self.saved_trucks.retain(|id| id != truck_id);
            false
        } else {
            self.saved_trucks.push(truck_id.to_string());
            true
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionTier {
    Basic,
    Premium,
}

impl SubscriptionTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
        }
    }
}

impl Display for SubscriptionTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopItem {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRating {
    pub month: String,
    pub rating: f64,
}

/// Dashboard figures shown in the owner portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerAnalytics {
    pub profile_views: u32,
    pub average_rating: f64,
    pub review_count: u32,
    pub top_items: Vec<TopItem>,
    pub ratings_by_month: Vec<MonthlyRating>,
}

/// Owner account linked to exactly one truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub id: String,
    pub user_id: String,
    /// Weak reference to the managed truck.
    pub truck_id: String,
    pub subscription: SubscriptionTier,
    pub subscription_features: Vec<String>,
    pub analytics: OwnerAnalytics,
}
