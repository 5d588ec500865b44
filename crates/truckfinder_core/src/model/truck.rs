//! Food truck domain model.
//!
//! # Responsibility
//! - Define the canonical truck record rendered by list, detail and owner views.
//! - Keep wire field names aligned with the catalog JSON shape.
//!
//! # Invariants
//! - `rating` is within `[0, 5]`.
//! - A schedule day whose `open` is `"Closed"` has no meaningful `close`.
//! - `cuisine` is always one of [`Cuisine::ALL`].

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Literal used in schedule `open` to mark a closed day.
pub const CLOSED_MARKER: &str = "Closed";

/// Fixed cuisine enumeration used for tagging and filtering trucks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    Australian,
    Italian,
    Mexican,
    Asian,
    Indian,
    Mediterranean,
    Dessert,
    Vegan,
    Seafood,
    #[serde(rename = "BBQ")]
    Bbq,
}

impl Cuisine {
    /// All cuisines in declaration order.
    pub const ALL: [Cuisine; 10] = [
        Cuisine::Australian,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Asian,
        Cuisine::Indian,
        Cuisine::Mediterranean,
        Cuisine::Dessert,
        Cuisine::Vegan,
        Cuisine::Seafood,
        Cuisine::Bbq,
    ];

    /// Display and wire name, e.g. `"BBQ"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Australian => "Australian",
            Self::Italian => "Italian",
            Self::Mexican => "Mexican",
            Self::Asian => "Asian",
            Self::Indian => "Indian",
            Self::Mediterranean => "Mediterranean",
            Self::Dessert => "Dessert",
            Self::Vegan => "Vegan",
            Self::Seafood => "Seafood",
            Self::Bbq => "BBQ",
        }
    }

    /// Looks up a cuisine by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cuisine| cuisine.as_str() == name)
    }
}

impl Display for Cuisine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary tags a menu item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
}

impl DietaryTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten-Free",
        }
    }
}

/// One dish on a truck menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Non-negative amount in AUD.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Vec<DietaryTag>>,
}

impl MenuItem {
    /// Whether the item is flagged as a crowd favourite.
    pub fn is_popular(&self) -> bool {
        self.popular.unwrap_or(false)
    }

    /// Whether the item carries the given dietary tag.
    pub fn has_dietary(&self, tag: DietaryTag) -> bool {
        self.dietary
            .as_deref()
            .is_some_and(|tags| tags.contains(&tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Where a truck is parked: a free-text label plus an optional pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckLocation {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Opening hours for one weekday.
///
/// `open`/`close` are `HH:MM` 24-hour strings, or `open == "Closed"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Long English weekday name, e.g. `Monday`.
    pub day: String,
    pub open: String,
    pub close: String,
}

impl ScheduleEntry {
    pub fn new(day: impl Into<String>, open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            open: open.into(),
            close: close.into(),
        }
    }

    /// Creates an entry for a day the truck does not trade.
    pub fn closed(day: impl Into<String>) -> Self {
        Self::new(day, CLOSED_MARKER, CLOSED_MARKER)
    }

    pub fn is_closed(&self) -> bool {
        self.open == CLOSED_MARKER
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Canonical food truck record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTruck {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub cuisine: Cuisine,
    /// Aggregate star rating in `[0, 5]`.
    pub rating: f64,
    pub review_count: u32,
    /// Menu in display order.
    pub menu: Vec<MenuItem>,
    pub location: TruckLocation,
    /// One entry per weekday, stored in any order.
    pub schedule: Vec<ScheduleEntry>,
    pub contact: Contact,
    /// Stored open flag used by list filtering.
    pub is_open: bool,
}
