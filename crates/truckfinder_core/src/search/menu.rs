//! Menu browsing helpers for the truck detail page.
//!
//! # Invariants
//! - An item belongs to exactly one [`MenuCategory`]: its first Vegetarian or
//!   Vegan tag, otherwise `Regular`.
//! - Helpers preserve menu order.

use crate::model::truck::{DietaryTag, MenuItem};
use std::fmt::{Display, Formatter};

/// Number of popular items teased on truck cards.
pub const FEATURED_POPULAR_ITEMS: usize = 2;

/// Category tabs shown above a truck menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    Vegetarian,
    Vegan,
    Regular,
}

impl MenuCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Regular => "Regular",
        }
    }

    /// Category tab for one item.
    pub fn of(item: &MenuItem) -> Self {
        item.dietary
            .iter()
            .flatten()
            .find_map(|tag| match tag {
                DietaryTag::Vegetarian => Some(Self::Vegetarian),
                DietaryTag::Vegan => Some(Self::Vegan),
                DietaryTag::GlutenFree => None,
            })
            .unwrap_or(Self::Regular)
    }

    fn accepts(self, item: &MenuItem) -> bool {
        match self {
            Self::Vegetarian => item.has_dietary(DietaryTag::Vegetarian),
            Self::Vegan => item.has_dietary(DietaryTag::Vegan),
            Self::Regular => {
                !item.has_dietary(DietaryTag::Vegetarian) && !item.has_dietary(DietaryTag::Vegan)
            }
        }
    }
}

impl Display for MenuCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct categories present in `menu`, in first-seen order.
pub fn menu_categories(menu: &[MenuItem]) -> Vec<MenuCategory> {
    let mut categories = Vec::new();
    for category in menu.iter().map(MenuCategory::of) {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Items shown under the selected tab; `None` shows the whole menu.
///
/// A tagged item may appear under a tab other than its own category, e.g. an
/// item tagged both Vegetarian and Vegan shows under both tabs.
pub fn filter_menu(menu: &[MenuItem], category: Option<MenuCategory>) -> Vec<&MenuItem> {
    match category {
        Some(category) => menu.iter().filter(|item| category.accepts(item)).collect(),
        None => menu.iter().collect(),
    }
}

/// First `limit` items flagged popular.
pub fn popular_items(menu: &[MenuItem], limit: usize) -> Vec<&MenuItem> {
    menu.iter()
        .filter(|item| item.is_popular())
        .take(limit)
        .collect()
}
