//! Core domain logic for the food truck finder.
//! This crate is the single source of truth for catalog search, opening hours,
//! display formatting and owner-portal editing rules.

pub mod catalog;
pub mod format;
pub mod hours;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use format::{
    average_rating, format_currency, format_date, rating_stars, truncate_text, StarBreakdown,
    INVALID_DATE,
};
pub use hours::{is_open_at, is_open_now, schedule_for_day, today_schedule};
pub use logging::{
    default_log_level, init_logging, logging_status, LogLevel, LoggingConfig, LoggingError,
};
pub use model::owner::{OwnerAnalytics, OwnerProfile, SubscriptionTier, User};
pub use model::review::{Review, ReviewReply};
pub use model::truck::{
    Contact, Coordinates, Cuisine, DietaryTag, FoodTruck, MenuItem, ScheduleEntry, TruckLocation,
};
pub use search::filter::{filter_trucks, OpenFilter, TruckFilters};
pub use search::menu::{filter_menu, menu_categories, popular_items, MenuCategory};
pub use search::suggest::{cuisine_suggestions, suggest};
pub use service::location_service::{HoursField, LocationEditError, LocationEditor};
pub use service::menu_service::{MenuEditError, MenuEditor, MenuItemDraft};
pub use service::profile_service::{ProfileEditError, ProfileEditor};
pub use service::review_service::{
    latest_reviews, list_reviews, rating_summary, submit_review, RatingSummary, ReviewBoard,
    ReviewDraft, ReviewError, ReviewQuery, ReviewSort,
};
pub use service::subscription::{plan, plans, SubscriptionPlan};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
