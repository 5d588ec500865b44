//! Domain model for the food truck catalog.
//!
//! # Responsibility
//! - Define canonical data structures shared by search, formatting and
//!   owner-portal use-cases.
//! - Keep serde wire names aligned with the catalog JSON files.
//!
//! # Invariants
//! - Trucks are identified by a stable string `id`.
//! - Cross-entity links (`Review::truck_id`, `OwnerProfile::truck_id`) are
//!   lookup keys, never ownership.

pub mod owner;
pub mod review;
pub mod truck;
