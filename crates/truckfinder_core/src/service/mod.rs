//! Owner-portal and consumer use-case services.
//!
//! # Responsibility
//! - Perform the local CRUD the portal screens need (profile, menu, hours,
//!   replies).
//! - Keep rendering layers free of validation rules.
//!
//! # Invariants
//! - Editors own copies taken from the catalog snapshot; the snapshot itself
//!   is never mutated.

pub mod location_service;
pub mod menu_service;
pub mod profile_service;
pub mod review_service;
pub mod subscription;
