//! Catalog search entry points.
//!
//! # Responsibility
//! - Filter the in-memory catalog by free text, cuisine and open state.
//! - Offer search-box suggestions and menu tab views.
//!
//! # Invariants
//! - Every search function is pure and preserves input order.

pub mod filter;
pub mod menu;
pub mod suggest;
