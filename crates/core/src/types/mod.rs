//! Core types for Menuboard.
//!
//! This module provides the catalog and availability types that every other
//! component is a projection of.

pub mod availability;
pub mod catalog;
pub mod id;

pub use availability::AvailabilityRecord;
pub use catalog::{Catalog, Category, MenuItem};
pub use id::ItemId;
