//! Menuboard Core - Domain types and view composition.
//!
//! This crate provides the types shared between the Menuboard server and its
//! tests:
//! - The read-only menu catalog (categories of priced items)
//! - The availability record (which item ids are currently offered, and when
//!   that set last changed)
//! - The view composer: pure projections of (catalog, record) into the admin
//!   checkbox view and the public display view
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no async. Persistence and transport live in the server crate.
//!
//! # Modules
//!
//! - [`types`] - Catalog, availability record, and the `ItemId` newtype
//! - [`view`] - Admin and public view composition

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod view;

pub use types::*;
pub use view::{AdminCategory, AdminItem, PublicCategory, admin_view, public_view};
