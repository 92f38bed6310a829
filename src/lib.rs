//! Mealdeck - recipe browsing core for TheMealDB.
//!
//! Two layers compose the crate: a typed API client ([`mealdb`]) that turns
//! logical requests into decoded payloads or classified errors, and
//! per-screen fetch-state stores ([`store`]) that map those fetches onto
//! render states for a UI to observe.

pub mod adapters;
pub mod mealdb;
pub mod models;
pub mod store;
pub mod traits;
