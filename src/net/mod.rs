//! REST client layer: wire types, fault taxonomy, and one module per
//! external service boundary.

pub mod api;
pub mod auth;
pub mod error;
pub mod property;
pub mod types;
pub mod user;
