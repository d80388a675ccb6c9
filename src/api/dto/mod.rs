//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Quality evaluation bodies deserialize straight into
//! the domain input types.

pub mod audit;
pub mod duplicate;
pub mod health;
pub mod indexing;
pub mod links;
pub mod sitemap;
