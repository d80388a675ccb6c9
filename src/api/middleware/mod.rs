//! HTTP middleware for request processing.
//!
//! The ops surface is internal, so only observability middleware is applied.

pub mod tracing;
