//! Domain layer containing the page-quality rules and entities.
//!
//! Everything in this layer except the repository contract is pure and
//! synchronous: no I/O, no shared state, safe to call from any thread.
//!
//! # Architecture
//!
//! - [`entities`] - Records, evaluation inputs and decision types
//! - [`indexing_gate`] - Per-page-type activity checks
//! - [`quality_evaluator`] - Data-category scoring and section unlocking
//! - [`entity_role`] - Hub/leaf/editorial roles, sitemap priority, link strategy
//! - [`link_budget`] - Link limits, candidate filtering, anchor variation
//! - [`repositories`] - Data access trait definitions
//!
//! # Publish Decision
//!
//! A page is published only when both [`indexing_gate`] and
//! [`quality_evaluator`] pass (see [`entities::is_publishable`]). The two
//! checks are evaluated independently; neither subsumes the other.

pub mod entities;
pub mod entity_role;
pub mod indexing_gate;
pub mod link_budget;
pub mod quality_evaluator;
pub mod repositories;
