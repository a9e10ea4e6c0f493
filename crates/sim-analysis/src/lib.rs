#![deny(warnings)]

//! Read-only summarizers over a metrics snapshot.
//!
//! Nothing in this crate mutates simulation state: every function takes a
//! `Metrics` (or the decision catalog) and returns derived numbers or
//! advisory text for the presentation layer.

mod analysis;
mod insights;
mod projection;
mod ranking;
mod verdict;

pub use analysis::{analyze_startup, HealthStatus, StartupAnalysis};
pub use insights::generate_insights;
pub use projection::{predict_outcomes, OutcomeProjection};
pub use ranking::{rank_decisions, RankedDecision};
pub use verdict::{assess_venture, RoiOutlook, ScenarioBand, VentureRating, VentureVerdict};
