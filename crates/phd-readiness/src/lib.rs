//! Self-assessment scoring for PhD applications.
//!
//! The [`assessment`] module holds the deterministic pipeline that turns an
//! applicant's raw inputs into sub-scores, a weighted readiness score on a
//! 0-10 scale, a verdict tier, and ranked improvement advice. The remaining
//! modules carry the configuration, error, and logging plumbing used by the
//! command line front end.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
