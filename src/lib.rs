//! Khidma Match - provider matching engine for the Khidma services marketplace
//!
//! This library ranks candidate providers against a service request using a
//! weighted combination of location proximity, skill fit, reputation,
//! availability, responsiveness, verification level and completion history.
//! It is a pure in-process engine: callers fetch the records, the engine
//! scores and ranks them, and the caller renders or transports the results.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use core::{MatchError, MatchOutcome, MatchingEngine, DEFAULT_MAX_RESULTS, MIN_ACCEPTANCE_SCORE};
pub use models::{
    CriteriaOverrides, MatchReason, MatchResult, MatchingCriteria, Provider, ServiceRequest,
    SubScores,
};
