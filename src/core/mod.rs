// Core algorithm exports
pub mod matcher;
pub mod reasons;
pub mod scoring;

pub use matcher::{MatchError, MatchOutcome, MatchingEngine, DEFAULT_MAX_RESULTS, MIN_ACCEPTANCE_SCORE};
pub use reasons::match_reasons;
pub use scoring::{calculate_sub_scores, calculate_total_score};
