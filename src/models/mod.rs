// Model exports
pub mod domain;

pub use domain::{
    Availability, AvailableHours, Budget, CriteriaOverrides, Location, MatchReason, MatchResult,
    MatchingCriteria, PricingRange, Provider, ProviderSkill, ServiceRequest, SubScores, Urgency,
    VerificationLevel,
};
