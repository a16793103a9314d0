use serde::{Deserialize, Serialize};
use validator::Validate;

/// Service provider profile with reputation, skills and availability data
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Provider {
    #[serde(rename = "providerId")]
    #[validate(length(min = 1))]
    pub provider_id: String,
    pub name: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(rename = "completedJobs", default)]
    pub completed_jobs: u32,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "isTopRated", default)]
    pub is_top_rated: bool,
    #[serde(rename = "averageResponseTimeMinutes", default)]
    pub average_response_time_minutes: u32,
    #[serde(default)]
    #[validate(nested)]
    pub skills: Vec<ProviderSkill>,
    pub location: Location,
    #[serde(rename = "pricingRange")]
    #[validate(nested)]
    pub pricing_range: PricingRange,
    pub availability: Availability,
    #[serde(rename = "verificationLevel", default)]
    pub verification_level: VerificationLevel,
    #[serde(rename = "completionRate")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub completion_rate: f64,
}

/// A single skill entry on a provider profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderSkill {
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "yearsOfExperience", default)]
    #[validate(range(min = 0.0))]
    pub years_of_experience: f64,
}

/// Coarse two-level location (governorate + city)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub governorate: String,
    pub city: String,
}

/// Provider price band in EGP
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct PricingRange {
    #[validate(range(min = 0.0))]
    pub min: f64,
    #[validate(range(min = 0.0))]
    pub max: f64,
}

impl PricingRange {
    /// Whether min/max are ordered. Checked at the engine boundary
    /// alongside the derive-level range rules.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Provider availability window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    #[serde(rename = "isAvailable", default)]
    pub is_available: bool,
    #[serde(rename = "availableDays", default)]
    pub available_days: Vec<chrono::Weekday>,
    #[serde(rename = "availableHours")]
    pub available_hours: AvailableHours,
}

/// Daily working-hours window
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvailableHours {
    pub start: chrono::NaiveTime,
    pub end: chrono::NaiveTime,
}

/// Platform verification tier for a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    #[default]
    None,
    Basic,
    Skill,
    Approved,
}

/// A posted service request to match providers against
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub urgency: Urgency,
    pub location: Location,
    #[serde(default)]
    #[validate(nested)]
    pub budget: Option<Budget>,
}

/// Seeker budget band in EGP
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Budget {
    #[validate(range(min = 0.0))]
    pub min: f64,
    #[validate(range(min = 0.0))]
    pub max: f64,
}

impl Budget {
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// How soon the seeker needs the work done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Asap,
    ThisWeek,
    Flexible,
}

/// Scoring weights, one per matching dimension
#[derive(Debug, Clone, Copy)]
pub struct MatchingCriteria {
    pub location: f64,
    pub skills: f64,
    pub rating: f64,
    pub availability: f64,
    pub responsiveness: f64,
    pub verification: f64,
    pub completion: f64,
}

impl Default for MatchingCriteria {
    fn default() -> Self {
        Self {
            location: 0.25,
            skills: 0.20,
            rating: 0.15,
            availability: 0.15,
            responsiveness: 0.10,
            verification: 0.10,
            completion: 0.05,
        }
    }
}

/// Partial weight overrides; unset fields fall back to the base criteria
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate)]
pub struct CriteriaOverrides {
    #[validate(range(min = 0.0, max = 1.0))]
    pub location: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub skills: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub availability: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub responsiveness: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub verification: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub completion: Option<f64>,
}

impl CriteriaOverrides {
    /// Resolve effective criteria: base overridden field-by-field
    pub fn resolve(&self, base: MatchingCriteria) -> MatchingCriteria {
        MatchingCriteria {
            location: self.location.unwrap_or(base.location),
            skills: self.skills.unwrap_or(base.skills),
            rating: self.rating.unwrap_or(base.rating),
            availability: self.availability.unwrap_or(base.availability),
            responsiveness: self.responsiveness.unwrap_or(base.responsiveness),
            verification: self.verification.unwrap_or(base.verification),
            completion: self.completion.unwrap_or(base.completion),
        }
    }
}

/// Per-dimension normalized sub-scores for one (provider, request) pair
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub location: f64,
    pub skills: f64,
    pub rating: f64,
    pub availability: f64,
    pub responsiveness: f64,
    pub verification: f64,
    pub completion: f64,
}

/// One ranked entry in the matching output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub provider: Provider,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    pub scores: SubScores,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<MatchReason>,
}

/// Short label explaining why a provider ranked highly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchReason {
    LocationMatch,
    SkillMatch,
    RatingHigh,
    AvailableNow,
    FastResponder,
    VerifiedProvider,
    ReliableCompletion,
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationMatch => write!(f, "In your area"),
            Self::SkillMatch => write!(f, "Strong skill fit"),
            Self::RatingHigh => write!(f, "Highly rated"),
            Self::AvailableNow => write!(f, "Available now"),
            Self::FastResponder => write!(f, "Fast to respond"),
            Self::VerifiedProvider => write!(f, "Verified professional"),
            Self::ReliableCompletion => write!(f, "Reliable track record"),
        }
    }
}
