use crate::models::{
    Availability, Location, MatchingCriteria, Provider, ProviderSkill, ServiceRequest, SubScores,
    Urgency, VerificationLevel,
};

/// Score for a provider in the same city as the request
pub const SAME_CITY_SCORE: f64 = 1.0;
/// Score for a provider in the same governorate but a different city
pub const SAME_GOVERNORATE_SCORE: f64 = 0.8;
/// Score for a provider outside the request governorate
pub const OTHER_GOVERNORATE_SCORE: f64 = 0.3;

/// Base score for having at least one skill matching the request
pub const SKILL_BASE_SCORE: f64 = 0.5;
/// Bonus when at least one matching skill is platform-verified
pub const SKILL_VERIFIED_BONUS: f64 = 0.3;
/// Maximum experience bonus, reached at [`SKILL_EXPERIENCE_CAP_YEARS`]
pub const SKILL_EXPERIENCE_BONUS: f64 = 0.2;
pub const SKILL_EXPERIENCE_CAP_YEARS: f64 = 10.0;

/// Rating scale ceiling
pub const MAX_RATING: f64 = 5.0;
/// Maximum review-count trust bonus, reached at [`REVIEW_TRUST_CAP`] reviews
pub const REVIEW_TRUST_BONUS: f64 = 0.1;
pub const REVIEW_TRUST_CAP: f64 = 50.0;

/// Base score for an available provider
pub const AVAILABILITY_BASE_SCORE: f64 = 0.5;
/// Bonus when the request is urgent and the provider is available
pub const URGENT_AVAILABILITY_BONUS: f64 = 0.3;
/// Bonus for providers working most of the week
pub const FULL_WEEK_BONUS: f64 = 0.2;
pub const FULL_WEEK_MIN_DAYS: usize = 5;

// Responsiveness step bands, in hours
pub const RESPONSE_FAST_HOURS: f64 = 1.0;
pub const RESPONSE_SAME_SHIFT_HOURS: f64 = 4.0;
pub const RESPONSE_SAME_DAY_HOURS: f64 = 24.0;
pub const RESPONSE_FAST_SCORE: f64 = 1.0;
pub const RESPONSE_SAME_SHIFT_SCORE: f64 = 0.8;
pub const RESPONSE_SAME_DAY_SCORE: f64 = 0.6;
pub const RESPONSE_SLOW_SCORE: f64 = 0.3;

// Verification tier scores
pub const VERIFICATION_APPROVED_SCORE: f64 = 1.0;
pub const VERIFICATION_SKILL_SCORE: f64 = 0.7;
pub const VERIFICATION_BASIC_SCORE: f64 = 0.4;
pub const VERIFICATION_NONE_SCORE: f64 = 0.2;
pub const TOP_RATED_BONUS: f64 = 0.1;

/// Compute all seven sub-scores for one (provider, request) pair
///
/// Every sub-score is in [0, 1]. Inputs must already satisfy the domain
/// invariants (rating in 0..=5, completion_rate in 0..=100); the engine
/// validates them before calling in here.
pub fn calculate_sub_scores(provider: &Provider, request: &ServiceRequest) -> SubScores {
    SubScores {
        location: location_score(&provider.location, &request.location),
        skills: skills_score(&provider.skills, &request.category, &request.subcategory),
        rating: rating_score(provider.rating, provider.review_count),
        availability: availability_score(&provider.availability, request.urgency),
        responsiveness: responsiveness_score(provider.average_response_time_minutes),
        verification: verification_score(provider.verification_level, provider.is_top_rated),
        completion: completion_rate_score(provider.completion_rate),
    }
}

/// Weighted total over the seven dimensions
pub fn calculate_total_score(scores: &SubScores, criteria: &MatchingCriteria) -> f64 {
    scores.location * criteria.location
        + scores.skills * criteria.skills
        + scores.rating * criteria.rating
        + scores.availability * criteria.availability
        + scores.responsiveness * criteria.responsiveness
        + scores.verification * criteria.verification
        + scores.completion * criteria.completion
}

/// Location score (0-1)
///
/// Coarse three-tier heuristic: same city, same governorate, elsewhere.
/// No distance interpolation.
#[inline]
pub fn location_score(provider: &Location, request: &Location) -> f64 {
    if provider.city == request.city {
        SAME_CITY_SCORE
    } else if provider.governorate == request.governorate {
        SAME_GOVERNORATE_SCORE
    } else {
        OTHER_GOVERNORATE_SCORE
    }
}

/// Skills score (0-1)
///
/// Zero without a skill matching both the request category and subcategory.
/// Otherwise a base score, a verification bonus, and an experience bonus
/// growing linearly up to [`SKILL_EXPERIENCE_CAP_YEARS`] summed across all
/// matching skills.
#[inline]
pub fn skills_score(skills: &[ProviderSkill], category: &str, subcategory: &str) -> f64 {
    if category.is_empty() || subcategory.is_empty() {
        return 0.0;
    }

    let matching: Vec<&ProviderSkill> = skills
        .iter()
        .filter(|s| s.category == category && s.subcategory == subcategory)
        .collect();

    if matching.is_empty() {
        return 0.0;
    }

    let mut score = SKILL_BASE_SCORE;

    if matching.iter().any(|s| s.verified) {
        score += SKILL_VERIFIED_BONUS;
    }

    let total_years: f64 = matching.iter().map(|s| s.years_of_experience).sum();
    score += (total_years / SKILL_EXPERIENCE_CAP_YEARS).min(1.0) * SKILL_EXPERIENCE_BONUS;

    score.min(1.0)
}

/// Rating score (0-1)
///
/// Normalized star rating plus a small trust bonus that saturates at
/// [`REVIEW_TRUST_CAP`] reviews.
#[inline]
pub fn rating_score(rating: f64, review_count: u32) -> f64 {
    let base = rating / MAX_RATING;
    let trust = (review_count as f64 / REVIEW_TRUST_CAP).min(1.0) * REVIEW_TRUST_BONUS;

    (base + trust).min(1.0)
}

/// Availability score (0-1)
///
/// Hard gate: an unavailable provider scores zero regardless of anything
/// else. Available providers earn urgency and full-week bonuses.
#[inline]
pub fn availability_score(availability: &Availability, urgency: Urgency) -> f64 {
    if !availability.is_available {
        return 0.0;
    }

    let mut score = AVAILABILITY_BASE_SCORE;

    if urgency == Urgency::Asap {
        score += URGENT_AVAILABILITY_BONUS;
    }

    if availability.available_days.len() >= FULL_WEEK_MIN_DAYS {
        score += FULL_WEEK_BONUS;
    }

    score.min(1.0)
}

/// Responsiveness score (0-1)
///
/// Step function over average response time; no interpolation between bands.
#[inline]
pub fn responsiveness_score(average_response_time_minutes: u32) -> f64 {
    let hours = average_response_time_minutes as f64 / 60.0;

    if hours <= RESPONSE_FAST_HOURS {
        RESPONSE_FAST_SCORE
    } else if hours <= RESPONSE_SAME_SHIFT_HOURS {
        RESPONSE_SAME_SHIFT_SCORE
    } else if hours <= RESPONSE_SAME_DAY_HOURS {
        RESPONSE_SAME_DAY_SCORE
    } else {
        RESPONSE_SLOW_SCORE
    }
}

/// Verification score (0-1)
///
/// Base score per verification tier plus a top-rated bonus.
#[inline]
pub fn verification_score(level: VerificationLevel, is_top_rated: bool) -> f64 {
    let base = match level {
        VerificationLevel::Approved => VERIFICATION_APPROVED_SCORE,
        VerificationLevel::Skill => VERIFICATION_SKILL_SCORE,
        VerificationLevel::Basic => VERIFICATION_BASIC_SCORE,
        VerificationLevel::None => VERIFICATION_NONE_SCORE,
    };

    let bonus = if is_top_rated { TOP_RATED_BONUS } else { 0.0 };

    (base + bonus).min(1.0)
}

/// Completion-rate score (0-1), linear
#[inline]
pub fn completion_rate_score(completion_rate: f64) -> f64 {
    completion_rate / 100.0
}
