use crate::models::{MatchReason, SubScores};

/// Sub-score threshold for emitting a reason tag
pub const REASON_SCORE_THRESHOLD: f64 = 0.8;
/// Completion rate uses a stricter threshold than the other dimensions.
/// TODO: product to confirm whether completion should share the 0.8 threshold
pub const COMPLETION_REASON_THRESHOLD: f64 = 0.9;
/// Maximum number of reason tags per result
pub const MAX_REASONS: usize = 3;

/// Generate reason tags for a scored result
///
/// Dimensions are evaluated in a fixed priority order and the first
/// [`MAX_REASONS`] qualifying tags are kept, in that order rather than by
/// score magnitude.
pub fn match_reasons(scores: &SubScores) -> Vec<MatchReason> {
    let candidates = [
        (scores.location, REASON_SCORE_THRESHOLD, MatchReason::LocationMatch),
        (scores.skills, REASON_SCORE_THRESHOLD, MatchReason::SkillMatch),
        (scores.rating, REASON_SCORE_THRESHOLD, MatchReason::RatingHigh),
        (scores.availability, REASON_SCORE_THRESHOLD, MatchReason::AvailableNow),
        (scores.responsiveness, REASON_SCORE_THRESHOLD, MatchReason::FastResponder),
        (scores.verification, REASON_SCORE_THRESHOLD, MatchReason::VerifiedProvider),
        (scores.completion, COMPLETION_REASON_THRESHOLD, MatchReason::ReliableCompletion),
    ];

    candidates
        .iter()
        .filter(|(score, threshold, _)| score >= threshold)
        .map(|(_, _, reason)| *reason)
        .take(MAX_REASONS)
        .collect()
}
