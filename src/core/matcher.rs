use crate::core::reasons::match_reasons;
use crate::core::scoring::{calculate_sub_scores, calculate_total_score};
use crate::models::{CriteriaOverrides, MatchResult, MatchingCriteria, Provider, ServiceRequest};
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationError, ValidationErrors};

/// Fixed acceptance floor: providers scoring below this never surface
pub const MIN_ACCEPTANCE_SCORE: f64 = 0.3;
/// Conventional result cap when the caller has no preference
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Errors raised at the matching input boundary
///
/// Scoring itself is infallible; all errors are input contract violations.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid service request: {0}")]
    InvalidRequest(ValidationErrors),
    #[error("Invalid matching criteria: {0}")]
    InvalidCriteria(ValidationErrors),
    #[error("Invalid provider record {provider_id}: {errors}")]
    InvalidProvider {
        provider_id: String,
        errors: ValidationErrors,
    },
}

/// Result of one matching run
#[derive(Debug)]
pub struct MatchOutcome {
    pub results: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline
/// 1. Boundary validation of request, overrides and providers
/// 2. Per-provider sub-score computation
/// 3. Weighted total, acceptance-floor filter
/// 4. Stable ranking, truncation, reason tagging
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    criteria: MatchingCriteria,
}

impl MatchingEngine {
    pub fn new(criteria: MatchingCriteria) -> Self {
        Self { criteria }
    }

    pub fn with_default_criteria() -> Self {
        Self {
            criteria: MatchingCriteria::default(),
        }
    }

    /// Rank candidate providers against a service request
    ///
    /// # Arguments
    /// * `request` - The posted service request
    /// * `providers` - Candidate pool, already fetched by the caller
    /// * `overrides` - Optional partial weight overrides for this run
    /// * `max_results` - Maximum number of results to return
    ///
    /// # Returns
    /// Ranked results (descending total score, ties keep input order), all
    /// with `total_score >= MIN_ACCEPTANCE_SCORE`. An empty candidate pool
    /// yields an empty result list, not an error.
    pub fn match_providers(
        &self,
        request: &ServiceRequest,
        providers: Vec<Provider>,
        overrides: Option<CriteriaOverrides>,
        max_results: usize,
    ) -> Result<MatchOutcome, MatchError> {
        validate_request(request)?;

        if let Some(overrides) = &overrides {
            overrides
                .validate()
                .map_err(MatchError::InvalidCriteria)?;
        }

        for provider in &providers {
            validate_provider(provider)?;
        }

        let criteria = overrides
            .map(|o| o.resolve(self.criteria))
            .unwrap_or(self.criteria);

        let total_candidates = providers.len();
        debug!("Scoring {} candidate providers", total_candidates);

        let mut results: Vec<MatchResult> = providers
            .into_iter()
            .filter_map(|provider| {
                let scores = calculate_sub_scores(&provider, request);
                let total_score = calculate_total_score(&scores, &criteria);

                if total_score >= MIN_ACCEPTANCE_SCORE {
                    let match_reasons = match_reasons(&scores);
                    Some(MatchResult {
                        provider,
                        total_score,
                        scores,
                        match_reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        let accepted = results.len();

        // Vec::sort_by is stable: equal totals retain candidate input order
        results.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(max_results);

        debug!(
            "{} of {} candidates above the acceptance floor, returning {}",
            accepted,
            total_candidates,
            results.len()
        );

        Ok(MatchOutcome {
            results,
            total_candidates,
        })
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::with_default_criteria()
    }
}

fn validate_request(request: &ServiceRequest) -> Result<(), MatchError> {
    request.validate().map_err(MatchError::InvalidRequest)?;

    if let Some(budget) = &request.budget {
        if !budget.is_ordered() {
            return Err(MatchError::InvalidRequest(range_order_error("budget")));
        }
    }

    Ok(())
}

fn validate_provider(provider: &Provider) -> Result<(), MatchError> {
    provider.validate().map_err(|errors| MatchError::InvalidProvider {
        provider_id: provider.provider_id.clone(),
        errors,
    })?;

    if !provider.pricing_range.is_ordered() {
        return Err(MatchError::InvalidProvider {
            provider_id: provider.provider_id.clone(),
            errors: range_order_error("pricingRange"),
        });
    }

    Ok(())
}

fn range_order_error(field: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new("min_greater_than_max"));
    errors
}
