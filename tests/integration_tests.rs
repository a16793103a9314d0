// Integration tests for Khidma Match

use khidma_match::core::{MatchingEngine, MIN_ACCEPTANCE_SCORE};
use khidma_match::models::{
    Availability, AvailableHours, Budget, CriteriaOverrides, Location, MatchReason, Provider,
    ProviderSkill, ServiceRequest, Urgency, VerificationLevel,
};
use chrono::{NaiveTime, Weekday};

fn create_test_provider(id: &str, governorate: &str, city: &str) -> Provider {
    Provider {
        provider_id: id.to_string(),
        name: format!("Provider {}", id),
        rating: 4.9,
        review_count: 80,
        completed_jobs: 120,
        is_verified: true,
        is_top_rated: true,
        average_response_time_minutes: 30,
        skills: vec![ProviderSkill {
            category: "plumbing".to_string(),
            subcategory: "pipe-repair".to_string(),
            verified: true,
            years_of_experience: 12.0,
        }],
        location: Location {
            governorate: governorate.to_string(),
            city: city.to_string(),
        },
        pricing_range: khidma_match::models::PricingRange {
            min: 200.0,
            max: 900.0,
        },
        availability: Availability {
            is_available: true,
            available_days: vec![
                Weekday::Sat,
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
            ],
            available_hours: AvailableHours {
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            },
        },
        verification_level: VerificationLevel::Approved,
        completion_rate: 98.0,
    }
}

fn create_test_request() -> ServiceRequest {
    ServiceRequest {
        category: "plumbing".to_string(),
        subcategory: "pipe-repair".to_string(),
        urgency: Urgency::Asap,
        location: Location {
            governorate: "Cairo".to_string(),
            city: "Nasr City".to_string(),
        },
        budget: Some(Budget {
            min: 150.0,
            max: 1000.0,
        }),
    }
}

#[test]
fn test_exact_match_scores_near_one() {
    let engine = MatchingEngine::with_default_criteria();
    let provider = create_test_provider("perfect", "Cairo", "Nasr City");

    let outcome = engine
        .match_providers(&create_test_request(), vec![provider], None, 10)
        .unwrap();

    assert_eq!(outcome.results.len(), 1);
    let result = &outcome.results[0];

    // Every dimension at or near its ceiling
    assert_eq!(result.scores.location, 1.0);
    assert!((result.scores.skills - 1.0).abs() < 1e-9);
    assert_eq!(result.scores.rating, 1.0);
    assert!((result.scores.availability - 1.0).abs() < 1e-9);
    assert_eq!(result.scores.responsiveness, 1.0);
    assert_eq!(result.scores.verification, 1.0);
    assert!((result.scores.completion - 0.98).abs() < 1e-9);

    assert!(result.total_score > 0.99, "Expected near-perfect total, got {}", result.total_score);
    assert!(result.total_score <= 1.0);

    // Reason cap fills from the head of the priority order
    assert_eq!(
        result.match_reasons,
        vec![
            MatchReason::LocationMatch,
            MatchReason::SkillMatch,
            MatchReason::RatingHigh,
        ]
    );
}

#[test]
fn test_end_to_end_ranking_invariants() {
    let engine = MatchingEngine::with_default_criteria();
    let request = create_test_request();

    let mut same_gov = create_test_provider("same-gov", "Cairo", "Heliopolis");
    same_gov.rating = 4.2;

    let mut remote = create_test_provider("remote", "Luxor", "Luxor");
    remote.rating = 3.8;
    remote.verification_level = VerificationLevel::Skill;

    let mut wrong_trade = create_test_provider("wrong-trade", "Cairo", "Nasr City");
    wrong_trade.skills = vec![ProviderSkill {
        category: "electrical".to_string(),
        subcategory: "wiring".to_string(),
        verified: true,
        years_of_experience: 20.0,
    }];

    let providers = vec![
        create_test_provider("exact", "Cairo", "Nasr City"),
        same_gov,
        remote,
        wrong_trade,
    ];
    let pool_size = providers.len();

    let outcome = engine
        .match_providers(&request, providers, None, 3)
        .unwrap();

    // Bounded cardinality
    assert!(outcome.results.len() <= 3);
    assert!(outcome.results.len() <= pool_size);
    assert_eq!(outcome.total_candidates, pool_size);

    // Threshold and sort invariants
    for result in &outcome.results {
        assert!(result.total_score >= MIN_ACCEPTANCE_SCORE);
    }
    for pair in outcome.results.windows(2) {
        assert!(pair[0].total_score >= pair[1].total_score);
    }

    // The full match on both city and trade leads
    assert_eq!(outcome.results[0].provider.provider_id, "exact");
}

#[test]
fn test_no_skill_match_zeroes_skills_dimension() {
    let engine = MatchingEngine::with_default_criteria();

    // Unrelated trade: experience and verification on it must not leak in
    let mut electrician = create_test_provider("electrician", "Cairo", "Nasr City");
    electrician.skills = vec![ProviderSkill {
        category: "electrical".to_string(),
        subcategory: "wiring".to_string(),
        verified: true,
        years_of_experience: 25.0,
    }];

    let outcome = engine
        .match_providers(&create_test_request(), vec![electrician], None, 10)
        .unwrap();

    assert_eq!(outcome.results[0].scores.skills, 0.0);
}

#[test]
fn test_empty_pool_is_not_an_error() {
    let engine = MatchingEngine::with_default_criteria();

    let outcome = engine
        .match_providers(&create_test_request(), vec![], None, 10)
        .unwrap();

    assert!(outcome.results.is_empty());
}

#[test]
fn test_request_without_category_degrades_gracefully() {
    let engine = MatchingEngine::with_default_criteria();
    let mut request = create_test_request();
    request.category = String::new();
    request.subcategory = String::new();

    let outcome = engine
        .match_providers(&request, vec![create_test_provider("p", "Cairo", "Nasr City")], None, 10)
        .unwrap();

    // Still ranked on the other six dimensions
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].scores.skills, 0.0);
}

#[test]
fn test_weight_sensitivity_location_only() {
    let engine = MatchingEngine::with_default_criteria();

    // Far better on every non-location dimension
    let strong_far = create_test_provider("strong-far", "Aswan", "Aswan");

    let mut weak_near = create_test_provider("weak-near", "Cairo", "Nasr City");
    weak_near.rating = 2.0;
    weak_near.review_count = 2;
    weak_near.skills = vec![];
    weak_near.verification_level = VerificationLevel::None;
    weak_near.is_top_rated = false;
    weak_near.completion_rate = 40.0;

    let location_only = CriteriaOverrides {
        location: Some(1.0),
        skills: Some(0.0),
        rating: Some(0.0),
        availability: Some(0.0),
        responsiveness: Some(0.0),
        verification: Some(0.0),
        completion: Some(0.0),
    };

    let outcome = engine
        .match_providers(
            &create_test_request(),
            vec![strong_far, weak_near],
            Some(location_only),
            10,
        )
        .unwrap();

    assert_eq!(outcome.results[0].provider.provider_id, "weak-near");
    assert!((outcome.results[0].total_score - 1.0).abs() < 1e-9);
}

#[test]
fn test_repeated_runs_are_identical() {
    let engine = MatchingEngine::with_default_criteria();
    let request = create_test_request();

    let pool = || {
        vec![
            create_test_provider("a", "Cairo", "Nasr City"),
            create_test_provider("b", "Cairo", "Heliopolis"),
            create_test_provider("c", "Giza", "Dokki"),
        ]
    };

    let first = engine.match_providers(&request, pool(), None, 10).unwrap();
    let second = engine.match_providers(&request, pool(), None, 10).unwrap();

    let first_json = serde_json::to_string(&first.results).unwrap();
    let second_json = serde_json::to_string(&second.results).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_provider_decodes_from_frontend_json() {
    let raw = r#"{
        "providerId": "p-77",
        "name": "Hassan El-Sayed",
        "rating": 4.6,
        "reviewCount": 32,
        "completedJobs": 54,
        "isVerified": true,
        "isTopRated": false,
        "averageResponseTimeMinutes": 50,
        "skills": [
            {
                "category": "plumbing",
                "subcategory": "pipe-repair",
                "verified": true,
                "yearsOfExperience": 7.0
            }
        ],
        "location": { "governorate": "Cairo", "city": "Nasr City" },
        "pricingRange": { "min": 200.0, "max": 800.0 },
        "availability": {
            "isAvailable": true,
            "availableDays": ["saturday", "sunday", "monday", "tuesday", "wednesday"],
            "availableHours": { "start": "09:00:00", "end": "17:00:00" }
        },
        "verificationLevel": "approved",
        "completionRate": 92.5
    }"#;

    let provider: Provider = serde_json::from_str(raw).unwrap();
    assert_eq!(provider.verification_level, VerificationLevel::Approved);
    assert_eq!(provider.availability.available_days.len(), 5);

    let engine = MatchingEngine::with_default_criteria();
    let outcome = engine
        .match_providers(&create_test_request(), vec![provider], None, 10)
        .unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].provider.provider_id, "p-77");
}
