//! Scenario tests for GPG45 score building and profile matching.

use idproof_gpg45::evidence::parse_credentials;
use idproof_gpg45::{Evidence, Gpg45Evaluator, Gpg45Profile, Gpg45Scores};
use test_fixtures::builders::*;

fn medium_profile() -> Gpg45Profile {
    Gpg45Profile::new("medium", vec![Evidence::new(4, 2)], 1, 1, 2)
}

#[test]
fn passport_journey_satisfies_medium_profile() {
    // Passport (4,2) + address (nothing) + fraud (1, activity 1) + KBV (2).
    let items = vec![
        document_item(4, 2),
        fraud_item(1, 1),
        kbv_item(2),
    ];
    let evaluator = Gpg45Evaluator::new();
    let scores = evaluator.build_score(&items).unwrap();

    assert_eq!(
        scores,
        Gpg45Scores::new(vec![Evidence::new(4, 2)], 1, 1, 2)
    );
    assert!(evaluator.matches_profile(&scores, &medium_profile()));
}

#[test]
fn zero_activity_fraud_item_fails_activity_requirement() {
    let items = vec![document_item(4, 2), fraud_item(1, 0), kbv_item(2)];
    let evaluator = Gpg45Evaluator::new();
    let scores = evaluator.build_score(&items).unwrap();

    assert_eq!(scores.activity, 0);
    assert!(!evaluator.matches_profile(&scores, &medium_profile()));
}

#[test]
fn app_based_check_satisfies_m1b() {
    let items = vec![combined_item(3, 2, 1, 2), fraud_item(1, 0)];
    let evaluator = Gpg45Evaluator::new();
    let scores = evaluator.build_score(&items).unwrap();

    assert_eq!(
        scores,
        Gpg45Scores::new(vec![Evidence::new(3, 2)], 1, 1, 2)
    );
    assert!(!evaluator.matches_profile(&scores, &Gpg45Profile::m1a()));
    assert!(evaluator.matches_profile(&scores, &Gpg45Profile::m1b()));
}

#[test]
fn first_matching_profile_respects_caller_order() {
    let evaluator = Gpg45Evaluator::new();
    let scores = Gpg45Scores::new(vec![Evidence::new(4, 3)], 1, 1, 2);

    // Both M1A and M1B are satisfied; the caller's order decides.
    let profiles = [Gpg45Profile::m1b(), Gpg45Profile::m1a()];
    let matched = evaluator
        .first_matching_profile(&scores, &profiles)
        .unwrap();
    assert_eq!(matched.name, "M1B");

    let profiles = [Gpg45Profile::m1a(), Gpg45Profile::m1b()];
    let matched = evaluator
        .first_matching_profile(&scores, &profiles)
        .unwrap();
    assert_eq!(matched.name, "M1A");
}

#[test]
fn no_profile_matches_weak_scores() {
    let evaluator = Gpg45Evaluator::new();
    let scores = Gpg45Scores::new(vec![Evidence::new(2, 2)], 0, 1, 0);
    assert!(evaluator
        .first_matching_profile(&scores, &Gpg45Profile::accepted_medium())
        .is_none());
}

#[test]
fn failed_document_check_does_not_lend_strength() {
    // Strong failed passport plus weak passed document: the profile
    // requiring (4,2) must not match.
    let items = vec![document_item(4, 0), document_item(2, 2), fraud_item(1, 1), kbv_item(2)];
    let evaluator = Gpg45Evaluator::new();
    let scores = evaluator.build_score(&items).unwrap();
    assert!(!evaluator.matches_profile(&scores, &medium_profile()));
}

#[test]
fn credentials_parse_into_score() {
    let credentials = vec![
        document_credential("https://passport.example", 4, 2),
        serde_json::json!({
            "iss": "https://fraud.example",
            "vc": { "evidence": [{ "identityFraudScore": 1, "activityHistoryScore": 1 }] }
        }),
        serde_json::json!({
            "iss": "https://kbv.example",
            "vc": { "evidence": [{ "verificationScore": 2 }] }
        }),
    ];
    let items = parse_credentials(&credentials).unwrap();
    let scores = Gpg45Evaluator::new().build_score(&items).unwrap();
    assert_eq!(
        scores,
        Gpg45Scores::new(vec![Evidence::new(4, 2)], 1, 1, 2)
    );
}

#[test]
fn unknown_evidence_shape_aborts_scoring() {
    // Validity without strength maps to no scoring rule.
    let mut bad = document_item(0, 2);
    bad.strength = None;
    let err = Gpg45Evaluator::new()
        .build_score(&[document_item(4, 2), bad])
        .unwrap_err();
    assert!(matches!(
        err,
        idproof_core::errors::Gpg45Error::UnknownEvidenceType { .. }
    ));
}
