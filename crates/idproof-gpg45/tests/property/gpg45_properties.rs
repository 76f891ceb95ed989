use idproof_core::models::EvidenceItem;
use idproof_gpg45::{Evidence, Gpg45Evaluator, Gpg45Profile};
use proptest::prelude::*;

fn arb_evidence_item() -> impl Strategy<Value = EvidenceItem> {
    prop_oneof![
        (0u32..=4, 0u32..=3).prop_map(|(s, v)| EvidenceItem {
            issuer: "https://document.example".to_string(),
            strength: Some(s),
            validity: Some(v),
            activity_history: None,
            identity_fraud: None,
            verification: None,
            ci: vec![],
        }),
        (0u32..=2, 0u32..=2).prop_map(|(f, a)| EvidenceItem {
            issuer: "https://fraud.example".to_string(),
            strength: None,
            validity: None,
            activity_history: Some(a),
            identity_fraud: Some(f),
            verification: None,
            ci: vec![],
        }),
        (0u32..=3).prop_map(|v| EvidenceItem {
            issuer: "https://kbv.example".to_string(),
            strength: None,
            validity: None,
            activity_history: None,
            identity_fraud: None,
            verification: Some(v),
            ci: vec![],
        }),
    ]
}

proptest! {
    // Permuting the evidence batch yields an identical score vector.
    #[test]
    fn scoring_is_order_invariant(
        items in proptest::collection::vec(arb_evidence_item(), 0..6).prop_shuffle()
    ) {
        let evaluator = Gpg45Evaluator::new();
        let forward = evaluator.build_score(&items).unwrap();

        let mut sorted_items = items.clone();
        sorted_items.sort_by_key(|i| i.issuer.clone());
        let sorted = evaluator.build_score(&sorted_items).unwrap();
        prop_assert_eq!(&forward, &sorted);

        let mut reversed_items = items;
        reversed_items.reverse();
        let reversed = evaluator.build_score(&reversed_items).unwrap();
        prop_assert_eq!(&sorted, &reversed);
    }

    // Uniformly strong paired evidence matches any profile at or below it.
    #[test]
    fn strong_paired_evidence_matches_weaker_profiles(
        strength in 1u32..=4,
        validity in 1u32..=3,
        req_strength in 0u32..=4,
        req_validity in 0u32..=3,
    ) {
        prop_assume!(req_strength <= strength && req_validity <= validity);
        let evaluator = Gpg45Evaluator::new();
        let items = vec![EvidenceItem {
            issuer: "https://document.example".to_string(),
            strength: Some(strength),
            validity: Some(validity),
            activity_history: None,
            identity_fraud: None,
            verification: None,
            ci: vec![],
        }];
        let scores = evaluator.build_score(&items).unwrap();
        let profile = Gpg45Profile::new(
            "at-or-below",
            vec![Evidence::new(req_strength, req_validity)],
            0,
            0,
            0,
        );
        prop_assert!(evaluator.matches_profile(&scores, &profile));
    }

    // Adding evidence never makes a previously matched profile unmatched.
    #[test]
    fn adding_evidence_is_monotonic_for_matching(
        items in proptest::collection::vec(arb_evidence_item(), 1..5),
        extra in arb_evidence_item(),
    ) {
        let evaluator = Gpg45Evaluator::new();
        let scores = evaluator.build_score(&items).unwrap();
        let profile = Gpg45Profile::m1b();

        if evaluator.matches_profile(&scores, &profile) {
            let mut more = items.clone();
            more.push(extra);
            let bigger = evaluator.build_score(&more).unwrap();
            prop_assert!(evaluator.matches_profile(&bigger, &profile));
        }
    }
}
