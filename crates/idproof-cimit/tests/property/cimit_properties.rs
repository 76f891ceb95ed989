use idproof_cimit::{CiConfigMap, CiMitEngine};
use idproof_core::models::{ContraIndicator, ContraIndicatorConfig};
use proptest::prelude::*;

fn arb_signals() -> impl Strategy<Value = (Vec<ContraIndicator>, CiConfigMap)> {
    // Codes drawn from a small pool so signals share configuration.
    proptest::collection::vec((0usize..5, 1u32..=5, 0u32..=2, any::<bool>()), 0..8).prop_map(
        |entries| {
            let mut config = CiConfigMap::new();
            let mut signals = Vec::new();
            for (idx, detected, checked, mitigated) in entries {
                let code = format!("X{idx:02}");
                // First entry for a code wins; later duplicates reuse it.
                config
                    .entry(code.clone())
                    .or_insert_with(|| ContraIndicatorConfig {
                        code: code.clone(),
                        detected_score: detected,
                        checked_score: checked.min(detected),
                        return_code: None,
                    });
                signals.push(ContraIndicator {
                    code,
                    issuer: "https://cimit.example".to_string(),
                    issued_at: chrono::Utc::now(),
                    document: None,
                    mitigations: if mitigated { vec!["M01".to_string()] } else { vec![] },
                });
            }
            (signals, config)
        },
    )
}

proptest! {
    // Adding a signal with a positive detected score never lowers the total.
    #[test]
    fn scoring_is_monotonic((signals, mut config) in arb_signals(), extra_detected in 1u32..=5) {
        let engine = CiMitEngine::new();
        let base = engine.score(&signals, &config).unwrap();

        let code = "NEW".to_string();
        config.insert(code.clone(), ContraIndicatorConfig {
            code: code.clone(),
            detected_score: extra_detected,
            checked_score: 0,
            return_code: None,
        });
        let mut bigger = signals;
        bigger.push(ContraIndicator {
            code,
            issuer: "https://cimit.example".to_string(),
            issued_at: chrono::Utc::now(),
            document: None,
            mitigations: vec![],
        });

        let grown = engine.score(&bigger, &config).unwrap();
        prop_assert!(grown >= base);
        prop_assert_eq!(grown, base + extra_detected);
    }

    // A breach verdict never flips to non-breach by adding signals.
    #[test]
    fn breach_is_monotonic((signals, mut config) in arb_signals(), threshold in 0u32..10, extra_detected in 1u32..=5) {
        let engine = CiMitEngine::new();
        let before = engine.is_breaching_threshold(&signals, &config, threshold).unwrap();

        let code = "NEW".to_string();
        config.insert(code.clone(), ContraIndicatorConfig {
            code: code.clone(),
            detected_score: extra_detected,
            checked_score: 0,
            return_code: None,
        });
        let mut bigger = signals;
        bigger.push(ContraIndicator {
            code,
            issuer: "https://cimit.example".to_string(),
            issued_at: chrono::Utc::now(),
            document: None,
            mitigations: vec![],
        });
        let after = engine.is_breaching_threshold(&bigger, &config, threshold).unwrap();
        prop_assert!(!before || after);
    }

    // Mitigating one signal never increases the hypothetical total.
    #[test]
    fn solo_mitigation_never_raises_the_score((signals, config) in arb_signals(), threshold in 0u32..10) {
        let engine = CiMitEngine::new();
        for target in &signals {
            let breaching = engine
                .is_breaching_threshold(&signals, &config, threshold)
                .unwrap();
            let if_mitigated = engine
                .is_breaching_threshold_if_mitigated(target, &signals, &config, threshold)
                .unwrap();
            // checked <= detected by construction, so mitigation can only
            // keep or clear a breach, never introduce one.
            prop_assert!(!(if_mitigated && !breaching));
        }
    }
}
