use maldet_core::Label;
use maldet_scoring::{explain_url_with, score_url_with, WeightTable};
use proptest::prelude::*;

fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,80}",
        "(https?://)?[a-z0-9.-]{1,30}(/[a-zA-Z0-9@._-]{0,10}){0,4}(\\?[a-z0-9=&]{0,20})?",
        (0u32..300, 0u32..300, 0u32..300, 0u32..300)
            .prop_map(|(a, b, c, d)| format!("http://{a}.{b}.{c}.{d}/x")),
    ]
}

fn weights_strategy() -> impl Strategy<Value = WeightTable> {
    prop::collection::btree_map(
        prop::sample::select(vec![
            "len_url",
            "count_dots",
            "has_ip_host",
            "has_at",
            "path_depth",
            "sld_len",
            "nonexistent_feature",
        ]),
        -10.0f64..10.0,
        0..7,
    )
    .prop_map(|m| {
        m.into_iter()
            .fold(WeightTable::empty(), |t, (k, v)| t.with_weight(k, v))
    })
}

proptest! {
    #[test]
    fn score_is_sum_of_contributions(url in url_strategy(), weights in weights_strategy(), threshold in -5.0f64..5.0) {
        let ex = explain_url_with(&url, threshold, &weights);
        let sum: f64 = ex.contributions.values().sum();
        prop_assert_eq!(ex.score, sum);
        prop_assert_eq!(score_url_with(&url, &weights), ex.score);
    }

    #[test]
    fn label_follows_threshold(url in url_strategy(), threshold in -5.0f64..20.0) {
        let ex = explain_url_with(&url, threshold, WeightTable::default_table());
        let expected = if ex.score >= threshold { Label::Malicious } else { Label::Benign };
        prop_assert_eq!(ex.label, expected);
        prop_assert_eq!(ex.threshold, threshold);
    }

    #[test]
    fn explain_is_idempotent(url in url_strategy()) {
        let a = serde_json::to_string(&explain_url_with(&url, 2.5, WeightTable::default_table())).unwrap();
        let b = serde_json::to_string(&explain_url_with(&url, 2.5, WeightTable::default_table())).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn unknown_weight_keys_are_ignored(url in url_strategy(), bogus in -1000.0f64..1000.0) {
        let base = WeightTable::static_defaults();
        let with_bogus = base.clone().with_weight("nonexistent_feature", bogus);
        prop_assert_eq!(score_url_with(&url, &base), score_url_with(&url, &with_bogus));
    }

    #[test]
    fn flag_contributions_are_zero_or_weight(url in url_strategy()) {
        let weights = WeightTable::default_table();
        let ex = explain_url_with(&url, 2.5, weights);
        for name in ["has_ip_host", "has_at", "has_login", "has_verify", "has_secure", "has_hex_path"] {
            let w = weights.get(name).unwrap();
            let c = ex.contributions[name];
            prop_assert!(c == 0.0 || c == w, "{} contributed {}", name, c);
        }
    }
}
