use like_gate::{
    Confidence, ParsedCount, SkipDecision, SkipOptions, ThresholdConfig, decide, resolve_count,
    should_skip,
};
use proptest::prelude::*;

fn group_thousands(
    n: u64,
    sep: char,
) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

proptest! {
    #[test]
    fn comparator_is_monotonic(value in any::<u64>(), threshold in any::<u64>()) {
        let parsed = ParsedCount { value, confidence: Confidence::Exact };
        let config = ThresholdConfig::new(threshold);
        prop_assert_eq!(should_skip(&parsed, &config), threshold > value);
    }

    #[test]
    fn confidence_does_not_change_comparison(value in any::<u64>(), threshold in any::<u64>()) {
        let exact = ParsedCount { value, confidence: Confidence::Exact };
        let unmatched = ParsedCount { value, confidence: Confidence::Unmatched };
        let config = ThresholdConfig::new(threshold);
        prop_assert_eq!(should_skip(&exact, &config), should_skip(&unmatched, &config));
    }

    #[test]
    fn grouped_integers_resolve_exactly(
        n in 0u64..1_000_000_000_000,
        sep in prop::sample::select(vec![',', '.', ' ', '\u{00A0}']),
    ) {
        let raw = group_thousands(n, sep);
        let parsed = resolve_count(&raw).unwrap();
        prop_assert_eq!(parsed.value, n);
        prop_assert_eq!(parsed.confidence, Confidence::Exact);
    }

    #[test]
    fn thousands_keep_every_fraction_digit(whole in 0u64..1_000, frac in 0u64..1_000) {
        let raw = format!("{whole}.{frac:03}k");
        prop_assert_eq!(resolve_count(&raw).unwrap().value, whole * 1_000 + frac);
    }

    #[test]
    fn resolution_is_idempotent(raw in "\\PC{0,12}") {
        prop_assert_eq!(resolve_count(&raw), resolve_count(&raw));
    }

    #[test]
    fn malformed_never_skips(raw in "[a-zA-Z ]{0,10}", threshold in any::<u64>()) {
        let options = SkipOptions { enabled: true, threshold: ThresholdConfig::new(threshold) };
        let decision = decide(&raw, &options);
        prop_assert_eq!(decision, SkipDecision::Undetermined);
        prop_assert!(!decision.is_skip());
    }
}
