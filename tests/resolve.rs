use like_gate::{Confidence, CountError, MagnitudeTable, resolve_count, resolve_count_with};

#[test]
fn localized_counts_resolve() {
    let cases = [
        ("1.2K", 1_200),
        ("1,2 k", 1_200),
        ("3 万", 30_000),
        ("12萬", 120_000),
        ("2,5 mln", 2_500_000),
        ("1 lakh", 100_000),
        ("2.3 crore", 23_000_000),
        ("1,5 mil", 1_500),
        ("4,2 Mio.", 4_200_000),
        ("7 Tsd.", 7_000),
        ("1,1 млн", 1_100_000),
        ("3,4 тыс.", 3_400),
        ("2 億", 200_000_000),
        ("1.5억", 150_000_000),
        ("9.9만", 99_000),
        ("1,2 milyon", 1_200_000),
        ("12 bin", 12_000),
        ("1,2 triệu", 1_200_000),
        ("5,6 nghìn", 5_600),
        ("1.2 ล้าน", 1_200_000),
        ("3 พันล้าน", 3_000_000_000),
        ("4,5 χιλ.", 4_500),
        ("1,3 mn", 1_300_000),
        ("8 t", 8_000),
        ("١٫٢ ألف", 1_200),
        ("2 مليون", 2_000_000),
    ];
    for (raw, expected) in cases {
        let parsed = resolve_count(raw).unwrap_or_else(|e| panic!("{raw:?}: {e}"));
        assert_eq!(parsed.value, expected, "{raw:?}");
        assert_eq!(parsed.confidence, Confidence::Exact, "{raw:?}");
    }
}

#[test]
fn hindi_tokens_resolve_in_both_nukta_forms() {
    assert_eq!(resolve_count("2 \u{0932}\u{093E}\u{0916}").unwrap().value, 200_000);
    let combining = "\u{0967} \u{0915}\u{0930}\u{094B}\u{0921}\u{093C}";
    let precomposed = "\u{0967} \u{0915}\u{0930}\u{094B}\u{095C}";
    assert_eq!(resolve_count(combining).unwrap().value, 10_000_000);
    assert_eq!(resolve_count(precomposed).unwrap().value, 10_000_000);
}

#[test]
fn bare_numbers_keep_grouping() {
    assert_eq!(resolve_count("42").unwrap().value, 42);
    assert_eq!(resolve_count("1,234").unwrap().value, 1_234);
    assert_eq!(resolve_count("1.234.567").unwrap().value, 1_234_567);
    assert_eq!(resolve_count("1 234").unwrap().value, 1_234);
}

#[test]
fn flooring_never_rounds_up() {
    assert_eq!(resolve_count("1.999k").unwrap().value, 1_999);
    assert_eq!(resolve_count("1,99999 k").unwrap().value, 1_999);
    assert_eq!(resolve_count("2,5").unwrap().value, 2);
}

#[test]
fn lone_separator_is_decimal_only_before_a_known_unit() {
    assert_eq!(resolve_count("1.999k").unwrap().value, 1_999);
    for raw in ["1,234 likes", "1.234 Aufrufe"] {
        let parsed = resolve_count(raw).unwrap();
        assert_eq!(parsed.value, 1_234, "{raw:?}");
        assert_eq!(parsed.confidence, Confidence::Unmatched, "{raw:?}");
    }
}

#[test]
fn long_fractions_floor_without_overflow() {
    let tiny = format!("0.{}1k", "0".repeat(40));
    let whole = format!("1.{}k", "0".repeat(40));
    assert_eq!(resolve_count(&tiny).unwrap().value, 0);
    assert_eq!(resolve_count(&whole).unwrap().value, 1_000);
    assert_eq!(resolve_count(&format!("2,{}", "9".repeat(50))).unwrap().value, 2);
}

#[test]
fn greek_word_final_sigma_matches() {
    let parsed = resolve_count("2 ΔΙΣ").unwrap();
    assert_eq!(parsed.value, 2_000_000_000);
    assert_eq!(parsed.confidence, Confidence::Exact);
}

#[test]
fn longer_token_beats_its_prefix() {
    let table = MagnitudeTable::from_entries([("q", 1_000), ("qrs", 1_000_000)]).unwrap();
    let parsed = resolve_count_with(&table, "2qrs").unwrap();
    assert_eq!(parsed.value, 2_000_000);
    assert_eq!(parsed.confidence, Confidence::Exact);
}

#[test]
fn unknown_unit_is_low_confidence() {
    let parsed = resolve_count("5 unknownunit").unwrap();
    assert_eq!(parsed.value, 5);
    assert_eq!(parsed.confidence, Confidence::Unmatched);
}

#[test]
fn empty_table_marks_every_unit_unmatched() {
    let table = MagnitudeTable::from_entries(Vec::<(String, u64)>::new()).unwrap();
    assert!(table.is_empty());
    let parsed = resolve_count_with(&table, "1.5k").unwrap();
    assert_eq!(parsed.value, 1);
    assert_eq!(parsed.confidence, Confidence::Unmatched);
}

#[test]
fn malformed_input_is_an_error() {
    for raw in ["abc", "", "K", "Like"] {
        let err = resolve_count(raw).unwrap_err();
        assert!(matches!(err, CountError::MalformedCount { .. }), "{raw:?}");
        assert!(err.to_string().contains("malformed"));
    }
}
