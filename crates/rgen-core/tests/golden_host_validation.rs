use rgen_core::{Error, GenSettings, compile_anchored, expand, generate, sample_pattern};
use rgen_syntax::{MAX_NESTING, SyntaxErrorKind, parse_pattern};

const PATTERNS: &[&str] = &[
    "a",
    "abc",
    "a|b|c",
    "(a|b)c",
    "a?",
    "a*",
    "a+",
    "a{3}",
    "a{2,3}",
    "a{0,2}b",
    "(ab|c){1,}",
    "((a|b)+c?){2}",
    "x(y|z{0})*w",
    "1(0|1)*2(3|4){5}36",
    "P(Q|R|S)T(UV|W|X)*Z+",
    "(a|b)(c|d)E+G?",
    "a.b^c$",
    "[x]\\y",
    "日本(語|人)+",
    "(((a)))*",
];

#[test]
fn golden_every_sample_matches_anchored_host_regex() {
    let settings_grid = [
        GenSettings::default(),
        GenSettings::new(1, 40),
        GenSettings::new(3, 200),
        GenSettings::new(8, 10),
    ];

    for pattern in PATTERNS {
        let tree = parse_pattern(pattern).unwrap();
        let host = compile_anchored(&tree).unwrap();

        for settings in &settings_grid {
            for sample in expand(&tree, settings) {
                assert!(
                    host.is_match(&sample),
                    "{sample:?} does not match {pattern:?} ({settings:?})"
                );
            }
        }
    }
}

#[test]
fn golden_output_never_exceeds_max_combinations() {
    for pattern in PATTERNS {
        let tree = parse_pattern(pattern).unwrap();
        for k in [0, 1, 2, 5, 13, 40] {
            let out = expand(&tree, &GenSettings::new(5, k));
            assert!(out.len() <= k, "{pattern:?} gave {} > {k}", out.len());
        }
    }
}

#[test]
fn golden_star_respects_repetition_limit() {
    let tree = parse_pattern("a*").unwrap();

    for limit in 0..8 {
        let out = expand(&tree, &GenSettings::new(limit, 1_000));
        assert_eq!(out.len(), limit + 1);
        assert!(out.iter().all(|s| s.chars().count() <= limit));
    }
}

#[test]
fn golden_star_on_multi_character_base_respects_limit() {
    let tree = parse_pattern("(ab|c)+").unwrap();
    let out = expand(&tree, &GenSettings::new(5, usize::MAX));

    // 2 + 4 + 8 + 16 + 32 choices for one through five repeats
    assert_eq!(out.len(), 62);
    assert!(out.iter().all(|s| s.len() <= 10));
    assert_eq!(out.last().map(String::as_str), Some("ccccc"));
}

#[test]
fn golden_deepest_nesting_compiles_and_validates() {
    let groups = format!("{}a{}", "(".repeat(MAX_NESTING), ")*".repeat(MAX_NESTING));
    let sequences = format!("{}a{}", "(".repeat(MAX_NESTING), "b)*".repeat(MAX_NESTING));
    let alternatives = format!("{}b", "a|".repeat(MAX_NESTING));

    for pattern in [groups, sequences, alternatives] {
        let report = sample_pattern(&pattern, &GenSettings::default()).unwrap();
        assert!(!report.samples().is_empty());
        assert!(report.all_valid(), "rejected {:?}", report.rejected());
    }
}

#[test]
fn golden_too_deep_patterns_are_syntax_errors() {
    let groups = format!("{}a{}", "(".repeat(2_000), ")".repeat(2_000));
    let alternatives = format!("{}a", "a|".repeat(20_000));

    for pattern in [groups, alternatives] {
        let err = generate(&pattern, &GenSettings::default()).unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::NestingTooDeep);

        match sample_pattern(&pattern, &GenSettings::default()) {
            Err(Error::Syntax(e)) => assert_eq!(e.kind, SyntaxErrorKind::NestingTooDeep),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }
}
