use rgen_core::{GenSettings, generate, sample_pattern};

#[test]
fn golden_first_sample_pattern() {
    let report = sample_pattern("(a|b)(c|d)E+G?", &GenSettings::default()).unwrap();

    let samples = report.samples();
    assert_eq!(samples.len(), 40);
    assert_eq!(&samples[..4], ["acE", "acEG", "acEE", "acEEG"]);
    assert_eq!(samples[39], "bdEEEEEG");
    assert!(report.all_valid(), "rejected: {:?}", report.rejected());
}

#[test]
fn golden_second_sample_pattern() {
    let report = sample_pattern("P(Q|R|S)T(UV|W|X)*Z+", &GenSettings::default()).unwrap();

    let samples = report.samples();
    assert_eq!(samples.len(), 40);
    assert_eq!(
        &samples[..6],
        ["PQTZ", "PQTZZ", "PQTZZZ", "PQTZZZZ", "PQTZZZZZ", "PQTUVZ"]
    );
    assert!(samples.iter().all(|s| s.starts_with("PQT")));
    assert_eq!(samples[39], "PQTWUVZZZZZ");
    assert!(report.all_valid(), "rejected: {:?}", report.rejected());
}

#[test]
fn golden_third_sample_pattern() {
    let report = sample_pattern("1(0|1)*2(3|4){5}36", &GenSettings::default()).unwrap();

    let samples = report.samples();
    assert_eq!(samples.len(), 40);
    assert_eq!(samples[0], "123333336");
    assert_eq!(samples[1], "123333436");
    assert_eq!(samples[32], "1023333336");
    assert_eq!(samples[39], "1023344436");
    assert!(report.all_valid(), "rejected: {:?}", report.rejected());
}

#[test]
fn golden_report_keeps_pattern_and_tree() {
    let report = sample_pattern("a|b|c", &GenSettings::default()).unwrap();

    assert_eq!(report.pattern(), "a|b|c");
    assert_eq!(report.tree().size(), 5);
    assert_eq!(report.samples(), ["a", "b", "c"]);
}

#[test]
fn golden_generate_matches_report_samples() {
    let settings = GenSettings::new(3, 17);
    let pattern = "(x|yz)*w?";

    let report = sample_pattern(pattern, &settings).unwrap();
    assert_eq!(report.samples(), generate(pattern, &settings).unwrap());
}
