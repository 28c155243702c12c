mod args;
mod logger;
mod render;

use crate::args::Cli;
use clap::Parser;
use rgen_core::{Error, SampleReport, load_patterns, sample_pattern};
use std::process::ExitCode;

/// Patterns sampled when none are given on the command line.
const SAMPLE_PATTERNS: [&str; 3] = [
    "(a|b)(c|d)E+G?",
    "P(Q|R|S)T(UV|W|X)*Z+",
    "1(0|1)*2(3|4){5}36",
];

/// One pattern and what sampling it produced.
pub struct Outcome {
    pub pattern: String,
    pub result: Result<SampleReport, Error>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbosity);

    let patterns = resolve_patterns(&cli).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });

    let settings = cli.settings();
    log::info!(
        "sampling {} patterns (repetition_limit={}, max_combinations={})",
        patterns.len(),
        settings.repetition_limit,
        settings.max_combinations
    );

    let outcomes: Vec<Outcome> = patterns
        .into_iter()
        .map(|pattern| {
            let result = sample_pattern(&pattern, &settings);
            Outcome { pattern, result }
        })
        .collect();

    let out = render::render(
        &outcomes,
        &settings,
        cli.format,
        cli.verbosity,
        cli.quiet,
        !cli.no_tree,
    );
    print!("{out}");

    ExitCode::from(exit_code(&outcomes))
}

/// Priority:
///   1) positional patterns, then patterns from --file
///   2) the built-in samples when neither is given
fn resolve_patterns(cli: &Cli) -> Result<Vec<String>, Error> {
    let mut patterns = cli.patterns.clone();
    if let Some(path) = &cli.file {
        patterns.extend(load_patterns(path)?);
    }
    if patterns.is_empty() && cli.file.is_none() {
        patterns = SAMPLE_PATTERNS.iter().map(|p| p.to_string()).collect();
    }
    Ok(patterns)
}

/// 2 if any pattern failed to parse or compile, 1 if the host regex rejected
/// a sample, 0 otherwise.
fn exit_code(outcomes: &[Outcome]) -> u8 {
    if outcomes.iter().any(|o| o.result.is_err()) {
        return 2;
    }
    let all_valid = outcomes
        .iter()
        .all(|o| o.result.as_ref().is_ok_and(SampleReport::all_valid));
    if all_valid { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builtin_samples_when_nothing_given() {
        let cli = Cli::try_parse_from(["rgen"]).unwrap();
        assert_eq!(resolve_patterns(&cli).unwrap(), SAMPLE_PATTERNS);
    }

    #[test]
    fn positional_then_file_patterns() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("patterns.txt");
        fs::write(&path, "# more\nb+\n").unwrap();

        let cli = Cli::try_parse_from([
            "rgen",
            "a?",
            "--file",
            path.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(resolve_patterns(&cli).unwrap(), vec!["a?", "b+"]);
    }

    #[test]
    fn empty_file_does_not_fall_back_to_samples() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.txt");
        fs::write(&path, "# nothing here\n").unwrap();

        let cli = Cli::try_parse_from(["rgen", "--file", path.to_str().unwrap()]).unwrap();
        assert!(resolve_patterns(&cli).unwrap().is_empty());
    }

    #[test]
    fn syntax_error_exits_with_two() {
        let outcomes = vec![Outcome {
            pattern: "a)".into(),
            result: sample_pattern("a)", &Default::default()),
        }];
        assert_eq!(exit_code(&outcomes), 2);
    }

    #[test]
    fn valid_samples_exit_with_zero() {
        let outcomes: Vec<Outcome> = SAMPLE_PATTERNS
            .iter()
            .map(|p| Outcome {
                pattern: p.to_string(),
                result: sample_pattern(p, &Default::default()),
            })
            .collect();
        assert_eq!(exit_code(&outcomes), 0);
    }
}
