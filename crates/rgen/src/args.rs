use clap::{Parser, ValueEnum};
use rgen_core::GenSettings;
use std::path::PathBuf;

/// rgen: print bounded samples of strings matching restricted regular expressions.
#[derive(Debug, Parser)]
#[command(name = "rgen")]
#[command(about = "Enumerate sample strings matching restricted regular expressions", long_about = None)]
pub struct Cli {
    /// Patterns to sample (defaults to the built-in sample patterns)
    pub patterns: Vec<String>,

    /// Read additional patterns from a file, one per line ('#' starts a comment)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Repeat count substituted for `*`, `+` and `{n,}`; also caps `{n,m}`
    #[arg(long, default_value_t = GenSettings::DEFAULT_REPETITION_LIMIT)]
    pub repetition_limit: usize,

    /// Maximum number of samples printed per pattern
    #[arg(long, default_value_t = GenSettings::DEFAULT_MAX_COMBINATIONS)]
    pub max_combinations: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Do not print the syntax tree
    #[arg(long)]
    pub no_tree: bool,

    /// Quiet output (print only samples)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    pub fn settings(&self) -> GenSettings {
        GenSettings::new(self.repetition_limit, self.max_combinations)
    }
}
