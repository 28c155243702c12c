mod error;
mod generate;
mod patterns;
mod report;
mod settings;
mod validate;

pub use error::Error;
pub use generate::{expand, generate};
pub use patterns::{load_patterns, parse_pattern_list};
pub use report::SampleReport;
pub use settings::GenSettings;
pub use validate::{compile_anchored, host_regex, rejected_samples};

use log::warn;
use rgen_syntax::parse_pattern;

/// Parse `pattern`, enumerate samples and check each one against the host
/// regex engine.
pub fn sample_pattern(pattern: &str, settings: &GenSettings) -> Result<SampleReport, Error> {
    let tree = parse_pattern(pattern)?;
    let samples = expand(&tree, settings);
    let host = compile_anchored(&tree)?;
    let rejected = rejected_samples(&host, &samples);

    if !rejected.is_empty() {
        warn!(
            "{} of {} samples for {:?} rejected by {}",
            rejected.len(),
            samples.len(),
            pattern,
            host.as_str()
        );
    }

    Ok(SampleReport::new(pattern, tree, samples, rejected))
}
