use rgen_syntax::Node;

/// Outcome of sampling one pattern: its tree, the generated strings and the
/// strings the host regex engine refused.
#[derive(Debug, Clone)]
pub struct SampleReport {
    pattern: String,
    tree: Node,
    samples: Vec<String>,
    rejected: Vec<String>,
}

impl SampleReport {
    pub fn new(
        pattern: impl Into<String>,
        tree: Node,
        samples: Vec<String>,
        rejected: Vec<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            tree,
            samples,
            rejected,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Every sample matched the pattern under the host engine.
    pub fn all_valid(&self) -> bool {
        self.rejected.is_empty()
    }
}
