/// Knobs for sample generation.
///
/// Both limits trade completeness for size: a higher `repetition_limit`
/// grows output exponentially for nested or concatenated repetitions, and
/// `max_combinations` caps every intermediate sequence as well as the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenSettings {
    /// Upper repeat count substituted for `*`, `+` and `{n,}`, and the
    /// ceiling applied to explicit `{n,m}` maxima.
    pub repetition_limit: usize,

    /// Maximum number of strings returned, first-N in generation order.
    pub max_combinations: usize,
}

impl GenSettings {
    pub const DEFAULT_REPETITION_LIMIT: usize = 5;
    pub const DEFAULT_MAX_COMBINATIONS: usize = 40;

    pub fn new(repetition_limit: usize, max_combinations: usize) -> Self {
        Self {
            repetition_limit,
            max_combinations,
        }
    }
}

impl Default for GenSettings {
    fn default() -> Self {
        Self {
            repetition_limit: Self::DEFAULT_REPETITION_LIMIT,
            max_combinations: Self::DEFAULT_MAX_COMBINATIONS,
        }
    }
}
