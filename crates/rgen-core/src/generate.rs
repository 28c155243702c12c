//! Bounded enumeration of strings matching a pattern.
//!
//! Expansion is a bottom-up fold over the tree. Every node yields an ordered
//! prefix of its language:
//!
//! - a literal yields its character;
//! - an alternation yields the left child's strings, then the right child's;
//! - a concatenation yields the cross product of its children, earlier
//!   children varying slowest;
//! - a repetition yields the empty string when zero repeats are allowed, then
//!   every `count`-fold product of the child's strings for `count` from
//!   `max(min, 1)` up to the effective upper bound, in ascending order.
//!
//! The effective upper bound is `repetition_limit` for unbounded repeats and
//! `min(max, repetition_limit)` otherwise, so a repetition whose minimum is
//! above the limit yields nothing.
//!
//! Every intermediate sequence is cut at `max_combinations` while it is
//! built. Each construct only appends in generation order, so the first
//! `max_combinations` strings are the same as those of the untruncated
//! expansion.

use log::{debug, trace};
use rgen_syntax::{Bounds, Node, SyntaxError, parse_pattern};

use crate::settings::GenSettings;

/// Parse `pattern` and enumerate up to `settings.max_combinations` matching
/// strings. Syntax errors are passed through unchanged.
pub fn generate(pattern: &str, settings: &GenSettings) -> Result<Vec<String>, SyntaxError> {
    let root = parse_pattern(pattern)?;
    let out = expand(&root, settings);
    debug!("generated {} samples for {:?}", out.len(), pattern);
    Ok(out)
}

/// Enumerate up to `settings.max_combinations` strings matching `node`.
pub fn expand(node: &Node, settings: &GenSettings) -> Vec<String> {
    Expander {
        repetition_limit: settings.repetition_limit,
        cap: settings.max_combinations,
    }
    .expand(node)
}

struct Expander {
    repetition_limit: usize,
    cap: usize,
}

impl Expander {
    fn expand(&self, node: &Node) -> Vec<String> {
        if self.cap == 0 {
            return Vec::new();
        }

        match node {
            Node::Literal(c) => vec![c.to_string()],

            Node::Alternation(pair) => {
                let [left, right] = &**pair;
                let mut out = self.expand(left);
                if out.len() < self.cap {
                    let room = self.cap - out.len();
                    out.extend(self.expand(right).into_iter().take(room));
                }
                out
            }

            Node::Concatenation(children) => {
                let mut acc = vec![String::new()];
                for child in children {
                    acc = self.product(&acc, &self.expand(child));
                    if acc.is_empty() {
                        break;
                    }
                }
                acc
            }

            Node::Repetition { child, bounds } => self.repeat(child, *bounds),
        }
    }

    fn repeat(&self, child: &Node, bounds: Bounds) -> Vec<String> {
        let base = self.expand(child);
        let min = bounds.min as usize;
        let upper = match bounds.max {
            None => self.repetition_limit,
            Some(max) => (max as usize).min(self.repetition_limit),
        };

        let mut out = Vec::new();
        if min == 0 {
            out.push(String::new());
        }

        // base^count, built as base^(count-1) x base
        let mut power = vec![String::new()];
        for count in 1..=upper {
            if out.len() >= self.cap || base.is_empty() {
                break;
            }
            power = self.product(&power, &base);
            if count >= min {
                let room = self.cap - out.len();
                out.extend(power.iter().take(room).cloned());
            }
        }

        trace!(
            "repetition {bounds} (base {}, upper {upper}) -> {} samples",
            base.len(),
            out.len()
        );
        out
    }

    /// `prefix + suffix` for every pair, prefixes in the outer loop.
    fn product(&self, prefixes: &[String], suffixes: &[String]) -> Vec<String> {
        let size = prefixes.len().saturating_mul(suffixes.len()).min(self.cap);
        let mut out = Vec::with_capacity(size);

        for prefix in prefixes {
            for suffix in suffixes {
                if out.len() == self.cap {
                    return out;
                }
                let mut joined = String::with_capacity(prefix.len() + suffix.len());
                joined.push_str(prefix);
                joined.push_str(suffix);
                out.push(joined);
            }
        }

        out
    }
}
