// Validation: converts a pattern tree to host `regex` syntax so generated
// samples can be checked against an independent engine.

use regex::{Regex, RegexBuilder};
use rgen_syntax::{MAX_NESTING, Node};

use crate::error::Error;

/// Render `node` in `regex` crate syntax.
///
/// Literals are escaped, so characters this grammar treats as plain text
/// (`.`, `^`, `$`, `[`, `\`) stay literal in the host pattern. Alternations and
/// repeated sub-patterns are wrapped in non-capturing groups.
pub fn host_regex(node: &Node) -> String {
    let mut pat = String::new();
    push_node(node, &mut pat);
    pat
}

fn push_node(node: &Node, pat: &mut String) {
    match node {
        Node::Literal(c) => pat.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        Node::Alternation(pair) => {
            pat.push_str("(?:");
            push_node(&pair[0], pat);
            pat.push('|');
            push_node(&pair[1], pat);
            pat.push(')');
        }
        Node::Concatenation(children) => {
            for child in children {
                push_node(child, pat);
            }
        }
        Node::Repetition { child, bounds } => {
            pat.push_str("(?:");
            push_node(child, pat);
            pat.push(')');
            match bounds.max {
                Some(max) => pat.push_str(&format!("{{{},{}}}", bounds.min, max)),
                None => pat.push_str(&format!("{{{},}}", bounds.min)),
            }
        }
    }
}

// One parser level renders as at most a group, a repetition, an alternation
// and a concatenation in the host syntax tree.
const HOST_NEST_LIMIT: u32 = (MAX_NESTING as u32 + 2) * 4;

/// Compile `node` as a full-string (`^...$`) host regex.
pub fn compile_anchored(node: &Node) -> Result<Regex, Error> {
    let pat = format!("^(?:{})$", host_regex(node));

    RegexBuilder::new(&pat)
        .nest_limit(HOST_NEST_LIMIT)
        .build()
        .map_err(|e| Error::Regex {
            pattern: pat.clone(),
            msg: e.to_string(),
        })
}

/// Samples the host regex does not accept, in input order.
pub fn rejected_samples(host: &Regex, samples: &[String]) -> Vec<String> {
    samples
        .iter()
        .filter(|s| !host.is_match(s))
        .cloned()
        .collect()
}
