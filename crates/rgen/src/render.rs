use crate::Outcome;
use crate::args::OutputFormat;
use rgen_core::{Error, GenSettings};
use rgen_syntax::{Node, NodeKind};
use serde::Serialize;

// Core types stay free of serde; JSON goes through these helpers.
#[derive(Serialize)]
struct JsonOut<'a> {
    ok: bool,
    settings: JsonSettings,
    patterns: Vec<JsonPattern<'a>>,
}

#[derive(Serialize)]
struct JsonSettings {
    repetition_limit: usize,
    max_combinations: usize,
}

#[derive(Serialize)]
struct JsonPattern<'a> {
    pattern: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    samples: Vec<&'a str>,
    rejected: Vec<&'a str>,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<JsonNode>,
}

#[derive(Serialize)]
struct JsonNode {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<u32>,
    /// `null` for an unbounded repetition.
    #[serde(skip_serializing_if = "is_not_repetition")]
    max: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode>,
}

fn is_not_repetition(max: &Option<Option<u32>>) -> bool {
    max.is_none()
}

fn json_node(node: &Node) -> JsonNode {
    let bounds = node.bounds();
    JsonNode {
        kind: node.kind().to_string(),
        value: node.literal(),
        min: bounds.map(|b| b.min),
        max: bounds.map(|b| b.max),
        children: node.children().iter().map(json_node).collect(),
    }
}

pub fn render_json(outcomes: &[Outcome], settings: &GenSettings, with_tree: bool) -> String {
    let patterns: Vec<JsonPattern<'_>> = outcomes
        .iter()
        .map(|o| match &o.result {
            Ok(report) => JsonPattern {
                pattern: report.pattern(),
                ok: report.all_valid(),
                error: None,
                samples: report.samples().iter().map(String::as_str).collect(),
                rejected: report.rejected().iter().map(String::as_str).collect(),
                total: report.samples().len(),
                tree: with_tree.then(|| json_node(report.tree())),
            },
            Err(e) => JsonPattern {
                pattern: &o.pattern,
                ok: false,
                error: Some(e.to_string()),
                samples: Vec::new(),
                rejected: Vec::new(),
                total: 0,
                tree: None,
            },
        })
        .collect();

    let out = JsonOut {
        ok: patterns.iter().all(|p| p.ok),
        settings: JsonSettings {
            repetition_limit: settings.repetition_limit,
            max_combinations: settings.max_combinations,
        },
        patterns,
    };

    // if this fails, it’s a programmer error; still return something sane
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{\"ok\":false}".to_string())
}

/// Indented tree, two spaces per level.
pub fn render_tree(node: &Node, depth: usize, out: &mut String) {
    let indent = " ".repeat(depth * 2);

    match node.kind() {
        NodeKind::Literal => {
            let value = node.literal().unwrap_or_default();
            out.push_str(&format!("{indent}Literal: '{value}'\n"));
        }
        NodeKind::Repetition => match node.bounds() {
            Some(bounds) => out.push_str(&format!("{indent}Repetition ({bounds}):\n")),
            None => out.push_str(&format!("{indent}Repetition:\n")),
        },
        kind @ (NodeKind::Alternation | NodeKind::Concatenation) => {
            out.push_str(&format!("{indent}{kind}:\n"));
        }
    }

    for child in node.children() {
        render_tree(child, depth + 1, out);
    }
}

fn error_label(e: &Error) -> &'static str {
    match e {
        Error::Syntax(_) => "SYNTAX ERROR",
        Error::Regex { .. } => "HOST REGEX ERROR",
        Error::Io(_) => "IO ERROR",
    }
}

pub fn render_human(
    outcomes: &[Outcome],
    settings: &GenSettings,
    verbosity: u8,
    quiet: bool,
    with_tree: bool,
) -> String {
    let mut out = String::new();

    if quiet {
        for o in outcomes {
            if let Ok(report) = &o.result {
                for s in report.samples() {
                    out.push_str(s);
                    out.push('\n');
                }
            }
        }
        return out;
    }

    if verbosity > 0 {
        out.push_str(&format!(
            "rgen: repetition_limit={}, max_combinations={}\n\n",
            settings.repetition_limit, settings.max_combinations
        ));
    }

    for (i, o) in outcomes.iter().enumerate() {
        out.push_str(&format!("Pattern {}: {}\n", i + 1, o.pattern));

        let report = match &o.result {
            Ok(report) => report,
            Err(e) => {
                out.push_str(&format!("{}: {e}\n\n", error_label(e)));
                continue;
            }
        };

        out.push_str("Generated combinations:\n");
        for s in report.samples() {
            out.push_str(&format!(" - {s}\n"));
        }
        for s in report.rejected() {
            out.push_str(&format!("REJECTED by host regex: {s:?}\n"));
        }
        out.push_str(&format!(
            "All combinations valid: {}\n",
            report.all_valid()
        ));
        out.push_str(&format!("Total generated: {}\n", report.samples().len()));

        if with_tree {
            out.push_str(&format!("Syntax tree for pattern {}:\n", i + 1));
            render_tree(report.tree(), 0, &mut out);
        }

        out.push('\n');
    }

    out
}

pub fn render(
    outcomes: &[Outcome],
    settings: &GenSettings,
    format: OutputFormat,
    verbosity: u8,
    quiet: bool,
    with_tree: bool,
) -> String {
    match format {
        OutputFormat::Human => render_human(outcomes, settings, verbosity, quiet, with_tree),
        OutputFormat::Json => render_json(outcomes, settings, with_tree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgen_core::sample_pattern;

    fn outcome(pattern: &str, settings: &GenSettings) -> Outcome {
        Outcome {
            pattern: pattern.to_string(),
            result: sample_pattern(pattern, settings),
        }
    }

    #[test]
    fn tree_is_indented_by_depth() {
        let tree = rgen_syntax::parse_pattern("(a|b)c*").unwrap();
        let mut out = String::new();
        render_tree(&tree, 0, &mut out);

        assert_eq!(
            out,
            "Concatenation:\n  Alternation:\n    Literal: 'a'\n    Literal: 'b'\n  Repetition (0 to ∞):\n    Literal: 'c'\n"
        );
    }

    #[test]
    fn human_lists_samples_and_summary() {
        let settings = GenSettings::default();
        let out = render_human(&[outcome("a?", &settings)], &settings, 0, false, false);

        assert_eq!(
            out,
            "Pattern 1: a?\nGenerated combinations:\n - \n - a\nAll combinations valid: true\nTotal generated: 2\n\n"
        );
    }

    #[test]
    fn human_reports_syntax_errors_inline() {
        let settings = GenSettings::default();
        let out = render_human(
            &[outcome("(a|b", &settings), outcome("a", &settings)],
            &settings,
            0,
            false,
            true,
        );

        assert!(out.contains("Pattern 1: (a|b\nSYNTAX ERROR: "), "{out}");
        assert!(out.contains("Pattern 2: a\n"), "{out}");
        assert!(out.contains("Literal: 'a'"), "{out}");
    }

    #[test]
    fn quiet_prints_only_samples() {
        let settings = GenSettings::default();
        let out = render_human(&[outcome("a{2,3}", &settings)], &settings, 3, true, true);

        assert_eq!(out, "aa\naaa\n");
    }

    #[test]
    fn json_has_tree_and_samples() {
        let settings = GenSettings::new(3, 40);
        let out = render_json(&[outcome("a{2,}|b", &settings)], &settings, true);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["ok"], true);
        assert_eq!(v["settings"]["repetition_limit"], 3);
        let p = &v["patterns"][0];
        assert_eq!(p["samples"], serde_json::json!(["aa", "aaa", "b"]));
        assert_eq!(p["pattern"], "a{2,}|b");
        assert_eq!(p["total"], 3);
        assert_eq!(p["tree"]["kind"], "Alternation");
        let rep = &p["tree"]["children"][0];
        assert_eq!(rep["kind"], "Repetition");
        assert_eq!(rep["min"], 2);
        assert!(rep["max"].is_null());
        assert_eq!(rep["children"][0]["value"], "a");
    }

    #[test]
    fn json_settings_match_the_samples() {
        for limit in [1, 2, 4] {
            let settings = GenSettings::new(limit, 40);
            let out = render_json(&[outcome("a*", &settings)], &settings, false);
            let v: serde_json::Value = serde_json::from_str(&out).unwrap();

            assert_eq!(v["settings"]["repetition_limit"], limit);
            assert_eq!(v["patterns"][0]["total"], limit + 1);
        }
    }

    #[test]
    fn json_reports_errors() {
        let settings = GenSettings::default();
        let out = render_json(&[outcome("a{2,", &settings)], &settings, true);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["ok"], false);
        assert_eq!(v["patterns"][0]["pattern"], "a{2,");
        assert!(v["patterns"][0]["error"].as_str().unwrap().contains("{2,"));
        assert!(v["patterns"][0].get("tree").is_none());
    }
}
