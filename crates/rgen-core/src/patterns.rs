use log::debug;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Read a pattern list: one pattern per line, `#` comments and blank lines
/// skipped.
pub fn load_patterns(path: &Path) -> Result<Vec<String>, Error> {
    let src = fs::read_to_string(path)?;
    let patterns = parse_pattern_list(&src);
    debug!("loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

pub fn parse_pattern_list(src: &str) -> Vec<String> {
    src.lines()
        .map(|raw_line| {
            // Handle Windows CRLF files.
            raw_line.strip_suffix('\r').unwrap_or(raw_line).trim()
        })
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let src = r#"
            # sample patterns
            (a|b)c

            a{2,3}
              # indented comment
        "#;

        assert_eq!(parse_pattern_list(src), vec!["(a|b)c", "a{2,3}"]);
    }

    #[test]
    fn tolerates_crlf() {
        assert_eq!(parse_pattern_list("a+\r\nb?\r\n"), vec!["a+", "b?"]);
    }
}
