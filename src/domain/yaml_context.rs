//! Source context around a YAML syntax error.

use std::fmt;

/// Lines shown before and after the offending line.
const CONTEXT_RADIUS: usize = 3;

/// 1-based position of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Render up to seven numbered lines around `line` (1-based), marking it with `>>> `.
pub fn context_lines(content: &str, line: usize) -> Vec<String> {
    let lines: Vec<&str> = content.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    let target = line.saturating_sub(1);
    let start = target.saturating_sub(CONTEXT_RADIUS);
    let end = lines.len().min(target + CONTEXT_RADIUS + 1);

    (start..end)
        .map(|index| {
            let prefix = if index == target { ">>> " } else { "    " };
            format!("{}{}: {}", prefix, index + 1, lines[index])
        })
        .collect()
}
