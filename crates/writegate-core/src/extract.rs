//! Write-target extraction from shell command text.
//!
//! A fixed pattern library, not a shell parser. Each write pattern captures
//! the destination of one write-capable construct; a second table flags
//! constructs that write somewhere the patterns cannot see, so callers can
//! escalate those commands instead of silently approving them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// A shell construct whose write destination is captured by group 1.
struct WritePattern {
    name: &'static str,
    regex: Regex,
}

/// A shell construct with write effects no pattern can capture.
struct WriteIndicator {
    name: &'static str,
    regex: Regex,
}

const WRITE_PATTERN_TABLE: &[(&str, &str)] = &[
    // Redirection; whitespace after the operator is optional, but a `>`
    // glued to `-` or `=` is an arrow token, not a redirect.
    ("redirect", r"(?:^|[^-=])(?:>>?)\s*([^\s;|&]+)"),
    ("tee", r"\btee\s+(?:-[a-zA-Z]+\s+)*([^\s;|&]+)"),
    // cp/mv/install write to their final argument.
    ("cp", r"\bcp\s+(?:-[a-zA-Z]+\s+)*(?:[^\s;|&]+\s+)+([^\s;|&]+)"),
    ("mv", r"\bmv\s+(?:-[a-zA-Z]+\s+)*(?:[^\s;|&]+\s+)+([^\s;|&]+)"),
    ("install", r"\binstall\s+(?:-[a-zA-Z]+\s+)*(?:[^\s;|&]+\s+)+([^\s;|&]+)"),
    ("mkdir", r"\bmkdir\s+(?:-[a-zA-Z]+\s+)*([^\s;|&]+)"),
    ("touch", r"\btouch\s+([^\s;|&]+)"),
    ("curl -o", r"\bcurl\s+.*?(?:-o|--output)\s+([^\s;|&]+)"),
    ("wget -O", r"\bwget\s+.*?(?:-O|--output-document)\s+([^\s;|&]+)"),
    ("sed -i", r#"\bsed\s+-i(?:\s+'[^']*'|\s+"[^"]*")\s+([^\s;|&]+)"#),
];

const UNPARSEABLE_INDICATOR_TABLE: &[(&str, &str)] = &[
    ("python -c", r"\bpython[23]?\s+-c\b"),
    ("node -e", r"\bnode\s+-e\b"),
    ("ruby -e", r"\bruby\s+-e\b"),
    ("perl -e", r"\bperl\s+-e\b"),
    ("tar -C", r"\btar\s+.*(?:-C\b|--directory\b)"),
    ("unzip -d", r"\bunzip\s+.*-d\b"),
    ("rsync", r"\brsync\b"),
    ("patch", r"\bpatch\b"),
    ("eval", r"\beval\s"),
    ("dd of=", r"\bdd\b.*\bof="),
];

static WRITE_PATTERNS: Lazy<Vec<WritePattern>> = Lazy::new(|| {
    WRITE_PATTERN_TABLE
        .iter()
        .map(|&(name, pattern)| WritePattern {
            name,
            regex: Regex::new(pattern).unwrap(),
        })
        .collect()
});

static UNPARSEABLE_INDICATORS: Lazy<Vec<WriteIndicator>> = Lazy::new(|| {
    UNPARSEABLE_INDICATOR_TABLE
        .iter()
        .map(|&(name, pattern)| WriteIndicator {
            name,
            regex: Regex::new(pattern).unwrap(),
        })
        .collect()
});

/// Candidate write targets found in a command, plus flags for constructs
/// whose targets could not be captured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub paths: Vec<String>,
    pub has_unparseable_writes: bool,
    pub unparseable_reasons: Vec<String>,
}

/// Scan a shell command for write targets.
///
/// Candidates keep pattern-table order and are neither resolved nor
/// deduplicated. Captures beginning with `$` or `(` are dropped: a shell
/// variable or subshell cannot be resolved without running the command.
pub fn extract_write_paths(command: &str) -> Extraction {
    let mut paths = Vec::new();
    for pattern in WRITE_PATTERNS.iter() {
        for captures in pattern.regex.captures_iter(command) {
            let Some(capture) = captures.get(1) else {
                continue;
            };
            let candidate = capture.as_str().trim();
            if candidate.is_empty() || candidate.starts_with('$') || candidate.starts_with('(') {
                debug!(pattern = pattern.name, candidate, "skipping unresolvable capture");
                continue;
            }
            paths.push(candidate.to_string());
        }
    }

    let mut unparseable_reasons = Vec::new();
    for indicator in UNPARSEABLE_INDICATORS.iter() {
        if indicator.regex.is_match(command) {
            unparseable_reasons.push(indicator.name.to_string());
        }
    }

    Extraction {
        paths,
        has_unparseable_writes: !unparseable_reasons.is_empty(),
        unparseable_reasons,
    }
}
