use once_cell::sync::Lazy;
use regex::Regex;

// Column-0 definitions only: nested classes belong to their enclosing
// scope, not the module, and imported names never match a `class` line.
static CLASS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^class\s+([A-Za-z_]\w*)\s*[(:\s]").unwrap());

/// Extract the names of classes a module defines at top level.
pub fn extract_classes(content: &str) -> Vec<String> {
    CLASS_PATTERN
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
