use std::sync::OnceLock;

use regex::Regex;

fn version_constraint() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(.*?\)").expect("version constraint pattern is valid"))
}

/// Extracts bare package names from a `Depends`-style field.
///
/// Every alternative of a `a | b` group is kept, in input order, and the first
/// parenthesized version constraint of each is dropped.
pub fn parse_dependencies(field: &str) -> Vec<String> {
    let mut names = Vec::new();
    for group in field.split(',') {
        for alternative in group.trim().split('|') {
            let stripped = version_constraint().replace(alternative.trim(), "");
            let name = stripped.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    names
}
