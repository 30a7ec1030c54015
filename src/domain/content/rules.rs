//! Ordered rewrite rules
//!
//! Both content passes are a fixed list of global find-and-replace rules run
//! strictly top to bottom. Each rule sees the output of every rule before it
//! and nothing else; no rule inspects whether another one fired.

use regex::Regex;
use std::borrow::Cow;

/// A single global substitution
#[derive(Debug)]
pub struct RewriteRule {
    /// Short identifier, used in trace output and tests
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    /// Build a rule from a regex pattern and a `$n`-style replacement template.
    ///
    /// Patterns are compile-time constants; an invalid one is a programming error.
    pub fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        RewriteRule {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Build a rule that matches `needle` literally.
    pub fn literal(name: &'static str, needle: &str, replacement: &'static str) -> Self {
        Self::new(name, &regex::escape(needle), replacement)
    }

    /// Replace every non-overlapping match in `input`.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, self.replacement)
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// Run `rules` in order over `input`.
pub fn apply_all(rules: &[RewriteRule], input: &str) -> String {
    let mut output = input.to_string();
    for rule in rules {
        if rule.is_match(&output) {
            tracing::trace!(rule = rule.name, "rewrite rule matched");
            output = rule.apply(&output).into_owned();
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_run_in_order() {
        // The second rule only matches what the first one produced.
        let rules = vec![
            RewriteRule::literal("a-to-b", "a", "b"),
            RewriteRule::literal("bb-to-c", "bb", "c"),
        ];
        assert_eq!(apply_all(&rules, "ab"), "c");

        let reversed = vec![
            RewriteRule::literal("bb-to-c", "bb", "c"),
            RewriteRule::literal("a-to-b", "a", "b"),
        ];
        assert_eq!(apply_all(&reversed, "ab"), "bb");
    }

    #[test]
    fn test_literal_rule_escapes_metacharacters() {
        let rule = RewriteRule::literal("dots", "a.b", "x");
        assert_eq!(rule.apply("a.b acb"), "x acb");
    }

    #[test]
    fn test_capture_groups_in_replacement() {
        let rule = RewriteRule::new("swap", r"(\w+)-(\w+)", "${2}-${1}");
        assert_eq!(rule.apply("left-right"), "right-left");
    }

    #[test]
    fn test_unmatched_input_passes_through() {
        let rules = vec![RewriteRule::literal("z", "z", "y")];
        assert_eq!(apply_all(&rules, "nothing here"), "nothing here");
    }
}
