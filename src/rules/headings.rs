//! Heading canonicalizer
//!
//! Replaces exact `<h1>generic</h1>` occurrences with their canonical
//! form. Only whole-tag matches are rewritten; partial text inside other
//! structures is untouched. Canonical headings never appear as generic
//! keys, so a second pass finds nothing to rewrite.
//!
//! The mapping contents are configuration data, not a contract; the
//! contract is the exact-match, additive rewrite mechanism.

use crate::classify::Category;
use crate::error::Result;
use crate::rules::RuleOutcome;

/// Generic heading to canonical heading mapping
const HEADING_MAP: &[(&str, &str)] = &[
    ("Dashboard", "Your Business at a Glance"),
    ("Welcome", "Grow Faster with Nexora"),
    ("Products", "Everything Your Store Needs"),
    ("Overview", "Key Metrics and Trends"),
    ("Home", "Run Your Whole Business from One Place"),
];

pub fn apply(content: &str, _category: Category) -> Result<RuleOutcome> {
    let mut current = content.to_string();
    let mut edits = 0usize;

    for (generic, canonical) in HEADING_MAP {
        let needle = format!("<h1>{generic}</h1>");
        let occurrences = current.matches(&needle).count();
        if occurrences > 0 {
            let replacement = format!("<h1>{canonical}</h1>");
            current = current.replace(&needle, &replacement);
            edits += occurrences;
        }
    }

    Ok(RuleOutcome {
        content: current,
        edits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_exact_heading() {
        let outcome = apply("<h1>Dashboard</h1>", Category::Default).unwrap();
        assert_eq!(outcome.edits, 1);
        assert_eq!(outcome.content, "<h1>Your Business at a Glance</h1>");
    }

    #[test]
    fn test_counts_multiple_occurrences() {
        let content = "<h1>Welcome</h1>\n<h1>Home</h1>\n<h1>Welcome</h1>";
        let outcome = apply(content, Category::Default).unwrap();
        assert_eq!(outcome.edits, 3);
    }

    #[test]
    fn test_partial_text_is_untouched() {
        // Generic word inside other structures is not a whole-tag match
        let content = "<h2>Dashboard</h2>\n<p>Dashboard tips</p>\n<h1>Dashboard Pro</h1>";
        let outcome = apply(content, Category::Default).unwrap();
        assert_eq!(outcome.edits, 0);
        assert_eq!(outcome.content, content);
    }

    #[test]
    fn test_is_idempotent() {
        let first = apply("<h1>Products</h1>", Category::Default).unwrap();
        let second = apply(&first.content, Category::Default).unwrap();
        assert_eq!(second.edits, 0);
        assert_eq!(second.content, first.content);
    }
}
