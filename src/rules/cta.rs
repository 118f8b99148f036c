//! CTA phrase rewriter
//!
//! Replaces exact quoted string literals equal to a generic call-to-action
//! label with the canonical label, preserving the original quote
//! character. Canonical labels never appear as generic keys, so the rule
//! is idempotent.

use crate::classify::Category;
use crate::error::Result;
use crate::rules::RuleOutcome;

/// Generic CTA label to canonical label mapping
const CTA_MAP: &[(&str, &str)] = &[
    ("Click Here", "Get Started Free"),
    ("Submit", "Send Message"),
    ("Learn More", "Explore the Platform"),
    ("Sign Up", "Start Your Free Trial"),
    ("Buy Now", "Add to Cart"),
];

/// Quote characters recognized around a CTA literal
const QUOTES: &[char] = &['"', '\''];

pub fn apply(content: &str, _category: Category) -> Result<RuleOutcome> {
    let mut current = content.to_string();
    let mut edits = 0usize;

    for (generic, canonical) in CTA_MAP {
        for quote in QUOTES {
            let needle = format!("{quote}{generic}{quote}");
            let occurrences = current.matches(&needle).count();
            if occurrences > 0 {
                let replacement = format!("{quote}{canonical}{quote}");
                current = current.replace(&needle, &replacement);
                edits += occurrences;
            }
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
    fn test_rewrites_double_quoted_label() {
        let outcome = apply(r#"<button>"Click Here"</button>"#, Category::Default).unwrap();
        assert_eq!(outcome.edits, 1);
        assert_eq!(outcome.content, r#"<button>"Get Started Free"</button>"#);
    }

    #[test]
    fn test_preserves_single_quote_character() {
        let outcome = apply("label: 'Sign Up'", Category::Default).unwrap();
        assert_eq!(outcome.edits, 1);
        assert_eq!(outcome.content, "label: 'Start Your Free Trial'");
    }

    #[test]
    fn test_unquoted_label_is_untouched() {
        let content = "Please Submit the form";
        let outcome = apply(content, Category::Default).unwrap();
        assert_eq!(outcome.edits, 0);
        assert_eq!(outcome.content, content);
    }

    #[test]
    fn test_counts_each_replacement() {
        let content = r#""Submit" and "Buy Now" and 'Submit'"#;
        let outcome = apply(content, Category::Default).unwrap();
        assert_eq!(outcome.edits, 3);
    }

    #[test]
    fn test_is_idempotent() {
        let first = apply(r#"cta="Learn More""#, Category::Default).unwrap();
        let second = apply(&first.content, Category::Default).unwrap();
        assert_eq!(second.edits, 0);
        assert_eq!(second.content, first.content);
    }
}
