//! Accessibility attribute injector
//!
//! Inserts a generic accessible label into bare `<button ...>` opening
//! tags that lack one. Tags already carrying `aria-label` are excluded
//! from the rewrite, which makes the rule idempotent. Opening tags with
//! embedded expression attributes (braces) are deliberately not matched;
//! only bare tags are rewritten.

use crate::classify::Category;
use crate::error::Result;
use crate::rules::RuleOutcome;
use regex::Regex;
use std::sync::OnceLock;

/// Matches bare button opening tags (no embedded expression braces)
static BUTTON_TAG: OnceLock<Regex> = OnceLock::new();

fn button_tag() -> &'static Regex {
    BUTTON_TAG.get_or_init(|| Regex::new(r"<button\b[^>{}]*/?>").unwrap())
}

/// Attribute that marks a tag as already labeled
const ARIA_LABEL: &str = "aria-label";

/// Generic accessible label inserted into unlabeled tags
const DEFAULT_LABEL: &str = r#" aria-label="Interactive button""#;

pub fn apply(content: &str, _category: Category) -> Result<RuleOutcome> {
    let mut edits = 0usize;

    let rewritten = button_tag().replace_all(content, |caps: &regex::Captures<'_>| {
        let tag = &caps[0];
        if tag.contains(ARIA_LABEL) {
            return tag.to_string();
        }

        edits += 1;
        let (head, tail) = match tag.strip_suffix("/>") {
            Some(stripped) => (stripped.trim_end(), " />"),
            None => (tag.strip_suffix('>').unwrap_or(tag).trim_end(), ">"),
        };
        format!("{head}{DEFAULT_LABEL}{tail}")
    });

    Ok(RuleOutcome {
        content: rewritten.into_owned(),
        edits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_bare_button() {
        let outcome = apply("<button>Go</button>", Category::Default).unwrap();
        assert_eq!(outcome.edits, 1);
        assert_eq!(
            outcome.content,
            r#"<button aria-label="Interactive button">Go</button>"#
        );
    }

    #[test]
    fn test_labels_button_with_plain_attributes() {
        let outcome = apply(
            r#"<button class="cta" type="submit">Go</button>"#,
            Category::Default,
        )
        .unwrap();
        assert_eq!(outcome.edits, 1);
        assert!(
            outcome
                .content
                .contains(r#"type="submit" aria-label="Interactive button">"#)
        );
    }

    #[test]
    fn test_labels_self_closing_button() {
        let outcome = apply("<button />", Category::Default).unwrap();
        assert_eq!(outcome.edits, 1);
        assert_eq!(
            outcome.content,
            r#"<button aria-label="Interactive button" />"#
        );
    }

    #[test]
    fn test_labeled_button_is_untouched() {
        let content = r#"<button aria-label="Save">Go</button>"#;
        let outcome = apply(content, Category::Default).unwrap();
        assert_eq!(outcome.edits, 0);
        assert_eq!(outcome.content, content);
    }

    #[test]
    fn test_expression_attributes_are_not_matched() {
        let content = "<button onClick={() => save()}>Go</button>";
        let outcome = apply(content, Category::Default).unwrap();
        assert_eq!(outcome.edits, 0);
        assert_eq!(outcome.content, content);
    }

    #[test]
    fn test_counts_each_insertion() {
        let content = "<button>A</button><button>B</button>";
        let outcome = apply(content, Category::Default).unwrap();
        assert_eq!(outcome.edits, 2);
    }

    #[test]
    fn test_is_idempotent() {
        let first = apply("<button>Go</button>", Category::Default).unwrap();
        let second = apply(&first.content, Category::Default).unwrap();
        assert_eq!(second.edits, 0);
        assert_eq!(second.content, first.content);
    }
}
