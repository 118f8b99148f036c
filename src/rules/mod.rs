//! Text-rewrite rule engine
//!
//! A rule is a pure function over `(content, category)`. The battery is a
//! fixed ordered table of five rules, each independently idempotent:
//! re-applying a rule to its own output yields zero further edits. Rules
//! never fail on "no match"; zero matches is a normal silent outcome.
//!
//! All rules operate on raw text via literal/marker matching. There is
//! deliberately no parsing of the page source into an AST: idempotence
//! rests on presence checks, not semantic understanding.

pub mod accessibility;
pub mod cta;
pub mod headings;
pub mod metadata;
pub mod structured_data;

use crate::classify::Category;
use crate::error::{Error, Result};
use tracing::trace;

/// Upper bound on content size fed through the rule battery (4 MiB)
pub const MAX_CONTENT_LEN: usize = 4 * 1024 * 1024;

/// Result of a single rule application
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// The (possibly unchanged) content after the rule ran
    pub content: String,
    /// Number of replacements/insertions the rule performed
    pub edits: usize,
}

impl RuleOutcome {
    /// A zero-edit outcome that leaves the content as-is
    pub fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            edits: 0,
        }
    }
}

/// A named text-rewrite rule
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str, Category) -> Result<RuleOutcome>,
}

/// The fixed rule battery, in execution order
pub const RULES: &[Rule] = &[
    Rule {
        name: "metadata-block",
        apply: metadata::apply,
    },
    Rule {
        name: "heading-canonicalizer",
        apply: headings::apply,
    },
    Rule {
        name: "cta-rewriter",
        apply: cta::apply,
    },
    Rule {
        name: "structured-data",
        apply: structured_data::apply,
    },
    Rule {
        name: "accessibility",
        apply: accessibility::apply,
    },
];

/// Run the full battery in order, summing edits
///
/// Fails before running any rule when the content exceeds the size bound.
/// A failure leaves the caller with no partially-transformed content to
/// write back.
pub fn apply_all(content: &str, category: Category) -> Result<RuleOutcome> {
    if content.len() > MAX_CONTENT_LEN {
        return Err(Error::Rule {
            rule: "engine",
            message: format!(
                "content size {} exceeds the {} byte limit",
                content.len(),
                MAX_CONTENT_LEN
            ),
        });
    }

    let mut current = content.to_string();
    let mut total_edits = 0usize;

    for rule in RULES {
        let outcome = (rule.apply)(&current, category)?;
        if outcome.edits > 0 {
            trace!(rule = rule.name, edits = outcome.edits, "Rule made edits");
        }
        current = outcome.content;
        total_edits += outcome.edits;
    }

    Ok(RuleOutcome {
        content: current,
        edits: total_edits,
    })
}
