//! Metadata block injector
//!
//! Prepends a category-specific metadata export block (title, description,
//! keyword list, plus duplicated title/description for social-preview and
//! search-engine consumption) unless the file already carries a metadata
//! export or opts into dynamic rendering. The marker check is what makes
//! the rule idempotent.

use crate::classify::Category;
use crate::error::Result;
use crate::rules::RuleOutcome;

/// Marker for an existing metadata export
const METADATA_MARKER: &str = "export const metadata";

/// Marker for pages that opt into dynamic rendering
const DYNAMIC_MARKER: &str = "export const dynamic";

pub fn apply(content: &str, category: Category) -> Result<RuleOutcome> {
    if content.contains(METADATA_MARKER) || content.contains(DYNAMIC_MARKER) {
        return Ok(RuleOutcome::unchanged(content));
    }

    let block = render_block(category);
    Ok(RuleOutcome {
        content: format!("{block}\n{content}"),
        edits: 1,
    })
}

/// Render the metadata export block for a category, ending with a newline
fn render_block(category: Category) -> String {
    let title = category.title();
    let description = category.description();
    let keywords = category
        .keywords()
        .iter()
        .map(|k| format!("\"{k}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "export const metadata = {{
  title: \"{title}\",
  description: \"{description}\",
  keywords: [{keywords}],
  openGraph: {{
    title: \"{title}\",
    description: \"{description}\",
  }},
  twitter: {{
    title: \"{title}\",
    description: \"{description}\",
  }},
}};
"
    )
}
