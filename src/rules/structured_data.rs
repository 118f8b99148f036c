//! Structured-data injector
//!
//! Inserts a JSON-LD product descriptor immediately before the closing
//! head marker when no structured-data block is present. The presence
//! check on the script type marker guarantees idempotence. Files without
//! a head section are left untouched.

use crate::classify::Category;
use crate::error::Result;
use crate::rules::RuleOutcome;
use serde_json::json;

/// Marker identifying an existing structured-data block
const JSON_LD_MARKER: &str = "application/ld+json";

/// Closing head marker the block is inserted before
const HEAD_CLOSE: &str = "</head>";

pub fn apply(content: &str, _category: Category) -> Result<RuleOutcome> {
    if content.contains(JSON_LD_MARKER) {
        return Ok(RuleOutcome::unchanged(content));
    }

    let Some(insert_at) = content.find(HEAD_CLOSE) else {
        return Ok(RuleOutcome::unchanged(content));
    };

    let block = render_script()?;
    let mut rewritten = String::with_capacity(content.len() + block.len());
    rewritten.push_str(&content[..insert_at]);
    rewritten.push_str(&block);
    rewritten.push_str(&content[insert_at..]);

    Ok(RuleOutcome {
        content: rewritten,
        edits: 1,
    })
}

/// Render the product descriptor as a literal script block
fn render_script() -> Result<String> {
    let descriptor = json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "Nexora",
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "offers": {
            "@type": "Offer",
            "price": "29.00",
            "priceCurrency": "USD"
        }
    });

    Ok(format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        serde_json::to_string(&descriptor)?
    ))
}
