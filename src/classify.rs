//! Page classification by path keywords
//!
//! Maps a file path to one semantic category from a closed set using
//! ordered keyword matching. Classification is total and deterministic:
//! every path gets exactly one category, with `Default` as the fallback.

use std::path::Path;

/// Ordered keyword table; the first matching keyword wins
const KEYWORD_RULES: &[(&str, Category)] = &[
    ("dashboard", Category::Dashboard),
    ("analytics", Category::Dashboard),
    ("reports", Category::Dashboard),
    ("ecommerce", Category::Ecommerce),
    ("shop", Category::Ecommerce),
    ("product", Category::Ecommerce),
    ("checkout", Category::Ecommerce),
    ("crm", Category::Crm),
    ("contact", Category::Crm),
    ("leads", Category::Crm),
    ("course", Category::Courses),
    ("lesson", Category::Courses),
    ("learning", Category::Courses),
    ("marketing", Category::Marketing),
    ("landing", Category::Marketing),
    ("pricing", Category::Marketing),
];

/// Semantic category of a page file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Analytics and reporting pages
    Dashboard,
    /// Store, product and checkout pages
    Ecommerce,
    /// Customer relationship pages
    Crm,
    /// Course and training pages
    Courses,
    /// Campaign and landing pages
    Marketing,
    /// Anything that matches no keyword
    Default,
}

impl Category {
    /// Classify a file path by testing the keyword table in order
    pub fn classify(path: &Path) -> Self {
        let lowered = path.to_string_lossy().to_lowercase();
        for (keyword, category) in KEYWORD_RULES {
            if lowered.contains(keyword) {
                return *category;
            }
        }
        Category::Default
    }

    /// Short name for logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Category::Dashboard => "dashboard",
            Category::Ecommerce => "ecommerce",
            Category::Crm => "crm",
            Category::Courses => "courses",
            Category::Marketing => "marketing",
            Category::Default => "default",
        }
    }

    /// Page title used by the metadata block injector
    pub fn title(&self) -> &'static str {
        match self {
            Category::Dashboard => "Real-Time Business Analytics Dashboard | Nexora",
            Category::Ecommerce => "Online Store and Order Management | Nexora",
            Category::Crm => "Customer Relationship Management | Nexora",
            Category::Courses => "Online Courses and Team Training | Nexora",
            Category::Marketing => "Marketing Automation and Campaigns | Nexora",
            Category::Default => "Nexora | The All-in-One Business Platform",
        }
    }

    /// Page description used by the metadata block injector
    pub fn description(&self) -> &'static str {
        match self {
            Category::Dashboard => {
                "Track revenue, conversion and engagement with live dashboards and custom reports."
            }
            Category::Ecommerce => {
                "Manage products, inventory and orders from a single storefront backend."
            }
            Category::Crm => {
                "Keep every customer conversation, deal and follow-up in one pipeline."
            }
            Category::Courses => {
                "Build and deliver interactive courses with progress tracking for your whole team."
            }
            Category::Marketing => {
                "Plan campaigns, automate outreach and measure what converts."
            }
            Category::Default => {
                "Nexora brings dashboards, commerce, CRM, courses and marketing together."
            }
        }
    }

    /// Keyword list used by the metadata block injector
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Dashboard => &["analytics", "kpi dashboard", "business reports"],
            Category::Ecommerce => &["online store", "inventory", "order management"],
            Category::Crm => &["crm", "sales pipeline", "customer management"],
            Category::Courses => &["online courses", "team training", "e-learning"],
            Category::Marketing => &["marketing automation", "campaigns", "conversion"],
            Category::Default => &["business platform", "saas", "productivity"],
        }
    }
}
