//! Configuration for bucketing and release notes rendering.
use chrono::TimeDelta;

use crate::analyzer::bucket::DEFAULT_TOLERANCE_SECS;

/// Default document title.
pub const DEFAULT_TITLE: &str = "Release Notes";

/// Default paragraph shown under the document heading.
pub const DEFAULT_INTRO: &str = "This document records the release history of this project and the pull requests shipped in each version.

For more detailed changes, see the [changelog](./changelog.md).

For platforms that do not mirror pull requests, this document lists the title and motivation of each one.";

/// Text used when a pull request has no motivation section.
pub const DEFAULT_MOTIVATION_PLACEHOLDER: &str = "No motivation provided.";

/// Default release notes template.
pub const DEFAULT_TEMPLATE: &str = r#"---
title: {{ title }}
---

- [{{ title }}](#{{ title_anchor }})
{% for bucket in buckets %}  - [{{ bucket.label }}](#{{ bucket.anchor }})
{% endfor %}
# {{ title }}

{{ intro }}

{% for bucket in buckets %}
## {{ bucket.label }}

{% if bucket.empty %}_(No pull requests found)_
{% else %}{% for category in bucket.categories %}
**{{ category.name }}**

{% for entry in category.entries %}- {{ entry.title }} (#{{ entry.number }})
  - **Motivation**: {{ entry.motivation }}
{% endfor %}{% endfor %}{% endif %}
{% endfor %}
"#;

/// Configuration for bucketing and rendering.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Window within which a merge and a tag commit are the same release.
    pub tolerance: TimeDelta,
    /// Document title.
    pub title: String,
    /// Paragraph under the document heading.
    pub intro: String,
    /// Tera template for the whole document.
    pub template: String,
    /// Text used when a pull request has no motivation section.
    pub motivation_placeholder: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tolerance: TimeDelta::seconds(DEFAULT_TOLERANCE_SECS),
            title: DEFAULT_TITLE.into(),
            intro: DEFAULT_INTRO.into(),
            template: DEFAULT_TEMPLATE.into(),
            motivation_placeholder: DEFAULT_MOTIVATION_PLACEHOLDER.into(),
        }
    }
}
