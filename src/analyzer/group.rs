use std::{fmt::Display, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

/// Release notes categories, declared in the order they are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Also the catch-all for titles without a known marker.
    #[default]
    Features,
    Improvements,
    Fixes,
    Refactorings,
    Tests,
    BuildAndDeployment,
    Documentation,
}

impl Category {
    /// Heading shown in rendered notes.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Features => "Features",
            Category::Improvements => "Improvements",
            Category::Fixes => "Fixes",
            Category::Refactorings => "Refactorings",
            Category::Tests => "Tests",
            Category::BuildAndDeployment => "Build & Deployment",
            Category::Documentation => "Documentation",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

type TitleMatcher = Box<dyn Fn(&str) -> Option<Category> + Send + Sync>;

// FEAT
static FEAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[FEAT\]").unwrap());

// REFACTOR
static REFACTOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[REFACTOR\]").unwrap());

// FIX
static FIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[FIX\]").unwrap());

// PERF
static PERF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[PERF\]").unwrap());

// DOCS
static DOCS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[DOCS\]").unwrap());

// TEST
static TEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[TEST\]").unwrap());

// BUILD / CI
static BUILD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:BUILD|CI)\]").unwrap());

fn create_title_matcher(
    pattern: &'static Regex,
    target: Category,
) -> TitleMatcher {
    Box::new(move |title: &str| -> Option<Category> {
        if pattern.is_match(title) {
            return Some(target);
        }

        None
    })
}

/// Determines which category a pull request belongs to from the bracketed
/// marker in its title.
pub struct CategoryParser {
    matchers: Vec<TitleMatcher>,
}

impl Default for CategoryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryParser {
    /// Create parser with the marker matchers in priority order.
    pub fn new() -> Self {
        let matchers = vec![
            create_title_matcher(&FEAT_REGEX, Category::Features),
            create_title_matcher(&REFACTOR_REGEX, Category::Refactorings),
            create_title_matcher(&FIX_REGEX, Category::Fixes),
            create_title_matcher(&PERF_REGEX, Category::Improvements),
            create_title_matcher(&DOCS_REGEX, Category::Documentation),
            create_title_matcher(&TEST_REGEX, Category::Tests),
            create_title_matcher(&BUILD_REGEX, Category::BuildAndDeployment),
        ];

        Self { matchers }
    }

    /// First matching marker wins, titles without one are features.
    pub fn parse(&self, title: &str) -> Category {
        self.matchers
            .iter()
            .find_map(|matcher| matcher(title))
            .unwrap_or_default()
    }
}
