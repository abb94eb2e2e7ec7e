//! Markdown rendering of bucketed pull requests.
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    Result,
    analyzer::{
        config::AnalyzerConfig,
        group::{Category, CategoryParser},
        helpers,
        release::{Buckets, ReleaseBucket},
    },
};

#[derive(Debug, Serialize)]
struct EntryView<'a> {
    number: u64,
    title: &'a str,
    motivation: String,
}

#[derive(Debug, Serialize)]
struct CategoryView<'a> {
    name: Category,
    entries: Vec<EntryView<'a>>,
}

#[derive(Debug, Serialize)]
struct BucketView<'a> {
    label: &'a str,
    anchor: String,
    empty: bool,
    unreleased: bool,
    categories: Vec<CategoryView<'a>>,
}

#[derive(Debug, Serialize)]
struct NotesView<'a> {
    title: &'a str,
    title_anchor: String,
    intro: &'a str,
    buckets: Vec<BucketView<'a>>,
}

fn bucket_view<'a>(
    bucket: &'a ReleaseBucket,
    config: &AnalyzerConfig,
    parser: &CategoryParser,
) -> BucketView<'a> {
    let mut grouped: BTreeMap<Category, Vec<EntryView<'a>>> = BTreeMap::new();

    for pr in bucket.pull_requests.iter() {
        let motivation = helpers::extract_motivation(pr.body.as_deref())
            .unwrap_or_else(|| config.motivation_placeholder.clone());

        grouped
            .entry(parser.parse(&pr.title))
            .or_default()
            .push(EntryView {
                number: pr.number,
                title: &pr.title,
                motivation,
            });
    }

    BucketView {
        label: &bucket.label,
        anchor: helpers::anchor(&bucket.label),
        empty: bucket.is_empty(),
        unreleased: bucket.unreleased,
        categories: grouped
            .into_iter()
            .map(|(name, entries)| CategoryView { name, entries })
            .collect(),
    }
}

/// Render visible buckets through the configured Tera template.
pub fn render(
    buckets: &Buckets,
    config: &AnalyzerConfig,
    parser: &CategoryParser,
) -> Result<String> {
    let view = NotesView {
        title: &config.title,
        title_anchor: helpers::anchor(&config.title),
        intro: &config.intro,
        buckets: buckets
            .visible()
            .map(|bucket| bucket_view(bucket, config, parser))
            .collect(),
    };

    let context = tera::Context::from_serialize(&view)?;
    let notes = tera::Tera::one_off(&config.template, &context, false)?;

    Ok(format!("{}\n", helpers::strip_extra_lines(&notes)))
}
