use std::collections::HashSet;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Persisted index record for one generated chapter page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub course: String,
    pub category: String,
}

/// Reads the persisted article index. A missing or unparsable file is an
/// empty index; losing a stale index is recoverable, aborting a build over
/// it is not.
pub fn load(path: &Path) -> Vec<Article> {
    if !path.exists() {
        return Vec::new();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "article index unreadable; starting from an empty index");
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(articles) => articles,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "article index unparsable; starting from an empty index");
            Vec::new()
        }
    }
}

/// Merges freshly built articles into the existing index.
///
/// Entries for courses that were rebuilt are replaced wholesale; entries
/// for every other course are kept in their original relative order. This
/// is what lets a single-course rebuild leave the rest of the index alone.
pub fn merge(existing: Vec<Article>, new_articles: Vec<Article>) -> Vec<Article> {
    let built: HashSet<String> = new_articles.iter().map(|a| a.course.clone()).collect();

    let mut merged: Vec<Article> = existing
        .into_iter()
        .filter(|article| !built.contains(&article.course))
        .collect();
    merged.extend(new_articles);
    merged
}

/// Replaces the persisted index atomically: written to a temp sibling and
/// renamed over the target, so concurrent readers of the static site never
/// see a partially written file.
pub fn write(path: &Path, articles: &[Article]) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(articles).context("serialize article index")?;
    json.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())
        .with_context(|| format!("write article index: {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("replace article index: {}", path.display()))?;

    Ok(())
}
