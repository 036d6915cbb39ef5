use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// One buildable course, as configured in `build-config.json`.
///
/// `source` and `output_dir` are resolved relative to the directory
/// containing the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseConfig {
    pub course_id: String,
    pub course_name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    /// Path to the course's markdown source document.
    pub source: String,
    /// Directory the generated chapter pages are written to.
    pub output_dir: String,
}

pub fn load(path: &Path) -> anyhow::Result<Vec<CourseConfig>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read course config: {}", path.display()))?;
    let configs: Vec<CourseConfig> = serde_json::from_str(&contents)
        .with_context(|| format!("parse course config: {}", path.display()))?;
    Ok(configs)
}
