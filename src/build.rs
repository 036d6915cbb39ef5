use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::BuildArgs;
use crate::config::{self, CourseConfig};
use crate::index::{self, Article};
use crate::markdown;
use crate::split;
use crate::template::{self, ChapterRecord};
use crate::toc;

/// Builds every selected course, then merges the produced articles into the
/// persisted index next to the configuration file.
///
/// Only configuration problems are fatal: a missing config file or a
/// `--course` filter that matches nothing. A course that fails to build is
/// logged and skipped so the remaining courses still go through.
pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    let config_path = PathBuf::from(&args.config);
    let configs = config::load(&config_path).context("load course config")?;
    let root = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let selected: Vec<CourseConfig> = match &args.course {
        Some(id) => configs
            .into_iter()
            .filter(|c| &c.course_id == id)
            .collect(),
        None => configs,
    };
    if selected.is_empty() {
        match &args.course {
            Some(id) => anyhow::bail!("no course matches id: {id}"),
            None => anyhow::bail!("no courses configured in {}", config_path.display()),
        }
    }

    let course_ids = selected
        .iter()
        .map(|c| c.course_id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(courses = %course_ids, "building courses");

    let mut all_articles = Vec::new();
    let mut built = 0usize;
    for course in &selected {
        match build_course(course, &root) {
            Ok(articles) => {
                built += 1;
                all_articles.extend(articles);
            }
            Err(err) => {
                tracing::error!(
                    course_id = %course.course_id,
                    "course build failed; continuing with remaining courses: {err:#}"
                );
            }
        }
    }

    let index_path = root.join("articles.json");
    let existing = index::load(&index_path);
    let merged = index::merge(existing, all_articles);
    index::write(&index_path, &merged)
        .with_context(|| format!("update article index: {}", index_path.display()))?;

    tracing::info!(
        courses = built,
        indexed_articles = merged.len(),
        "build finished"
    );

    Ok(())
}

/// Builds one course: split, render, anchor, template, write.
///
/// Chapter indices are positional, so filenames like `BMStats3.html` are
/// stable only while the source's chapter order is. A missing source
/// document skips the course with a warning and contributes no articles.
pub fn build_course(config: &CourseConfig, root: &Path) -> anyhow::Result<Vec<Article>> {
    let source_path = root.join(&config.source);
    if !source_path.exists() {
        tracing::warn!(
            course_id = %config.course_id,
            source = %source_path.display(),
            "source document missing; skipping course"
        );
        return Ok(Vec::new());
    }

    let document = std::fs::read_to_string(&source_path)
        .with_context(|| format!("read source: {}", source_path.display()))?;
    let chapters = split::split(&document);
    tracing::info!(
        course_id = %config.course_id,
        chapters = chapters.len(),
        "split course document"
    );

    let output_dir = root.join(&config.output_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let mut articles = Vec::new();
    let mut records = Vec::new();

    for (chapter_index, chapter) in chapters.iter().enumerate() {
        let title = toc::strip_tags(&chapter.raw_title).trim().to_owned();
        let body_html = markdown::render(&chapter.body_lines.join("\n"));

        let entries = toc::extract_toc(&body_html, chapter_index);
        let toc_html = toc::render_toc_html(&entries, &title);
        let anchored_html = toc::inject_anchors(&body_html, chapter_index);

        let page = template::render_chapter_page(config, &title, &toc_html, &anchored_html);
        let filename = format!("{}{}.html", config.course_id, chapter_index);
        let page_path = output_dir.join(&filename);
        std::fs::write(&page_path, page)
            .with_context(|| format!("write chapter page: {}", page_path.display()))?;
        tracing::info!(file = %filename, title = %title, "wrote chapter page");

        articles.push(Article {
            title: title.clone(),
            url: format!("/{}/{filename}", config.output_dir.trim_end_matches('/')),
            course: config.course_name.clone(),
            category: config.category.clone(),
        });
        records.push(ChapterRecord { filename, title });
    }

    let homepage = template::render_homepage(config, &records);
    let homepage_path = output_dir.join("homepage.html");
    std::fs::write(&homepage_path, homepage)
        .with_context(|| format!("write homepage: {}", homepage_path.display()))?;
    tracing::info!(course_id = %config.course_id, "wrote course homepage");

    Ok(articles)
}
