/// One `##`-delimited section of a course document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub raw_title: String,
    pub body_lines: Vec<String>,
}

/// Splits a course document into chapters on level-2 headings.
///
/// Lines before the first `##` heading are preamble and have no chapter to
/// attach to, so they are dropped. A document without any `##` headings
/// yields zero chapters.
pub fn split(document: &str) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut current: Option<Chapter> = None;

    for line in document.lines() {
        if let Some(title) = chapter_heading(line) {
            if let Some(done) = current.take() {
                chapters.push(done);
            }
            current = Some(Chapter {
                raw_title: title.to_owned(),
                body_lines: Vec::new(),
            });
        } else if let Some(chapter) = current.as_mut() {
            chapter.body_lines.push(line.to_owned());
        }
    }

    if let Some(done) = current {
        chapters.push(done);
    }

    chapters
}

/// Matches `## Title` but not `###` or deeper; those stay in the body.
fn chapter_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("## ")?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.trim())
}
