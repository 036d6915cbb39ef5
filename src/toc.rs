use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::template::escape_html;

static HEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([23])([^>]*)>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// One table-of-contents line for a rendered chapter.
///
/// `anchor_id` is `"<chapter_index>.<ordinal>"` with ordinals assigned in
/// document order from 1, the same id [`inject_anchors`] writes into the
/// body, so every TOC link resolves to an injected anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub anchor_id: String,
}

/// Removes embedded HTML tags such as `<font color=red>` from text.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

/// Opening `<h2>`/`<h3>` tags in document order. Extraction and injection
/// both walk this list, which is what keeps their ordinals in agreement;
/// other heading levels are not counted and not anchored.
fn scan_headings(html: &str) -> Vec<(u8, Range<usize>)> {
    HEADING_OPEN
        .captures_iter(html)
        .filter_map(|caps| {
            let open = caps.get(0)?;
            let level = match caps.get(1)?.as_str() {
                "2" => 2,
                _ => 3,
            };
            Some((level, open.range()))
        })
        .collect()
}

/// Collects the TOC entries for one rendered chapter.
pub fn extract_toc(html: &str, chapter_index: usize) -> Vec<TocEntry> {
    scan_headings(html)
        .into_iter()
        .enumerate()
        .map(|(idx, (level, open))| {
            let close = format!("</h{level}>");
            // A heading without a close tag still consumes its ordinal,
            // it just contributes no text.
            let text = match html[open.end..].find(&close) {
                Some(at) => strip_tags(&html[open.end..open.end + at]),
                None => String::new(),
            };
            TocEntry {
                level,
                text,
                anchor_id: format!("{chapter_index}.{}", idx + 1),
            }
        })
        .collect()
}

/// Inserts an empty named anchor before each `<h2>`/`<h3>` opening tag.
pub fn inject_anchors(html: &str, chapter_index: usize) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for (idx, (_, open)) in scan_headings(html).into_iter().enumerate() {
        let anchor_id = format!("{chapter_index}.{}", idx + 1);
        out.push_str(&html[last..open.start]);
        out.push_str(&format!(
            "<a name=\"{anchor_id}\" class=\"md-header-anchor\" id=\"{anchor_id}\"></a>\n"
        ));
        last = open.start;
    }

    out.push_str(&html[last..]);
    out
}

/// Renders the TOC block for a chapter page, or nothing for a chapter
/// without headings.
pub fn render_toc_html(entries: &[TocEntry], page_title: &str) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut html = String::new();
    html.push_str("        <div class=\"toc\">\n            <ul>\n");
    html.push_str(&format!(
        "                <li>{}\n                    <ul>\n",
        escape_html(page_title)
    ));
    for entry in entries {
        let indent = if entry.level == 3 {
            "                            "
        } else {
            "                        "
        };
        html.push_str(&format!(
            "{indent}<li><a href=\"#{}\">{}</a></li>\n",
            entry.anchor_id,
            escape_html(&entry.text)
        ));
    }
    html.push_str("                    </ul>\n                </li>\n            </ul>\n        </div>\n");
    html
}
