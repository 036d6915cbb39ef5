use crate::config::CourseConfig;

/// One homepage listing line for a generated chapter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    pub filename: String,
    pub title: String,
}

/// Escapes text for interpolation into HTML attributes and text nodes.
/// `&` must go first or it would re-escape the other entities.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders one chapter into a complete standalone page.
///
/// The nav and footer are `data-include` placeholders spliced in by the
/// site's fragment-include script at page load; MathJax picks up the
/// `\(..\)` / `\[..\]` spans the math guard restored into the body.
pub fn render_chapter_page(
    config: &CourseConfig,
    page_title: &str,
    toc_html: &str,
    body_html: &str,
) -> String {
    let course_name = escape_html(&config.course_name);
    let title = escape_html(page_title);
    let author = escape_html(&config.author);
    let category = escape_html(&config.category);

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-cmn-Hans">

<head>
    <meta name="viewport" content="width=device-width,initial-scale=1,maximum-scale=1,user-scalable=no">
    <meta charset="UTF-8">
    <meta name="keywords" content="{course_name}">
    <meta name="description" content="{title} - {course_name}">
    <meta name="author" content="{author}">
    <title>{title}</title>
    <script src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
    <link rel="stylesheet" href="/assets/css/global.css">
    <link rel="stylesheet" href="/assets/css/article-detail.css">
    <link rel="stylesheet" href="/assets/css/code.css">
    <link rel="stylesheet" href="/assets/css/github-markdown.css">
    <link rel="stylesheet" href="/assets/css/markdown.css">
    <link rel="shortcut icon" href="/images/blog-logo.png">
    <style>
        .markdown-body {{
            box-sizing: border-box;
            min-width: 200px;
            max-width: 980px;
            margin: 0 auto;
            padding: 10px;
        }}

        .article-content img {{
            max-width: 100%;
        }}
    </style>
</head>

<body>
    <script src="/assets/js/include.js"></script>
    <div data-include="/includes/nav.html"></div>
{toc_html}    <section class="main">
        <div class="left-box">
            <div class="article-container">
                <div class="article-content markdown-body">
                    <h1 style="margin: 10px 0">{title}</h1>
                    <div class="article-cate">
                        <a href="/Category/LearningHomepage.html">{category}</a>
                    </div>
                    <div class="writer-info">
                        <span style="margin: 5px 0;">Author: </span>
                        <span id="writer">{author}</span>
                    </div>
                    <div class="typora-export">
{body_html}
                    </div>
                </div>
            </div>
        </div>
    </section>
    <div data-include="/includes/footer.html"></div>
</body>

</html>
"#
    )
}

/// Renders the course homepage listing every chapter in build order.
pub fn render_homepage(config: &CourseConfig, chapters: &[ChapterRecord]) -> String {
    let course_name = escape_html(&config.course_name);
    let description = escape_html(&config.description);
    let date = chrono::Utc::now().format("%y/%m").to_string();

    let mut list_html = String::new();
    for chapter in chapters {
        list_html.push_str(&format!(
            "                <li class=\"detail-item\">\n                    <span class=\"date\">{date}</span>\n                    <a href=\"{}\" class=\"title\">{}</a>\n                </li>\n                <br>\n",
            escape_html(&chapter.filename),
            escape_html(&chapter.title)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-cmn-Hans">

<head>
    <meta name="viewport" content="width=device-width,initial-scale=1,maximum-scale=1,user-scalable=no">
    <meta charset="UTF-8">
    <meta name="keywords" content="{course_name}">
    <meta name="description" content="{course_name}">
    <title>{course_name}</title>
    <link rel="stylesheet" href="/assets/css/global.css">
    <link rel="stylesheet" href="/assets/css/archive.css">
    <link rel="stylesheet" href="/assets/css/index.css">
    <link rel="shortcut icon" href="/images/blog-logo.png">
</head>

<body>
    <script src="/assets/js/include.js"></script>
    <div data-include="/includes/nav.html"></div>
    <main class="big-container">
        <article class="article">
            <ul class="achieve-box">
                <li class="year">
                    {course_name}
                </li>
                <br>
                <li class="year">
                    {description}
                </li>
{list_html}            </ul>
        </article>
    </main>
    <div data-include="/includes/footer.html"></div>
</body>

</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CourseConfig {
        CourseConfig {
            course_id: "BMStats".to_owned(),
            course_name: "Biomedical <script>Statistics</script>".to_owned(),
            author: "M & X".to_owned(),
            category: "Learning".to_owned(),
            description: "Notes \"quoted\"".to_owned(),
            source: "notes/bmstats.md".to_owned(),
            output_dir: "BMStats".to_owned(),
        }
    }

    #[test]
    fn escape_html_covers_all_four_entities() {
        assert_eq!(escape_html(r#"a & b < c > d " e"#), "a &amp; b &lt; c &gt; d &quot; e");
    }

    #[test]
    fn escape_html_does_not_double_escape() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
    }

    #[test]
    fn chapter_page_escapes_metadata_everywhere() {
        let page = render_chapter_page(&test_config(), "T < U", "", "<p>body</p>");

        assert!(!page.contains("<script>Statistics"));
        assert!(page.contains("&lt;script&gt;Statistics&lt;/script&gt;"));
        assert!(page.contains("<title>T &lt; U</title>"));
        assert!(page.contains("M &amp; X"));
        // the rendered body is trusted markup and passes through untouched
        assert!(page.contains("<p>body</p>"));
    }

    #[test]
    fn chapter_page_omits_toc_block_when_empty() {
        let page = render_chapter_page(&test_config(), "T", "", "<p>b</p>");
        assert!(!page.contains("class=\"toc\""));
    }

    #[test]
    fn chapter_page_carries_site_chrome_placeholders() {
        let page = render_chapter_page(&test_config(), "T", "", "");
        assert!(page.contains("data-include=\"/includes/nav.html\""));
        assert!(page.contains("data-include=\"/includes/footer.html\""));
        assert!(page.contains("mathjax"));
    }

    #[test]
    fn homepage_lists_chapters_in_build_order() {
        let chapters = vec![
            ChapterRecord {
                filename: "BMStats0.html".to_owned(),
                title: "Intro".to_owned(),
            },
            ChapterRecord {
                filename: "BMStats1.html".to_owned(),
                title: "Models".to_owned(),
            },
        ];
        let page = render_homepage(&test_config(), &chapters);

        let first = page.find("BMStats0.html").unwrap();
        let second = page.find("BMStats1.html").unwrap();
        assert!(first < second);
        assert!(page.contains("href=\"BMStats0.html\""));
        assert!(page.contains("Notes &quot;quoted&quot;"));
    }
}
