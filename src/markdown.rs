use pulldown_cmark::{Event, Options, Parser};

use crate::math;

/// Renders chapter markdown to HTML.
///
/// Math spans are swapped out for placeholder tokens before parsing and
/// swapped back afterwards, so the renderer never sees raw LaTeX. Soft
/// breaks become hard breaks: single newlines in study notes are meaningful
/// line breaks, matching how the notes were authored.
pub fn render(markdown: &str) -> String {
    let (guarded, placeholders) = math::protect(markdown);

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(&guarded, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    math::restore(&html, &placeholders)
}
