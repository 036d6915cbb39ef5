use std::sync::LazyLock;

use regex::{Captures, Regex};

// Display spans first; the `$$` delimiters are consumed before the inline
// pass runs, so a `$$...$$` block can never be mis-read as two inline spans.
static DISPLAY_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap());
static INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$\n]+?)\$").unwrap());

/// One guarded math span: the token substituted into the markdown and the
/// MathJax-delimited payload it is restored to after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub token: String,
    pub payload: String,
}

/// Replaces `$$...$$` and `$...$` spans with placeholder tokens so the
/// markdown renderer cannot mangle the LaTeX inside them.
///
/// The token counter is local to one call; chapters are rendered
/// independently and must not share placeholder state. An unterminated span
/// is left in place and takes its chances with the renderer.
pub fn protect(markdown: &str) -> (String, Vec<Placeholder>) {
    let mut placeholders = Vec::new();
    let mut idx = 0usize;

    let guarded = DISPLAY_MATH
        .replace_all(markdown, |caps: &Captures<'_>| {
            let token = format!("%%MATH_DISPLAY_{idx}%%");
            idx += 1;
            placeholders.push(Placeholder {
                token: token.clone(),
                payload: format!("\\[{}\\]", &caps[1]),
            });
            token
        })
        .into_owned();

    let guarded = INLINE_MATH
        .replace_all(&guarded, |caps: &Captures<'_>| {
            let token = format!("%%MATH_INLINE_{idx}%%");
            idx += 1;
            placeholders.push(Placeholder {
                token: token.clone(),
                payload: format!("\\({}\\)", &caps[1]),
            });
            token
        })
        .into_owned();

    (guarded, placeholders)
}

/// Swaps each placeholder token in the rendered HTML back to its payload.
pub fn restore(html: &str, placeholders: &[Placeholder]) -> String {
    let mut restored = html.to_owned();
    for placeholder in placeholders {
        restored = restored.replacen(&placeholder.token, &placeholder.payload, 1);
    }
    restored
}
