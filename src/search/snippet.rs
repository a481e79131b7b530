//! Context snippets around a match

use regex::Regex;
use std::sync::LazyLock;

/// Characters of context kept before the match
pub const CONTEXT_BEFORE: usize = 30;

/// Length of the snippet window in characters
pub const SNIPPET_LEN: usize = 150;

/// Appended to every snippet
pub const ELLIPSIS: &str = "...";

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

static MARKDOWN_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[>#*_`~\-]+").expect("markup pattern is valid"));

/// Build the snippet for a match starting at byte offset `match_start`.
///
/// The window starts `CONTEXT_BEFORE` characters before the match (clamped to
/// the start of the document) and spans `SNIPPET_LEN` characters. Tags are
/// stripped before markdown punctuation so that `>` is still there to close
/// them. The result is HTML-escaped.
pub fn build_snippet(content: &str, match_start: usize) -> String {
    let window = context_window(content, match_start);
    let cleaned = strip_markup(window);
    let mut snippet = htmlescape::encode_minimal(&cleaned);
    snippet.push_str(ELLIPSIS);
    snippet
}

/// Slice of `content` around `match_start`, measured in characters
pub fn context_window(content: &str, match_start: usize) -> &str {
    let match_start = floor_char_boundary(content, match_start);
    let chars_before = content[..match_start].chars().count();
    let skip = chars_before.saturating_sub(CONTEXT_BEFORE);

    let start = content
        .char_indices()
        .nth(skip)
        .map_or(content.len(), |(i, _)| i);
    let end = content[start..]
        .char_indices()
        .nth(SNIPPET_LEN)
        .map_or(content.len(), |(i, _)| start + i);

    &content[start..end]
}

/// Remove HTML tags and markdown punctuation
pub fn strip_markup(text: &str) -> String {
    let without_tags = HTML_TAG.replace_all(text, "");
    MARKDOWN_NOISE.replace_all(&without_tags, "").into_owned()
}

fn floor_char_boundary(content: &str, mut index: usize) -> usize {
    if index >= content.len() {
        return content.len();
    }
    while !content.is_char_boundary(index) {
        index -= 1;
    }
    index
}
