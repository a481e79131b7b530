//! Markdown to HTML conversion

use pulldown_cmark::{Event, Options, Parser, html};

/// Converts markdown source into an HTML fragment
pub trait MarkdownConverter: Send + Sync {
    fn to_html(&self, source: &str) -> String;
}

/// pulldown-cmark based converter.
///
/// With `hard_breaks` on, every newline inside a paragraph becomes `<br />`
/// instead of collapsing into a space.
#[derive(Debug, Clone, Copy)]
pub struct CmarkConverter {
    pub hard_breaks: bool,
}

impl CmarkConverter {
    pub fn new(hard_breaks: bool) -> Self {
        Self { hard_breaks }
    }
}

impl Default for CmarkConverter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MarkdownConverter for CmarkConverter {
    fn to_html(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let mut opts = Options::empty();
        opts.insert(Options::ENABLE_STRIKETHROUGH);
        opts.insert(Options::ENABLE_TABLES);
        opts.insert(Options::ENABLE_FOOTNOTES);

        let hard_breaks = self.hard_breaks;
        let parser = Parser::new_ext(source, opts).map(move |event| match event {
            Event::SoftBreak if hard_breaks => Event::HardBreak,
            other => other,
        });

        let mut html_out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut html_out, parser);
        html_out
    }
}
