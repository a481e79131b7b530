//! Minimal built-in HTML pages

use crate::render::title::humanize;
use crate::render::{PageKind, RenderedPage};
use crate::search::SearchResult;
use htmlescape::encode_minimal;
use std::fmt::Write;

pub const NOT_FOUND_TITLE: &str = "Page Not Found";
pub const NOT_FOUND_BODY: &str = "<p>Page not found.</p>";

/// Wrap `body` (trusted HTML) in the page skeleton.
///
/// `encode_minimal` also escapes quotes, so it is safe inside attributes.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <form action=\"/search\" method=\"get\" style=\"display:inline\">\
         <input type=\"search\" name=\"q\"><button type=\"submit\">Search</button></form></nav>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = encode_minimal(title),
        body = body,
    )
}

/// Home page listing every book
pub fn home(books: &[String]) -> String {
    let mut body = String::from("<ul class=\"books\">\n");
    for book in books {
        let _ = writeln!(
            body,
            "<li><a href=\"/book/{}/\">{}</a></li>",
            encode_minimal(book),
            encode_minimal(&humanize(book)),
        );
    }
    body.push_str("</ul>");
    layout("Home", &body)
}

/// A document or directory page. Links to volumes and chapters are relative
/// to the current, slash-terminated URL.
pub fn book_page(page: &RenderedPage) -> String {
    let mut body = format!("<article>\n{}\n</article>\n", page.body);

    if page.kind == PageKind::Directory {
        push_listing(&mut body, "volumes", "Volumes", &page.volumes);
        push_listing(&mut body, "chapters", "Chapters", &page.chapters);
    }

    layout(&page.title, &body)
}

fn push_listing(body: &mut String, class: &str, heading: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    let _ = writeln!(body, "<h2>{}</h2>\n<ul class=\"{}\">", heading, class);
    for name in names {
        let _ = writeln!(
            body,
            "<li><a href=\"{}/\">{}</a></li>",
            encode_minimal(name),
            encode_minimal(name)
        );
    }
    body.push_str("</ul>\n");
}

/// Search results page. Snippets are already escaped.
pub fn search_results(query: &str, results: &[SearchResult]) -> String {
    let mut body = String::new();

    if !query.is_empty() {
        let _ = writeln!(
            body,
            "<p>{} result(s) for <strong>{}</strong></p>",
            results.len(),
            encode_minimal(query)
        );
    }

    body.push_str("<ul class=\"results\">\n");
    for result in results {
        let _ = writeln!(
            body,
            "<li><a href=\"{}\">{}</a> <small>{}</small><p>{}</p></li>",
            encode_minimal(&result.url),
            encode_minimal(&format!("{} / {}", result.book, result.volume)),
            encode_minimal(&result.relative_path),
            result.snippet,
        );
    }
    body.push_str("</ul>");

    layout("Search", &body)
}

pub fn not_found() -> String {
    layout(NOT_FOUND_TITLE, NOT_FOUND_BODY)
}

pub fn server_error() -> String {
    layout("Server Error", "<p>The page could not be rendered.</p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("<b>x</b>", "<p>raw</p>");
        assert!(html.contains("<title>&lt;b&gt;x&lt;/b&gt;</title>"));
        assert!(html.contains("<p>raw</p>"));
    }

    #[test]
    fn test_home_links_books() {
        let html = home(&["book-one".to_string()]);
        assert!(html.contains("<a href=\"/book/book-one/\">Book One</a>"));
    }

    #[test]
    fn test_directory_page_lists_children() {
        let page = RenderedPage {
            title: "Book One".to_string(),
            body: "<p>Hello World</p>".to_string(),
            kind: PageKind::Directory,
            book: "book-one".to_string(),
            subpath: None,
            volumes: vec!["volume-a".to_string()],
            chapters: vec!["chapter-one".to_string()],
        };
        let html = book_page(&page);
        assert!(html.contains("<p>Hello World</p>"));
        assert!(html.contains("<h2>Volumes</h2>"));
        assert!(html.contains("<a href=\"volume-a/\">volume-a</a>"));
        assert!(html.contains("<a href=\"chapter-one/\">chapter-one</a>"));
    }

    #[test]
    fn test_file_page_has_no_listing() {
        let page = RenderedPage {
            title: "Book One / Chapter One".to_string(),
            body: "<p>Learning Go</p>".to_string(),
            kind: PageKind::File,
            book: "book-one".to_string(),
            subpath: Some("chapter-one".to_string()),
            volumes: vec![],
            chapters: vec![],
        };
        let html = book_page(&page);
        assert!(html.contains("<p>Learning Go</p>"));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn test_search_results_escape_query() {
        let html = search_results("<script>", &[]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<strong><script>"));
    }

    #[test]
    fn test_not_found() {
        let html = not_found();
        assert!(html.contains("<h1>Page Not Found</h1>"));
        assert!(html.contains(NOT_FOUND_BODY));
    }
}
