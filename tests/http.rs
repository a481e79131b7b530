//! Router tests driven in-process with `tower::ServiceExt::oneshot`
#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use bookshelf::library::Library;
use bookshelf::server::{self, page};
use bookshelf::tree::FsTree;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("books");
    server::router(Arc::new(Library::new(FsTree::new(root))))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, location, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_lists_books() {
    let (status, _, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<a href=\"/book/book-one/\">Book One</a>"));
    assert!(body.contains("<a href=\"/book/rust-notes/\">Rust Notes</a>"));
}

#[tokio::test]
async fn test_book_directory_page() {
    let (status, _, body) = get("/book/book-one/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Book One</title>"));
    assert!(body.contains("<p>Hello World</p>"));
    assert!(body.contains("<a href=\"chapter-one/\">chapter-one</a>"));
    assert!(body.contains("<a href=\"volume-two/\">volume-two</a>"));
}

#[tokio::test]
async fn test_chapter_page() {
    let (status, _, body) = get("/book/book-one/chapter-one/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Book One / Chapter One</title>"));
    assert!(body.contains("Learning Go"));
}

#[tokio::test]
async fn test_nested_volume_page() {
    let (status, _, body) = get("/book/book-one/volume-two/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Volume Two</h1>"));
    assert!(body.contains("<a href=\"closures/\">closures</a>"));
}

#[tokio::test]
async fn test_folder_index_served_raw() {
    let (status, _, body) = get("/book/rust-notes/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<div class=\"intro\">Curated <em>notes</em> on Rust</div>"));
}

#[tokio::test]
async fn test_ghost_book_is_not_found() {
    let (status, _, body) = get("/book/ghost-book/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains(page::NOT_FOUND_TITLE));
    assert!(body.contains(page::NOT_FOUND_BODY));
}

#[tokio::test]
async fn test_non_markdown_file_is_not_found() {
    let (status, _, _) = get("/book/rust-notes/scratch.txt/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_traversal_is_not_found() {
    let (status, _, body) = get("/book/book-one/../rust-notes/ownership/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("Ownership"));
}

#[tokio::test]
async fn test_missing_trailing_slash_redirects() {
    let (status, location, _) = get("/book/book-one/chapter-one").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location.as_deref(), Some("/book/book-one/chapter-one/"));

    let (status, location, _) = get("/book/book-one").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location.as_deref(), Some("/book/book-one/"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _, body) = get("/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains(page::NOT_FOUND_BODY));
}

#[tokio::test]
async fn test_search_results() {
    let (status, _, body) = get("/search?q=go").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2 result(s) for <strong>go</strong>"));
    assert!(body.contains("<a href=\"/book/book-one/chapter-one/\">"));
    assert!(body.contains("<a href=\"/book/book-one/chapter-two/\">"));
}

#[tokio::test]
async fn test_search_snippet_is_escaped() {
    let (status, _, body) = get("/search?q=see").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("See the docs  it is fine."));
    assert!(!body.contains("example.com"));
}

#[tokio::test]
async fn test_repeated_query_uses_last_value() {
    let (status, _, body) = get("/search?q=alpha&q=ownership").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 result(s) for <strong>ownership</strong>"));
    assert!(body.contains("<a href=\"/book/rust-notes/ownership/\">"));
}

#[tokio::test]
async fn test_empty_search() {
    let (status, _, body) = get("/search").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<ul class=\"results\">\n</ul>"));

    let (status, _, body) = get("/search?q=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("result(s)"));
}
