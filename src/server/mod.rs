//! HTTP front end for browsing and searching the books tree.
//!
//! Routes:
//! - `/` - list of books
//! - `/book/{book}/` and `/book/{book}/{subpath...}/` - document and directory pages
//! - `/search?q=...` - full-text search
//!
//! Paths missing their trailing slash are redirected. Everything else gets
//! the not-found page.
//!
//! Rendering and searching touch the filesystem synchronously, so handlers run
//! them on the blocking pool.

pub mod page;

use crate::error::{LibraryError, LibraryResult};
use crate::library::Library;
use crate::tree::DocumentTree;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;

/// The `q` parameter of the search page. When it is repeated the last value
/// wins; when it is absent the query is empty.
fn search_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// Build the router over a shared library
pub fn router<T: DocumentTree + 'static>(library: Arc<Library<T>>) -> Router {
    Router::new()
        .route("/", get(home_handler::<T>))
        .route("/search", get(search_handler::<T>))
        .route("/book/{book}", get(add_trailing_slash))
        .route("/book/{book}/", get(book_root_handler::<T>))
        .route("/book/{book}/{*subpath}", get(book_page_handler::<T>))
        .fallback(fallback_handler)
        .with_state(library)
}

/// Bind to `bind` and serve until the process is stopped
pub async fn serve<T: DocumentTree + 'static>(library: Library<T>, bind: &str) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", bind))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("HTTP server listening on http://{}", addr);
    axum::serve(listener, router(Arc::new(library))).await?;

    Ok(())
}

/// Run blocking library work off the async executor
async fn run_blocking<T, R, F>(library: Arc<Library<T>>, work: F) -> Result<R, Response>
where
    T: DocumentTree + 'static,
    R: Send + 'static,
    F: FnOnce(&Library<T>) -> R + Send + 'static,
{
    tokio::task::spawn_blocking(move || work(library.as_ref()))
        .await
        .map_err(|e| {
            tracing::error!("blocking task failed: {}", e);
            server_error_response()
        })
}

async fn home_handler<T: DocumentTree + 'static>(
    State(library): State<Arc<Library<T>>>,
) -> Response {
    match run_blocking(library, |library| library.books()).await {
        Ok(Ok(books)) => Html(page::home(&books)).into_response(),
        Ok(Err(e)) => error_response(&e),
        Err(response) => response,
    }
}

async fn book_root_handler<T: DocumentTree + 'static>(
    State(library): State<Arc<Library<T>>>,
    Path(book): Path<String>,
) -> Response {
    render_response(library, book, None).await
}

async fn book_page_handler<T: DocumentTree + 'static>(
    State(library): State<Arc<Library<T>>>,
    Path((book, subpath)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    if !subpath.ends_with('/') {
        return add_trailing_slash(uri).await;
    }
    render_response(library, book, Some(subpath)).await
}

async fn render_response<T: DocumentTree + 'static>(
    library: Arc<Library<T>>,
    book: String,
    subpath: Option<String>,
) -> Response {
    let rendered: Result<LibraryResult<_>, Response> = run_blocking(library, move |library| {
        library.render(&book, subpath.as_deref())
    })
    .await;

    match rendered {
        Ok(Ok(page)) => Html(page::book_page(&page)).into_response(),
        Ok(Err(e)) => error_response(&e),
        Err(response) => response,
    }
}

async fn search_handler<T: DocumentTree + 'static>(
    State(library): State<Arc<Library<T>>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = search_query(&params);
    let search_query = query.clone();

    match run_blocking(library, move |library| library.search(&search_query)).await {
        Ok(results) => Html(page::search_results(&query, &results)).into_response(),
        Err(response) => response,
    }
}

/// Permanent redirect to the same path with `/` appended, keeping the query
async fn add_trailing_slash(uri: Uri) -> Response {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&target).into_response()
}

async fn fallback_handler() -> Response {
    not_found_response()
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, Html(page::not_found())).into_response()
}

fn server_error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(page::server_error())).into_response()
}

/// Not-found outcomes never reveal anything about the filesystem
fn error_response(e: &LibraryError) -> Response {
    if e.is_not_found() {
        tracing::debug!("not found: {}", e);
        not_found_response()
    } else {
        tracing::error!("request failed: {}", e);
        server_error_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_query_last_value_wins() {
        assert_eq!(search_query(&params(&[("q", "alpha"), ("q", " beta ")])), "beta");
    }

    #[test]
    fn test_search_query_missing() {
        assert_eq!(search_query(&[]), "");
        assert_eq!(search_query(&params(&[("page", "2")])), "");
    }
}
