//! Terminal output for pages, search results and book listings

use crate::render::{PageKind, RenderedPage};
use crate::search::SearchResult;
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print search results to stdout
pub fn print_search_results(results: &[SearchResult], color: bool) -> io::Result<()> {
    write_search_results(&mut stdout(color), results)
}

/// Print a rendered page to stdout
pub fn print_page(page: &RenderedPage, color: bool) -> io::Result<()> {
    write_page(&mut stdout(color), page)
}

/// Print book names to stdout
pub fn print_books(books: &[String], color: bool) -> io::Result<()> {
    write_books(&mut stdout(color), books)
}

/// Write one block per result: path, URL, then the snippet
pub fn write_search_results<W: WriteColor>(out: &mut W, results: &[SearchResult]) -> io::Result<()> {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", result.relative_path)?;
        out.reset()?;
        write!(out, " ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(out, "{}", result.url)?;
        out.reset()?;

        // Snippets keep their newlines; indent continuation lines
        for line in result.snippet.lines() {
            writeln!(out, "  {}", line)?;
        }
    }

    Ok(())
}

/// Write the page title, the body, and for directories the listings
pub fn write_page<W: WriteColor>(out: &mut W, page: &RenderedPage) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    writeln!(out, "{}", page.title)?;
    out.reset()?;
    writeln!(out)?;

    write!(out, "{}", page.body)?;
    if !page.body.ends_with('\n') {
        writeln!(out)?;
    }

    if page.kind == PageKind::Directory {
        write_listing(out, "Volumes", &page.volumes)?;
        write_listing(out, "Chapters", &page.chapters)?;
    }

    Ok(())
}

fn write_listing<W: WriteColor>(out: &mut W, heading: &str, names: &[String]) -> io::Result<()> {
    if names.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(out, "{}:", heading)?;
    out.reset()?;
    for name in names {
        writeln!(out, "  - {}", name)?;
    }

    Ok(())
}

/// Write one book name per line
pub fn write_books<W: WriteColor>(out: &mut W, books: &[String]) -> io::Result<()> {
    for book in books {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        writeln!(out, "{}", book)?;
        out.reset()?;
    }
    Ok(())
}
