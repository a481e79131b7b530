//! Breadcrumb titles derived from document paths

/// Separator between breadcrumb parts
pub const TITLE_SEPARATOR: &str = " / ";

/// Build a breadcrumb title such as `Book One / Volume Two / Chapter Three`.
///
/// Only the path is used, never the document content.
pub fn build_title(book: &str, subpath: Option<&str>) -> String {
    let mut parts = vec![humanize(book)];

    if let Some(subpath) = subpath {
        parts.extend(
            subpath
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(humanize),
        );
    }

    parts.join(TITLE_SEPARATOR)
}

/// Hyphens to spaces, then title case
pub fn humanize(segment: &str) -> String {
    title_case(&segment.replace('-', " "))
}

/// Upper-case the first letter of each word and lower-case the rest.
/// A word starts at any letter that does not directly follow another letter.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for ch in text.chars() {
        if prev_is_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_is_letter = ch.is_alphabetic();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_only() {
        assert_eq!(build_title("book-one", None), "Book One");
    }

    #[test]
    fn test_with_subpath() {
        assert_eq!(
            build_title("book-one", Some("chapter-one")),
            "Book One / Chapter One"
        );
        assert_eq!(
            build_title("rust-notes", Some("volume-2/ownership-and-borrowing")),
            "Rust Notes / Volume 2 / Ownership And Borrowing"
        );
    }

    #[test]
    fn test_title_case_lowers_the_rest() {
        assert_eq!(title_case("hELLO wORLD"), "Hello World");
        assert_eq!(title_case("chapter.md"), "Chapter.Md");
        assert_eq!(title_case("2nd edition"), "2Nd Edition");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(humanize("élan-vital"), "Élan Vital");
    }

    #[test]
    fn test_trailing_slash_and_empty_subpath() {
        assert_eq!(build_title("book", Some("")), "Book");
        assert_eq!(build_title("book", Some("vol/")), "Book / Vol");
    }

    #[test]
    fn test_applying_twice_is_stable() {
        let once = build_title("my-book", Some("part-one"));
        let twice = title_case(&once);
        assert_eq!(once, twice);
    }
}
