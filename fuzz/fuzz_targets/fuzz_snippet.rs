#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    content: &'a str,
    match_start: usize,
}

fuzz_target!(|input: Input| {
    // Offsets may land mid-character or past the end
    let snippet = bookshelf::search::build_snippet(input.content, input.match_start);
    assert!(snippet.ends_with("..."));
    assert!(!snippet.contains('<'));
});
