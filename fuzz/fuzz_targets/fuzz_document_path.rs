#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Component;

fuzz_target!(|data: &str| {
    // Whatever parses must stay inside the tree root
    if let Ok(path) = bookshelf::tree::DocumentPath::parse(data) {
        let relative = path.to_relative_path();
        assert!(relative
            .components()
            .all(|c| matches!(c, Component::Normal(_))));
    }
});
