#![no_main]
use libfuzzer_sys::fuzz_target;
use zssml::{flatten_to_text, parse};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = parse(s) {
            let _ = flatten_to_text(&tree);
        }
    }
});
