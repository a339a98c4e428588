//! Fuzz target for PAGE XML document parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the document parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pagexml::page::Page;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid excessive memory usage.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = Page::from_xml_slice(data);
});
