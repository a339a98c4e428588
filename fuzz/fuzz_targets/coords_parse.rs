//! Fuzz target for `points` attribute parsing.
//!
//! Anything accepted must format back to a string that parses to the
//! same outline.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pagexml::page::{Coords, ParseReport};

fuzz_target!(|data: &[u8]| {
    let Ok(points) = std::str::from_utf8(data) else {
        return;
    };

    let mut report = ParseReport::new();
    if let Ok(coords) = Coords::parse_with_report(points, &mut report) {
        let reparsed = Coords::parse_with_report(&coords.to_string(), &mut report)
            .expect("formatted coords must parse");
        assert_eq!(reparsed, coords);
    }
});
