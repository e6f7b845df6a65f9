//! Fuzz target for textual descriptor parsing.
//!
//! Tests that Descriptor::parse handles arbitrary strings without panicking,
//! and that whatever it accepts prints back to text it accepts again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lined::Descriptor;

fuzz_target!(|data: &str| {
    let Ok(descriptor) = Descriptor::parse(data) else {
        return;
    };

    let printed = descriptor.to_string();
    let reparsed = Descriptor::parse(&printed).expect("printed descriptor should parse");
    assert_eq!(reparsed.to_string(), printed);
});
