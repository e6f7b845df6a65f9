//! Fuzz target for loading and editing.
//!
//! Loads arbitrary text, resolves a fuzzed descriptor against it and saves.
//! Errors are fine; panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lined::{Descriptor, LineBuffer, MemorySource};

fuzz_target!(|input: (&str, &str, &str)| {
    let (text, descriptor, replacement) = input;
    let Ok(mut buffer) = LineBuffer::from_source(MemorySource::from(text)) else {
        return;
    };
    let Ok(descriptor) = Descriptor::parse(descriptor) else {
        return;
    };

    let _ = buffer.get(&descriptor);
    let _ = buffer.line_indices(&descriptor);
    let _ = buffer.replace(&descriptor, replacement);
    let expected = buffer.to_text();
    buffer.save().expect("in-memory save cannot fail");
    assert_eq!(buffer.source().as_str(), Some(expected.as_str()));
});
