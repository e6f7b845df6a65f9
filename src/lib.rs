//! `lined` - Line-addressable text buffers
//!
//! Load a text source as an ordered list of lines, locate lines by number,
//! pattern or list of both, edit them in place, and write the result back
//! while keeping the source's trailing terminator (or lack of one).

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Line positions fit in i64 and usize
#![allow(clippy::cast_sign_loss)] // Negative positions are rebased before casting
#![allow(clippy::cast_possible_wrap)] // Line counts never approach i64::MAX
#![allow(clippy::module_name_repetitions)] // Allow LineBuffer in text::buffer etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod error;
pub mod event;
pub mod source;
pub mod text;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    LOADED_EVENT, LogLevel, SAVED_EVENT, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use source::{FileSource, LineSource, MemorySource, RawLine, split_raw_lines};
pub use text::{Descriptor, LineBuffer, LineBufferOptions, Replacement, get_only};
