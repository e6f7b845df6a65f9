//! Line storage, addressing and editing.
//!
//! Key types:
//!
//! - [`LineBuffer`]: ordered lines loaded from and saved to a source
//! - [`Descriptor`]: line numbers, patterns, or lists of both
//! - [`Replacement`]: text or lines to splice over a located line
//!
//! # Examples
//!
//! ## Locating Lines
//!
//! ```
//! use lined::{Descriptor, LineBuffer, MemorySource};
//!
//! let buffer = LineBuffer::from_source(MemorySource::from("fn a\nlet b\nfn c")).unwrap();
//!
//! let descriptor: Descriptor = "2,/^fn/".parse().unwrap();
//! assert_eq!(buffer.line_indices(descriptor).unwrap(), vec![2, 1, 3]);
//! assert_eq!(buffer.get(-1).unwrap(), vec!["fn c"]);
//! ```
//!
//! ## Editing and Saving
//!
//! ```
//! use lined::{Error, LineBuffer, MemorySource};
//! use regex::Regex;
//!
//! let mut buffer = LineBuffer::from_source(MemorySource::from("A\nB\n")).unwrap();
//! buffer.push("C");
//!
//! let any = Regex::new(".").unwrap();
//! assert!(matches!(
//!     buffer.replace(any, "Z"),
//!     Err(Error::AmbiguousMatch { count: 3 })
//! ));
//!
//! buffer.replace(2, vec!["B1", "B2"]).unwrap();
//! buffer.save().unwrap();
//! assert_eq!(buffer.source().as_str(), Some("A\nB1\nB2\nC\n"));
//! ```

mod buffer;
mod descriptor;
mod replacement;

pub use buffer::{DEFAULT_SEPARATOR, LineBuffer, LineBufferOptions, get_only};
pub use descriptor::Descriptor;
pub use replacement::Replacement;
