//! Backing sources for line buffers.
//!
//! A [`LineBuffer`](crate::LineBuffer) never touches bytes directly. It asks
//! its [`LineSource`] for the raw lines once at construction and hands back
//! the full serialized text on save.
//!
//! Two sources ship with the crate:
//!
//! - [`FileSource`]: a file opened read/write, created when missing
//! - [`MemorySource`]: an owned byte buffer, handy for tests and strings

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

/// One line as read from a source, before any trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLine {
    /// Line text without the separator.
    pub text: String,
    /// Whether the separator followed this line in the source.
    pub terminated: bool,
}

impl RawLine {
    /// Create a raw line.
    #[must_use]
    pub fn new(text: impl Into<String>, terminated: bool) -> Self {
        Self {
            text: text.into(),
            terminated,
        }
    }
}

/// Storage a line buffer loads from and saves to.
pub trait LineSource {
    /// Read the entire content, split on `separator`.
    fn load(&mut self, separator: char) -> io::Result<Vec<RawLine>>;

    /// Replace the entire content with `content`.
    fn overwrite(&mut self, content: &str) -> io::Result<()>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn load(&mut self, separator: char) -> io::Result<Vec<RawLine>> {
        (**self).load(separator)
    }

    fn overwrite(&mut self, content: &str) -> io::Result<()> {
        (**self).overwrite(content)
    }
}

/// Split text into raw lines on `separator`.
///
/// Every piece except possibly the last is terminated. Empty text yields no
/// lines at all, and text ending in the separator yields no empty final line.
#[must_use]
pub fn split_raw_lines(text: &str, separator: char) -> Vec<RawLine> {
    text.split_inclusive(separator)
        .map(|piece| match piece.strip_suffix(separator) {
            Some(body) => RawLine::new(body, true),
            None => RawLine::new(piece, false),
        })
        .collect()
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// A file opened for reading and writing.
#[derive(Debug)]
pub struct FileSource {
    file: File,
    path: PathBuf,
}

impl FileSource {
    /// Open `path` for reading and writing, creating it if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        Ok(Self { file, path })
    }

    /// Path this source was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Give back the underlying file handle.
    #[must_use]
    pub fn into_file(self) -> File {
        self.file
    }
}

impl LineSource for FileSource {
    fn load(&mut self, separator: char) -> io::Result<Vec<RawLine>> {
        self.file.rewind()?;
        let mut bytes = Vec::new();
        self.file.read_to_end(&mut bytes)?;
        Ok(split_raw_lines(&decode(bytes)?, separator))
    }

    fn overwrite(&mut self, content: &str) -> io::Result<()> {
        self.file.rewind()?;
        self.file.set_len(0)?;
        self.file.write_all(content.as_bytes())?;
        self.file.flush()
    }
}

/// An in-memory byte buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySource {
    data: Vec<u8>,
}

impl MemorySource {
    /// Create a source holding `data`.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Current bytes.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Current bytes as text, if they are valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Consume the source, returning its bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl From<&str> for MemorySource {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MemorySource {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl LineSource for MemorySource {
    fn load(&mut self, separator: char) -> io::Result<Vec<RawLine>> {
        Ok(split_raw_lines(&decode(self.data.clone())?, separator))
    }

    fn overwrite(&mut self, content: &str) -> io::Result<()> {
        self.data.clear();
        self.data.extend_from_slice(content.as_bytes());
        Ok(())
    }
}
