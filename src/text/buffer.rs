//! Line-addressable text buffer.
//!
//! This module provides [`LineBuffer`], an ordered list of trimmed lines
//! loaded from a [`LineSource`] and written back to it on [`save`].
//! Lines are located with [`Descriptor`]s and edited by splicing, so one
//! line can be replaced by any number of lines.
//!
//! [`save`]: LineBuffer::save

use crate::error::{Error, Result};
use crate::event::{LOADED_EVENT, LogLevel, SAVED_EVENT, emit_event, emit_log};
use crate::source::{FileSource, LineSource, RawLine};
use crate::text::descriptor::Descriptor;
use crate::text::replacement::Replacement;
use serde_json::json;
use std::path::Path;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '\n';

/// Configuration for a [`LineBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineBufferOptions {
    /// Character lines are split on at load and joined with at save.
    pub separator: char,
}

impl Default for LineBufferOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl LineBufferOptions {
    /// Use `separator` instead of a newline.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

/// Return the only item of `candidates`.
///
/// Fails with [`Error::NoMatch`] when empty and [`Error::AmbiguousMatch`]
/// when more than one item is present.
pub fn get_only<T>(candidates: impl IntoIterator<Item = T>) -> Result<T> {
    let mut iter = candidates.into_iter();
    let first = iter.next().ok_or(Error::NoMatch)?;
    let rest = iter.count();
    if rest > 0 {
        return Err(Error::AmbiguousMatch { count: rest + 1 });
    }
    Ok(first)
}

fn strip_line(text: &str) -> &str {
    text.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r'])
        .trim_end_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r', '\0'])
}

/// Ordered, editable lines backed by a [`LineSource`].
///
/// Line numbers given as descriptors are 1-based; negative numbers count
/// from the end (`-1` is the last line). Every line is stripped of
/// surrounding whitespace when loaded.
///
/// # Examples
///
/// ```
/// use lined::{LineBuffer, MemorySource};
///
/// let mut buffer = LineBuffer::from_source(MemorySource::from("A\nB\nC\n")).unwrap();
/// buffer.replace(1, "X\nY").unwrap();
/// assert_eq!(buffer.only(3).unwrap(), "B");
///
/// buffer.save().unwrap();
/// assert_eq!(buffer.source().as_str(), Some("X\nY\nB\nC\n"));
/// ```
#[derive(Debug)]
pub struct LineBuffer<S: LineSource> {
    source: S,
    lines: Vec<String>,
    trailing_terminator: bool,
    separator: char,
}

impl LineBuffer<FileSource> {
    /// Open the file at `path`, creating it if missing, and load its lines.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_source(FileSource::open(path)?)
    }
}

impl<S: LineSource> LineBuffer<S> {
    /// Load a buffer from `source` with default options.
    pub fn from_source(source: S) -> Result<Self> {
        Self::with_options(source, LineBufferOptions::default())
    }

    /// Load a buffer from `source`.
    pub fn with_options(mut source: S, options: LineBufferOptions) -> Result<Self> {
        let raw = source.load(options.separator)?;
        let trailing_terminator = raw.last().is_some_and(|line| line.terminated);
        let lines: Vec<String> = raw
            .iter()
            .map(|RawLine { text, .. }| strip_line(text).to_string())
            .collect();

        emit_log(
            LogLevel::Debug,
            &format!(
                "loaded {} lines (trailing terminator: {trailing_terminator})",
                lines.len()
            ),
        );
        emit_event(
            LOADED_EVENT,
            &json!({
                "lines": lines.len(),
                "trailing_terminator": trailing_terminator,
            })
            .to_string(),
        );

        Ok(Self {
            source,
            lines,
            trailing_terminator,
            separator: options.separator,
        })
    }

    /// All lines in document order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the source ended with the separator when it was loaded.
    #[must_use]
    pub fn has_trailing_terminator(&self) -> bool {
        self.trailing_terminator
    }

    /// The configured separator.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The backing source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the buffer, returning its source without saving.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Resolve a descriptor to positions.
    ///
    /// Positive line numbers map to zero-based positions. Negative line
    /// numbers are returned unchanged and still address lines from the end.
    /// Pattern and list descriptors may resolve to any number of positions,
    /// in resolution order.
    pub fn index(&self, descriptor: impl Into<Descriptor>) -> Result<Vec<i64>> {
        let mut positions = Vec::new();
        self.resolve_into(&descriptor.into(), &mut positions)?;
        Ok(positions)
    }

    /// Resolve a descriptor to 1-based line numbers.
    pub fn line_indices(&self, descriptor: impl Into<Descriptor>) -> Result<Vec<i64>> {
        Ok(self
            .index(descriptor)?
            .into_iter()
            .map(|position| position + 1)
            .collect())
    }

    fn resolve_into(&self, descriptor: &Descriptor, positions: &mut Vec<i64>) -> Result<()> {
        match descriptor {
            Descriptor::List(members) => {
                for member in members {
                    self.resolve_into(member, positions)?;
                }
            }
            Descriptor::Pattern(re) => positions.extend(
                self.lines
                    .iter()
                    .enumerate()
                    .filter(|(_, line)| re.is_match(line))
                    .map(|(i, _)| i as i64),
            ),
            Descriptor::Position(line) => positions.push(self.position_of(*line)?),
        }
        Ok(())
    }

    fn position_of(&self, line: i64) -> Result<i64> {
        let len = i64::try_from(self.lines.len()).unwrap_or(i64::MAX);
        if line > 0 && line <= len {
            Ok(line - 1)
        } else if line < 0 && line >= -len {
            Ok(line)
        } else {
            Err(Error::OutOfRange {
                line,
                len: self.lines.len(),
            })
        }
    }

    /// Index into `lines` for a resolved position.
    fn slot(&self, position: i64) -> usize {
        if position < 0 {
            (self.lines.len() as i64 + position) as usize
        } else {
            position as usize
        }
    }

    /// Lines addressed by `descriptor`, in resolution order.
    pub fn get(&self, descriptor: impl Into<Descriptor>) -> Result<Vec<&str>> {
        Ok(self
            .index(descriptor)?
            .into_iter()
            .map(|position| self.lines[self.slot(position)].as_str())
            .collect())
    }

    /// The single line addressed by `descriptor`.
    pub fn only(&self, descriptor: impl Into<Descriptor>) -> Result<&str> {
        get_only(self.get(descriptor)?)
    }

    /// The buffer's single line; fails unless it holds exactly one.
    pub fn only_line(&self) -> Result<&str> {
        get_only(self.lines.iter().map(String::as_str))
    }

    /// The first line, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Append a line. The text is stored as given, never split.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Prepend a line. The text is stored as given, never split.
    pub fn unshift(&mut self, line: impl Into<String>) {
        self.lines.insert(0, line.into());
    }

    /// Replace the single line addressed by `descriptor`.
    ///
    /// The replacement is spliced in place, so later lines shift by the
    /// number of replacement lines minus one.
    pub fn replace(
        &mut self,
        descriptor: impl Into<Descriptor>,
        replacement: impl Into<Replacement>,
    ) -> Result<()> {
        let replacement = replacement.into().into_lines(self.separator);
        let position = get_only(self.index(descriptor)?)?;
        let slot = self.slot(position);
        self.lines.splice(slot..=slot, replacement);
        Ok(())
    }

    /// Replace the buffer's single line; fails unless it holds exactly one.
    pub fn replace_only(&mut self, replacement: impl Into<Replacement>) -> Result<()> {
        let replacement = replacement.into().into_lines(self.separator);
        get_only(&self.lines)?;
        self.lines.splice(0..=0, replacement);
        Ok(())
    }

    /// The serialized content [`save`](Self::save) would write.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut sep = [0u8; 4];
        let sep: &str = self.separator.encode_utf8(&mut sep);
        let mut text = self.lines.join(sep);
        if self.trailing_terminator {
            text.push(self.separator);
        }
        text
    }

    /// Overwrite the backing source with the current lines.
    pub fn save(&mut self) -> Result<()> {
        let text = self.to_text();
        self.source.overwrite(&text)?;

        emit_log(
            LogLevel::Debug,
            &format!("saved {} lines ({} bytes)", self.lines.len(), text.len()),
        );
        emit_event(
            SAVED_EVENT,
            &json!({
                "lines": self.lines.len(),
                "bytes": text.len(),
                "trailing_terminator": self.trailing_terminator,
            })
            .to_string(),
        );
        Ok(())
    }
}

impl<S: LineSource> Extend<String> for LineBuffer<S> {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}
