//! Replacement values for [`LineBuffer::replace`](super::LineBuffer::replace).

/// New content for a replaced line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// Text that is split on the buffer's separator before splicing.
    Single(String),
    /// Lines used exactly as given, never split.
    Multiple(Vec<String>),
}

impl Replacement {
    /// Resolve into the lines to splice in.
    ///
    /// A `Single` value containing `separator` becomes one line per field.
    /// Trailing empty fields are dropped, so `"a\nb\n"` yields two lines and
    /// a bare separator yields none.
    #[must_use]
    pub fn into_lines(self, separator: char) -> Vec<String> {
        match self {
            Self::Single(text) if text.contains(separator) => {
                let mut lines: Vec<String> = text.split(separator).map(str::to_string).collect();
                while lines.last().is_some_and(String::is_empty) {
                    lines.pop();
                }
                lines
            }
            Self::Single(text) => vec![text],
            Self::Multiple(lines) => lines,
        }
    }
}

impl From<&str> for Replacement {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<String> for Replacement {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<&String> for Replacement {
    fn from(s: &String) -> Self {
        Self::Single(s.clone())
    }
}

impl From<Vec<String>> for Replacement {
    fn from(lines: Vec<String>) -> Self {
        Self::Multiple(lines)
    }
}

impl From<Vec<&str>> for Replacement {
    fn from(lines: Vec<&str>) -> Self {
        Self::Multiple(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Replacement {
    fn from(lines: &[&str]) -> Self {
        Self::Multiple(lines.iter().map(|s| (*s).to_string()).collect())
    }
}
