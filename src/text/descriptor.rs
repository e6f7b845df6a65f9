//! Line descriptors.
//!
//! A [`Descriptor`] names one or more lines of a buffer: a 1-based line
//! number (negative numbers count from the end), a regular expression, or a
//! list of other descriptors.
//!
//! Descriptors can also be written as text:
//!
//! | Text            | Descriptor                          |
//! |-----------------|-------------------------------------|
//! | `3`, `-1`       | `Position`                          |
//! | `/^fn /`        | `Pattern` (`\/` stands for `/`)     |
//! | `2,/todo/,-1`   | `List` of the comma-separated parts |

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Identifies one or more lines of a buffer.
#[derive(Clone, Debug)]
pub enum Descriptor {
    /// Resolve each member in order and concatenate the results.
    List(Vec<Descriptor>),
    /// Every line the pattern matches, in document order.
    Pattern(Regex),
    /// A 1-based line number, or a negative offset from the end.
    Position(i64),
}

impl Descriptor {
    /// Compile `pattern` into a pattern descriptor.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| Error::InvalidDescriptor(e.to_string()))
    }

    /// Build a list descriptor.
    pub fn list<I, D>(members: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Self>,
    {
        Self::List(members.into_iter().map(Into::into).collect())
    }

    /// Parse the textual descriptor form.
    pub fn parse(input: &str) -> Result<Self> {
        let mut members = split_members(input)?
            .into_iter()
            .map(parse_member)
            .collect::<Result<Vec<_>>>()?;

        if members.len() == 1 {
            Ok(members.remove(0))
        } else {
            Ok(Self::List(members))
        }
    }
}

/// Split on commas that are not inside a `/.../` pattern.
fn split_members(input: &str) -> Result<Vec<&str>> {
    let mut members = Vec::new();
    let mut start = 0;
    let mut in_pattern = false;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_pattern => escaped = true,
            '/' => in_pattern = !in_pattern,
            ',' if !in_pattern => {
                members.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if in_pattern {
        return Err(Error::InvalidDescriptor(format!(
            "unterminated pattern in `{input}`"
        )));
    }
    members.push(&input[start..]);
    Ok(members)
}

fn parse_member(member: &str) -> Result<Descriptor> {
    let member = member.trim();
    if member.is_empty() {
        return Err(Error::InvalidDescriptor("empty descriptor".to_string()));
    }

    if let Some(rest) = member.strip_prefix('/') {
        let Some(body) = rest.strip_suffix('/') else {
            return Err(Error::InvalidDescriptor(format!(
                "unexpected text after pattern in `{member}`"
            )));
        };
        return Descriptor::pattern(&unescape_slashes(body));
    }

    member.parse::<i64>().map(Descriptor::Position).map_err(|_| {
        Error::InvalidDescriptor(format!(
            "expected a line number or /pattern/, got `{member}`"
        ))
    })
}

fn unescape_slashes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('/') => out.push('/'),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape each `/` that does not already follow an escaping backslash.
fn escape_slashes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for c in pattern.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '/' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl FromStr for Descriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Prints the textual form accepted by [`Descriptor::parse`].
///
/// An empty `List` prints as an empty string, which has no textual form and
/// does not parse back.
impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(line) => write!(f, "{line}"),
            Self::Pattern(re) => write!(f, "/{}/", escape_slashes(re.as_str())),
            Self::List(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for Descriptor {
    fn from(line: i64) -> Self {
        Self::Position(line)
    }
}

impl From<i32> for Descriptor {
    fn from(line: i32) -> Self {
        Self::Position(i64::from(line))
    }
}

impl From<Regex> for Descriptor {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl From<&Regex> for Descriptor {
    fn from(re: &Regex) -> Self {
        Self::Pattern(re.clone())
    }
}

impl From<Vec<Descriptor>> for Descriptor {
    fn from(members: Vec<Descriptor>) -> Self {
        Self::List(members)
    }
}

impl From<&Descriptor> for Descriptor {
    fn from(descriptor: &Descriptor) -> Self {
        descriptor.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert!(matches!(Descriptor::parse("3").unwrap(), Descriptor::Position(3)));
        assert!(matches!(Descriptor::parse(" -1 ").unwrap(), Descriptor::Position(-1)));
        assert!(matches!(Descriptor::parse("+2").unwrap(), Descriptor::Position(2)));
    }

    #[test]
    fn test_parse_pattern() {
        let Descriptor::Pattern(re) = Descriptor::parse("/^fn /").unwrap() else {
            panic!("expected pattern");
        };
        assert_eq!(re.as_str(), "^fn ");
    }

    #[test]
    fn test_parse_pattern_with_escaped_slash_and_comma() {
        let Descriptor::Pattern(re) = Descriptor::parse(r"/a\/b,c/").unwrap() else {
            panic!("expected pattern");
        };
        assert_eq!(re.as_str(), "a/b,c");
        assert!(re.is_match("xa/b,c"));
    }

    #[test]
    fn test_parse_keeps_regex_escapes() {
        let Descriptor::Pattern(re) = Descriptor::parse(r"/\d+/").unwrap() else {
            panic!("expected pattern");
        };
        assert_eq!(re.as_str(), r"\d+");
    }

    #[test]
    fn test_parse_list() {
        let Descriptor::List(members) = Descriptor::parse("2,/foo/,-1").unwrap() else {
            panic!("expected list");
        };
        assert_eq!(members.len(), 3);
        assert!(matches!(members[0], Descriptor::Position(2)));
        assert!(matches!(members[1], Descriptor::Pattern(_)));
        assert!(matches!(members[2], Descriptor::Position(-1)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", " ", "abc", "1,,2", "/open", "/a/x", "1.5", "/(/"] {
            let err = Descriptor::parse(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidDescriptor(_)),
                "`{input}` should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trips_text() {
        for input in ["3", "-1", "/foo/", r"/a\/b/", "2,/x/,-4"] {
            let descriptor: Descriptor = input.parse().unwrap();
            assert_eq!(descriptor.to_string(), input);
        }
    }

    #[test]
    fn test_display_of_built_pattern_parses_back() {
        for pattern in [r"[\/]", "a/b", r"\\/", "x/y/z"] {
            let built = Descriptor::pattern(pattern).unwrap();
            let printed = built.to_string();
            let Descriptor::Pattern(reparsed) = printed.parse::<Descriptor>().unwrap() else {
                panic!("expected pattern from `{printed}`");
            };
            let Descriptor::Pattern(original) = &built else {
                unreachable!();
            };
            assert_eq!(Descriptor::Pattern(reparsed.clone()).to_string(), printed);
            for sample in ["/", "a/b", "x/y/z", "\\/"] {
                assert_eq!(reparsed.is_match(sample), original.is_match(sample));
            }
        }
    }

    #[test]
    fn test_escape_slashes_keeps_existing_escapes() {
        assert_eq!(escape_slashes(r"[\/]"), r"[\/]");
        assert_eq!(escape_slashes("a/b"), r"a\/b");
        assert_eq!(escape_slashes(r"\\/"), r"\\\/");
    }

    #[test]
    fn test_empty_list_prints_empty_and_does_not_parse() {
        let empty = Descriptor::List(Vec::new());
        assert_eq!(empty.to_string(), "");
        assert!(matches!(
            empty.to_string().parse::<Descriptor>(),
            Err(Error::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn test_list_builder() {
        let descriptor = Descriptor::list([1, 2, -1]);
        assert_eq!(descriptor.to_string(), "1,2,-1");
    }
}
