//! Small string helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Returns the last character of `s`, or `None` if it is empty.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Splits `s` on any of the given delimiter characters.
///
/// Empty fields between adjacent delimiters are kept.
///
/// ```
/// assert_eq!(tally::text::split_any("12.345-6.A", &['.', '-']), ["12", "345", "6", "A"]);
/// ```
pub fn split_any<'a>(s: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    s.split(delimiters).collect()
}

/// Returns the part of an email address before the first `@`.
///
/// Input without an `@` is returned whole.
pub fn nickname_from_email(email: &str) -> &str {
    email.split_once('@').map_or(email, |(nickname, _)| nickname)
}

/// `<directory>/<filename>.<extension>`, each part non-empty and on one line.
static PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)/(.+)\.(.+)$").expect("path pattern is valid"));

/// A path split into directory, file name and extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParts<'a> {
    pub directory: &'a str,
    pub filename: &'a str,
    pub extension: &'a str,
}

impl<'a> PathParts<'a> {
    /// Parses `<directory>/<filename>.<extension>`.
    ///
    /// The whole input must match. Earlier parts are greedy but give way so
    /// that all three parts stay non-empty, and no part may span a newline.
    ///
    /// ```
    /// use tally::text::PathParts;
    ///
    /// let parts = PathParts::parse("/home/projects/notes/chapter3.md").unwrap();
    /// assert_eq!(parts.directory, "/home/projects/notes");
    /// assert_eq!(parts.filename, "chapter3");
    /// assert_eq!(parts.extension, "md");
    /// ```
    pub fn parse(path: &'a str) -> Option<Self> {
        let captures = PATH_PATTERN.captures(path)?;

        Some(Self {
            directory: captures.get(1)?.as_str(),
            filename: captures.get(2)?.as_str(),
            extension: captures.get(3)?.as_str(),
        })
    }
}
