//! Joining collections into a single string.

use std::fmt::Display;

/// Separator, prefix and postfix used when joining items.
///
/// # Examples
///
/// ```
/// use tally::JoinFormat;
///
/// let format = JoinFormat::default().with_separator("; ").with_prefix("(").with_postfix(")");
/// assert_eq!(format.join([1, 7, 53]), "(1; 7; 53)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinFormat {
    pub separator: String,
    pub prefix: String,
    pub postfix: String,
}

impl Default for JoinFormat {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: String::new(),
            postfix: String::new(),
        }
    }
}

impl JoinFormat {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// Joins `items` in iteration order.
    ///
    /// Empty input yields just the prefix followed by the postfix.
    pub fn join<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut result = self.prefix.clone();
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                result.push_str(&self.separator);
            }
            result.push_str(&item.to_string());
        }
        result.push_str(&self.postfix);
        result
    }
}

/// Joins items with `", "` and no prefix or postfix.
pub fn join_to_string<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    JoinFormat::default().join(items)
}
