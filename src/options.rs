//! Stringifier configuration.

use crate::replace::{Identity, Replacer};
use std::fmt;

type Progress = Box<dyn Fn(usize) + Send + Sync>;

/// Options controlling the output of a [`Stringifier`](crate::Stringifier).
///
/// ```rust
/// use xml_stringify::Options;
///
/// let options = Options::new().with_indent_size(4).with_null_to_empty(false);
/// assert_eq!(options.indent_size(), 4);
/// ```
pub struct Options {
    indent_size: usize,
    debug: bool,
    null_to_empty: bool,
    progress: Option<Progress>,
    replacer: Box<dyn Replacer>,
}

impl Options {
    /// Creates the default options: two-space indentation, no tracing,
    /// null values written as empty strings, identity replacer.
    pub fn new() -> Self {
        Self {
            indent_size: 2,
            debug: false,
            null_to_empty: true,
            progress: None,
            replacer: Box::new(Identity),
        }
    }

    /// Sets the number of spaces per indentation level.
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Enables trace output through the `log` facade.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Chooses whether a null value is written as an empty string (the
    /// default) or as the text `null`.
    pub fn with_null_to_empty(mut self, null_to_empty: bool) -> Self {
        self.null_to_empty = null_to_empty;
        self
    }

    /// Registers a callback receiving the output length after each opening
    /// tag.
    pub fn with_progress<F>(mut self, progress: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Replaces the default identity replacer.
    pub fn with_replacer<R>(mut self, replacer: R) -> Self
    where
        R: Replacer + 'static,
    {
        self.replacer = Box::new(replacer);
        self
    }

    /// Spaces per indentation level.
    #[inline]
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Whether trace output is enabled.
    #[inline]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Whether null values become empty strings.
    #[inline]
    pub fn null_to_empty(&self) -> bool {
        self.null_to_empty
    }

    pub(crate) fn progress(&self) -> Option<&(dyn Fn(usize) + Send + Sync)> {
        self.progress.as_deref()
    }

    pub(crate) fn replacer(&self) -> &dyn Replacer {
        self.replacer.as_ref()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("indent_size", &self.indent_size)
            .field("debug", &self.debug)
            .field("null_to_empty", &self.null_to_empty)
            .field("progress", &self.progress.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::{ReplaceEvent, ReplaceKey};
    use std::borrow::Cow;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.indent_size(), 2);
        assert!(!options.debug());
        assert!(options.null_to_empty());
        assert!(options.progress().is_none());
    }

    #[test]
    fn test_builder() {
        let options = Options::new()
            .with_indent_size(0)
            .with_debug(true)
            .with_null_to_empty(false)
            .with_progress(|_| {});
        assert_eq!(options.indent_size(), 0);
        assert!(options.debug());
        assert!(!options.null_to_empty());
        assert!(options.progress().is_some());
    }

    #[test]
    fn test_custom_replacer_is_used() {
        let options = Options::new().with_replacer(|event: ReplaceEvent<'_>| -> crate::Result<String> {
            Ok(event.value.replace('a', "b"))
        });
        let event = ReplaceEvent {
            key: ReplaceKey::Text,
            tag: "t",
            properties: None,
            value: Cow::Borrowed("aa"),
        };
        assert_eq!(options.replacer().replace(event).unwrap(), "bb");
    }

    #[test]
    fn test_debug_format() {
        let rendered = format!("{:?}", Options::new());
        assert!(rendered.starts_with("Options { indent_size: 2"));
    }
}
