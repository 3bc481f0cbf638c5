//! Value replacement hook.
//!
//! Every scalar the stringifier emits (text content, attribute values and
//! comments) is escaped first and then handed to a [`Replacer`], which may
//! rewrite it. The default [`Identity`] replacer returns the escaped value
//! unchanged.
//!
//! Closures with the right signature are replacers:
//!
//! ```rust
//! use xml_stringify::{Document, Node, Options, ReplaceEvent, ReplaceKey, Result, to_string_with};
//!
//! let options = Options::new().with_replacer(|event: ReplaceEvent<'_>| -> Result<String> {
//!     Ok(match event.key {
//!         ReplaceKey::Text => event.value.to_uppercase(),
//!         _ => event.value.into_owned(),
//!     })
//! });
//!
//! let doc = Document::new("greeting", Node::text_only("hello"));
//! assert_eq!(to_string_with(&doc, &options).unwrap(), "<greeting>HELLO</greeting>");
//! ```

use crate::error::Result;
use crate::model::Attribute;
use std::borrow::Cow;

/// What kind of value is being replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceKey<'a> {
    /// Text content of the tag.
    Text,
    /// One comment of the tag.
    Comment,
    /// An attribute, by name without prefix.
    Attribute(&'a str),
}

/// A value about to be written.
#[derive(Debug, Clone)]
pub struct ReplaceEvent<'a> {
    /// Role of the value.
    pub key: ReplaceKey<'a>,
    /// Name of the owning tag. Empty for the top-level node; `prolog` for
    /// the XML declaration.
    pub tag: &'a str,
    /// The tag's own attributes, set only when replacing text content.
    pub properties: Option<&'a [Attribute]>,
    /// The escaped value.
    pub value: Cow<'a, str>,
}

impl<'a> ReplaceEvent<'a> {
    /// Looks up the raw value of one of the tag's attributes.
    pub fn property(&self, name: &str) -> Option<&'a Attribute> {
        self.properties?.iter().find(|attribute| attribute.name == name)
    }
}

/// Post-escape transform applied to each emitted value.
pub trait Replacer: Send + Sync {
    /// Returns the text to emit for `event`. An error aborts the whole call.
    fn replace(&self, event: ReplaceEvent<'_>) -> Result<String>;
}

impl<F> Replacer for F
where
    F: Fn(ReplaceEvent<'_>) -> Result<String> + Send + Sync,
{
    fn replace(&self, event: ReplaceEvent<'_>) -> Result<String> {
        self(event)
    }
}

/// The default replacer: emits the escaped value as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Replacer for Identity {
    #[inline]
    fn replace(&self, event: ReplaceEvent<'_>) -> Result<String> {
        Ok(event.value.into_owned())
    }
}
