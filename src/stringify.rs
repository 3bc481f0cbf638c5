//! XML stringifier.
//!
//! This module turns a [`Document`] into indented XML text.
//!
//! ## Layout rules
//!
//! - Elements without text, comments or children self-close, whatever
//!   their attributes: `<item id="1"/>`.
//! - Single-line text shares the line with its tags: `<name>text</name>`.
//! - Multi-line text is block-indented between tags on their own lines.
//! - Content is always written as text, then comments, then children.
//!
//! ```rust
//! use xml_stringify::{Document, Node, Options, Stringifier};
//!
//! let doc = Document::new(
//!     "root",
//!     Node::new().with_children("child", [Node::text_only(1), Node::text_only(2)]),
//! );
//!
//! let stringifier = Stringifier::new(Options::new().with_indent_size(4));
//! assert_eq!(
//!     stringifier.stringify(&doc).unwrap(),
//!     "<root>\n    <child>1</child>\n    <child>2</child>\n</root>"
//! );
//! ```

use crate::error::Result;
use crate::LOG_TARGET;
use crate::escape::{escape, quote};
use crate::model::{Attribute, Child, Document, Node, NodeView, Scalar};
use crate::options::Options;
use crate::replace::{ReplaceEvent, ReplaceKey};
use crate::writer::XmlWriter;
use std::borrow::Cow;
use std::fmt;
use std::io::Write;


/// Stringifies a document with the default options.
///
/// # Example
///
/// ```
/// use xml_stringify::{to_string, Document, Node};
///
/// let doc = Document::new("empty", Node::new());
/// assert_eq!(to_string(&doc).unwrap(), "<empty/>");
/// ```
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with(document, &Options::default())
}

/// Stringifies a document with the given options.
pub fn to_string_with(document: &Document, options: &Options) -> Result<String> {
    Emitter::new(options).run(document)
}

/// Stringifies a document to bytes.
pub fn to_vec(document: &Document) -> Result<Vec<u8>> {
    Ok(to_string(document)?.into_bytes())
}

/// Stringifies a document to a writer.
///
/// The whole result is built in memory before being written.
pub fn to_writer<W>(writer: W, document: &Document) -> Result<()>
where
    W: Write,
{
    let xml = to_string(document)?;
    let mut writer = writer;
    writer.write_all(xml.as_bytes())?;
    Ok(())
}

/// The XML stringifier.
///
/// Holds the options only; every call to [`stringify`](Self::stringify)
/// works on its own buffer, so one stringifier can be reused and shared.
#[derive(Debug, Default)]
pub struct Stringifier {
    options: Options,
}

impl Stringifier {
    /// Creates a new stringifier.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Stringifies a document.
    pub fn stringify(&self, document: &Document) -> Result<String> {
        Emitter::new(&self.options).run(document)
    }

    /// Stringifies a document to a writer.
    pub fn to_writer<W: Write>(&self, mut writer: W, document: &Document) -> Result<()> {
        let xml = self.stringify(document)?;
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }
}

/// Per-call traversal state: the output buffer and the path of open tags.
struct Emitter<'o, 'd> {
    options: &'o Options,
    out: XmlWriter,
    path: Vec<&'d str>,
}

impl<'o, 'd> Emitter<'o, 'd> {
    fn new(options: &'o Options) -> Self {
        Self {
            options,
            out: XmlWriter::new(options.indent_size()),
            path: Vec::new(),
        }
    }

    fn run(mut self, document: &'d Document) -> Result<String> {
        if let Some(prolog) = &document.prolog {
            self.prolog(prolog)?;
        }
        if let Some(doctype) = &document.doctype {
            self.doctype(doctype);
        }

        self.tag("", NodeView::from(&document.node))?;

        Ok(self.out.finish())
    }

    fn trace(&self, message: fmt::Arguments<'_>) {
        if !self.options.debug() {
            return;
        }
        if self.path.is_empty() {
            log::debug!(target: LOG_TARGET, "{}", message);
        } else {
            log::debug!(target: LOG_TARGET, "{} | {}", self.path.join(" > "), message);
        }
    }

    /// `<?xml version="1.0"?>`
    fn prolog(&mut self, prolog: &'d Node) -> Result<()> {
        self.trace(format_args!("writing prolog"));
        let attributes = self.attributes("prolog", &prolog.attributes)?;
        self.out.write_line(&format!("<?xml{}?>", attributes));
        Ok(())
    }

    /// `<!DOCTYPE tokens>`, with an element declaration block when the
    /// doctype node has children.
    fn doctype(&mut self, doctype: &'d Node) {
        self.trace(format_args!("writing doctype"));
        let has_elements = doctype
            .children
            .iter()
            .any(|(_, child)| matches!(child, Child::Leaf(_)));

        self.out.write(&format!("<!DOCTYPE{}", properties(&doctype.attributes)), has_elements, true);

        if has_elements {
            self.out.down();
            self.out.write_line("[");
            self.out.down();
            for (name, child) in &doctype.children {
                let raw = match child {
                    Child::Leaf(value) => value.to_text(),
                    _ => {
                        self.trace(format_args!("skipping non-scalar doctype element {}", name));
                        continue;
                    }
                };
                self.trace(format_args!("writing doctype element {}", name));
                self.out.write_line(&format!("<!ELEMENT {} ({})>", quote(name, true), raw));
            }
            self.out.up();
            self.out.write_line("]");
            self.out.up();
        }

        self.out.write_line(">");
    }

    /// Writes one element and, recursively, its content. An empty `name`
    /// writes the content only.
    fn tag(&mut self, name: &'d str, node: NodeView<'d>) -> Result<()> {
        if !name.is_empty() {
            self.trace(format_args!("writing tag {}", name));
        }

        let self_closing = node.is_self_closing();
        if !name.is_empty() {
            let attributes = self.attributes(name, node.attributes)?;
            let close = if self_closing { "/" } else { "" };
            self.out.write_line(&format!("<{}{}{}>", name, attributes, close));
            self.out.down();
        }

        if let Some(progress) = self.options.progress() {
            progress(self.out.len());
        }

        let mut inline = false;
        if !self_closing {
            if let Some(text) = node.text {
                inline = self.text(text, name, node.attributes)?;
                if inline && !(node.comments.is_empty() && node.children.is_empty()) {
                    self.out.break_line();
                    inline = false;
                }
            }

            if !node.comments.is_empty() {
                self.trace(format_args!("writing {} comments", node.comments.len()));
                for comment in node.comments {
                    self.comment(comment, name)?;
                }
            }

            if !node.children.is_empty() {
                self.trace(format_args!("writing {} children", node.children.len()));
                for (child_name, child) in node.children {
                    self.child(child_name, child)?;
                }
            }
        }

        if !name.is_empty() {
            self.out.up();
            if !self_closing {
                self.out.write(&format!("</{}>", name), true, !inline);
            }
        }

        Ok(())
    }

    fn child(&mut self, name: &'d str, child: &'d Child) -> Result<()> {
        match child {
            Child::Repeated(items) => {
                for item in items {
                    self.child(name, item)?;
                }
                Ok(())
            }
            Child::Element(node) => self.nested(name, NodeView::from(node)),
            Child::Leaf(value) => self.nested(name, NodeView::leaf(value)),
        }
    }

    fn nested(&mut self, name: &'d str, node: NodeView<'d>) -> Result<()> {
        self.path.push(name);
        let result = self.tag(name, node);
        self.path.pop();
        result
    }

    /// Writes text content; returns true if it was written inline.
    fn text(&mut self, text: &'d Scalar, tag: &'d str, attributes: &'d [Attribute]) -> Result<bool> {
        self.trace(format_args!("writing text"));
        let replaced = self.replace(ReplaceKey::Text, text, tag, Some(attributes))?;

        let lines: Vec<&str> = replaced
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let inline = lines.len() <= 1;

        if inline {
            self.out.trim();
        }
        for line in lines {
            self.out.write(line.trim_start(), !inline, !inline);
        }

        Ok(inline)
    }

    fn comment(&mut self, comment: &'d str, tag: &'d str) -> Result<()> {
        let text = self.replace_text(ReplaceKey::Comment, Cow::Borrowed(comment), tag, None)?;
        self.out.write_line(&format!("<!-- {} -->", text));
        Ok(())
    }

    /// ` name="value"` pairs, each value replaced and quoted.
    fn attributes(&self, tag: &'d str, attributes: &'d [Attribute]) -> Result<String> {
        let mut out = String::new();
        for attribute in attributes {
            let value = self.replace(ReplaceKey::Attribute(&attribute.name), &attribute.value, tag, None)?;
            out.push(' ');
            out.push_str(&attribute.name);
            out.push('=');
            out.push_str(&quote(&value, false));
        }
        Ok(out)
    }

    fn replace<'a>(
        &self,
        key: ReplaceKey<'a>,
        value: &'a Scalar,
        tag: &'a str,
        properties: Option<&'a [Attribute]>,
    ) -> Result<String> {
        if value.is_null() && self.options.null_to_empty() {
            return self.options.replacer().replace(ReplaceEvent {
                key,
                tag,
                properties,
                value: Cow::Borrowed(""),
            });
        }
        self.replace_text(key, value.to_text(), tag, properties)
    }

    fn replace_text<'a>(
        &self,
        key: ReplaceKey<'a>,
        text: Cow<'a, str>,
        tag: &'a str,
        properties: Option<&'a [Attribute]>,
    ) -> Result<String> {
        let value = match text {
            Cow::Borrowed(s) => escape(s),
            Cow::Owned(s) => Cow::Owned(escape(&s).into_owned()),
        };
        self.options.replacer().replace(ReplaceEvent {
            key,
            tag,
            properties,
            value,
        })
    }
}

/// Bare or quoted tokens, one per attribute name.
fn properties(attributes: &[Attribute]) -> String {
    let mut out = String::new();
    for attribute in attributes {
        out.push(' ');
        out.push_str(&quote(&attribute.name, true));
    }
    out
}
