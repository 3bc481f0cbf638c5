//! Typed object model.
//!
//! A [`Document`] is a tree of [`Node`]s. Each node carries its text
//! content, comments, attributes and children in separate, ordered fields,
//! so the stringifier never has to guess the role of a value.
//!
//! ```rust
//! use xml_stringify::{Document, Node};
//!
//! let doc = Document::new(
//!     "item",
//!     Node::new().with_attribute("id", "1").with_text("a & b"),
//! );
//! assert_eq!(xml_stringify::to_string(&doc).unwrap(), r#"<item id="1">a &amp; b</item>"#);
//! ```

use std::borrow::Cow;
use std::fmt::{self, Display};

/// A scalar value: text content, attribute value or leaf child.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer too large for `Integer`.
    Unsigned(u64),
    /// Floating point number.
    Float(f64),
    /// String.
    String(String),
}

impl Scalar {
    /// Returns true for [`Scalar::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns the textual form of the value, before any escaping.
    ///
    /// Floats with an integral value below 1e21 print in plain decimal
    /// without a fractional part (`2.0` becomes `2`, `1e16` becomes
    /// `10000000000000000`), matching how the reserved-key documents are
    /// usually produced. Larger and fractional values use the shortest
    /// round-trip form.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Scalar::Null => Cow::Borrowed("null"),
            Scalar::Bool(true) => Cow::Borrowed("true"),
            Scalar::Bool(false) => Cow::Borrowed("false"),
            Scalar::Integer(v) => Cow::Owned(itoa::Buffer::new().format(*v).to_owned()),
            Scalar::Unsigned(v) => Cow::Owned(itoa::Buffer::new().format(*v).to_owned()),
            Scalar::Float(v) => Cow::Owned(format_float(*v)),
            Scalar::String(s) => Cow::Borrowed(s),
        }
    }
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if v == 0.0 {
        return "0".to_owned();
    }
    if v.fract() == 0.0 && v.abs() < 1e21 {
        if v.abs() < 9.2e18 {
            return itoa::Buffer::new().format(v as i64).to_owned();
        }
        return format!("{}", v);
    }
    ryu::Buffer::new().format_finite(v).to_owned()
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Integer(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Integer(v)
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => Scalar::Integer(v),
            Err(_) => Scalar::Unsigned(v),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Null, Into::into)
    }
}

/// An attribute or property of a node, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name, without its reserved prefix.
    pub name: String,
    /// Raw, unescaped value.
    pub value: Scalar,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The value held under a child key.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// A scalar, rendered as an element holding only that text.
    Leaf(Scalar),
    /// A nested element.
    Element(Node),
    /// Repeated siblings sharing the key as tag name, in list order.
    Repeated(Vec<Child>),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Element(node)
    }
}

impl From<Scalar> for Child {
    fn from(value: Scalar) -> Self {
        Child::Leaf(value)
    }
}

/// One element: text, comments, attributes and children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Text content. `Some(Scalar::Null)` is treated as absent.
    pub text: Option<Scalar>,
    /// Comments, emitted after the text and before the children.
    pub comments: Vec<String>,
    /// Attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// Child keys in declaration order.
    pub children: Vec<(String, Child)>,
}

impl Node {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node holding only text.
    pub fn text_only(value: impl Into<Scalar>) -> Self {
        Self::new().with_text(value)
    }

    /// Sets the text content.
    pub fn with_text(mut self, value: impl Into<Scalar>) -> Self {
        self.text = Some(value.into());
        self
    }

    /// Appends a comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Appends an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Appends a child key.
    pub fn with_child(mut self, name: impl Into<String>, child: impl Into<Child>) -> Self {
        self.children.push((name.into(), child.into()));
        self
    }

    /// Appends a child key holding repeated siblings.
    pub fn with_children<I, C>(mut self, name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let children = children.into_iter().map(Into::into).collect();
        self.children.push((name.into(), Child::Repeated(children)));
        self
    }

    /// Returns the text content unless it is absent or null.
    #[inline]
    pub fn text(&self) -> Option<&Scalar> {
        self.text.as_ref().filter(|text| !text.is_null())
    }

    /// A node self-closes when it has no text, no comments and no children.
    /// Attributes do not matter.
    #[inline]
    pub fn is_self_closing(&self) -> bool {
        NodeView::from(self).is_self_closing()
    }
}

/// Borrowed view of the parts of a node the emitters look at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeView<'d> {
    pub(crate) text: Option<&'d Scalar>,
    pub(crate) comments: &'d [String],
    pub(crate) attributes: &'d [Attribute],
    pub(crate) children: &'d [(String, Child)],
}

impl<'d> NodeView<'d> {
    /// A scalar child, seen as an element holding only that text.
    pub(crate) fn leaf(value: &'d Scalar) -> Self {
        Self {
            text: Some(value).filter(|value| !value.is_null()),
            comments: &[],
            attributes: &[],
            children: &[],
        }
    }

    pub(crate) fn is_self_closing(&self) -> bool {
        self.text.is_none() && self.comments.is_empty() && self.children.is_empty()
    }
}

impl<'d> From<&'d Node> for NodeView<'d> {
    fn from(node: &'d Node) -> Self {
        Self {
            text: node.text(),
            comments: &node.comments,
            attributes: &node.attributes,
            children: &node.children,
        }
    }
}

/// A complete document: optional prolog and doctype plus the top-level node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// The `<?xml ...?>` declaration; its attributes become the pseudo-attributes.
    pub prolog: Option<Node>,
    /// The `<!DOCTYPE ...>` declaration; attributes are tokens, leaf children
    /// are element declarations.
    pub doctype: Option<Node>,
    /// Top-level node. Its children hold the root element.
    pub node: Node,
}

impl Document {
    /// Creates a document with a single root element.
    pub fn new(name: impl Into<String>, root: Node) -> Self {
        Self {
            prolog: None,
            doctype: None,
            node: Node::new().with_child(name, root),
        }
    }

    /// Sets the prolog.
    pub fn with_prolog(mut self, prolog: Node) -> Self {
        self.prolog = Some(prolog);
        self
    }

    /// Sets the doctype.
    pub fn with_doctype(mut self, doctype: Node) -> Self {
        self.doctype = Some(doctype);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_text() {
        assert_eq!(Scalar::Null.to_text(), "null");
        assert_eq!(Scalar::Bool(true).to_text(), "true");
        assert_eq!(Scalar::Integer(-42).to_text(), "-42");
        assert_eq!(Scalar::Unsigned(u64::MAX).to_text(), "18446744073709551615");
        assert_eq!(Scalar::from("x").to_text(), "x");
    }

    #[test]
    fn test_float_text() {
        assert_eq!(Scalar::Float(2.0).to_text(), "2");
        assert_eq!(Scalar::Float(-0.5).to_text(), "-0.5");
        assert_eq!(Scalar::Float(1.25).to_string(), "1.25");
        assert_eq!(Scalar::Float(f64::NAN).to_text(), "NaN");
        assert_eq!(Scalar::Float(f64::NEG_INFINITY).to_text(), "-Infinity");
    }

    #[test]
    fn test_large_integral_float_text() {
        assert_eq!(Scalar::Float(1e16).to_text(), "10000000000000000");
        assert_eq!(Scalar::Float(1e20).to_text(), "100000000000000000000");
        assert_eq!(Scalar::Float(-3e19).to_text(), "-30000000000000000000");
        assert_eq!(Scalar::Float(1e21).to_text(), "1e21");
        assert_eq!(Scalar::Float(-0.0).to_text(), "0");
    }

    #[test]
    fn test_leaf_view_shares_self_closing_rule() {
        assert!(NodeView::leaf(&Scalar::Null).is_self_closing());
        assert!(!NodeView::leaf(&Scalar::from("")).is_self_closing());
        let node = Node::text_only(Scalar::Null).with_attribute("a", 1);
        assert_eq!(NodeView::from(&node).is_self_closing(), node.is_self_closing());
    }

    #[test]
    fn test_scalar_from_option() {
        assert_eq!(Scalar::from(None::<&str>), Scalar::Null);
        assert_eq!(Scalar::from(Some(3)), Scalar::Integer(3));
        assert_eq!(Scalar::from(7u64), Scalar::Integer(7));
    }

    #[test]
    fn test_self_closing_ignores_attributes() {
        let node = Node::new().with_attribute("id", 1).with_attribute("name", "x");
        assert!(node.is_self_closing());
    }

    #[test]
    fn test_null_text_is_absent() {
        let node = Node::new().with_text(Scalar::Null);
        assert!(node.text().is_none());
        assert!(node.is_self_closing());
        assert!(!Node::text_only("").is_self_closing());
    }

    #[test]
    fn test_content_prevents_self_closing() {
        assert!(!Node::new().with_comment("c").is_self_closing());
        assert!(!Node::new().with_child("a", Node::new()).is_self_closing());
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new("root", Node::new());
        assert_eq!(doc.node.children.len(), 1);
        assert_eq!(doc.node.children[0].0, "root");
        assert!(doc.prolog.is_none() && doc.doctype.is_none());
    }

    #[test]
    fn test_with_children_preserves_order() {
        let node = Node::new().with_children("child", [Node::text_only(1), Node::text_only(2)]);
        match &node.children[0].1 {
            Child::Repeated(items) => {
                assert_eq!(items[0], Child::Element(Node::text_only(1)));
                assert_eq!(items[1], Child::Element(Node::text_only(2)));
            }
            other => panic!("expected repeated children, got {:?}", other),
        }
    }
}
