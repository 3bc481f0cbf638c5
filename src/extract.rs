//! Extraction of the typed model from reserved-key mappings.
//!
//! Documents produced by XML parsers in the JSON world describe an element
//! as a plain mapping where the role of each key is given by a naming
//! convention:
//!
//! | key | role |
//! |---|---|
//! | `#text` | text content (scalar or null) |
//! | `#comments` | list of comments |
//! | `@name` | attribute, or property in a prolog/doctype |
//! | `xml`, `doctype` | prolog and doctype (top level only) |
//! | anything else | child element: object, list of siblings, or scalar |
//!
//! [`Schema`] reads such a mapping once, at the input boundary, and turns
//! it into a [`Document`].
//!
//! ```rust
//! use serde_json::json;
//! use xml_stringify::{Schema, to_string};
//!
//! let value = json!({ "root": { "child": [{ "#text": 1 }, { "#text": 2 }] } });
//! let doc = Schema::default().document(&value).unwrap();
//! assert_eq!(to_string(&doc).unwrap(), "<root>\n  <child>1</child>\n  <child>2</child>\n</root>");
//! ```

use crate::error::{Error, Result};
use crate::model::{Attribute, Child, Document, Node, Scalar};
use crate::LOG_TARGET;
use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Key of the prolog node.
pub const PROLOG_KEY: &str = "xml";

/// Key of the doctype node.
pub const DOCTYPE_KEY: &str = "doctype";

/// Names of the reserved keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Key holding the text content.
    pub text: String,
    /// Key holding the list of comments.
    pub comment: String,
    /// Prefix marking attribute keys.
    pub attribute_prefix: String,
    /// Prefix marking property keys (prolog and doctype tokens).
    pub property_prefix: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            text: "#text".to_string(),
            comment: "#comments".to_string(),
            attribute_prefix: "@".to_string(),
            property_prefix: "@".to_string(),
        }
    }
}

impl Schema {
    /// Builds a document from a top-level mapping.
    ///
    /// `xml` and `doctype` keys holding objects become the prolog and
    /// doctype. Everything else is extracted like any other node.
    pub fn document(&self, value: &Value) -> Result<Document> {
        let map = value
            .as_object()
            .ok_or_else(|| Error::invalid_value(format!("document must be an object, found {}", kind_of(value))))?;

        Ok(Document {
            prolog: map.get(PROLOG_KEY).and_then(Value::as_object).map(|m| self.extract(m)),
            doctype: map.get(DOCTYPE_KEY).and_then(Value::as_object).map(|m| self.extract(m)),
            node: self.extract(map),
        })
    }

    /// Splits a mapping into text, comments, attributes and children,
    /// preserving key order.
    pub fn extract(&self, map: &Map<String, Value>) -> Node {
        let mut node = Node::new();

        for (key, value) in map {
            if *key == self.text {
                node.text = self.text_of(value);
            } else if *key == self.comment {
                node.comments = comments_of(value);
            } else if let Some(name) = self.strip_attribute(key) {
                node.attributes.push(Attribute {
                    name: name.to_string(),
                    value: scalar_of(value),
                });
            } else if key == PROLOG_KEY || key == DOCTYPE_KEY {
                continue;
            } else {
                node.children.push((key.clone(), self.child(value)));
            }
        }

        node
    }

    /// Classifies the value held under a child key.
    pub fn child(&self, value: &Value) -> Child {
        match value {
            Value::Array(items) => Child::Repeated(items.iter().map(|item| self.child(item)).collect()),
            Value::Object(map) => Child::Element(self.extract(map)),
            other => Child::Leaf(scalar_of(other)),
        }
    }

    fn strip_attribute<'k>(&self, key: &'k str) -> Option<&'k str> {
        key.strip_prefix(self.attribute_prefix.as_str())
            .or_else(|| key.strip_prefix(self.property_prefix.as_str()))
    }

    fn text_of(&self, value: &Value) -> Option<Scalar> {
        match value {
            Value::Array(_) | Value::Object(_) => {
                log::trace!(target: LOG_TARGET, "ignoring non-scalar {} value", self.text);
                None
            }
            Value::Null => None,
            other => Some(scalar_of(other)),
        }
    }
}

/// Converts a JSON value to a scalar. Lists and objects keep their JSON text.
pub fn scalar_of(value: &Value) -> Scalar {
    match value {
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Scalar::Integer(v)
            } else if let Some(v) = n.as_u64() {
                Scalar::Unsigned(v)
            } else {
                Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Scalar::String(s.clone()),
        other => Scalar::String(other.to_string()),
    }
}

fn comments_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => scalar_of(other).to_text().into_owned(),
            })
            .collect(),
        Value::Null => Vec::new(),
        Value::String(s) => vec![s.clone()],
        other => vec![scalar_of(other).to_text().into_owned()],
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parses a JSON string holding a reserved-key document.
pub fn from_json(json: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(json)?;
    Schema::default().document(&value)
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Schema::default().document(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_roles() {
        let value = json!({
            "@id": "1",
            "#text": "hello",
            "#comments": ["a", "b"],
            "child": { "@x": true },
            "@class": "big",
        });
        let node = Schema::default().extract(value.as_object().unwrap());

        assert_eq!(node.text, Some(Scalar::from("hello")));
        assert_eq!(node.comments, vec!["a", "b"]);
        assert_eq!(
            node.attributes,
            vec![Attribute::new("id", "1"), Attribute::new("class", "big")]
        );
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].0, "child");
    }

    #[test]
    fn test_extract_children_keep_declaration_order() {
        let value = json!({ "b": 1, "a": 2, "c": 3 });
        let node = Schema::default().extract(value.as_object().unwrap());
        let names: Vec<&str> = node.children.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_child_shapes() {
        let schema = Schema::default();
        assert_eq!(schema.child(&json!(5)), Child::Leaf(Scalar::Integer(5)));
        assert_eq!(schema.child(&json!(null)), Child::Leaf(Scalar::Null));
        assert_eq!(schema.child(&json!({})), Child::Element(Node::new()));
        assert_eq!(
            schema.child(&json!([{ "#text": "x" }, "y"])),
            Child::Repeated(vec![
                Child::Element(Node::text_only("x")),
                Child::Leaf(Scalar::from("y")),
            ])
        );
    }

    #[test]
    fn test_null_text_is_absent() {
        let node = Schema::default().extract(json!({ "#text": null }).as_object().unwrap());
        assert!(node.text.is_none());
        assert!(node.is_self_closing());
    }

    #[test]
    fn test_document_prolog_and_doctype() {
        let value = json!({
            "xml": { "@version": "1.0" },
            "doctype": { "@html": "" },
            "html": {},
        });
        let doc = Schema::default().document(&value).unwrap();
        assert_eq!(doc.prolog.unwrap().attributes, vec![Attribute::new("version", "1.0")]);
        assert_eq!(doc.doctype.unwrap().attributes[0].name, "html");
        assert_eq!(doc.node.children.len(), 1);
        assert_eq!(doc.node.children[0].0, "html");
    }

    #[test]
    fn test_reserved_keys_skipped_below_top_level() {
        let value = json!({ "root": { "xml": { "@a": 1 }, "doctype": "x", "child": "y" } });
        let doc = Schema::default().document(&value).unwrap();
        match &doc.node.children[0].1 {
            Child::Element(root) => assert_eq!(root.children.len(), 1),
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_non_scalar_text_is_traced() {
        let lines = crate::capture::lines(|| {
            let node = Schema::default().extract(json!({ "#text": [1] }).as_object().unwrap());
            assert!(node.text.is_none());
        });
        assert_eq!(lines, ["xml_stringify ignoring non-scalar #text value"]);
    }

    #[test]
    fn test_custom_schema() {
        let schema = Schema {
            text: "$text".to_string(),
            comment: "$comments".to_string(),
            attribute_prefix: "_".to_string(),
            property_prefix: "?".to_string(),
        };
        let node = schema.extract(json!({ "$text": "t", "_a": 1, "?b": 2, "@c": 3 }).as_object().unwrap());
        assert_eq!(node.text, Some(Scalar::from("t")));
        assert_eq!(node.attributes, vec![Attribute::new("a", 1), Attribute::new("b", 2)]);
        assert_eq!(node.children[0].0, "@c");
    }

    #[test]
    fn test_non_object_document() {
        let err = Schema::default().document(&json!([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value: document must be an object, found an array");
    }

    #[test]
    fn test_comments_shapes() {
        assert_eq!(comments_of(&json!("single")), vec!["single"]);
        assert_eq!(comments_of(&json!(["a", 1, true])), vec!["a", "1", "true"]);
        assert!(comments_of(&json!(null)).is_empty());
    }

    #[test]
    fn test_scalar_of_numbers() {
        assert_eq!(scalar_of(&json!(-3)), Scalar::Integer(-3));
        assert_eq!(scalar_of(&json!(u64::MAX)), Scalar::Unsigned(u64::MAX));
        assert_eq!(scalar_of(&json!(1.5)), Scalar::Float(1.5));
        assert_eq!(scalar_of(&json!([1, 2])), Scalar::String("[1,2]".to_string()));
    }

    #[test]
    fn test_deserialize_document() {
        let doc: Document = serde_json::from_str(r#"{"root": {"@id": "7"}}"#).unwrap();
        assert_eq!(doc, Document::new("root", Node::new().with_attribute("id", "7")));
    }

    #[test]
    fn test_from_json_error() {
        assert!(from_json("{").is_err());
        assert!(from_json("\"text\"").is_err());
    }
}
