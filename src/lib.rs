//! # xml_stringify
//!
//! Deterministic, indented XML output for documents held in an object
//! model.
//!
//! ## Features
//!
//! - Typed object model: text, comments, attributes and children are kept
//!   apart, in declaration order
//! - Reads the reserved-key JSON form (`#text`, `#comments`, `@attr`)
//!   produced by JavaScript-style XML parsers
//! - Entity escaping of every text, attribute and comment value
//! - XML declaration and `<!DOCTYPE>` with element declarations
//! - A replacer hook to rewrite values after escaping
//! - No unsafe code
//!
//! ## Quick Start
//!
//! ```rust
//! use xml_stringify::{to_string, Document, Node};
//!
//! let doc = Document::new(
//!     "item",
//!     Node::new().with_attribute("id", "1").with_text("a & b"),
//! );
//! assert_eq!(to_string(&doc).unwrap(), r#"<item id="1">a &amp; b</item>"#);
//! ```
//!
//! ## From JSON
//!
//! ```rust
//! use xml_stringify::{from_json, to_string};
//!
//! let doc = from_json(r##"{
//!     "xml": { "@version": "1.0" },
//!     "library": {
//!         "@name": "My Library",
//!         "book": [
//!             { "@id": "1", "#text": "The Rust Programming Language" },
//!             { "@id": "2", "#text": "Programming Rust" }
//!         ]
//!     }
//! }"##).unwrap();
//!
//! let xml = to_string(&doc).unwrap();
//! assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<library name=\"My Library\">"));
//! assert!(xml.contains("  <book id=\"2\">Programming Rust</book>"));
//! ```
//!
//! ## Options
//!
//! ```rust
//! use xml_stringify::{to_string_with, Document, Node, Options};
//!
//! let doc = Document::new("a", Node::new().with_child("b", Node::text_only("c")));
//! let options = Options::new().with_indent_size(4);
//! assert_eq!(to_string_with(&doc, &options).unwrap(), "<a>\n    <b>c</b>\n</a>");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod error;
pub mod escape;
pub mod extract;
pub mod model;
pub mod options;
pub mod replace;
pub mod stringify;
pub mod writer;

// Re-export main types and functions
pub use error::{Error, ErrorKind, Result};
pub use escape::{escape, quote};
pub use extract::{from_json, Schema};
pub use model::{Attribute, Child, Document, Node, Scalar};
pub use options::Options;
pub use replace::{Identity, ReplaceEvent, ReplaceKey, Replacer};
pub use stringify::{to_string, to_string_with, to_vec, to_writer, Stringifier};
pub use writer::XmlWriter;

/// Log target of the debug trace and of input-boundary diagnostics.
pub(crate) const LOG_TARGET: &str = "xml_stringify";
