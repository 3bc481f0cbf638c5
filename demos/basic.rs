//! Basic example demonstrating stringification of a built document and of
//! a reserved-key JSON document.

use xml_stringify::{from_json, to_string, Document, Node};

fn main() {
    // Build a document in code
    let person = Document::new(
        "person",
        Node::new()
            .with_attribute("id", 7)
            .with_child("name", Node::text_only("Alice Smith"))
            .with_child("age", Node::text_only(30))
            .with_child("email", Node::text_only("alice@example.com")),
    );

    let xml = to_string(&person).expect("Failed to stringify");
    println!("Built document:");
    println!("{}", xml);
    println!();

    // The same shape, written in the reserved-key JSON form
    let json = r##"{
        "person": {
            "@id": 8,
            "name": "Bob Johnson",
            "age": 25,
            "email": { "#text": "bob@example.com" }
        }
    }"##;

    let parsed = from_json(json).expect("Failed to read JSON");
    let xml = to_string(&parsed).expect("Failed to stringify");
    println!("JSON document:");
    println!("{}", xml);
}
