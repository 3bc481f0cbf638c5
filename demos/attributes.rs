//! Example demonstrating attributes, repeated siblings and self-closing
//! elements.

use xml_stringify::{to_string, Document, Node};

fn main() {
    let product = |id: &str, sku: &str, name: &str, price: f64| {
        Node::new()
            .with_attribute("id", id)
            .with_attribute("sku", sku)
            .with_child("name", Node::text_only(name))
            .with_child("price", Node::text_only(price))
    };

    let catalog = Document::new(
        "catalog",
        Node::new()
            .with_attribute("version", "1.0")
            .with_children(
                "product",
                [
                    product("1", "WIDGET-001", "Super Widget", 29.99),
                    product("2", "GADGET-002", "Mega Gadget & Co", 49.99),
                ],
            )
            // Attributes alone never prevent self-closing
            .with_child("discontinued", Node::new().with_attribute("since", 2019)),
    );

    println!("=== Catalog ===\n");
    println!("{}", to_string(&catalog).expect("Failed to stringify"));
}
