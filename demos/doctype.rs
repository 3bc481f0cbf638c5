//! Example demonstrating the XML declaration and a doctype with element
//! declarations.

use xml_stringify::{from_json, to_string};

fn main() {
    let json = r##"{
        "xml": { "@version": "1.0", "@encoding": "UTF-8" },
        "doctype": {
            "@note": "",
            "note": "to,from,heading,body",
            "to": "#PCDATA",
            "from": "#PCDATA",
            "heading": "#PCDATA",
            "body": "#PCDATA"
        },
        "note": {
            "to": "Tove",
            "from": "Jani",
            "heading": "Reminder",
            "body": { "#text": "Don't forget me\nthis weekend!" }
        }
    }"##;

    let doc = from_json(json).expect("Failed to read JSON");
    println!("{}", to_string(&doc).expect("Failed to stringify"));
}
