//! Example demonstrating the replacer hook, progress reporting and debug
//! tracing.
//!
//! Run with `RUST_LOG=xml_stringify=debug` to see the trace.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use xml_stringify::{
    from_json, Error, Options, ReplaceEvent, ReplaceKey, Result, Stringifier,
};

fn main() {
    env_logger::init();

    let json = r##"{
        "users": {
            "user": [
                { "@name": "alice", "@role": "admin", "#text": "password: hunter2" },
                { "@name": "bob", "@role": "guest", "#text": "no secrets <here>" }
            ]
        }
    }"##;
    let doc = from_json(json).expect("Failed to read JSON");

    // Mask the text of admin users, using the tag's own attributes
    let mask = |event: ReplaceEvent<'_>| -> Result<String> {
        match event.key {
            ReplaceKey::Text => {
                let admin = event
                    .property("role")
                    .map_or(false, |role| role.value.to_text() == "admin");
                if admin {
                    return Ok("*".repeat(event.value.len()));
                }
                Ok(event.value.into_owned())
            }
            _ => Ok(event.value.into_owned()),
        }
    };

    let tags = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&tags);
    let stringifier = Stringifier::new(
        Options::new()
            .with_debug(true)
            .with_replacer(mask)
            .with_progress(move |_| {
                counter.fetch_add(1, Ordering::Relaxed);
            }),
    );

    let xml = stringifier.stringify(&doc).expect("Failed to stringify");
    println!("{}", xml);
    println!("\n{} tags visited", tags.load(Ordering::Relaxed));

    // A replacer error aborts the whole call
    let strict = Stringifier::new(Options::new().with_replacer(
        |event: ReplaceEvent<'_>| -> Result<String> {
            if event.value.contains("hunter2") {
                return Err(Error::custom("refusing to write a password"));
            }
            Ok(event.value.into_owned())
        },
    ));
    match strict.stringify(&doc) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Error: {}", e),
    }
}
