//! XML escape and quoting utilities.
//!
//! This module provides fast, allocation-minimizing functions for escaping
//! XML special characters and for quoting attribute values and doctype
//! tokens.

use memchr::{memchr2, memchr3};
use std::borrow::Cow;

/// Escapes XML special characters in a string.
///
/// `&`, `<`, `>`, `"` and `'` are replaced by their predefined entities.
/// The input is scanned once, so an `&` introduced by an entity is never
/// escaped a second time. Returns a `Cow<str>` to avoid allocation when no
/// escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    // Fast path: check if any escaping is needed
    if !needs_escape(s.as_bytes()) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + s.len() / 8);
    escape_to(s, &mut result);
    Cow::Owned(result)
}

/// Checks if a byte slice needs escaping.
#[inline]
fn needs_escape(bytes: &[u8]) -> bool {
    memchr3(b'<', b'>', b'&', bytes).is_some() || memchr2(b'"', b'\'', bytes).is_some()
}

/// Escapes XML special characters and appends to the given string.
pub fn escape_to(s: &str, out: &mut String) {
    let mut start = 0;

    for (i, byte) in s.bytes().enumerate() {
        let escaped = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&apos;",
            _ => continue,
        };

        // Only ASCII bytes are replaced, so `start..i` is a char boundary.
        out.push_str(&s[start..i]);
        out.push_str(escaped);
        start = i + 1;
    }

    out.push_str(&s[start..]);
}

/// Returns true if `s` consists only of ASCII letters, digits and `_`.
#[inline]
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Wraps `content` in double quotes.
///
/// Backslashes are escaped before double quotes. When `optional` is set and
/// the content is a bare word (see [`is_word`]), it is returned unquoted.
pub fn quote(content: &str, optional: bool) -> Cow<'_, str> {
    if optional && is_word(content) {
        return Cow::Borrowed(content);
    }

    let mut quoted = String::with_capacity(content.len() + 2);
    quoted.push('"');
    for c in content.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_no_special_chars() {
        let s = "Hello, World!";
        let escaped = escape(s);
        assert!(matches!(escaped, Cow::Borrowed(_)));
        assert_eq!(escaped, s);
    }

    #[test]
    fn test_escape_each_entity() {
        assert_eq!(escape("&"), "&amp;");
        assert_eq!(escape("<"), "&lt;");
        assert_eq!(escape(">"), "&gt;");
        assert_eq!(escape("\""), "&quot;");
        assert_eq!(escape("'"), "&apos;");
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(
            escape("<div class=\"foo\">Hello & goodbye</div>"),
            "&lt;div class=&quot;foo&quot;&gt;Hello &amp; goodbye&lt;/div&gt;"
        );
    }

    #[test]
    fn test_escape_existing_entity_is_reencoded_once() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
        assert_eq!(escape("a && 'b'"), "a &amp;&amp; &apos;b&apos;");
    }

    #[test]
    fn test_escape_multibyte() {
        assert_eq!(escape("café <ü>"), "café &lt;ü&gt;");
    }

    #[test]
    fn test_escape_to() {
        let mut out = String::from("x=");
        escape_to("<test>", &mut out);
        assert_eq!(out, "x=&lt;test&gt;");
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("html"));
        assert!(is_word("HTML_5"));
        assert!(!is_word(""));
        assert!(!is_word("-//W3C//DTD"));
        assert!(!is_word("a b"));
    }

    #[test]
    fn test_quote_mandatory() {
        assert_eq!(quote("html", false), "\"html\"");
        assert_eq!(quote("", false), "\"\"");
    }

    #[test]
    fn test_quote_optional() {
        assert!(matches!(quote("html", true), Cow::Borrowed("html")));
        assert_eq!(quote("-//W3C//DTD XHTML 1.0//EN", true), "\"-//W3C//DTD XHTML 1.0//EN\"");
    }

    #[test]
    fn test_quote_escapes_backslash_before_quote() {
        assert_eq!(quote(r#"a\"b"#, false), r#""a\\\"b""#);
        assert_eq!(quote(r"C:\dir", true), r#""C:\\dir""#);
    }
}
