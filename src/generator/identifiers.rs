//! # Identifier formatting
//!
//! Prints a binding/reference name, optionally ASCII-escaping it, and
//! provides the `is_identifier_name` check the printer uses to decide
//! between dot-access (`obj.prop`) and bracket-access (`obj["prop"]`) when
//! lowering a computed or mangled property.

/// Whether `name` is a valid `IdentifierName` production (ignoring reserved
/// words, which is a parse-time concern already resolved upstream — this
/// crate only ever sees post-resolution names).
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Formats an identifier for output, escaping non-ASCII characters as
/// `\uXXXX` when `ascii_only` is set. Identifier characters are always
/// within the BMP for any name a real parser would have accepted, so no
/// surrogate-pair handling is needed here (unlike string literals).
pub fn format_identifier(name: &str, ascii_only: bool) -> String {
    if !ascii_only || name.is_ascii() {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_names_are_valid_identifiers() {
        assert!(is_identifier_name("foo"));
        assert!(is_identifier_name("_bar$2"));
        assert!(!is_identifier_name("2foo"));
        assert!(!is_identifier_name("foo-bar"));
    }

    #[test]
    fn ascii_only_escapes_non_ascii_identifier_chars() {
        assert_eq!(format_identifier("caf\u{e9}", true), "caf\\u00e9");
        assert_eq!(format_identifier("caf\u{e9}", false), "caf\u{e9}");
    }
}
