//! # String/template literal quoting and escaping
//!
//! Implements spec §4.3's quote-selection and escaping algorithm: pick the
//! quote character that needs the fewest backslash-escapes (ties broken by
//! `QuoteStrategy`), escape per UTF-16 code unit (so lone surrogates and
//! astral characters are handled the way the engine actually sees them),
//! optionally restrict to ASCII output, and always break up a literal
//! `</script` so the printed code stays embeddable in an HTML `<script>` tag.

use crate::generator::QuoteStrategy;

/// Picks the cheaper quote character by counting unescaped occurrences of
/// each, falling back to `strategy` on a tie.
pub fn choose_quote_char(content: &str, strategy: QuoteStrategy) -> char {
    match strategy {
        QuoteStrategy::Single => '\'',
        QuoteStrategy::Double => '"',
        QuoteStrategy::Auto => {
            let singles = content.chars().filter(|&c| c == '\'').count();
            let doubles = content.chars().filter(|&c| c == '"').count();
            if singles > doubles { '"' } else if doubles > singles { '\'' } else { '"' }
        }
    }
}

/// Escapes `content` for inclusion between `quote` characters. Walks UTF-16
/// code units (not Rust `char`s) so astral characters become surrogate
/// pairs exactly as the source engine would encode them, matching spec
/// §4.3's UTF-16-unit escaping rule.
pub fn escape_string_body(content: &str, quote: char, ascii_only: bool) -> String {
    let mut out = String::with_capacity(content.len());
    let units: Vec<u16> = content.encode_utf16().collect();
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        match unit {
            0x0A => out.push_str("\\n"),
            0x0D => out.push_str("\\r"),
            0x09 => out.push_str("\\t"),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            0x0B => out.push_str("\\v"),
            0x5C => out.push_str("\\\\"),
            u if u == quote as u16 => {
                out.push('\\');
                out.push(quote);
            }
            0x2028 => out.push_str("\\u2028"),
            0x2029 => out.push_str("\\u2029"),
            // A byte-order mark must never be written literally: some
            // loaders strip a leading BOM, which would shift every
            // subsequent byte offset relative to the source map.
            0xFEFF => out.push_str("\\ufeff"),
            0x00 if !matches!(units.get(i + 1), Some(0x30..=0x39)) => out.push_str("\\0"),
            u if u < 0x20 => out.push_str(&format!("\\x{:02x}", u)),
            u if ascii_only && u > 0x7e => out.push_str(&format!("\\u{:04x}", u)),
            u => {
                if let Some(ch) = char::from_u32(u as u32) {
                    out.push(ch);
                } else {
                    out.push_str(&format!("\\u{:04x}", u));
                }
            }
        }
        i += 1;
        break_script_close_tag(&mut out);
    }
    out
}

/// If the tail of `out` now spells `</script` (case-insensitively, as
/// browsers parse HTML), insert an escape to split it so embedding the
/// output inside an HTML `<script>` element can't terminate it early.
fn break_script_close_tag(out: &mut String) {
    const NEEDLE: &str = "</script";
    if out.len() < NEEDLE.len() {
        return;
    }
    let tail_start = out.len() - NEEDLE.len();
    if out[tail_start..].eq_ignore_ascii_case(NEEDLE) {
        out.insert_str(out.len() - 1, "\\");
    }
}

/// Formats a complete quoted string literal (spec §4.3).
pub fn format_string_literal(content: &str, strategy: QuoteStrategy, ascii_only: bool) -> String {
    let quote = choose_quote_char(content, strategy);
    let body = escape_string_body(content, quote, ascii_only);
    format!("{quote}{body}{quote}")
}

/// Escapes a template-literal chunk: backtick, `\`, and a bare `${` must be
/// escaped; everything else (including newlines) is literal.
pub fn escape_template_chunk(content: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '`' => out.push_str("\\`"),
            '\\' => out.push_str("\\\\"),
            '$' if chars.peek() == Some(&'{') => {
                out.push_str("\\${");
                chars.next();
            }
            c if ascii_only && !c.is_ascii() => {
                for unit in c.encode_utf16(&mut [0u16; 2]) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_double_quote_when_content_has_more_single_quotes() {
        assert_eq!(choose_quote_char("it's", QuoteStrategy::Auto), '"');
    }

    #[test]
    fn escapes_the_chosen_quote_character() {
        let s = format_string_literal("it's", QuoteStrategy::Auto, false);
        assert_eq!(s, "\"it's\"");
    }

    #[test]
    fn escapes_newline_and_backslash() {
        let body = escape_string_body("a\\b\nc", '"', false);
        assert_eq!(body, "a\\\\b\\nc");
    }

    #[test]
    fn breaks_up_embedded_script_close_tag() {
        let body = escape_string_body("</script>", '"', false);
        assert!(!body.contains("</script>"));
    }

    #[test]
    fn ascii_only_escapes_non_ascii_as_unicode_escape() {
        let body = escape_string_body("caf\u{e9}", '"', true);
        assert_eq!(body, "caf\\u00e9");
    }

    #[test]
    fn template_chunk_escapes_interpolation_start() {
        assert_eq!(escape_template_chunk("${x}", false), "\\${x}");
    }

    #[test]
    fn nul_not_followed_by_digit_uses_short_escape() {
        assert_eq!(escape_string_body("a\0b", '"', false), "a\\0b");
    }

    #[test]
    fn nul_followed_by_digit_uses_hex_escape_to_avoid_octal_ambiguity() {
        assert_eq!(escape_string_body("\01", '"', false), "\\x001");
    }

    #[test]
    fn byte_order_mark_is_always_escaped() {
        assert_eq!(escape_string_body("\u{feff}", '"', false), "\\ufeff");
    }
}
