//! HTML-safe text escaping.
//!
//! Cart line names and special-request notes are user-supplied text; on a
//! shared device they may contain attacker-influenced markup. Everything
//! the render projection emits passes through here first.

/// Escape the five HTML-significant characters. `&` is replaced first so
/// already-escaped entities are not double-mangled into validity.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text destined for an HTML attribute position.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}
