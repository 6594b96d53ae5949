//! Markup-escaping string sanitizer
//!
//! Any user-supplied text destined for a markup rendering context passes
//! through [`sanitize`] first.

/// Escapes characters that are dangerous when the string is later
/// embedded in markup output.
///
/// Replaces `<`, `>`, `"`, `'` and `/` with their entity forms. `&` is
/// deliberately left alone, so sanitizing already-escaped input is not
/// idempotent; downstream renderers rely on entity references surviving
/// a pass. Pure and total: every input maps to exactly one output.
pub fn sanitize(input: &str) -> String {
    input
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_neutralized() {
        assert_eq!(
            sanitize("<script>a</script>"),
            "&lt;script&gt;a&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn test_each_dangerous_character() {
        assert_eq!(sanitize("<"), "&lt;");
        assert_eq!(sanitize(">"), "&gt;");
        assert_eq!(sanitize("\""), "&quot;");
        assert_eq!(sanitize("'"), "&#x27;");
        assert_eq!(sanitize("/"), "&#x2F;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("hello world"), "hello world");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_ampersand_passes_through() {
        assert_eq!(sanitize("a & b"), "a & b");
        // Pre-existing entity references survive untouched; input that
        // already contains them cannot be re-neutralized.
        assert_eq!(sanitize("&lt;"), "&lt;");
    }

    #[test]
    fn test_mixed_content() {
        assert_eq!(
            sanitize(r#"<a href="/reports" onclick='x'>"#),
            "&lt;a href=&quot;&#x2F;reports&quot; onclick=&#x27;x&#x27;&gt;"
        );
    }
}
