//! Literal escaping for inlined string values.

use std::borrow::Cow;

/// Double every isolated single quote in `value`.
///
/// An already doubled `''` pair is kept as is, so sanitizing sanitized text is
/// a no-op. A quote at the end of the string is doubled.
///
/// ```
/// use sqlweave::sanitize::sanitize_quotes;
///
/// assert_eq!(sanitize_quotes("My st'ring with q''uotes"), "My st''ring with q''uotes");
/// assert_eq!(sanitize_quotes("quote at end'"), "quote at end''");
/// ```
pub fn sanitize_quotes(value: &str) -> Cow<'_, str> {
    if !value.contains('\'') {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            // An existing pair is consumed whole.
            if chars.peek() == Some(&'\'') {
                chars.next();
            }
            out.push_str("''");
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Render `value` as a single-quoted SQL string literal.
pub fn quote_literal(value: &str) -> String {
    let sanitized = sanitize_quotes(value);
    let mut out = String::with_capacity(sanitized.len() + 2);
    out.push('\'');
    out.push_str(&sanitized);
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_isolated_quotes_only() {
        assert_eq!(
            sanitize_quotes("My st'ring with q''uotes"),
            "My st''ring with q''uotes"
        );
        assert_eq!(sanitize_quotes("quot'ed stri''ng"), "quot''ed stri''ng");
    }

    #[test]
    fn trailing_and_leading_quotes() {
        assert_eq!(sanitize_quotes("quote at end'"), "quote at end''");
        assert_eq!(sanitize_quotes("'start"), "''start");
        assert_eq!(sanitize_quotes("'"), "''");
    }

    #[test]
    fn odd_runs_of_quotes() {
        // pair + isolated
        assert_eq!(sanitize_quotes("a'''b"), "a''''b");
    }

    #[test]
    fn unchanged_inputs_are_borrowed() {
        assert!(matches!(sanitize_quotes(""), Cow::Borrowed("")));
        assert!(matches!(sanitize_quotes("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn idempotent_on_sanitized_text() {
        let once = sanitize_quotes("it's a 'test'").into_owned();
        assert_eq!(sanitize_quotes(&once), once);
    }

    #[test]
    fn quote_literal_wraps() {
        assert_eq!(quote_literal("text"), "'text'");
        assert_eq!(quote_literal("it's"), "'it''s'");
        assert_eq!(quote_literal(""), "''");
    }
}
