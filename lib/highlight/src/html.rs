use crate::lexer::{tokenize, TokenKind};

/// The one color theme. Mirrors the classic "colorful" pygments look and is
/// deliberately not configurable.
const THEME_CSS: &str = "\
.sparql-hl { background-color: #ffffff; }
.sparql-hl pre { margin: 0; padding: 8px 12px; font-family: monospace; line-height: 125%; }
.sparql-hl .k { color: #008800; font-weight: bold; }
.sparql-hl .v { color: #996633; }
.sparql-hl .u { color: #0044dd; text-decoration: underline; }
.sparql-hl .n { color: #4070a0; }
.sparql-hl .s { color: #bb4444; }
.sparql-hl .m { color: #208050; }
.sparql-hl .c { color: #888888; font-style: italic; }
.sparql-hl .t { color: #aa22ff; }
";

/// Escapes `text` for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn span_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Keyword => Some("k"),
        TokenKind::Variable => Some("v"),
        TokenKind::Iri => Some("u"),
        TokenKind::PrefixedName => Some("n"),
        TokenKind::Literal => Some("s"),
        TokenKind::Number => Some("m"),
        TokenKind::Comment => Some("c"),
        TokenKind::LangTag => Some("t"),
        TokenKind::Punctuation | TokenKind::Whitespace | TokenKind::Text => None,
    }
}

/// Renders `query` as a highlighted `<div><pre>` fragment without the page
/// shell. The stylesheet is not included; pair with [`highlight_document`]
/// for a self-contained page.
pub fn highlight_fragment(query: &str) -> String {
    let mut html = String::from("<div class=\"sparql-hl\"><pre>");
    for token in tokenize(query) {
        let escaped = escape_html(&token.text);
        match span_class(token.kind) {
            Some(class) => {
                html.push_str("<span class=\"");
                html.push_str(class);
                html.push_str("\">");
                html.push_str(&escaped);
                html.push_str("</span>");
            }
            None => html.push_str(&escaped),
        }
    }
    html.push_str("</pre></div>");
    html
}

/// Renders `query` as a complete standalone HTML document with the embedded
/// fixed theme.
pub fn highlight_document(query: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{THEME_CSS}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        highlight_fragment(query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn keywords_get_spans() {
        let html = highlight_fragment("SELECT ?s");
        assert!(html.contains("<span class=\"k\">SELECT</span>"));
        assert!(html.contains("<span class=\"v\">?s</span>"));
    }

    #[test]
    fn iris_are_escaped_inside_spans() {
        let html = highlight_fragment("<http://example.org/x>");
        assert!(html.contains("&lt;http://example.org/x&gt;"));
        assert!(!html.contains("<http://"));
    }

    #[test]
    fn document_is_a_full_page() {
        let html = highlight_document("ASK { ?s ?p ?o }");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains(".sparql-hl .k"));
        assert!(html.ends_with("</html>\n"));
    }
}
