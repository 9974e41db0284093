//! Syntax highlighting for the listing.
//!
//! Produces highlight.js-compatible markup so the page's theme stylesheet
//! applies unchanged.

use crate::codegen::OutputSurface;

/// Turns plain source text into highlighted HTML
pub trait Highlighter {
    fn highlight(&self, source: &str) -> String;
}

const KEYWORDS: &[&str] = &[
    "as", "break", "case", "class", "const", "continue", "default", "do", "else", "export",
    "for", "from", "function", "if", "import", "in", "let", "new", "of", "return", "switch",
    "this", "throw", "typeof", "var", "while",
];

const LITERALS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

const BUILT_INS: &[&str] = &["Math", "window", "document", "console"];

/// Small JavaScript tokenizer covering what the listing contains
#[derive(Debug, Clone, Copy, Default)]
pub struct JsHighlighter;

impl Highlighter for JsHighlighter {
    fn highlight(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() * 2);
        let mut i = 0;

        while let Some(c) = source[i..].chars().next() {
            let rest = &source[i..];

            let len = if rest.starts_with("//") {
                let end = rest.find('\n').unwrap_or(rest.len());
                push_span(&mut out, "hljs-comment", &rest[..end]);
                end
            } else if matches!(c, '"' | '\'' | '`') {
                let end = string_end(rest, c);
                push_span(&mut out, "hljs-string", &rest[..end]);
                end
            } else if c.is_ascii_digit() {
                let end = rest
                    .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '_'))
                    .unwrap_or(rest.len());
                push_span(&mut out, "hljs-number", &rest[..end]);
                end
            } else if is_ident_start(c) {
                let end = rest
                    .find(|ch: char| !is_ident_continue(ch))
                    .unwrap_or(rest.len());
                push_word(&mut out, &rest[..end]);
                end
            } else {
                escape_into(&mut out, &rest[..c.len_utf8()]);
                c.len_utf8()
            };

            i += len;
        }

        out
    }
}

fn push_word(out: &mut String, word: &str) {
    let class = if KEYWORDS.contains(&word) {
        Some("hljs-keyword")
    } else if LITERALS.contains(&word) {
        Some("hljs-literal")
    } else if BUILT_INS.contains(&word) {
        Some("hljs-built_in")
    } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        Some("hljs-title class_")
    } else {
        None
    };

    match class {
        Some(class) => push_span(out, class, word),
        None => escape_into(out, word),
    }
}

/// Byte length of the string literal at the start of `rest`, quotes included.
/// Unterminated single-line strings stop at the line break.
fn string_end(rest: &str, quote: char) -> usize {
    let mut escaped = false;
    for (idx, ch) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return idx + ch.len_utf8();
        } else if ch == '\n' && quote != '`' {
            return idx;
        }
    }
    rest.len()
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    escape_into(out, text);
    out.push_str("</span>");
}

/// HTML-escape `text` into `out`
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

/// In-memory code view: plain text plus its highlighted markup.
///
/// Markup is always rebuilt from the plain text, never from previous markup.
#[derive(Debug, Clone, Default)]
pub struct CodeView {
    text: String,
    markup: String,
    highlighter: JsHighlighter,
}

impl CodeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted HTML (empty until `highlight` runs)
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl OutputSurface for CodeView {
    fn replace_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.markup.clear();
    }

    fn highlight(&mut self) {
        self.markup = self.highlighter.highlight(&self.text);
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_declaration() {
        let html = JsHighlighter.highlight("const box = new THREE.Mesh();");
        assert_eq!(
            html,
            "<span class=\"hljs-keyword\">const</span> box = \
             <span class=\"hljs-keyword\">new</span> \
             <span class=\"hljs-title class_\">THREE</span>.\
             <span class=\"hljs-title class_\">Mesh</span>();"
        );
    }

    #[test]
    fn test_highlight_numbers_and_comments() {
        let html = JsHighlighter.highlight("// note\nbox.position.set(1.5, -2, 0);");
        assert!(html.starts_with("<span class=\"hljs-comment\">// note</span>\n"));
        assert!(html.contains("<span class=\"hljs-number\">1.5</span>"));
        assert!(html.contains("-<span class=\"hljs-number\">2</span>"));
    }

    #[test]
    fn test_highlight_identifier_with_digits_is_not_number() {
        let html = JsHighlighter.highlight("box2");
        assert_eq!(html, "box2");
    }

    #[test]
    fn test_highlight_escapes_html() {
        let html = JsHighlighter.highlight("import * as THREE from \"a<b>\";");
        assert!(html.contains("<span class=\"hljs-string\">&quot;a&lt;b&gt;&quot;</span>"));
        assert!(!html.contains("a<b>"));
    }

    #[test]
    fn test_unterminated_string_stops_at_line_end() {
        let html = JsHighlighter.highlight("\"abc\nconst");
        assert!(html.starts_with("<span class=\"hljs-string\">&quot;abc</span>\n"));
        assert!(html.ends_with("<span class=\"hljs-keyword\">const</span>"));
    }

    #[test]
    fn test_code_view_rehighlights_from_text() {
        let mut view = CodeView::new();
        view.replace_text("const a = 1;");
        assert_eq!(view.markup(), "");
        view.highlight();
        let first = view.markup().to_string();
        view.highlight();
        assert_eq!(view.markup(), first);

        view.replace_text("let b;");
        assert_eq!(view.text(), "let b;");
        assert_eq!(view.markup(), "");
        view.highlight();
        assert!(view.markup().starts_with("<span class=\"hljs-keyword\">let</span>"));
    }
}
