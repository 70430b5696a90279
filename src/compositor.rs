//! ## Document compositor
//!
//! Merges the three playground buffers (markup, stylesheet, script) into a
//! single standalone document that can be loaded into a sandboxed frame.
//!
//! ```rust
//! use codelearn::compositor::compose;
//!
//! let document = compose("<h1>Hi</h1>", "h1{color:red}", "console.log(1)");
//! assert!(document.as_str().contains("<style>h1{color:red}</style>"));
//! ```

use std::fmt;

mod markup;

/// A complete, self-contained document produced by [`compose`].
///
/// The document is regenerated wholesale on every composition and has no
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument(String);

impl ComposedDocument {
    /// Returns the document source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the document and returns its source.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the length of the document in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document is empty. It never is.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ComposedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComposedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Composes a standalone document from the three source buffers.
///
/// Any document wrapper in `markup` (doctype, `<html>`, `<head>` and its
/// content, `<body>`) is removed and the remaining body content is placed
/// in a fresh skeleton together with one `<style>` block holding `style`
/// and one `<script>` block holding `script`, both verbatim.
///
/// Inputs are never validated; malformed markup is carried over as is.
pub fn compose(markup: &str, style: &str, script: &str) -> ComposedDocument {
    let body = markup::body_content(markup);
    let mut document =
        String::with_capacity(body.len() + style.len() + script.len() + SKELETON_LEN);
    document.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>");
    document.push_str(style);
    document.push_str("</style>\n</head>\n<body>\n");
    if !body.is_empty() {
        document.push_str(&body);
        document.push('\n');
    }
    document.push_str("<script>\n");
    document.push_str(script);
    document.push_str("\n</script>\n</body>\n</html>\n");
    ComposedDocument(document)
}

/// Size of the fixed skeleton around the buffers.
const SKELETON_LEN: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn body_of(document: &ComposedDocument) -> &str {
        let source = document.as_str();
        let start = source.find("<body>").expect("body start") + "<body>".len();
        let end = source.rfind("</body>").expect("body end");
        &source[start..end]
    }

    #[test]
    fn test_compose_fragment() {
        let document = compose("<h1>Hi</h1>", "h1{color:red}", "console.log(1)");
        assert_eq!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <style>h1{color:red}</style>\n</head>\n<body>\n<h1>Hi</h1>\n\
             <script>\nconsole.log(1)\n</script>\n</body>\n</html>\n",
            document.as_str()
        );
        assert_eq!(1, count(document.as_str(), "<style>h1{color:red}</style>"));
        assert_eq!(1, count(document.as_str(), "console.log(1)"));
        assert_eq!(1, count(document.as_str(), "<html"));
    }

    #[test]
    fn test_compose_full_document() {
        let markup = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<title>My Project</title>\n\
                      <style>p { color: blue }</style>\n</head>\n<body>\n<p>Start coding here...</p>\n\
                      </body>\n</html>";
        let document = compose(markup, "body { margin: 0 }", "");
        assert_eq!(1, count(document.as_str(), "<style>"));
        assert_eq!(1, count(document.as_str(), "<head>"));
        assert_eq!(1, count(document.as_str(), "<!DOCTYPE"));
        assert!(!document.as_str().contains("My Project"));
        assert_eq!("\n<p>Start coding here...</p>\n<script>\n\n</script>\n", body_of(&document));
    }

    #[test]
    fn test_compose_empty_buffers() {
        let document = compose("", "", "");
        assert_eq!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style></style>\n\
             </head>\n<body>\n<script>\n\n</script>\n</body>\n</html>\n",
            document.as_str()
        );
    }

    #[test]
    fn test_compose_keeps_malformed_markup() {
        let document = compose("<div><p>unclosed <b>bold", "", "");
        assert!(body_of(&document).contains("<div><p>unclosed <b>bold"));
    }

    #[test]
    fn test_head_content_does_not_reach_body() {
        let document = compose(
            "<head><title>secret</title><meta name=x></head><p>visible</p>",
            "",
            "",
        );
        let body = body_of(&document);
        assert!(!body.contains("secret"));
        assert!(!body.contains("<meta"));
        assert!(body.contains("<p>visible</p>"));
    }

    #[test]
    fn test_display_matches_source() {
        let document = compose("a", "b", "c");
        assert_eq!(document.as_str(), document.to_string());
        assert_eq!(document.len(), document.clone().into_string().len());
    }

    /// Markup assembled from wrapper tags and plain content.
    fn markup_strategy() -> impl Strategy<Value = String> {
        let piece = prop_oneof![
            Just("<!DOCTYPE html>".to_string()),
            Just("<html lang=\"en\">".to_string()),
            Just("</html>".to_string()),
            Just("<head><title>t</title></head>".to_string()),
            Just("<HEAD>".to_string()),
            Just("</head>".to_string()),
            Just("<body class='x'>".to_string()),
            Just("</BODY>".to_string()),
            Just("<h1>Hi</h1>".to_string()),
            Just("<!-- note -->".to_string()),
            Just("a < b".to_string()),
            "[a-zA-Z0-9 =/]{0,12}",
        ];
        prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
    }

    /// Buffer content that cannot close the block it is placed in.
    fn buffer_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9{}:;(). ]{0,24}"
    }

    proptest! {
        #[test]
        fn test_exactly_one_style_and_script_block(
            markup in markup_strategy(),
            style in buffer_strategy(),
            script in buffer_strategy(),
        ) {
            let document = compose(&markup, &style, &script);
            let source = document.as_str();
            let style_block = format!("<style>{style}</style>");
            let script_block = format!("<script>\n{script}\n</script>");
            prop_assert_eq!(1, count(source, &style_block));
            prop_assert_eq!(1, count(source, &script_block));
            prop_assert_eq!(1, count(&source.to_ascii_lowercase(), "<html"));
            prop_assert_eq!(1, count(&source.to_ascii_lowercase(), "<body"));
            prop_assert!(source.ends_with("</html>\n"));
        }

        #[test]
        fn test_compose_is_idempotent(
            markup in markup_strategy(),
            style in buffer_strategy(),
            script in buffer_strategy(),
        ) {
            prop_assert_eq!(
                compose(&markup, &style, &script),
                compose(&markup, &style, &script)
            );
        }

        #[test]
        fn test_arbitrary_input_never_panics(markup in any::<String>()) {
            let document = compose(&markup, "", "");
            prop_assert!(document.as_str().starts_with("<!DOCTYPE html>"));
        }
    }
}
