//! Content normalization
//!
//! Strips non-content markup from a fetched page and collapses the visible
//! text into trimmed, non-empty lines. Pure and deterministic; truncation
//! for the AI request happens downstream in the summarizer.

use ego_tree::NodeRef;
use scraper::{Html, Node};
use tracing::debug;

/// Elements whose entire subtree carries no page content
const EXCLUDED_ELEMENTS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Extract the visible text content from raw HTML
///
/// Text under script, style, nav, footer, and header elements is dropped.
/// The remaining text is split into lines, each line is trimmed, empty
/// lines are discarded, and the result is rejoined with line breaks.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    let content = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    debug!("Extracted {} characters of content", content.len());
    content
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) if EXCLUDED_ELEMENTS.contains(&element.name()) => return,
        Node::Text(text) => {
            out.push_str(&text);
            out.push('\n');
        }
        _ => {}
    }

    for child in node.children() {
        collect_text(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scripts_and_styles() {
        let html = r#"
            <html><head>
                <style>body { color: red; }</style>
                <script>console.log("tracking");</script>
            </head><body>
                <p>Room 304 available</p>
                <script>moreTracking();</script>
            </body></html>
        "#;

        let text = extract_text(html);
        assert_eq!(text, "Room 304 available");
    }

    #[test]
    fn test_strips_navigation_chrome() {
        let html = r#"
            <body>
                <header>Site Title</header>
                <nav><a href="/">Home</a></nav>
                <main>Two studios open</main>
                <footer>Copyright</footer>
            </body>
        "#;

        let text = extract_text(html);
        assert_eq!(text, "Two studios open");
    }

    #[test]
    fn test_collapses_whitespace_lines() {
        let html = "<body><p>  first  </p>\n\n<p>\n   second\n</p></body>";
        assert_eq!(extract_text(html), "first\nsecond");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let html = "<body><p>Room A</p><p>Room B: $900</p></body>";
        let once = extract_text(html);
        let twice = extract_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_document_yields_empty_string() {
        assert_eq!(extract_text(""), "");
    }
}
