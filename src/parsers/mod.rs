pub mod meta;
pub mod sections;

#[cfg(test)]
mod tests;

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Parses raw markup into a DOM tree.
///
/// The parser is tolerant: any byte sequence produces a tree, degrading
/// gracefully on malformed input rather than failing.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Collapses all runs of whitespace into single spaces and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collects the visible text of an element, whitespace-collapsed.
///
/// Skips script/style/noscript/template subtrees, which carry text nodes
/// but render nothing.
pub fn visible_text(element: ElementRef) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect_text(element, &mut parts);
    collapse_whitespace(&parts.join(" "))
}

fn collect_text(element: ElementRef, parts: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => parts.push(text.text.to_string()),
            Node::Element(el) => {
                if is_invisible(el.name()) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, parts);
                }
            }
            _ => {}
        }
    }
}

/// Elements whose text content never renders
pub(crate) fn is_invisible(tag_name: &str) -> bool {
    matches!(tag_name, "script" | "style" | "noscript" | "template")
}
