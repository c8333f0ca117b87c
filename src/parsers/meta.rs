use crate::parsers::collapse_whitespace;
use crate::results::Meta;
use scraper::{Html, Selector};
use url::Url;

/// Extracts page metadata from a parsed document.
///
/// Absent or empty values come back as `None`. The canonical URL is
/// resolved absolute against the page URL when it is relative.
pub fn extract_meta(doc: &Html, page_url: &str) -> Meta {
    Meta {
        title: extract_title(doc),
        description: attr_content(doc, r#"meta[name="description"]"#),
        canonical_url: extract_canonical(doc, page_url),
        language: extract_language(doc),
    }
}

/// Prefers the og:title meta tag, falling back to the <title> element
fn extract_title(doc: &Html) -> Option<String> {
    if let Some(og_title) = attr_content(doc, r#"meta[property="og:title"]"#) {
        return Some(og_title);
    }

    let selector = Selector::parse("title").unwrap();
    doc.select(&selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
        .filter(|t| !t.is_empty())
}

/// Reads the content attribute of the first element matching the selector
fn attr_content(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

fn extract_canonical(doc: &Html, page_url: &str) -> Option<String> {
    let selector = Selector::parse(r#"link[rel="canonical"]"#).unwrap();
    let href = doc
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::trim)
        .filter(|h| !h.is_empty())?;

    // Resolve relative canonical hrefs against the page URL
    match Url::parse(page_url).and_then(|base| base.join(href)) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(_) => Some(href.to_string()),
    }
}

fn extract_language(doc: &Html) -> Option<String> {
    let selector = Selector::parse("html").unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}
