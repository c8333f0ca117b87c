use crate::parsers::{collapse_whitespace, is_invisible, visible_text};
use crate::results::{Image, Link, Section, SectionTag};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracts all semantic sections from a parsed document, in document
/// order, followed by one synthetic "other" section holding any top-level
/// content that sits outside every semantic element.
///
/// Nested semantic elements are each extracted independently; the
/// resulting content duplication is accepted rather than deduplicated.
/// Empty semantic sections are still emitted to preserve structure.
pub fn extract_sections(doc: &Html, page_url: &str, text_limit: usize) -> Vec<Section> {
    let selector = Selector::parse("header, nav, section, article, footer").unwrap();
    let base = Url::parse(page_url).ok();

    let mut sections: Vec<Section> = doc
        .select(&selector)
        .map(|el| extract_element(el, base.as_ref(), text_limit))
        .collect();

    if let Some(other) = extract_other(doc, base.as_ref(), text_limit) {
        sections.push(other);
    }

    ::log::debug!("Extracted {} sections", sections.len());
    sections
}

/// Tags treated as section roots
fn is_semantic(tag_name: &str) -> bool {
    matches!(tag_name, "header" | "nav" | "section" | "article" | "footer")
}

fn section_tag(tag_name: &str) -> SectionTag {
    match tag_name {
        "header" => SectionTag::Header,
        "nav" => SectionTag::Nav,
        "article" => SectionTag::Article,
        "footer" => SectionTag::Footer,
        _ => SectionTag::Section,
    }
}

/// Extracts one section from a semantic element
fn extract_element(element: ElementRef, base: Option<&Url>, text_limit: usize) -> Section {
    let mut section = Section::empty(section_tag(element.value().name()));

    let heading_selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    for heading in element.select(&heading_selector) {
        let text = visible_text(heading);
        if !text.is_empty() {
            section.headings.push(text);
        }
    }

    let (text, truncated) = truncate(visible_text(element), text_limit);
    section.text = text;
    section.truncated = truncated;

    let link_selector = Selector::parse("a[href]").unwrap();
    for anchor in element.select(&link_selector) {
        if let Some(link) = extract_link(anchor, base) {
            section.links.push(link);
        }
    }

    let image_selector = Selector::parse("img[src]").unwrap();
    for img in element.select(&image_selector) {
        if let Some(image) = extract_image(img, base) {
            section.images.push(image);
        }
    }

    let list_selector = Selector::parse("ul, ol").unwrap();
    for list in element.select(&list_selector) {
        if let Some(items) = extract_list(list) {
            section.lists.push(items);
        }
    }

    let table_selector = Selector::parse("table").unwrap();
    for table in element.select(&table_selector) {
        if let Some(rows) = extract_table(table) {
            section.tables.push(rows);
        }
    }

    section
}

fn extract_link(anchor: ElementRef, base: Option<&Url>) -> Option<Link> {
    let href = anchor.value().attr("href")?;
    Some(Link {
        href: resolve(href, base),
        text: visible_text(anchor),
    })
}

fn extract_image(img: ElementRef, base: Option<&Url>) -> Option<Image> {
    let src = img.value().attr("src")?;
    Some(Image {
        src: resolve(src, base),
        alt: img.value().attr("alt").unwrap_or("").trim().to_string(),
    })
}

/// Collects the item texts of a ul/ol; lists with no items are dropped
fn extract_list(list: ElementRef) -> Option<Vec<String>> {
    let item_selector = Selector::parse("li").unwrap();
    let items: Vec<String> = list
        .select(&item_selector)
        .map(visible_text)
        .filter(|t| !t.is_empty())
        .collect();

    if items.is_empty() { None } else { Some(items) }
}

/// Collects a table as rows of cell texts; tables with no cells are dropped
fn extract_table(table: ElementRef) -> Option<Vec<Vec<String>>> {
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td, th").unwrap();

    let rows: Vec<Vec<String>> = table
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).map(visible_text).collect())
        .filter(|cells: &Vec<String>| !cells.is_empty())
        .collect();

    if rows.is_empty() { None } else { Some(rows) }
}

/// Resolves an href/src attribute against the page URL where possible
fn resolve(raw: &str, base: Option<&Url>) -> String {
    match base.and_then(|b| b.join(raw).ok()) {
        Some(resolved) => resolved.to_string(),
        None => raw.to_string(),
    }
}

/// Truncates text to exactly `limit` characters when it is longer
fn truncate(text: String, limit: usize) -> (String, bool) {
    if text.chars().count() <= limit {
        return (text, false);
    }
    (text.chars().take(limit).collect(), true)
}

/// Builds the synthetic "other" section from body content that is not
/// inside any semantic element. Returns None when no such content exists.
fn extract_other(doc: &Html, base: Option<&Url>, text_limit: usize) -> Option<Section> {
    let body_selector = Selector::parse("body").unwrap();
    let body = doc.select(&body_selector).next()?;

    let mut section = Section::empty(SectionTag::Other);
    let mut text_parts: Vec<String> = Vec::new();
    collect_outside(body, base, &mut section, &mut text_parts);

    let (text, truncated) = truncate(collapse_whitespace(&text_parts.join(" ")), text_limit);
    section.text = text;
    section.truncated = truncated;

    if section.is_empty() { None } else { Some(section) }
}

/// Walks the tree below `element`, skipping semantic and invisible
/// subtrees, gathering the same kinds of content a regular section holds
fn collect_outside(
    element: ElementRef,
    base: Option<&Url>,
    section: &mut Section,
    text_parts: &mut Vec<String>,
) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => text_parts.push(text.text.to_string()),
            Node::Element(el) => {
                if is_semantic(el.name()) || is_invisible(el.name()) {
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };

                match el.name() {
                    "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                        let heading = visible_text(child_el);
                        if !heading.is_empty() {
                            section.headings.push(heading);
                        }
                    }
                    "a" => {
                        if let Some(link) = extract_link(child_el, base) {
                            section.links.push(link);
                        }
                    }
                    "img" => {
                        if let Some(image) = extract_image(child_el, base) {
                            section.images.push(image);
                        }
                    }
                    "ul" | "ol" => {
                        if let Some(items) = extract_list(child_el) {
                            section.lists.push(items);
                        }
                    }
                    "table" => {
                        if let Some(rows) = extract_table(child_el) {
                            section.tables.push(rows);
                        }
                        // Cell text is collected via the table rows; the
                        // descent below adds it to the running text too,
                        // mirroring how regular sections behave
                    }
                    _ => {}
                }

                collect_outside(child_el, base, section, text_parts);
            }
            _ => {}
        }
    }
}
