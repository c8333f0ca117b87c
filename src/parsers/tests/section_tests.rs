use crate::parsers::{parse_document, sections::extract_sections};
use crate::results::SectionTag;

const PAGE_URL: &str = "https://example.com/";
const TEXT_LIMIT: usize = 2000;

#[test]
fn test_list_inside_section() {
    let doc = parse_document("<body><section><ul><li>A</li><li>B</li></ul></section></body>");
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].tag, SectionTag::Section);
    assert_eq!(sections[0].lists, vec![vec!["A".to_string(), "B".to_string()]]);
}

#[test]
fn test_truncation_over_limit() {
    let long_text = "x".repeat(50);
    let html = format!("<body><section><p>{}</p></section></body>", long_text);
    let doc = parse_document(&html);
    let sections = extract_sections(&doc, PAGE_URL, 20);

    assert!(sections[0].truncated);
    // Truncated text length equals the limit exactly
    assert_eq!(sections[0].text.chars().count(), 20);
}

#[test]
fn test_truncation_at_limit_is_not_truncated() {
    let text = "y".repeat(20);
    let html = format!("<body><section><p>{}</p></section></body>", text);
    let doc = parse_document(&html);
    let sections = extract_sections(&doc, PAGE_URL, 20);

    assert!(!sections[0].truncated);
    assert_eq!(sections[0].text, text);
}

#[test]
fn test_text_whitespace_collapsed() {
    let doc = parse_document(
        "<body><section><p>Hello,\n\n   world!</p>  <p>Again</p></section></body>",
    );
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);
    assert_eq!(sections[0].text, "Hello, world! Again");
}

#[test]
fn test_script_and_style_text_excluded() {
    let doc = parse_document(
        "<body><section><script>var hidden = 1;</script><style>p{}</style><p>visible</p></section></body>",
    );
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);
    assert_eq!(sections[0].text, "visible");
}

#[test]
fn test_sections_in_document_order() {
    let doc = parse_document(
        "<body>\
         <header><h1>Top</h1></header>\
         <nav><a href=\"/a\">A</a></nav>\
         <section><p>Middle</p></section>\
         <article><p>Story</p></article>\
         <footer><p>Bottom</p></footer>\
         </body>",
    );
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    let tags: Vec<SectionTag> = sections.iter().map(|s| s.tag).collect();
    assert_eq!(
        tags,
        vec![
            SectionTag::Header,
            SectionTag::Nav,
            SectionTag::Section,
            SectionTag::Article,
            SectionTag::Footer,
        ]
    );
}

#[test]
fn test_nested_semantic_elements_extracted_independently() {
    let doc = parse_document(
        "<body><section><p>Outer</p><article><p>Inner</p></article></section></body>",
    );
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].tag, SectionTag::Section);
    assert_eq!(sections[1].tag, SectionTag::Article);
    // Content duplication across nesting levels is accepted
    assert_eq!(sections[0].text, "Outer Inner");
    assert_eq!(sections[1].text, "Inner");
}

#[test]
fn test_empty_semantic_section_still_emitted() {
    let doc = parse_document("<body><section></section><p>stray</p></body>");
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].tag, SectionTag::Section);
    assert!(sections[0].text.is_empty());
    assert!(!sections[0].truncated);
    assert_eq!(sections[1].tag, SectionTag::Other);
    assert_eq!(sections[1].text, "stray");
}

#[test]
fn test_other_section_collects_content_outside_semantic_elements() {
    let doc = parse_document(
        "<body>\
         <h1>Example Domain</h1>\
         <p>This domain is for use in illustrative examples.</p>\
         <section><p>wrapped</p></section>\
         </body>",
    );
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    assert_eq!(sections.len(), 2);
    let other = &sections[1];
    assert_eq!(other.tag, SectionTag::Other);
    assert_eq!(other.headings, vec!["Example Domain".to_string()]);
    assert_eq!(
        other.text,
        "Example Domain This domain is for use in illustrative examples."
    );
    // Content inside the semantic section is not duplicated into "other"
    assert!(!other.text.contains("wrapped"));
}

#[test]
fn test_no_other_section_when_everything_is_wrapped() {
    let doc = parse_document("<body><section><p>all wrapped</p></section></body>");
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].tag, SectionTag::Section);
}

#[test]
fn test_headings_in_document_order() {
    let doc = parse_document(
        "<body><article><h2>Second level</h2><p>text</p><h3>Third level</h3></article></body>",
    );
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);
    assert_eq!(
        sections[0].headings,
        vec!["Second level".to_string(), "Third level".to_string()]
    );
}

#[test]
fn test_links_resolved_against_page_url() {
    let doc = parse_document(
        r#"<body><nav><a href="/about">About</a><a href="https://other.example/x">Ext</a></nav></body>"#,
    );
    let sections = extract_sections(&doc, "https://example.com/dir/page", TEXT_LIMIT);

    let links = &sections[0].links;
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].href, "https://example.com/about");
    assert_eq!(links[0].text, "About");
    assert_eq!(links[1].href, "https://other.example/x");
}

#[test]
fn test_images_resolved_with_alt() {
    let doc = parse_document(
        r#"<body><header><img src="logo.png" alt="Logo"><img src="/banner.jpg"></header></body>"#,
    );
    let sections = extract_sections(&doc, "https://example.com/dir/page", TEXT_LIMIT);

    let images = &sections[0].images;
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].src, "https://example.com/dir/logo.png");
    assert_eq!(images[0].alt, "Logo");
    assert_eq!(images[1].src, "https://example.com/banner.jpg");
    assert_eq!(images[1].alt, "");
}

#[test]
fn test_table_rows_and_cells() {
    let doc = parse_document(
        "<body><section><table>\
         <tr><th>Name</th><th>Qty</th></tr>\
         <tr><td>Apples</td><td>3</td></tr>\
         </table></section></body>",
    );
    let sections = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    assert_eq!(
        sections[0].tables,
        vec![vec![
            vec!["Name".to_string(), "Qty".to_string()],
            vec!["Apples".to_string(), "3".to_string()],
        ]]
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let doc = parse_document(
        "<body><header><h1>Title</h1></header>\
         <section><p>Some text</p><ul><li>A</li><li>B</li></ul></section>\
         <p>stray tail</p></body>",
    );

    let first = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);
    let second = extract_sections(&doc, PAGE_URL, TEXT_LIMIT);

    // Byte-identical output across runs on the same snapshot
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
