use serde::{Deserialize, Serialize};

/// Top-level output of a scrape. One is produced per call, no matter how
/// many phases failed along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    /// Page metadata (title, description, canonical URL, language)
    pub meta: Meta,

    /// Extracted sections in document order
    pub sections: Vec<Section>,

    /// Record of scroll/click actions performed during rendering
    pub interactions: Interactions,

    /// Non-fatal errors collected across all phases
    pub errors: Vec<ScrapeError>,
}

impl ScrapeResult {
    /// Combine the pieces into the final envelope. Pure assembly: every
    /// field is always present, so the serialized shape never depends on
    /// which upstream phases succeeded.
    pub fn assemble(
        meta: Meta,
        sections: Vec<Section>,
        interactions: Interactions,
        errors: Vec<ScrapeError>,
    ) -> Self {
        Self {
            meta,
            sections,
            interactions,
            errors,
        }
    }
}

/// Page metadata. Absent values are `None`, never empty strings, so
/// "not present" stays distinguishable from "present but empty".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
    pub language: Option<String>,
}

/// Semantic vocabulary for extracted sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionTag {
    Header,
    Nav,
    Section,
    Article,
    Footer,
    /// Synthetic tag for top-level content outside any semantic element
    Other,
}

/// A semantically tagged region of the page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Which semantic element this section came from
    pub tag: SectionTag,

    /// Heading texts (h1..h6) in document order
    pub headings: Vec<String>,

    /// Concatenated visible text, whitespace-collapsed, possibly truncated
    pub text: String,

    /// Anchor elements found within the section
    pub links: Vec<Link>,

    /// Image elements found within the section
    pub images: Vec<Image>,

    /// One entry per ul/ol, each holding its item texts
    pub lists: Vec<Vec<String>>,

    /// One entry per table, each holding rows of cell texts
    pub tables: Vec<Vec<Vec<String>>>,

    /// True when `text` was cut at the configured limit
    pub truncated: bool,
}

impl Section {
    /// Create an empty section with the given tag
    pub fn empty(tag: SectionTag) -> Self {
        Self {
            tag,
            headings: Vec::new(),
            text: String::new(),
            links: Vec::new(),
            images: Vec::new(),
            lists: Vec::new(),
            tables: Vec::new(),
            truncated: false,
        }
    }

    /// True when the section carries no content at all
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
            && self.text.is_empty()
            && self.links.is_empty()
            && self.images.is_empty()
            && self.lists.is_empty()
            && self.tables.is_empty()
    }
}

/// A hyperlink discovered inside a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// An image discovered inside a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Record of the interactions performed during a rendered fetch.
/// A purely static scrape leaves the counts at zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interactions {
    /// Number of completed scroll-to-bottom steps
    pub scroll_count: u32,

    /// One selector descriptor per successful click
    pub clicked_selectors: Vec<String>,

    /// Navigated URL plus any same-page states reached, insertion order
    pub visited_urls: Vec<String>,
}

impl Interactions {
    /// Record a visited URL, preserving insertion order and skipping
    /// duplicates
    pub fn visit(&mut self, url: &str) {
        if !self.visited_urls.iter().any(|u| u == url) {
            self.visited_urls.push(url.to_string());
        }
    }
}

/// Pipeline phase an error was caught in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPhase {
    /// Network/HTTP failure during static retrieval
    Fetch,
    /// Browser launch, navigation or interaction failure
    Render,
    /// Input the tolerant parser could not recover from at all
    Parse,
}

/// A non-fatal error. Presence never prevents a `ScrapeResult` from being
/// returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeError {
    pub phase: ErrorPhase,
    pub message: String,
}

impl ScrapeError {
    pub fn new(phase: ErrorPhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
        }
    }
}
