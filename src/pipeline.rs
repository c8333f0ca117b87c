use crate::config::ScrapeConfig;
use crate::fetchers::{browser, http};
use crate::parsers::{self, meta, sections};
use crate::results::{ErrorPhase, Interactions, Meta, ScrapeError, ScrapeResult};
use scraper::{Html, Selector};

/// Runs the full scrape pipeline for one URL.
///
/// Static fetch first; if that fails or the completeness heuristic flags
/// the page as JS-dependent, a rendered fetch follows. Extraction then
/// runs on whichever DOM is available (rendered if it succeeded, else the
/// static one, else none). Every failure becomes a non-fatal error in the
/// result; this function always returns an assembled `ScrapeResult`.
pub async fn scrape(url: &str, config: &ScrapeConfig) -> ScrapeResult {
    let mut errors: Vec<ScrapeError> = Vec::new();
    let mut interactions = Interactions::default();
    interactions.visit(url);

    // Scheme validation happens before any network activity
    if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(ScrapeError::new(
            ErrorPhase::Fetch,
            "URL must start with http:// or https://",
        ));
        return ScrapeResult::assemble(Meta::default(), Vec::new(), interactions, errors);
    }

    // Static fetch is always attempted first, regardless of outcome
    let static_html = match http::fetch_static(url, config).await {
        Ok(body) => Some(body),
        Err(e) => {
            ::log::warn!("Static fetch failed for {}: {}", url, e);
            errors.push(ScrapeError::new(
                ErrorPhase::Fetch,
                format!("static fetch failed: {}", e),
            ));
            None
        }
    };

    let needs_render = match static_html.as_deref() {
        Some(body) => {
            let doc = parsers::parse_document(body);
            needs_rendering(&doc, config.completeness_threshold)
        }
        None => true,
    };

    let mut html = static_html;
    if needs_render {
        ::log::info!("Static content insufficient, rendering: {}", url);
        let outcome = browser::fetch_rendered(url, config).await;
        interactions = outcome.interactions;
        if outcome.html.is_some() {
            // Rendering superseded the static path; a stale static fetch
            // error no longer describes the result
            errors.retain(|e| e.phase != ErrorPhase::Fetch);
            html = outcome.html;
        }
        errors.extend(outcome.errors);
    } else {
        ::log::debug!("Static content sufficient for {}", url);
    }

    let (meta, sections) = match html.as_deref() {
        Some(body) => {
            let doc = parsers::parse_document(body);
            (
                meta::extract_meta(&doc, url),
                sections::extract_sections(&doc, url, config.text_limit),
            )
        }
        None => (Meta::default(), Vec::new()),
    };

    ScrapeResult::assemble(meta, sections, interactions, errors)
}

/// Completeness heuristic: pages whose visible body text is shorter than
/// the threshold are treated as JS-dependent.
///
/// This is a size proxy, not a guarantee; short static pages over-render
/// and verbose JS shells under-render, both accepted tradeoffs.
pub fn needs_rendering(doc: &Html, threshold: usize) -> bool {
    let selector = Selector::parse("body").unwrap();
    let text_len = doc
        .select(&selector)
        .next()
        .map(|body| parsers::visible_text(body).chars().count())
        .unwrap_or(0);

    ::log::debug!(
        "Completeness heuristic: {} visible chars against threshold {}",
        text_len,
        threshold
    );
    text_len < threshold
}
