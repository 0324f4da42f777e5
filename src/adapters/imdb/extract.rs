//! Selector-based extraction of trivia facts and page titles.
//!
//! Pages arrive as raw HTML strings; these helpers pull the interesting
//! fragments out with CSS selectors and collapse their text content into
//! plain single-spaced strings. Everything here is synchronous so the
//! parsed document never lives across an await point.

use scraper::{Html, Selector};

/// Trivia entries on a title page live in `div.sodatext` blocks.
const TITLE_FACT_SELECTOR: &str = "div.sodatext";

/// Biography pages interleave facts across odd and even rows.
const BIO_FACT_SELECTOR: &str = "div.sode.odd, div.sode.even";

/// Canonical display name, as printed in the page header link.
const PAGE_TITLE_SELECTOR: &str = "a[itemprop=\"url\"]";

/// Suffix the site appends to every document title.
const SITE_TITLE_SUFFIX: &str = " - IMDb";

/// Extract trivia facts from a title trivia page, in document order.
pub fn title_facts(html: &str) -> Vec<String> {
    collect_facts(html, TITLE_FACT_SELECTOR)
}

/// Extract biography facts from a person page, in document order.
pub fn bio_facts(html: &str) -> Vec<String> {
    collect_facts(html, BIO_FACT_SELECTOR)
}

/// Extract the display title of the page, if present.
///
/// Prefers the header link carrying `itemprop="url"`; falls back to the
/// document `<title>` with the site suffix trimmed off.
pub fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let header = Selector::parse(PAGE_TITLE_SELECTOR).expect("page title selector is valid");
    if let Some(el) = document.select(&header).next() {
        let text = element_text(&el);
        if !text.is_empty() {
            return Some(text);
        }
    }

    let title = Selector::parse("title").expect("document title selector is valid");
    document
        .select(&title)
        .next()
        .map(|el| element_text(&el))
        .map(|text| text.trim_end_matches(SITE_TITLE_SUFFIX).trim().to_string())
        .filter(|text| !text.is_empty())
}

fn collect_facts(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let sel = Selector::parse(selector).expect("fact selector is valid");

    document
        .select(&sel)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Collect all visible text content from an element, trimmed and whitespace-
/// collapsed.
fn element_text(el: &scraper::ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
