//! Walk the taxonomy page markup and build the subject → category mapping.
//!
//! The page layout this targets:
//!
//! ```text
//! <div id="category_taxonomy_list">
//!   <h2 class="accordion-head">Computer Science</h2>
//!   <div class="accordion-body">
//!     <div class="columns">
//!       <div class="column is-one-fifth">
//!         <h4>cs.LG <span>(Machine Learning)</span></h4>
//!       </div>
//!       ...
//! ```
//!
//! Each subject header is followed by its body; every category cell in the
//! body carries `"<id> (<name>)"` as the text of its first child element.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, TaxonomyError};
use crate::types::{Category, Taxonomy};

/// `id` of the element wrapping the whole taxonomy.
pub const ANCHOR_ID: &str = "category_taxonomy_list";

/// Class marking a subject header.
pub const SUBJECT_CLASS: &str = "accordion-head";

/// Classes marking a category cell.
pub const CATEGORY_CLASSES: [&str; 2] = ["column", "is-one-fifth"];

/// Separator between identifier and parenthesized name in a category cell.
const CELL_SEPARATOR: &str = " (";

/// Extract the taxonomy from the page HTML.
///
/// Fails only when the document is empty or the anchor container is missing.
/// Cells that do not read `"<id> (<name>)"` are skipped.
pub fn extract_taxonomy(html: &str) -> Result<Taxonomy> {
    if html.trim().is_empty() {
        return Err(TaxonomyError::MalformedDocument(
            "document has no content".to_string(),
        ));
    }

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(count = document.errors.len(), "recovered HTML parse errors");
    }

    let anchor_sel = compile(&format!("#{ANCHOR_ID}"))?;
    let subject_sel = compile(&format!(".{SUBJECT_CLASS}"))?;
    let category_sel = compile(&format!(".{}", CATEGORY_CLASSES.join(".")))?;

    let container = document
        .select(&anchor_sel)
        .next()
        .ok_or_else(|| TaxonomyError::MissingAnchor(ANCHOR_ID.to_string()))?;

    let mut taxonomy = Taxonomy::new();

    for header in container.select(&subject_sel) {
        let subject = normalized_text(&header);
        taxonomy.insert_subject(subject.as_str());

        let Some(body) = next_element_sibling(&header) else {
            debug!(%subject, "subject header has no body");
            continue;
        };

        for cell in body.select(&category_sel) {
            let Some(first) = first_element_child(&cell) else {
                continue;
            };
            let text = normalized_text(&first);
            match parse_category_text(&text) {
                Some(category) => taxonomy.push_category(&subject, category),
                None => debug!(%subject, cell = %text, "skipping malformed category cell"),
            }
        }
    }

    Ok(taxonomy)
}

/// Parse `"<id> (<name>)"` into a [`Category`].
///
/// The text is split on `" ("` with empty pieces dropped. Anything other
/// than exactly two pieces is rejected, including names that themselves
/// contain `" ("`. The last character of the second piece (the closing
/// parenthesis) is removed.
pub fn parse_category_text(text: &str) -> Option<Category> {
    let parts: Vec<&str> = text
        .split(CELL_SEPARATOR)
        .filter(|part| !part.is_empty())
        .collect();

    let [id, rest] = parts.as_slice() else {
        return None;
    };

    let mut name = rest.chars();
    name.next_back();
    Some(Category::new(*id, name.as_str()))
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| TaxonomyError::MalformedDocument(format!("selector {css:?}: {e}")))
}

/// Text content with runs of whitespace collapsed and the ends trimmed.
fn normalized_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn next_element_sibling<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn first_element_child<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.children().find_map(ElementRef::wrap)
}
