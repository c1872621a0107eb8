// strategies.rs
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

/// One way of locating a field's raw text in a parsed page.
///
/// `locate` returns `Some` as soon as the anchor is found, even when the text
/// it carries is empty, so a located-but-empty anchor stops the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Stripped text of the first element matching a CSS selector.
    ElementText(&'static str),
    /// An attribute of the first element matching a CSS selector.
    Attribute {
        selector: &'static str,
        attr: &'static str,
    },
    /// First text node, in document order, containing the needle.
    TextContaining(&'static str),
}

pub const ADDRESS: &[Strategy] = &[
    Strategy::ElementText(r#"[data-testid="address"]"#),
    Strategy::ElementText("address"),
];

pub const PRICE: &[Strategy] = &[
    Strategy::ElementText(r#"[data-testid="price"]"#),
    Strategy::TextContaining("$"),
];

pub const DESCRIPTION: &[Strategy] = &[
    Strategy::ElementText(r#"[data-testid="home-description-text"]"#),
    Strategy::Attribute {
        selector: r#"meta[name="description"]"#,
        attr: "content",
    },
];

impl Strategy {
    pub fn locate(&self, document: &Html) -> Option<String> {
        match *self {
            Strategy::ElementText(selector) => {
                first_element(document, selector).map(stripped_text)
            }
            Strategy::Attribute { selector, attr } => first_element(document, selector)
                .map(|el| el.value().attr(attr).unwrap_or_default().to_string()),
            Strategy::TextContaining(needle) => {
                document.tree.root().descendants().find_map(|node| match node.value() {
                    Node::Text(text) if text.contains(needle) => Some(text.to_string()),
                    _ => None,
                })
            }
        }
    }
}

/// Runs the chain in order and returns the first located text, trimmed.
/// Empty or whitespace-only text comes back as `None`.
pub fn first_match(document: &Html, field: &str, strategies: &[Strategy]) -> Option<String> {
    let (strategy, raw) = strategies
        .iter()
        .find_map(|s| s.locate(document).map(|raw| (s, raw)))?;

    debug!(field, ?strategy, "field anchor located");
    normalize(&raw)
}

pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Every descendant text fragment trimmed, empties dropped, joined with no
/// separator.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn first_element<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(e) => {
            warn!(selector, error = %e, "skipping unparsable selector");
            return None;
        }
    };

    document.select(&selector).next()
}
