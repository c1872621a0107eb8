// extractor.rs
use crate::scraper::strategies::{self, first_match};
use crate::scraper::PropertyRecord;
use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, Selector};
use tracing::debug;

pub const MAX_IMAGES: usize = 5;

/// Parses a listing page into a record. Never fails: anything not found is
/// left as `None`, and malformed markup is handled by the parser.
///
/// Reserved fields (bedrooms, bathrooms, ...) have no heuristics yet and stay
/// `None` until site-specific strategies exist for them.
pub fn extract(html: &str) -> PropertyRecord {
    let document = parse_page(html);

    let record = PropertyRecord {
        address: first_match(&document, "address", strategies::ADDRESS),
        price: first_match(&document, "price", strategies::PRICE),
        description: first_match(&document, "description", strategies::DESCRIPTION),
        image_urls: image_urls(&document),
        ..Default::default()
    };

    debug!(
        address = record.address.is_some(),
        price = record.price.is_some(),
        description = record.description.is_some(),
        images = record.image_urls.len(),
        "listing parsed"
    );

    record
}

/// Parses with scripting disabled so `<noscript>` content is real markup
/// rather than one raw text node.
pub fn parse_page(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    html5ever::parse_document(Html::new_document(), opts).one(html)
}

fn image_urls(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .take(MAX_IMAGES)
        .map(str::to_string)
        .collect()
}
