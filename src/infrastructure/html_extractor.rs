use crate::domain::model::LinkRecord;
use crate::domain::traits::LinkExtractor;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("anchor selector must parse"));

/// Pocket's non-standard attribute carrying the save timestamp.
pub const TIME_ADDED_ATTR: &str = "time_added";

/// Extracts anchors with the html5ever tree builder, which recovers from any
/// malformed markup instead of failing.
pub struct ScraperLinkExtractor;

impl LinkExtractor for ScraperLinkExtractor {
    fn extract(&self, html: &str) -> Vec<LinkRecord> {
        let document = Html::parse_document(html);
        document.select(&ANCHOR_SELECTOR).map(anchor_to_record).collect()
    }
}

fn anchor_to_record(anchor: ElementRef<'_>) -> LinkRecord {
    let element = anchor.value();
    let title = anchor.text().collect::<String>();

    LinkRecord {
        title: title.trim().to_string(),
        url: element.attr("href").unwrap_or_default().to_string(),
        time_added: element.attr(TIME_ADDED_ATTR).unwrap_or_default().to_string(),
    }
}
