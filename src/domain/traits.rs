use crate::domain::model::{Escaping, LinkRecord};

pub trait LinkExtractor {
    fn extract(&self, html: &str) -> Vec<LinkRecord>;
}

pub trait BookmarkRenderer {
    fn render(&self, links: &[LinkRecord], escaping: Escaping) -> String;
}
