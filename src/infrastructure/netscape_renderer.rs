use crate::domain::model::{Escaping, LinkRecord};
use crate::domain::traits::BookmarkRenderer;

pub const DOCUMENT_HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
<TITLE>Bookmarks</TITLE>\n\
<H1>Bookmarks</H1>\n\
<DL><p>\n";

pub const DOCUMENT_FOOTER: &str = "\n</DL><p>\n";

/// Renders the fixed Netscape bookmark template browsers accept on import.
///
/// Each entry line ends in `\n`, so a non-empty list is followed by a blank
/// line before the closing `</DL><p>`. Importers rely on that exact shape.
pub struct NetscapeRenderer;

impl BookmarkRenderer for NetscapeRenderer {
    fn render(&self, links: &[LinkRecord], escaping: Escaping) -> String {
        let mut out = String::with_capacity(
            DOCUMENT_HEADER.len() + DOCUMENT_FOOTER.len() + links.len() * 128,
        );
        out.push_str(DOCUMENT_HEADER);
        for link in links {
            out.push_str(&render_entry(link, escaping));
        }
        out.push_str(DOCUMENT_FOOTER);
        out
    }
}

pub fn render_entry(link: &LinkRecord, escaping: Escaping) -> String {
    format!(
        "<DT><A HREF=\"{url}\" ADD_DATE=\"{time_added}\" LAST_VISIT=\"\" LAST_MODIFIED=\"\">{title}</A>\n",
        url = escaping.apply(&link.url),
        time_added = escaping.apply(&link.time_added),
        title = escaping.apply(&link.title),
    )
}
