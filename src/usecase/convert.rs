use crate::domain::error::{ConvertError, ConvertResult};
use crate::domain::model::{ConvertOutcome, Escaping, LinkRecord};
use crate::domain::traits::{BookmarkRenderer, LinkExtractor};
use crate::infrastructure::file_adapter::{read_export_file, write_bookmarks_file};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Reads a Pocket export and returns its links in document order.
///
/// Read failures degrade to an empty list after logging; they never
/// propagate. Malformed markup is the extractor's problem and never fails.
pub fn extract_links(path: &Path, extractor: &dyn LinkExtractor) -> Vec<LinkRecord> {
    match read_export_file(path) {
        Ok(html) => {
            let links = extractor.extract(&html);
            debug!(path = %path.display(), count = links.len(), "extracted links");
            links
        }
        Err(e) => {
            error!("{e}");
            Vec::new()
        }
    }
}

pub fn write_links(
    links: &[LinkRecord],
    path: &Path,
    renderer: &dyn BookmarkRenderer,
    escaping: Escaping,
) -> ConvertResult<()> {
    let document = renderer.render(links, escaping);
    write_bookmarks_file(path, &document)
}

/// Runs one conversion: extract, then write only if anything was found.
pub fn convert(
    input: &Path,
    output: &Path,
    extractor: &dyn LinkExtractor,
    renderer: &dyn BookmarkRenderer,
    escaping: Escaping,
) -> ConvertOutcome {
    let links = extract_links(input, extractor);
    if links.is_empty() {
        warn!("{}", ConvertError::NoLinksFound);
        return ConvertOutcome::Skipped;
    }

    let count = links.len();
    match write_links(&links, output, renderer, escaping) {
        Ok(()) => {
            info!(
                "Successfully converted {count} links to {}",
                output.display()
            );
            ConvertOutcome::Written {
                count,
                output: output.to_path_buf(),
            }
        }
        Err(e) => {
            error!("{e}");
            ConvertOutcome::WriteFailed {
                count,
                output: output.to_path_buf(),
            }
        }
    }
}
