// Infrastructure layer: adapters, file I/O, HTML parsing, logging
pub mod file_adapter;
pub mod html_extractor;
pub mod logging;
pub mod netscape_renderer;
