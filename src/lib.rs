//! Converts a Pocket HTML export into a Netscape bookmarks file.

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
