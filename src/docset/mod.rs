//! Docset side of a build: bundle layout, files, metadata and search index.

pub mod index;
pub mod layout;
pub mod plist;
pub mod structure;

pub use index::{create_index, summarize, IndexSummary};
pub use plist::{write_plist, DocsetMetadata};
pub use structure::{copy_files, copy_icon_file, create_docset_structure};
