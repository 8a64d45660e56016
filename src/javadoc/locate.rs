//! Finds the index pages of a generated Javadoc tree.
//!
//! Javadoc writes either one consolidated `index-all.html` or, with
//! `-splitindex`, one page per letter under `index-files/`. Both layouts are
//! recognized; the split directory wins when both are present.

use crate::error::LocateFailure;
use crate::model::{IndexData, IndexFile};
use std::path::Path;
use tracing::debug;

/// Directory holding the per-letter pages of a split index.
pub const SPLIT_INDEX_DIR: &str = "index-files";

/// Consolidated index page.
pub const INDEX_ALL_FILE: &str = "index-all.html";

/// Pages preferred as the docset landing page, in priority order.
pub const LANDING_PAGE_CANDIDATES: &[&str] = &["overview-summary.html"];

/// Locate the landing page and the index pages under `javadoc_root`.
pub fn find_index_files(javadoc_root: &Path) -> Result<IndexData, LocateFailure> {
    if !javadoc_root.is_dir() {
        return Err(LocateFailure::MissingRoot(javadoc_root.to_path_buf()));
    }
    debug!("Looking for javadoc index in {}", javadoc_root.display());

    let mut files_to_index = find_split_index(javadoc_root)?;
    if files_to_index.is_empty() {
        let index_all = javadoc_root.join(INDEX_ALL_FILE);
        if index_all.is_file() {
            files_to_index.push(IndexFile {
                path: index_all,
                relative: INDEX_ALL_FILE.to_string(),
            });
        }
    }

    let Some(first) = files_to_index.first() else {
        return Err(LocateFailure::MissingIndexFile(javadoc_root.to_path_buf()));
    };

    let docset_index_file = LANDING_PAGE_CANDIDATES
        .iter()
        .find(|candidate| javadoc_root.join(candidate).is_file())
        .map(|candidate| candidate.to_string())
        .unwrap_or_else(|| first.relative.clone());

    for file in &files_to_index {
        debug!("Found index file {}", file.relative);
    }

    Ok(IndexData {
        docset_index_file,
        files_to_index,
    })
}

/// Collect `index-files/index-N.html`, ordered by N.
fn find_split_index(javadoc_root: &Path) -> Result<Vec<IndexFile>, LocateFailure> {
    let split_dir = javadoc_root.join(SPLIT_INDEX_DIR);
    if !split_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(&split_dir).map_err(|source| LocateFailure::Unreadable {
        path: split_dir.clone(),
        source,
    })?;

    let mut pages: Vec<(u32, IndexFile)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LocateFailure::Unreadable {
            path: split_dir.clone(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(number) = split_page_number(file_name) {
            pages.push((
                number,
                IndexFile {
                    relative: format!("{}/{}", SPLIT_INDEX_DIR, file_name),
                    path,
                },
            ));
        }
    }

    pages.sort_by_key(|(number, _)| *number);
    Ok(pages.into_iter().map(|(_, file)| file).collect())
}

/// `index-12.html` -> `Some(12)`
fn split_page_number(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix("index-")?
        .strip_suffix(".html")?
        .parse()
        .ok()
}
