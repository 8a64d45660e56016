//! Single source of truth for the docset bundle layout.
//!
//! This module defines WHERE things live inside a docset. It has no I/O.
//!
//! ```text
//! <output>/<name>/                # e.g. Guava.docset
//! └── Contents/
//!     ├── Info.plist              # Metadata
//!     └── Resources/
//!         ├── icon.png            # Optional icon
//!         ├── docSet.dsidx        # SQLite search index
//!         └── Documents/          # Copy of the Javadoc tree
//! ```

use std::path::{Path, PathBuf};

/// Search index file name expected by Dash.
pub const DB_FILE: &str = "docSet.dsidx";

/// Docset root for `name` under `output`: `<output>/<name>`
pub fn docset_root(output: &Path, name: &str) -> PathBuf {
    output.join(name)
}

/// `<root>/Contents/`
pub fn contents_dir(docset_root: &Path) -> PathBuf {
    docset_root.join("Contents")
}

/// `<root>/Contents/Resources/`
pub fn resources_dir(docset_root: &Path) -> PathBuf {
    contents_dir(docset_root).join("Resources")
}

/// `<root>/Contents/Resources/Documents/`
pub fn documents_dir(docset_root: &Path) -> PathBuf {
    resources_dir(docset_root).join("Documents")
}

/// `<root>/Contents/Info.plist`
pub fn plist_path(docset_root: &Path) -> PathBuf {
    contents_dir(docset_root).join("Info.plist")
}

/// `<root>/Contents/Resources/icon.png`
pub fn icon_path(docset_root: &Path) -> PathBuf {
    resources_dir(docset_root).join("icon.png")
}

/// `<root>/Contents/Resources/docSet.dsidx`
pub fn db_path(docset_root: &Path) -> PathBuf {
    resources_dir(docset_root).join(DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docset_root() {
        let out = Path::new("/tmp/out");
        assert_eq!(docset_root(out, "Guava.docset"), Path::new("/tmp/out/Guava.docset"));
    }

    #[test]
    fn test_bundle_paths() {
        let root = Path::new("Guava.docset");
        assert_eq!(
            db_path(root),
            Path::new("Guava.docset/Contents/Resources/docSet.dsidx")
        );
        assert_eq!(plist_path(root), Path::new("Guava.docset/Contents/Info.plist"));
        assert_eq!(
            documents_dir(root),
            Path::new("Guava.docset/Contents/Resources/Documents")
        );
        assert_eq!(icon_path(root), Path::new("Guava.docset/Contents/Resources/icon.png"));
    }
}
