//! Core data types shared by the locator, extractor and store writer.

use std::fmt;
use std::path::PathBuf;

/// Kinds of entries a docset search index understands.
///
/// The string form is the `type` column value Dash expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Annotation,
    Class,
    Constant,
    Constructor,
    Element,
    Enum,
    Error,
    Exception,
    Field,
    Guide,
    Interface,
    Method,
    Module,
    Package,
    Record,
}

impl SymbolKind {
    /// Kind used when no cue is recognized.
    pub const DEFAULT: SymbolKind = SymbolKind::Guide;

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Annotation => "Annotation",
            SymbolKind::Class => "Class",
            SymbolKind::Constant => "Constant",
            SymbolKind::Constructor => "Constructor",
            SymbolKind::Element => "Element",
            SymbolKind::Enum => "Enum",
            SymbolKind::Error => "Error",
            SymbolKind::Exception => "Exception",
            SymbolKind::Field => "Field",
            SymbolKind::Guide => "Guide",
            SymbolKind::Interface => "Interface",
            SymbolKind::Method => "Method",
            SymbolKind::Module => "Module",
            SymbolKind::Package => "Package",
            SymbolKind::Record => "Record",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry destined for the search index.
///
/// Fields are private so the non-empty invariant holds for every value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolRecord {
    name: String,
    kind: SymbolKind,
    path: String,
}

impl SymbolRecord {
    /// Returns `None` when `name` or `path` is empty.
    pub fn new(name: impl Into<String>, kind: SymbolKind, path: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let path = path.into();
        if name.is_empty() || path.is_empty() {
            return None;
        }
        Some(Self { name, kind, path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Path relative to the documentation root, fragment included.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Result of locating the index pages in a documentation tree.
#[derive(Debug, Clone)]
pub struct IndexData {
    /// Landing page, relative to the documentation root with `/` separators.
    pub docset_index_file: String,
    /// Index pages to scan, in scan order.
    pub files_to_index: Vec<IndexFile>,
}

/// A single index page to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFile {
    /// Absolute (or root-joined) path used for reading.
    pub path: PathBuf,
    /// Path relative to the documentation root with `/` separators.
    pub relative: String,
}

impl IndexFile {
    /// Directory portion of `relative`, empty for files at the root.
    pub fn relative_dir(&self) -> &str {
        match self.relative.rfind('/') {
            Some(idx) => &self.relative[..idx],
            None => "",
        }
    }
}
