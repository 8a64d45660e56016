//! Error taxonomy for docset builds.
//!
//! Every failure is fatal to the current build. Lower-level causes are kept
//! as `source()` so verbose reporting can walk the whole chain.

use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error for a single docset build.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Locate(#[from] LocateFailure),

    #[error(transparent)]
    Extract(#[from] ExtractFailure),

    #[error(transparent)]
    Store(#[from] StoreFailure),

    #[error("failed to {action} {}", path.display())]
    Copy {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write metadata file {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The documentation root or its index pages could not be found.
#[derive(Error, Debug)]
pub enum LocateFailure {
    #[error("{} does not exist, or is not a directory", .0.display())]
    MissingRoot(PathBuf),

    #[error(
        "no javadoc index found in {}; expected index-all.html or index-files/",
        .0.display()
    )]
    MissingIndexFile(PathBuf),

    #[error("failed to read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// No symbols could be recovered from the scanned index pages.
#[derive(Error, Debug)]
pub enum ExtractFailure {
    #[error("none of the {0} index file(s) could be read")]
    NoParseableFiles(usize),

    #[error("no symbols found in {0} index file(s)")]
    NoSymbolsFound(usize),
}

/// The search index store could not be created or written.
#[derive(Error, Debug)]
pub enum StoreFailure {
    #[error("failed to create search index {}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to write search index {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to read search index {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to replace existing search index {}", path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build parameters are incomplete or the config file is invalid.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required setting: {0}")]
    MissingField(&'static str),

    #[error("docset name must not be empty")]
    EmptyName,
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
