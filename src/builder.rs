//! Docset build orchestration.
//!
//! A build is a straight line of synchronous steps:
//!
//! ```text
//! Start → StructureCreated → IconCopied → IndexLocated → ContentCopied
//!       → MetadataWritten → IndexBuilt → Done
//! ```
//!
//! Any failing step moves the builder to `Failed` and ends the build. Nothing
//! is retried; rerunning a build overwrites the previous output.

use crate::config::{self, DocsetConfig};
use crate::docset::{self, layout, DocsetMetadata};
use crate::error::BuildError;
use crate::javadoc;
use colored::Colorize;
use std::error::Error as _;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    StructureCreated,
    IconCopied,
    IndexLocated,
    ContentCopied,
    MetadataWritten,
    IndexBuilt,
    Done,
    Failed,
}

impl Stage {
    /// What the builder does to leave this stage.
    pub fn next_action(&self) -> &'static str {
        match self {
            Stage::Start => "creating docset structure",
            Stage::StructureCreated => "copying icon",
            Stage::IconCopied => "locating javadoc index",
            Stage::IndexLocated => "copying documentation",
            Stage::ContentCopied => "writing Info.plist",
            Stage::MetadataWritten => "building search index",
            Stage::IndexBuilt => "finishing",
            Stage::Done | Stage::Failed => "nothing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A build that stopped at `stage`.
#[derive(Error, Debug)]
#[error("{} failed: {source}", .stage.next_action())]
pub struct BuildFailure {
    /// Last stage reached before the failing step
    pub stage: Stage,
    #[source]
    pub source: BuildError,
}

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub docset_root: PathBuf,
    pub db_path: PathBuf,
    /// Landing page, relative to `Documents/`
    pub index_file: String,
    pub entries: usize,
    pub files_copied: usize,
}

pub struct Builder {
    config: DocsetConfig,
    stage: Stage,
}

impl Builder {
    pub fn new(config: DocsetConfig) -> Self {
        Self {
            config,
            stage: Stage::Start,
        }
    }

    pub fn config(&self) -> &DocsetConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// `<output>/<name>`
    pub fn docset_root(&self) -> PathBuf {
        layout::docset_root(&self.config.output, &self.config.name)
    }

    /// Build the docset.
    pub fn build(&mut self) -> Result<BuildOutput, BuildFailure> {
        let docset_root = self.docset_root();
        let Self { config, stage } = self;
        *stage = Stage::Start;

        info!(
            "Building docset {} from {}",
            docset_root.display(),
            config.javadoc.display()
        );

        advance(stage, Stage::StructureCreated, || {
            docset::create_docset_structure(&docset_root)
        })?;

        advance(stage, Stage::IconCopied, || {
            docset::copy_icon_file(config.icon.as_deref(), &docset_root)
        })?;

        let index_data = advance(stage, Stage::IndexLocated, || {
            Ok(javadoc::find_index_files(&config.javadoc)?)
        })?;

        let files_copied = advance(stage, Stage::ContentCopied, || {
            docset::copy_files(&config.javadoc, &docset_root)
        })?;

        advance(stage, Stage::MetadataWritten, || {
            let meta = DocsetMetadata {
                identifier: &config.name,
                display_name: &config.display_name,
                keyword: &config.keyword,
                index_file: &index_data.docset_index_file,
            };
            docset::write_plist(&meta, &docset_root)
        })?;

        let (entries, db_path) = advance(stage, Stage::IndexBuilt, || {
            let records =
                javadoc::find_search_index_values(&index_data.files_to_index, config.duplicates)?;
            let db_path = docset::create_index(&records, &layout::resources_dir(&docset_root))?;
            Ok((records.len(), db_path))
        })?;

        *stage = Stage::Done;
        Ok(BuildOutput {
            docset_root,
            db_path,
            index_file: index_data.docset_index_file,
            entries,
            files_copied,
        })
    }
}

/// Run one step; move to `next` on success, to `Failed` otherwise.
fn advance<T>(
    stage: &mut Stage,
    next: Stage,
    step: impl FnOnce() -> Result<T, BuildError>,
) -> Result<T, BuildFailure> {
    match step() {
        Ok(value) => {
            info!("{} done", stage.next_action());
            *stage = next;
            Ok(value)
        }
        Err(source) => {
            let failure = BuildFailure {
                stage: *stage,
                source,
            };
            *stage = Stage::Failed;
            Err(failure)
        }
    }
}

/// Build a docset and print the outcome.
///
/// The process-wide verbose flag decides whether the cause chain is printed.
pub fn run(settings: DocsetConfig) -> Result<BuildOutput, BuildFailure> {
    let result = Builder::new(settings).build();
    let verbose = config::is_verbose();
    if let Err(e) = report(&result, verbose, &mut io::stdout(), &mut io::stderr()) {
        warn!("Failed to print build outcome: {}", e);
    }
    result
}

/// Write the outcome line to `out`; with `verbose`, also write the failure's
/// stage and cause chain to `err`.
pub fn report(
    result: &Result<BuildOutput, BuildFailure>,
    verbose: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match result {
        Ok(output) => writeln!(out, "{}", format_success(output).green()),
        Err(failure) => {
            writeln!(out, "{}", format_failure(failure, false).red())?;
            if verbose {
                writeln!(err, "{}", format_failure(failure, true))?;
            }
            Ok(())
        }
    }
}

pub fn format_success(output: &BuildOutput) -> String {
    format!("Finished creating docset: {}", output.docset_root.display())
}

/// One summary line, plus the stage and full cause chain when `verbose`.
pub fn format_failure(failure: &BuildFailure, verbose: bool) -> String {
    let mut message = format!("Failed to create docset: {}", failure);
    if verbose {
        message.push_str(&format!("\n  stage: {}", failure.stage));
        let mut cause = failure.source.source();
        while let Some(err) = cause {
            message.push_str(&format!("\n  caused by: {}", err));
            cause = err.source();
        }
        message.push_str(&format!("\n  detail: {:?}", failure.source));
    }
    message
}
