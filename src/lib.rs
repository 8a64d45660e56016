//! Build Dash docsets from generated Javadoc HTML.
//!
//! ```no_run
//! use docset::{builder, DocsetConfig};
//!
//! let config = DocsetConfig::new("Guava.docset", "target/site/apidocs");
//! builder::run(config).ok();
//! ```

pub mod builder;
pub mod config;
pub mod docset;
pub mod error;
pub mod javadoc;
pub mod model;

// Re-export commonly used types
pub use builder::{BuildFailure, BuildOutput, Builder, Stage};
pub use config::DocsetConfig;
pub use error::BuildError;
pub use model::{IndexData, SymbolKind, SymbolRecord};
