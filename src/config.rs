//! Build configuration.
//!
//! Settings come from an optional TOML file, overridden by command-line
//! flags, then resolved into a [`DocsetConfig`] with defaults applied:
//!
//! ```toml
//! name = "Guava.docset"
//! javadoc = "target/site/apidocs"
//! display_name = "Guava"
//! keyword = "guava"
//! icon = "icon.png"
//! output = "dist"
//! dedupe = false
//! ```

use crate::error::ConfigError;
use crate::javadoc::DuplicatePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static VERBOSE: OnceLock<bool> = OnceLock::new();

/// Set the process-wide verbose flag. Only the first call has an effect.
pub fn set_verbose(verbose: bool) {
    let _ = VERBOSE.set(verbose);
}

/// Whether failures should be reported with their full cause chain.
pub fn is_verbose() -> bool {
    VERBOSE.get().copied().unwrap_or(false)
}

/// Raw settings, every field optional so file and flags can be layered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub name: Option<String>,
    pub javadoc: Option<PathBuf>,
    pub display_name: Option<String>,
    pub keyword: Option<String>,
    pub icon: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub dedupe: Option<bool>,
}

impl ConfigFile {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer `overrides` on top of `self`; values set in `overrides` win.
    pub fn merge(self, overrides: ConfigFile) -> Self {
        Self {
            name: overrides.name.or(self.name),
            javadoc: overrides.javadoc.or(self.javadoc),
            display_name: overrides.display_name.or(self.display_name),
            keyword: overrides.keyword.or(self.keyword),
            icon: overrides.icon.or(self.icon),
            output: overrides.output.or(self.output),
            dedupe: overrides.dedupe.or(self.dedupe),
        }
    }

    /// Apply defaults and check required settings.
    pub fn resolve(self) -> Result<DocsetConfig, ConfigError> {
        let name = self.name.ok_or(ConfigError::MissingField("name"))?;
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        let javadoc = self.javadoc.ok_or(ConfigError::MissingField("javadoc"))?;

        Ok(DocsetConfig {
            display_name: self.display_name.unwrap_or_else(|| name.clone()),
            keyword: self.keyword.unwrap_or_else(|| name.clone()),
            icon: self.icon,
            output: self.output.unwrap_or_else(|| PathBuf::from(".")),
            duplicates: if self.dedupe.unwrap_or(false) {
                DuplicatePolicy::Drop
            } else {
                DuplicatePolicy::Keep
            },
            javadoc,
            name,
        })
    }
}

/// Construction parameters of a docset build.
#[derive(Debug, Clone)]
pub struct DocsetConfig {
    /// File name of the docset to create
    pub name: String,
    /// Root directory of the Javadoc to build from
    pub javadoc: PathBuf,
    /// Name shown in the documentation browser
    pub display_name: String,
    /// Search keyword associated with the docset
    pub keyword: String,
    /// 32x32 PNG embedded in the docset, if any
    pub icon: Option<PathBuf>,
    /// Directory the docset is created in
    pub output: PathBuf,
    pub duplicates: DuplicatePolicy,
}

impl DocsetConfig {
    /// Config with defaults for everything but the required settings.
    pub fn new(name: impl Into<String>, javadoc: impl Into<PathBuf>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            keyword: name.clone(),
            name,
            javadoc: javadoc.into(),
            icon: None,
            output: PathBuf::from("."),
            duplicates: DuplicatePolicy::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_follow_name() -> Result<()> {
        let config = ConfigFile {
            name: Some("Guava.docset".into()),
            javadoc: Some("apidocs".into()),
            ..Default::default()
        }
        .resolve()?;

        assert_eq!(config.display_name, "Guava.docset");
        assert_eq!(config.keyword, "Guava.docset");
        assert_eq!(config.output, PathBuf::from("."));
        assert!(config.icon.is_none());
        assert_eq!(config.duplicates, DuplicatePolicy::Keep);
        Ok(())
    }

    #[test]
    fn test_missing_required_settings() {
        let err = ConfigFile::default().resolve().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("name")));

        let err = ConfigFile {
            name: Some("Guava".into()),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("javadoc")));

        let err = ConfigFile {
            name: Some("  ".into()),
            javadoc: Some("apidocs".into()),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName));
    }

    #[test]
    fn test_load_and_merge() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("docset.toml");
        std::fs::write(
            &path,
            r#"
name = "Guava.docset"
javadoc = "apidocs"
keyword = "guava"
dedupe = true
"#,
        )?;

        let config = ConfigFile::load(&path)?
            .merge(ConfigFile {
                keyword: Some("gv".into()),
                output: Some("dist".into()),
                ..Default::default()
            })
            .resolve()?;

        assert_eq!(config.name, "Guava.docset");
        assert_eq!(config.keyword, "gv");
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.duplicates, DuplicatePolicy::Drop);
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("docset.toml");
        std::fs::write(&path, "nmae = \"typo\"\n")?;

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        Ok(())
    }
}
